use naobot_core::{
    planar, planar_distance, project_onto_vertical, Angle, FieldGeometry, Vector2, Vector3,
};

use super::{Strategy, StrategyCtx};
use crate::action::ActionDirective;

/// The keeper's decision for this tick. Derived from scratch every tick, so there is
/// no state to get stuck in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GoalieState {
    /// The ball is at our feet, kick it away.
    Clear,
    /// In position and facing the ball.
    Stand,
    /// In position, turning towards the ball.
    TurnToFace { offset: Vector3, turn: Angle },
    /// Walking to the spot on the goal line.
    Approach(Vector3),
}

impl GoalieState {
    pub fn into_directive(self, field: &FieldGeometry) -> ActionDirective {
        match self {
            GoalieState::Clear => {
                ActionDirective::kick(Vector3::new(-field.half_field_length / 2.0, 0.0, 0.0))
            }
            GoalieState::Stand => ActionDirective::Stand,
            GoalieState::TurnToFace { offset, turn } => {
                ActionDirective::GoToTargetRelative { offset, turn }
            }
            GoalieState::Approach(target) => ActionDirective::GoToTarget(target),
        }
    }
}

/// The keeper walks along the goal line so that it stays between the ball and the
/// back of the goal.
pub struct Goalie;

impl Goalie {
    /// Spot on the goal line that covers the ball.
    ///
    /// The ball is projected through a point `goal_depth` behind the goal line onto
    /// the goal line itself, then clamped to the posts.
    pub fn guard_position(field: &FieldGeometry, ball: Vector3) -> Vector3 {
        let line_x = -field.half_field_length;
        let apex = Vector2::new(line_x - field.goal_depth, 0.0);
        let half_width = field.goal_width / 2.0;

        let y = project_onto_vertical(apex, Vector2::new(ball.x, ball.y), line_x)
            // Ball level with the back of the goal: hug the post on its side
            .unwrap_or_else(|| {
                if ball.y == 0.0 {
                    0.0
                } else {
                    ball.y.signum() * half_width
                }
            });
        Vector3::new(line_x, y.clamp(-half_width, half_width), 0.0)
    }

    pub fn plan(ctx: &StrategyCtx<'_>) -> GoalieState {
        let world = ctx.world;
        let settings = &ctx.settings.goalie;
        let me = world.my_position();
        let ball = planar(world.ball_position());
        let target = Self::guard_position(&ctx.settings.field, ball);

        let local_ball = world.global_to_local(world.ball_position());
        let ball_bearing = Angle::of_vector(&local_ball);
        let target_dist = planar_distance(me, target);

        if planar_distance(me, ball) < settings.clear_distance {
            log::debug!("[{}] keeper clearing", world.my_id());
            GoalieState::Clear
        } else if target_dist < settings.stand_distance
            && ball_bearing.degrees().abs() <= settings.facing_tolerance
        {
            GoalieState::Stand
        } else if target_dist < settings.turn_distance {
            GoalieState::TurnToFace {
                offset: world.global_to_local(target),
                turn: ball_bearing,
            }
        } else {
            GoalieState::Approach(target)
        }
    }
}

impl Strategy for Goalie {
    fn decide(&self, ctx: &StrategyCtx<'_>) -> anyhow::Result<ActionDirective> {
        let state = Self::plan(ctx);
        log::trace!("[{}] keeper state {:?}", ctx.world.my_id(), state);
        Ok(state.into_directive(&ctx.settings.field))
    }
}
