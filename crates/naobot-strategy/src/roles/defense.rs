use naobot_core::{bearing, planar, planar_distance, rotate_about_z, Angle, PlayerId, Vector3};

use super::{Strategy, StrategyCtx};
use crate::{action::ActionDirective, avoidance::AvoidanceRequest};

/// Proximity and collision thresholds for walking to the arc, in m.
const ARC_AVOIDANCE: (f64, f64) = (0.2, 0.1);

/// Defenders hold a slot on an arc in front of our goal that turns with the ball, and
/// clear the ball towards the center when it comes close.
pub struct Defense;

impl Defense {
    /// The raw spot on the defensive arc for defender `id`, before collision avoidance.
    ///
    /// The arc is centered `arc_offset` in front of our goal. The cone of
    /// `cone_angle` degrees faces the ball as seen from the goal center, and the
    /// defenders are spread evenly across it with jersey 2 on the left-most slot.
    pub fn arc_position(ctx: &StrategyCtx<'_>, id: PlayerId) -> Vector3 {
        let settings = ctx.settings;
        let defense = &settings.defense;
        let goal = settings.field.own_goal_center();
        let arc_center = goal + Vector3::new(defense.arc_offset, 0.0, 0.0);

        let ball_bearing = bearing(goal, ctx.world.ball_position());
        let defenders = settings.number_of_defenders();
        let spacing = if defenders > 1 {
            defense.cone_angle / (defenders - 1) as f64
        } else {
            0.0
        };
        let first_slot = if defenders > 1 {
            (180.0 - defense.cone_angle) / 2.0
        } else {
            90.0
        };
        let index = id.as_u32().saturating_sub(2) as f64;

        // Start straight left of the arc center and turn clockwise into the cone
        let slot = ball_bearing - Angle::from_degrees(first_slot + spacing * index);
        arc_center + rotate_about_z(Vector3::new(0.0, defense.arc_radius, 0.0), slot)
    }
}

impl Strategy for Defense {
    fn decide(&self, ctx: &StrategyCtx<'_>) -> anyhow::Result<ActionDirective> {
        let world = ctx.world;
        let me = world.my_id();
        let raw = Self::arc_position(ctx, me);
        let (proximity, collision) = ARC_AVOIDANCE;
        let target =
            ctx.avoid(AvoidanceRequest::towards(raw, proximity, collision).avoid_teammates());

        let ball = planar(world.ball_position());
        if planar_distance(world.my_position(), ball) < ctx.settings.defense.clear_distance {
            log::debug!("[{me}] clearing the ball");
            return Ok(ActionDirective::kick(ctx.settings.field.field_center()));
        }
        Ok(ActionDirective::GoToTarget(target))
    }
}
