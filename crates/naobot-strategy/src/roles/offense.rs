use anyhow::anyhow;
use naobot_core::{planar, planar_distance, PlayerId, Vector3};

use super::{Strategy, StrategyCtx};
use crate::{
    action::ActionDirective, avoidance::AvoidanceRequest, potential::PotentialField,
    ranking::RankedDistanceTable,
};

/// Passes may go a little beyond the shooting range.
const PASS_RANGE_FACTOR: f64 = 1.2;

/// Proximity and collision thresholds handed to the planner, in m.
const APPROACH_AVOIDANCE: (f64, f64) = (1.0, 0.5);
const SUPPORT_AVOIDANCE: (f64, f64) = (2.0, 1.5);
const ROAM_AVOIDANCE: (f64, f64) = (1.0, 0.5);

/// Where the second and the remaining chasers wait, relative to the ball.
const FIRST_SUPPORT_OFFSET: Vector3 = Vector3::new(-1.0, -1.0, 0.0);
const SECOND_SUPPORT_OFFSET: Vector3 = Vector3::new(-1.0, 1.0, 0.0);

/// What an attacker chose to do this tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OffensePlay {
    /// We have the ball and are close enough to shoot.
    Shoot,
    /// We have the ball and a teammate is closer to the goal and in reach.
    Pass { receiver: PlayerId, target: Vector3 },
    /// We have the ball but nobody better placed to pass to.
    Dribble,
    /// We are closest to the ball but cannot kick it yet.
    Approach(Vector3),
    /// One of the other chasers, covering the ball from behind.
    Support(Vector3),
    /// Far from the ball, following the potential field.
    Roam(Vector3),
}

impl OffensePlay {
    pub fn into_directive(self, opp_goal: Vector3) -> ActionDirective {
        match self {
            OffensePlay::Shoot => ActionDirective::kick(opp_goal),
            OffensePlay::Pass { target, .. } => ActionDirective::kick(target),
            OffensePlay::Dribble => ActionDirective::dribble(opp_goal),
            OffensePlay::Approach(target)
            | OffensePlay::Support(target)
            | OffensePlay::Roam(target) => ActionDirective::GoToTarget(target),
        }
    }
}

/// Attackers: the player nearest the ball plays it, the next ones close in behind
/// it and the rest spread out over the field.
pub struct Offense;

impl Offense {
    pub fn plan(ctx: &StrategyCtx<'_>) -> anyhow::Result<OffensePlay> {
        let world = ctx.world;
        let settings = ctx.settings;
        let me = world.my_id();
        let my_pos = planar(world.my_position());
        let ball = planar(world.ball_position());
        let opp_goal = settings.field.opp_goal_center();

        let teammates = world.known_teammates();
        let ball_table = RankedDistanceTable::build(&teammates, ball);
        let goal_table = RankedDistanceTable::build(&teammates, opp_goal);

        let rank = ball_table
            .rank_of(me)
            .ok_or_else(|| anyhow!("player {me} is missing from its own ball ranking"))?;

        if rank == 0 {
            let ball_dist = planar_distance(my_pos, ball);
            if ball_dist >= settings.kicking_distance {
                log::debug!("[{me}] getting closer to the ball");
                let (proximity, collision) = APPROACH_AVOIDANCE;
                let target = ctx.avoid(AvoidanceRequest::towards(ball, proximity, collision));
                return Ok(OffensePlay::Approach(target));
            }

            if planar_distance(my_pos, opp_goal) < settings.passing_radius {
                log::debug!("[{me}] shooting");
                return Ok(OffensePlay::Shoot);
            }

            if let Some(receiver) = goal_table.nearest().filter(|e| e.id != me) {
                let pass_range = settings.passing_radius * PASS_RANGE_FACTOR;
                if planar_distance(my_pos, receiver.position) < pass_range {
                    log::debug!("[{me}] passing to {}", receiver.id);
                    return Ok(OffensePlay::Pass {
                        receiver: receiver.id,
                        target: receiver.position,
                    });
                }
            }

            log::debug!("[{me}] dribbling");
            return Ok(OffensePlay::Dribble);
        }

        if rank < settings.chase_ball_number {
            let offset = if rank == 1 {
                FIRST_SUPPORT_OFFSET
            } else {
                SECOND_SUPPORT_OFFSET
            };
            log::trace!("[{me}] supporting as chaser {rank}");
            let (proximity, collision) = SUPPORT_AVOIDANCE;
            let target = ctx.avoid(
                AvoidanceRequest::towards(ball + offset, proximity, collision).avoid_teammates(),
            );
            return Ok(OffensePlay::Support(target));
        }

        let field = PotentialField::gather(world, settings);
        log::trace!("[{me}] roaming with {} force terms", field.terms().len());
        let step = field.step_target(my_pos);
        let (proximity, collision) = ROAM_AVOIDANCE;
        let target =
            ctx.avoid(AvoidanceRequest::towards(step, proximity, collision).avoid_teammates());
        Ok(OffensePlay::Roam(target))
    }
}

impl Strategy for Offense {
    fn decide(&self, ctx: &StrategyCtx<'_>) -> anyhow::Result<ActionDirective> {
        let play = Self::plan(ctx)?;
        Ok(play.into_directive(ctx.settings.field.opp_goal_center()))
    }
}

#[cfg(test)]
mod tests {
    use naobot_core::{PlayerId, StrategySettings, WorldData};

    use super::*;
    use crate::{avoidance::SidestepPlanner, testing::RecordingPlanner};

    fn plan(world: &WorldData) -> OffensePlay {
        let settings = StrategySettings::default();
        Offense::plan(&StrategyCtx::new(world, &RecordingPlanner::default(), &settings)).unwrap()
    }

    fn striker(pos: Vector3, ball: Vector3) -> WorldData {
        WorldData::new(PlayerId::new(7), pos, ball)
    }

    #[test]
    fn shoots_when_in_range() {
        let world = striker(Vector3::new(13.0, 0.0, 0.0), Vector3::new(13.3, 0.0, 0.0))
            .with_teammate(8, Vector3::new(10.0, 0.0, 0.0));
        assert_eq!(plan(&world), OffensePlay::Shoot);
    }

    #[test]
    fn passes_to_teammate_nearer_the_goal() {
        let world = striker(Vector3::new(9.0, 0.0, 0.0), Vector3::new(9.2, 0.0, 0.0))
            .with_teammate(8, Vector3::new(13.0, 0.0, 0.0));
        assert_eq!(
            plan(&world),
            OffensePlay::Pass {
                receiver: PlayerId::new(8),
                target: Vector3::new(13.0, 0.0, 0.0),
            }
        );
    }

    #[test]
    fn dribbles_when_receiver_is_out_of_reach() {
        let world = striker(Vector3::new(0.0, 0.0, 0.0), Vector3::new(0.2, 0.0, 0.0))
            .with_teammate(8, Vector3::new(12.0, 0.0, 0.0));
        assert_eq!(plan(&world), OffensePlay::Dribble);
    }

    #[test]
    fn dribbles_when_we_are_nearest_the_goal() {
        let world = striker(Vector3::new(5.0, 0.0, 0.0), Vector3::new(5.2, 0.0, 0.0))
            .with_teammate(8, Vector3::new(3.0, 0.0, 0.0));
        assert_eq!(plan(&world), OffensePlay::Dribble);
    }

    #[test]
    fn approaches_loose_ball() {
        let ball = Vector3::new(2.0, 1.0, 0.04);
        let world = striker(Vector3::zeros(), ball).with_teammate(8, Vector3::new(-5.0, 0.0, 0.0));
        assert_eq!(plan(&world), OffensePlay::Approach(planar(ball)));
    }

    #[test]
    fn chasers_cover_either_side_behind_the_ball() {
        let ball = Vector3::new(0.0, 0.0, 0.0);
        let base = WorldData::new(PlayerId::new(8), Vector3::new(1.0, 0.0, 0.0), ball)
            .with_teammate(7, Vector3::new(0.3, 0.0, 0.0))
            .with_teammate(9, Vector3::new(2.0, 0.0, 0.0));
        assert_eq!(plan(&base), OffensePlay::Support(Vector3::new(-1.0, -1.0, 0.0)));

        let mut third = base.clone();
        third.my_id = PlayerId::new(9);
        third.my_position = Vector3::new(2.0, 0.0, 0.0);
        third.own_players = vec![];
        let third = third
            .with_teammate(7, Vector3::new(0.3, 0.0, 0.0))
            .with_teammate(8, Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(plan(&third), OffensePlay::Support(Vector3::new(-1.0, 1.0, 0.0)));
    }

    #[test]
    fn far_players_roam_one_step() {
        let world = striker(Vector3::new(-5.0, 0.0, 0.0), Vector3::new(0.0, 0.0, 0.0))
            .with_teammate(8, Vector3::new(-0.5, 0.0, 0.0))
            .with_teammate(9, Vector3::new(-1.0, 0.0, 0.0))
            .with_teammate(10, Vector3::new(-1.5, 0.0, 0.0));
        let OffensePlay::Roam(target) = plan(&world) else {
            panic!("expected roaming");
        };
        // Ball and goal both pull along +x
        assert_eq!(target, Vector3::new(-4.0, 0.0, 0.0));
    }

    #[test]
    fn unseen_teammates_do_not_take_our_rank() {
        let world = striker(Vector3::new(1.0, 0.0, 0.0), Vector3::new(1.3, 0.0, 0.0))
            .with_player(naobot_core::PlayerData::unseen(PlayerId::new(8)));
        assert_eq!(plan(&world), OffensePlay::Dribble);
    }

    #[test]
    fn missing_self_is_an_error() {
        let mut world = striker(Vector3::zeros(), Vector3::zeros());
        world.team_size = 5;
        let settings = StrategySettings::default();
        let result = Offense::plan(&StrategyCtx::new(&world, &SidestepPlanner, &settings));
        assert!(result.is_err());
    }

    fn planner_request(world: &WorldData) -> (OffensePlay, RecordingPlanner) {
        let settings = StrategySettings::default();
        let planner = RecordingPlanner::default();
        let play = Offense::plan(&StrategyCtx::new(world, &planner, &settings)).unwrap();
        (play, planner)
    }

    #[test]
    fn approach_asks_planner_to_avoid_nothing() {
        let ball = Vector3::new(2.0, 1.0, 0.04);
        let world = striker(Vector3::zeros(), ball).with_teammate(8, Vector3::new(-5.0, 0.0, 0.0));
        let (play, planner) = planner_request(&world);
        assert!(matches!(play, OffensePlay::Approach(_)));
        assert_eq!(
            planner.single_request(),
            AvoidanceRequest {
                avoid_teammates: false,
                avoid_opponents: false,
                avoid_ball: false,
                proximity_threshold: 1.0,
                collision_threshold: 0.5,
                target: planar(ball),
                keep_distance: true,
            }
        );
    }

    #[test]
    fn support_keeps_wide_clearance_from_teammates() {
        let world = WorldData::new(PlayerId::new(8), Vector3::new(1.0, 0.0, 0.0), Vector3::zeros())
            .with_teammate(7, Vector3::new(0.3, 0.0, 0.0))
            .with_teammate(9, Vector3::new(2.0, 0.0, 0.0));
        let (play, planner) = planner_request(&world);
        assert!(matches!(play, OffensePlay::Support(_)));
        assert_eq!(
            planner.single_request(),
            AvoidanceRequest {
                avoid_teammates: true,
                avoid_opponents: false,
                avoid_ball: false,
                proximity_threshold: 2.0,
                collision_threshold: 1.5,
                target: Vector3::new(-1.0, -1.0, 0.0),
                keep_distance: true,
            }
        );
    }

    #[test]
    fn roaming_avoids_teammates() {
        let world = striker(Vector3::new(-5.0, 0.0, 0.0), Vector3::new(0.0, 0.0, 0.0))
            .with_teammate(8, Vector3::new(-0.5, 0.0, 0.0))
            .with_teammate(9, Vector3::new(-1.0, 0.0, 0.0))
            .with_teammate(10, Vector3::new(-1.5, 0.0, 0.0));
        let (play, planner) = planner_request(&world);
        assert!(matches!(play, OffensePlay::Roam(_)));
        assert_eq!(
            planner.single_request(),
            AvoidanceRequest {
                avoid_teammates: true,
                avoid_opponents: false,
                avoid_ball: false,
                proximity_threshold: 1.0,
                collision_threshold: 0.5,
                target: Vector3::new(-4.0, 0.0, 0.0),
                keep_distance: true,
            }
        );
    }

    #[test]
    fn ball_plays_skip_the_planner() {
        let world = striker(Vector3::new(13.0, 0.0, 0.0), Vector3::new(13.3, 0.0, 0.0));
        let (play, planner) = planner_request(&world);
        assert_eq!(play, OffensePlay::Shoot);
        assert!(planner.requests().is_empty());
    }

    #[test]
    fn directive_kinds() {
        let goal = Vector3::new(15.0, 0.0, 0.0);
        assert_eq!(OffensePlay::Shoot.into_directive(goal), ActionDirective::kick(goal));
        assert_eq!(OffensePlay::Dribble.into_directive(goal), ActionDirective::dribble(goal));
    }
}
