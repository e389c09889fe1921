//! Per-tick decision making for a single agent of a simulated soccer team.
//!
//! Every tick the agent's role is derived from its jersey number and the matching
//! strategy turns a snapshot of the world into exactly one [`ActionDirective`]. No
//! state is kept between ticks.

mod action;
mod avoidance;
mod beam;
mod potential;
mod ranking;
mod roles;

#[cfg(test)]
mod testing;

pub use action::{ActionDirective, KickKind};
pub use avoidance::{AvoidanceRequest, CollisionAvoidance, SidestepPlanner};
pub use beam::{beam_pose, BeamPose};
pub use potential::{
    ball_attraction, goal_term, opponent_repulsion, teammate_repulsion, ForceSource, ForceTerm,
    PotentialField,
};
pub use ranking::{RankEntry, RankedDistanceTable};
pub use roles::{
    Defense, Goalie, GoalieState, Offense, OffensePlay, Role, Strategy, StrategyCtx,
};

/// Decide what the agent described by `ctx.world` does this tick.
pub fn decide(ctx: &StrategyCtx<'_>) -> anyhow::Result<ActionDirective> {
    let id = ctx.world.my_id();
    let role = Role::select(id, ctx.settings);
    let action = role.strategy().decide(ctx)?;
    log::trace!("[{id}] {role}: {action:?}");
    Ok(action)
}
