mod defense;
mod goalie;
mod offense;
mod selection;

pub use defense::Defense;
pub use goalie::{Goalie, GoalieState};
pub use offense::{Offense, OffensePlay};
pub use selection::Role;

use naobot_core::{StrategySettings, Vector3, WorldView};

use crate::{
    action::ActionDirective,
    avoidance::{AvoidanceRequest, CollisionAvoidance},
};

/// Everything a strategy may look at during one decision tick.
#[derive(Clone, Copy)]
pub struct StrategyCtx<'a> {
    pub world: &'a dyn WorldView,
    pub avoidance: &'a dyn CollisionAvoidance,
    pub settings: &'a StrategySettings,
}

impl<'a> StrategyCtx<'a> {
    pub fn new(
        world: &'a dyn WorldView,
        avoidance: &'a dyn CollisionAvoidance,
        settings: &'a StrategySettings,
    ) -> Self {
        Self {
            world,
            avoidance,
            settings,
        }
    }

    /// Run the collision avoidance planner against the current world.
    pub(crate) fn avoid(&self, request: AvoidanceRequest) -> Vector3 {
        self.avoidance.adjust(self.world, &request)
    }
}

pub trait Strategy {
    /// Pick the action for this tick. Only fails when the world view breaks its own
    /// contract.
    fn decide(&self, ctx: &StrategyCtx<'_>) -> anyhow::Result<ActionDirective>;
}

impl Role {
    pub fn strategy(&self) -> &'static dyn Strategy {
        match self {
            Role::Goalie => &Goalie,
            Role::Defender => &Defense,
            Role::Offense => &Offense,
        }
    }
}
