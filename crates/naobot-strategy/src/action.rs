use naobot_core::{Angle, Vector3};
use serde::{Deserialize, Serialize};

/// How the ball should be struck.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum KickKind {
    /// A full kick, used for shots, passes and clearances
    Forward,
    /// Short touches that keep the ball close while walking
    Dribble,
}

/// The single output of a decision tick, handed to the motion layer.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub enum ActionDirective {
    /// Kick the ball towards a global position.
    Kick { kind: KickKind, target: Vector3 },
    /// Walk to a global position.
    GoToTarget(Vector3),
    /// Walk by an offset in the local frame while turning by `turn`.
    GoToTargetRelative { offset: Vector3, turn: Angle },
    /// Stand still.
    Stand,
}

impl ActionDirective {
    pub fn kick(target: Vector3) -> Self {
        ActionDirective::Kick {
            kind: KickKind::Forward,
            target,
        }
    }

    pub fn dribble(target: Vector3) -> Self {
        ActionDirective::Kick {
            kind: KickKind::Dribble,
            target,
        }
    }

    /// The global position this directive moves towards or kicks at, if any.
    pub fn target(&self) -> Option<Vector3> {
        match self {
            ActionDirective::Kick { target, .. } | ActionDirective::GoToTarget(target) => {
                Some(*target)
            }
            ActionDirective::GoToTargetRelative { .. } | ActionDirective::Stand => None,
        }
    }
}
