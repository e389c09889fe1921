use naobot_core::{PlayerId, StrategySettings};
use serde::{Deserialize, Serialize};

/// The behavior an agent follows for the whole match.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Goalie,
    Defender,
    Offense,
}

impl Role {
    /// Jersey 1 keeps goal, jerseys up to `defense_max_index` defend and everybody
    /// else attacks.
    pub fn select(id: PlayerId, settings: &StrategySettings) -> Self {
        if id == PlayerId::KEEPER {
            Role::Goalie
        } else if id.as_u32() <= settings.defense_max_index {
            Role::Defender
        } else {
            Role::Offense
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Goalie => write!(f, "Goalie"),
            Role::Defender => write!(f, "Defender"),
            Role::Offense => write!(f, "Offense"),
        }
    }
}
