use serde::{Deserialize, Serialize};

use crate::{planar, Angle, PlayerId, Vector3};

/// Default number of jersey slots per team.
pub const DEFAULT_TEAM_SIZE: u32 = 11;

/// Read-only view of the world model for one agent and one tick.
///
/// Positions of other players are `None` when the player was not seen recently
/// enough to be trusted. The own position is always known.
pub trait WorldView {
    /// Our own jersey number.
    fn my_id(&self) -> PlayerId;

    fn my_position(&self) -> Vector3;

    fn ball_position(&self) -> Vector3;

    /// Position of the teammate wearing `id`, if valid this tick.
    fn teammate(&self, id: PlayerId) -> Option<Vector3>;

    /// Position of the opponent in slot `index` (zero-based), if valid this tick.
    fn opponent(&self, index: usize) -> Option<Vector3>;

    /// Transform a global position into our local frame (x forward, y left).
    fn global_to_local(&self, pos: Vector3) -> Vector3;

    /// Number of jersey slots per team.
    fn team_size(&self) -> u32 {
        DEFAULT_TEAM_SIZE
    }

    /// All teammates with a valid position, including ourselves, in jersey order.
    /// Positions are projected onto the ground plane.
    fn known_teammates(&self) -> Vec<(PlayerId, Vector3)> {
        let me = self.my_id();
        (1..=self.team_size())
            .map(PlayerId::new)
            .filter_map(|id| {
                let pos = if id == me {
                    Some(self.my_position())
                } else {
                    self.teammate(id)
                };
                pos.map(|p| (id, planar(p)))
            })
            .collect()
    }

    /// All opponents with a valid position, projected onto the ground plane.
    fn known_opponents(&self) -> Vec<Vector3> {
        (0..self.team_size() as usize)
            .filter_map(|index| self.opponent(index))
            .map(planar)
            .collect()
    }
}

/// A player as seen in a world snapshot.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PlayerData {
    pub id: PlayerId,
    /// Global position, or None if the player is not currently tracked
    pub position: Option<Vector3>,
}

impl PlayerData {
    pub fn seen(id: PlayerId, position: Vector3) -> Self {
        Self {
            id,
            position: Some(position),
        }
    }

    pub fn unseen(id: PlayerId) -> Self {
        Self { id, position: None }
    }
}

/// An owned snapshot of the world for a single agent and tick.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct WorldData {
    pub my_id: PlayerId,
    pub my_position: Vector3,
    /// Our heading, counter-clockwise from the global +x axis
    pub my_yaw: Angle,
    pub ball: Vector3,
    /// Teammates other than ourselves. Our own entry, if present, is ignored.
    pub own_players: Vec<PlayerData>,
    /// Opponents, indexed by slot
    pub opp_players: Vec<PlayerData>,
    pub team_size: u32,
}

impl WorldData {
    /// A snapshot with only ourselves and the ball on the field.
    pub fn new(my_id: PlayerId, my_position: Vector3, ball: Vector3) -> Self {
        Self {
            my_id,
            my_position,
            my_yaw: Angle::default(),
            ball,
            own_players: Vec::new(),
            opp_players: Vec::new(),
            team_size: DEFAULT_TEAM_SIZE,
        }
    }

    pub fn with_yaw(mut self, yaw: Angle) -> Self {
        self.my_yaw = yaw;
        self
    }

    pub fn with_teammate(mut self, id: u32, position: Vector3) -> Self {
        self.own_players
            .push(PlayerData::seen(PlayerId::new(id), position));
        self
    }

    pub fn with_opponent(mut self, position: Vector3) -> Self {
        let id = PlayerId::new(self.opp_players.len() as u32 + 1);
        self.opp_players.push(PlayerData::seen(id, position));
        self
    }

    pub fn with_player(mut self, player: PlayerData) -> Self {
        self.own_players.push(player);
        self
    }
}

impl WorldView for WorldData {
    fn my_id(&self) -> PlayerId {
        self.my_id
    }

    fn my_position(&self) -> Vector3 {
        self.my_position
    }

    fn ball_position(&self) -> Vector3 {
        self.ball
    }

    fn teammate(&self, id: PlayerId) -> Option<Vector3> {
        if id == self.my_id {
            return Some(self.my_position);
        }
        self.own_players
            .iter()
            .find(|p| p.id == id)
            .and_then(|p| p.position)
    }

    fn opponent(&self, index: usize) -> Option<Vector3> {
        self.opp_players.get(index).and_then(|p| p.position)
    }

    fn global_to_local(&self, pos: Vector3) -> Vector3 {
        (-self.my_yaw).rotate_vector(&(pos - self.my_position))
    }

    fn team_size(&self) -> u32 {
        self.team_size
    }
}
