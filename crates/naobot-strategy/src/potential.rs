use naobot_core::{normalize_or_zero, planar, planar_distance, StrategySettings, Vector3, WorldView};

const TEAMMATE_WEIGHT: f64 = -1.0;
const OPPONENT_WEIGHT: f64 = -1.5;
const GOAL_CROWDING_WEIGHT: f64 = -2.0;
const GOAL_WEIGHT: f64 = 1.0;
const BALL_WEIGHT: f64 = 1.5;

/// What a force term is caused by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ForceSource {
    Teammate,
    Opponent,
    OpponentGoal,
    Ball,
}

/// One contribution to the potential field: a pull towards `anchor` scaled by
/// `weight`. Negative weights push away.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ForceTerm {
    pub source: ForceSource,
    pub anchor: Vector3,
    pub weight: f64,
}

impl ForceTerm {
    /// Force this term exerts on a player standing at `me`.
    pub fn force(&self, me: Vector3) -> Vector3 {
        (planar(self.anchor) - planar(me)) * self.weight
    }
}

/// Repulsion from every known teammate closer than the avoidance distance.
pub fn teammate_repulsion(world: &dyn WorldView, settings: &StrategySettings) -> Vec<ForceTerm> {
    let me = world.my_position();
    let my_id = world.my_id();
    world
        .known_teammates()
        .into_iter()
        .filter(|(id, pos)| {
            *id != my_id && planar_distance(me, *pos) < settings.teammate_avoidance_distance
        })
        .map(|(_, anchor)| ForceTerm {
            source: ForceSource::Teammate,
            anchor,
            weight: TEAMMATE_WEIGHT,
        })
        .collect()
}

/// Repulsion from every known opponent closer than the avoidance distance.
pub fn opponent_repulsion(world: &dyn WorldView, settings: &StrategySettings) -> Vec<ForceTerm> {
    let me = world.my_position();
    world
        .known_opponents()
        .into_iter()
        .filter(|pos| planar_distance(me, *pos) < settings.opponent_avoidance_distance)
        .map(|anchor| ForceTerm {
            source: ForceSource::Opponent,
            anchor,
            weight: OPPONENT_WEIGHT,
        })
        .collect()
}

/// Pull towards the opponent goal, turned into a push once inside the attack radius
/// so that the box does not get crowded.
pub fn goal_term(world: &dyn WorldView, settings: &StrategySettings) -> ForceTerm {
    let goal = settings.field.opp_goal_center();
    let weight = if planar_distance(world.my_position(), goal) <= settings.attack_radius {
        GOAL_CROWDING_WEIGHT
    } else {
        GOAL_WEIGHT
    };
    ForceTerm {
        source: ForceSource::OpponentGoal,
        anchor: goal,
        weight,
    }
}

/// Pull towards the ball for players at or beyond passing range of it.
pub fn ball_attraction(world: &dyn WorldView, settings: &StrategySettings) -> Option<ForceTerm> {
    let ball = world.ball_position();
    (planar_distance(world.my_position(), ball) >= settings.passing_radius).then_some(ForceTerm {
        source: ForceSource::Ball,
        anchor: ball,
        weight: BALL_WEIGHT,
    })
}

/// The sum of all force terms acting on the agent.
#[derive(Clone, Debug, Default)]
pub struct PotentialField {
    terms: Vec<ForceTerm>,
}

impl PotentialField {
    /// Collect every force term acting on the agent this tick.
    pub fn gather(world: &dyn WorldView, settings: &StrategySettings) -> Self {
        let mut terms = teammate_repulsion(world, settings);
        terms.extend(opponent_repulsion(world, settings));
        terms.push(goal_term(world, settings));
        terms.extend(ball_attraction(world, settings));
        Self { terms }
    }

    pub fn terms(&self) -> &[ForceTerm] {
        &self.terms
    }

    /// Net force on a player at `me`.
    pub fn net_force(&self, me: Vector3) -> Vector3 {
        self.terms
            .iter()
            .fold(Vector3::zeros(), |acc, term| acc + term.force(me))
    }

    /// Where a one meter step along the net force takes a player at `me`. A
    /// balanced field leaves the player where it is.
    pub fn step_target(&self, me: Vector3) -> Vector3 {
        planar(me) + normalize_or_zero(self.net_force(me))
    }
}
