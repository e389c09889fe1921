//! Shared types for the naobot decision core: geometry, field description, the
//! world-model view and the strategy settings.

mod angle;
mod geom;
mod math;
mod player_id;
mod settings;
mod world;

pub use angle::*;
pub use geom::*;
pub use math::*;
pub use player_id::*;
pub use settings::*;
pub use world::*;

pub type Vector2 = nalgebra::Vector2<f64>;
pub type Vector3 = nalgebra::Vector3<f64>;
