use naobot_core::{Angle, FieldGeometry, PlayerId, Vector3};
use serde::{Deserialize, Serialize};

/// Where a player is placed before kickoff.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct BeamPose {
    pub position: Vector3,
    pub yaw: Angle,
}

/// Line the team up along the center line of our half, one meter apart in jersey
/// order, everybody facing the opponent goal.
pub fn beam_pose(id: PlayerId, field: &FieldGeometry) -> BeamPose {
    BeamPose {
        position: Vector3::new(-field.half_field_length + id.as_u32() as f64, 0.0, 0.0),
        yaw: Angle::ZERO,
    }
}
