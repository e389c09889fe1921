use serde::{Deserialize, Serialize};

use crate::{Angle, Vector3};

/// Below this length a vector has no usable direction.
const DEGENERATE_LENGTH: f64 = 1e-9;

/// The field geometry, in meters. The own goal is always on the negative x side.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FieldGeometry {
    /// Distance from the center spot to either goal line
    pub half_field_length: f64,
    /// Distance from the center spot to either touch line
    pub half_field_width: f64,
    /// Distance between the goal posts
    pub goal_width: f64,
    /// Distance from the goal line to the back of the goal
    pub goal_depth: f64,
}

impl FieldGeometry {
    /// Center of our goal line.
    pub fn own_goal_center(&self) -> Vector3 {
        Vector3::new(-self.half_field_length, 0.0, 0.0)
    }

    /// Center of the opponent goal line.
    pub fn opp_goal_center(&self) -> Vector3 {
        Vector3::new(self.half_field_length, 0.0, 0.0)
    }

    pub fn field_center(&self) -> Vector3 {
        Vector3::zeros()
    }
}

impl Default for FieldGeometry {
    fn default() -> Self {
        Self {
            half_field_length: 15.0,
            half_field_width: 10.0,
            goal_width: 2.1,
            goal_depth: 0.6,
        }
    }
}

/// Projects a position onto the ground plane.
pub fn planar(v: Vector3) -> Vector3 {
    Vector3::new(v.x, v.y, 0.0)
}

/// Euclidean distance between the ground projections of two positions.
pub fn planar_distance(a: Vector3, b: Vector3) -> f64 {
    (planar(a) - planar(b)).norm()
}

/// Unit vector in the direction of `v`, or the zero vector if `v` has no direction.
pub fn normalize_or_zero(v: Vector3) -> Vector3 {
    v.try_normalize(DEGENERATE_LENGTH)
        .unwrap_or_else(Vector3::zeros)
}

/// Rotates `v` counter-clockwise about the vertical axis.
pub fn rotate_about_z(v: Vector3, angle: Angle) -> Vector3 {
    angle.rotate_vector(&v)
}

/// Counter-clockwise bearing of `to` as seen from `from` on the ground plane.
pub fn bearing(from: Vector3, to: Vector3) -> Angle {
    Angle::between_points(from, to)
}
