use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::{Vector2, Vector3};

/// An angle in radians, always in (-pi, pi]. Bearings and turn commands use this
/// type so that wrapping is never forgotten:
///
/// ```
/// # use naobot_core::Angle;
/// let a = Angle::from_degrees(170.0);
/// let b = Angle::from_degrees(20.0);
/// assert!(((a + b).degrees() + 170.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialOrd, Serialize, Deserialize)]
pub struct Angle(f64);

impl Angle {
    pub const PI_2: Angle = Angle(PI / 2.0);
    pub const ZERO: Angle = Angle(0.0);

    /// Create a new angle from radians.
    pub fn from_radians(radians: f64) -> Self {
        Angle(wrap_angle(radians))
    }

    /// Create a new angle from degrees.
    pub fn from_degrees(degrees: f64) -> Self {
        Self::from_radians(degrees.to_radians())
    }

    /// Counter-clockwise bearing of point `b` as seen from point `a`, ignoring z.
    pub fn between_points(a: Vector3, b: Vector3) -> Self {
        Self::from_radians((b.y - a.y).atan2(b.x - a.x))
    }

    /// Bearing of a vector given in some frame, ignoring z.
    pub fn of_vector(v: &Vector3) -> Self {
        Self::from_radians(v.y.atan2(v.x))
    }

    /// Get the angle in radians.
    pub fn radians(&self) -> f64 {
        self.0
    }

    /// Get the angle in degrees.
    pub fn degrees(&self) -> f64 {
        self.0.to_degrees()
    }

    /// Rotate a vector counter-clockwise about the vertical axis. The z component is
    /// left untouched.
    pub fn rotate_vector(&self, v: &Vector3) -> Vector3 {
        let rot = nalgebra::Rotation2::new(self.0);
        let xy = rot * Vector2::new(v.x, v.y);
        Vector3::new(xy.x, xy.y, v.z)
    }
}

impl std::ops::Add for Angle {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Angle::from_radians(self.0 + other.0)
    }
}

impl std::ops::Sub for Angle {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Angle::from_radians(self.0 - other.0)
    }
}

impl std::ops::Neg for Angle {
    type Output = Self;

    fn neg(self) -> Self {
        Angle::from_radians(-self.0)
    }
}

impl std::ops::Mul<Vector3> for Angle {
    type Output = Vector3;

    fn mul(self, v: Vector3) -> Vector3 {
        self.rotate_vector(&v)
    }
}

impl std::fmt::Display for Angle {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:.1} deg", self.degrees())
    }
}

impl Default for Angle {
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialEq for Angle {
    fn eq(&self, other: &Self) -> bool {
        let diff: f64 = (self.radians() - other.radians()).abs();
        const TOLERANCE: f64 = 1e-5;
        !(TOLERANCE..=(2.0 * PI - TOLERANCE)).contains(&diff)
    }
}

fn wrap_angle(angle: f64) -> f64 {
    let mut angle = angle % (2.0 * PI);
    if angle <= -PI {
        angle += 2.0 * PI;
    } else if angle > PI {
        angle -= 2.0 * PI;
    }
    angle
}
