//! Fundamental geometric and identity types.

use serde::{Deserialize, Serialize};

/// 3D position in host simulation space (meters, Cartesian).
/// x = East, y = Up (altitude), z = South, matching the host's OpenGL frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Aircraft attitude in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Orientation {
    pub roll: f64,
    pub pitch: f64,
    pub heading: f64,
}

/// Opaque identity of a tracked aircraft, assigned by the plane-management
/// layer that owns creation and destruction.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct AircraftId(pub u64);

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Squared distance to another position. Downstream comparisons only
    /// need relative ordering, so the square root is never taken.
    pub fn distance_sqr_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        dx * dx + dy * dy + dz * dz
    }
}

impl AircraftId {
    /// Default transponder code: the low 24 bits of the identity, the width
    /// of a mode-S address.
    pub fn default_mode_s(&self) -> u32 {
        (self.0 & 0x00ff_ffff) as u32
    }
}
