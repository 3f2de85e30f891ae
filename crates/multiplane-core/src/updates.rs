//! Bulk aircraft update records, the feed through which the plane-management
//! layer pushes new state into the pipeline each frame.
//!
//! Every sub-payload is optional; an absent payload leaves the corresponding
//! components untouched. This replaces the raw struct-size guard of older
//! C-style feeds: forward compatibility comes from the optional fields.

use serde::{Deserialize, Serialize};

use crate::components::{ControlSurfaces, Lights};
use crate::types::{AircraftId, Orientation, Position};

/// One aircraft's update for the current frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AircraftUpdate {
    pub id: AircraftId,
    pub position: Option<PositionUpdate>,
    pub surfaces: Option<SurfacesUpdate>,
    pub surveillance: Option<SurveillanceUpdate>,
}

/// New kinematic state plus the terrain-clamp request.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PositionUpdate {
    pub position: Position,
    pub orientation: Orientation,
    /// Request clamping of the rendered position to the terrain surface.
    pub clamp_to_terrain: bool,
}

/// Control surface ratios and light state.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SurfacesUpdate {
    pub surfaces: ControlSurfaces,
    pub lights: Lights,
}

/// Transponder state for surveillance reporting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SurveillanceUpdate {
    pub mode_s: u32,
    pub callsign: [u8; 8],
    pub altitude_reporting: bool,
}
