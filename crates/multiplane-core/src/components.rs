//! ECS components for aircraft entities.
//!
//! Components are plain data structs; pipeline logic lives in systems.

use serde::{Deserialize, Serialize};

use crate::enums::OffsetSource;
use crate::types::Position;

/// Vertical offset policy: one stored value per source, with the effective
/// value drawn from the highest-precedence source ever set.
///
/// Precedence is monotonically non-decreasing over the aircraft's lifetime:
/// setting a lower-precedence source updates its stored value but never
/// demotes the active source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OffsetPolicy {
    active: OffsetSource,
    stored: [f64; OffsetSource::COUNT],
}

impl OffsetPolicy {
    /// Store an offset for the given source, promoting the active source if
    /// the new source outranks it. Setting `None` is a no-op.
    pub fn set(&mut self, source: OffsetSource, offset: f64) {
        if source == OffsetSource::None {
            return;
        }
        self.stored[source.index()] = offset;
        if source > self.active {
            self.active = source;
        }
    }

    /// The currently effective vertical offset (meters).
    pub fn effective(&self) -> f64 {
        match self.active {
            OffsetSource::None => 0.0,
            src => self.stored[src.index()],
        }
    }

    /// The source currently supplying the effective offset.
    pub fn active_source(&self) -> OffsetSource {
        self.active
    }
}

/// Aircraft exterior light state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lights {
    pub beacon: bool,
    pub strobe: bool,
    pub nav: bool,
    pub landing: bool,
    pub taxi: bool,
}

/// Control surface and gear animation ratios, all in 0.0..=1.0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlSurfaces {
    pub gear_ratio: f64,
    pub flap_ratio: f64,
    pub spoiler_ratio: f64,
    pub speedbrake_ratio: f64,
    pub thrust_ratio: f64,
}

/// Transponder state reported to the surveillance channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transponder {
    /// 24-bit mode-S address.
    pub mode_s: u32,
    /// Callsign, space-padded.
    pub callsign: [u8; 8],
    /// Whether the aircraft reports altitude.
    pub altitude_reporting: bool,
}

impl Default for Transponder {
    fn default() -> Self {
        Self {
            mode_s: 0,
            callsign: *b"        ",
            altitude_reporting: true,
        }
    }
}

/// Per-aircraft request to clamp the rendered position to the terrain
/// surface. Carried by the position update payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundClamp {
    pub requested: bool,
}

/// Opaque handle to a resolved renderable model. Model matching and catalog
/// management happen upstream; the pipeline only carries the handle through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelHandle(pub u64);

/// Final rendered placement for the frame: the raw position with the
/// vertical offset and terrain clamp applied. Derived by the instance-update
/// pass; the raw kinematic position is never touched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderPosition(pub Position);

/// Per-frame derived instance state. Overwritten on every instance-update
/// pass; never persisted across a pipeline rebuild.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InstanceState {
    /// Squared distance to the camera this frame.
    pub distance_sqr: f64,
    /// Whether the position was snapped up to the terrain surface.
    pub clamped: bool,
    /// Whether the aircraft is culled by effective visibility.
    pub culled: bool,
    /// Whether the aircraft is within surveillance reporting range.
    pub surveillance_eligible: bool,
    /// Whether the aircraft is close enough for full-detail rendering.
    pub full_detail: bool,
}
