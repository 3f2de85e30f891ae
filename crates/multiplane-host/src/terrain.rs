//! Terrain probe seam.

/// Result of a successful terrain probe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceHit {
    /// Terrain surface elevation at the probed point (meters, view space y).
    pub surface_y: f64,
}

/// Synchronous terrain query supplied by the host.
///
/// `None` means the probe missed or the capability is unavailable; callers
/// skip clamping for that aircraft this frame rather than failing.
pub trait TerrainProbe {
    fn probe(&mut self, x: f64, y: f64, z: f64) -> Option<SurfaceHit>;
}
