//! Camera and view seam.

/// Camera position and zoom for the frame being rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CameraPose {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub zoom: f64,
}

/// Per-frame camera/view queries supplied by the host.
pub trait CameraService {
    fn pose(&self) -> CameraPose;

    /// Current effective visibility distance (meters), if the host exposes
    /// one. `None` disables visual culling entirely.
    fn effective_visibility_m(&self) -> Option<f64>;
}
