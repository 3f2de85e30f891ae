//! View snapshot: per-frame camera state and derived thresholds.

use multiplane_core::config::TrafficConfig;
use multiplane_core::constants::FULL_RENDER_ZOOM_FACTOR;
use multiplane_core::types::Position;
use multiplane_host::camera::{CameraPose, CameraService};

/// Camera/view snapshot for one frame. Recomputed fresh every frame; has no
/// identity beyond the frame it was captured for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewSnapshot {
    pub camera: CameraPose,
    /// Distance within which aircraft render at full detail (meters).
    pub full_detail_distance: f64,
    /// Effective visibility for culling, if the host exposes one.
    pub effective_visibility_m: Option<f64>,
}

impl ViewSnapshot {
    /// Capture the current camera pose and derive this frame's thresholds.
    pub fn capture(camera: &dyn CameraService, config: &TrafficConfig) -> Self {
        let pose = camera.pose();
        Self {
            camera: pose,
            full_detail_distance: pose.zoom
                * FULL_RENDER_ZOOM_FACTOR
                * config.max_full_render_distance_mi,
            effective_visibility_m: camera.effective_visibility_m(),
        }
    }

    /// Squared distance from the camera to a point.
    pub fn distance_sqr_to(&self, pos: &Position) -> f64 {
        let camera = Position::new(self.camera.x, self.camera.y, self.camera.z);
        camera.distance_sqr_to(pos)
    }
}
