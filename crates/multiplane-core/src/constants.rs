//! Pipeline constants and tuning parameters.

/// Maximum range at which an aircraft is reported to surveillance (meters).
/// 40 nautical miles, the traditional traffic-display horizon.
pub const SURVEILLANCE_RANGE_M: f64 = 40.0 * 1852.0;

/// Zoom-to-meters factor for the full-detail render distance.
/// The configured distance is in statute miles; the host camera zoom scales
/// it into view space.
pub const FULL_RENDER_ZOOM_FACTOR: f64 = 5280.0 / 3.2;

/// Fixed slot capacity of the modern surveillance channel.
pub const MODERN_CHANNEL_CAPACITY: usize = 63;

/// Slot index reserved for the observer's own aircraft by the host contract.
/// Published contacts always start at the next index.
pub const OBSERVER_SLOT: usize = 0;

/// Default full-detail rendering distance (statute miles).
pub const DEFAULT_FULL_RENDER_DISTANCE_MI: f64 = 3.0;
