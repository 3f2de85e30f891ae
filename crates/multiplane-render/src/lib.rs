//! Per-frame traffic pipeline for MULTIPLANE.
//!
//! Owns the hecs world of tracked aircraft, runs the per-frame systems
//! (view snapshot, instance update, surveillance allocation) exactly once
//! per host frame tick, and drives the bounded surveillance channel.

pub mod engine;
pub mod fleet;
pub mod lifecycle;
pub mod systems;

pub use multiplane_core as core;
pub use multiplane_host as host;

pub use engine::{HostServices, TrafficPipeline};
pub use fleet::Fleet;
pub use lifecycle::OverrideHooks;
