//! Host service seams for MULTIPLANE.
//!
//! The host simulation platform is consumed through small synchronous
//! traits: terrain probing, camera/view queries, the named data-register
//! bank, the surveillance channel built on top of it, and the override
//! switch. Every capability is optional at runtime; a missing capability
//! degrades fidelity, never correctness.

pub use multiplane_core as core;

pub mod camera;
pub mod channel;
pub mod registers;
pub mod switch;
pub mod terrain;

pub use camera::{CameraPose, CameraService};
pub use channel::{build_channel, ContactSlot, LegacyChannel, ModernChannel, SurveillanceChannel};
pub use registers::{MemoryBank, RegisterBank, RegisterId};
pub use switch::{OverrideSwitch, RegisterSwitch};
pub use terrain::{SurfaceHit, TerrainProbe};
