//! Frame engine — the single synchronization point of the pipeline.
//!
//! `TrafficPipeline` owns the fleet, the slot allocator, and the hook
//! lifecycle, and runs the per-frame pass exactly once per unique host
//! tick: reset → view snapshot → instance update over every aircraft →
//! surveillance publish. All shared per-frame state lives here and is
//! passed by reference into each system call.

use multiplane_core::components::ModelHandle;
use multiplane_core::config::TrafficConfig;
use multiplane_core::types::AircraftId;
use multiplane_core::updates::AircraftUpdate;
use multiplane_host::camera::CameraService;
use multiplane_host::channel::SurveillanceChannel;
use multiplane_host::switch::OverrideSwitch;
use multiplane_host::terrain::TerrainProbe;

use crate::fleet::Fleet;
use crate::lifecycle::OverrideHooks;
use crate::systems;
use crate::systems::surveillance::SlotAllocator;
use crate::systems::view::ViewSnapshot;

/// Host services consumed during one frame, borrowed from the caller.
pub struct HostServices<'a> {
    pub terrain: &'a mut dyn TerrainProbe,
    pub camera: &'a dyn CameraService,
    pub channel: &'a mut dyn SurveillanceChannel,
}

/// The traffic pipeline. Owns all per-frame mutable state.
pub struct TrafficPipeline {
    fleet: Fleet,
    allocator: SlotAllocator,
    hooks: OverrideHooks,
    config: TrafficConfig,
    /// Tick id of the last processed frame, for the dedup gate.
    last_tick: Option<u64>,
}

impl TrafficPipeline {
    pub fn new(config: TrafficConfig) -> Self {
        Self {
            fleet: Fleet::new(),
            allocator: SlotAllocator::new(),
            hooks: OverrideHooks::new(),
            config,
            last_tick: None,
        }
    }

    /// Run the per-frame pass for the given host tick. Re-invocation within
    /// the same tick (e.g. from a second render phase) is a no-op.
    pub fn run_frame(&mut self, tick: u64, services: &mut HostServices) {
        if self.last_tick == Some(tick) {
            return;
        }
        self.last_tick = Some(tick);

        self.allocator.begin_frame();

        if self.fleet.is_empty() {
            // Nothing to report: still publish so the channel shows only
            // the observer.
            self.allocator.publish(services.channel);
            return;
        }

        let view = ViewSnapshot::capture(services.camera, &self.config);
        systems::instance::run(
            self.fleet.world_mut(),
            &view,
            services.terrain,
            &self.config,
            &mut self.allocator,
        );
        self.allocator.publish(services.channel);
    }

    /// Register the surveillance override. Idempotent.
    pub fn enable(&mut self, switch: &mut dyn OverrideSwitch) {
        self.hooks.enable(switch);
    }

    /// Unregister the surveillance override. Idempotent.
    pub fn disable(&mut self, switch: &mut dyn OverrideSwitch) {
        self.hooks.disable(switch);
    }

    pub fn is_enabled(&self) -> bool {
        self.hooks.is_enabled()
    }

    // --- Plane-management facade ---

    pub fn spawn_aircraft(&mut self, id: AircraftId, model: ModelHandle) -> bool {
        self.fleet.spawn(id, model)
    }

    pub fn despawn_aircraft(&mut self, id: AircraftId) {
        self.fleet.despawn(id);
    }

    pub fn aircraft_count(&self) -> usize {
        self.fleet.len()
    }

    /// Apply a batch of aircraft updates from the plane-management layer.
    pub fn apply_updates(&mut self, updates: &[AircraftUpdate]) {
        self.fleet.apply_updates(updates);
    }

    pub fn config(&self) -> &TrafficConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: TrafficConfig) {
        self.config = config;
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn fleet_mut(&mut self) -> &mut Fleet {
        &mut self.fleet
    }
}
