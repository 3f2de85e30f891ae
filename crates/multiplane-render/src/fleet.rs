//! Fleet: the registry of tracked aircraft entities.
//!
//! Aircraft are created and destroyed by the plane-management layer through
//! this registry; the per-frame systems only read and write derived fields.

use std::collections::HashMap;

use hecs::{Entity, World};
use tracing::warn;

use multiplane_core::components::{
    ControlSurfaces, GroundClamp, InstanceState, Lights, ModelHandle, OffsetPolicy,
    RenderPosition, Transponder,
};
use multiplane_core::enums::OffsetSource;
use multiplane_core::types::{AircraftId, Orientation, Position};
use multiplane_core::updates::AircraftUpdate;

/// Registry mapping external aircraft identities to ECS entities.
#[derive(Default)]
pub struct Fleet {
    world: World,
    by_id: HashMap<AircraftId, Entity>,
}

impl Fleet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a new aircraft with default state and the given resolved model.
    /// Returns false if the identity is already tracked.
    pub fn spawn(&mut self, id: AircraftId, model: ModelHandle) -> bool {
        if self.by_id.contains_key(&id) {
            return false;
        }
        let transponder = Transponder {
            mode_s: id.default_mode_s(),
            ..Default::default()
        };
        let entity = self.world.spawn((
            id,
            model,
            Position::default(),
            Orientation::default(),
            ControlSurfaces::default(),
            Lights::default(),
            transponder,
            OffsetPolicy::default(),
            GroundClamp::default(),
            RenderPosition::default(),
            InstanceState::default(),
        ));
        self.by_id.insert(id, entity);
        true
    }

    /// Remove an aircraft. Unknown identities are ignored.
    pub fn despawn(&mut self, id: AircraftId) {
        if let Some(entity) = self.by_id.remove(&id) {
            let _ = self.world.despawn(entity);
        }
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    pub fn contains(&self, id: AircraftId) -> bool {
        self.by_id.contains_key(&id)
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Set an offset source value on one aircraft's policy.
    pub fn set_vertical_offset(&mut self, id: AircraftId, source: OffsetSource, offset: f64) {
        let Some(&entity) = self.by_id.get(&id) else {
            return;
        };
        if let Ok(mut policy) = self.world.get::<&mut OffsetPolicy>(entity) {
            policy.set(source, offset);
        }
    }

    /// Read one aircraft's per-frame instance state.
    pub fn instance_state(&self, id: AircraftId) -> Option<InstanceState> {
        let &entity = self.by_id.get(&id)?;
        self.world.get::<&InstanceState>(entity).ok().map(|s| *s)
    }

    /// Read one aircraft's raw kinematic position.
    pub fn position(&self, id: AircraftId) -> Option<Position> {
        let &entity = self.by_id.get(&id)?;
        self.world.get::<&Position>(entity).ok().map(|p| *p)
    }

    /// Read one aircraft's adjusted placement from the last frame.
    pub fn render_position(&self, id: AircraftId) -> Option<Position> {
        let &entity = self.by_id.get(&id)?;
        self.world.get::<&RenderPosition>(entity).ok().map(|p| p.0)
    }

    /// Apply a batch of update records. Absent sub-payloads leave the
    /// corresponding components untouched; records addressing an unknown
    /// aircraft are dropped.
    pub fn apply_updates(&mut self, updates: &[AircraftUpdate]) {
        for update in updates {
            let Some(&entity) = self.by_id.get(&update.id) else {
                warn!(id = update.id.0, "update for unknown aircraft dropped");
                continue;
            };

            if let Some(position) = &update.position {
                if let Ok(mut pos) = self.world.get::<&mut Position>(entity) {
                    *pos = position.position;
                }
                if let Ok(mut orientation) = self.world.get::<&mut Orientation>(entity) {
                    *orientation = position.orientation;
                }
                if let Ok(mut clamp) = self.world.get::<&mut GroundClamp>(entity) {
                    clamp.requested = position.clamp_to_terrain;
                }
            }

            if let Some(surfaces) = &update.surfaces {
                if let Ok(mut current) = self.world.get::<&mut ControlSurfaces>(entity) {
                    *current = surfaces.surfaces;
                }
                if let Ok(mut lights) = self.world.get::<&mut Lights>(entity) {
                    *lights = surfaces.lights;
                }
            }

            if let Some(surveillance) = &update.surveillance {
                if let Ok(mut transponder) = self.world.get::<&mut Transponder>(entity) {
                    transponder.mode_s = surveillance.mode_s;
                    transponder.callsign = surveillance.callsign;
                    transponder.altitude_reporting = surveillance.altitude_reporting;
                }
            }
        }
    }
}
