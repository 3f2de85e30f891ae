//! Instance update: per-aircraft placement and visibility flags.
//!
//! Resolves the vertical offset, clamps to terrain, computes the camera
//! distance, and sets the eligibility/culling flags — exactly once per
//! aircraft per frame. The raw kinematic position is read-only; the
//! adjusted placement lands in `RenderPosition`. Surveillance-eligible
//! aircraft are handed to the slot allocator as candidate records.

use hecs::World;

use multiplane_core::components::{
    GroundClamp, InstanceState, OffsetPolicy, RenderPosition, Transponder,
};
use multiplane_core::config::TrafficConfig;
use multiplane_core::types::Position;
use multiplane_host::terrain::TerrainProbe;

use crate::systems::surveillance::{ContactRecord, SlotAllocator};
use crate::systems::view::ViewSnapshot;

/// Run the instance-update pass over every tracked aircraft.
pub fn run(
    world: &mut World,
    view: &ViewSnapshot,
    terrain: &mut dyn TerrainProbe,
    config: &TrafficConfig,
    allocator: &mut SlotAllocator,
) {
    let surveillance_range_sqr = config.surveillance_range_m * config.surveillance_range_m;

    for (_entity, (pos, render, policy, clamp, transponder, state)) in world.query_mut::<(
        &Position,
        &mut RenderPosition,
        &OffsetPolicy,
        &GroundClamp,
        &Transponder,
        &mut InstanceState,
    )>() {
        let mut draw = *pos;

        // 1. Vertical offset, before any terrain adjustment. A negative
        //    scale disables offsetting entirely.
        if config.offset_scale >= 0.0 {
            draw.y += config.offset_scale * policy.effective();
        }

        // 2. Terrain clamp: global enable AND per-aircraft request. A probe
        //    miss skips clamping for this frame.
        state.clamped = false;
        if config.enable_surface_clamping && clamp.requested {
            if let Some(hit) = terrain.probe(draw.x, draw.y, draw.z) {
                let min_y = hit.surface_y + policy.effective();
                if draw.y < min_y {
                    draw.y = min_y;
                    state.clamped = true;
                }
            }
        }

        // 3. Camera distance, squared only.
        state.distance_sqr = view.distance_sqr_to(&draw);

        // 4. Surveillance eligibility.
        state.surveillance_eligible = state.distance_sqr <= surveillance_range_sqr;

        // 5. Visual culling: strict comparison, so a contact exactly at the
        //    visibility limit still renders. No visibility source, no culling.
        state.culled = match view.effective_visibility_m {
            Some(vis) => state.distance_sqr > vis * vis,
            None => false,
        };

        // 6. Full-detail threshold from the view snapshot.
        state.full_detail =
            state.distance_sqr <= view.full_detail_distance * view.full_detail_distance;

        if state.surveillance_eligible {
            allocator.collect(ContactRecord {
                distance_sqr: state.distance_sqr,
                x: draw.x,
                y: draw.y,
                z: draw.z,
                mode_s: transponder.mode_s,
            });
        }

        render.0 = draw;
    }
}
