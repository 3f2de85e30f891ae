//! Surveillance slot allocation: bounded top-K by distance.
//!
//! Every frame the allocator starts empty, collects one candidate record per
//! surveillance-eligible aircraft, ranks them by ascending distance, and
//! publishes the nearest `capacity` into the downstream channel. Nothing is
//! carried over between frames, so aircraft appearing or disappearing can
//! never leave a stale slot behind.

use multiplane_host::channel::{ContactSlot, SurveillanceChannel};

/// Candidate entry for one slot. Cleared at the start of every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactRecord {
    /// Sort key: squared distance to the camera.
    pub distance_sqr: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub mode_s: u32,
}

/// Collects surveillance candidates during the per-aircraft pass and
/// publishes the ranked, truncated subset at the end of the frame.
#[derive(Debug, Default)]
pub struct SlotAllocator {
    records: Vec<ContactRecord>,
}

impl SlotAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all records from the previous frame.
    pub fn begin_frame(&mut self) {
        self.records.clear();
    }

    /// Append a candidate produced by the instance-update pass.
    pub fn collect(&mut self, record: ContactRecord) {
        self.records.push(record);
    }

    /// Number of candidates collected this frame.
    pub fn collected(&self) -> usize {
        self.records.len()
    }

    /// Rank candidates by ascending distance, truncate to the channel
    /// capacity, and write slots 1..=n plus the active count (n + 1, slot 0
    /// being the observer). Candidates beyond capacity are silently dropped:
    /// the nearest aircraft always win.
    pub fn publish(&mut self, channel: &mut dyn SurveillanceChannel) {
        // Stable sort keeps insertion order for equal distances.
        self.records
            .sort_by(|a, b| a.distance_sqr.total_cmp(&b.distance_sqr));

        let count = self.records.len().min(channel.capacity());
        for (i, record) in self.records[..count].iter().enumerate() {
            channel.write_slot(
                i + 1,
                &ContactSlot {
                    x: record.x,
                    y: record.y,
                    z: record.z,
                    mode_s: record.mode_s,
                },
            );
        }
        channel.set_active_count(count + 1);
    }
}
