//! Surveillance channel: the bounded downstream register block through which
//! nearby aircraft are reported to the host's traffic display.
//!
//! Two register layouts exist. The legacy layout multiplexes a small number
//! of per-slot scalar registers whose count is only discoverable by probing
//! names; the modern layout is a fixed 63-slot array block with mode-S
//! identifiers. Both sit behind [`SurveillanceChannel`] so the ranking and
//! truncation logic upstream is written once.

use tracing::{debug, warn};

use multiplane_core::constants::{MODERN_CHANNEL_CAPACITY, OBSERVER_SLOT};
use multiplane_core::enums::ChannelVariant;

use crate::registers::{RegisterBank, RegisterId};

/// One published contact: position plus transponder identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ContactSlot {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub mode_s: u32,
}

/// Fixed-capacity slot register block.
///
/// Slot 0 is reserved for the observer's own aircraft by the host contract;
/// writers start at slot 1. Writing a slot index at or beyond `capacity + 1`
/// is a caller bug and is ignored.
pub trait SurveillanceChannel {
    /// Number of contact slots available beyond the observer slot.
    fn capacity(&self) -> usize;

    /// Write one contact into the given slot (1-based; slot 0 is the observer).
    fn write_slot(&mut self, index: usize, slot: &ContactSlot);

    /// Set the active-count register: contacts plus the observer.
    fn set_active_count(&mut self, count: usize);
}

/// Build the channel implementation selected by configuration.
pub fn build_channel<B: RegisterBank + 'static>(
    variant: ChannelVariant,
    bank: B,
) -> Box<dyn SurveillanceChannel> {
    match variant {
        ChannelVariant::Legacy => Box::new(LegacyChannel::discover(bank)),
        ChannelVariant::Modern => Box::new(ModernChannel::new(bank)),
    }
}

/// Registers backing one legacy slot.
#[derive(Debug, Clone, Copy)]
struct LegacySlotRegs {
    x: RegisterId,
    y: RegisterId,
    z: RegisterId,
}

/// Legacy multiplexed channel. Capacity is whatever the host exposes,
/// discovered at construction by probing sequential register names until a
/// triple is incomplete. Mode-S identifiers have nowhere to go and are
/// dropped.
pub struct LegacyChannel<B: RegisterBank> {
    bank: B,
    slots: Vec<LegacySlotRegs>,
    count_reg: Option<RegisterId>,
}

impl<B: RegisterBank> LegacyChannel<B> {
    /// Probe `traffic/multiplayer/plane{n}/{x,y,z}` for n = 1, 2, ... until
    /// one register is missing. A host exposing no slots at all yields
    /// capacity zero: surveillance reporting degrades, rendering is
    /// unaffected.
    pub fn discover(mut bank: B) -> Self {
        let mut slots = Vec::new();
        let mut n = 1;
        loop {
            let x = bank.find(&format!("traffic/multiplayer/plane{n}/x"));
            let y = bank.find(&format!("traffic/multiplayer/plane{n}/y"));
            let z = bank.find(&format!("traffic/multiplayer/plane{n}/z"));
            match (x, y, z) {
                (Some(x), Some(y), Some(z)) => slots.push(LegacySlotRegs { x, y, z }),
                _ => break,
            }
            n += 1;
        }
        let count_reg = bank.find("traffic/multiplayer/active_count");
        if slots.is_empty() {
            warn!("legacy surveillance channel exposes no slots; contacts will be dropped");
        } else {
            debug!(capacity = slots.len(), "legacy surveillance channel ready");
        }
        Self {
            bank,
            slots,
            count_reg,
        }
    }

    pub fn bank(&self) -> &B {
        &self.bank
    }
}

impl<B: RegisterBank> SurveillanceChannel for LegacyChannel<B> {
    fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn write_slot(&mut self, index: usize, slot: &ContactSlot) {
        // Slot 1 maps to the first discovered register triple.
        let Some(regs) = index.checked_sub(1).and_then(|i| self.slots.get(i)) else {
            return;
        };
        self.bank.write_f64(regs.x, slot.x);
        self.bank.write_f64(regs.y, slot.y);
        self.bank.write_f64(regs.z, slot.z);
    }

    fn set_active_count(&mut self, count: usize) {
        if let Some(reg) = self.count_reg {
            self.bank.write_i32(reg, count as i32);
        }
    }
}

/// Modern fixed-capacity channel: coordinate and mode-S array registers
/// indexed by slot.
pub struct ModernChannel<B: RegisterBank> {
    bank: B,
    x: Option<RegisterId>,
    y: Option<RegisterId>,
    z: Option<RegisterId>,
    mode_s: Option<RegisterId>,
    count_reg: Option<RegisterId>,
}

impl<B: RegisterBank> ModernChannel<B> {
    pub fn new(mut bank: B) -> Self {
        let x = bank.find("traffic/targets/position/x");
        let y = bank.find("traffic/targets/position/y");
        let z = bank.find("traffic/targets/position/z");
        let mode_s = bank.find("traffic/targets/mode_s");
        let count_reg = bank.find("traffic/targets/active_count");
        Self {
            bank,
            x,
            y,
            z,
            mode_s,
            count_reg,
        }
    }

    pub fn bank(&self) -> &B {
        &self.bank
    }
}

impl<B: RegisterBank> SurveillanceChannel for ModernChannel<B> {
    fn capacity(&self) -> usize {
        MODERN_CHANNEL_CAPACITY
    }

    fn write_slot(&mut self, index: usize, slot: &ContactSlot) {
        if index == OBSERVER_SLOT || index > MODERN_CHANNEL_CAPACITY {
            return;
        }
        if let Some(reg) = self.x {
            self.bank.write_f64_slice(reg, index, &[slot.x]);
        }
        if let Some(reg) = self.y {
            self.bank.write_f64_slice(reg, index, &[slot.y]);
        }
        if let Some(reg) = self.z {
            self.bank.write_f64_slice(reg, index, &[slot.z]);
        }
        if let Some(reg) = self.mode_s {
            self.bank.write_i32_slice(reg, index, &[slot.mode_s as i32]);
        }
    }

    fn set_active_count(&mut self, count: usize) {
        if let Some(reg) = self.count_reg {
            self.bank.write_i32(reg, count as i32);
        }
    }
}
