//! Hook lifecycle: idempotent enable/disable of the surveillance override.
//!
//! The enable and disable paths can both be reached more than once from the
//! host's plugin-enable/plugin-disable callbacks, so every transition is
//! guarded by the single `enabled` boolean. Re-enabling after a disable
//! performs a full re-capture; nothing is cached between cycles.

use tracing::debug;

use multiplane_host::switch::OverrideSwitch;

/// Tracks whether the surveillance override is currently registered.
#[derive(Debug, Default)]
pub struct OverrideHooks {
    enabled: bool,
    /// Switch value observed at enable time, restored on disable.
    previous: bool,
}

impl OverrideHooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Take over the surveillance channel. No-op if already enabled.
    pub fn enable(&mut self, switch: &mut dyn OverrideSwitch) {
        if self.enabled {
            return;
        }
        self.previous = switch.is_set();
        switch.set(true);
        self.enabled = true;
        debug!("surveillance override enabled");
    }

    /// Restore the switch to its pre-enable value. No-op if not enabled.
    pub fn disable(&mut self, switch: &mut dyn OverrideSwitch) {
        if !self.enabled {
            return;
        }
        switch.set(self.previous);
        self.enabled = false;
        debug!("surveillance override disabled");
    }
}
