//! Host override switch: tells the host to stop driving the surveillance
//! channel itself and accept this system's writes instead.

use crate::registers::{RegisterBank, RegisterId};

/// Single boolean-valued host switch.
pub trait OverrideSwitch {
    fn is_set(&self) -> bool;

    fn set(&mut self, on: bool);
}

/// Register-backed override switch.
pub struct RegisterSwitch<B: RegisterBank> {
    bank: B,
    reg: Option<RegisterId>,
    current: bool,
}

impl<B: RegisterBank> RegisterSwitch<B> {
    pub fn new(mut bank: B) -> Self {
        let reg = bank.find("traffic/override/surveillance");
        Self {
            bank,
            reg,
            current: false,
        }
    }

    pub fn bank(&self) -> &B {
        &self.bank
    }
}

impl<B: RegisterBank> OverrideSwitch for RegisterSwitch<B> {
    fn is_set(&self) -> bool {
        self.current
    }

    fn set(&mut self, on: bool) {
        self.current = on;
        if let Some(reg) = self.reg {
            self.bank.write_i32(reg, i32::from(on));
        }
    }
}
