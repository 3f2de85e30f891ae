//! Named data-register bank: the host's data-access surface.
//!
//! Registers are resolved by name once and then written by handle. Array
//! registers accept slice writes at an offset, matching hosts that expose
//! per-index vector stores.

use std::collections::HashMap;

/// Opaque handle to a resolved register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegisterId(pub u32);

/// The host's register bank.
pub trait RegisterBank {
    /// Resolve a named register. `None` if the host does not expose it.
    fn find(&mut self, name: &str) -> Option<RegisterId>;

    fn write_f64(&mut self, id: RegisterId, value: f64);

    fn write_i32(&mut self, id: RegisterId, value: i32);

    /// Write into an array register starting at `offset`.
    fn write_f64_slice(&mut self, id: RegisterId, offset: usize, values: &[f64]);

    /// Write into an integer array register starting at `offset`.
    fn write_i32_slice(&mut self, id: RegisterId, offset: usize, values: &[i32]);
}

/// In-memory register bank. Only registers seeded through [`MemoryBank::expose`]
/// resolve; everything else behaves like a host that lacks the capability.
#[derive(Debug, Default)]
pub struct MemoryBank {
    names: HashMap<String, RegisterId>,
    next_id: u32,
    scalars_f64: HashMap<RegisterId, f64>,
    scalars_i32: HashMap<RegisterId, i32>,
    arrays_f64: HashMap<RegisterId, Vec<f64>>,
    arrays_i32: HashMap<RegisterId, Vec<i32>>,
}

impl MemoryBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expose a named register so that `find` resolves it.
    pub fn expose(&mut self, name: &str) -> RegisterId {
        if let Some(&id) = self.names.get(name) {
            return id;
        }
        let id = RegisterId(self.next_id);
        self.next_id += 1;
        self.names.insert(name.to_string(), id);
        id
    }

    pub fn read_f64(&self, id: RegisterId) -> Option<f64> {
        self.scalars_f64.get(&id).copied()
    }

    pub fn read_i32(&self, id: RegisterId) -> Option<i32> {
        self.scalars_i32.get(&id).copied()
    }

    pub fn read_f64_at(&self, id: RegisterId, index: usize) -> Option<f64> {
        self.arrays_f64.get(&id).and_then(|v| v.get(index)).copied()
    }

    pub fn read_i32_at(&self, id: RegisterId, index: usize) -> Option<i32> {
        self.arrays_i32.get(&id).and_then(|v| v.get(index)).copied()
    }

    pub fn lookup(&self, name: &str) -> Option<RegisterId> {
        self.names.get(name).copied()
    }
}

impl RegisterBank for MemoryBank {
    fn find(&mut self, name: &str) -> Option<RegisterId> {
        self.names.get(name).copied()
    }

    fn write_f64(&mut self, id: RegisterId, value: f64) {
        self.scalars_f64.insert(id, value);
    }

    fn write_i32(&mut self, id: RegisterId, value: i32) {
        self.scalars_i32.insert(id, value);
    }

    fn write_f64_slice(&mut self, id: RegisterId, offset: usize, values: &[f64]) {
        let array = self.arrays_f64.entry(id).or_default();
        if array.len() < offset + values.len() {
            array.resize(offset + values.len(), 0.0);
        }
        array[offset..offset + values.len()].copy_from_slice(values);
    }

    fn write_i32_slice(&mut self, id: RegisterId, offset: usize, values: &[i32]) {
        let array = self.arrays_i32.entry(id).or_default();
        if array.len() < offset + values.len() {
            array.resize(offset + values.len(), 0);
        }
        array[offset..offset + values.len()].copy_from_slice(values);
    }
}
