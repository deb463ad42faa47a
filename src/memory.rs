use std::collections::BTreeMap;
use std::fmt;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Control lines gating the data-memory paths for one invocation.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub struct MemCtrl: u8 {
        const READ = 1 << 0;
        const WRITE = 1 << 1;
    }
}

impl Default for MemCtrl {
    fn default() -> Self {
        MemCtrl::empty()
    }
}

/// Sparse address-indexed data memory. Unbounded; addresses come into
/// existence on first access.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct DataMemory {
    pub data: BTreeMap<u32, u32>,
    pub address: u32,
    pub write_data: u32,
    pub read_data: u32,
    pub ctrl: MemCtrl,
}

impl DataMemory {
    pub fn new(data: BTreeMap<u32, u32>) -> Self {
        Self {
            data,
            ..Default::default()
        }
    }

    /// One state transition: at most one of the read/write paths fires, with
    /// read taking precedence when both control lines are asserted. Reading
    /// an absent address inserts it holding 0 first, so the storage state
    /// after a read is observable.
    pub fn execute(&mut self) {
        if self.ctrl.contains(MemCtrl::READ) {
            self.read_data = *self.data.entry(self.address).or_insert(0);
        } else if self.ctrl.contains(MemCtrl::WRITE) {
            self.data.insert(self.address, self.write_data);
        }
    }
}

impl fmt::Display for DataMemory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, " ------------- ")?;
        writeln!(f, "| Data Memory |")?;
        writeln!(f, " ------------- ")?;
        writeln!(f, "Address: {:#x}", self.address)?;
        writeln!(f, "Read Data: {:#x}", self.read_data)?;
        writeln!(f, "Write Data: {:#010x}", self.write_data)?;
        writeln!(f, "Control Line - MemRead: {}", self.ctrl.contains(MemCtrl::READ))?;
        writeln!(f, "Control Line - MemWrite: {}", self.ctrl.contains(MemCtrl::WRITE))?;
        writeln!(f, "Memory Contents...")?;
        for (addr, val) in &self.data {
            writeln!(f, "{addr:#x}:{val:x}")?;
        }
        Ok(())
    }
}
