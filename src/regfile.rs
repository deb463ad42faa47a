use std::fmt;

use serde::{Deserialize, Serialize};

/// 32-entry register file. Register 0 is an ordinary writable slot in this
/// model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterFile {
    pub regs: [u32; 32],
    /// Read-port index selectors, set by the orchestrator alongside the
    /// write fields; surfaced in the diagnostic dump.
    pub read_reg1: u32,
    pub read_reg2: u32,
    pub write_reg: u32,
    pub write_data: u32,
    /// Routing hint for the orchestrator; `write` itself never consults it.
    pub write_enable: bool,
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new([0; 32])
    }
}

impl RegisterFile {
    pub fn new(regs: [u32; 32]) -> Self {
        Self {
            regs,
            read_reg1: 0,
            read_reg2: 0,
            write_reg: 0,
            write_data: 0,
            write_enable: false,
        }
    }

    /// Direct indexed lookup. The index must be 0-31.
    pub fn read(&self, index: u32) -> u32 {
        self.regs[index as usize]
    }

    /// Store `write_data` into the `write_reg` slot. Invoking this method
    /// *is* the write enable: the store is unconditional, and callers gate
    /// writes by choosing whether to call it.
    pub fn write(&mut self) {
        self.regs[self.write_reg as usize] = self.write_data;
    }
}

impl fmt::Display for RegisterFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, " --------------- ")?;
        writeln!(f, "| Register File |")?;
        writeln!(f, " --------------- ")?;
        writeln!(f, "Read Register 1: {}", self.read_reg1)?;
        writeln!(f, "Read Register 2: {}", self.read_reg2)?;
        writeln!(f, "Write Register: {}", self.write_reg)?;
        writeln!(f, "Write Data: {:#010x}", self.write_data)?;
        writeln!(f, "Register Contents...")?;
        for (i, val) in self.regs.iter().enumerate() {
            writeln!(f, "{i}: {val:#010x}")?;
        }
        Ok(())
    }
}
