use std::fmt;

use serde::{Deserialize, Serialize};

/// Arithmetic/logic unit of the single-cycle datapath. The orchestrator
/// loads the operand and control fields, invokes `execute`, then reads
/// `result` and `zero` before the next cycle overwrites them.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Alu {
    pub in_a: u32,
    pub in_b: u32,
    pub control: u32,
    pub result: u32,
    pub zero: bool,
}

impl Alu {
    pub fn new() -> Self {
        Self::default()
    }

    /// One state transition. Control codes: 0 AND, 1 OR, 2 add, 6 subtract;
    /// every other value selects unsigned set-less-than. The zero flag is
    /// only ever raised on the add/subtract paths; a stale value persists
    /// across the others.
    pub fn execute(&mut self) {
        match self.control {
            0 => self.result = self.in_a & self.in_b,
            1 => self.result = self.in_a | self.in_b,
            2 => {
                self.result = self.in_a.wrapping_add(self.in_b);
                if self.result == 0 {
                    self.zero = true;
                }
            }
            6 => {
                self.result = self.in_a.wrapping_sub(self.in_b);
                if self.result == 0 {
                    self.zero = true;
                }
            }
            _ => self.result = (self.in_a < self.in_b) as u32,
        }
    }
}

impl fmt::Display for Alu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, " ------------- ")?;
        writeln!(f, "|     ALU     |")?;
        writeln!(f, " ------------- ")?;
        writeln!(f, "Input A: {:#x}", self.in_a)?;
        writeln!(f, "Input B: {:#x}", self.in_b)?;
        writeln!(f, "Control code: {:#x}", self.control)?;
        writeln!(f, "Result: {:#x}", self.result)?;
        writeln!(f, "Zero flag: {}", self.zero)
    }
}
