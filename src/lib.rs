pub mod alu;
pub mod asm;
pub mod config;
pub mod encode;
pub mod instructions;
pub mod loader;
pub mod memory;
pub mod regfile;

pub use alu::Alu;
pub use asm::{normalize, AsmError, Assembler, Program};
pub use config::SimConfig;
pub use loader::{LoadError, Loader};
pub use memory::{DataMemory, MemCtrl};
pub use regfile::RegisterFile;
