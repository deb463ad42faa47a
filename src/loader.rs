//! Readers for the three input-file formats: register contents
//! (`decimal-index:hex-value`), memory contents (`hex-address:hex-value`),
//! and the assembly program itself. All readers share the lenient/strict
//! policy: lenient keeps whatever was accumulated before the problem and
//! logs it, strict turns the problem into an error.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::warn;

use crate::asm::{normalize, AsmError, Assembler, Program};
use crate::encode::scan_uint;

#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("could not open {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed input on line {line}")]
    MalformedLine { line: usize },
    #[error(transparent)]
    Asm(#[from] AsmError),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Loader {
    pub strict: bool,
}

impl Loader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strict() -> Self {
        Self { strict: true }
    }

    /// Parse `index:value` register lines. Indices above 31 are skipped
    /// silently; a line without `:` stops the scan early, keeping the
    /// entries read so far (or errors in strict mode).
    pub fn parse_registers(&self, text: &str) -> Result<[u32; 32], LoadError> {
        let mut regs = [0u32; 32];
        for (idx, raw) in text.lines().enumerate() {
            let line = normalize(raw);
            if line.is_empty() {
                continue;
            }
            let Some((reg, value)) = line.split_once(':') else {
                self.malformed(idx + 1)?;
                break;
            };
            let r = scan_uint(reg, 10);
            if r > 31 {
                continue;
            }
            regs[r as usize] = scan_uint(value, 16);
        }
        Ok(regs)
    }

    /// Parse `address:value` memory lines, both hex. Same malformed-line
    /// policy as `parse_registers`.
    pub fn parse_memory(&self, text: &str) -> Result<BTreeMap<u32, u32>, LoadError> {
        let mut data = BTreeMap::new();
        for (idx, raw) in text.lines().enumerate() {
            let line = normalize(raw);
            if line.is_empty() {
                continue;
            }
            let Some((address, value)) = line.split_once(':') else {
                self.malformed(idx + 1)?;
                break;
            };
            data.insert(scan_uint(address, 16), scan_uint(value, 16));
        }
        Ok(data)
    }

    pub fn load_registers(&self, path: &Path) -> Result<[u32; 32], LoadError> {
        match self.read_source(path)? {
            Some(text) => self.parse_registers(&text),
            None => Ok([0; 32]),
        }
    }

    pub fn load_memory(&self, path: &Path) -> Result<BTreeMap<u32, u32>, LoadError> {
        match self.read_source(path)? {
            Some(text) => self.parse_memory(&text),
            None => Ok(BTreeMap::new()),
        }
    }

    /// Read and assemble the program file.
    pub fn load_program(&self, path: &Path) -> Result<Program, LoadError> {
        match self.read_source(path)? {
            Some(text) => {
                let asm = Assembler {
                    strict: self.strict,
                };
                Ok(asm.assemble(&text)?)
            }
            None => Ok(Program::default()),
        }
    }

    /// An unopenable file leaves that data source empty in lenient mode.
    fn read_source(&self, path: &Path) -> Result<Option<String>, LoadError> {
        match fs::read_to_string(path) {
            Ok(text) => Ok(Some(text)),
            Err(source) if self.strict => Err(LoadError::Io {
                path: path.display().to_string(),
                source,
            }),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "could not open file, leaving source empty");
                Ok(None)
            }
        }
    }

    fn malformed(&self, line: usize) -> Result<(), LoadError> {
        if self.strict {
            Err(LoadError::MalformedLine { line })
        } else {
            warn!(line, "malformed input, keeping entries read so far");
            Ok(())
        }
    }
}
