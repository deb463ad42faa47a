use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::asm::normalize;
use crate::loader::LoadError;

/// Simulator configuration: `key=value` lines with `#` comments. Supplies
/// the input-file paths and the output/debug mode strings the CLI consumes.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimConfig {
    pub program_input: String,
    pub memory_contents_input: String,
    pub register_file_input: String,
    pub output_mode: String,
    pub debug_mode: String,
    pub print_memory_contents: String,
    pub output_file: String,
    pub write_to_file: String,
}

impl SimConfig {
    /// Parse configuration text. A line without `=` or with an unrecognized
    /// key is malformed: lenient mode logs it with its 1-based line number
    /// and stops, keeping the values read so far; strict mode errors.
    pub fn parse(text: &str, strict: bool) -> Result<Self, LoadError> {
        let mut cfg = Self::default();
        for (idx, raw) in text.lines().enumerate() {
            let line_no = idx + 1;
            let line = normalize(raw);
            if line.is_empty() {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                if strict {
                    return Err(LoadError::MalformedLine { line: line_no });
                }
                warn!(line = line_no, "malformed configuration line, stopping");
                break;
            };
            let value = value.to_string();
            match key {
                "program_input" => cfg.program_input = value,
                "memory_contents_input" => cfg.memory_contents_input = value,
                "register_file_input" => cfg.register_file_input = value,
                "output_mode" => cfg.output_mode = value,
                "debug_mode" => cfg.debug_mode = value,
                "print_memory_contents" => cfg.print_memory_contents = value,
                "output_file" => cfg.output_file = value,
                "write_to_file" => cfg.write_to_file = value,
                _ => {
                    if strict {
                        return Err(LoadError::MalformedLine { line: line_no });
                    }
                    warn!(line = line_no, key, "unrecognized configuration key, stopping");
                    break;
                }
            }
        }
        Ok(cfg)
    }

    /// Load from a file. Lenient mode treats an unopenable file as an empty
    /// configuration.
    pub fn from_file(path: &Path, strict: bool) -> Result<Self, LoadError> {
        match fs::read_to_string(path) {
            Ok(text) => Self::parse(&text, strict),
            Err(source) if strict => Err(LoadError::Io {
                path: path.display().to_string(),
                source,
            }),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "could not open configuration, using defaults");
                Ok(Self::default())
            }
        }
    }
}
