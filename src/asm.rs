use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::encode::{encode_i_form, encode_j_form, encode_r_form};
use crate::instructions::{self, InstrClass};

#[derive(thiserror::Error, Debug)]
pub enum AsmError {
    #[error("unknown mnemonic `{mnemonic}`")]
    UnknownMnemonic { mnemonic: String },
}

/// Strip the `#` comment and surrounding whitespace from one source line,
/// turning interior tabs into spaces. Idempotent; an empty result means the
/// line holds no instruction.
pub fn normalize(line: &str) -> String {
    let code = line.split('#').next().unwrap_or("");
    code.trim_matches(|c| c == ' ' || c == '\t').replace('\t', " ")
}

/// Translate one normalized, non-empty source line into its 32-bit machine
/// word: classify the mnemonic, encode the operand fields, OR in the fixed
/// opcode/func bits.
pub fn encode_line(line: &str) -> Result<u32, AsmError> {
    let line = line.replace('\t', " ");
    let (mnemonic, fields) = match line.split_once(' ') {
        Some((m, f)) => (m, f),
        None => (line.as_str(), ""),
    };

    let desc = instructions::lookup(mnemonic).ok_or_else(|| AsmError::UnknownMnemonic {
        mnemonic: mnemonic.to_string(),
    })?;

    let payload = match desc.class {
        InstrClass::RForm => encode_r_form(fields),
        InstrClass::IForm => encode_i_form(fields),
        InstrClass::JForm => encode_j_form(fields),
    };

    Ok(desc.fixed_bits | payload)
}

/// An assembled program: the surviving source lines and their machine words,
/// index-matched and of equal length. Blank and comment-only lines appear in
/// neither sequence.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Program {
    pub text: Vec<String>,
    pub words: Vec<u32>,
}

impl Program {
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (word, text) in self.words.iter().zip(&self.text) {
            writeln!(f, "{word:#010x}  {text}")?;
        }
        Ok(())
    }
}

/// Line-at-a-time assembler. In the default lenient mode an unknown mnemonic
/// encodes to the zero word with a warning; strict mode surfaces it as an
/// error instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct Assembler {
    pub strict: bool,
}

impl Assembler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strict() -> Self {
        Self { strict: true }
    }

    pub fn assemble(&self, source: &str) -> Result<Program, AsmError> {
        let mut prog = Program::default();
        for raw in source.lines() {
            let line = normalize(raw);
            if line.is_empty() {
                continue;
            }
            let word = match encode_line(&line) {
                Ok(w) => w,
                Err(e) if self.strict => return Err(e),
                Err(e) => {
                    warn!(line = %line, "{e}, encoding zero word");
                    0
                }
            };
            prog.text.push(line);
            prog.words.push(word);
        }
        Ok(prog)
    }
}
