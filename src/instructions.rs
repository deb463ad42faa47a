/// Encoding family of a mnemonic: three registers plus shift amount (R),
/// two registers plus a 16-bit immediate (I), or a 26-bit target (J).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstrClass {
    RForm,
    IForm,
    JForm,
}

#[derive(Debug, Clone, Copy)]
pub struct InstrDesc {
    pub mnemonic: &'static str,
    pub class: InstrClass,
    /// Fixed opcode (bits 31..26) and func (bits 5..0) contribution,
    /// ORed with the operand payload by the assembler.
    pub fixed_bits: u32,
}

pub const TABLE: &[InstrDesc] = &[
    InstrDesc {
        mnemonic: "add",
        class: InstrClass::RForm,
        fixed_bits: (0x00 << 26) | 32,
    },
    InstrDesc {
        mnemonic: "sub",
        class: InstrClass::RForm,
        fixed_bits: (0x00 << 26) | 34,
    },
    InstrDesc {
        mnemonic: "slt",
        class: InstrClass::RForm,
        fixed_bits: (0x00 << 26) | 42,
    },
    InstrDesc {
        mnemonic: "addi",
        class: InstrClass::IForm,
        fixed_bits: 0x08 << 26,
    },
    InstrDesc {
        mnemonic: "lw",
        class: InstrClass::IForm,
        fixed_bits: 0x23 << 26,
    },
    InstrDesc {
        mnemonic: "sw",
        class: InstrClass::IForm,
        fixed_bits: 0x2b << 26,
    },
    InstrDesc {
        mnemonic: "beq",
        class: InstrClass::IForm,
        fixed_bits: 0x04 << 26,
    },
    InstrDesc {
        mnemonic: "j",
        class: InstrClass::JForm,
        fixed_bits: 0x02 << 26,
    },
];

/// Exact, length-checked, case-insensitive mnemonic lookup.
pub fn lookup(mnemonic: &str) -> Option<&'static InstrDesc> {
    TABLE
        .iter()
        .find(|d| d.mnemonic.eq_ignore_ascii_case(mnemonic))
}
