//! Operand decoding and per-class field encoders. Each encoder produces the
//! operand payload only; the assembler ORs in the fixed opcode/func bits.

/// A single decoded operand token. A token carrying a `$` marker names a
/// register; anything else is a bare hexadecimal literal (a shift amount in
/// R-form source text).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Register(u32),
    Literal(u32),
}

impl Operand {
    /// Raw payload regardless of tag. Callers that care whether the token
    /// was a register must match instead.
    pub fn value(self) -> u32 {
        match self {
            Operand::Register(v) | Operand::Literal(v) => v,
        }
    }
}

/// Decode one operand token. The decimal digits after a `$` marker are the
/// register index; without a marker the token reads as hex. No range check
/// is performed on either form.
pub fn parse_operand(tok: &str) -> Operand {
    match tok.find('$') {
        Some(pos) => Operand::Register(scan_uint(&tok[pos + 1..], 10)),
        None => Operand::Literal(scan_uint(tok, 16)),
    }
}

/// Unsigned scan with C `strtoul` semantics: skip leading whitespace, accept
/// an optional `0x` prefix when scanning hex, consume valid digits, stop at
/// the first invalid character, and yield 0 when no digit was consumed.
pub(crate) fn scan_uint(s: &str, radix: u32) -> u32 {
    let mut t = s.trim_start();
    if radix == 16 {
        if let Some(rest) = t.strip_prefix("0x").or_else(|| t.strip_prefix("0X")) {
            t = rest;
        }
    }
    let mut v: u32 = 0;
    for c in t.chars() {
        match c.to_digit(radix) {
            Some(d) => v = v.wrapping_mul(radix).wrapping_add(d),
            None => break,
        }
    }
    v
}

/// Signed scan with C `strtol` semantics. `base` 0 selects automatic
/// detection: `0x`/`0X` means hex, a leading `0` means octal, anything else
/// decimal.
pub(crate) fn scan_int(s: &str, base: u32) -> i64 {
    let t = s.trim_start();
    let (neg, t) = match t.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, t.strip_prefix('+').unwrap_or(t)),
    };
    let (radix, t) = if base == 0 {
        if let Some(rest) = t.strip_prefix("0x").or_else(|| t.strip_prefix("0X")) {
            (16, rest)
        } else if t.len() > 1 && t.starts_with('0') {
            (8, &t[1..])
        } else {
            (10, t)
        }
    } else {
        (base, t)
    };
    let mut v: i64 = 0;
    for c in t.chars() {
        match c.to_digit(radix) {
            Some(d) => v = v.wrapping_mul(radix as i64).wrapping_add(d as i64),
            None => break,
        }
    }
    if neg {
        -v
    } else {
        v
    }
}

/// Encode the operand payload of an R-form instruction. Field text order is
/// `dest, src1, src2`; the emitted bit order is src1:25..21, src2:20..16,
/// dest:15..11, shamt:10..6. A literal in the destination slot is taken as
/// the shift amount, with the destination field left 0. Fewer than three
/// fields yield an all-zero payload.
pub fn encode_r_form(fields: &str) -> u32 {
    let mut toks = fields
        .split(|c: char| c == ',' || c == ' ')
        .filter(|t| !t.is_empty());
    let (Some(rd), Some(rs), Some(rt)) = (toks.next(), toks.next(), toks.next()) else {
        return 0;
    };

    let (rd_n, sh_n) = match parse_operand(rd) {
        Operand::Register(r) => (r, 0),
        Operand::Literal(v) => (0, v),
    };
    let rs_n = parse_operand(rs).value();
    let rt_n = parse_operand(rt).value();

    (rs_n << 21) | (rt_n << 16) | (rd_n << 11) | (sh_n << 6)
}

/// Encode the operand payload of an I-form instruction. Two commas select
/// the `target, source, imm` syntax (auto-base immediate); otherwise the
/// memory-offset syntax `target, imm(source)` applies (strictly decimal,
/// sign permitted). Immediates truncate to their 16-bit two's-complement
/// pattern. Missing fields yield an all-zero payload.
pub fn encode_i_form(fields: &str) -> u32 {
    let commas = fields.matches(',').count();

    let (rt_n, rs_n, imm16) = if commas == 2 {
        let mut toks = fields
            .split(|c: char| c == ',' || c == ' ')
            .filter(|t| !t.is_empty());
        let (Some(rt), Some(rs), Some(imm)) = (toks.next(), toks.next(), toks.next()) else {
            return 0;
        };
        (
            parse_operand(rt).value(),
            parse_operand(rs).value(),
            scan_int(imm, 0) as u16,
        )
    } else {
        let mut toks = fields
            .split(|c: char| matches!(c, ',' | '(' | ')' | ' '))
            .filter(|t| !t.is_empty());
        let (Some(rt), Some(imm), Some(rs)) = (toks.next(), toks.next(), toks.next()) else {
            return 0;
        };
        (
            parse_operand(rt).value(),
            parse_operand(rs).value(),
            scan_int(imm, 10) as u16,
        )
    };

    (rs_n << 21) | (rt_n << 16) | imm16 as u32
}

/// Encode the 26-bit target of a J-form instruction: hex address, word
/// aligned by dropping the low two bits. A non-aligned address silently
/// loses precision.
pub fn encode_j_form(fields: &str) -> u32 {
    0x03FF_FFFF & (scan_uint(fields, 16) >> 2)
}
