use mips_sc::asm::encode_line;
use mips_sc::{normalize, AsmError, Assembler};

#[test]
fn rform_add_reference_encoding() {
    assert_eq!(encode_line("add $3, $1, $2").unwrap(), 0x00221820);
}

#[test]
fn rform_sub_and_slt() {
    // Same field layout as add, different func bits
    assert_eq!(encode_line("sub $3, $1, $2").unwrap(), 0x00221822);
    assert_eq!(encode_line("slt $1, $2, $3").unwrap(), 0x0043082A);
}

#[test]
fn iform_addi_reference_encoding() {
    assert_eq!(encode_line("addi $5, $4, 10").unwrap(), 0x2085000A);
}

#[test]
fn iform_sw_offset_syntax() {
    assert_eq!(encode_line("sw $6, 8($7)").unwrap(), 0xACE60008);
}

#[test]
fn iform_lw_negative_offset() {
    // -4 truncates to its 16-bit two's-complement pattern
    assert_eq!(encode_line("lw $5, -4($6)").unwrap(), 0x8CC5FFFC);
}

#[test]
fn iform_beq_three_field_syntax() {
    assert_eq!(encode_line("beq $1, $2, 25").unwrap(), 0x10410019);
}

#[test]
fn iform_immediate_base_detection() {
    // 0x prefix reads as hex, a leading 0 as octal, otherwise decimal
    assert_eq!(encode_line("addi $1, $2, 0x10").unwrap(), 0x20410010);
    assert_eq!(encode_line("addi $1, $2, 010").unwrap(), 0x20410008);
    assert_eq!(encode_line("addi $1, $2, -1").unwrap(), 0x2041FFFF);
}

#[test]
fn iform_offset_is_strictly_decimal() {
    // In the imm(reg) syntax "010" is decimal ten, not octal
    assert_eq!(encode_line("lw $1, 010($2)").unwrap(), 0x8C41000A);
}

#[test]
fn jform_word_aligns_and_masks() {
    assert_eq!(encode_line("j 0x00400000").unwrap(), 0x08100000);
    // Bare hex without prefix is accepted too
    assert_eq!(encode_line("j 400000").unwrap(), 0x08100000);
    // Bits above the 26-bit field are dropped entirely
    assert_eq!(encode_line("j 0xF0000000").unwrap(), 0x08000000);
    // A target straddling the mask keeps only its low 26 shifted bits
    assert_eq!(encode_line("j 0x0C000000").unwrap(), 0x08000000 | 0x0300_0000);
}

#[test]
fn rform_literal_in_destination_slot_becomes_shamt() {
    // No '$' on the first field: its value lands in the shift-amount field
    // and the destination field stays 0
    assert_eq!(
        encode_line("add 4, $1, $2").unwrap(),
        (1 << 21) | (2 << 16) | (4 << 6) | 32
    );
}

#[test]
fn missing_fields_encode_zero_payload() {
    assert_eq!(encode_line("add $3, $1").unwrap(), 32);
    assert_eq!(encode_line("addi $5").unwrap(), 0x08 << 26);
}

#[test]
fn mnemonics_are_case_insensitive() {
    assert_eq!(encode_line("ADD $3, $1, $2").unwrap(), 0x00221820);
    assert_eq!(encode_line("Sw $6, 8($7)").unwrap(), 0xACE60008);
}

#[test]
fn mnemonic_prefix_does_not_match() {
    // "addiu" must not match "addi" or "add"
    assert!(matches!(
        encode_line("addiu $1, $2, 3"),
        Err(AsmError::UnknownMnemonic { .. })
    ));
}

#[test]
fn unknown_mnemonic_lenient_and_strict() {
    let prog = Assembler::new().assemble("foo $1,$2,$3").unwrap();
    assert_eq!(prog.words, vec![0x00000000]);

    let err = Assembler::strict().assemble("foo $1,$2,$3");
    assert!(matches!(err, Err(AsmError::UnknownMnemonic { .. })));
}

#[test]
fn tabs_are_accepted_as_field_separators() {
    assert_eq!(encode_line("add\t$3,\t$1,\t$2").unwrap(), 0x00221820);
}

#[test]
fn normalize_strips_comments_and_whitespace() {
    assert_eq!(normalize("  add $1, $2, $3  # comment"), "add $1, $2, $3");
    assert_eq!(normalize("# full-line comment"), "");
    assert_eq!(normalize("\t\t"), "");
    assert_eq!(normalize("\tlw\t$1, 4($2)\t"), "lw $1, 4($2)");
}

#[test]
fn normalize_is_idempotent() {
    for line in [
        "  add $1, $2, $3  # comment",
        "\tsw $6,\t8($7)",
        "# nothing",
        "",
        "j 0x400",
    ] {
        let once = normalize(line);
        assert_eq!(normalize(&once), once);
    }
}

#[test]
fn program_sequences_stay_parallel() {
    let source = "\
# initialization
add $1, $2, $3

addi $4, $1, 100   # increment
   # another comment
sw $4, 0($5)
";
    let prog = Assembler::new().assemble(source).unwrap();
    assert_eq!(prog.len(), 3);
    assert_eq!(prog.text.len(), prog.words.len());
    assert_eq!(prog.text[0], "add $1, $2, $3");
    assert_eq!(prog.text[2], "sw $4, 0($5)");
    assert_eq!(prog.words[1], 0x2024_0064);
}

#[test]
fn empty_program_assembles_empty() {
    let prog = Assembler::new().assemble("# comments only\n\n").unwrap();
    assert!(prog.is_empty());
}
