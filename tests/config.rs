use mips_sc::{LoadError, SimConfig};

#[test]
fn full_config_parses() {
    let text = "\
# simulator inputs
program_input=prog.s
memory_contents_input=mem.txt
register_file_input=regs.txt
output_mode=hex
debug_mode=true
print_memory_contents=false
output_file=out.txt
write_to_file=true
";
    let cfg = SimConfig::parse(text, false).unwrap();
    assert_eq!(cfg.program_input, "prog.s");
    assert_eq!(cfg.memory_contents_input, "mem.txt");
    assert_eq!(cfg.register_file_input, "regs.txt");
    assert_eq!(cfg.output_mode, "hex");
    assert_eq!(cfg.debug_mode, "true");
    assert_eq!(cfg.print_memory_contents, "false");
    assert_eq!(cfg.output_file, "out.txt");
    assert_eq!(cfg.write_to_file, "true");
}

#[test]
fn missing_delimiter_stops_early_keeping_values() {
    let text = "program_input=a.s\nthis line is broken\noutput_mode=hex\n";
    let cfg = SimConfig::parse(text, false).unwrap();
    assert_eq!(cfg.program_input, "a.s");
    assert_eq!(cfg.output_mode, "");
}

#[test]
fn unknown_key_stops_early() {
    let text = "output_mode=hex\nmystery_key=1\ndebug_mode=true\n";
    let cfg = SimConfig::parse(text, false).unwrap();
    assert_eq!(cfg.output_mode, "hex");
    assert_eq!(cfg.debug_mode, "");
}

#[test]
fn strict_mode_reports_the_offending_line() {
    let text = "output_mode=hex\nbroken\n";
    let err = SimConfig::parse(text, true);
    assert!(matches!(err, Err(LoadError::MalformedLine { line: 2 })));
}

#[test]
fn comments_and_blanks_are_ignored() {
    let text = "\n# comment\n\toutput_mode=binary\t\n";
    let cfg = SimConfig::parse(text, false).unwrap();
    assert_eq!(cfg.output_mode, "binary");
}
