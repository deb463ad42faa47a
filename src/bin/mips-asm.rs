use anyhow::Result;
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use mips_sc::{DataMemory, Loader, RegisterFile, SimConfig};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Assemble a MIPS-subset program and dump the datapath inputs"
)]
struct Opts {
    /// Simulator configuration file (key=value) naming the input files
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Program file to assemble directly (overrides the config entry)
    program: Option<PathBuf>,
    /// Fail on the first malformed line or unknown mnemonic
    #[arg(long)]
    strict: bool,
    /// Emit the assembled program as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let opts = Opts::parse();
    let loader = Loader {
        strict: opts.strict,
    };

    let cfg = match &opts.config {
        Some(path) => SimConfig::from_file(path, opts.strict)?,
        None => SimConfig::default(),
    };

    let program_path = opts
        .program
        .clone()
        .or_else(|| (!cfg.program_input.is_empty()).then(|| PathBuf::from(&cfg.program_input)));
    let Some(program_path) = program_path else {
        anyhow::bail!("no program file given (pass one directly or via --config)");
    };

    let program = loader.load_program(&program_path)?;

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&program)?);
    } else if cfg.output_mode == "binary" {
        for (word, text) in program.words.iter().zip(&program.text) {
            println!("{word:032b}  {text}");
        }
    } else {
        print!("{program}");
    }

    if cfg.write_to_file == "true" && !cfg.output_file.is_empty() {
        let mut out = String::new();
        for word in &program.words {
            out.push_str(&format!("{word:#010x}\n"));
        }
        fs::write(&cfg.output_file, out)?;
    }

    // Initial datapath state, when the config names the input files.
    if cfg.debug_mode == "true" {
        if !cfg.register_file_input.is_empty() {
            let regs = RegisterFile::new(loader.load_registers(Path::new(&cfg.register_file_input))?);
            print!("{regs}");
        }
        if !cfg.memory_contents_input.is_empty() {
            let mem = DataMemory::new(loader.load_memory(Path::new(&cfg.memory_contents_input))?);
            if cfg.print_memory_contents == "true" {
                print!("{mem}");
            }
        }
    }

    Ok(())
}
