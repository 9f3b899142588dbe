//! Extract symbol addresses from an ELF file into a program document.
//!
//! It is possible to specify the same file for input and output; as long as
//! the ELF file does not change, this is an idempotent transformation.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use symaddr::analysis::{extract_symbols_with, SymbolExtractor};
use symaddr::config::{parse_section_list, ExtractConfig};
use symaddr::core::Program;
use symaddr::io::{DumpFile, SymbolDumpSource};
use symaddr::logging;

#[derive(Parser)]
#[command(
    name = "extract-symbols",
    about = "Extract symbol addresses from an ELF file into a program document"
)]
struct Args {
    /// Binary whose symbol table is dumped
    #[arg(value_name = "PROGRAM.ELF")]
    binary: PathBuf,

    /// Program document to annotate
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    /// Where to write the annotated document (stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// JSON configuration file; command line flags take precedence
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Path to 'patmos-llvm-objdump'
    #[arg(long = "objdump-command", value_name = "FILE")]
    objdump: Option<String>,

    /// List of code sections (=.text)
    #[arg(long, value_name = "SECTION,..")]
    text_sections: Option<String>,

    /// Read a previously captured `objdump -t` output instead of running objdump
    #[arg(long, value_name = "FILE")]
    symbol_dump: Option<PathBuf>,

    /// Abort objdump after SECS seconds (0 = unlimited)
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Log every extracted address
    #[arg(long)]
    debug: bool,

    /// Report statistics
    #[arg(long)]
    stats: bool,

    /// Emit logs as JSON
    #[arg(long)]
    json_log: bool,
}

impl Args {
    fn extract_config(&self) -> Result<ExtractConfig> {
        let mut config = match &self.config {
            Some(path) => ExtractConfig::from_json_file(path)
                .with_context(|| format!("loading configuration {}", path.display()))?,
            None => ExtractConfig::default(),
        };
        if let Some(objdump) = &self.objdump {
            config.objdump = objdump.clone();
        }
        if let Some(sections) = &self.text_sections {
            config.text_sections = parse_section_list(sections);
        }
        if let Some(timeout) = self.timeout {
            config.timeout_seconds = timeout;
        }
        config.debug |= self.debug;
        config.stats |= self.stats;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = args.extract_config()?;

    if args.json_log {
        logging::init_tracing_json(config.debug);
    } else {
        logging::init_tracing(config.debug);
    }

    let mut program = Program::from_file(&args.input)
        .with_context(|| format!("loading program document {}", args.input.display()))?;

    let mut extractor = SymbolExtractor::new(config);
    let source: Box<dyn SymbolDumpSource> = match &args.symbol_dump {
        Some(path) => Box::new(DumpFile::new(path)),
        None => Box::new(extractor.objdump_command()),
    };

    let report = extract_symbols_with(&mut extractor, source, &args.binary, &mut program)
        .with_context(|| format!("extracting symbols from {}", args.binary.display()))?;
    info!(
        annotated = report.functions_annotated,
        skipped = report.functions_skipped.len(),
        "Symbol addresses extracted"
    );

    match &args.output {
        Some(path) => program
            .to_file(path)
            .with_context(|| format!("writing program document {}", path.display()))?,
        None => println!("{}", program.to_json_string()?),
    }
    Ok(())
}
