//! The extract-symbols pipeline: dump, build the table, annotate the program.

use std::path::Path;
use tracing::{debug, info};

use crate::analysis::propagate::{propagate_addresses, PropagationReport};
use crate::config::ExtractConfig;
use crate::core::program::Program;
use crate::error::Result;
use crate::io::{ObjdumpCommand, SymbolDumpSource};
use crate::symbols::{ExtractStats, SymbolTable};

/// Extracts symbol addresses from a binary and writes them into a program.
#[derive(Debug, Clone)]
pub struct SymbolExtractor {
    config: ExtractConfig,
    symbols: SymbolTable,
    stats: ExtractStats,
}

impl SymbolExtractor {
    pub fn new(config: ExtractConfig) -> Self {
        SymbolExtractor {
            config,
            symbols: SymbolTable::new(),
            stats: ExtractStats::default(),
        }
    }

    pub fn config(&self) -> &ExtractConfig {
        &self.config
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn stats(&self) -> ExtractStats {
        self.stats
    }

    /// The dumper configured by `objdump` and `timeout_seconds`
    pub fn objdump_command(&self) -> ObjdumpCommand {
        ObjdumpCommand::new(&self.config.objdump).with_timeout(self.config.timeout_seconds)
    }

    /// Read the symbol dump of `binary` from `source` into the table.
    ///
    /// Invalid settings and any error from the source abort before the
    /// table is touched.
    pub fn analyze<S: SymbolDumpSource>(
        &mut self,
        mut source: S,
        binary: &Path,
    ) -> Result<&mut Self> {
        self.config.validate()?;
        let lines = source.dump_lines(binary)?;
        self.ingest(lines);
        Ok(self)
    }

    /// Fold dump lines into the table, in order.
    pub fn ingest<I, S>(&mut self, lines: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let verbose = self.config.debug;
        let sections = self.config.text_sections();
        let stats = self
            .symbols
            .extend_from_lines_with(lines, &sections, |record| {
                if verbose {
                    info!(
                        "Adding address for label {}: {}",
                        record.label, record.address
                    );
                }
            });
        self.stats.lines_read += stats.lines_read;
        self.stats.records_parsed += stats.records_parsed;
        self.stats.addresses_extracted += stats.addresses_extracted;

        debug!(
            lines = stats.lines_read,
            records = stats.records_parsed,
            labels = self.symbols.len(),
            "Ingested symbol dump"
        );
        if self.config.stats {
            info!(
                "number of extracted addresses: {}",
                self.stats.addresses_extracted
            );
        }
        self
    }

    /// Write addresses into every resolvable function of `program`.
    pub fn update_program(&self, program: &mut Program) -> PropagationReport {
        let report = propagate_addresses(&self.symbols, program);
        if self.config.stats {
            info!(
                "number of annotated functions: {}",
                report.functions_annotated
            );
            info!(
                "number of functions without symbol: {}",
                report.functions_skipped.len()
            );
            info!("number of annotated blocks: {}", report.blocks_annotated);
            info!(
                "number of annotated instructions: {}",
                report.instructions_annotated
            );
        }
        report
    }
}

/// Run the whole pipeline with the configured dumper.
pub fn extract_symbols(
    config: &ExtractConfig,
    binary: &Path,
    program: &mut Program,
) -> Result<PropagationReport> {
    let mut extractor = SymbolExtractor::new(config.clone());
    let command = extractor.objdump_command();
    extract_symbols_with(&mut extractor, command, binary, program)
}

/// Run the whole pipeline reading the dump from `source`.
pub fn extract_symbols_with<S: SymbolDumpSource>(
    extractor: &mut SymbolExtractor,
    source: S,
    binary: &Path,
    program: &mut Program,
) -> Result<PropagationReport> {
    extractor.analyze(source, binary)?;
    Ok(extractor.update_program(program))
}
