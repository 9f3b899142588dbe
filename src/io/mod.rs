//! Sources of symbol dump text.
//!
//! The address pass only needs the lines of a symbol dump for a binary. Where
//! they come from is behind [`SymbolDumpSource`]: a live dumper process, a
//! dump captured earlier, or a canned sequence of lines.

pub mod command;

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::Result;

pub use command::ObjdumpCommand;

/// Produces the lines of a symbol dump for a binary.
pub trait SymbolDumpSource {
    /// Return every line of the dump, in output order.
    fn dump_lines(&mut self, binary: &Path) -> Result<Vec<String>>;
}

/// A dump captured to a file beforehand; the binary path is ignored.
#[derive(Debug, Clone)]
pub struct DumpFile {
    path: PathBuf,
}

impl DumpFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        DumpFile {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl SymbolDumpSource for DumpFile {
    fn dump_lines(&mut self, binary: &Path) -> Result<Vec<String>> {
        debug!(
            dump = %self.path.display(),
            binary = %binary.display(),
            "Reading captured symbol dump"
        );
        let text = fs::read_to_string(&self.path)?;
        Ok(text.lines().map(str::to_string).collect())
    }
}

/// A fixed sequence of lines, returned for any binary.
#[derive(Debug, Clone, Default)]
pub struct CannedLines {
    lines: Vec<String>,
}

impl CannedLines {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CannedLines {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl SymbolDumpSource for CannedLines {
    fn dump_lines(&mut self, _binary: &Path) -> Result<Vec<String>> {
        Ok(self.lines.clone())
    }
}

impl<S: SymbolDumpSource + ?Sized> SymbolDumpSource for &mut S {
    fn dump_lines(&mut self, binary: &Path) -> Result<Vec<String>> {
        (**self).dump_lines(binary)
    }
}

impl<S: SymbolDumpSource + ?Sized> SymbolDumpSource for Box<S> {
    fn dump_lines(&mut self, binary: &Path) -> Result<Vec<String>> {
        (**self).dump_lines(binary)
    }
}
