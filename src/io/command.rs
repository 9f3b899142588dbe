//! Running the external symbol dumper.

use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, error};

use crate::error::{Result, SymaddrError};
use crate::io::SymbolDumpSource;
use crate::timeout::{block_on, with_timeout, TimeoutConfig, DEFAULT_TIMEOUT_SECONDS};

/// Default dumper, the Patmos LLVM objdump
pub const DEFAULT_OBJDUMP: &str = "patmos-llvm-objdump";

/// Runs `<command> -t <binary>` and collects its standard output.
///
/// A non-zero exit status fails the whole dump; no partial output is
/// returned. The child is killed if it outlives the timeout.
#[derive(Debug, Clone)]
pub struct ObjdumpCommand {
    command: String,
    timeout_seconds: u64,
}

impl ObjdumpCommand {
    pub fn new(command: impl Into<String>) -> Self {
        ObjdumpCommand {
            command: command.into(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }

    /// Limit the dumper's run time; zero waits forever.
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    async fn run(&self, binary: &Path) -> Result<Vec<String>> {
        let child = Command::new(&self.command)
            .arg("-t")
            .arg(binary)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| SymaddrError::Spawn {
                command: self.command.clone(),
                source,
            })?;

        let output = child.wait_with_output().await?;
        if !output.status.success() {
            error!(
                command = %self.command,
                status = ?output.status.code(),
                "Symbol dump command failed"
            );
            return Err(SymaddrError::CommandFailed {
                command: self.command.clone(),
                status: output.status.code(),
            });
        }

        let text = String::from_utf8_lossy(&output.stdout);
        Ok(text.lines().map(str::to_string).collect())
    }
}

impl Default for ObjdumpCommand {
    fn default() -> Self {
        ObjdumpCommand::new(DEFAULT_OBJDUMP)
    }
}

impl SymbolDumpSource for ObjdumpCommand {
    fn dump_lines(&mut self, binary: &Path) -> Result<Vec<String>> {
        debug!(command = %self.command, binary = %binary.display(), "Running symbol dump");
        let config = TimeoutConfig::new(self.timeout_seconds, format!("{} -t", self.command));
        let lines = block_on(with_timeout(config, self.run(binary)))?;
        debug!(lines = lines.len(), "Symbol dump finished");
        Ok(lines)
    }
}
