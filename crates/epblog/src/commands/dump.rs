//! `epblog dump` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;

use crate::error::CliError;

/// Arguments for the dump command.
#[derive(Args)]
pub(crate) struct DumpArgs {
    /// Path to configuration file (default: auto-discover epblog.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl DumpArgs {
    /// Execute the dump command.
    ///
    /// Writes the effective configuration as JSON to stdout; this is the
    /// handoff the site renderer consumes.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails to load or serialize.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let config = epblog_site::effective_config(self.config.as_deref())?;
        let json = epblog_site::to_json(&config)?;

        let mut stdout = std::io::stdout().lock();
        stdout.write_all(json.as_bytes())?;
        stdout.write_all(b"\n")?;
        Ok(())
    }
}
