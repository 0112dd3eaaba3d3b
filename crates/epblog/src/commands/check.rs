//! `epblog check` command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to configuration file (default: auto-discover epblog.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output (show configuration loading logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails to load or validate.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = epblog_site::effective_config(self.config.as_deref())?;
        config.validate()?;
        if let Some(sidebar) = &config.sidebar {
            epblog_sidebar::validate(sidebar)?;
        }

        match &config.config_path {
            Some(path) => output.info(&format!("Config file: {}", path.display())),
            None => output.info("Config file: built-in configuration"),
        }
        output.highlight(&config.title);
        output.info(&format!("Navigation entries: {}", config.theme.nav.len()));
        output.info(&format!("Social links: {}", config.theme.social_links.len()));

        if let Some(sidebar) = &config.sidebar {
            output.info(&format!(
                "Sidebar: {} exclude patterns, sort by front-matter date: {}",
                sidebar.exclude.len(),
                sidebar.sort_by_frontmatter_date
            ));
        } else {
            output.info("Sidebar: plugin disabled");
        }

        if let Some(mermaid) = &config.mermaid {
            output.info(&format!("Mermaid: theme {}", mermaid.theme.as_str()));
        } else {
            output.info("Mermaid: plugin disabled");
        }

        output.success("Configuration OK");
        Ok(())
    }
}
