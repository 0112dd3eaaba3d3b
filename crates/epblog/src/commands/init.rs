//! `epblog init` command implementation.

use std::path::PathBuf;

use clap::Args;
use epblog_config::CONFIG_FILENAME;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the init command.
#[derive(Args)]
pub(crate) struct InitArgs {
    /// Directory to create the config file in (default: current directory).
    path: Option<PathBuf>,

    /// Overwrite an existing config file.
    #[arg(long)]
    force: bool,
}

impl InitArgs {
    /// Execute the init command.
    ///
    /// Writes the built-in configuration as a starter `epblog.toml` the
    /// user can edit.
    ///
    /// # Errors
    ///
    /// Returns an error if the target exists without `--force` or the file
    /// cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let dir = self.path.unwrap_or_else(|| PathBuf::from("."));
        let target = dir.join(CONFIG_FILENAME);
        if target.exists() && !self.force {
            return Err(CliError::Validation(format!(
                "{} already exists (use --force to overwrite)",
                target.display()
            )));
        }

        let toml = epblog_site::site_config().to_toml_string()?;
        std::fs::write(&target, toml)?;

        output.success(&format!("Wrote {}", target.display()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use epblog_config::SiteConfig;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_init_writes_loadable_config() {
        let dir = tempfile::tempdir().unwrap();
        let args = InitArgs {
            path: Some(dir.path().to_path_buf()),
            force: false,
        };

        args.execute().unwrap();

        let written = SiteConfig::load_from_file(&dir.path().join(CONFIG_FILENAME)).unwrap();
        let mut expected = epblog_site::site_config();
        expected.config_path = written.config_path.clone();
        assert_eq!(written, expected);
    }

    #[test]
    fn test_init_refuses_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&target, "title = \"Existing\"\n").unwrap();

        let args = InitArgs {
            path: Some(dir.path().to_path_buf()),
            force: false,
        };
        let err = args.execute().unwrap_err();
        assert!(matches!(err, CliError::Validation(_)));
        assert!(err.to_string().contains("--force"));
    }

    #[test]
    fn test_init_force_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&target, "title = \"Existing\"\n").unwrap();

        let args = InitArgs {
            path: Some(dir.path().to_path_buf()),
            force: true,
        };
        args.execute().unwrap();

        let written = SiteConfig::load_from_file(&target).unwrap();
        assert_eq!(written.title, "Embassy Preempt 博客");
    }
}
