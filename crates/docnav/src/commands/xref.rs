//! `docnav xref` command implementation.

use std::path::PathBuf;

use clap::Args;
use docnav_config::{CliSettings, Config};
use docnav_xref::{XrefArchiveReader, XrefSpec};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the xref command.
#[derive(Args)]
pub(crate) struct XrefArgs {
    /// Uid to look up.
    uid: String,

    /// Cross-reference archive to search, in order (repeatable, overrides config).
    #[arg(short, long = "archive")]
    archives: Vec<PathBuf>,

    /// Path to configuration file (default: auto-discover docnav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output (log archive and cache activity).
    #[arg(short, long)]
    pub verbose: bool,
}

impl XrefArgs {
    /// Execute the xref command.
    ///
    /// # Errors
    ///
    /// Returns an error if no archive is configured, an archive cannot be
    /// read, or no archive knows the uid.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            archives: (!self.archives.is_empty()).then_some(self.archives),
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let spec = find_in_archives(
            &self.uid,
            &config.xref_resolved.archives,
            config.xref_resolved.cache_capacity,
        )?;

        output.result(&serde_yaml::to_string(&spec)?)?;
        Ok(())
    }
}

/// Search archives in order and return the first spec for `uid`.
fn find_in_archives(
    uid: &str,
    archives: &[PathBuf],
    capacity: usize,
) -> Result<XrefSpec, CliError> {
    if archives.is_empty() {
        return Err(CliError::Validation(
            "No cross-reference archives configured (use --archive or [xref] archives)"
                .to_owned(),
        ));
    }

    for archive in archives {
        tracing::info!(archive = %archive.display(), uid, "searching cross-reference archive");
        let mut reader = XrefArchiveReader::open_with_capacity(archive, capacity)?;
        let found = reader.find(uid)?;
        reader.dispose();
        if let Some(spec) = found {
            return Ok(spec);
        }
    }

    Err(CliError::UidNotFound(uid.to_owned()))
}
