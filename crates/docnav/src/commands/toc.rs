//! `docnav toc` command implementation.

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use docnav_config::{CliSettings, Config, OutputFormat};
use docnav_toc::{FsTocSource, ResolvedNode, resolve_file};

use crate::error::CliError;
use crate::output::Output;

/// Export format flag.
#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Yaml,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Yaml => Self::Yaml,
            FormatArg::Json => Self::Json,
        }
    }
}

/// Arguments for the toc command.
#[derive(Args)]
pub(crate) struct TocArgs {
    /// TOC file to resolve, relative to the source directory.
    toc_file: String,

    /// Path to configuration file (default: auto-discover docnav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Documentation source directory (overrides config).
    #[arg(short, long, env = "DOCNAV_SOURCE_DIR")]
    source_dir: Option<PathBuf>,

    /// Export format (overrides config).
    #[arg(short, long, value_enum)]
    format: Option<FormatArg>,

    /// Write the tree to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose output (log file lookups).
    #[arg(short, long)]
    pub verbose: bool,
}

impl TocArgs {
    /// Execute the toc command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, the TOC cannot be resolved, or
    /// the result cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            source_dir: self.source_dir,
            format: self.format.map(OutputFormat::from),
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        tracing::info!(
            source_dir = %config.docs_resolved.source_dir.display(),
            toc = self.toc_file.as_str(),
            "resolving TOC"
        );

        let source = FsTocSource::with_toc_names(
            config.docs_resolved.source_dir.clone(),
            config.toc.file_names.clone(),
        );
        let tree = resolve_file(&self.toc_file, &source)?;
        let rendered = render(&tree, config.toc.format)?;

        match self.output {
            Some(path) => {
                std::fs::write(&path, rendered)?;
                output.success(&format!("Wrote {}", path.display()));
            }
            None => output.result(&rendered)?,
        }

        Ok(())
    }
}

/// Serialize a resolved tree in the export format.
fn render(tree: &ResolvedNode, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Yaml => Ok(serde_yaml::to_string(tree)?),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(tree)?;
            json.push('\n');
            Ok(json)
        }
    }
}
