//! CLI error types.

use docnav_config::ConfigError;
use docnav_toc::TocError;
use docnav_xref::XrefError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Toc(#[from] TocError),

    #[error("{0}")]
    Xref(#[from] XrefError),

    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No cross-reference found for uid '{0}'")]
    UidNotFound(String),

    #[error("{0}")]
    Validation(String),
}
