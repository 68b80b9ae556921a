//! Configuration management for docnav.
//!
//! Parses `docnav.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! Path values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `docs.source_dir`
//! - `xref.archives`

mod expand;

use std::path::{Path, PathBuf};

use docnav_toc::{DEFAULT_TOC_NAMES, TocKind};
use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override docs source directory.
    pub source_dir: Option<PathBuf>,
    /// Override export format of resolved TOC trees.
    pub format: Option<OutputFormat>,
    /// Replace the configured cross-reference archives.
    pub archives: Option<Vec<PathBuf>>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "docnav.toml";

/// Default number of cross-reference maps cached per archive.
const DEFAULT_CACHE_CAPACITY: usize = 16;

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Documentation configuration (paths are relative strings from TOML).
    docs: DocsConfigRaw,
    /// TOC lookup and export configuration.
    pub toc: TocConfig,
    /// Cross-reference configuration (paths are relative strings from TOML).
    xref: XrefConfigRaw,

    /// Resolved docs configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Resolved cross-reference configuration (set after loading).
    #[serde(skip)]
    pub xref_resolved: XrefConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw docs configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    source_dir: Option<String>,
}

/// Resolved documentation configuration with absolute paths.
#[derive(Debug, Default)]
pub struct DocsConfig {
    /// Root directory of TOC and content files.
    pub source_dir: PathBuf,
}

/// Export format of resolved TOC trees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

/// TOC configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct TocConfig {
    /// Candidate TOC file names tried in order when a folder is referenced.
    pub file_names: Vec<String>,
    /// Export format of resolved trees.
    pub format: OutputFormat,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            file_names: DEFAULT_TOC_NAMES.iter().map(|&n| n.to_owned()).collect(),
            format: OutputFormat::default(),
        }
    }
}

/// Raw cross-reference configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct XrefConfigRaw {
    archives: Vec<String>,
    cache_capacity: Option<usize>,
}

/// Resolved cross-reference configuration with absolute paths.
#[derive(Debug)]
pub struct XrefConfig {
    /// Archives searched in order.
    pub archives: Vec<PathBuf>,
    /// Maps kept in memory per archive.
    pub cache_capacity: usize,
}

impl Default for XrefConfig {
    fn default() -> Self {
        Self {
            archives: Vec::new(),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`docs.source_dir`").
        field: String,
        /// Error message (e.g., "${`DOCS_ROOT`} not set").
        message: String,
    },
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `docnav.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails, or
    /// validation fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.docs_resolved.source_dir.clone_from(source_dir);
        }
        if let Some(format) = settings.format {
            self.toc.format = format;
        }
        if let Some(archives) = &settings.archives {
            self.xref_resolved.archives.clone_from(archives);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            docs: DocsConfigRaw::default(),
            toc: TocConfig::default(),
            xref: XrefConfigRaw::default(),
            docs_resolved: DocsConfig {
                source_dir: base.join("docs"),
            },
            xref_resolved: XrefConfig::default(),
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_toc()?;
        self.validate_xref()?;
        Ok(())
    }

    /// Validate TOC configuration.
    fn validate_toc(&self) -> Result<(), ConfigError> {
        if self.toc.file_names.is_empty() {
            return Err(ConfigError::Validation(
                "toc.file_names cannot be empty".to_owned(),
            ));
        }

        // Plain file names only; folders are joined at lookup time
        for name in &self.toc.file_names {
            if name.contains(['/', '\\']) || TocKind::from_path(name).is_none() {
                return Err(ConfigError::Validation(format!(
                    "toc.file_names: '{name}' is not a TOC file name"
                )));
            }
        }

        Ok(())
    }

    /// Validate cross-reference configuration.
    fn validate_xref(&self) -> Result<(), ConfigError> {
        if self.xref_resolved.cache_capacity == 0 {
            return Err(ConfigError::Validation(
                "xref.cache_capacity must be greater than 0".to_owned(),
            ));
        }
        Ok(())
    }

    /// Expand environment variable references in path strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref source_dir) = self.docs.source_dir {
            self.docs.source_dir = Some(expand::expand_env(source_dir, "docs.source_dir")?);
        }
        self.xref.archives = expand::expand_env_list(&self.xref.archives, "xref.archives")?;
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.docs_resolved = DocsConfig {
            source_dir: config_dir.join(self.docs.source_dir.as_deref().unwrap_or("docs")),
        };

        self.xref_resolved = XrefConfig {
            archives: self
                .xref
                .archives
                .iter()
                .map(|archive| config_dir.join(archive))
                .collect(),
            cache_capacity: self.xref.cache_capacity.unwrap_or(DEFAULT_CACHE_CAPACITY),
        };
    }
}
