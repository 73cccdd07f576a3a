//! Layered server configuration.
//!
//! Sources, highest priority first:
//! 1. CLI arguments
//! 2. Environment variables (via clap `env` attribute)
//! 3. TOML config file (`<config dir>/teamboard/config.toml`)
//! 4. Compiled defaults

use std::path::{Path, PathBuf};

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("failed to parse config file: {0}")]
    ParseToml(#[from] toml::de::Error),
}

// ---------------------------------------------------------------------------
// TOML file structs (all fields Option for partial overrides)
// ---------------------------------------------------------------------------

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct TeamboardConfigFile {
    server: ServerFileConfig,
    storage: StorageFileConfig,
}

/// `[server]` section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct ServerFileConfig {
    bind_addr: Option<String>,
    log_level: Option<String>,
}

/// `[storage]` section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct StorageFileConfig {
    data_file: Option<PathBuf>,
    seed_sample_data: Option<bool>,
}

// ---------------------------------------------------------------------------
// CLI arguments
// ---------------------------------------------------------------------------

/// CLI arguments for the board server.
#[derive(clap::Parser, Debug, Default)]
#[command(version, about = "Team task board server")]
pub struct TeamboardCliArgs {
    /// Address to bind the HTTP server to.
    #[arg(short, long, env = "TEAMBOARD_ADDR")]
    pub bind: Option<String>,

    /// Path to config file (default: `~/.config/teamboard/config.toml`).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path of the JSON board document.
    #[arg(short, long, env = "TEAMBOARD_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// Start with an empty board instead of the sample board when the data
    /// file does not exist yet.
    #[arg(long)]
    pub no_seed: bool,

    /// Log level filter (trace, debug, info, warn, error).
    #[arg(long, env = "TEAMBOARD_LOG")]
    pub log_level: Option<String>,
}

// ---------------------------------------------------------------------------
// Resolved configuration
// ---------------------------------------------------------------------------

/// Fully resolved server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamboardConfig {
    /// Address to bind the server to (e.g., `0.0.0.0:3001`).
    pub bind_addr: String,
    /// Location of the board document.
    pub data_file: PathBuf,
    /// Whether a missing data file is created with the sample board.
    pub seed_sample_data: bool,
    /// Log level filter string.
    pub log_level: String,
}

impl Default for TeamboardConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3001".to_owned(),
            data_file: PathBuf::from("data").join("data.json"),
            seed_sample_data: true,
            log_level: "info".to_owned(),
        }
    }
}

impl TeamboardConfig {
    /// Loads configuration by merging CLI args, env vars, and a TOML file.
    ///
    /// An explicit `--config` path must exist. Without one, the default path
    /// is tried and a missing file is treated as empty config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the config file cannot be read or parsed.
    pub fn load(cli: &TeamboardCliArgs) -> Result<Self, ConfigError> {
        let file = load_config_file(cli.config.as_deref())?;
        Ok(Self::resolve(cli, file))
    }

    fn resolve(cli: &TeamboardCliArgs, file: TeamboardConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            bind_addr: cli
                .bind
                .clone()
                .or(file.server.bind_addr)
                .unwrap_or(defaults.bind_addr),
            data_file: cli
                .data_file
                .clone()
                .or(file.storage.data_file)
                .unwrap_or(defaults.data_file),
            seed_sample_data: !cli.no_seed
                && file
                    .storage
                    .seed_sample_data
                    .unwrap_or(defaults.seed_sample_data),
            log_level: cli
                .log_level
                .clone()
                .or(file.server.log_level)
                .unwrap_or(defaults.log_level),
        }
    }
}

fn load_config_file(explicit_path: Option<&Path>) -> Result<TeamboardConfigFile, ConfigError> {
    if let Some(path) = explicit_path {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        return Ok(toml::from_str(&contents)?);
    }

    let Some(config_dir) = dirs::config_dir() else {
        return Ok(TeamboardConfigFile::default());
    };
    let path = config_dir.join("teamboard").join("config.toml");

    match std::fs::read_to_string(&path) {
        Ok(contents) => Ok(toml::from_str(&contents)?),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            Ok(TeamboardConfigFile::default())
        }
        Err(source) => Err(ConfigError::ReadFile { path, source }),
    }
}
