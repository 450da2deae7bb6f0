//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.libinfo/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::record::DataRecord;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LibInfoConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub fixture: FixtureConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub title: Option<String>,
    pub load_delay_ms: Option<u64>,
}

/// Values delivered by the simulated fetch and the action button.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FixtureConfig {
    pub name: Option<String>,
    pub author: Option<String>,
    pub license: Option<String>,
    pub expiration: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TITLE: &str = "MyLib";
pub const DEFAULT_LOAD_DELAY_MS: u64 = 2000;
pub const DEFAULT_NAME: &str = "MyLib";
pub const DEFAULT_AUTHOR: &str = "CBN";
pub const DEFAULT_LICENSE: &str = "Commercial";
pub const DEFAULT_EXPIRATION: &str = "Tomorrow";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub title: String,
    pub load_delay: Duration,
    /// Record injected once the load delay elapses.
    pub data: DataRecord,
    /// Expiration text shown when the action fires.
    pub expiration: String,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve_with(&LibInfoConfig::default(), None, |_| None)
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.libinfo/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".libinfo").join("config.toml"))
}

/// Load config from `~/.libinfo/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `LibInfoConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<LibInfoConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(LibInfoConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<LibInfoConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(LibInfoConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: LibInfoConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# libinfo Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# title = "MyLib"                    # Or set LIBINFO_TITLE env var
# load_delay_ms = 2000               # Or set LIBINFO_LOAD_DELAY_MS, or --delay-ms

# [fixture]
# name = "MyLib"
# author = "CBN"
# license = "Commercial"
# expiration = "Tomorrow"
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_delay_ms` comes from `--delay-ms` (None = not specified).
pub fn resolve(config: &LibInfoConfig, cli_delay_ms: Option<u64>) -> ResolvedConfig {
    resolve_with(config, cli_delay_ms, |key| std::env::var(key).ok())
}

/// Resolution with an injectable environment lookup.
fn resolve_with(
    config: &LibInfoConfig,
    cli_delay_ms: Option<u64>,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Title: env → config → default
    let title = env("LIBINFO_TITLE")
        .or_else(|| config.general.title.clone())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());

    // Delay: CLI → env → config → default
    let env_delay = env("LIBINFO_LOAD_DELAY_MS").and_then(|raw| match raw.trim().parse() {
        Ok(ms) => Some(ms),
        Err(e) => {
            warn!("Ignoring LIBINFO_LOAD_DELAY_MS={:?}: {}", raw, e);
            None
        }
    });
    let delay_ms = cli_delay_ms
        .or(env_delay)
        .or(config.general.load_delay_ms)
        .unwrap_or(DEFAULT_LOAD_DELAY_MS);

    let fixture = &config.fixture;
    let data = DataRecord::new(
        fixture.name.as_deref().unwrap_or(DEFAULT_NAME),
        fixture.author.as_deref().unwrap_or(DEFAULT_AUTHOR),
        fixture.license.as_deref().unwrap_or(DEFAULT_LICENSE),
    );

    ResolvedConfig {
        title,
        load_delay: Duration::from_millis(delay_ms),
        data,
        expiration: fixture
            .expiration
            .clone()
            .unwrap_or_else(|| DEFAULT_EXPIRATION.to_string()),
    }
}
