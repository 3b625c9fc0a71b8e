use std::path::PathBuf;

use anyhow::Result;
use cogito_engine::Pacing;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ui::{Locale, Theme};

/// Optional user configuration. An absent file means defaults; flags always
/// override what the file says.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Default collection document, used when neither the --source flag nor
    /// COGITO_SOURCE is set.
    #[serde(default)]
    pub source: Option<String>,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub pacing: PacingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub theme: Option<Theme>,
    #[serde(default)]
    pub locale: Option<Locale>,
}

/// Timing knobs for the interactive browser. The defaults mirror the
/// pacing the interface shipped with; none of them are invariants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PacingConfig {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default = "default_batch_delay_ms")]
    pub batch_delay_ms: u64,
    #[serde(default = "default_load_all_delay_ms")]
    pub load_all_delay_ms: u64,
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_batch_delay_ms() -> u64 {
    500
}

fn default_load_all_delay_ms() -> u64 {
    1000
}

fn default_batch_size() -> usize {
    20
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            batch_delay_ms: default_batch_delay_ms(),
            load_all_delay_ms: default_load_all_delay_ms(),
            batch_size: default_batch_size(),
        }
    }
}

impl PacingConfig {
    pub fn to_pacing(&self) -> Pacing {
        Pacing {
            debounce: Duration::from_millis(self.debounce_ms),
            batch_delay: Duration::from_millis(self.batch_delay_ms),
            load_all_delay: Duration::from_millis(self.load_all_delay_ms),
            batch_size: self.batch_size.max(1),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("cogito").join("config.toml"))
    }
}

/// Resolve the collection source path based on priority:
/// 1. Explicit --source flag (with tilde expansion)
/// 2. COGITO_SOURCE environment variable (with tilde expansion)
/// 3. `source` entry in the config file
/// 4. ./thoughts.json
pub fn resolve_source(explicit: Option<&str>, config: &Config) -> PathBuf {
    if let Some(path) = explicit {
        return expand_tilde(path);
    }

    if let Ok(env_path) = std::env::var("COGITO_SOURCE") {
        return expand_tilde(&env_path);
    }

    if let Some(path) = &config.source {
        return expand_tilde(path);
    }

    PathBuf::from("thoughts.json")
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}
