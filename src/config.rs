//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/goolabs/goolabs.toml`
//! 3. Environment variables: `GOOLABS_*` prefix
//!
//! Command line flags sit above all of these and are applied by the CLI.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::{ApplicationError, ClientOptions, DEFAULT_TIMEOUT};
use crate::domain::DEFAULT_BASE_URL;

/// Environment variable holding the default credential.
pub const APP_ID_ENV: &str = "GOOLABS_APP_ID";

/// Unified configuration for goolabs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Application id sent with every request
    pub app_id: Option<String>,
    /// Service root (default: https://labs.goo.ne.jp)
    pub base_url: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// Extra request headers
    pub headers: BTreeMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_id: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
            headers: BTreeMap::new(),
        }
    }
}

/// Raw settings for intermediate parsing (`None` → not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub app_id: Option<String>,
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub headers: Option<BTreeMap<String, String>>,
}

/// Get the XDG config directory for goolabs.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "goolabs").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("goolabs.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

impl Settings {
    /// Merge overlay config onto self (base).
    ///
    /// - Scalars: overlay wins if Some, otherwise keep base
    /// - Headers: overlay entries are added, replacing equal names
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        let mut headers = self.headers.clone();
        if let Some(extra) = &overlay.headers {
            headers.extend(extra.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        Self {
            app_id: overlay.app_id.clone().or_else(|| self.app_id.clone()),
            base_url: overlay
                .base_url
                .clone()
                .unwrap_or_else(|| self.base_url.clone()),
            timeout_secs: overlay.timeout_secs.unwrap_or(self.timeout_secs),
            headers,
        }
    }

    /// Load settings with layered precedence: defaults, global file,
    /// then `GOOLABS_*` environment variables.
    pub fn load() -> Result<Self, ApplicationError> {
        let mut current = match global_config_path() {
            Some(path) if path.exists() => Self::from_file(&path)?,
            _ => Self::default(),
        };

        current = Self::apply_env_overrides(current, Self::environment())?;
        debug!("settings loaded: base_url={}", current.base_url);
        Ok(current)
    }

    /// Defaults overlaid with a single TOML file (no environment).
    pub fn from_file(path: &Path) -> Result<Self, ApplicationError> {
        debug!("loading config file: {}", path.display());
        let raw = load_raw_settings(path)?;
        Ok(Self::default().merge_with(&raw))
    }

    /// `GOOLABS_<FIELD>` variables, e.g. `GOOLABS_BASE_URL`. Keys are flat.
    fn environment() -> Environment {
        Environment::with_prefix("GOOLABS").prefix_separator("_")
    }

    /// Apply GOOLABS_* environment variables as explicit overrides.
    fn apply_env_overrides(
        mut settings: Self,
        environment: Environment,
    ) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(environment)
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("app_id") {
            if !val.is_empty() {
                settings.app_id = Some(val);
            }
        }
        if let Ok(val) = config.get_string("base_url") {
            settings.base_url = val;
        }
        match config.get::<u64>("timeout_secs") {
            Ok(val) => settings.timeout_secs = val,
            Err(ConfigError::NotFound(_)) => {}
            Err(e) => return Err(config_err(e)),
        }

        Ok(settings)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Client options derived from these settings.
    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            timeout: Some(self.timeout()),
            headers: self.headers.clone(),
            base_url: Some(self.base_url.clone()),
        }
    }

    /// TOML rendering with the credential masked.
    pub fn to_redacted_toml(&self) -> Result<String, ApplicationError> {
        let mut shown = self.clone();
        if shown.app_id.is_some() {
            shown.app_id = Some("********".to_string());
        }
        toml::to_string_pretty(&shown).map_err(|e| ApplicationError::Config {
            message: format!("render settings: {}", e),
        })
    }
}
