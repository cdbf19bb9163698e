//! Client configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{EventsError, EventsResult};

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
const DEFAULT_NAVIGATE_DELAY_MS: u64 = 2000;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_navigate_delay_ms() -> u64 {
    DEFAULT_NAVIGATE_DELAY_MS
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

/// Configuration at ~/.config/events/config.toml
///
/// Every key can be overridden from the environment with an `EVENTS_`
/// prefix, e.g. `EVENTS_BASE_URL`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// How long a success notice stays up before returning to the list
    #[serde(default = "default_navigate_delay_ms")]
    pub navigate_delay_ms: u64,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: default_base_url(),
            navigate_delay_ms: DEFAULT_NAVIGATE_DELAY_MS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    pub fn config_path() -> EventsResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| EventsError::Config("Could not determine config directory".into()))?
            .join("events");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, writing a commented template on first use.
    pub fn load() -> EventsResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> EventsResult<Self> {
        let config = Self::build(path, true)?;
        tracing::debug!(path = %path.display(), base_url = %config.base_url, "loaded config");
        Ok(config)
    }

    /// Values from the file alone, without `EVENTS_*` overrides.
    pub fn load_file_only(path: &Path) -> EventsResult<Self> {
        Self::build(path, false)
    }

    fn build(path: &Path, with_env: bool) -> EventsResult<Self> {
        let mut builder =
            Config::builder().add_source(File::from(path.to_path_buf()).required(false));
        if with_env {
            builder = builder.add_source(Environment::with_prefix("EVENTS").try_parsing(true));
        }

        builder
            .build()
            .map_err(|e| EventsError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| EventsError::Config(e.to_string()))
    }

    /// Rewrite `base_url` in the file at `path`, keeping its other values.
    pub fn persist_base_url(path: &Path, base_url: &str) -> EventsResult<Self> {
        reqwest::Url::parse(base_url)
            .map_err(|e| EventsError::Config(format!("Invalid base URL '{base_url}': {e}")))?;

        let config = ClientConfig {
            base_url: base_url.to_string(),
            ..Self::load_file_only(path)?
        };
        config.save_to(path)?;
        Ok(config)
    }

    pub fn navigate_delay(&self) -> Duration {
        Duration::from_millis(self.navigate_delay_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn save_to(&self, path: &Path) -> EventsResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| EventsError::Serialization(e.to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)
            .map_err(|e| EventsError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> EventsResult<()> {
        let contents = format!(
            "\
# events configuration

# Backend serving /events, /categories and /users:
# base_url = \"{}\"

# Milliseconds to show a success notice before returning to the list:
# navigate_delay_ms = {}

# Request timeout in seconds:
# request_timeout_secs = {}
",
            DEFAULT_BASE_URL, DEFAULT_NAVIGATE_DELAY_MS, DEFAULT_REQUEST_TIMEOUT_SECS
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                EventsError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| EventsError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
