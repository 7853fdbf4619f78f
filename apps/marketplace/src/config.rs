//! # Marketplace Configuration
//!
//! Layered configuration for the marketplace app.
//!
//! ## Loading Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  1. Defaults          AppConfig::default()                              │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  2. TOML file         explicit path, or <config dir>/marketplace.toml   │
//! │         │             (missing file → keep defaults)                    │
//! │         ▼                                                               │
//! │  3. Environment       BARBERHUB_* variables                             │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  4. validate()                                                          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example File
//! ```toml
//! seed_demo_data = true
//!
//! [session]
//! backend = "file"
//! path = "/tmp/barberhub/session.json"
//!
//! [auth.google]
//! web_client_id = "123-web.apps.googleusercontent.com"
//!
//! [ui]
//! post_job_delay_ms = 800
//! list_shop_delay_ms = 600
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use barberhub_auth::OAuthConfig;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{AppError, AppResult};

/// File name looked up in the platform config directory.
pub const CONFIG_FILE_NAME: &str = "marketplace.toml";

// =============================================================================
// Session Backend
// =============================================================================

/// Where the "has entered" flag is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionBackendKind {
    /// Process memory; forgotten on exit.
    Memory,
    /// JSON file in the data directory.
    #[default]
    File,
    /// No storage; the welcome screen always shows.
    None,
}

impl fmt::Display for SessionBackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionBackendKind::Memory => write!(f, "memory"),
            SessionBackendKind::File => write!(f, "file"),
            SessionBackendKind::None => write!(f, "none"),
        }
    }
}

impl FromStr for SessionBackendKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "memory" => Ok(SessionBackendKind::Memory),
            "file" => Ok(SessionBackendKind::File),
            "none" | "off" => Ok(SessionBackendKind::None),
            other => Err(AppError::InvalidConfig(format!(
                "unknown session backend: {}",
                other
            ))),
        }
    }
}

/// `[session]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub backend: SessionBackendKind,
    /// Overrides the platform data directory for the file backend.
    pub path: Option<PathBuf>,
}

// =============================================================================
// UI Timings
// =============================================================================

/// `[ui]` section: simulated network delays on submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub post_job_delay_ms: u64,
    pub list_shop_delay_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            post_job_delay_ms: 800,
            list_shop_delay_ms: 600,
        }
    }
}

impl UiConfig {
    pub fn post_job_delay(&self) -> Duration {
        Duration::from_millis(self.post_job_delay_ms)
    }

    pub fn list_shop_delay(&self) -> Duration {
        Duration::from_millis(self.list_shop_delay_ms)
    }

    /// No delays, for tests and scripted runs.
    pub fn instant() -> Self {
        UiConfig {
            post_job_delay_ms: 0,
            list_shop_delay_ms: 0,
        }
    }
}

// =============================================================================
// App Config
// =============================================================================

/// Complete app configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Start with the demo listings.
    pub seed_demo_data: bool,
    pub session: SessionConfig,
    pub auth: OAuthConfig,
    pub ui: UiConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            seed_demo_data: true,
            session: SessionConfig::default(),
            auth: OAuthConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

impl AppConfig {
    /// Loads defaults, then the file, then environment overrides.
    pub fn load(config_path: Option<PathBuf>) -> AppResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading marketplace config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Loads config or returns the defaults if loading fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load marketplace config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Writes the config as TOML.
    pub fn save(&self, config_path: Option<PathBuf>) -> AppResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| AppError::ConfigSave("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, toml::to_string_pretty(self)?)?;

        info!(?path, "Marketplace config saved");
        Ok(())
    }

    pub fn validate(&self) -> AppResult<()> {
        if let Some(path) = &self.session.path {
            if path.as_os_str().is_empty() {
                return Err(AppError::InvalidConfig("session.path must not be empty".into()));
            }
            if self.session.backend != SessionBackendKind::File {
                warn!(backend = %self.session.backend, "session.path is ignored by this backend");
            }
        }
        if self.ui.post_job_delay_ms > 10_000 || self.ui.list_shop_delay_ms > 10_000 {
            return Err(AppError::InvalidConfig(
                "ui delays must not exceed 10000 ms".into(),
            ));
        }
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    /// Applies `BARBERHUB_*` overrides from any variable source.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(backend) = lookup("BARBERHUB_SESSION_BACKEND") {
            match backend.parse() {
                Ok(kind) => {
                    debug!(backend = %backend, "Overriding session backend from environment");
                    self.session.backend = kind;
                }
                Err(_) => warn!(backend = %backend, "Unknown session backend in environment"),
            }
        }

        if let Some(path) = lookup("BARBERHUB_SESSION_PATH") {
            self.session.path = Some(PathBuf::from(path));
        }

        if let Some(seed) = lookup("BARBERHUB_SEED_DEMO_DATA") {
            self.seed_demo_data = !matches!(seed.trim(), "0" | "false" | "no");
        }

        self.auth.apply_overrides(&lookup);
    }

    /// `<platform config dir>/marketplace.toml`.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("uk", "barberhub", "marketplace")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Session file location for the file backend.
    pub fn session_path(&self) -> Option<PathBuf> {
        self.session
            .path
            .clone()
            .or_else(barberhub_store::FileStorage::default_path)
    }

    /// Whether a config file exists at `path`.
    pub fn exists_at(path: &Path) -> bool {
        path.is_file()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
