//! # edu-config
//!
//! Layered configuration loading for the Educator Copilot client using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`EDU_*` prefix, `__` as separator)
//! 2. Project-level `.edu-copilot/config.toml`
//! 3. User-level `~/.config/edu-copilot/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `EDU_BACKEND__BASE_URL` -> `backend.base_url`,
//! `EDU_BACKEND__TIMEOUT_SECS` -> `backend.timeout_secs`.
//!
//! # Usage
//!
//! ```no_run
//! use edu_config::EduConfig;
//!
//! let config = EduConfig::load_with_dotenv().expect("config");
//! println!("backend: {}", config.backend.base_url);
//! ```

mod backend;
mod error;

pub use backend::{BackendConfig, DEFAULT_BASE_URL};
pub use error::ConfigError;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory holding the project-local config file.
pub const PROJECT_DIR: &str = ".edu-copilot";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct EduConfig {
    #[serde(default)]
    pub backend: BackendConfig,
}

impl EduConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`EduConfig::load_with_dotenv`] if you
    /// need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or a value fails
    /// validation.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support from the current directory.
    ///
    /// # Errors
    ///
    /// See [`EduConfig::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// See [`EduConfig::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.backend.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain rooted at the current directory.
    pub fn figment() -> Figment {
        Self::figment_for(Path::new("."))
    }

    /// Build the figment provider chain with the project config looked up
    /// under `project_root`.
    pub fn figment_for(project_root: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = project_root.join(PROJECT_DIR).join("config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("EDU_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("edu-copilot").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = EduConfig::default();
        assert_eq!(config.backend.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn figment_builds_without_files() {
        let config: EduConfig = Figment::from(Serialized::defaults(EduConfig::default()))
            .extract()
            .expect("should extract defaults");
        assert_eq!(config.backend.timeout_secs, 60);
    }
}
