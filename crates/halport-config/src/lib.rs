//! # halport-config
//!
//! Layered configuration loading for halport using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`HALPORT_*` prefix, `__` as separator)
//! 2. An explicit `--config` file, when given
//! 3. Project-level `.halport/config.toml`
//! 4. User-level `~/.config/halport/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `HALPORT_API__PREFIX` -> `api.prefix`,
//! `HALPORT_PLACEHOLDER__STATUS_STATEMENT` -> `placeholder.status_statement`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use halport_config::PortConfig;
//!
//! let config = PortConfig::load_with_dotenv(None).expect("config");
//! let conventions = config.conventions();
//! assert_eq!(conventions.prefix, config.api.prefix);
//! ```

mod api;
mod error;
mod markers;
mod output;
mod placeholder;

pub use api::ApiConfig;
pub use error::ConfigError;
pub use markers::MarkerConfig;
pub use output::OutputConfig;
pub use placeholder::PlaceholderConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use halport_core::{Conventions, CoreError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PortConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub markers: MarkerConfig,
    #[serde(default)]
    pub placeholder: PlaceholderConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl PortConfig {
    /// Load configuration with an optional explicit TOML file layered above
    /// the project-local file, and validate it.
    ///
    /// Does NOT call `dotenvy`; use [`PortConfig::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    /// Returns `ConfigError` if a source fails to parse or a value is invalid.
    pub fn load_from(extra: Option<&Path>) -> Result<Self, ConfigError> {
        let config: Self = Self::figment_with(extra).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`PortConfig::load_from`], after loading `.env` from the current directory.
    ///
    /// # Errors
    /// Returns `ConfigError` if a source fails to parse or a value is invalid.
    pub fn load_with_dotenv(extra: Option<&Path>) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load_from(extra)
    }

    /// Build the provider chain, optionally with an explicit config file.
    fn figment_with(extra: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".halport/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Explicit file (existence is checked by the caller)
        if let Some(path) = extra {
            figment = figment.merge(Toml::file(path));
        }

        // Layer 4: Environment variables (highest priority)
        figment.merge(Env::prefixed("HALPORT_").split("__"))
    }

    /// The prefix and markers the extractors and emitter work with.
    #[must_use]
    pub fn conventions(&self) -> Conventions {
        Conventions {
            prefix: self.api.prefix.clone(),
            user_block_begin: self.markers.user_block_begin.clone(),
            user_block_end: self.markers.user_block_end.clone(),
            body_begin: self.markers.body_begin.clone(),
            body_end: self.markers.body_end.clone(),
        }
    }

    /// Validate values that serde cannot check on its own.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidValue` naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.conventions()
            .validate()
            .map_err(|CoreError::InvalidConventions { field, reason }| {
                ConfigError::InvalidValue {
                    field: if field == "prefix" {
                        "api.prefix".to_string()
                    } else {
                        format!("markers.{field}")
                    },
                    reason,
                }
            })?;

        if self.output.indent.contains('\n') || !self.output.indent.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "output.indent".to_string(),
                reason: "must contain only spaces or tabs".to_string(),
            });
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("halport").join("config.toml"))
    }
}
