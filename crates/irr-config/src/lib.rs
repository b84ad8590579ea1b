//! # irr-config
//!
//! Layered configuration loading for `irr` using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`IRR_*` prefix, `__` as separator)
//! 2. Project-level `irr.toml` (or an explicit file passed by the CLI)
//! 3. User-level `~/.config/irr/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `IRR_OUTPUT__DIR` -> `output.dir` and
//! `IRR_INPUTS__CODER1` -> `inputs.coder1` (array syntax: `[a.json, b.json]`).
//!
//! # Usage
//!
//! ```no_run
//! use irr_config::IrrConfig;
//!
//! let config = IrrConfig::load_with_dotenv(None).expect("config");
//! config.validate().expect("paired inputs");
//!
//! for pair in config.inputs.pairs() {
//!     println!("{} <-> {}", pair.coder1.display(), pair.coder2.display());
//! }
//! ```

mod error;
mod inputs;
mod output;

pub use error::ConfigError;
pub use inputs::{FilePair, InputsConfig};
pub use output::OutputConfig;

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Project-local config file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "irr.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct IrrConfig {
    #[serde(default)]
    pub inputs: InputsConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl IrrConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// `explicit` replaces the project-local `irr.toml` when given.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when `explicit` does not exist and
    /// [`ConfigError::Figment`] when a source cannot be parsed or a value has
    /// the wrong type.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit.filter(|path| !path.is_file()) {
            return Err(ConfigError::InvalidValue {
                field: "config".into(),
                reason: format!("config file {} does not exist", path.display()),
            });
        }
        Self::figment(explicit).extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Calls `dotenvy` for the working directory before building the figment.
    ///
    /// # Errors
    ///
    /// Same as [`IrrConfig::load`].
    pub fn load_with_dotenv(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load(explicit)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers.
    #[must_use]
    pub fn figment(explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local or explicit config
        match explicit {
            Some(path) => figment = figment.merge(Toml::file_exact(path)),
            None => {
                let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
                if local_path.exists() {
                    figment = figment.merge(Toml::file(local_path));
                }
            }
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("IRR_").split("__"))
    }

    /// Check the pairing rules for the configured export files.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when the coder lists are empty or
    /// of different lengths.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.inputs.validate()
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("irr").join("config.toml"))
    }
}
