//! Start-up configuration read from the environment.
//!
//! # Responsibility
//! - Resolve log level, log directory and optional RNG seed once per run.
//!
//! # Invariants
//! - Unset variables fall back to core defaults.
//! - A malformed seed is a start-up error, never silently ignored.

use quantum_vault_core::{default_log_dir, default_log_level};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const ENV_LOG_LEVEL: &str = "QUANTUM_VAULT_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "QUANTUM_VAULT_LOG_DIR";
pub const ENV_SEED: &str = "QUANTUM_VAULT_SEED";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub log_level: String,
    pub log_dir: String,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidSeed(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSeed(value) => {
                write!(f, "{ENV_SEED} must be an unsigned integer, got `{value}`")
            }
        }
    }
}

impl Error for ConfigError {}

impl CliConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let seed = match non_empty(ENV_SEED) {
            Some(raw) => Some(
                raw.trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidSeed(raw.clone()))?,
            ),
            None => None,
        };

        Ok(Self {
            log_level: non_empty(ENV_LOG_LEVEL).unwrap_or_else(|| default_log_level().to_string()),
            log_dir: non_empty(ENV_LOG_DIR)
                .unwrap_or_else(|| default_log_dir().to_string_lossy().into_owned()),
            seed,
        })
    }
}
