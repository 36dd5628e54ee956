use config::{ConfigError, Environment};
use serde::Deserialize;

const ENV_PREFIX: &str = "PATCH";

pub const DEFAULT_MAX_OPERATIONS: usize = 1000;
pub const DEFAULT_MAX_MERGE_DEPTH: usize = 32;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub max_operations: usize,
    pub max_merge_depth: usize,
}

/// Upper bounds applied to incoming patch documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatchLimits {
    pub max_operations: usize,
    pub max_merge_depth: usize,
}

impl Default for PatchLimits {
    fn default() -> Self {
        Self {
            max_operations: DEFAULT_MAX_OPERATIONS,
            max_merge_depth: DEFAULT_MAX_MERGE_DEPTH,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_environment(Environment::with_prefix(ENV_PREFIX))
    }

    fn from_environment(environment: Environment) -> Result<Self, ConfigError> {
        let s = config::Config::builder()
            .set_default("max_operations", DEFAULT_MAX_OPERATIONS as u64)?
            .set_default("max_merge_depth", DEFAULT_MAX_MERGE_DEPTH as u64)?
            .add_source(environment.try_parsing(true))
            .build()?;

        s.try_deserialize()
    }

    pub fn limits(&self) -> PatchLimits {
        PatchLimits {
            max_operations: self.max_operations,
            max_merge_depth: self.max_merge_depth,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
