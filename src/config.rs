use crate::ids::IdScheme;
use crate::replica::ConflictPolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid limits: {0}")]
    Limits(String),
}

/// Bounds applied by the validators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    pub max_name_len: usize,
    pub min_options: usize,
    pub max_options: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_name_len: 50,
            min_options: 2,
            max_options: 50,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PollConfig {
    /// Question used by `new` when none is given on the command line.
    pub question: String,
    pub limits: Limits,
    pub conflict_policy: ConflictPolicy,
    pub id_scheme: IdScheme,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            question: "Who is today's artist?".to_string(),
            limits: Limits::default(),
            conflict_policy: ConflictPolicy::default(),
            id_scheme: IdScheme::default(),
        }
    }
}

impl PollConfig {
    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        let config: PollConfig = toml::from_str(raw)?;
        config.check()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&raw)
    }

    /// Defaults when no file is given.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn check(&self) -> Result<(), ConfigError> {
        let limits = &self.limits;
        if limits.max_name_len == 0 {
            return Err(ConfigError::Limits("max_name_len must be at least 1".to_string()));
        }
        if limits.min_options > limits.max_options {
            return Err(ConfigError::Limits(format!(
                "min_options ({}) exceeds max_options ({})",
                limits.min_options, limits.max_options
            )));
        }
        Ok(())
    }
}
