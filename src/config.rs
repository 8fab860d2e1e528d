//! # Environment Configuration Loading
//!
//! Explicit, validated loading of a default [`Environment`] for callers that
//! configure the chain from deployment artifacts rather than code: an
//! optional YAML file of string properties, overlaid by `SPI_`-prefixed
//! process environment variables (`SPI_OBJECT_FACTORIES` →
//! `object.factories`). No silent fallbacks: a malformed file is an error,
//! an absent one yields an empty environment.

use crate::error::{ResolutionError, Result};
use crate::naming::Environment;
use std::path::Path;
use tracing::debug;

/// Process environment variable naming the configuration file
pub const CONFIG_PATH_VAR: &str = "SPI_CONFIG_PATH";

const ENV_PREFIX: &str = "SPI_";

/// Reserved variables that configure the crate itself, not the chain
const RESERVED_VARS: &[&str] = &["SPI_CONFIG_PATH", "SPI_ENV", "SPI_LOG"];

/// Loads default environments from files and process variables
#[derive(Debug, Default)]
pub struct EnvironmentLoader;

impl EnvironmentLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load the default environment: the file named by `SPI_CONFIG_PATH`
    /// (when set), overlaid by `SPI_`-prefixed process variables
    pub fn load(&self) -> Result<Environment> {
        let mut environment = match std::env::var(CONFIG_PATH_VAR) {
            Ok(path) => self.load_from_file(Path::new(&path))?,
            Err(_) => Environment::new(),
        };
        self.overlay_process_env(&mut environment);
        Ok(environment)
    }

    /// Load an environment from a YAML mapping of scalar keys to scalar values
    pub fn load_from_file(&self, path: &Path) -> Result<Environment> {
        debug!(path = %path.display(), "Loading environment configuration");

        let raw = std::fs::read_to_string(path).map_err(|e| {
            ResolutionError::InvalidConfiguration {
                key: path.display().to_string(),
                reason: format!("failed to read file: {e}"),
            }
        })?;

        let parsed: serde_yaml::Value =
            serde_yaml::from_str(&raw).map_err(|e| ResolutionError::InvalidConfiguration {
                key: path.display().to_string(),
                reason: format!("invalid YAML: {e}"),
            })?;

        let mapping = parsed
            .as_mapping()
            .ok_or_else(|| ResolutionError::InvalidConfiguration {
                key: path.display().to_string(),
                reason: "top-level value must be a mapping".to_string(),
            })?;

        let mut environment = Environment::new();
        for (key, value) in mapping {
            let key = Self::scalar(key).ok_or_else(|| ResolutionError::InvalidConfiguration {
                key: path.display().to_string(),
                reason: format!("non-scalar key: {key:?}"),
            })?;
            let value =
                Self::scalar(value).ok_or_else(|| ResolutionError::InvalidConfiguration {
                    key: key.clone(),
                    reason: "value must be a scalar".to_string(),
                })?;
            environment.insert(key, value);
        }
        Ok(environment)
    }

    /// Overlay `SPI_`-prefixed process variables, highest precedence.
    /// `SPI_OBJECT_FACTORIES` becomes `object.factories`.
    fn overlay_process_env(&self, environment: &mut Environment) {
        for (name, value) in std::env::vars() {
            if RESERVED_VARS.contains(&name.as_str()) {
                continue;
            }
            if let Some(stripped) = name.strip_prefix(ENV_PREFIX) {
                let key = stripped.to_lowercase().replace('_', ".");
                environment.insert(key, value);
            }
        }
    }

    fn scalar(value: &serde_yaml::Value) -> Option<String> {
        match value {
            serde_yaml::Value::String(s) => Some(s.clone()),
            serde_yaml::Value::Number(n) => Some(n.to_string()),
            serde_yaml::Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}
