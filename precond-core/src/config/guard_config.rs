//! Guard configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{ENV_LEGACY_IS_FALSE_MESSAGE, ENV_TRACE_VIOLATIONS};
use crate::errors::ConfigError;

/// Settings for a configured `Guard`.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`PRECOND_*`)
/// 2. Config file
/// 3. Compiled defaults
///
/// Unset fields fall back to the compiled defaults through the
/// `effective_*` accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GuardConfig {
    /// Emit a `tracing` event for every violation. Default: true.
    pub trace_violations: Option<bool>,
    /// Report "Condition must be true." as the `is_false` default message,
    /// as older releases did. Default: false.
    pub legacy_is_false_message: Option<bool>,
}

impl GuardConfig {
    /// Returns whether violations are traced, defaulting to true.
    pub fn effective_trace_violations(&self) -> bool {
        self.trace_violations.unwrap_or(true)
    }

    /// Returns whether the legacy `is_false` message is used, defaulting to false.
    pub fn effective_legacy_is_false_message(&self) -> bool {
        self.legacy_is_false_message.unwrap_or(false)
    }

    /// Load configuration from a TOML string. No environment overrides.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML file, then apply environment overrides.
    /// Unknown keys are ignored.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => ConfigError::ReadFailed {
                path: path.display().to_string(),
                message: e.to_string(),
            },
        })?;

        let mut config: GuardConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Compiled defaults with environment overrides applied.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Apply `PRECOND_*` overrides. Unset variables leave the field untouched.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Some(value) = env_bool(ENV_TRACE_VIOLATIONS)? {
            self.trace_violations = Some(value);
        }
        if let Some(value) = env_bool(ENV_LEGACY_IS_FALSE_MESSAGE)? {
            self.legacy_is_false_message = Some(value);
        }
        Ok(())
    }
}

fn env_bool(key: &str) -> Result<Option<bool>, ConfigError> {
    let Ok(raw) = std::env::var(key) else {
        return Ok(None);
    };
    parse_bool(&raw)
        .map(Some)
        .ok_or_else(|| ConfigError::ValidationFailed {
            field: key.to_string(),
            message: format!("expected true/false/1/0, got '{raw}'"),
        })
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}
