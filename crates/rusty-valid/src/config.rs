// File: src/config.rs
// Purpose: Configuration parsing from rusty-valid.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Validation configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ValidConfig {
    #[serde(default)]
    pub validation: ValidationConfig,

    #[serde(default)]
    pub report: ReportConfig,
}

/// Behaviour of new contexts
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Stop at the first recorded error (default: false)
    #[serde(default = "default_false")]
    pub lazy: bool,
}

/// How `Valid::report` renders collected errors
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ReportConfig {
    #[serde(default)]
    pub format: ReportFormat,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// One log line per field and message
    #[default]
    Plain,
    /// A single JSON document
    Structured,
}

fn default_false() -> bool {
    false
}

impl ValidConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing file means defaults
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: ValidConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        tracing::debug!(?path, lazy = config.validation.lazy, "loaded validation config");
        Ok(config)
    }

    /// Load configuration from default path (./rusty-valid.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("rusty-valid.toml")
    }
}
