//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::flows::{Flow, NamePolicy};
use crate::utils::errors::{Result, ValidationResult};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub flow: FlowConfig,
    pub conversation: ConversationConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for daily rolling log files; stdout only when unset
    pub file_path: Option<String>,
    pub json: bool,
}

/// Flow construction configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FlowConfig {
    pub root_name: String,
    pub name_policy: NamePolicy,
}

/// Conversation driver configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ConversationConfig {
    /// Maximum number of interactions kept per conversation
    pub history_limit: usize,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("TWILLY")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Load settings from a specific file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<()> {
        super::validation::validate_settings(self)
    }
}

impl FlowConfig {
    /// Empty root flow named and configured from these settings
    pub fn root_flow(&self) -> ValidationResult<Flow> {
        let mut flow = Flow::new().with_name_policy(self.name_policy);
        flow.set_name(self.root_name.clone())?;
        Ok(flow)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_path: None,
            json: false,
        }
    }
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            root_name: "root".to_string(),
            name_policy: NamePolicy::Reject,
        }
    }
}

impl Default for ConversationConfig {
    fn default() -> Self {
        Self { history_limit: 50 }
    }
}
