//! Configuration validation module
//!
//! This module provides validation functions for configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{TwillyError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_logging_config(&settings.logging)?;
    validate_flow_config(&settings.flow)?;
    validate_conversation_config(&settings.conversation)?;
    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(TwillyError::Config(
            "Log level is required".to_string()
        ));
    }

    if let Err(e) = tracing_subscriber::EnvFilter::try_new(&config.level) {
        return Err(TwillyError::Config(
            format!("Invalid log level: {}. {}", config.level, e)
        ));
    }

    if let Some(path) = &config.file_path {
        if path.is_empty() {
            return Err(TwillyError::Config(
                "Log file path cannot be empty when set".to_string()
            ));
        }
    }

    Ok(())
}

/// Validate flow configuration
fn validate_flow_config(config: &super::FlowConfig) -> Result<()> {
    if config.root_name.is_empty() {
        return Err(TwillyError::Config(
            "Root flow name is required".to_string()
        ));
    }

    Ok(())
}

/// Validate conversation configuration
fn validate_conversation_config(config: &super::ConversationConfig) -> Result<()> {
    if config.history_limit == 0 {
        return Err(TwillyError::Config(
            "Conversation history limit must be greater than 0".to_string()
        ));
    }

    Ok(())
}
