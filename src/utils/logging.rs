//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for flows and conversations.

use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use crate::config::LoggingConfig;
use crate::state::Interaction;
use crate::utils::errors::{Result, TwillyError};

/// Initialize logging based on configuration.
///
/// When a log directory is configured, the returned guard must be kept alive
/// for as long as file output is wanted.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| TwillyError::Config(format!("Invalid log filter '{}': {}", config.level, e)))?;

    let stdout_layer = if config.json {
        tracing_subscriber::fmt::layer().json().with_writer(std::io::stdout).boxed()
    } else {
        tracing_subscriber::fmt::layer().with_writer(std::io::stdout).boxed()
    };

    let (file_layer, guard) = match &config.file_path {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "twilly.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| TwillyError::Config(format!("Failed to initialize logging: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log an action a conversation resolved, with its serialized envelope
pub fn log_action_resolved(user_id: &str, interaction: &Interaction) {
    debug!(
        user_id = user_id,
        flow = interaction.flow.as_deref(),
        action = %interaction.action_name,
        index = interaction.index,
        action_type = %interaction.action.action_type,
        envelope = %interaction.action.to_value(),
        "Action resolved"
    );
}

/// Log conversation lifecycle events
pub fn log_conversation_event(user_id: &str, event: &str, details: Option<&str>) {
    info!(
        user_id = user_id,
        event = event,
        details = details,
        "Conversation event occurred"
    );
}
