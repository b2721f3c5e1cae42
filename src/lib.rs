//! Twilly
//!
//! Conversation flow definitions for SMS bots. A flow is an ordered registry
//! of named resolvers; each resolver looks at the user's context and decides
//! the next action (a reply, an exit, or nothing). The transport that
//! receives messages and sends replies lives outside this crate.

pub mod actions;
pub mod config;
pub mod flows;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{Result, TwillyError, ValidationError, ValidationResult};

// Re-export main components for easy access
pub use actions::{Action, ActionDescription, ActionType, Exit, Reply};
pub use flows::{resolver, ActionEntry, Flow, NamePolicy, Resolver};
pub use state::{Conversation, StepOutcome, UserContext};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
