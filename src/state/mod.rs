//! State management module
//!
//! This module handles the user context handed to resolvers and the
//! per-user conversation cursor that walks a flow.

pub mod context;
pub mod conversation;
pub mod interaction;

// Re-export commonly used state components
pub use context::UserContext;
pub use conversation::{Conversation, ConversationStatus, StepOutcome};
pub use interaction::Interaction;
