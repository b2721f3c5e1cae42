//! Conversation actions
//!
//! An action is one step of a conversation: what the bot does once a flow
//! resolver has looked at the user's context.

pub mod action;
pub mod exit;
pub mod reply;

pub use action::{Action, ActionDescription, ActionType, ContextObject};
pub use exit::Exit;
pub use reply::Reply;
