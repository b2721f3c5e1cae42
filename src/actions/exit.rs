//! Exit action
//!
//! Ends the conversation once its farewell message has been delivered.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::action::ContextObject;

/// Terminal action carrying the farewell message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exit {
    #[serde(rename = "messageBody")]
    message_body: String,
}

impl Exit {
    /// Create an exit action. Any string is accepted, including the empty one.
    pub fn new(message_body: impl Into<String>) -> Self {
        Self {
            message_body: message_body.into(),
        }
    }

    pub fn message_body(&self) -> &str {
        &self.message_body
    }

    pub(crate) fn context(&self) -> ContextObject {
        let mut context = ContextObject::new();
        context.insert("messageBody".to_string(), Value::String(self.message_body.clone()));
        context
    }
}
