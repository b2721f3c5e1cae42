//! Reply action
//!
//! Sends a message back to the user while the conversation continues.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::action::ContextObject;
use crate::utils::errors::{ValidationError, ValidationResult};

/// Outbound message with a non-empty body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ReplyFields")]
pub struct Reply {
    body: String,
}

#[derive(Deserialize)]
struct ReplyFields {
    body: String,
}

impl TryFrom<ReplyFields> for Reply {
    type Error = ValidationError;

    fn try_from(fields: ReplyFields) -> ValidationResult<Self> {
        Reply::new(fields.body)
    }
}

impl Reply {
    /// Create a reply, rejecting an empty body
    pub fn new(body: impl Into<String>) -> ValidationResult<Self> {
        let body = body.into();
        if body.is_empty() {
            return Err(ValidationError::ReplyBody);
        }
        Ok(Self { body })
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub(crate) fn context(&self) -> ContextObject {
        let mut context = ContextObject::new();
        context.insert("body".to_string(), Value::String(self.body.clone()));
        context
    }
}
