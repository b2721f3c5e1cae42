//! Action type and its serialized description
//!
//! Every action exposes a flat context object (field name to primitive value)
//! and a type tag. Together they are enough to reproduce the action's effect
//! without the action itself, which is what persistence and logging consume.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::exit::Exit;
use super::reply::Reply;

/// Flat mapping of field name to primitive value describing an action
pub type ContextObject = serde_json::Map<String, Value>;

/// Type tag of an action variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionType {
    Exit,
    Reply,
}

impl ActionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionType::Exit => "Exit",
            ActionType::Reply => "Reply",
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single conversation step produced by a flow resolver.
///
/// Actions are immutable once built. Serializing an `Action` yields the same
/// JSON object as its [`ActionDescription`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Action {
    Exit(Exit),
    Reply(Reply),
}

impl Action {
    /// Type tag of this action
    pub fn action_type(&self) -> ActionType {
        match self {
            Action::Exit(_) => ActionType::Exit,
            Action::Reply(_) => ActionType::Reply,
        }
    }

    /// Variant-specific field set
    pub(crate) fn context(&self) -> ContextObject {
        match self {
            Action::Exit(exit) => exit.context(),
            Action::Reply(reply) => reply.context(),
        }
    }

    /// Envelope combining the type tag with the action's context
    pub fn describe(&self) -> ActionDescription {
        ActionDescription {
            action_type: self.action_type(),
            context: self.context(),
        }
    }

    /// Whether reaching this action ends the conversation
    pub fn is_terminal(&self) -> bool {
        matches!(self, Action::Exit(_))
    }
}

impl From<Exit> for Action {
    fn from(exit: Exit) -> Self {
        Action::Exit(exit)
    }
}

impl From<Reply> for Action {
    fn from(reply: Reply) -> Self {
        Action::Reply(reply)
    }
}

/// Serializable `{ type, ...context }` envelope of an action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionDescription {
    #[serde(rename = "type")]
    pub action_type: ActionType,
    #[serde(flatten)]
    pub context: ContextObject,
}

impl ActionDescription {
    /// Look up a single context field
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.context.get(name)
    }

    /// The envelope as a plain JSON object
    pub fn to_value(&self) -> Value {
        let mut object = ContextObject::new();
        object.insert("type".to_string(), Value::String(self.action_type.to_string()));
        for (key, value) in &self.context {
            object.insert(key.clone(), value.clone());
        }
        Value::Object(object)
    }
}

impl TryFrom<ActionDescription> for Action {
    type Error = serde_json::Error;

    /// Rebuild the action an envelope describes, re-running constructor validation
    fn try_from(description: ActionDescription) -> Result<Self, Self::Error> {
        serde_json::from_value(description.to_value())
    }
}
