//! Interaction records
//!
//! One record per action a conversation produced, holding the action's
//! `{ type, ...context }` envelope so it can be persisted or logged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::actions::{Action, ActionDescription};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    pub id: Uuid,
    /// Name of the flow the action was resolved from
    pub flow: Option<String>,
    pub action_name: String,
    pub index: usize,
    pub action: ActionDescription,
    pub created_at: DateTime<Utc>,
}

impl Interaction {
    pub fn new(flow: Option<&str>, action_name: &str, index: usize, action: &Action) -> Self {
        Self {
            id: Uuid::new_v4(),
            flow: flow.map(str::to_string),
            action_name: action_name.to_string(),
            index,
            action: action.describe(),
            created_at: Utc::now(),
        }
    }

    /// Rebuild the recorded action
    pub fn to_action(&self) -> Result<Action, serde_json::Error> {
        Action::try_from(self.action.clone())
    }
}
