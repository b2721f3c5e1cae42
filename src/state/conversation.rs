//! Conversation cursor
//!
//! A driver keeps one `Conversation` per user and steps it once per inbound
//! message. Stepping walks the flow from the cursor: resolvers that return no
//! action are skipped, a `Reply` advances the cursor past itself, an `Exit`
//! ends the conversation, and running off the end of the flow ends it too.
//! The conversation only stores indices, so a persisted cursor can be resumed
//! against the same flow definition.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use super::context::UserContext;
use super::interaction::Interaction;
use crate::actions::Action;
use crate::config::ConversationConfig;
use crate::flows::Flow;
use crate::utils::errors::{Result, TwillyError};
use crate::utils::logging;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationStatus {
    Active,
    Completed,
}

/// Result of a single [`Conversation::step`]
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    /// A resolver produced this action
    Resolved(Action),
    /// No action remained in the flow; the conversation is now completed
    FlowEnded,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: Uuid,
    pub user_id: String,
    cursor: usize,
    status: ConversationStatus,
    history: Vec<Interaction>,
    history_limit: usize,
    pub started_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Conversation {
    /// Start a conversation for a user at the first action of a flow
    pub fn new(user_id: impl Into<String>, config: &ConversationConfig) -> Self {
        let now = Utc::now();
        let conversation = Self {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            cursor: 0,
            status: ConversationStatus::Active,
            history: Vec::new(),
            history_limit: config.history_limit,
            started_at: now,
            updated_at: now,
        };
        logging::log_conversation_event(&conversation.user_id, "started", None);
        conversation
    }

    pub fn status(&self) -> ConversationStatus {
        self.status
    }

    pub fn is_completed(&self) -> bool {
        self.status == ConversationStatus::Completed
    }

    /// Index of the next action to resolve
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Actions produced so far, oldest first
    pub fn history(&self) -> &[Interaction] {
        &self.history
    }

    pub fn last_interaction(&self) -> Option<&Interaction> {
        self.history.last()
    }

    /// Resolve the next action of `flow` for this user
    pub fn step(&mut self, flow: &Flow, context: &UserContext) -> Result<StepOutcome> {
        if self.is_completed() {
            return Err(TwillyError::InvalidStateTransition {
                from: "completed".to_string(),
                to: "step".to_string(),
            });
        }

        while let (Some(name), Some(resolve)) = (
            flow.select_action_name(self.cursor),
            flow.select_action_resolver(self.cursor),
        ) {
            let index = self.cursor;
            self.cursor += 1;

            let Some(action) = resolve(context) else {
                debug!(user_id = %self.user_id, action = %name, index, "Resolver produced no action, skipping");
                continue;
            };

            let interaction = Interaction::new(flow.name(), name, index, &action);
            logging::log_action_resolved(&self.user_id, &interaction);
            self.record(interaction);

            if action.is_terminal() {
                self.complete("exit");
            }
            return Ok(StepOutcome::Resolved(action));
        }

        self.complete("flow_ended");
        Ok(StepOutcome::FlowEnded)
    }

    /// Move the cursor back to the start of the flow, keeping the history
    pub fn restart(&mut self) {
        self.cursor = 0;
        self.status = ConversationStatus::Active;
        self.updated_at = Utc::now();
        info!(user_id = %self.user_id, conversation_id = %self.id, "Conversation restarted");
    }

    fn record(&mut self, interaction: Interaction) {
        self.history.push(interaction);
        if self.history.len() > self.history_limit {
            let excess = self.history.len() - self.history_limit;
            self.history.drain(..excess);
        }
        self.updated_at = Utc::now();
    }

    fn complete(&mut self, reason: &str) {
        self.status = ConversationStatus::Completed;
        self.updated_at = Utc::now();
        logging::log_conversation_event(&self.user_id, "completed", Some(reason));
    }
}
