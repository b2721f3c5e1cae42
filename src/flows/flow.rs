//! Flow registry implementation

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::entry::{ActionEntry, Resolver};
use crate::actions::Action;
use crate::state::UserContext;
use crate::utils::errors::{ValidationError, ValidationResult};

/// What a second `set_name` call does once a flow already has a name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamePolicy {
    /// The name can be assigned once; later assignments fail
    #[default]
    Reject,
    /// Later assignments replace the current name
    Overwrite,
}

#[derive(Clone)]
struct FlowAction {
    name: String,
    resolve: Resolver,
}

/// Ordered registry of uniquely named action resolvers.
///
/// Registration happens up front; once built, a flow can be shared read-only
/// (for example behind an `Arc`) by every conversation that walks it.
#[derive(Clone, Default)]
pub struct Flow {
    name: Option<String>,
    name_policy: NamePolicy,
    actions: Vec<FlowAction>,
}

impl Flow {
    /// Create an empty, unnamed flow
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty flow with a name
    pub fn named(name: impl Into<String>) -> ValidationResult<Self> {
        let mut flow = Self::new();
        flow.set_name(name)?;
        Ok(flow)
    }

    /// Choose how repeated `set_name` calls behave
    pub fn with_name_policy(mut self, policy: NamePolicy) -> Self {
        self.name_policy = policy;
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn name_policy(&self) -> NamePolicy {
        self.name_policy
    }

    /// Assign the flow's name, subject to the flow's [`NamePolicy`]
    pub fn set_name(&mut self, name: impl Into<String>) -> ValidationResult<()> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::FlowName);
        }

        if let Some(current) = &self.name {
            if self.name_policy == NamePolicy::Reject {
                warn!(flow = %current, rejected = %name, "Flow name already set");
                return Err(ValidationError::FlowNameAlreadySet {
                    current: current.clone(),
                });
            }
        }

        debug!(flow = %name, "Flow name set");
        self.name = Some(name);
        Ok(())
    }

    /// Register a single named resolver at the end of the flow
    pub fn add_action<F>(&mut self, name: impl Into<String>, resolve: F) -> ValidationResult<()>
    where
        F: Fn(&UserContext) -> Option<Action> + Send + Sync + 'static,
    {
        self.add_resolver(name, std::sync::Arc::new(resolve))
    }

    /// Register an existing resolver handle at the end of the flow
    pub fn add_resolver(&mut self, name: impl Into<String>, resolve: Resolver) -> ValidationResult<()> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::ActionName);
        }
        self.ensure_unique(&name, &[])?;

        debug!(flow = ?self.name, action = %name, index = self.actions.len(), "Registered flow action");
        self.actions.push(FlowAction { name, resolve });
        Ok(())
    }

    /// Register several resolvers at once, in order.
    ///
    /// Either every entry is added or, on the first invalid entry, none are.
    pub fn add_actions<I>(&mut self, entries: I) -> ValidationResult<()>
    where
        I: IntoIterator,
        I::Item: Into<ActionEntry>,
    {
        let mut staged: Vec<FlowAction> = Vec::new();

        for entry in entries {
            let entry = entry.into();
            let name = match entry.name {
                Some(name) if !name.is_empty() => name,
                _ => return Err(ValidationError::ActionEntryName),
            };
            let resolve = entry.resolve.ok_or(ValidationError::ActionResolver)?;
            self.ensure_unique(&name, &staged)?;
            staged.push(FlowAction { name, resolve });
        }

        if staged.is_empty() {
            return Err(ValidationError::NoActions);
        }

        debug!(
            flow = ?self.name,
            count = staged.len(),
            first_index = self.actions.len(),
            "Registered flow actions"
        );
        self.actions.extend(staged);
        Ok(())
    }

    fn ensure_unique(&self, name: &str, staged: &[FlowAction]) -> ValidationResult<()> {
        let taken = self
            .actions
            .iter()
            .chain(staged.iter())
            .any(|action| action.name == name);

        if taken {
            warn!(flow = ?self.name, action = %name, "Duplicate flow action name");
            return Err(ValidationError::DuplicateActionName {
                name: name.to_string(),
            });
        }
        Ok(())
    }

    /// Number of registered actions
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Name of the action at `index`, if one is registered there
    pub fn select_action_name(&self, index: usize) -> Option<&str> {
        self.actions.get(index).map(|action| action.name.as_str())
    }

    /// Resolver of the action at `index`, if one is registered there
    pub fn select_action_resolver(&self, index: usize) -> Option<&Resolver> {
        self.actions.get(index).map(|action| &action.resolve)
    }

    /// Index of the action registered under `name`
    pub fn position(&self, name: &str) -> Option<usize> {
        self.actions.iter().position(|action| action.name == name)
    }

    /// Action names in registration order
    pub fn action_names(&self) -> impl Iterator<Item = &str> {
        self.actions.iter().map(|action| action.name.as_str())
    }
}

impl fmt::Debug for Flow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Flow")
            .field("name", &self.name)
            .field("name_policy", &self.name_policy)
            .field("actions", &self.action_names().collect::<Vec<_>>())
            .finish()
    }
}
