//! Flow entries and resolvers

use std::fmt;
use std::sync::Arc;

use crate::actions::Action;
use crate::state::UserContext;

/// Decides the action for a user, or none to skip this step
pub type Resolver = Arc<dyn Fn(&UserContext) -> Option<Action> + Send + Sync>;

/// Wrap a closure as a [`Resolver`]
pub fn resolver<F>(resolve: F) -> Resolver
where
    F: Fn(&UserContext) -> Option<Action> + Send + Sync + 'static,
{
    Arc::new(resolve)
}

/// A `(name, resolver)` pair handed to [`Flow::add_actions`](super::Flow::add_actions).
///
/// Both fields are optional so that partially assembled entries can be
/// passed in and rejected by the flow's validation.
#[derive(Clone, Default)]
pub struct ActionEntry {
    pub name: Option<String>,
    pub resolve: Option<Resolver>,
}

impl ActionEntry {
    pub fn new<F>(name: impl Into<String>, resolve: F) -> Self
    where
        F: Fn(&UserContext) -> Option<Action> + Send + Sync + 'static,
    {
        Self {
            name: Some(name.into()),
            resolve: Some(Arc::new(resolve)),
        }
    }

    /// Entry reusing an existing resolver handle
    pub fn from_resolver(name: impl Into<String>, resolve: Resolver) -> Self {
        Self {
            name: Some(name.into()),
            resolve: Some(resolve),
        }
    }
}

impl<S: Into<String>> From<(S, Resolver)> for ActionEntry {
    fn from((name, resolve): (S, Resolver)) -> Self {
        Self::from_resolver(name, resolve)
    }
}

impl fmt::Debug for ActionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionEntry")
            .field("name", &self.name)
            .field("resolve", &self.resolve.as_ref().map(|_| "<resolver>"))
            .finish()
    }
}
