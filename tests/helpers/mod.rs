//! Test helpers module
//!
//! Shared builders for flow and conversation tests.

#![allow(dead_code)]

use twilly::{Action, Exit, Flow, Reply, UserContext};

/// A string that no other call will return
pub fn unique_string() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Sample user context resembling what a messaging webhook supplies
pub fn test_user_context() -> UserContext {
    UserContext::new("+15550100")
        .with_data("name", "Dylan")
        .expect("Failed to build user context")
}

/// Resolver that never produces an action
pub fn no_action(_: &UserContext) -> Option<Action> {
    None
}

/// Flow with a `greet` reply followed by a `bye` exit
pub fn greet_and_bye_flow() -> Flow {
    let mut flow = Flow::named("root").expect("Failed to name flow");
    flow.add_action("greet", |_| Reply::new("hi").ok().map(Action::from))
        .expect("Failed to add greet");
    flow.add_action("bye", |_| Some(Exit::new("goodbye").into()))
        .expect("Failed to add bye");
    flow
}
