//! Flow registry integration tests
//!
//! These tests exercise the public flow and action API the way a driver
//! building a conversation would.

mod helpers;

use std::sync::Arc;
use std::thread;

use assert_matches::assert_matches;
use proptest::prelude::*;
use serde_json::json;

use helpers::*;
use twilly::{resolver, Action, ActionEntry, ActionType, Exit, Flow, Reply, ValidationError};

#[test]
fn test_greet_and_bye_scenario() {
    let flow = greet_and_bye_flow();
    let ctx = test_user_context();

    assert_eq!(flow.len(), 2);

    let greet = (flow.select_action_resolver(0).unwrap())(&ctx).expect("greet should resolve");
    assert_eq!(greet.describe().to_value(), json!({ "type": "Reply", "body": "hi" }));

    let bye = (flow.select_action_resolver(1).unwrap())(&ctx).expect("bye should resolve");
    assert_eq!(bye.describe().to_value(), json!({ "type": "Exit", "messageBody": "goodbye" }));
}

#[test]
fn test_describe_serializes_without_extra_fields() {
    let action: Action = Reply::new("hello").unwrap().into();
    let value = serde_json::to_value(action.describe()).unwrap();

    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 2);
    assert_eq!(object["type"], json!("Reply"));
    assert_eq!(object["body"], json!("hello"));
}

#[test]
fn test_add_action_grows_flow_by_one() {
    let mut flow = Flow::new();
    let name = unique_string();
    let resolve = resolver(no_action);

    assert_eq!(flow.len(), 0);
    flow.add_resolver(name.clone(), resolve.clone()).unwrap();

    assert_eq!(flow.len(), 1);
    assert_eq!(flow.select_action_name(0), Some(name.as_str()));
    assert!(Arc::ptr_eq(flow.select_action_resolver(0).unwrap(), &resolve));
}

#[test]
fn test_duplicate_name_leaves_flow_unchanged() {
    let mut flow = Flow::new();
    let name = unique_string();

    flow.add_action(name.clone(), no_action).unwrap();
    let err = flow.add_action(name.clone(), no_action).unwrap_err();

    assert_eq!(
        err.to_string(),
        format!("Every Flow's action names must be unique. Unexpected duplicate name: {}", name)
    );
    assert_eq!(flow.len(), 1);
}

#[test]
fn test_add_actions_forms_are_equivalent() {
    let names = [unique_string(), unique_string()];
    let resolvers = [resolver(no_action), resolver(no_action)];

    let mut from_array = Flow::new();
    from_array
        .add_actions([
            ActionEntry::from_resolver(names[0].clone(), resolvers[0].clone()),
            ActionEntry::from_resolver(names[1].clone(), resolvers[1].clone()),
        ])
        .unwrap();

    let mut from_vec = Flow::new();
    from_vec
        .add_actions(
            names
                .iter()
                .cloned()
                .zip(resolvers.iter().cloned())
                .collect::<Vec<_>>(),
        )
        .unwrap();

    for flow in [&from_array, &from_vec] {
        assert_eq!(flow.len(), 2);
        for i in 0..2 {
            assert_eq!(flow.select_action_name(i), Some(names[i].as_str()));
            assert!(Arc::ptr_eq(flow.select_action_resolver(i).unwrap(), &resolvers[i]));
        }
    }
}

#[test]
fn test_add_actions_empty_fails() {
    let mut flow = Flow::new();

    assert_matches!(flow.add_actions(Vec::<ActionEntry>::new()), Err(ValidationError::NoActions));
    assert_matches!(flow.add_actions([] as [ActionEntry; 0]), Err(ValidationError::NoActions));
    assert_eq!(flow.len(), 0);
}

#[test]
fn test_add_actions_invalid_entries() {
    let message =
        "Flow addActions expects an array of objects with a name property set to a non-empty string";

    let invalid = [
        ActionEntry::new("", no_action),
        ActionEntry { name: None, resolve: Some(resolver(no_action)) },
        ActionEntry::default(),
    ];

    for entry in invalid {
        let mut flow = Flow::new();
        assert_eq!(flow.add_actions([entry]).unwrap_err().to_string(), message);
        assert!(flow.is_empty());
    }
}

#[test]
fn test_flow_constructor_messages() {
    let message = "Flow constructor expects a non-empty string as the first argument";

    assert_eq!(Flow::named("").unwrap_err().to_string(), message);
    assert_eq!(Flow::new().set_name("").unwrap_err().to_string(), message);

    let name = unique_string();
    let mut flow = Flow::new();
    flow.set_name(name.clone()).unwrap();
    assert_eq!(flow.name(), Some(name.as_str()));
}

#[test]
fn test_exit_is_not_validated() {
    let exit: Action = Exit::new("").into();
    assert_eq!(exit.action_type(), ActionType::Exit);
    assert_eq!(exit.describe().to_value(), json!({ "type": "Exit", "messageBody": "" }));
}

#[test]
fn test_flow_shared_across_threads() {
    let flow = Arc::new(greet_and_bye_flow());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let flow = Arc::clone(&flow);
            thread::spawn(move || {
                let ctx = twilly::UserContext::new(format!("+1555010{}", i));
                let action = (flow.select_action_resolver(i % 2).unwrap())(&ctx).unwrap();
                action.action_type()
            })
        })
        .collect();

    let types: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(
        types,
        vec![ActionType::Reply, ActionType::Exit, ActionType::Reply, ActionType::Exit]
    );
}

proptest! {
    #[test]
    fn prop_reply_describes_body(body in ".+") {
        let action: Action = Reply::new(body.clone()).unwrap().into();
        let description = action.describe();

        prop_assert_eq!(description.action_type, ActionType::Reply);
        prop_assert_eq!(description.to_value(), json!({ "type": "Reply", "body": body }));
    }

    #[test]
    fn prop_exit_describes_message(message in ".*") {
        let action: Action = Exit::new(message.clone()).into();
        prop_assert_eq!(action.describe().to_value(), json!({ "type": "Exit", "messageBody": message }));
    }

    #[test]
    fn prop_select_out_of_range_is_none(count in 0usize..8, offset in 0usize..100) {
        let mut flow = Flow::new();
        for i in 0..count {
            flow.add_action(format!("action_{}", i), no_action).unwrap();
        }

        let index = count + offset;
        prop_assert!(flow.select_action_name(index).is_none());
        prop_assert!(flow.select_action_resolver(index).is_none());
        prop_assert_eq!(flow.len(), count);
    }
}
