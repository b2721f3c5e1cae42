//! Twilly demo driver
//!
//! Reads inbound messages from stdin, one per line, and answers them by
//! stepping a conversation over a small demo flow.

use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use twilly::{
    config::Settings,
    state::{Conversation, StepOutcome, UserContext},
    utils::logging,
    Action, Exit, Flow, Reply,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new().context("failed to load settings")?;
    settings.validate()?;

    // Initialize logging
    let _guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", twilly::info());

    let root = Arc::new(build_root_flow(&settings)?);
    info!(flow = ?root.name(), actions = root.len(), "Root flow ready");

    let user_id = std::env::var("TWILLY_DEMO_USER").unwrap_or_else(|_| "+15550100".to_string());
    let mut context = UserContext::new(user_id.clone());
    let mut conversation = Conversation::new(user_id, &settings.conversation);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        context.set_data("message", line.trim())?;

        match conversation.step(&root, &context)? {
            StepOutcome::Resolved(Action::Reply(reply)) => println!("{}", reply.body()),
            StepOutcome::Resolved(Action::Exit(exit)) => println!("{}", exit.message_body()),
            StepOutcome::FlowEnded => warn!("Flow ended without an exit message"),
        }

        if conversation.is_completed() {
            break;
        }
    }

    info!(interactions = conversation.history().len(), "Conversation finished");
    Ok(())
}

/// Demo flow: greet, echo the user's name back, then say goodbye
fn build_root_flow(settings: &Settings) -> anyhow::Result<Flow> {
    let mut root = settings.flow.root_flow()?;

    root.add_action("greet", |_| {
        Reply::new("Hello! Reply with your name to get started.").ok().map(Action::from)
    })?;
    root.add_action("welcome", |ctx: &UserContext| {
        let name = ctx.get_string("message").filter(|name| !name.is_empty())?;
        Reply::new(format!("Nice to meet you, {}!", name)).ok().map(Action::from)
    })?;
    root.add_action("bye", |_| Some(Exit::new("Thanks for chatting. Goodbye!").into()))?;

    Ok(root)
}
