//! Integration tests for [`handler_chain::HandlerChain`].
//!
//! Covers: phase order (before first→last, after last→first), a before hook stopping the chain,
//! Reply/Stop ending the handle phase, and Ignore/Continue passing the update on.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use dbot_core::{Chat, Handler, HandlerResponse, Message, MessageDirection, User, MESSAGE_TYPE_TEXT};
use handler_chain::HandlerChain;

type Journal = Arc<Mutex<Vec<String>>>;

fn button_press(content: &str) -> Message {
    Message {
        id: "42".to_string(),
        user: User {
            id: 7,
            username: Some("carry".to_string()),
            first_name: Some("Carry".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: 700,
            chat_type: "private".to_string(),
        },
        content: content.to_string(),
        message_type: MESSAGE_TYPE_TEXT.to_string(),
        direction: MessageDirection::Incoming,
        created_at: Utc::now(),
    }
}

/// Records every phase it sees and answers `handle` with a fixed response.
struct Recorder {
    name: &'static str,
    allow: bool,
    response: HandlerResponse,
    journal: Journal,
}

impl Recorder {
    fn new(name: &'static str, response: HandlerResponse, journal: &Journal) -> Arc<Self> {
        Arc::new(Self {
            name,
            allow: true,
            response,
            journal: journal.clone(),
        })
    }

    fn blocking(name: &'static str, journal: &Journal) -> Arc<Self> {
        Arc::new(Self {
            name,
            allow: false,
            response: HandlerResponse::Continue,
            journal: journal.clone(),
        })
    }

    fn log(&self, phase: &str) {
        self.journal.lock().unwrap().push(format!("{}:{}", phase, self.name));
    }
}

#[async_trait]
impl Handler for Recorder {
    async fn before(&self, _message: &Message) -> dbot_core::Result<bool> {
        self.log("before");
        Ok(self.allow)
    }

    async fn handle(&self, _message: &Message) -> dbot_core::Result<HandlerResponse> {
        self.log("handle");
        Ok(self.response.clone())
    }

    async fn after(&self, _message: &Message, response: &HandlerResponse) -> dbot_core::Result<()> {
        self.log(&format!("after({:?})", response));
        Ok(())
    }
}

fn entries(journal: &Journal) -> Vec<String> {
    journal.lock().unwrap().clone()
}

#[tokio::test]
async fn test_phases_run_in_order_and_after_runs_in_reverse() {
    let journal = Journal::default();
    let chain = HandlerChain::new()
        .add_handler(Recorder::new("log", HandlerResponse::Continue, &journal))
        .add_handler(Recorder::new("stats", HandlerResponse::Continue, &journal));

    let response = chain.handle(&button_press("📊 Профиль")).await.unwrap();

    assert_eq!(response, HandlerResponse::Continue);
    assert_eq!(
        entries(&journal),
        vec![
            "before:log",
            "before:stats",
            "handle:log",
            "handle:stats",
            "after(Continue):stats",
            "after(Continue):log",
        ]
    );
}

#[tokio::test]
async fn test_before_false_stops_chain_without_handle_or_after() {
    let journal = Journal::default();
    let chain = HandlerChain::new()
        .add_handler(Recorder::blocking("gate", &journal))
        .add_handler(Recorder::new("stats", HandlerResponse::Reply("x".into()), &journal));

    let response = chain.handle(&button_press("🏅 Топ герои")).await.unwrap();

    assert_eq!(response, HandlerResponse::Stop);
    assert_eq!(entries(&journal), vec!["before:gate"]);
}

#[tokio::test]
async fn test_reply_ends_handle_phase_and_reaches_every_after() {
    let journal = Journal::default();
    let chain = HandlerChain::new()
        .add_handler(Recorder::new("stats", HandlerResponse::Reply("profile".into()), &journal))
        .add_handler(Recorder::new("fallback", HandlerResponse::Continue, &journal));

    let response = chain.handle(&button_press("📊 Профиль")).await.unwrap();

    assert_eq!(response, HandlerResponse::Reply("profile".to_string()));
    let journal = entries(&journal);
    assert!(!journal.contains(&"handle:fallback".to_string()));
    assert_eq!(
        &journal[journal.len() - 2..],
        &[
            "after(Reply(\"profile\")):fallback".to_string(),
            "after(Reply(\"profile\")):stats".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_ignore_passes_update_to_next_handler() {
    let journal = Journal::default();
    let chain = HandlerChain::new()
        .add_handler(Recorder::new("skipper", HandlerResponse::Ignore, &journal))
        .add_handler(Recorder::new("stats", HandlerResponse::Stop, &journal));

    let response = chain.handle(&button_press("/help")).await.unwrap();

    assert_eq!(response, HandlerResponse::Stop);
    assert!(entries(&journal).contains(&"handle:stats".to_string()));
}

#[tokio::test]
async fn test_empty_chain_returns_continue() {
    let chain = HandlerChain::new();
    assert!(chain.is_empty());
    let response = chain.handle(&button_press("hi")).await.unwrap();
    assert_eq!(response, HandlerResponse::Continue);
}
