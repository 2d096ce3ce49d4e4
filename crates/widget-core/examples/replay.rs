//! Drive a session from a scripted voice call and print the merged view.
//!
//! Run with `cargo run --example replay`. No network: the webhook
//! collaborator is stubbed to echo a canned reply.

use std::sync::Arc;

use plum_voice::{ScriptedSource, TranscriptMessage, VoiceSource};
use plum_webhook::{HttpClient, HttpError, WebhookClient};
use widget_core::{
    ChatSession, SessionDataEvent, SessionErrorEvent, SessionLifecycleEvent, WidgetRuntime,
};

struct EchoWebhook;

impl HttpClient for EchoWebhook {
    async fn post(
        &self,
        _url: &str,
        _body: Vec<u8>,
        _content_type: &str,
    ) -> Result<Vec<u8>, HttpError> {
        Ok(br#"{"reply":"Thanks for reaching out! A teammate will follow up."}"#.to_vec())
    }
}

struct StderrRuntime;

impl WidgetRuntime for StderrRuntime {
    fn emit_lifecycle(&self, event: SessionLifecycleEvent) {
        eprintln!("[lifecycle] {}", serde_json::to_string(&event).unwrap_or_default());
    }

    fn emit_data(&self, event: SessionDataEvent) {
        match &event {
            SessionDataEvent::ConversationChanged { view } => {
                eprintln!("[data] conversation now has {} entries", view.len());
            }
            SessionDataEvent::CallStatusChanged { status } => {
                eprintln!("[data] call connected={} speaking={}", status.connected, status.speaking);
            }
        }
    }

    fn emit_error(&self, event: SessionErrorEvent) {
        eprintln!("[error] {}", serde_json::to_string(&event).unwrap_or_default());
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let (source, mut events) = ScriptedSource::new(vec![
        TranscriptMessage::new("assistant", "Hi! How can I help you today?"),
        TranscriptMessage::new("user", "what is"),
        TranscriptMessage::new("user", "what is the price of the serum"),
        TranscriptMessage::new("assistant", "The serum is uh the serum is nineteen dollars"),
    ]);

    let mut session = ChatSession::new(
        WebhookClient::new(EchoWebhook, "http://localhost:5678/webhook/demo"),
        Arc::new(StderrRuntime),
    );

    session.start_chat(Some("Do you ship internationally?")).await;

    source.start().expect("scripted source never closes");
    source.stop().expect("scripted source never closes");
    while let Ok(event) = events.try_recv() {
        session.apply_voice_event(event);
    }

    println!();
    for message in session.conversation() {
        let who = match message.sender {
            plum_reconcile::Sender::User => "you",
            plum_reconcile::Sender::Bot => "bot",
        };
        println!("{who:>4} | {}", message.content);
    }
}
