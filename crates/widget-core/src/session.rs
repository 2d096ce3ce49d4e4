use std::sync::Arc;

use tracing::Instrument;

use plum_reconcile::{ChatMessage, Fragment, Sender, reconcile};
use plum_voice::{CallStatus, TranscriptMessage, VoiceEvent};
use plum_webhook::{HttpClient, WebhookClient};

use crate::clock::{Clock, SystemClock};
use crate::events::{SessionDataEvent, SessionErrorEvent, SessionLifecycleEvent};
use crate::runtime::WidgetRuntime;
use crate::state::WidgetState;

/// Shown as the bot when the send-message collaborator fails outright.
pub const SEND_FAILURE_REPLY: &str = "Oops! Something went wrong. Try again later.";

/// Shown as the bot when the collaborator answers without a usable reply.
pub const EMPTY_REPLY: &str = "Sorry, I couldn't understand that.";

/// One widget session: the typed message log, the raw transcript stream,
/// and the glue between them.
///
/// Both streams are append-only; the merged conversation is recomputed from
/// scratch on every change and pushed through the [`WidgetRuntime`]. Nothing
/// here is fatal; a failed send becomes a synthetic bot message and the
/// session keeps going.
pub struct ChatSession<C> {
    id: String,
    webhook: WebhookClient<C>,
    runtime: Arc<dyn WidgetRuntime>,
    clock: Arc<dyn Clock>,
    state: WidgetState,
    call: CallStatus,
    messages: Vec<ChatMessage>,
    fragments: Vec<Fragment>,
    loading: bool,
}

impl<C: HttpClient> ChatSession<C> {
    pub fn new(webhook: WebhookClient<C>, runtime: Arc<dyn WidgetRuntime>) -> Self {
        Self::with_clock(webhook, runtime, Arc::new(SystemClock))
    }

    pub fn with_clock(
        webhook: WebhookClient<C>,
        runtime: Arc<dyn WidgetRuntime>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            webhook,
            runtime,
            clock,
            state: WidgetState::default(),
            call: CallStatus::default(),
            messages: Vec::new(),
            fragments: Vec::new(),
            loading: false,
        }
    }

    pub fn state(&self) -> WidgetState {
        self.state
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn call_status(&self) -> CallStatus {
        self.call
    }

    /// The merged, display-ready conversation. Pure recomputation over the
    /// current streams; holds no cache.
    pub fn conversation(&self) -> Vec<ChatMessage> {
        reconcile(&self.messages, &self.fragments)
    }

    /// Leave the welcome screen; an initial message goes out immediately.
    pub async fn start_chat(&mut self, initial_message: Option<&str>) {
        self.set_state(WidgetState::Chatting);
        if let Some(content) = initial_message {
            self.send_message(content).await;
        }
    }

    pub fn go_home(&mut self) {
        self.set_state(WidgetState::Welcome);
    }

    pub fn navigate(&mut self, state: WidgetState) {
        self.set_state(state);
    }

    /// Send one typed message and record the reply.
    ///
    /// The user message lands in the log before the request goes out, so a
    /// slow collaborator never hides what was typed. Failures and empty
    /// replies become fixed bot messages; no retry.
    pub async fn send_message(&mut self, content: &str) {
        let span = self.span();
        async {
            self.append_message(content.to_string(), Sender::User);
            self.set_loading(true);

            let reply = match self.webhook.send_message(content).await {
                Ok(Some(reply)) => reply,
                Ok(None) => EMPTY_REPLY.to_string(),
                Err(error) => {
                    tracing::warn!(%error, "send_failed");
                    self.runtime.emit_error(SessionErrorEvent::SendFailed {
                        error: error.to_string(),
                    });
                    SEND_FAILURE_REPLY.to_string()
                }
            };

            self.append_message(reply, Sender::Bot);
            self.set_loading(false);
        }
        .instrument(span)
        .await
    }

    /// Fold one voice-source notification into the session.
    pub fn apply_voice_event(&mut self, event: VoiceEvent) {
        match event {
            VoiceEvent::Transcript { message } => self.push_transcript(message),
            VoiceEvent::SourceError { error } => {
                let span = self.span();
                let _guard = span.enter();
                tracing::warn!(error = %error, "voice_source_error");
                self.runtime
                    .emit_error(SessionErrorEvent::VoiceError { error });
            }
            lifecycle => {
                self.call.apply(&lifecycle);
                self.runtime.emit_data(SessionDataEvent::CallStatusChanged {
                    status: self.call,
                });
            }
        }
    }

    /// Append one raw transcript fragment, stamped with the current time;
    /// the voice source supplies no timing of its own.
    pub fn push_transcript(&mut self, message: TranscriptMessage) {
        let fragment = Fragment::new(message.speaker(), message.text, self.clock.now_ms());
        self.fragments.push(fragment);
        self.notify_conversation();
    }

    /// Drop the transcript stream, keeping typed messages.
    pub fn clear_transcript(&mut self) {
        self.fragments.clear();
        self.notify_conversation();
    }

    /// Start over: both input streams are cleared together, so no partial
    /// state survives into the next conversation.
    pub fn new_chat(&mut self) {
        let span = self.span();
        let _guard = span.enter();
        tracing::info!("session_reset");

        self.messages.clear();
        self.fragments.clear();
        self.set_loading(false);
        self.notify_conversation();
    }

    fn append_message(&mut self, content: String, sender: Sender) {
        self.messages.push(ChatMessage {
            id: uuid::Uuid::new_v4().to_string(),
            content,
            sender,
            timestamp_ms: self.clock.now_ms(),
        });
        self.notify_conversation();
    }

    fn set_state(&mut self, state: WidgetState) {
        if self.state != state {
            self.state = state;
            self.runtime
                .emit_lifecycle(SessionLifecycleEvent::StateChanged { state });
        }
    }

    fn set_loading(&mut self, loading: bool) {
        if self.loading != loading {
            self.loading = loading;
            self.runtime
                .emit_lifecycle(SessionLifecycleEvent::LoadingChanged { loading });
        }
    }

    fn notify_conversation(&self) {
        self.runtime.emit_data(SessionDataEvent::ConversationChanged {
            view: self.conversation(),
        });
    }

    fn span(&self) -> tracing::Span {
        tracing::info_span!("session", session_id = %self.id)
    }
}
