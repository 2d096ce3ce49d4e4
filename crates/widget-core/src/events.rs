use plum_reconcile::ChatMessage;
use plum_voice::CallStatus;

use crate::state::WidgetState;

#[derive(Debug, Clone, serde::Serialize)]
#[cfg_attr(feature = "specta", derive(specta::Type))]
#[serde(tag = "type")]
pub enum SessionLifecycleEvent {
    #[serde(rename = "stateChanged")]
    StateChanged { state: WidgetState },
    #[serde(rename = "loadingChanged")]
    LoadingChanged { loading: bool },
}

#[derive(Debug, Clone, serde::Serialize)]
#[cfg_attr(feature = "specta", derive(specta::Type))]
#[serde(tag = "type")]
pub enum SessionDataEvent {
    /// The merged view was recomputed after one of the input streams grew.
    /// Carries the full view; the renderer replaces, never patches.
    #[serde(rename = "conversationChanged")]
    ConversationChanged { view: Vec<ChatMessage> },
    #[serde(rename = "callStatusChanged")]
    CallStatusChanged { status: CallStatus },
}

#[derive(Debug, Clone, serde::Serialize)]
#[cfg_attr(feature = "specta", derive(specta::Type))]
#[serde(tag = "type")]
pub enum SessionErrorEvent {
    #[serde(rename = "sendFailed")]
    SendFailed { error: String },
    #[serde(rename = "voiceError")]
    VoiceError { error: String },
}
