/// Who produced a speech fragment. The voice source reports these as roles;
/// they map 1:1 onto message senders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize, specta::Type)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Assistant,
}

/// Message sender as the rendering layer sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize, specta::Type)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl From<Speaker> for Sender {
    fn from(role: Speaker) -> Self {
        match role {
            Speaker::User => Sender::User,
            Speaker::Assistant => Sender::Bot,
        }
    }
}

/// One raw timestamped speech-to-text snippet from the voice source.
///
/// Immutable once received. `arrival_ms` is stamped by the receiver, not the
/// source; ordering is arrival order, which is monotonic within a role's
/// stream but not necessarily across roles.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, specta::Type)]
pub struct Fragment {
    pub role: Speaker,
    pub text: String,
    pub arrival_ms: i64,
}

impl Fragment {
    pub fn new(role: Speaker, text: impl Into<String>, arrival_ms: i64) -> Self {
        Self {
            role,
            text: text.into(),
            arrival_ms,
        }
    }
}

/// A typed or received chat message. Also the display shape of the merged
/// conversation; resolved utterances are mapped into this before merging.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, specta::Type)]
pub struct ChatMessage {
    pub id: String,
    pub content: String,
    pub sender: Sender,
    pub timestamp_ms: i64,
}

/// A resolved, deduplicated unit of speech representing one speaker turn.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, specta::Type)]
pub struct Utterance {
    pub id: String,
    pub text: String,
    pub role: Speaker,
    pub start_ms: i64,
}

// ── Internal pipeline type ──────────────────────────────────────────────────

/// Working accumulator for one contiguous speaker turn.
///
/// Built by [`crate::group`] during a single reconciliation pass and consumed
/// by [`crate::resolve`]; never outlives the pass. `texts` and `timestamps`
/// are parallel and non-empty by construction.
#[derive(Debug, Clone)]
pub(crate) struct TurnGroup {
    pub(crate) role: Speaker,
    pub(crate) texts: Vec<String>,
    pub(crate) timestamps: Vec<i64>,
    pub(crate) start_ms: i64,
    pub(crate) end_ms: i64,
}
