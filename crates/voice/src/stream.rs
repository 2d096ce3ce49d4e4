use plum_reconcile::Speaker;

/// One transcript event as the voice SDK delivers it.
///
/// The role arrives as a free-form string and the payload carries no timing;
/// the receiving session stamps arrival time itself.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "specta", derive(specta::Type))]
pub struct TranscriptMessage {
    pub role: String,
    pub text: String,
}

impl TranscriptMessage {
    pub fn new(role: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            text: text.into(),
        }
    }

    /// Map the wire role onto a speaker. Anything the source does not label
    /// `"user"` is treated as the assistant.
    pub fn speaker(&self) -> Speaker {
        if self.role == "user" {
            Speaker::User
        } else {
            Speaker::Assistant
        }
    }
}
