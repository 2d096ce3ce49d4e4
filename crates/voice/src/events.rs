use crate::stream::TranscriptMessage;

/// Notifications from a voice source.
///
/// Connection and speaking state is always derived from these; consumers
/// never query the SDK directly.
#[derive(Debug, Clone, serde::Serialize)]
#[cfg_attr(feature = "specta", derive(specta::Type))]
#[serde(tag = "type")]
pub enum VoiceEvent {
    #[serde(rename = "callStarted")]
    CallStarted,
    #[serde(rename = "callEnded")]
    CallEnded,
    #[serde(rename = "speechStarted")]
    SpeechStarted,
    #[serde(rename = "speechEnded")]
    SpeechEnded,
    #[serde(rename = "transcript")]
    Transcript { message: TranscriptMessage },
    #[serde(rename = "sourceError")]
    SourceError { error: String },
}

/// Call state folded from the event stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
#[cfg_attr(feature = "specta", derive(specta::Type))]
pub struct CallStatus {
    pub connected: bool,
    pub speaking: bool,
}

impl CallStatus {
    pub fn apply(&mut self, event: &VoiceEvent) {
        match event {
            VoiceEvent::CallStarted => self.connected = true,
            VoiceEvent::CallEnded => {
                self.connected = false;
                self.speaking = false;
            }
            VoiceEvent::SpeechStarted => self.speaking = true,
            VoiceEvent::SpeechEnded => self.speaking = false,
            VoiceEvent::Transcript { .. } | VoiceEvent::SourceError { .. } => {}
        }
    }
}
