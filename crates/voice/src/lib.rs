//! Voice-source boundary: the wire shape of transcript events, lifecycle
//! notifications, and the control surface the widget uses to start and stop
//! a call. Everything downstream consumes [`VoiceEvent`]s; no other part of
//! the widget touches the SDK.

mod events;
mod source;
mod stream;

pub use events::{CallStatus, VoiceEvent};
pub use source::{Error, ScriptedSource, VoiceSource};
pub use stream::TranscriptMessage;
