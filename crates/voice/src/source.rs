use tokio::sync::mpsc;

use crate::events::VoiceEvent;
use crate::stream::TranscriptMessage;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("voice event receiver dropped")]
    ReceiverClosed,
}

/// Control surface of a voice call source.
///
/// `start` and `stop` are opaque lifecycle operations; callers consume no
/// return value beyond failure; everything the source has to say arrives as
/// [`VoiceEvent`]s on the channel handed out at construction.
pub trait VoiceSource: Send + Sync {
    fn start(&self) -> Result<(), Error>;
    fn stop(&self) -> Result<(), Error>;
}

/// In-memory source that plays a prepared transcript script on `start`.
///
/// Stands in for the real SDK in tests and the replay example: `start`
/// emits `CallStarted` followed by one `Transcript` event per scripted
/// message, `stop` emits `CallEnded`.
pub struct ScriptedSource {
    script: std::sync::Mutex<Vec<TranscriptMessage>>,
    events: mpsc::UnboundedSender<VoiceEvent>,
}

impl ScriptedSource {
    pub fn new(
        script: Vec<TranscriptMessage>,
    ) -> (Self, mpsc::UnboundedReceiver<VoiceEvent>) {
        let (events, rx) = mpsc::unbounded_channel();
        let source = Self {
            script: std::sync::Mutex::new(script),
            events,
        };
        (source, rx)
    }

    fn emit(&self, event: VoiceEvent) -> Result<(), Error> {
        self.events.send(event).map_err(|_| Error::ReceiverClosed)
    }
}

impl VoiceSource for ScriptedSource {
    fn start(&self) -> Result<(), Error> {
        let script = match self.script.lock() {
            Ok(mut guard) => std::mem::take(&mut *guard),
            Err(_) => Vec::new(),
        };

        tracing::debug!(messages = script.len(), "scripted_source_started");
        self.emit(VoiceEvent::CallStarted)?;
        for message in script {
            self.emit(VoiceEvent::Transcript { message })?;
        }
        Ok(())
    }

    fn stop(&self) -> Result<(), Error> {
        tracing::debug!("scripted_source_stopped");
        self.emit(VoiceEvent::CallEnded)
    }
}
