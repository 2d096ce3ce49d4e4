use crate::error::Error;
use crate::http::HttpClient;
use crate::types::{SendMessageRequest, SendMessageResponse};

/// Client for the send-message collaborator: POST `{"message"}` to a fixed
/// endpoint, read `{"reply"}` back.
pub struct WebhookClient<C> {
    http: C,
    endpoint: String,
}

impl<C: HttpClient> WebhookClient<C> {
    pub fn new(http: C, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    /// Deliver one outbound message and return the reply text.
    ///
    /// A missing or empty reply is reported as `None`; the caller decides
    /// what to show for it. Transport and parse failures surface as [`Error`];
    /// no retries happen here.
    pub async fn send_message(&self, message: &str) -> Result<Option<String>, Error> {
        let req = SendMessageRequest {
            message: message.to_string(),
        };
        let body = serde_json::to_vec(&req)?;

        let bytes = self
            .http
            .post(&self.endpoint, body, "application/json")
            .await
            .map_err(Error::Http)?;

        let response: SendMessageResponse = serde_json::from_slice(&bytes)?;
        Ok(response.reply.filter(|reply| !reply.is_empty()))
    }
}
