mod client;
mod error;
mod http;
mod types;

pub use client::WebhookClient;
pub use error::Error;
pub use http::{HttpClient, HttpError, ReqwestClient};
pub use types::{SendMessageRequest, SendMessageResponse};
