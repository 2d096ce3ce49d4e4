use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct SendMessageRequest {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct SendMessageResponse {
    #[serde(default)]
    pub reply: Option<String>,
}
