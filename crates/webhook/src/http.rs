use std::future::Future;

pub type HttpError = Box<dyn std::error::Error + Send + Sync>;

/// Minimal HTTP seam so the webhook client stays testable and free of a
/// concrete transport.
pub trait HttpClient: Send + Sync {
    fn post(
        &self,
        url: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> impl Future<Output = Result<Vec<u8>, HttpError>> + Send;
}

/// Default transport backed by a shared `reqwest` client.
#[derive(Clone, Default)]
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HttpClient for ReqwestClient {
    async fn post(
        &self,
        url: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<Vec<u8>, HttpError> {
        let response = self
            .client
            .post(url)
            .header("content-type", content_type)
            .body(body)
            .send()
            .await?;
        let bytes = response.error_for_status()?.bytes().await?;
        Ok(bytes.to_vec())
    }
}
