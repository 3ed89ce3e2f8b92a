//! reqwest adapter for [`HttpPost`]
//!
//! The server identifies the player by a `session` cookie set on party
//! create/join. The cookie jar is shared so the websocket handshake can send
//! the same cookie.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::cookie::{CookieStore, Jar};
use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::ports::outbound::{ApiError, HttpPost};

#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: Url,
    jar: Arc<Jar>,
}

impl HttpClient {
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, ApiError> {
        let jar = Arc::new(Jar::default());
        let client = Client::builder()
            .timeout(timeout)
            .cookie_provider(Arc::clone(&jar))
            .build()
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            jar,
        })
    }

    /// `Cookie` header value the jar holds for `url`, if any
    pub fn cookie_header(&self, url: &Url) -> Option<String> {
        self.jar
            .cookies(url)
            .and_then(|value| value.to_str().ok().map(str::to_string))
    }

    fn url(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", path, e)))
    }

    async fn send(&self, path: &str, body: Option<&Value>) -> Result<reqwest::Response, ApiError> {
        let mut request = self.client.post(self.url(path)?);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::status(status.as_u16(), message));
        }
        Ok(response)
    }
}

#[async_trait]
impl HttpPost for HttpClient {
    async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        self.send(path, None).await.map(|_| ())
    }

    async fn post_no_response_json(&self, path: &str, body: &Value) -> Result<(), ApiError> {
        self.send(path, Some(body)).await.map(|_| ())
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let response = self.send(path, Some(body)).await?;
        response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::decode(e.to_string()))
    }
}
