use reqwest::{Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde_json::Value;

use super::config::CliConfig;

/// Thin wrapper over `reqwest` that attaches the stored bearer token and
/// unwraps the API's `{message, data}` / `{message, code}` envelopes.
pub struct ApiClient {
    http: reqwest::Client,
    config: CliConfig,
}

/// Decoded API envelope.
#[derive(Debug)]
pub struct ApiReply {
    pub status: StatusCode,
    pub message: String,
    pub data: Value,
}

impl ApiClient {
    pub fn new(config: CliConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &CliConfig {
        &self.config
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self
            .http
            .request(method, self.config.url(path))
            .timeout(std::time::Duration::from_secs(10));
        match &self.config.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    pub async fn get(&self, path: &str) -> anyhow::Result<ApiReply> {
        Self::send(self.request(Method::GET, path)).await
    }

    pub async fn get_query<Q: Serialize + ?Sized>(&self, path: &str, query: &Q) -> anyhow::Result<ApiReply> {
        Self::send(self.request(Method::GET, path).query(query)).await
    }

    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> anyhow::Result<ApiReply> {
        Self::send(self.request(Method::POST, path).json(body)).await
    }

    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> anyhow::Result<ApiReply> {
        Self::send(self.request(Method::PUT, path).json(body)).await
    }

    /// Send without failing on error statuses.
    pub async fn send_raw(builder: RequestBuilder) -> anyhow::Result<ApiReply> {
        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;
        let body: Value = if text.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).unwrap_or(Value::String(text))
        };
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let data = body.get("data").cloned().unwrap_or(Value::Null);
        Ok(ApiReply { status, message, data })
    }

    async fn send(builder: RequestBuilder) -> anyhow::Result<ApiReply> {
        let reply = Self::send_raw(builder).await?;
        if !reply.status.is_success() {
            let message = if reply.message.is_empty() {
                reply.status.to_string()
            } else {
                reply.message
            };
            anyhow::bail!("{} ({})", message, reply.status.as_u16());
        }
        Ok(reply)
    }

    pub async fn health(&self) -> anyhow::Result<ApiReply> {
        Self::send_raw(self.request(Method::GET, "/health")).await
    }
}
