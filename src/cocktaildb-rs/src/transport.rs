//! HTTP transport used by [`Client`](crate::Client).
//!
//! The client only needs "GET a path with query parameters and hand back the
//! JSON body". [`HttpTransport`] does that with reqwest; tests and embedders
//! can plug in their own [`Transport`].

use std::time::Duration;

use async_trait::async_trait;
use cocktaildb_core::config::{join_url, Config};
use reqwest::Client as HttpClient;
use serde_json::Value;

use crate::{ClientError, Result};

/// Reply of a successful GET
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiResponse {
    /// Parsed JSON body; `None` when the server sent no body
    pub data: Option<Value>,
}

impl ApiResponse {
    pub fn new(data: Value) -> Self {
        Self { data: Some(data) }
    }
}

/// GET-with-query capability the endpoint wrappers are written against.
///
/// `Ok(None)` means the call completed without producing a response object.
/// Errors are handed to the caller of the endpoint unchanged.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, path: &str, params: &[(&str, &str)]) -> Result<Option<ApiResponse>>;
}

/// reqwest-backed transport rooted at a base URL
#[derive(Debug, Clone)]
pub struct HttpTransport {
    base_url: String,
    client: HttpClient,
}

impl HttpTransport {
    /// Create a transport with reqwest defaults
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: HttpClient::new(),
        }
    }

    /// Create a transport honoring timeout, user agent and TLS settings
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut builder = HttpClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone());

        if config.insecure_skip_verify {
            builder = builder.danger_accept_invalid_certs(true);
        }

        Ok(Self {
            base_url: config.base_url.clone(),
            client: builder.build()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path: &str, params: &[(&str, &str)]) -> Result<Option<ApiResponse>> {
        let url = join_url(&self.base_url, path);

        let mut request = self.client.get(&url);
        if !params.is_empty() {
            request = request.query(params);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            return Err(ClientError::Server {
                status: response.status().as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            tracing::debug!("Empty body from {}", url);
            return Ok(Some(ApiResponse::default()));
        }

        let data: Value = serde_json::from_str(&body)?;
        Ok(Some(ApiResponse {
            data: (!data.is_null()).then_some(data),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_transport_keeps_base_url() {
        let transport = HttpTransport::new("http://localhost:9000/api/");
        assert_eq!(transport.base_url(), "http://localhost:9000/api/");
    }

    #[test]
    fn test_http_transport_from_config() {
        let config = Config {
            base_url: "http://localhost:9000".to_string(),
            timeout_secs: 2,
            ..Config::default()
        };

        let transport = HttpTransport::from_config(&config).unwrap();
        assert_eq!(transport.base_url(), "http://localhost:9000");
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use std::sync::Mutex;

    use super::*;

    /// Canned behaviour of [`MockTransport`]
    pub enum Reply {
        Body(Value),
        NoResponse,
        NoBody,
        ServerError(u16, &'static str),
    }

    /// Transport returning one canned reply and recording every call
    pub struct MockTransport {
        reply: Reply,
        calls: Mutex<Vec<(String, Vec<(String, String)>)>>,
    }

    impl MockTransport {
        pub fn new(reply: Reply) -> Self {
            Self {
                reply,
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn body(data: Value) -> Self {
            Self::new(Reply::Body(data))
        }

        pub fn calls(&self) -> Vec<(String, Vec<(String, String)>)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Transport for MockTransport {
        async fn get(&self, path: &str, params: &[(&str, &str)]) -> Result<Option<ApiResponse>> {
            self.calls.lock().unwrap().push((
                path.to_string(),
                params
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            ));

            match &self.reply {
                Reply::Body(data) => Ok(Some(ApiResponse::new(data.clone()))),
                Reply::NoResponse => Ok(None),
                Reply::NoBody => Ok(Some(ApiResponse::default())),
                Reply::ServerError(status, message) => Err(ClientError::Server {
                    status: *status,
                    message: message.to_string(),
                }),
            }
        }
    }
}
