use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{YtcapError, YtcapResult};
use crate::types::FetchOptions;

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Outbound HTTP egress shared by transcript and metadata requests.
///
/// Built once from [`FetchOptions`] and reused; carries the proxy credentials,
/// a browser-like User-Agent and the per-request timeout. Cloning is cheap and
/// shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ProxyTransport {
    client: reqwest::Client,
}

impl ProxyTransport {
    pub fn new(options: &FetchOptions) -> YtcapResult<Self> {
        let mut headers = HeaderMap::new();

        let user_agent = options.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT);
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(user_agent).map_err(|_| YtcapError::Configuration {
                message: "invalid user agent".to_string(),
            })?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));

        let mut builder = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(options.timeout_seconds));

        if let Some(proxy_url) = &options.proxy {
            let proxy =
                reqwest::Proxy::all(proxy_url).map_err(|e| YtcapError::Configuration {
                    message: format!("invalid proxy URL: {e}"),
                })?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build().map_err(|e| YtcapError::Configuration {
            message: format!("failed to create HTTP client: {e}"),
        })?;

        Ok(Self { client })
    }

    /// GET a URL and return the response body as text.
    pub async fn get_text(&self, url: &str) -> YtcapResult<String> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        let response = Self::require_success(response).await?;
        Ok(response.text().await?)
    }

    /// GET a URL and decode the response body as JSON.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> YtcapResult<T> {
        let body = self.get_text(url).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// POST a JSON body and decode the JSON response.
    pub async fn post_json<T: DeserializeOwned>(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> YtcapResult<T> {
        debug!("POST {}", url);
        let response = self.client.post(url).json(body).send().await?;
        let response = Self::require_success(response).await?;
        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Turn a non-2xx response into an error that keeps the status code and
    /// body around for diagnostics.
    async fn require_success(response: reqwest::Response) -> YtcapResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(YtcapError::UpstreamStatus {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_text_success() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/captions")
            .with_status(200)
            .with_body("hello transport")
            .create_async()
            .await;

        let transport = ProxyTransport::new(&FetchOptions::default()).unwrap();
        let body = transport
            .get_text(&format!("{}/captions", server.url()))
            .await
            .unwrap();
        assert_eq!(body, "hello transport");
    }

    #[tokio::test]
    async fn test_non_success_status_keeps_body() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/boom")
            .with_status(503)
            .with_body("overloaded")
            .create_async()
            .await;

        let transport = ProxyTransport::new(&FetchOptions::default()).unwrap();
        let err = transport
            .get_text(&format!("{}/boom", server.url()))
            .await
            .unwrap_err();

        match err {
            YtcapError::UpstreamStatus { status, body } => {
                assert_eq!(status, 503);
                assert_eq!(body, "overloaded");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_get_json_decodes_body() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/data")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"value": 42}"#)
            .create_async()
            .await;

        #[derive(serde::Deserialize)]
        struct Data {
            value: u32,
        }

        let transport = ProxyTransport::new(&FetchOptions::default()).unwrap();
        let data: Data = transport
            .get_json(&format!("{}/data", server.url()))
            .await
            .unwrap();
        assert_eq!(data.value, 42);
    }

    #[test]
    fn test_transport_has_debug_repr() {
        let transport = ProxyTransport::new(&FetchOptions::default()).unwrap();
        let repr = format!("{transport:?}");
        assert!(repr.contains("ProxyTransport"));
    }

    #[test]
    fn test_invalid_proxy_is_configuration_error() {
        let options = FetchOptions::new().proxy("not a proxy url");
        let err = ProxyTransport::new(&options).unwrap_err();
        assert!(matches!(err, YtcapError::Configuration { .. }));
    }
}
