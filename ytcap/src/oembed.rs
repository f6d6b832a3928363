use tracing::debug;

use crate::error::YtcapResult;
use crate::transport::ProxyTransport;
use crate::types::VideoMetadata;

const DEFAULT_ENDPOINT: &str = "https://www.youtube.com/oembed";

/// Client for YouTube's oembed metadata endpoint.
///
/// Issues a GET with `format=json` and the canonical watch URL, and decodes
/// the fixed ten-field pass-through record. Fields the endpoint omits come
/// back as `None`.
#[derive(Debug, Clone)]
pub struct OembedClient {
    transport: ProxyTransport,
    endpoint: String,
}

impl OembedClient {
    pub fn new(transport: ProxyTransport) -> Self {
        Self {
            transport,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    /// Point the client at a different oembed endpoint. Intended for tests.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub async fn fetch_metadata(&self, video_id: &str) -> YtcapResult<VideoMetadata> {
        let watch_url = format!("https://www.youtube.com/watch?v={video_id}");
        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("format", "json")
            .append_pair("url", &watch_url)
            .finish();
        let request_url = format!("{}?{}", self.endpoint, query);

        debug!("Fetching oembed metadata: {}", request_url);
        self.transport.get_json(&request_url).await
    }
}
