pub mod error;
pub mod formatter;
pub mod oembed;
pub mod provider;
pub mod resolver;
pub mod transport;
pub mod types;

pub use error::{YtcapError, YtcapResult};
pub use formatter::NO_CAPTIONS_MESSAGE;
pub use oembed::OembedClient;
pub use provider::{TranscriptProvider, YouTubeTranscriptProvider};
pub use transport::ProxyTransport;
pub use types::{CaptionSnippet, FetchOptions, VideoMetadata};

use std::sync::Arc;
use tracing::{debug, info};

/// Facade tying URL resolution, transcript fetching and formatting together.
///
/// Resolves the video id once at construction; the transcript provider and
/// oembed client are reusable handles with no cross-call state.
#[derive(Debug)]
pub struct Ytcap<P: TranscriptProvider = YouTubeTranscriptProvider> {
    url: String,
    video_id: String,
    options: FetchOptions,
    provider: Arc<P>,
    oembed: OembedClient,
}

impl Ytcap {
    /// Create a facade with the shipped YouTube transcript provider, all
    /// requests routed through a transport built from `options`.
    pub fn new(url: &str, options: FetchOptions) -> YtcapResult<Self> {
        let transport = ProxyTransport::new(&options)?;
        let provider = YouTubeTranscriptProvider::new(transport.clone());
        let oembed = OembedClient::new(transport);
        Self::with_collaborators(url, options, provider, oembed)
    }
}

impl<P: TranscriptProvider> Ytcap<P> {
    /// Create a facade with injected collaborators.
    pub fn with_collaborators(
        url: &str,
        options: FetchOptions,
        provider: P,
        oembed: OembedClient,
    ) -> YtcapResult<Self> {
        info!("Initializing ytcap for URL: {}", url);

        // An empty token (e.g. "https://youtu.be/") is as unusable as no
        // token; both are the caller's mistake.
        let video_id = resolver::resolve(url)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| YtcapError::InvalidUrl {
                url: url.to_string(),
            })?;

        debug!("Resolved video id: {}", video_id);

        Ok(Self {
            url: url.to_string(),
            video_id,
            options,
            provider: Arc::new(provider),
            oembed,
        })
    }

    /// Fetch captions and flatten them into a single text blob.
    ///
    /// A video without captions in the configured languages yields the
    /// [`NO_CAPTIONS_MESSAGE`] sentinel rather than an error; transport
    /// failures stay errors.
    pub async fn captions(&self) -> YtcapResult<String> {
        match self
            .provider
            .fetch(&self.video_id, &self.options.languages)
            .await
        {
            Ok(snippets) => Ok(formatter::join_text(&snippets)),
            Err(YtcapError::NoCaptions { .. }) => Ok(NO_CAPTIONS_MESSAGE.to_string()),
            Err(e) => Err(e),
        }
    }

    /// Fetch captions and render them as `"M:SS - text"` lines.
    ///
    /// Defaults to English when no language preference is configured. Unlike
    /// the text path, a caption-less video is an error here.
    pub async fn timestamps(&self) -> YtcapResult<Vec<String>> {
        let languages: Vec<String> = if self.options.languages.is_empty() {
            vec!["en".to_string()]
        } else {
            self.options.languages.clone()
        };

        let snippets = self.provider.fetch(&self.video_id, &languages).await?;
        Ok(formatter::timestamp_lines(&snippets))
    }

    /// Fetch the oembed metadata record for the video.
    pub async fn metadata(&self) -> YtcapResult<VideoMetadata> {
        self.oembed.fetch_metadata(&self.video_id).await
    }

    pub fn video_id(&self) -> &str {
        &self.video_id
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Canonical watch URL for the resolved video id.
    pub fn normalized_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.video_id)
    }
}

// Convenience functions for one-off operations

/// Fetch the flattened caption text for a video URL.
pub async fn fetch_captions(url: &str) -> YtcapResult<String> {
    Ytcap::new(url, FetchOptions::default())?.captions().await
}

/// Fetch `"M:SS - text"` lines for a video URL with an ordered language
/// preference.
pub async fn fetch_timestamps(url: &str, languages: &[String]) -> YtcapResult<Vec<String>> {
    let options = FetchOptions::new().languages(languages.iter().cloned());
    Ytcap::new(url, options)?.timestamps().await
}

/// Fetch the oembed metadata record for a video URL.
pub async fn fetch_metadata(url: &str) -> YtcapResult<VideoMetadata> {
    Ytcap::new(url, FetchOptions::default())?.metadata().await
}
