use thiserror::Error;

/// Result alias used throughout the crate.
pub type YtcapResult<T> = Result<T, YtcapError>;

/// Errors surfaced by the public ytcap API.
///
/// Every public entry point normalizes its failures into this enum; no
/// transport- or parser-internal error type crosses the boundary.
#[derive(Debug, Error)]
pub enum YtcapError {
    /// The input was empty, unparsable, or did not resolve to a video id.
    #[error("invalid YouTube URL: {url}")]
    InvalidUrl { url: String },

    /// No caption track exists for the video in the requested languages,
    /// or the selected track produced an empty snippet sequence.
    #[error("no captions available for video {video_id}")]
    NoCaptions { video_id: String },

    /// An upstream endpoint answered with a non-2xx status. The response
    /// body is kept for diagnostics.
    #[error("upstream request failed with status {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    /// Connection failure, timeout, or another transport-level fault.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// An upstream response body could not be decoded.
    #[error("failed to decode upstream response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The HTTP client could not be built from the supplied options.
    #[error("configuration error: {message}")]
    Configuration { message: String },
}

impl YtcapError {
    /// HTTP-style status class for this failure: 400 for caller mistakes,
    /// 500 for anything that went wrong downstream.
    pub fn status_code(&self) -> u16 {
        match self {
            YtcapError::InvalidUrl { .. } => 400,
            _ => 500,
        }
    }

    pub fn is_client_error(&self) -> bool {
        self.status_code() < 500
    }
}
