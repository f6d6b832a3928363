//! Pure formatting helpers over caption snippets.
//!
//! Both functions preserve input order and never touch the network, so they
//! are testable without any transcript provider.

use crate::types::CaptionSnippet;

/// Returned on the text path when a fetch produced no snippets, so callers can
/// tell "no captions" apart from a video whose captions are empty strings.
pub const NO_CAPTIONS_MESSAGE: &str = "No captions found for video";

/// Flatten snippets into a single space-joined blob.
pub fn join_text(snippets: &[CaptionSnippet]) -> String {
    if snippets.is_empty() {
        return NO_CAPTIONS_MESSAGE.to_string();
    }

    snippets
        .iter()
        .map(|snippet| snippet.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render one `"M:SS - text"` line per snippet.
///
/// Start offsets are truncated toward zero, never rounded. Seconds are
/// zero-padded to two digits; minutes are unbounded.
pub fn timestamp_lines(snippets: &[CaptionSnippet]) -> Vec<String> {
    snippets
        .iter()
        .map(|snippet| {
            let total = snippet.start as u64;
            let minutes = total / 60;
            let seconds = total % 60;
            format!("{minutes}:{seconds:02} - {}", snippet.text)
        })
        .collect()
}
