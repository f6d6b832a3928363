use url::Url;

/// Extract a video id from any of the YouTube URL shapes.
///
/// Pure and total: malformed input yields `None`, never a panic or an error.
/// The extracted token is returned verbatim, without charset or length
/// validation; for short links the token may even be empty.
pub fn resolve(input: &str) -> Option<String> {
    let url = Url::parse(input).ok()?;
    let host = url.host_str()?;

    match host {
        // youtu.be/VIDEO_ID
        "youtu.be" => {
            // Repeated leading separators are collapsed: "youtu.be//abc"
            // yields "abc", not the unusable "/abc".
            let path = url.path().trim_start_matches('/');
            let id = path.split('/').next().unwrap_or("");
            Some(id.to_string())
        }
        "www.youtube.com" | "youtube.com" => {
            let path = url.path();
            if path == "/watch" {
                return url
                    .query_pairs()
                    .find(|(key, _)| key == "v")
                    .map(|(_, value)| value.into_owned());
            }
            extract_after_prefix(path, "/embed/")
                .or_else(|| extract_after_prefix(path, "/shorts/"))
                .or_else(|| extract_after_prefix(path, "/v/"))
        }
        _ => None,
    }
}

/// Take the path segment right after `prefix`. A missing or empty segment is
/// treated as unresolved rather than returning a partial token.
fn extract_after_prefix(path: &str, prefix: &str) -> Option<String> {
    let rest = path.strip_prefix(prefix)?;
    let id = rest.split('/').next().unwrap_or("");
    if id.is_empty() {
        None
    } else {
        Some(id.to_string())
    }
}
