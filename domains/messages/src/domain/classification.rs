//! Best-effort content classification
//!
//! A message whose content is an http(s) link gets a media-type tag:
//! `video` for watch pages on known video hosts, `image` for any other link.
//! Everything else is left untyped. Parsing failures are never errors.

use url::Url;

use super::entities::{MediaType, MessageMetadata};

/// Hosts whose `/watch` pages are treated as video
const VIDEO_HOSTS: &[&str] = &["www.youtube.com", "youtube.com", "www.vevo.com", "vevo.com"];

/// Derive metadata for a message body, if it is a recognisable link
pub fn classify(content: &str) -> Option<MessageMetadata> {
    let url = Url::parse(content.trim()).ok()?;
    if !matches!(url.scheme(), "http" | "https") {
        return None;
    }
    let host = url.host_str()?;

    let media_type = if VIDEO_HOSTS.contains(&host) && is_watch_path(url.path()) {
        MediaType::Video
    } else {
        MediaType::Image
    };

    Some(MessageMetadata { media_type })
}

fn is_watch_path(path: &str) -> bool {
    path == "/watch" || path.starts_with("/watch/")
}
