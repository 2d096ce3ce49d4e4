//! Upload encoding: turn a picked file into a `data:` URL the message input
//! can embed inline. Only images are accepted as chat attachments; anything
//! else is skipped, not an error.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

pub fn extension_to_content_type(extension: &str) -> &'static str {
    match extension.trim_start_matches('.').to_ascii_lowercase().as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "bmp" => "image/bmp",
        _ => "application/octet-stream",
    }
}

/// Encode any payload as a `data:` URL.
pub fn data_url(content_type: &str, bytes: &[u8]) -> String {
    format!("data:{content_type};base64,{}", STANDARD.encode(bytes))
}

/// Encode a chat attachment. Returns `None` unless the content type is an
/// image; the widget silently ignores other uploads.
pub fn encode_image(content_type: &str, bytes: &[u8]) -> Option<String> {
    let mime = content_type.split(';').next().unwrap_or(content_type).trim();
    if !mime.starts_with("image/") {
        return None;
    }
    Some(data_url(mime, bytes))
}
