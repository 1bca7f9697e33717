//! File-extension to MIME-type mapping for image uploads.

/// Returns the content type for an image file extension.
///
/// Unrecognized extensions fall back to `image/jpeg`.
pub fn content_type_for_extension(extension: &str) -> &'static str {
    match extension.to_ascii_lowercase().as_str() {
        ".jpg" | ".jpeg" => "image/jpeg",
        ".png" => "image/png",
        ".gif" => "image/gif",
        ".webp" => "image/webp",
        _ => "image/jpeg",
    }
}
