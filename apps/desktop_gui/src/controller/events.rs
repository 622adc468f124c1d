//! Backend-to-UI events for the studio window.

use crate::media::PreviewImage;

pub enum UiEvent {
    Info(String),
    ImageLoaded {
        reference: String,
        image: PreviewImage,
    },
    ImageFailed {
        reference: String,
        reason: String,
    },
}

/// Short placeholder text for an image that could not be shown.
pub fn classify_image_failure(reason: &str) -> &'static str {
    let lower = reason.to_ascii_lowercase();
    if lower.contains("404") || lower.contains("not found") {
        "Image missing"
    } else if lower.contains("failed to fetch")
        || lower.contains("connection")
        || lower.contains("timed out")
    {
        "Server unreachable"
    } else if lower.contains("invalid image reference") {
        "Bad image link"
    } else {
        "Image unavailable"
    }
}

#[cfg(test)]
mod tests {
    use super::classify_image_failure;

    #[test]
    fn classifies_common_image_failures() {
        assert_eq!(
            classify_image_failure("image endpoint returned error: HTTP status client error (404 Not Found)"),
            "Image missing"
        );
        assert_eq!(
            classify_image_failure("failed to fetch http://127.0.0.1:8443/images/a.jpg: error sending request"),
            "Server unreachable"
        );
        assert_eq!(
            classify_image_failure("invalid image reference 'http://': empty host"),
            "Bad image link"
        );
        assert_eq!(classify_image_failure("Format error decoding Png"), "Image unavailable");
    }
}
