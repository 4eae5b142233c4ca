//! Toggle endpoint paths

use likes_core::MessageId;

/// Path of the toggle endpoint for a message
///
/// POST /api/messages/{message_id}/toggle_like
pub fn toggle_like_path(message_id: &MessageId) -> String {
    format!("/api/messages/{message_id}/toggle_like")
}

/// Full toggle endpoint URL under a base URL
pub fn toggle_like_url(base_url: &str, message_id: &MessageId) -> String {
    format!(
        "{}{}",
        base_url.trim_end_matches('/'),
        toggle_like_path(message_id)
    )
}
