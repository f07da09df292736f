//! Utilities for sanitizing error messages.
//!
//! Error messages end up inside `Status_Code` and from there in CSV cells, so
//! control characters are removed and the length is capped.

/// Sanitizes an error message by removing control characters.
///
/// Control characters (0x00-0x1F, except newline/tab/carriage return) are
/// dropped; everything else, including non-ASCII text, is kept.
pub fn sanitize_error_message(message: &str) -> String {
    message
        .chars()
        .filter(|c| {
            let code = *c as u32;
            code >= 0x20 // Printable ASCII starts at 0x20 (space)
                || code == 0x09 // Tab
                || code == 0x0A // Newline
                || code == 0x0D // Carriage return
        })
        .collect()
}

/// Sanitizes and truncates an error message to `MAX_ERROR_MESSAGE_LENGTH` characters.
///
/// Truncated messages end with an indicator carrying the original length.
pub fn sanitize_and_truncate_error_message(message: &str) -> String {
    let sanitized = sanitize_error_message(message);
    let char_count = sanitized.chars().count();

    if char_count > crate::config::MAX_ERROR_MESSAGE_LENGTH {
        // Leave room for the truncation note
        let truncate_len = crate::config::MAX_ERROR_MESSAGE_LENGTH.saturating_sub(50);
        let truncated: String = sanitized.chars().take(truncate_len).collect();
        format!(
            "{}... (truncated, original length: {} chars)",
            truncated, char_count
        )
    } else {
        sanitized
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_ERROR_MESSAGE_LENGTH;

    #[test]
    fn test_sanitize_removes_control_characters() {
        assert_eq!(
            sanitize_error_message("connection\u{0000} reset\u{0007}"),
            "connection reset"
        );
    }

    #[test]
    fn test_sanitize_keeps_whitespace_and_unicode() {
        let message = "timed out\n\tnach 15 Sekunden – ü";
        assert_eq!(sanitize_error_message(message), message);
    }

    #[test]
    fn test_short_message_not_truncated() {
        assert_eq!(
            sanitize_and_truncate_error_message("dns error"),
            "dns error"
        );
    }

    #[test]
    fn test_long_message_truncated() {
        let long = "x".repeat(MAX_ERROR_MESSAGE_LENGTH + 100);
        let result = sanitize_and_truncate_error_message(&long);
        assert!(result.ends_with(&format!(
            "(truncated, original length: {} chars)",
            MAX_ERROR_MESSAGE_LENGTH + 100
        )));
        assert!(result.chars().count() <= MAX_ERROR_MESSAGE_LENGTH);
    }
}
