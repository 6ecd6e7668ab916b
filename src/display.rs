//! Display helpers shared by the reporters.

use crate::cookie::Expiry;
use chrono::{DateTime, FixedOffset};

pub const INVALID_DATE: &str = "Invalid Date";
const EXPIRY_FORMAT: &str = "%b %-d, %Y, %I:%M %p";
const REDACTION_MARK: &str = "****";

/// Keep the first `show_len` characters of `value` and mask the rest.
/// Values no longer than `show_len` are returned unchanged.
pub fn redact_value(value: &str, show_len: usize) -> String {
    if value.chars().count() <= show_len {
        return value.to_string();
    }
    let visible: String = value.chars().take(show_len).collect();
    format!("{}{}", visible, REDACTION_MARK)
}

/// Human-readable expiration. Timestamps are shown in their own offset.
pub fn format_expiry(expiry: &Expiry) -> String {
    match expiry {
        Expiry::Session => Expiry::SESSION.to_string(),
        Expiry::At(raw) => parse_timestamp(raw)
            .map(|ts| ts.format(EXPIRY_FORMAT).to_string())
            .unwrap_or_else(|| INVALID_DATE.to_string()),
    }
}

// RFC 3339 (devtools exports) or RFC 2822 (Set-Cookie `Expires`).
fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_rfc2822(raw))
        .ok()
}

pub fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_short_value_unchanged() {
        assert_eq!(redact_value("", 4), "");
        assert_eq!(redact_value("abc", 4), "abc");
        assert_eq!(redact_value("abcd", 4), "abcd");
    }

    #[test]
    fn test_redact_long_value() {
        assert_eq!(redact_value("abcdef", 4), "abcd****");
        assert_eq!(redact_value("0123456789abcdef", 8), "01234567****");
    }

    #[test]
    fn test_redact_multibyte_value() {
        assert_eq!(redact_value("クッキーの値です", 4), "クッキー****");
    }

    #[test]
    fn test_redact_zero_length_masks_everything() {
        assert_eq!(redact_value("secret", 0), "****");
    }

    #[test]
    fn test_format_session() {
        assert_eq!(format_expiry(&Expiry::Session), "Session");
    }

    #[test]
    fn test_format_rfc3339() {
        let expiry = Expiry::At("2026-01-05T15:04:00Z".to_string());
        assert_eq!(format_expiry(&expiry), "Jan 5, 2026, 03:04 PM");
    }

    #[test]
    fn test_format_rfc2822() {
        let expiry = Expiry::At("Wed, 21 Oct 2015 07:28:00 GMT".to_string());
        assert_eq!(format_expiry(&expiry), "Oct 21, 2015, 07:28 AM");
    }

    #[test]
    fn test_format_invalid() {
        let expiry = Expiry::At("next tuesday".to_string());
        assert_eq!(format_expiry(&expiry), INVALID_DATE);
    }

    #[test]
    fn test_yes_no() {
        assert_eq!(yes_no(true), "Yes");
        assert_eq!(yes_no(false), "No");
    }
}
