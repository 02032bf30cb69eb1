/// Parse the raw text of the point-count field.
///
/// Only ASCII digits are accepted; the empty string counts as 0. Returns
/// `None` for anything else, including digit strings too large for `u32`,
/// in which case the edit is dropped.
pub fn parse_target_count(raw: &str) -> Option<u32> {
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if raw.is_empty() {
        return Some(0);
    }
    raw.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_accepted() {
        assert_eq!(parse_target_count("5"), Some(5));
        assert_eq!(parse_target_count("120"), Some(120));
        assert_eq!(parse_target_count("007"), Some(7));
        assert_eq!(parse_target_count("0"), Some(0));
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(parse_target_count(""), Some(0));
    }

    #[test]
    fn test_non_digits_rejected() {
        assert_eq!(parse_target_count("-3"), None);
        assert_eq!(parse_target_count("3.5"), None);
        assert_eq!(parse_target_count("1e3"), None);
        assert_eq!(parse_target_count(" 4"), None);
        assert_eq!(parse_target_count("abc"), None);
        // non-ASCII digits
        assert_eq!(parse_target_count("٣"), None);
    }

    #[test]
    fn test_overflow_rejected() {
        assert_eq!(parse_target_count("4294967295"), Some(u32::MAX));
        assert_eq!(parse_target_count("4294967296"), None);
    }
}
