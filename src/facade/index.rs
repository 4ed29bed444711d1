//! Member-to-index conversion for arrays and strings.

/// Reads a member name as a decimal integer the way a lenient `parseInt` does:
/// leading whitespace and one sign are accepted, and parsing stops at the
/// first non-digit. `None` when no digit leads or the value overflows.
pub(crate) fn parse_index(member: &str) -> Option<i64> {
    let s = member.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude: i64 = digits[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Like [`parse_index`] but only yields positions usable on a sequence.
pub(crate) fn array_index(member: &str) -> Option<usize> {
    parse_index(member).and_then(|i| usize::try_from(i).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_integers() {
        assert_eq!(parse_index("0"), Some(0));
        assert_eq!(parse_index("42"), Some(42));
        assert_eq!(parse_index("-7"), Some(-7));
        assert_eq!(parse_index("+3"), Some(3));
    }

    #[test]
    fn test_lenient_prefixes() {
        assert_eq!(parse_index("  5"), Some(5));
        assert_eq!(parse_index("2abc"), Some(2));
        assert_eq!(parse_index("1.9"), Some(1));
    }

    #[test]
    fn test_non_numeric() {
        assert_eq!(parse_index(""), None);
        assert_eq!(parse_index("abc"), None);
        assert_eq!(parse_index("-"), None);
        assert_eq!(parse_index(".5"), None);
        assert_eq!(parse_index("99999999999999999999"), None);
    }

    #[test]
    fn test_array_index_rejects_negatives() {
        assert_eq!(array_index("-1"), None);
        assert_eq!(array_index("-0"), Some(0));
        assert_eq!(array_index("3"), Some(3));
    }
}
