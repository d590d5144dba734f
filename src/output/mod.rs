// Output formatting — terminal display of ranked matches.

pub mod terminal;

/// Truncate a string to at most `max_chars` characters, appending "..." if
/// truncated. Counts characters, not bytes, so multi-byte candidate ids
/// never cause a slice panic.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(max_chars).collect();
    truncated.push_str("...");
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate_chars("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_long_string() {
        assert_eq!(truncate_chars("hello world", 5), "hello...");
    }

    #[test]
    fn test_truncate_multibyte_does_not_panic() {
        assert_eq!(truncate_chars("héllo wörld", 7), "héllo w...");
    }
}
