use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '…';

/// Fit `s` into `max_width` display columns, ending in an ellipsis when cut.
pub fn truncate_with_ellipsis(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    // Leave one column for the ellipsis
    let budget = max_width - 1;
    let mut result = String::new();
    let mut current_width = 0;

    for ch in s.chars() {
        let char_width = ch.width().unwrap_or(0);
        if current_width + char_width > budget {
            break;
        }
        result.push(ch);
        current_width += char_width;
    }

    result.push(ELLIPSIS);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_untouched() {
        assert_eq!(truncate_with_ellipsis("Hello", 10), "Hello");
        assert_eq!(truncate_with_ellipsis("Hello", 5), "Hello");
    }

    #[test]
    fn test_long_text_truncated() {
        assert_eq!(truncate_with_ellipsis("Hello World", 6), "Hello…");
    }

    #[test]
    fn test_wide_chars() {
        // Each CJK char takes two columns
        let result = truncate_with_ellipsis("你好世界", 6);
        assert_eq!(result, "你好…");
        assert!(result.width() <= 6);
    }

    #[test]
    fn test_zero_width() {
        assert_eq!(truncate_with_ellipsis("Hello", 0), "");
        assert_eq!(truncate_with_ellipsis("Hello", 1), "…");
    }
}
