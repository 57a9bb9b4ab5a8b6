use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Shorten `s` to at most `max_width` terminal columns, ending in "..." when
/// something was cut.
pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return take_width(s, max_width);
    }
    format!("{}...", take_width(s, max_width - 3))
}

/// Longest prefix of `s` that fits in `max_width` columns.
fn take_width(s: &str, max_width: usize) -> String {
    let mut out = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > max_width {
            break;
        }
        out.push(ch);
        width += w;
    }
    out
}

/// Pad or cut `s` so it is exactly `width` columns, centered.
pub fn center_in(s: &str, width: usize) -> String {
    let text = take_width(s, width);
    let used = text.width();
    let left = (width - used) / 2;
    let right = width - used - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

/// Byte offset of the `char_index`-th character, or the string length past
/// the end. Keeps cursor edits on character boundaries for non-ASCII input.
pub fn byte_index(s: &str, char_index: usize) -> usize {
    s.char_indices()
        .nth(char_index)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

/// Terminal column of a cursor sitting before the `char_index`-th character.
pub fn cursor_column(s: &str, char_index: usize) -> usize {
    s.chars()
        .take(char_index)
        .map(|c| c.width().unwrap_or(0))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string_no_truncation() {
        let s = "Short string";
        let result = truncate_string(s, 20);
        assert_eq!(result, "Short string");
    }

    #[test]
    fn test_truncate_string_with_truncation() {
        let s = "This is a very long string that should be truncated";
        let result = truncate_string(s, 20);
        assert_eq!(result, "This is a very lo...");
        assert!(result.len() <= 20);
    }

    #[test]
    fn test_truncate_string_exact_length() {
        let s = "Exactly twenty!!";
        let result = truncate_string(s, 20);
        assert_eq!(result, "Exactly twenty!!");
    }

    #[test]
    fn test_truncate_string_empty() {
        assert_eq!(truncate_string("", 20), "");
    }

    #[test]
    fn test_truncate_string_polish_characters() {
        // Multi-byte characters must not be split.
        assert_eq!(truncate_string("Żelazo", 5), "Że...");
        assert_eq!(truncate_string("Rtęć", 4), "Rtęć");
    }

    #[test]
    fn test_truncate_string_tiny_width() {
        assert_eq!(truncate_string("Darmsztadt", 2), "Da");
    }

    #[test]
    fn test_center_in() {
        assert_eq!(center_in("Fe", 6), "  Fe  ");
        assert_eq!(center_in("H", 4), " H  ");
        assert_eq!(center_in("Oganeson", 4), "Ogan");
    }

    #[test]
    fn test_byte_index_multibyte() {
        let s = "Wapń1";
        assert_eq!(byte_index(s, 0), 0);
        assert_eq!(byte_index(s, 4), 5);
        assert_eq!(byte_index(s, 5), s.len());
        assert_eq!(byte_index(s, 99), s.len());
    }

    #[test]
    fn test_cursor_column() {
        assert_eq!(cursor_column("Hello", 3), 3);
        assert_eq!(cursor_column("Sód", 3), 3);
        assert_eq!(cursor_column("", 0), 0);
    }
}
