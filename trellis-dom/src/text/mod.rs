use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use crate::types::TextAlign;

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Cut `s` to at most `max_width` columns, ending in `…` when it had to cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let target = max_width - 1;
    let mut result = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let w = char_width(ch);
        if width + w > target {
            break;
        }
        result.push(ch);
        width += w;
    }
    result.push('…');
    result
}

/// Keep the end of `s` within `max_width`, marking the cut with a leading `…`.
pub fn tail_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let target = max_width - 1;
    let mut width = 0;
    let mut start = s.len();
    for (i, ch) in s.char_indices().rev() {
        let w = char_width(ch);
        if width + w > target {
            break;
        }
        start = i;
        width += w;
    }
    format!("…{}", &s[start..])
}

/// Replace every character with `mask`, so the result has one glyph per char.
pub fn mask(s: &str, mask: char) -> String {
    s.chars().map(|_| mask).collect()
}

pub fn align_offset(text_width: usize, available_width: usize, align: TextAlign) -> usize {
    if text_width >= available_width {
        return 0;
    }

    match align {
        TextAlign::Left => 0,
        TextAlign::Center => (available_width - text_width) / 2,
        TextAlign::Right => available_width - text_width,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_adds_ellipsis() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("hello world", 6), "hello…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn truncation_respects_wide_chars() {
        // Each CJK glyph is two columns wide.
        assert_eq!(truncate_to_width("日本語", 4), "日…");
    }

    #[test]
    fn tail_keeps_the_end() {
        assert_eq!(tail_to_width("hello world", 6), "…world");
        assert_eq!(tail_to_width("short", 10), "short");
        assert_eq!(tail_to_width("abc", 0), "");
        // A wide char that would overflow is dropped whole.
        assert_eq!(tail_to_width("ab日本", 4), "…本");
        assert_eq!(display_width(&tail_to_width("ab日本", 4)), 3);
    }

    #[test]
    fn mask_counts_chars_not_bytes() {
        assert_eq!(mask("héllo", '•'), "•••••");
        assert_eq!(mask("", '*'), "");
    }

    #[test]
    fn alignment() {
        assert_eq!(align_offset(2, 10, TextAlign::Left), 0);
        assert_eq!(align_offset(2, 10, TextAlign::Center), 4);
        assert_eq!(align_offset(2, 10, TextAlign::Right), 8);
        assert_eq!(align_offset(12, 10, TextAlign::Right), 0);
    }
}
