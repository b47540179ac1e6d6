use std::borrow::Cow;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Ellipsis appended when a line is truncated.
const ELLIPSIS: &str = "...";
const ELLIPSIS_WIDTH: usize = 3;

/// Display width of a string in terminal columns.
///
/// Unicode-aware: CJK characters and emoji count as two columns,
/// zero-width characters as none.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate a string to fit within `max_width` terminal columns, appending
/// "..." when text was cut off.
///
/// Returns `Cow::Borrowed` when the string already fits. For widths of 3
/// columns or less there is no room for text plus ellipsis, so the result
/// is whatever characters fit, without an ellipsis.
pub fn truncate_to_width(s: &str, max_width: usize) -> Cow<'_, str> {
    if display_width(s) <= max_width {
        return Cow::Borrowed(s);
    }

    let (budget, ellipsis) = if max_width > ELLIPSIS_WIDTH {
        (max_width - ELLIPSIS_WIDTH, true)
    } else {
        (max_width, false)
    };

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    if ellipsis {
        out.push_str(ELLIPSIS);
    }
    Cow::Owned(out)
}

/// Remove control characters from server-supplied text before printing it
/// to a terminal, keeping newlines and tabs.
pub fn strip_control_chars(s: &str) -> Cow<'_, str> {
    let is_bad = |c: char| c.is_control() && c != '\n' && c != '\t';
    if s.chars().any(is_bad) {
        Cow::Owned(s.chars().filter(|&c| !is_bad(c)).collect())
    } else {
        Cow::Borrowed(s)
    }
}

/// Split an article body into paragraphs on its line-break delimiter,
/// dropping blank segments.
pub fn paragraphs(body: &str) -> Vec<&str> {
    body.split('\n')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_width_ascii_and_cjk() {
        assert_eq!(display_width("Hello"), 5);
        assert_eq!(display_width("世界"), 4);
    }

    #[test]
    fn test_truncate_returns_borrowed_when_fits() {
        let result = truncate_to_width("Short", 10);
        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(result, "Short");
    }

    #[test]
    fn test_truncate_appends_ellipsis() {
        let result = truncate_to_width("A fairly long article title", 10);
        assert_eq!(result, "A fairl...");
        assert_eq!(display_width(&result), 10);
    }

    #[test]
    fn test_truncate_never_splits_wide_chars() {
        // Each CJK char is 2 columns; the budget after the ellipsis is 4
        let result = truncate_to_width("世界世界世界", 7);
        assert_eq!(result, "世界...");
    }

    #[test]
    fn test_truncate_tiny_width_drops_ellipsis() {
        assert_eq!(truncate_to_width("Hello", 2), "He");
        assert_eq!(truncate_to_width("Hello", 0), "");
    }

    #[test]
    fn test_strip_control_chars_keeps_newlines() {
        let input = "Title\u{7}\nBody\tcolumn";
        assert_eq!(strip_control_chars(input), "Title\nBody\tcolumn");
    }

    #[test]
    fn test_strip_control_chars_borrows_clean_input() {
        let result = strip_control_chars("clean text");
        assert!(matches!(result, Cow::Borrowed(_)));
    }

    #[test]
    fn test_paragraphs_splits_and_drops_blanks() {
        let body = "First paragraph.\n\n  Second paragraph.  \n";
        assert_eq!(paragraphs(body), vec!["First paragraph.", "Second paragraph."]);
    }

    #[test]
    fn test_paragraphs_of_empty_body() {
        assert!(paragraphs("").is_empty());
    }
}
