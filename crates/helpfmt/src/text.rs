//! Text measurement, truncation, and word wrapping.
//!
//! These are the primitives the row renderers are built on. Width is measured
//! in display columns via `unicode-width`, so CJK characters count as 2 and
//! combining marks as 0.

use unicode_width::UnicodeWidthStr;

/// Function used to measure the display width of a string.
///
/// The formatter defaults to [`display_width`] but accepts any replacement,
/// e.g. one that ignores embedded escape sequences.
pub type MeasureFn = fn(&str) -> usize;

/// Display width of a string in terminal columns.
///
/// # Example
///
/// ```rust
/// use helpfmt::display_width;
///
/// assert_eq!(display_width("hello"), 5);
/// assert_eq!(display_width("你好"), 4);
/// ```
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Collapses every run of whitespace to a single space and trims the ends.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncates text to fit `max_width`, cutting at a word boundary and
/// appending `placeholder`.
///
/// Internal whitespace is collapsed first. If the collapsed text already fits,
/// it is returned unchanged. Otherwise the cut happens at the rightmost space
/// before character position `max_width - placeholder_len + 1`; when no space
/// qualifies (not even a single word fits), the result is the empty string.
/// Callers must handle an empty result.
///
/// # Example
///
/// ```rust
/// use helpfmt::truncate_text;
///
/// assert_eq!(truncate_text("lorem ipsum dolor", 10, "..."), "lorem...");
/// assert_eq!(truncate_text("incomprehensible", 10, "..."), "");
/// ```
pub fn truncate_text(text: &str, max_width: usize, placeholder: &str) -> String {
    let text = collapse_whitespace(text);
    if display_width(&text) <= max_width {
        return text;
    }
    let placeholder_len = placeholder.chars().count();
    let max_cut_point = (max_width + 1).saturating_sub(placeholder_len);
    let mut cut = None;
    for (pos, (byte_idx, ch)) in text.char_indices().enumerate() {
        if pos >= max_cut_point {
            break;
        }
        if ch == ' ' {
            cut = Some(byte_idx);
        }
    }
    match cut {
        Some(idx) => format!("{}{}", &text[..idx], placeholder),
        None => String::new(),
    }
}

/// Word-wraps text to `width`, preserving paragraph breaks.
///
/// Paragraphs are blank-line separated blocks; they never merge. Within a
/// paragraph whitespace is collapsed and words are packed greedily. A word
/// wider than `width` is emitted on its own line rather than split, so a
/// width of 0 degenerates to one word per line.
///
/// # Example
///
/// ```rust
/// use helpfmt::wrap_text;
///
/// assert_eq!(wrap_text("hello world foo bar", 11), "hello world\nfoo bar");
/// ```
pub fn wrap_text(text: &str, width: usize) -> String {
    split_paragraphs(text)
        .iter()
        .map(|p| wrap_paragraph(p, width))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Splits text into paragraphs at blank lines, joining the lines of each
/// paragraph with single spaces.
fn split_paragraphs(text: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current = String::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                paragraphs.push(std::mem::take(&mut current));
            }
        } else {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(line.trim());
        }
    }
    if !current.is_empty() {
        paragraphs.push(current);
    }
    paragraphs
}

fn wrap_paragraph(text: &str, width: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();
    let mut line_width = 0;
    for word in text.split_whitespace() {
        let word_width = display_width(word);
        if !line.is_empty() && line_width + 1 + word_width > width {
            lines.push(std::mem::take(&mut line));
            line_width = 0;
        }
        if !line.is_empty() {
            line.push(' ');
            line_width += 1;
        }
        line.push_str(word);
        line_width += word_width;
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_width_ascii() {
        assert_eq!(display_width(""), 0);
        assert_eq!(display_width("hello"), 5);
    }

    #[test]
    fn display_width_wide_chars() {
        assert_eq!(display_width("你好"), 4);
    }

    #[test]
    fn collapse_whitespace_runs() {
        assert_eq!(collapse_whitespace("a   b\tc"), "a b c");
        assert_eq!(collapse_whitespace("  leading and trailing  "), "leading and trailing");
        assert_eq!(collapse_whitespace(""), "");
    }

    #[test]
    fn truncate_fits_unchanged() {
        assert_eq!(truncate_text("lorem ipsum", 11, "..."), "lorem ipsum");
        assert_eq!(truncate_text("x", 1, "..."), "x");
    }

    #[test]
    fn truncate_cuts_at_word_boundary() {
        // Cut point is at character 10 - 3 + 1 = 8; the rightmost space
        // before it is after "lorem".
        assert_eq!(truncate_text("lorem ipsum dolor", 10, "..."), "lorem...");
    }

    #[test]
    fn truncate_no_boundary_yields_empty() {
        assert_eq!(truncate_text("xx", 1, "..."), "");
        assert_eq!(truncate_text("incomprehensible", 10, "..."), "");
    }

    #[test]
    fn truncate_collapses_whitespace_first() {
        assert_eq!(
            truncate_text("lorem   ipsum\tdolor", 10, "..."),
            truncate_text("lorem ipsum dolor", 10, "...")
        );
        // Collapsing alone can make the text fit.
        assert_eq!(truncate_text("a   b\tc", 5, "..."), "a b c");
    }

    #[test]
    fn truncate_custom_placeholder() {
        assert_eq!(truncate_text("lorem ipsum dolor", 10, "…"), "lorem…");
    }

    #[test]
    fn wrap_basic() {
        assert_eq!(wrap_text("hello world foo bar", 11), "hello world\nfoo bar");
    }

    #[test]
    fn wrap_preserves_paragraphs() {
        let text = "first paragraph text\n\nsecond paragraph";
        assert_eq!(wrap_text(text, 80), "first paragraph text\n\nsecond paragraph");
    }

    #[test]
    fn wrap_rejoins_paragraph_lines() {
        let text = "one\ntwo\nthree";
        assert_eq!(wrap_text(text, 80), "one two three");
    }

    #[test]
    fn wrap_zero_width_one_word_per_line() {
        assert_eq!(wrap_text("a bb ccc", 0), "a\nbb\nccc");
    }

    #[test]
    fn wrap_long_word_kept_whole() {
        assert_eq!(wrap_text("abcdefgh", 3), "abcdefgh");
        assert_eq!(wrap_text("ab abcdefgh cd", 3), "ab\nabcdefgh\ncd");
    }

    #[test]
    fn wrap_empty() {
        assert_eq!(wrap_text("", 40), "");
        assert_eq!(wrap_text("   \n  ", 40), "");
    }

    #[test]
    fn wrap_exact_fit() {
        assert_eq!(wrap_text("ab cd", 5), "ab cd");
        assert_eq!(wrap_text("ab cd", 4), "ab\ncd");
    }
}
