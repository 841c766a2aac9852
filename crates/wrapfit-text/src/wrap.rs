#![forbid(unsafe_code)]

//! Text wrapping with Unicode correctness.
//!
//! Wrapping respects grapheme cluster boundaries and cell widths (CJK
//! characters are 2 cells wide), and breaks at whitespace when it can.
//!
//! # Example
//! ```
//! use wrapfit_text::wrap::{wrap_text, WrapMode};
//!
//! let lines = wrap_text("Hello world foo bar", 10, WrapMode::Word);
//! assert_eq!(lines, vec!["Hello", "world foo", "bar"]);
//!
//! let lines = wrap_text("Supercalifragilistic", 10, WrapMode::WordChar);
//! assert_eq!(lines, vec!["Supercalif", "ragilistic"]);
//! ```

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Text wrapping mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WrapMode {
    /// No wrapping; only explicit newlines break lines.
    None,
    /// Wrap at word boundaries; over-long words overflow on their own line.
    #[default]
    Word,
    /// Wrap at grapheme boundaries.
    Char,
    /// Word wrap with grapheme fallback for over-long words.
    WordChar,
}

/// Options for text wrapping.
#[derive(Debug, Clone)]
pub struct WrapOptions {
    /// Maximum width in cells. Zero disables wrapping.
    pub width: usize,
    /// Wrapping mode.
    pub mode: WrapMode,
    /// Trim trailing whitespace from wrapped lines.
    pub trim_trailing: bool,
}

impl WrapOptions {
    /// Create new wrap options with the given width.
    #[must_use]
    pub fn new(width: usize) -> Self {
        Self {
            width,
            mode: WrapMode::Word,
            trim_trailing: true,
        }
    }

    /// Set the wrap mode.
    #[must_use]
    pub fn mode(mut self, mode: WrapMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set whether to trim trailing whitespace.
    #[must_use]
    pub fn trim_trailing(mut self, trim: bool) -> Self {
        self.trim_trailing = trim;
        self
    }
}

/// Wrap text to the specified width in cells.
#[must_use]
pub fn wrap_text(text: &str, width: usize, mode: WrapMode) -> Vec<String> {
    wrap_with_options(text, &WrapOptions::new(width).mode(mode))
}

/// Wrap text with full options.
///
/// Always returns at least one line; explicit newlines always break.
#[must_use]
pub fn wrap_with_options(text: &str, options: &WrapOptions) -> Vec<String> {
    if options.width == 0 || options.mode == WrapMode::None {
        return text
            .split('\n')
            .map(|line| finalize_line(line, options))
            .collect();
    }

    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        match options.mode {
            WrapMode::Char => wrap_chars(paragraph, options, &mut lines),
            WrapMode::Word => wrap_words(paragraph, options, false, &mut lines),
            WrapMode::WordChar => wrap_words(paragraph, options, true, &mut lines),
            WrapMode::None => lines.push(finalize_line(paragraph, options)),
        }
    }
    lines
}

/// Widest line of a wrapped block, in cells.
#[must_use]
pub fn block_width<S: AsRef<str>>(lines: &[S]) -> usize {
    lines
        .iter()
        .map(|line| display_width(line.as_ref()))
        .max()
        .unwrap_or(0)
}

/// Calculate the display width of text in cells.
#[inline]
#[must_use]
pub fn display_width(text: &str) -> usize {
    if text.is_ascii() {
        return text.len();
    }
    text.width()
}

/// Wrap one paragraph at grapheme boundaries.
fn wrap_chars(paragraph: &str, options: &WrapOptions, lines: &mut Vec<String>) {
    let mut current = String::new();
    let mut current_width = 0;

    for grapheme in paragraph.graphemes(true) {
        let grapheme_width = grapheme.width();
        if current_width + grapheme_width > options.width && !current.is_empty() {
            lines.push(finalize_line(&current, options));
            current.clear();
            current_width = 0;
        }
        current.push_str(grapheme);
        current_width += grapheme_width;
    }

    lines.push(finalize_line(&current, options));
}

/// Wrap one paragraph at whitespace boundaries.
fn wrap_words(
    paragraph: &str,
    options: &WrapOptions,
    char_fallback: bool,
    lines: &mut Vec<String>,
) {
    let mut current = String::new();
    let mut current_width = 0;
    let mut continued = false;

    for token in split_tokens(paragraph) {
        let is_space = token.chars().all(char::is_whitespace);

        // Whitespace never starts a continuation line.
        if is_space && current.is_empty() && continued {
            continue;
        }

        let token_width = display_width(token);
        if current_width + token_width <= options.width {
            current.push_str(token);
            current_width += token_width;
            continue;
        }

        if !current.is_empty() {
            lines.push(finalize_line(&current, options));
            current.clear();
            current_width = 0;
            continued = true;
        }
        if is_space {
            continue;
        }

        if token_width <= options.width {
            current.push_str(token);
            current_width = token_width;
        } else if char_fallback {
            for grapheme in token.graphemes(true) {
                let grapheme_width = grapheme.width();
                if current_width + grapheme_width > options.width && !current.is_empty() {
                    lines.push(finalize_line(&current, options));
                    current.clear();
                    current_width = 0;
                }
                current.push_str(grapheme);
                current_width += grapheme_width;
            }
            continued = true;
        } else {
            lines.push(finalize_line(token, options));
            continued = true;
        }
    }

    if !current.is_empty() || !continued {
        lines.push(finalize_line(&current, options));
    }
}

/// Split a paragraph into alternating runs of whitespace and non-whitespace.
fn split_tokens(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut in_space = None;

    for (offset, grapheme) in text.grapheme_indices(true) {
        let is_space = grapheme.chars().all(char::is_whitespace);
        if in_space.is_some_and(|prev| prev != is_space) {
            tokens.push(&text[start..offset]);
            start = offset;
        }
        in_space = Some(is_space);
    }
    if start < text.len() {
        tokens.push(&text[start..]);
    }
    tokens
}

fn finalize_line(line: &str, options: &WrapOptions) -> String {
    if options.trim_trailing {
        line.trim_end().to_string()
    } else {
        line.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HELP_TEXT: &str =
        "What is the best way to put a label with long text in UI, like some help text?";

    #[test]
    fn wrap_text_no_wrap_needed() {
        assert_eq!(wrap_text("hello", 10, WrapMode::Word), vec!["hello"]);
    }

    #[test]
    fn wrap_text_single_word_wrap() {
        assert_eq!(
            wrap_text("hello world", 5, WrapMode::Word),
            vec!["hello", "world"]
        );
    }

    #[test]
    fn wrap_text_multiple_words() {
        assert_eq!(
            wrap_text("hello world foo bar", 11, WrapMode::Word),
            vec!["hello world", "foo bar"]
        );
    }

    #[test]
    fn wrap_text_exact_fit_keeps_line() {
        let lines = wrap_text(HELP_TEXT, 40, WrapMode::WordChar);
        assert_eq!(
            lines,
            vec![
                "What is the best way to put a label with",
                "long text in UI, like some help text?"
            ]
        );
    }

    #[test]
    fn wrap_text_preserves_newlines() {
        assert_eq!(
            wrap_text("line1\nline2", 20, WrapMode::Word),
            vec!["line1", "line2"]
        );
        assert_eq!(
            wrap_text("a\n\nb", 20, WrapMode::Word),
            vec!["a", "", "b"]
        );
    }

    #[test]
    fn wrap_text_empty_string() {
        assert_eq!(wrap_text("", 10, WrapMode::Word), vec![""]);
        assert_eq!(wrap_text("", 10, WrapMode::Char), vec![""]);
    }

    #[test]
    fn wrap_text_long_word_no_fallback() {
        assert_eq!(
            wrap_text("supercalifragilistic", 10, WrapMode::Word),
            vec!["supercalifragilistic"]
        );
    }

    #[test]
    fn wrap_text_long_word_with_fallback() {
        let lines = wrap_text("a supercalifragilistic b", 10, WrapMode::WordChar);
        assert_eq!(lines, vec!["a", "supercalif", "ragilistic", "b"]);
    }

    #[test]
    fn wrap_continuation_drops_leading_space() {
        let lines = wrap_text("aaaa   bbbb", 4, WrapMode::Word);
        assert_eq!(lines, vec!["aaaa", "bbbb"]);
    }

    #[test]
    fn wrap_char_mode() {
        assert_eq!(
            wrap_text("hello world", 5, WrapMode::Char),
            vec!["hello", " worl", "d"]
        );
    }

    #[test]
    fn wrap_none_mode() {
        assert_eq!(
            wrap_text("hello world", 5, WrapMode::None),
            vec!["hello world"]
        );
    }

    #[test]
    fn wrap_zero_width_only_breaks_newlines() {
        assert_eq!(wrap_text("hello\nyou", 0, WrapMode::Word), vec!["hello", "you"]);
    }

    #[test]
    fn wrap_cjk_respects_width() {
        assert_eq!(
            wrap_text("你好世界", 4, WrapMode::Char),
            vec!["你好", "世界"]
        );
        assert_eq!(wrap_text("你好世", 5, WrapMode::Char), vec!["你好", "世"]);
    }

    #[test]
    fn wrap_zwj_sequence_as_unit() {
        let text = "👨‍👩‍👧";
        let lines = wrap_text(text, 1, WrapMode::Char);
        assert_eq!(lines, vec![text]);
    }

    #[test]
    fn block_width_is_widest_line() {
        assert_eq!(block_width(&["ab", "abcd", ""]), 4);
        assert_eq!(block_width::<&str>(&[]), 0);
        assert_eq!(block_width(&["你好"]), 4);
    }

    #[test]
    fn display_width_basics() {
        assert_eq!(display_width("hello"), 5);
        assert_eq!(display_width("你好"), 4);
        assert_eq!(display_width(""), 0);
    }

    #[test]
    fn trim_trailing_can_be_disabled() {
        let opts = WrapOptions::new(6).mode(WrapMode::Char).trim_trailing(false);
        assert_eq!(wrap_with_options("abc   def", &opts), vec!["abc   ", "def"]);
    }
}
