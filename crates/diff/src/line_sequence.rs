use std::ops::Deref;

use ropey::Rope;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An ordered, read-only list of text lines from one file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LineSequence {
    lines: Vec<String>,
}

impl LineSequence {
    /// Create a line sequence from already split lines
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Split text into lines, dropping the line terminators
    ///
    /// Only `\n`, `\r\n` and `\r` end a line. Form feeds and the Unicode
    /// separators stay part of the line text.
    ///
    /// A terminator at the very end of the text does not start another line,
    /// so `"a\nb\n"` and `"a\nb"` both yield `["a", "b"]`. Empty text yields
    /// an empty sequence.
    pub fn from_text(text: &str) -> Self {
        if text.is_empty() {
            return Self::default();
        }

        let rope = Rope::from_str(text);
        let mut lines: Vec<String> = rope
            .lines()
            .map(|line| strip_line_break(&line.to_string()).to_string())
            .collect();

        // Rope yields an empty final line after a trailing terminator
        if rope.len_lines() > 1 && rope.line(rope.len_lines() - 1).len_chars() == 0 {
            lines.pop();
        }

        Self { lines }
    }

    /// Get the number of lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if there are no lines
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get a line by index
    pub fn get(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Iterate over the lines
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.lines.iter()
    }

    /// Get the lines as a slice
    pub fn as_slice(&self) -> &[String] {
        &self.lines
    }
}

fn strip_line_break(line: &str) -> &str {
    line.strip_suffix("\r\n")
        .or_else(|| line.strip_suffix(is_line_break))
        .unwrap_or(line)
}

fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r')
}

impl Deref for LineSequence {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.lines
    }
}

impl From<Vec<String>> for LineSequence {
    fn from(lines: Vec<String>) -> Self {
        Self::new(lines)
    }
}

impl<S: Into<String>> FromIterator<S> for LineSequence {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a LineSequence {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text_trailing_newline() {
        let with = LineSequence::from_text("line one\nline two\nline three\n");
        let without = LineSequence::from_text("line one\nline two\nline three");

        assert_eq!(with.as_slice(), ["line one", "line two", "line three"]);
        assert_eq!(with, without);
    }

    #[test]
    fn test_from_text_empty() {
        assert!(LineSequence::from_text("").is_empty());
    }

    #[test]
    fn test_from_text_blank_lines_kept() {
        let lines = LineSequence::from_text("a\n\n\nb\n\n");
        assert_eq!(lines.as_slice(), ["a", "", "", "b", ""]);

        let only_newline = LineSequence::from_text("\n");
        assert_eq!(only_newline.as_slice(), [""]);
    }

    #[test]
    fn test_from_text_line_endings() {
        let crlf = LineSequence::from_text("one\r\ntwo\r\n");
        let cr = LineSequence::from_text("one\rtwo");

        assert_eq!(crlf.as_slice(), ["one", "two"]);
        assert_eq!(cr.as_slice(), ["one", "two"]);
    }

    #[test]
    fn test_from_text_keeps_form_feed_and_unicode_separators() {
        let lines = LineSequence::from_text("int a;\n\u{000C}\nint b;\u{2028}x\n");
        assert_eq!(lines.as_slice(), ["int a;", "\u{c}", "int b;\u{2028}x"]);

        let others = LineSequence::from_text("a\u{000B}b\u{0085}c\u{2029}d");
        assert_eq!(others.len(), 1);
    }

    #[test]
    fn test_accessors() {
        let lines: LineSequence = ["a", "b"].into_iter().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines.get(1), Some("b"));
        assert_eq!(lines.get(2), None);
        assert_eq!(lines.iter().count(), 2);
    }
}
