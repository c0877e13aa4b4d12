//! Value rendering and line diffs used by failure messages.

use crate::config;
use similar::{ChangeTag, TextDiff};
use std::fmt::Debug;

/// 單行顯示，超過 `max_value_len` 時截斷
pub fn inline<T: Debug + ?Sized>(value: &T) -> String {
    truncate(&format!("{:?}", value), config::settings().max_value_len)
}

pub fn pretty<T: Debug + ?Sized>(value: &T) -> String {
    format!("{:#?}", value)
}

pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffLine<'a> {
    Common(&'a str),
    Removed(&'a str),
    Added(&'a str),
}

/// 逐行差異 (actual 為刪除端、expected 為新增端)
pub fn diff_lines<'a>(actual: &'a str, expected: &'a str) -> Vec<DiffLine<'a>> {
    let a: Vec<&str> = actual.lines().collect();
    let e: Vec<&str> = expected.lines().collect();

    let diff = TextDiff::from_slices(&a, &e);
    let lines: Vec<DiffLine<'a>> = diff
        .iter_all_changes()
        .map(|change| match change.tag() {
            ChangeTag::Equal => DiffLine::Common(change.value()),
            ChangeTag::Delete => DiffLine::Removed(change.value()),
            ChangeTag::Insert => DiffLine::Added(change.value()),
        })
        .collect();
    lines
}

/// `[Diff] Actual / Expected` 區塊
pub fn diff_block(actual: &str, expected: &str) -> String {
    let max_lines = config::settings().max_diff_lines;
    let lines = diff_lines(actual, expected);

    let mut block = String::from("\n\n    [Diff] Actual / Expected\n");
    for line in lines.iter().take(max_lines) {
        let (marker, text) = match line {
            DiffLine::Common(t) => ("    ", t),
            DiffLine::Removed(t) => ("-   ", t),
            DiffLine::Added(t) => ("+   ", t),
        };
        block.push('\n');
        block.push_str(marker);
        block.push_str(text);
    }
    if lines.len() > max_lines {
        block.push_str(&format!("\n    ... {} more lines", lines.len() - max_lines));
    }
    block.push('\n');
    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("abcdef", 3), "abc...");
        assert_eq!(truncate("abc", 3), "abc");
        assert_eq!(truncate("日本語テキスト", 2), "日本...");
    }

    #[test]
    fn test_diff_lines_marks_changes() {
        let diff = diff_lines("a\nb\nc", "a\nx\nc");
        assert_eq!(
            diff,
            vec![
                DiffLine::Common("a"),
                DiffLine::Removed("b"),
                DiffLine::Added("x"),
                DiffLine::Common("c"),
            ]
        );
    }

    #[test]
    fn test_diff_lines_handles_unequal_lengths() {
        let diff = diff_lines("a", "a\nb\nc");
        assert_eq!(
            diff,
            vec![
                DiffLine::Common("a"),
                DiffLine::Added("b"),
                DiffLine::Added("c"),
            ]
        );
    }

    #[test]
    fn test_diff_block_format() {
        let block = diff_block("1", "2");
        assert!(block.contains("[Diff] Actual / Expected"));
        assert!(block.contains("\n-   1"));
        assert!(block.contains("\n+   2"));
    }

    #[test]
    fn test_diff_block_has_single_blank_line_after_header() {
        let block = diff_block("same\nold", "same\nnew");
        assert!(block.contains("[Diff] Actual / Expected\n\n    same\n-   old\n+   new"));
        assert!(!block.contains("\n\n\n"));
    }

    #[test]
    fn test_pretty_is_multiline_for_structs() {
        let rendered = pretty(&vec![1, 2]);
        assert_eq!(rendered.lines().count(), 4);
    }
}
