//! 按终端显示宽度处理文本
//!
//! 内容里有 "→"、"⚗" 这类符号，宽度不能按字节或字符数算。

use std::mem;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// 截断到 `width` 列，超出时以 "…" 结尾
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// 按单词换行，单词本身超宽时硬切
///
/// 原文中的换行符保留为段落分隔。
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();

            if line_width > 0 && line_width + 1 + word_width <= width {
                line.push(' ');
                line.push_str(word);
                line_width += 1 + word_width;
                continue;
            }

            if line_width > 0 {
                lines.push(mem::take(&mut line));
                line_width = 0;
            }

            if word_width <= width {
                line.push_str(word);
                line_width = word_width;
            } else {
                for ch in word.chars() {
                    let w = ch.width().unwrap_or(0);
                    if line_width > 0 && line_width + w > width {
                        lines.push(mem::take(&mut line));
                        line_width = 0;
                    }
                    line.push(ch);
                    line_width += w;
                }
            }
        }

        lines.push(line);
    }

    lines
}

/// 带前缀的换行：首行加 `marker`，后续行用等宽空白对齐
///
/// 用于 "• " 列表项和 "1. " 步骤。
pub fn wrap_with_marker(text: &str, width: usize, marker: &str) -> Vec<String> {
    let marker_width = marker.width();
    let indent = " ".repeat(marker_width);
    wrap(text, width.saturating_sub(marker_width))
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 {
                format!("{marker}{line}")
            } else {
                format!("{indent}{line}")
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate("Model Registry", 20), "Model Registry");
    }

    #[test]
    fn truncate_marks_cut() {
        assert_eq!(truncate("Model Registry", 8), "Model R…");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn wrap_breaks_on_words() {
        let lines = wrap("the quick brown fox jumps", 10);
        assert_eq!(lines, vec!["the quick", "brown fox", "jumps"]);
        assert!(lines.iter().all(|l| l.width() <= 10));
    }

    #[test]
    fn wrap_splits_long_words() {
        assert_eq!(wrap("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn wrap_keeps_paragraphs() {
        assert_eq!(wrap("one\n\ntwo", 10), vec!["one", "", "two"]);
    }

    #[test]
    fn marker_indents_continuation() {
        let lines = wrap_with_marker("alpha beta gamma", 10, "1. ");
        assert_eq!(lines, vec!["1. alpha", "   beta", "   gamma"]);
    }
}
