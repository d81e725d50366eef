//! Text helpers for tile summaries

/// Length of the stage excerpt shown on maturity tiles.
pub const EXCERPT_CHARS: usize = 100;

/// First `max_chars` characters of `text` followed by `...`.
///
/// The cut always falls on a character boundary. The ellipsis is appended
/// even when nothing was cut, matching how stage tiles read.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let end = text
        .char_indices()
        .nth(max_chars)
        .map_or(text.len(), |(i, _)| i);
    format!("{}...", &text[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cuts_at_char_count() {
        let text = "a".repeat(150);
        let out = excerpt(&text, EXCERPT_CHARS);
        assert_eq!(out.chars().count(), 103);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn short_text_keeps_everything() {
        assert_eq!(excerpt("short", EXCERPT_CHARS), "short...");
    }

    #[test]
    fn respects_multibyte_boundaries() {
        let text = "äöü".repeat(50);
        let out = excerpt(&text, EXCERPT_CHARS);
        assert_eq!(out.chars().count(), EXCERPT_CHARS + 3);
        assert!(out.starts_with("äöüä"));
    }
}
