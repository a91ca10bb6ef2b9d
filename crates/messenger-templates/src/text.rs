//! Word-boundary aware text splitting

/// Split `text` into chunks of at most `width` characters.
///
/// Each chunk ends at the last whitespace that keeps it within `width`; a
/// run with no whitespace in range is cut hard at `width`. Whitespace at the
/// edges of a chunk is dropped, so blank input yields no chunks. Widths are
/// counted in `char`s.
pub fn break_text(text: &str, width: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    if width == 0 {
        return chunks;
    }

    let mut rest = text.trim();
    while !rest.is_empty() {
        // Byte offset just past `width` chars, or None when the rest fits.
        let limit = rest.char_indices().nth(width).map(|(i, _)| i);
        let Some(limit) = limit else {
            chunks.push(rest.to_string());
            break;
        };

        // A whitespace char sitting exactly at `limit` is a clean break too.
        let window_end = limit + rest[limit..].chars().next().map_or(0, char::len_utf8);
        let split = rest[..window_end]
            .char_indices()
            .filter(|(_, c)| c.is_whitespace())
            .map(|(i, _)| i)
            .last()
            .filter(|&i| i > 0);

        let (head, tail) = match split {
            Some(i) => rest.split_at(i),
            None => rest.split_at(limit),
        };
        chunks.push(head.trim_end().to_string());
        rest = tail.trim_start();
    }

    chunks
}

/// First chunk of [`break_text`], or an empty string for blank input.
pub fn truncate_words(text: &str, width: usize) -> String {
    break_text(text, width).into_iter().next().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_one_chunk() {
        assert_eq!(break_text("Hello", 20), vec!["Hello"]);
        assert_eq!(break_text("exactly twenty chars", 20), vec!["exactly twenty chars"]);
    }

    #[test]
    fn test_breaks_at_last_whitespace() {
        let chunks = break_text("The quick brown fox jumps over", 20);
        assert_eq!(chunks, vec!["The quick brown fox", "jumps over"]);
    }

    #[test]
    fn test_whitespace_right_after_limit() {
        // the 21st char is a space, so the first 20 chars form a whole word run
        let chunks = break_text("aaaaaaaaaa bbbbbbbbb ccc", 20);
        assert_eq!(chunks, vec!["aaaaaaaaaa bbbbbbbbb", "ccc"]);
    }

    #[test]
    fn test_hard_cut_without_whitespace() {
        let chunks = break_text("abcdefghijklmnopqrstuvwxyz", 10);
        assert_eq!(chunks, vec!["abcdefghij", "klmnopqrst", "uvwxyz"]);
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        let chunks = break_text("ééééé ééééé", 5);
        assert_eq!(chunks, vec!["ééééé", "ééééé"]);
    }

    #[test]
    fn test_blank_and_zero_width() {
        assert!(break_text("   ", 10).is_empty());
        assert!(break_text("abc", 0).is_empty());
        assert_eq!(truncate_words("", 5), "");
    }

    #[test]
    fn test_truncate_words_takes_first_chunk() {
        assert_eq!(truncate_words("Show me the latest offers please", 20), "Show me the latest");
    }
}
