//! Byte-offset to character-index translation.
//!
//! The parser speaks UTF-8 byte offsets; reported widths and indent columns
//! are measured in characters. Edits splice on byte ranges directly since
//! Rust strings are byte-indexable.

/// Convert a UTF-8 byte offset to a character index, saturating at the end
/// of the text. An offset inside a multi-byte sequence counts the code point
/// it lands in.
pub fn byte_to_char(text: &str, byte: usize) -> usize {
    let mut chars = 0;
    let mut offset = 0;
    for ch in text.chars() {
        if offset >= byte {
            return chars;
        }
        offset += ch.len_utf8();
        chars += 1;
    }
    chars
}

/// Character column (0-indexed from the line start) of a byte offset.
///
/// The offset must lie on a character boundary; every offset handed in comes
/// from the parser, which guarantees that.
pub fn char_column(text: &str, byte: usize) -> usize {
    let line_start = text[..byte].rfind('\n').map(|i| i + 1).unwrap_or(0);
    byte_to_char(&text[line_start..], byte - line_start)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_offsets_are_identity() {
        let text = "hello world";
        assert_eq!(byte_to_char(text, 0), 0);
        assert_eq!(byte_to_char(text, 5), 5);
        assert_eq!(byte_to_char(text, 11), 11);
    }

    #[test]
    fn multibyte_offsets_count_code_points() {
        // é is 2 bytes, 世 is 3 bytes
        let text = "é世x";
        assert_eq!(byte_to_char(text, 0), 0);
        assert_eq!(byte_to_char(text, 2), 1); // after é
        assert_eq!(byte_to_char(text, 5), 2); // after 世
        assert_eq!(byte_to_char(text, 6), 3);
    }

    #[test]
    fn saturates_past_the_end() {
        let text = "abc";
        assert_eq!(byte_to_char(text, 100), 3);
    }

    #[test]
    fn column_resets_at_line_starts() {
        let text = "(é b\n c)";
        assert_eq!(char_column(text, 0), 0);
        // b sits after "(é " = 4 bytes but 3 characters
        assert_eq!(char_column(text, 4), 3);
        // c starts the second line at column 1
        assert_eq!(char_column(text, 7), 1);
    }
}
