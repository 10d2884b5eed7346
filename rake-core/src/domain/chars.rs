//! Character classification shared by the tokenizing stages
//!
//! All classes are ASCII-only: bytes outside the ASCII range never count as
//! word characters, so multi-byte UTF-8 sequences behave as separators.

/// Word character for stopword boundaries: `[A-Za-z0-9_]`
#[inline]
pub fn is_word_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

/// Character kept inside a scored word: `[A-Za-z0-9_+\-/]`
#[inline]
pub fn is_token_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '_' | '+' | '-' | '/')
}

/// Whitespace stripped from sentences and phrases
#[inline]
pub fn is_blank(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r' | '\0' | '\x0B')
}

/// Trim leading and trailing blanks
pub fn trim_blank(text: &str) -> &str {
    text.trim_matches(is_blank)
}

/// Whether a token reads as a number (`12`, `-3`, `+1e5`, `4.`)
///
/// Numeric tokens stay in their phrase but are never scored.
pub fn is_numeric(token: &str) -> bool {
    let bytes = token.as_bytes();
    let mut pos = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos += 1;
    }

    let int_digits = count_digits(&bytes[pos..]);
    pos += int_digits;

    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        frac_digits = count_digits(&bytes[pos..]);
        pos += frac_digits;
    }

    if int_digits == 0 && frac_digits == 0 {
        return false;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut exp = pos + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = count_digits(&bytes[exp..]);
        if exp_digits == 0 {
            return false;
        }
        pos = exp + exp_digits;
    }

    pos == bytes.len()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_bytes() {
        assert!(is_word_byte(b'a'));
        assert!(is_word_byte(b'Z'));
        assert!(is_word_byte(b'7'));
        assert!(is_word_byte(b'_'));
        assert!(!is_word_byte(b'-'));
        assert!(!is_word_byte(b'\''));
        assert!(!is_word_byte(0xC3));
    }

    #[test]
    fn test_token_chars() {
        for ch in ['a', 'Q', '0', '_', '+', '-', '/'] {
            assert!(is_token_char(ch), "{ch:?} should be a token char");
        }
        for ch in [' ', '.', '\'', '#', 'é', '\t'] {
            assert!(!is_token_char(ch), "{ch:?} should separate tokens");
        }
    }

    #[test]
    fn test_trim_blank() {
        assert_eq!(trim_blank("  linear constraints\t\n"), "linear constraints");
        assert_eq!(trim_blank("\x0B\0x\r"), "x");
        assert_eq!(trim_blank("   "), "");
    }

    #[test]
    fn test_numeric_tokens() {
        for token in ["0", "42", "-3", "+7", "1e5", "2E-3", "4.", ".5", "3.25"] {
            assert!(is_numeric(token), "{token} should be numeric");
        }
    }

    #[test]
    fn test_non_numeric_tokens() {
        for token in ["", "+", "-", "e5", "1e", "1/2", "1_000", "x86", "c++", "3d", "1-2"] {
            assert!(!is_numeric(token), "{token} should not be numeric");
        }
    }
}
