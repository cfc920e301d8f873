//! Code-point tokenizer.
//!
//! One token per `char`, equal to its Unicode scalar value, in order.

use sitewright_core::error::InferenceError;

/// Convert text to its code points.
pub fn tokenize(text: &str) -> Vec<u32> {
    text.chars().map(u32::from).collect()
}

/// Convert code points back to text.
///
/// Tokens that are not Unicode scalar values (surrogates, values above
/// `0x10FFFF`) decode to U+FFFD.
pub fn detokenize(tokens: &[u32]) -> String {
    tokens
        .iter()
        .map(|&t| char::from_u32(t).unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect()
}

/// Strict variant of [`detokenize`] that rejects invalid tokens.
pub fn try_detokenize(tokens: &[u32]) -> Result<String, InferenceError> {
    tokens
        .iter()
        .enumerate()
        .map(|(position, &token)| {
            char::from_u32(token).ok_or(InferenceError::InvalidToken { position, token })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_tokens_are_code_points() {
        assert_eq!(tokenize("Hi!"), vec![72, 105, 33]);
    }

    #[test]
    fn arabic_tokens_are_code_points() {
        // ب = U+0628, ي = U+064A, ت = U+062A
        assert_eq!(tokenize("بيت"), vec![0x0628, 0x064A, 0x062A]);
    }

    #[test]
    fn empty_text_has_no_tokens() {
        assert!(tokenize("").is_empty());
        assert_eq!(detokenize(&[]), "");
    }

    #[test]
    fn roundtrip_printable_ascii() {
        let ascii: String = (0x20u8..0x7F).map(char::from).collect();
        assert_eq!(detokenize(&tokenize(&ascii)), ascii);
    }

    #[test]
    fn roundtrip_arabic_corpus() {
        for text in [
            "أريد متجر بسيط لبيع الملابس",
            "موقع عقارات مع خريطة وبحث",
            "شركة استشارات هندسية ١٢٣",
        ] {
            assert_eq!(detokenize(&tokenize(text)), text);
            assert_eq!(try_detokenize(&tokenize(text)).unwrap(), text);
        }
    }

    #[test]
    fn roundtrip_beyond_bmp() {
        let text = "launch 🚀 now";
        assert_eq!(detokenize(&tokenize(text)), text);
    }

    #[test]
    fn invalid_tokens_become_replacement() {
        assert_eq!(detokenize(&[72, 0xD800, 105]), "H\u{FFFD}i");
    }

    #[test]
    fn strict_decode_reports_position() {
        let err = try_detokenize(&[72, 105, 0x110000]).unwrap_err();
        assert_eq!(
            err,
            InferenceError::InvalidToken {
                position: 2,
                token: 0x110000
            }
        );
    }
}
