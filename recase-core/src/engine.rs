//! The case transformation engine
//!
//! Orchestrates tokenizer, segmenter and style rules. The engine is a pure
//! function of its inputs plus the static rule tables it holds: no shared
//! mutable state, no I/O, safe to call concurrently.

use crate::abbreviation::AbbreviationList;
use crate::error::Result;
use crate::segment::segment;
use crate::style::{CaseStyle, WordContext};
use crate::token::{tokenize, Token, TokenKind};
use serde::{Deserialize, Serialize};

/// Input to a transformation: a text and a validated style
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformRequest {
    /// The text to rewrite
    pub text: String,
    /// The case style to apply
    pub style: CaseStyle,
}

impl TransformRequest {
    /// Build a request from a text and an already-validated style
    pub fn new(text: impl Into<String>, style: CaseStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Build a request from a free-form style identifier
    ///
    /// Rejects unknown identifiers with
    /// [`CaseError::InvalidStyle`](crate::CaseError::InvalidStyle); this is
    /// the validation step between the host boundary and the engine.
    pub fn parse(text: impl Into<String>, style: &str) -> Result<Self> {
        Ok(Self {
            text: text.into(),
            style: style.parse()?,
        })
    }
}

/// Output of a successful transformation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformResult {
    /// The rewritten text; spacing and punctuation match the input exactly
    pub text: String,
}

fn is_word_like(token: &Token<'_>) -> bool {
    matches!(token.kind, TokenKind::Word | TokenKind::Preserved)
}

/// Applies case styles to text
///
/// Holds the abbreviation exception list; everything else is computed per
/// call. Transformation is idempotent: re-applying a style to its own
/// output yields the same output.
#[derive(Debug, Clone, Default)]
pub struct CaseTransformer {
    abbreviations: AbbreviationList,
}

impl CaseTransformer {
    /// Create a transformer with the default English abbreviation list
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transformer with a custom abbreviation list
    pub fn with_abbreviations(abbreviations: AbbreviationList) -> Self {
        Self { abbreviations }
    }

    /// Transform a request into a result
    pub fn transform(&self, request: &TransformRequest) -> Result<TransformResult> {
        Ok(TransformResult {
            text: self.transform_str(&request.text, request.style),
        })
    }

    /// Transform text with a free-form style identifier from the boundary
    pub fn transform_named(&self, text: &str, style: &str) -> Result<String> {
        let style: CaseStyle = style.parse()?;
        Ok(self.transform_str(text, style))
    }

    /// Apply `style` to `text`
    ///
    /// Total over any input; the empty string yields the empty string.
    pub fn transform_str(&self, text: &str, style: CaseStyle) -> String {
        let tokens = tokenize(text, &self.abbreviations);
        let sentences = segment(&tokens);
        tracing::debug!(
            style = %style,
            bytes = text.len(),
            sentences = sentences.len(),
            "applying case style"
        );

        let first_word = tokens.iter().position(is_word_like);
        let last_word = tokens.iter().rposition(is_word_like);

        let mut out = String::with_capacity(text.len());
        for sentence in &sentences {
            let mut word_index = 0;
            for (offset, token) in sentence.tokens(&tokens).iter().enumerate() {
                let idx = sentence.start + offset;
                match token.kind {
                    TokenKind::Word => {
                        let ctx = WordContext {
                            word_index,
                            is_first_in_text: Some(idx) == first_word,
                            is_last_in_text: Some(idx) == last_word,
                            follows_title_abbreviation: self
                                .follows_title_abbreviation(&tokens, idx),
                        };
                        out.push_str(&style.apply_word(token.text, &ctx));
                        word_index += 1;
                    }
                    TokenKind::Preserved => {
                        out.push_str(token.text);
                        word_index += 1;
                    }
                    _ => out.push_str(token.text),
                }
            }
        }
        out
    }

    /// Whether the word at `idx` directly follows a title abbreviation
    fn follows_title_abbreviation(&self, tokens: &[Token<'_>], idx: usize) -> bool {
        let mut i = idx;
        while i > 0 {
            i -= 1;
            match tokens[i].kind {
                TokenKind::Whitespace => continue,
                TokenKind::Punctuation if tokens[i].text == "." => {
                    return i > 0
                        && tokens[i - 1].kind == TokenKind::Word
                        && self.abbreviations.is_title_abbreviation(tokens[i - 1].text);
                }
                _ => return false,
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CaseError;

    fn transform(text: &str, style: CaseStyle) -> String {
        CaseTransformer::new().transform_str(text, style)
    }

    #[test]
    fn test_sentence_case_two_sentences() {
        assert_eq!(
            transform(
                "this is a test sentence. here is another sentence.",
                CaseStyle::Sentence
            ),
            "This is a test sentence. Here is another sentence."
        );
    }

    #[test]
    fn test_title_case_recases_all_caps_words() {
        assert_eq!(
            transform("THE quick BROWN fox", CaseStyle::Title),
            "The Quick Brown Fox"
        );
    }

    #[test]
    fn test_empty_text_yields_empty_text() {
        for style in CaseStyle::ALL {
            assert_eq!(transform("", *style), "");
        }
    }

    #[test]
    fn test_abbreviation_does_not_start_new_sentence() {
        assert_eq!(
            transform("Dr. Smith went home. he was tired.", CaseStyle::Sentence),
            "Dr. Smith went home. He was tired."
        );
    }

    #[test]
    fn test_url_survives_sentence_case() {
        assert_eq!(
            transform("visit HTTP://EXAMPLE.COM now.", CaseStyle::Sentence),
            "Visit HTTP://EXAMPLE.COM now."
        );
    }

    #[test]
    fn test_unknown_style_is_rejected() {
        let err = CaseTransformer::new()
            .transform_named("hello", "Snake Case")
            .unwrap_err();
        assert_eq!(
            err,
            CaseError::InvalidStyle {
                style: "Snake Case".to_string()
            }
        );
    }

    #[test]
    fn test_upper_and_lower_apply_uniformly() {
        assert_eq!(
            transform("Mixed CASE text.", CaseStyle::Upper),
            "MIXED CASE TEXT."
        );
        assert_eq!(
            transform("Mixed CASE text.", CaseStyle::Lower),
            "mixed case text."
        );
    }

    #[test]
    fn test_capitalize_each_word_has_no_exceptions() {
        assert_eq!(
            transform("the lord of the rings", CaseStyle::CapitalizeEachWord),
            "The Lord Of The Rings"
        );
    }

    #[test]
    fn test_pronoun_i_is_always_capitalized() {
        assert_eq!(
            transform("he said i should go.", CaseStyle::Sentence),
            "He said I should go."
        );
    }

    #[test]
    fn test_spacing_is_preserved_exactly() {
        let text = "one.   two\n\nthree.\t";
        let out = transform(text, CaseStyle::Sentence);
        let strip = |s: &str| {
            s.chars()
                .map(|c| if c.is_alphabetic() { '_' } else { c })
                .collect::<String>()
        };
        assert_eq!(strip(&out), strip(text));
    }

    #[test]
    fn test_request_response_round_trip() {
        let request = TransformRequest::parse("hello world", "UPPERCASE").unwrap();
        let result = CaseTransformer::new().transform(&request).unwrap();
        assert_eq!(result.text, "HELLO WORLD");
    }

    #[test]
    fn test_idempotence_spot_checks() {
        let transformer = CaseTransformer::new();
        let samples = [
            "this is a test sentence. here is another sentence.",
            "THE quick BROWN fox",
            "Dr. Smith went home. he was tired.",
            "visit HTTP://EXAMPLE.COM now.",
            "e.g. apples, oranges etc. and 42 pears.",
        ];
        for style in CaseStyle::ALL {
            for sample in samples {
                let once = transformer.transform_str(sample, *style);
                let twice = transformer.transform_str(&once, *style);
                assert_eq!(once, twice, "idempotence for {style} on {sample:?}");
            }
        }
    }
}
