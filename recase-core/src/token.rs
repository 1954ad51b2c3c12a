//! Lossless tokenization of raw text into typed spans
//!
//! The tokenizer covers the entire input with no gaps and no overlaps: the
//! concatenation of all token texts reproduces the source byte-for-byte.
//! This is what lets the engine rewrite letter casing without disturbing
//! spacing or punctuation.

use crate::abbreviation::AbbreviationList;

/// Classification of a single span of source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Run of letters/digits, optionally with internal `'`, `-` or `.`
    Word,
    /// Run of whitespace, preserved verbatim
    Whitespace,
    /// Sentence-ending punctuation, with any trailing closing marks
    Terminator,
    /// Any other symbol, including periods demoted by the abbreviation list
    Punctuation,
    /// URL, standalone numeral or dotted acronym; exempt from case mutation
    Preserved,
}

/// One span of the source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    /// Span classification
    pub kind: TokenKind,
    /// The exact source slice
    pub text: &'a str,
    /// Byte offset of the span start
    pub start: usize,
    /// Byte offset one past the span end
    pub end: usize,
}

impl<'a> Token<'a> {
    fn new(kind: TokenKind, text: &'a str, start: usize, end: usize) -> Self {
        Self {
            kind,
            text,
            start,
            end,
        }
    }
}

fn is_terminator_char(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

fn is_closing_mark(c: char) -> bool {
    matches!(c, '"' | '\'' | '\u{201D}' | '\u{2019}' | ')' | ']')
}

fn char_at(text: &str, pos: usize) -> Option<char> {
    text[pos..].chars().next()
}

/// URL-shaped run: scheme separator with material on both sides
fn is_url(run: &str) -> bool {
    match run.find("://") {
        Some(idx) => idx > 0 && idx + 3 < run.len(),
        None => false,
    }
}

/// Standalone numeral, allowing internal grouping/decimal marks
fn is_numeral(run: &str) -> bool {
    run.chars().any(|c| c.is_ascii_digit())
        && run.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',')
}

/// Dotted acronym like "U.S" or "U.S.A" (trailing period is a separate token)
fn is_dotted_acronym(run: &str) -> bool {
    run.contains('.')
        && run.chars().filter(|c| c.is_alphabetic()).count() >= 2
        && run.chars().filter(|c| c.is_alphabetic()).all(|c| c.is_uppercase())
}

/// Split `text` into an ordered, gap-free sequence of tokens
///
/// Total over any input; the empty string yields an empty sequence. The
/// abbreviation list decides whether a period after a word ends a sentence
/// or belongs to the word as ordinary punctuation.
pub fn tokenize<'a>(text: &'a str, abbreviations: &AbbreviationList) -> Vec<Token<'a>> {
    let mut tokens: Vec<Token<'a>> = Vec::new();
    let mut pos = 0;

    while let Some(c) = char_at(text, pos) {
        let start = pos;

        if c.is_whitespace() {
            let mut end = pos + c.len_utf8();
            while let Some(ch) = char_at(text, end) {
                if !ch.is_whitespace() {
                    break;
                }
                end += ch.len_utf8();
            }
            tokens.push(Token::new(
                TokenKind::Whitespace,
                &text[start..end],
                start,
                end,
            ));
            pos = end;
            continue;
        }

        // URLs are recognized across word/punctuation boundaries, so the
        // check runs once per non-whitespace run.
        let at_run_start = tokens
            .last()
            .map(|t| t.kind == TokenKind::Whitespace)
            .unwrap_or(true);
        if at_run_start {
            let mut run_end = pos;
            while let Some(ch) = char_at(text, run_end) {
                if ch.is_whitespace() {
                    break;
                }
                run_end += ch.len_utf8();
            }
            let run = &text[start..run_end];
            if is_url(run) {
                tokens.push(Token::new(TokenKind::Preserved, run, start, run_end));
                pos = run_end;
                continue;
            }
        }

        if c.is_alphanumeric() {
            let mut end = pos + c.len_utf8();
            while let Some(ch) = char_at(text, end) {
                if ch.is_alphanumeric() {
                    end += ch.len_utf8();
                    continue;
                }
                let internal = match ch {
                    '\'' | '-' | '.' => char_at(text, end + ch.len_utf8())
                        .map(|next| next.is_alphanumeric())
                        .unwrap_or(false),
                    ',' => {
                        let prev_is_digit = text[..end]
                            .chars()
                            .next_back()
                            .map(|p| p.is_ascii_digit())
                            .unwrap_or(false);
                        let next_is_digit = char_at(text, end + ch.len_utf8())
                            .map(|next| next.is_ascii_digit())
                            .unwrap_or(false);
                        prev_is_digit && next_is_digit
                    }
                    _ => false,
                };
                if !internal {
                    break;
                }
                end += ch.len_utf8();
            }
            let run = &text[start..end];
            let kind = if is_numeral(run) || is_dotted_acronym(run) {
                TokenKind::Preserved
            } else {
                TokenKind::Word
            };
            tokens.push(Token::new(kind, run, start, end));
            pos = end;
            continue;
        }

        if is_terminator_char(c) {
            let mut end = pos + c.len_utf8();
            while let Some(ch) = char_at(text, end) {
                if !is_terminator_char(ch) {
                    break;
                }
                end += ch.len_utf8();
            }

            // A lone period after a known abbreviation is not a boundary.
            let after_abbreviation = &text[start..end] == "."
                && tokens
                    .last()
                    .filter(|t| matches!(t.kind, TokenKind::Word | TokenKind::Preserved))
                    .map(|t| abbreviations.is_abbreviation(t.text))
                    .unwrap_or(false);
            if after_abbreviation {
                tokens.push(Token::new(
                    TokenKind::Punctuation,
                    &text[start..end],
                    start,
                    end,
                ));
                pos = end;
                continue;
            }

            while let Some(ch) = char_at(text, end) {
                if !is_closing_mark(ch) {
                    break;
                }
                end += ch.len_utf8();
            }
            tokens.push(Token::new(
                TokenKind::Terminator,
                &text[start..end],
                start,
                end,
            ));
            pos = end;
            continue;
        }

        // Anything else: a run of symbols up to the next recognized class
        let mut end = pos + c.len_utf8();
        while let Some(ch) = char_at(text, end) {
            if ch.is_whitespace() || ch.is_alphanumeric() || is_terminator_char(ch) {
                break;
            }
            end += ch.len_utf8();
        }
        tokens.push(Token::new(
            TokenKind::Punctuation,
            &text[start..end],
            start,
            end,
        ));
        pos = end;
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize_default(text: &str) -> Vec<Token<'_>> {
        tokenize(text, &AbbreviationList::new())
    }

    fn reassemble(tokens: &[Token<'_>]) -> String {
        tokens.iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_empty_input_yields_no_tokens() {
        assert!(tokenize_default("").is_empty());
    }

    #[test]
    fn test_concatenation_is_lossless() {
        let samples = [
            "Hello world.",
            "  leading and   trailing  ",
            "Mixed: punctuation, (parens) and \"quotes\"!",
            "line one\nline two\r\n\ttabbed",
            "Dr. Smith went home. he was tired.",
            "visit HTTP://EXAMPLE.COM now.",
        ];
        for sample in samples {
            let tokens = tokenize_default(sample);
            assert_eq!(reassemble(&tokens), sample, "lossless for {sample:?}");
        }
    }

    #[test]
    fn test_offsets_cover_input_without_gaps() {
        let text = "One two. Three!";
        let tokens = tokenize_default(text);
        let mut expected_start = 0;
        for token in &tokens {
            assert_eq!(token.start, expected_start);
            assert_eq!(&text[token.start..token.end], token.text);
            expected_start = token.end;
        }
        assert_eq!(expected_start, text.len());
    }

    #[test]
    fn test_word_with_apostrophe_and_hyphen() {
        let tokens = tokenize_default("don't under-estimate");
        let words: Vec<_> = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Word)
            .map(|t| t.text)
            .collect();
        assert_eq!(words, vec!["don't", "under-estimate"]);
    }

    #[test]
    fn test_abbreviation_period_is_punctuation() {
        let tokens = tokenize_default("Dr. Smith");
        assert_eq!(tokens[0].kind, TokenKind::Word);
        assert_eq!(tokens[0].text, "Dr");
        assert_eq!(tokens[1].kind, TokenKind::Punctuation);
        assert_eq!(tokens[1].text, ".");
    }

    #[test]
    fn test_ordinary_period_is_terminator() {
        let tokens = tokenize_default("He went home. She stayed.");
        let terminators: Vec<_> = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Terminator)
            .collect();
        assert_eq!(terminators.len(), 2);
    }

    #[test]
    fn test_terminator_absorbs_closing_quote() {
        let tokens = tokenize_default("\"Stop!\" he said.");
        let terminator = tokens
            .iter()
            .find(|t| t.kind == TokenKind::Terminator)
            .unwrap();
        assert_eq!(terminator.text, "!\"");
    }

    #[test]
    fn test_multi_dot_abbreviation_stays_one_word() {
        let tokens = tokenize_default("e.g. apples");
        assert_eq!(tokens[0].text, "e.g");
        assert_eq!(tokens[1].kind, TokenKind::Punctuation);
    }

    #[test]
    fn test_url_is_preserved() {
        let tokens = tokenize_default("visit HTTP://EXAMPLE.COM now.");
        let preserved = tokens
            .iter()
            .find(|t| t.kind == TokenKind::Preserved)
            .unwrap();
        assert_eq!(preserved.text, "HTTP://EXAMPLE.COM");
    }

    #[test]
    fn test_numeral_is_preserved() {
        let tokens = tokenize_default("chapter 42 covers 3.14 and 1,000");
        let preserved: Vec<_> = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Preserved)
            .map(|t| t.text)
            .collect();
        assert_eq!(preserved, vec!["42", "3.14", "1,000"]);
    }

    #[test]
    fn test_dotted_acronym_is_preserved() {
        let tokens = tokenize_default("the U.S. economy");
        let preserved = tokens
            .iter()
            .find(|t| t.kind == TokenKind::Preserved)
            .unwrap();
        assert_eq!(preserved.text, "U.S");
    }

    #[test]
    fn test_bare_all_caps_word_is_a_word() {
        // Bare acronyms stay Word tokens; per-style rules decide whether to
        // leave them alone (sentence case does, title case does not).
        let tokens = tokenize_default("THE quick BROWN fox");
        assert!(tokens
            .iter()
            .filter(|t| !matches!(t.kind, TokenKind::Whitespace))
            .all(|t| t.kind == TokenKind::Word));
    }

    #[test]
    fn test_ellipsis_is_single_terminator() {
        let tokens = tokenize_default("Well... maybe.");
        let first_terminator = tokens
            .iter()
            .find(|t| t.kind == TokenKind::Terminator)
            .unwrap();
        assert_eq!(first_terminator.text, "...");
    }

    #[test]
    fn test_pure_punctuation_input() {
        let tokens = tokenize_default("#$% @@");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].kind, TokenKind::Punctuation);
        assert_eq!(tokens[2].kind, TokenKind::Punctuation);
    }
}
