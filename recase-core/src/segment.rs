//! Sentence segmentation over the token stream
//!
//! Sentences partition the token sequence with no gaps: every token belongs
//! to exactly one sentence. A sentence ends at its terminator token plus any
//! whitespace that follows it, so reassembling sentences in order restores
//! the original text.

use crate::token::{Token, TokenKind};

/// Half-open range of token indices forming one sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentence {
    /// Index of the first token in the sentence
    pub start: usize,
    /// Index one past the last token in the sentence
    pub end: usize,
}

impl Sentence {
    /// Borrow the tokens belonging to this sentence
    pub fn tokens<'t, 'a>(&self, tokens: &'t [Token<'a>]) -> &'t [Token<'a>] {
        &tokens[self.start..self.end]
    }
}

fn has_case_bearing_token(tokens: &[Token<'_>], start: usize, end: usize) -> bool {
    tokens[start..end]
        .iter()
        .any(|t| matches!(t.kind, TokenKind::Word | TokenKind::Preserved))
}

/// Group tokens into sentences
///
/// Total over any token sequence: text without a terminator becomes a single
/// sentence, and spans holding only punctuation or whitespace are merged
/// into a neighboring sentence so no degenerate sentence is emitted.
pub fn segment(tokens: &[Token<'_>]) -> Vec<Sentence> {
    if tokens.is_empty() {
        return Vec::new();
    }

    let mut sentences = Vec::new();
    let mut start = 0;
    let mut idx = 0;
    while idx < tokens.len() {
        if tokens[idx].kind == TokenKind::Terminator {
            let mut end = idx + 1;
            while end < tokens.len() && tokens[end].kind == TokenKind::Whitespace {
                end += 1;
            }
            sentences.push(Sentence { start, end });
            start = end;
            idx = end;
        } else {
            idx += 1;
        }
    }
    if start < tokens.len() {
        sentences.push(Sentence {
            start,
            end: tokens.len(),
        });
    }

    // Merge spans with no words into a neighbor, preferring the following
    // sentence so a stray leading terminator joins the text after it.
    let mut merged: Vec<Sentence> = Vec::with_capacity(sentences.len());
    let mut pending: Option<Sentence> = None;
    for sentence in sentences {
        let mut sentence = sentence;
        if let Some(empty) = pending.take() {
            sentence.start = empty.start;
        }
        if has_case_bearing_token(tokens, sentence.start, sentence.end) {
            merged.push(sentence);
        } else {
            pending = Some(sentence);
        }
    }
    if let Some(empty) = pending {
        match merged.last_mut() {
            Some(last) => last.end = empty.end,
            None => merged.push(empty),
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abbreviation::AbbreviationList;
    use crate::token::tokenize;

    fn sentence_texts(text: &str) -> Vec<String> {
        let tokens = tokenize(text, &AbbreviationList::new());
        segment(&tokens)
            .iter()
            .map(|s| s.tokens(&tokens).iter().map(|t| t.text).collect())
            .collect()
    }

    #[test]
    fn test_two_simple_sentences() {
        let sentences = sentence_texts("First one. Second one.");
        assert_eq!(sentences, vec!["First one. ", "Second one."]);
    }

    #[test]
    fn test_no_terminator_is_single_sentence() {
        let sentences = sentence_texts("no terminator here");
        assert_eq!(sentences, vec!["no terminator here"]);
    }

    #[test]
    fn test_abbreviation_does_not_split() {
        let sentences = sentence_texts("Dr. Smith went home. he was tired.");
        assert_eq!(sentences, vec!["Dr. Smith went home. ", "he was tired."]);
    }

    #[test]
    fn test_trailing_whitespace_attaches_to_preceding_sentence() {
        let sentences = sentence_texts("One.   Two.");
        assert_eq!(sentences, vec!["One.   ", "Two."]);
    }

    #[test]
    fn test_leading_terminator_merges_forward() {
        let sentences = sentence_texts(". hello there");
        assert_eq!(sentences, vec![". hello there"]);
    }

    #[test]
    fn test_trailing_terminator_does_not_emit_empty_sentence() {
        let sentences = sentence_texts("Done. !!");
        assert_eq!(sentences, vec!["Done. !!"]);
    }

    #[test]
    fn test_exclamation_and_question_marks_split() {
        let sentences = sentence_texts("Really? Yes! Good.");
        assert_eq!(sentences, vec!["Really? ", "Yes! ", "Good."]);
    }

    #[test]
    fn test_empty_input() {
        assert!(sentence_texts("").is_empty());
    }

    #[test]
    fn test_sentences_partition_token_stream() {
        let text = "Alpha. Beta! Gamma? Delta";
        let tokens = tokenize(text, &AbbreviationList::new());
        let sentences = segment(&tokens);
        let mut next = 0;
        for sentence in &sentences {
            assert_eq!(sentence.start, next);
            next = sentence.end;
        }
        assert_eq!(next, tokens.len());
    }
}
