//! Case styles and their per-word rewrite rules

use crate::error::CaseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Words the Title style leaves lowercase unless first or last in the text
///
/// Articles, short conjunctions and short prepositions; kept sorted for
/// binary search.
const SMALL_WORDS: &[&str] = &[
    "a", "an", "and", "as", "at", "but", "by", "for", "if", "in", "nor", "of", "off", "on", "or",
    "out", "per", "so", "the", "to", "up", "via", "vs", "with", "yet",
];

/// The closed set of selectable case styles
///
/// Free-form style names from a host UI are validated through [`FromStr`];
/// unknown identifiers are rejected with [`CaseError::InvalidStyle`] rather
/// than falling back to a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaseStyle {
    /// Capitalize the first word of each sentence, lowercase the rest
    #[serde(rename = "Sentence case")]
    Sentence,
    /// Capitalize every word except small words mid-text
    #[serde(rename = "Title Case")]
    Title,
    /// Uppercase every word
    #[serde(rename = "UPPERCASE")]
    Upper,
    /// Lowercase every word
    #[serde(rename = "lowercase")]
    Lower,
    /// Capitalize every word with no exception list
    #[serde(rename = "Capitalize Each Word")]
    CapitalizeEachWord,
}

impl CaseStyle {
    /// All styles, in selector order
    pub const ALL: &'static [CaseStyle] = &[
        CaseStyle::Sentence,
        CaseStyle::Title,
        CaseStyle::Upper,
        CaseStyle::Lower,
        CaseStyle::CapitalizeEachWord,
    ];

    /// The canonical selector label for this style
    pub fn label(self) -> &'static str {
        match self {
            CaseStyle::Sentence => "Sentence case",
            CaseStyle::Title => "Title Case",
            CaseStyle::Upper => "UPPERCASE",
            CaseStyle::Lower => "lowercase",
            CaseStyle::CapitalizeEachWord => "Capitalize Each Word",
        }
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CaseStyle {
    type Err = CaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(|c| c.to_lowercase())
            .collect();
        match key.as_str() {
            "sentence" | "sentencecase" => Ok(CaseStyle::Sentence),
            "title" | "titlecase" => Ok(CaseStyle::Title),
            "upper" | "uppercase" => Ok(CaseStyle::Upper),
            "lower" | "lowercase" => Ok(CaseStyle::Lower),
            "capitalizeeachword" => Ok(CaseStyle::CapitalizeEachWord),
            _ => Err(CaseError::InvalidStyle {
                style: s.to_string(),
            }),
        }
    }
}

/// Position of a word while a style is being applied
#[derive(Debug, Clone, Copy)]
pub(crate) struct WordContext {
    /// Word position within the containing sentence (words and preserved
    /// tokens both occupy positions)
    pub word_index: usize,
    /// Whether this is the first word token of the whole text
    pub is_first_in_text: bool,
    /// Whether this is the last word token of the whole text
    pub is_last_in_text: bool,
    /// Whether the previous word was a title abbreviation ("Dr. Smith")
    pub follows_title_abbreviation: bool,
}

/// At least two letters and none of them lowercase
fn is_all_caps(word: &str) -> bool {
    let mut letters = 0;
    for c in word.chars().filter(|c| c.is_alphabetic()) {
        if !c.is_uppercase() {
            return false;
        }
        letters += 1;
    }
    letters >= 2
}

// Case mappings that expand a character (U+00DF to "SS", U+0130 to "i" plus
// a combining dot) are skipped: the expansion would re-tokenize differently
// and break idempotence under repeated application.

fn push_upper(c: char, out: &mut String) {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => out.push(u),
        _ => out.push(c),
    }
}

fn push_lower(c: char, out: &mut String) {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => out.push(l),
        _ => out.push(c),
    }
}

fn upper_word(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    for c in word.chars() {
        push_upper(c, &mut out);
    }
    out
}

fn lower_word(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    for c in word.chars() {
        push_lower(c, &mut out);
    }
    out
}

/// Uppercase the first character, lowercase everything after it
fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    let mut out = String::with_capacity(word.len());
    if let Some(first) = chars.next() {
        push_upper(first, &mut out);
        for c in chars {
            push_lower(c, &mut out);
        }
    }
    out
}

/// Capitalize each hyphen-separated segment ("well-known" -> "Well-Known")
fn capitalize_segments(word: &str) -> String {
    word.split('-')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join("-")
}

impl CaseStyle {
    /// Rewrite one word token according to this style
    ///
    /// Only word tokens pass through here; whitespace, punctuation,
    /// terminators and preserved tokens are copied verbatim by the engine.
    pub(crate) fn apply_word(self, word: &str, ctx: &WordContext) -> String {
        match self {
            CaseStyle::Upper => upper_word(word),
            CaseStyle::Lower => lower_word(word),
            CaseStyle::CapitalizeEachWord => capitalize_segments(word),
            CaseStyle::Title => {
                if ctx.is_first_in_text || ctx.is_last_in_text {
                    capitalize_segments(word)
                } else if SMALL_WORDS
                    .binary_search(&word.to_lowercase().as_str())
                    .is_ok()
                {
                    lower_word(word)
                } else {
                    capitalize_segments(word)
                }
            }
            CaseStyle::Sentence => {
                if is_all_caps(word) || ctx.follows_title_abbreviation {
                    word.to_string()
                } else if ctx.word_index == 0 {
                    capitalize_first(word)
                } else if word.eq_ignore_ascii_case("i") {
                    "I".to_string()
                } else {
                    lower_word(word)
                }
            }
        }
    }
}
