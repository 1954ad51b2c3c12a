//! Abbreviation exception handling for sentence boundary suppression
//!
//! A period directly after a known abbreviation does not terminate a
//! sentence. Title abbreviations ("Dr.", "Mr.", ...) additionally protect
//! the case of the word that follows them, since they form two-segment
//! identifiers like "Dr. Smith".

use std::collections::HashSet;

/// Title abbreviations that precede proper nouns
const TITLE_ABBREVIATIONS: &[&str] = &[
    "dr.", "mr.", "mrs.", "ms.", "prof.", "rev.", "sr.", "jr.", "st.",
];

/// Abbreviations whose trailing period never ends a sentence
const GENERAL_ABBREVIATIONS: &[&str] = &[
    "e.g.", "i.e.", "etc.", "vs.", "cf.", "al.", "approx.",
    "u.s.", "u.s.a.", "u.k.", "d.c.",
    "a.m.", "p.m.",
    "ft.", "in.", "lbs.", "oz.", "mi.", "km.", "no.",
    "inc.", "ltd.", "co.", "corp.", "dept.", "est.",
];

/// Lookup table for abbreviation exceptions
///
/// Matching is case-insensitive so that text already passed through the
/// Lower or Upper styles keeps the same sentence structure on re-application.
#[derive(Debug, Clone)]
pub struct AbbreviationList {
    all: HashSet<String>,
    titles: HashSet<String>,
}

impl AbbreviationList {
    /// Create the default English abbreviation list
    pub fn new() -> Self {
        let titles: HashSet<String> = TITLE_ABBREVIATIONS.iter().map(|s| s.to_string()).collect();
        let mut all: HashSet<String> =
            GENERAL_ABBREVIATIONS.iter().map(|s| s.to_string()).collect();
        all.extend(titles.iter().cloned());
        Self { all, titles }
    }

    /// Create a list from custom entries (each including its trailing period)
    pub fn with_abbreviations<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let all = entries
            .into_iter()
            .map(|s| s.as_ref().to_lowercase())
            .collect();
        Self {
            all,
            titles: TITLE_ABBREVIATIONS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Check whether `word` followed by a period forms a known abbreviation
    ///
    /// `word` is the token text without the trailing period, e.g. "Dr" or
    /// "e.g" (the tokenizer keeps internal periods inside the word run).
    pub fn is_abbreviation(&self, word: &str) -> bool {
        let mut key = word.to_lowercase();
        key.push('.');
        self.all.contains(&key)
    }

    /// Check whether `word` followed by a period is a title abbreviation
    pub fn is_title_abbreviation(&self, word: &str) -> bool {
        let mut key = word.to_lowercase();
        key.push('.');
        self.titles.contains(&key)
    }
}

impl Default for AbbreviationList {
    fn default() -> Self {
        Self::new()
    }
}
