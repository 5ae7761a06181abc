//! Text normalization for skill matching and classifier features.
//!
//! Both variants emit only lowercase ASCII words separated by single spaces and
//! are idempotent: normalizing already-normalized text returns it unchanged.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::screening::stopwords::is_stopword;

// Requires "://" or "www." so that words such as "httpclient" survive re-normalization.
static URL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)(?:https?://|www\.)\S*").unwrap());
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+").unwrap());

/// Irregular plural → lemma. No value may appear as a key.
const IRREGULAR_LEMMAS: &[(&str, &str)] = &[
    ("analyses", "analysis"),
    ("children", "child"),
    ("criteria", "criterion"),
    ("feet", "foot"),
    ("geese", "goose"),
    ("indices", "index"),
    ("matrices", "matrix"),
    ("men", "man"),
    ("mice", "mouse"),
    ("people", "person"),
    ("phenomena", "phenomenon"),
    ("teeth", "tooth"),
    ("vertices", "vertex"),
    ("women", "woman"),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Normalizer {
    /// URL removal, letters only, lowercase, single spaces.
    #[default]
    Basic,
    /// `Basic` plus e-mail removal, stopword removal and lemmatization.
    Lemmatized,
}

impl Normalizer {
    pub fn apply(self, text: &str) -> String {
        match self {
            Normalizer::Basic => clean_text(text),
            Normalizer::Lemmatized => clean_text_lemmatized(text),
        }
    }
}

/// Removes URLs, replaces every non-letter with a space, lowercases and
/// collapses whitespace.
pub fn clean_text(text: &str) -> String {
    let without_urls = URL_RE.replace_all(text, " ");
    let mut cleaned = String::with_capacity(without_urls.len());

    for word in without_urls
        .split(|c: char| !c.is_ascii_alphabetic())
        .filter(|w| !w.is_empty())
    {
        if !cleaned.is_empty() {
            cleaned.push(' ');
        }
        cleaned.push_str(&word.to_ascii_lowercase());
    }

    cleaned
}

/// `clean_text` with e-mails stripped first, then stopwords dropped and each
/// remaining token lemmatized.
pub fn clean_text_lemmatized(text: &str) -> String {
    let without_emails = EMAIL_RE.replace_all(text, " ");
    let cleaned = clean_text(&without_emails);

    cleaned
        .split(' ')
        .filter(|t| !t.is_empty() && !is_stopword(t))
        .map(lemmatize)
        // lemmas such as "her" (from "hers") can themselves be stopwords
        .filter(|t| !is_stopword(t))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Rule-based noun lemmatizer. Every output is a fixed point of this function.
pub fn lemmatize(word: &str) -> String {
    if let Some((_, lemma)) = IRREGULAR_LEMMAS.iter().find(|(plural, _)| *plural == word) {
        return lemma.to_string();
    }
    if word.len() <= 3 || !word.ends_with('s') {
        return word.to_string();
    }
    if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
        return word.to_string();
    }

    let lemma = if word.len() > 4 && word.ends_with("ies") {
        format!("{}y", &word[..word.len() - 3])
    } else if word.ends_with("sses")
        || word.ends_with("xes")
        || word.ends_with("ches")
        || word.ends_with("shes")
        || word.ends_with("zzes")
    {
        word[..word.len() - 2].to_string()
    } else {
        word[..word.len() - 1].to_string()
    };

    if IRREGULAR_LEMMAS.iter().any(|(plural, _)| *plural == lemma) {
        return word.to_string();
    }
    lemma
}
