//! TF-IDF vectorizer over unigrams and bigrams.
//!
//! - tokens: runs of ASCII alphanumerics of length ≥ 2, lowercased, English
//!   stopwords removed (n-grams are formed after removal)
//! - vocabulary: the `max_features` most frequent n-grams across the corpus,
//!   ties broken alphabetically; indices assigned in alphabetical order
//! - idf: smoothed, `ln((1 + n) / (1 + df)) + 1`
//! - rows: raw counts × idf, L2-normalized

use std::collections::{BTreeMap, HashMap, HashSet};

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::screening::normalize::Normalizer;
use crate::screening::stopwords::is_stopword;

/// Sparse row: `(feature index, value)` sorted by index.
pub type SparseVector = Vec<(usize, f64)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VectorizerConfig {
    pub max_features: usize,
    pub ngram_min: usize,
    pub ngram_max: usize,
    /// Cleaning applied to raw text before tokenization.
    pub normalizer: Normalizer,
}

impl Default for VectorizerConfig {
    fn default() -> Self {
        VectorizerConfig {
            max_features: 5000,
            ngram_min: 1,
            ngram_max: 2,
            normalizer: Normalizer::Basic,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    pub config: VectorizerConfig,
    pub vocabulary: BTreeMap<String, usize>,
    pub idf: Vec<f64>,
}

impl TfidfVectorizer {
    /// Fits vocabulary and idf on already-cleaned documents.
    pub fn fit(documents: &[String], config: VectorizerConfig) -> Result<Self> {
        if config.ngram_min == 0 || config.ngram_min > config.ngram_max {
            bail!(
                "invalid n-gram range ({}, {})",
                config.ngram_min,
                config.ngram_max
            );
        }

        let mut corpus_counts: HashMap<String, usize> = HashMap::new();
        let mut doc_freq: HashMap<String, usize> = HashMap::new();

        for doc in documents {
            let terms = ngrams(&tokenize(doc), config.ngram_min, config.ngram_max);
            let unique: HashSet<&String> = terms.iter().collect();
            for term in unique {
                *doc_freq.entry(term.clone()).or_insert(0) += 1;
            }
            for term in terms {
                *corpus_counts.entry(term).or_insert(0) += 1;
            }
        }

        if corpus_counts.is_empty() {
            bail!("empty vocabulary: documents contain only stopwords or no tokens");
        }

        let mut ranked: Vec<(String, usize)> = corpus_counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(config.max_features);

        let mut kept: Vec<String> = ranked.into_iter().map(|(term, _)| term).collect();
        kept.sort();

        let n_docs = documents.len() as f64;
        let idf = kept
            .iter()
            .map(|term| {
                let df = doc_freq.get(term).copied().unwrap_or(0) as f64;
                ((1.0 + n_docs) / (1.0 + df)).ln() + 1.0
            })
            .collect();
        let vocabulary = kept
            .into_iter()
            .enumerate()
            .map(|(idx, term)| (term, idx))
            .collect();

        Ok(TfidfVectorizer {
            config,
            vocabulary,
            idf,
        })
    }

    pub fn n_features(&self) -> usize {
        self.idf.len()
    }

    /// Vectorizes an already-cleaned document.
    pub fn transform(&self, document: &str) -> SparseVector {
        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for term in ngrams(&tokenize(document), self.config.ngram_min, self.config.ngram_max) {
            if let Some(&idx) = self.vocabulary.get(&term) {
                *counts.entry(idx).or_insert(0.0) += 1.0;
            }
        }

        let mut row: SparseVector = counts
            .into_iter()
            .map(|(idx, tf)| (idx, tf * self.idf[idx]))
            .collect();

        let norm = row.iter().map(|(_, v)| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, v) in &mut row {
                *v /= norm;
            }
        }
        row
    }

    /// Cleans raw text with the configured normalizer, then vectorizes it.
    pub fn transform_raw(&self, raw_text: &str) -> SparseVector {
        self.transform(&self.config.normalizer.apply(raw_text))
    }
}

fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|t| t.len() >= 2)
        .map(|t| t.to_ascii_lowercase())
        .filter(|t| !is_stopword(t))
        .collect()
}

fn ngrams(tokens: &[String], min_n: usize, max_n: usize) -> Vec<String> {
    let mut out = Vec::new();
    for n in min_n..=max_n {
        if n == 0 || tokens.len() < n {
            continue;
        }
        out.extend(tokens.windows(n).map(|w| w.join(" ")));
    }
    out
}
