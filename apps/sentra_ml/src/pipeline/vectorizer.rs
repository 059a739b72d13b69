use std::collections::HashMap;

use serde::Deserialize;

/// Bag-of-words stage. `vocabulary` maps a token to its feature column.
#[derive(Debug, Deserialize)]
pub struct CountVectorizer {
    pub vocabulary: HashMap<String, usize>,
}

impl CountVectorizer {
    /// Lowercases the input and counts occurrences of known tokens,
    /// returning sparse `(column, count)` pairs sorted by column.
    /// Tokens outside the vocabulary are dropped.
    pub fn transform(&self, text: &str) -> Vec<(usize, f64)> {
        let lowered = text.to_lowercase();
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for token in tokenize(&lowered) {
            if let Some(&col) = self.vocabulary.get(token) {
                *counts.entry(col).or_insert(0.0) += 1.0;
            }
        }
        let mut out: Vec<(usize, f64)> = counts.into_iter().collect();
        out.sort_unstable_by_key(|&(col, _)| col);
        out
    }
}

/// Tokens are maximal runs of two or more word characters, matching the
/// training side's tokenizer. Single-character runs are discarded.
fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_alphanumeric() && c != '_')
        .filter(|tok| tok.chars().count() >= 2)
}
