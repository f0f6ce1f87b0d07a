//! Per-request suggestion list
//!
//! Holds the ranked candidates returned by a backend with the original word
//! appended last. `/transliterate` only ever exposes element 0.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestions {
    word: String,
    items: Vec<String>,
}

impl Suggestions {
    /// Build `[candidates..., word]` from a backend result
    pub fn new(word: impl Into<String>, candidates: Vec<String>) -> Self {
        let word = word.into();
        let mut items = candidates;
        items.push(word.clone());
        Self { word, items }
    }

    /// Build the two-element list `[top candidate, word]`
    pub fn top_with_original(word: impl Into<String>, candidates: Vec<String>) -> Self {
        Self::new(word, candidates.into_iter().take(1).collect())
    }

    /// Element 0: the top candidate, or the original word if the backend
    /// returned nothing
    pub fn top(&self) -> &str {
        self.items.first().map(String::as_str).unwrap_or(&self.word)
    }

    pub fn original(&self) -> &str {
        &self.word
    }

    /// Candidates only, without the trailing original word
    pub fn candidates(&self) -> &[String] {
        &self.items[..self.items.len() - 1]
    }

    /// All items including the trailing original word
    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    /// Up to `limit` candidates, minus any equal to the original word, then
    /// the original word last
    pub fn display_list(&self, limit: usize) -> Vec<String> {
        let mut list: Vec<String> = self
            .candidates()
            .iter()
            .take(limit)
            .filter(|c| **c != self.word)
            .cloned()
            .collect();
        list.push(self.word.clone());
        list
    }
}
