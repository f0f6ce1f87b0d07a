//! Script detection
//!
//! Classifies text as Roman (Latin), Devanagari, mixed, or neither. Used by the
//! rule engine to validate input and by tests to check output.

use serde::{Deserialize, Serialize};

/// Devanagari Unicode block
pub const DEVANAGARI_RANGE: std::ops::RangeInclusive<char> = '\u{0900}'..='\u{097F}';

/// Writing script of a piece of text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    /// Only ASCII letters (plus neutral characters)
    Latin,
    /// Only Devanagari letters (plus neutral characters)
    Devanagari,
    /// Both Latin and Devanagari letters
    Mixed,
    /// No letters at all (empty, digits, punctuation)
    Neutral,
    /// Letters from some other script
    Other,
}

/// Stateless script classifier
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptDetector;

impl ScriptDetector {
    pub fn new() -> Self {
        Self
    }

    pub fn is_devanagari_char(c: char) -> bool {
        DEVANAGARI_RANGE.contains(&c)
    }

    /// Characters that carry no script information
    pub fn is_neutral_char(c: char) -> bool {
        c.is_ascii_digit() || c.is_ascii_punctuation() || c.is_whitespace()
    }

    pub fn detect(&self, text: &str) -> Script {
        let mut latin = false;
        let mut devanagari = false;

        for c in text.chars() {
            if c.is_ascii_alphabetic() {
                latin = true;
            } else if Self::is_devanagari_char(c) {
                devanagari = true;
            } else if !Self::is_neutral_char(c) {
                return Script::Other;
            }
        }

        match (latin, devanagari) {
            (true, true) => Script::Mixed,
            (true, false) => Script::Latin,
            (false, true) => Script::Devanagari,
            (false, false) => Script::Neutral,
        }
    }

    pub fn is_devanagari(&self, text: &str) -> bool {
        self.detect(text) == Script::Devanagari
    }
}
