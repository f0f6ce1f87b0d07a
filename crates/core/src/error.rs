//! Error types shared by all transliteration backends

use thiserror::Error;

/// Transliteration errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The word contains characters the backend cannot handle
    #[error("Unsupported input '{word}': {reason}")]
    UnsupportedInput { word: String, reason: String },

    /// The word exceeds the configured maximum length
    #[error("Input too long: {len} characters (maximum {max})")]
    InputTooLong { len: usize, max: usize },

    /// Remote backend failure (transport, status, decoding, timeout)
    #[error("Backend error: {0}")]
    Backend(String),

    /// Lexicon could not be read or parsed
    #[error("Lexicon error: {0}")]
    Lexicon(String),
}

impl Error {
    pub fn unsupported(word: &str, reason: impl Into<String>) -> Self {
        Error::UnsupportedInput {
            word: word.to_string(),
            reason: reason.into(),
        }
    }

    /// Short label used for metrics and structured logs
    pub fn kind(&self) -> &'static str {
        match self {
            Error::UnsupportedInput { .. } => "unsupported_input",
            Error::InputTooLong { .. } => "input_too_long",
            Error::Backend(_) => "backend",
            Error::Lexicon(_) => "lexicon",
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::unsupported("hi😀", "character '😀' is not Roman or Devanagari");
        assert_eq!(
            err.to_string(),
            "Unsupported input 'hi😀': character '😀' is not Roman or Devanagari"
        );

        let err = Error::InputTooLong { len: 80, max: 64 };
        assert_eq!(err.to_string(), "Input too long: 80 characters (maximum 64)");
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(Error::Backend("timeout".into()).kind(), "backend");
        assert_eq!(Error::InputTooLong { len: 2, max: 1 }.kind(), "input_too_long");
    }
}
