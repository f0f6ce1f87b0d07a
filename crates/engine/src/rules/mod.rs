//! Native rule-based transliteration
//!
//! Generates ranked Devanagari candidates for a Hinglish word without a
//! trained model:
//! 1. Lexicon lookup for common words with a fixed spelling
//! 2. Longest-match segmentation into Roman units
//! 3. Beam search over the weighted alternatives of each unit
//!
//! Orthography is applied while expanding hypotheses: consonant + consonant
//! gets a virama, a vowel after a consonant becomes a matra, and a final
//! consonant keeps its inherent vowel.

mod units;

pub use units::{segment, Unit, UnitKind, VIRAMA};

use async_trait::async_trait;
use std::cmp::Ordering;
use unicode_segmentation::UnicodeSegmentation;

use hindi_xlit_config::constants::engine;
use hindi_xlit_core::{Error, Result, Transliterator};

use crate::lexicon::Lexicon;
use units::{alternatives, takes_anusvara, PieceKind, UnitContext};

/// Rule engine configuration
#[derive(Debug, Clone)]
pub struct RuleConfig {
    /// Candidates returned when the caller does not ask for a count
    pub default_candidates: usize,
    /// Hypotheses kept per unit
    pub beam_width: usize,
    /// Longest accepted word (grapheme clusters)
    pub max_word_length: usize,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            default_candidates: engine::MAX_CANDIDATES,
            beam_width: engine::BEAM_WIDTH,
            max_word_length: engine::MAX_WORD_LENGTH,
        }
    }
}

#[derive(Debug, Clone)]
struct Hypothesis {
    text: String,
    /// Sum of log weights
    score: f32,
    /// Output ends in a consonant that still carries its inherent vowel
    open_consonant: bool,
}

impl Hypothesis {
    fn empty() -> Self {
        Self {
            text: String::new(),
            score: 0.0,
            open_consonant: false,
        }
    }
}

/// Rule-based Hinglish to Devanagari transliterator
pub struct RuleTransliterator {
    config: RuleConfig,
    lexicon: Lexicon,
}

impl RuleTransliterator {
    pub fn new(config: RuleConfig, lexicon: Lexicon) -> Self {
        Self { config, lexicon }
    }

    /// Default configuration with the built-in lexicon
    pub fn with_builtin_lexicon() -> Self {
        Self::new(RuleConfig::default(), Lexicon::builtin())
    }

    /// Default configuration without any lexicon (pure rules)
    pub fn rules_only() -> Self {
        Self::new(RuleConfig::default(), Lexicon::empty())
    }

    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    /// Synchronous core of `transliterate`
    pub fn candidates(&self, word: &str, max_candidates: Option<usize>) -> Result<Vec<String>> {
        let limit = max_candidates
            .unwrap_or(self.config.default_candidates)
            .max(1);

        let normalized = word.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            return Ok(vec![String::new()]);
        }

        let len = normalized.graphemes(true).count();
        if len > self.config.max_word_length {
            return Err(Error::InputTooLong {
                len,
                max: self.config.max_word_length,
            });
        }

        let mut ranked: Vec<String> = self
            .lexicon
            .lookup(&normalized)
            .map(|entries| entries.to_vec())
            .unwrap_or_default();

        let units = segment(&normalized)?;
        let beam = self.search(&units, self.config.beam_width.max(limit));

        for hyp in beam {
            if !ranked.contains(&hyp.text) {
                ranked.push(hyp.text);
            }
        }
        ranked.truncate(limit);

        tracing::trace!(word = %normalized, candidates = ?ranked, "Rule transliteration");
        Ok(ranked)
    }

    fn search(&self, units: &[Unit], width: usize) -> Vec<Hypothesis> {
        let mut beam = vec![Hypothesis::empty()];

        for (index, unit) in units.iter().enumerate() {
            let rest = &units[index + 1..];
            let is_final = rest.first().map_or(true, |u| u.kind == UnitKind::Literal);
            let next_takes_anusvara = rest.first().map_or(false, takes_anusvara);
            let prev_is_vowel = index
                .checked_sub(1)
                .map_or(false, |i| units[i].kind == UnitKind::Vowel);

            let mut next = Vec::with_capacity(beam.len() * 3);
            for hyp in &beam {
                let ctx = UnitContext {
                    is_final,
                    prev_is_vowel,
                    next_takes_anusvara,
                    after_consonant: hyp.open_consonant,
                };
                for piece in alternatives(unit, ctx) {
                    let mut text = hyp.text.clone();
                    let open_consonant = match piece.kind {
                        PieceKind::Consonant => {
                            if hyp.open_consonant {
                                text.push(VIRAMA);
                            }
                            true
                        }
                        PieceKind::Vowel | PieceKind::Sign | PieceKind::Literal => false,
                    };
                    text.push_str(&piece.text);
                    next.push(Hypothesis {
                        text,
                        score: hyp.score + piece.weight.ln(),
                        open_consonant,
                    });
                }
            }

            // Stable: equal scores keep generation order
            next.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
            next.truncate(width);
            beam = next;
        }

        beam
    }
}

impl Default for RuleTransliterator {
    fn default() -> Self {
        Self::with_builtin_lexicon()
    }
}

#[async_trait]
impl Transliterator for RuleTransliterator {
    async fn transliterate(
        &self,
        word: &str,
        max_candidates: Option<usize>,
    ) -> Result<Vec<String>> {
        self.candidates(word, max_candidates)
    }

    fn name(&self) -> &str {
        "rules"
    }
}
