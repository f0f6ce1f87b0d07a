//! Roman unit segmentation and Devanagari alternatives
//!
//! A Roman word is split into units by longest match (`chh` before `ch`
//! before `c`). Each unit then yields weighted Devanagari pieces depending on
//! where it sits in the word.

use hindi_xlit_core::{Error, Result, ScriptDetector};

/// Virama (halant): joins two consonants into a conjunct
pub const VIRAMA: char = '\u{094D}';

/// Longest Roman unit in the table
const MAX_UNIT_LEN: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    Consonant,
    Vowel,
    /// Copied to the output unchanged (digits, punctuation, Devanagari)
    Literal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    pub roman: String,
    pub kind: UnitKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    /// Leaves a consonant open; a following consonant needs a virama
    Consonant,
    /// Independent vowel or matra; closes the open consonant
    Vowel,
    /// Anusvara; closes the open consonant without a virama
    Sign,
    Literal,
}

/// One weighted Devanagari rendering of a unit
#[derive(Debug, Clone, PartialEq)]
pub struct Piece {
    pub text: String,
    pub kind: PieceKind,
    pub weight: f32,
}

impl Piece {
    fn new(text: &str, kind: PieceKind, weight: f32) -> Self {
        Self {
            text: text.to_string(),
            kind,
            weight,
        }
    }
}

/// Where a unit sits relative to its neighbours
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitContext {
    /// Last letter unit before a literal or the end of input
    pub is_final: bool,
    /// Previous unit is a Roman vowel, so an anusvara has a syllable to sit on
    pub prev_is_vowel: bool,
    /// Next unit is a consonant an anusvara can precede (not y, r, l, v, h)
    pub next_takes_anusvara: bool,
    /// Set per hypothesis: the output currently ends in an open consonant
    pub after_consonant: bool,
}

const CONSONANTS: &[(&str, &[(&str, f32)])] = &[
    ("cchh", &[("च्छ", 1.0)]),
    ("cch", &[("च्छ", 1.0)]),
    ("chh", &[("छ", 1.0)]),
    ("ksh", &[("क्ष", 1.0)]),
    ("kh", &[("ख", 0.9), ("ख़", 0.1)]),
    ("gh", &[("घ", 1.0)]),
    ("ch", &[("च", 0.75), ("छ", 0.25)]),
    ("jh", &[("झ", 1.0)]),
    ("th", &[("थ", 0.65), ("ठ", 0.35)]),
    ("dh", &[("ध", 0.7), ("ढ", 0.2), ("ढ़", 0.1)]),
    ("ph", &[("फ", 0.7), ("फ़", 0.3)]),
    ("bh", &[("भ", 1.0)]),
    ("sh", &[("श", 0.8), ("ष", 0.2)]),
    ("k", &[("क", 1.0)]),
    ("g", &[("ग", 0.95), ("ग़", 0.05)]),
    ("c", &[("क", 0.6), ("च", 0.4)]),
    ("j", &[("ज", 0.9), ("ज़", 0.1)]),
    ("t", &[("त", 0.65), ("ट", 0.35)]),
    ("d", &[("द", 0.6), ("ड", 0.3), ("ड़", 0.1)]),
    ("n", &[("न", 0.9), ("ण", 0.1)]),
    ("p", &[("प", 1.0)]),
    ("f", &[("फ़", 0.6), ("फ", 0.4)]),
    ("b", &[("ब", 1.0)]),
    ("m", &[("म", 1.0)]),
    ("y", &[("य", 1.0)]),
    ("r", &[("र", 0.9), ("ड़", 0.1)]),
    ("l", &[("ल", 1.0)]),
    ("v", &[("व", 1.0)]),
    ("w", &[("व", 1.0)]),
    ("s", &[("स", 0.9), ("श", 0.1)]),
    ("h", &[("ह", 1.0)]),
    ("z", &[("ज़", 0.7), ("ज", 0.3)]),
    ("q", &[("क़", 0.6), ("क", 0.4)]),
    ("x", &[("क्स", 0.8), ("क्ष", 0.2)]),
];

/// (roman, matra after a consonant, independent form, weight)
type VowelRow = (&'static str, &'static str, f32);

const VOWELS: &[(&str, &[VowelRow])] = &[
    ("aa", &[("ा", "आ", 1.0)]),
    ("ai", &[("ै", "ऐ", 0.8), ("ई", "अई", 0.2)]),
    ("au", &[("ौ", "औ", 0.8), ("उ", "अउ", 0.2)]),
    ("ee", &[("ी", "ई", 1.0)]),
    ("ii", &[("ी", "ई", 1.0)]),
    ("oo", &[("ू", "ऊ", 1.0)]),
    ("uu", &[("ू", "ऊ", 1.0)]),
    ("ou", &[("ौ", "औ", 0.7), ("ो", "ओ", 0.3)]),
    ("e", &[("े", "ए", 0.9), ("ै", "ऐ", 0.1)]),
    ("o", &[("ो", "ओ", 0.9), ("ौ", "औ", 0.1)]),
    // a, i and u depend on position; see `short_vowel`
    ("a", &[]),
    ("i", &[]),
    ("u", &[]),
];

/// Whether a nasal before `unit` may be written as anusvara
pub fn takes_anusvara(unit: &Unit) -> bool {
    unit.kind == UnitKind::Consonant
        && !matches!(unit.roman.as_str(), "y" | "r" | "l" | "v" | "w" | "h")
}

fn lookup_unit(candidate: &str) -> Option<UnitKind> {
    if CONSONANTS.iter().any(|(roman, _)| *roman == candidate) {
        Some(UnitKind::Consonant)
    } else if VOWELS.iter().any(|(roman, _)| *roman == candidate) {
        Some(UnitKind::Vowel)
    } else {
        None
    }
}

fn is_literal(c: char) -> bool {
    ScriptDetector::is_devanagari_char(c)
        || c.is_ascii_digit()
        || c.is_ascii_whitespace()
        || matches!(c, '-' | '\'' | '.' | ',' | '?' | '!')
}

/// Split a lowercased word into Roman units
pub fn segment(word: &str) -> Result<Vec<Unit>> {
    let chars: Vec<char> = word.chars().collect();
    let mut units = Vec::with_capacity(chars.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_ascii_alphabetic() {
            let mut matched = false;
            // Longest match first
            for len in (1..=MAX_UNIT_LEN).rev() {
                if i + len > chars.len() {
                    continue;
                }
                let seq: String = chars[i..i + len].iter().collect();
                if let Some(kind) = lookup_unit(&seq) {
                    units.push(Unit { roman: seq, kind });
                    i += len;
                    matched = true;
                    break;
                }
            }
            if !matched {
                return Err(Error::unsupported(
                    word,
                    format!("no Devanagari mapping for '{}'", c),
                ));
            }
        } else if is_literal(c) {
            units.push(Unit {
                roman: c.to_string(),
                kind: UnitKind::Literal,
            });
            i += 1;
        } else {
            return Err(Error::unsupported(
                word,
                format!("character '{}' is not Roman or Devanagari", c),
            ));
        }
    }

    Ok(units)
}

/// Weighted renderings of `unit` in context
pub fn alternatives(unit: &Unit, ctx: UnitContext) -> Vec<Piece> {
    match unit.kind {
        UnitKind::Literal => vec![Piece::new(&unit.roman, PieceKind::Literal, 1.0)],
        UnitKind::Consonant => consonant(unit, ctx),
        UnitKind::Vowel => vowel(unit, ctx),
    }
}

fn consonant(unit: &Unit, ctx: UnitContext) -> Vec<Piece> {
    let roman = unit.roman.as_str();

    // Nasal after a vowel and before a stop or sibilant may be written as
    // anusvara (हिंदी, संबंध); before y/r/l/v/h it stays a half letter (कन्या)
    if ctx.prev_is_vowel && ctx.next_takes_anusvara {
        match roman {
            "n" => {
                return vec![
                    Piece::new("ं", PieceKind::Sign, 0.55),
                    Piece::new("न", PieceKind::Consonant, 0.4),
                    Piece::new("ण", PieceKind::Consonant, 0.05),
                ]
            }
            "m" => {
                return vec![
                    Piece::new("म", PieceKind::Consonant, 0.6),
                    Piece::new("ं", PieceKind::Sign, 0.4),
                ]
            }
            _ => {}
        }
    }

    // Word-final n after a vowel is often nasalization (हैं, नहीं)
    if roman == "n" && ctx.is_final && ctx.prev_is_vowel {
        return vec![
            Piece::new("न", PieceKind::Consonant, 0.55),
            Piece::new("ं", PieceKind::Sign, 0.45),
        ];
    }

    CONSONANTS
        .iter()
        .find(|(r, _)| *r == roman)
        .map(|(_, alts)| {
            alts.iter()
                .map(|(text, weight)| Piece::new(text, PieceKind::Consonant, *weight))
                .collect()
        })
        .unwrap_or_default()
}

fn vowel(unit: &Unit, ctx: UnitContext) -> Vec<Piece> {
    let roman = unit.roman.as_str();

    if let Some(rows) = short_vowel(roman, ctx) {
        return rows
            .into_iter()
            .map(|(text, weight)| Piece::new(text, PieceKind::Vowel, weight))
            .collect();
    }

    VOWELS
        .iter()
        .find(|(r, _)| *r == roman)
        .map(|(_, rows)| {
            rows.iter()
                .map(|(matra, independent, weight)| {
                    let text = if ctx.after_consonant { matra } else { independent };
                    Piece::new(text, PieceKind::Vowel, *weight)
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Position-dependent weights for a, i and u
fn short_vowel(roman: &str, ctx: UnitContext) -> Option<Vec<(&'static str, f32)>> {
    let rows = match (roman, ctx.after_consonant, ctx.is_final) {
        // Inherent vowel mid-word, but word-final a is usually long (क्या, अच्छा)
        ("a", true, false) => vec![("", 0.85), ("ा", 0.15)],
        ("a", true, true) => vec![("ा", 0.6), ("", 0.4)],
        ("a", false, _) => vec![("अ", 0.85), ("आ", 0.15)],

        ("i", true, false) => vec![("ि", 0.8), ("ी", 0.2)],
        ("i", true, true) => vec![("ी", 0.65), ("ि", 0.35)],
        ("i", false, false) => vec![("इ", 0.7), ("ई", 0.3)],
        ("i", false, true) => vec![("ई", 0.7), ("इ", 0.3)],

        ("u", true, false) => vec![("ु", 0.8), ("ू", 0.2)],
        ("u", true, true) => vec![("ू", 0.55), ("ु", 0.45)],
        ("u", false, _) => vec![("उ", 0.8), ("ऊ", 0.2)],

        _ => return None,
    };
    Some(rows)
}
