//! Common-word lexicon
//!
//! Fixed spellings for frequent Hinglish words whose Devanagari form the
//! rules cannot derive (nasalization, nukta, irregular vowels). A YAML file
//! can add words or override the built-in spelling:
//!
//! ```yaml
//! namaste: नमस्ते
//! hindi: [हिंदी, हिन्दी]
//! ```

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use hindi_xlit_core::{Error, Result};

static BUILTIN: Lazy<HashMap<String, Vec<String>>> = Lazy::new(|| {
    let entries: &[(&str, &[&str])] = &[
        // Greetings
        ("namaste", &["नमस्ते"]),
        ("namaskar", &["नमस्कार"]),
        ("dhanyavad", &["धन्यवाद"]),
        ("dhanyawad", &["धन्यवाद"]),
        ("shukriya", &["शुक्रिया"]),
        ("ji", &["जी"]),
        // Pronouns
        ("main", &["मैं"]),
        ("aap", &["आप"]),
        ("tum", &["तुम"]),
        ("hum", &["हम"]),
        ("mera", &["मेरा"]),
        ("meri", &["मेरी"]),
        ("mere", &["मेरे"]),
        ("tera", &["तेरा"]),
        // Verbs and particles
        ("hai", &["है"]),
        ("hain", &["हैं"]),
        ("hoon", &["हूँ", "हूं"]),
        ("hun", &["हूँ", "हूं"]),
        ("nahi", &["नहीं"]),
        ("nahin", &["नहीं"]),
        ("haan", &["हाँ", "हां"]),
        ("aur", &["और"]),
        ("lekin", &["लेकिन"]),
        // Questions
        ("kya", &["क्या"]),
        ("kaise", &["कैसे"]),
        ("kaisa", &["कैसा"]),
        ("kyun", &["क्यों"]),
        ("kyon", &["क्यों"]),
        ("kab", &["कब"]),
        ("kahan", &["कहाँ", "कहां"]),
        ("yahan", &["यहाँ", "यहां"]),
        ("vahan", &["वहाँ", "वहां"]),
        ("wahan", &["वहाँ", "वहां"]),
        // Everyday words
        ("accha", &["अच्छा"]),
        ("acha", &["अच्छा"]),
        ("theek", &["ठीक"]),
        ("thik", &["ठीक"]),
        ("bahut", &["बहुत"]),
        ("pyaar", &["प्यार"]),
        ("pyar", &["प्यार"]),
        ("dil", &["दिल"]),
        ("ghar", &["घर"]),
        ("paani", &["पानी"]),
        ("pani", &["पानी"]),
        ("khana", &["खाना"]),
        ("dost", &["दोस्त"]),
        ("duniya", &["दुनिया"]),
        ("zindagi", &["ज़िंदगी", "जिंदगी"]),
        ("ladka", &["लड़का"]),
        ("ladki", &["लड़की"]),
        ("bharat", &["भारत"]),
        ("hindi", &["हिंदी", "हिन्दी"]),
        ("bhasha", &["भाषा"]),
        ("gyan", &["ज्ञान"]),
    ];

    entries
        .iter()
        .map(|(roman, forms)| {
            (
                roman.to_string(),
                forms.iter().map(|f| f.to_string()).collect(),
            )
        })
        .collect()
});

/// A YAML value is either one spelling or a ranked list
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LexiconValue {
    One(String),
    Many(Vec<String>),
}

impl LexiconValue {
    fn into_vec(self) -> Vec<String> {
        match self {
            LexiconValue::One(s) => vec![s],
            LexiconValue::Many(v) => v,
        }
    }
}

/// Roman word -> ranked Devanagari spellings
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: HashMap<String, Vec<String>>,
}

impl Lexicon {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builtin() -> Self {
        Self {
            entries: (*BUILTIN).clone(),
        }
    }

    /// Built-in entries merged with a YAML file.
    ///
    /// File spellings rank ahead of built-in ones for the same word.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Lexicon(format!("{}: {}", path.display(), e)))?;

        let mut lexicon = Self::builtin();
        let added = lexicon.merge_yaml(&content)?;
        tracing::info!(path = %path.display(), entries = added, "Loaded lexicon");
        Ok(lexicon)
    }

    /// Merge YAML entries, returning how many words were read
    pub fn merge_yaml(&mut self, content: &str) -> Result<usize> {
        let parsed: HashMap<String, LexiconValue> = if content.trim().is_empty() {
            HashMap::new()
        } else {
            serde_yaml::from_str(content).map_err(|e| Error::Lexicon(e.to_string()))?
        };

        let count = parsed.len();
        for (roman, value) in parsed {
            let forms: Vec<String> = value
                .into_vec()
                .into_iter()
                .map(|f| f.trim().to_string())
                .filter(|f| !f.is_empty())
                .collect();
            if forms.is_empty() {
                continue;
            }
            self.insert(&roman, forms);
        }
        Ok(count)
    }

    /// Prepend `forms` to the spellings of `roman`
    pub fn insert(&mut self, roman: &str, forms: Vec<String>) {
        let key = roman.trim().to_ascii_lowercase();
        let existing = self.entries.remove(&key).unwrap_or_default();

        let mut merged = forms;
        for form in existing {
            if !merged.contains(&form) {
                merged.push(form);
            }
        }
        self.entries.insert(key, merged);
    }

    /// Spellings for an already lowercased word
    pub fn lookup(&self, word: &str) -> Option<&[String]> {
        self.entries.get(word).map(|v| v.as_slice())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_entries() {
        let lexicon = Lexicon::builtin();
        assert!(!lexicon.is_empty());
        assert_eq!(lexicon.lookup("main").unwrap()[0], "मैं");
        assert_eq!(lexicon.lookup("hindi").unwrap().len(), 2);
        assert!(lexicon.lookup("Main").is_none());
        assert!(Lexicon::empty().lookup("main").is_none());
    }

    #[test]
    fn test_merge_prepends_user_spellings() {
        let mut lexicon = Lexicon::builtin();
        let yaml = "hindi: हिन्दी\nchai: [चाय]\nblank: ''\n";
        assert_eq!(lexicon.merge_yaml(yaml).unwrap(), 3);

        // existing spelling moves to the front without duplication
        assert_eq!(lexicon.lookup("hindi").unwrap(), &["हिन्दी", "हिंदी"]);
        assert_eq!(lexicon.lookup("chai").unwrap(), &["चाय"]);
        assert!(lexicon.lookup("blank").is_none());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Kitab: [किताब]").unwrap();

        let lexicon = Lexicon::load(file.path()).unwrap();
        assert_eq!(lexicon.lookup("kitab").unwrap()[0], "किताब");
        assert!(lexicon.lookup("namaste").is_some());
    }

    #[test]
    fn test_load_errors() {
        let err = Lexicon::load("/nonexistent/lexicon.yaml").unwrap_err();
        assert!(matches!(err, Error::Lexicon(_)));

        let mut lexicon = Lexicon::empty();
        assert!(lexicon.merge_yaml("- just\n- a list\n").is_err());
    }
}
