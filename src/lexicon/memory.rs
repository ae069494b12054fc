// File: src/lexicon/memory.rs
use crate::core::types::{LexiconEntry, PatternEntry, PatternFilter, Translations};
use crate::error::LexiconError;
use crate::lexicon::{seed, Lexicon};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// An in-memory lexicon that keeps entries in insertion order.
/// This is the store the binaries load from and save to disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryLexicon {
    entries: Vec<LexiconEntry>,
    patterns: Vec<PatternEntry>,
}

impl MemoryLexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// The default Indonesian lexicon.
    pub fn seeded() -> Self {
        let mut lexicon = Self::new();
        seed::populate(&mut lexicon);
        lexicon
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    pub fn entries(&self) -> &[LexiconEntry] {
        &self.entries
    }

    pub fn patterns(&self) -> &[PatternEntry] {
        &self.patterns
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.key == key)
    }

    /// Adds a word. Returns `Ok(false)` without touching the store when the
    /// exact key is already present.
    pub fn add_word<C, P>(
        &mut self,
        key: &str,
        casual: C,
        personal: P,
        category: &str,
    ) -> Result<bool, LexiconError>
    where
        C: IntoIterator,
        C::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        if self.position(key).is_some() {
            debug!(key, "word already in lexicon");
            return Ok(false);
        }
        let translations = Translations::new(casual, personal);
        if !translations.is_complete() {
            return Err(LexiconError::InvalidEntry(format!(
                "'{}' needs at least one casual and one personal translation",
                key
            )));
        }
        self.entries.push(LexiconEntry {
            key: key.to_string(),
            category: category.to_string(),
            translations,
        });
        Ok(true)
    }

    /// Inserts a fully-formed entry, with the same duplicate rule as `add_word`.
    pub fn insert_entry(&mut self, entry: LexiconEntry) -> Result<bool, LexiconError> {
        let LexiconEntry {
            key,
            category,
            translations,
        } = entry;
        self.add_word(&key, translations.casual, translations.personal, &category)
    }

    /// Replaces the provided fields of an existing entry. Returns whether the
    /// key existed.
    pub fn update_word(
        &mut self,
        key: &str,
        casual: Option<Vec<String>>,
        personal: Option<Vec<String>>,
        category: Option<&str>,
    ) -> Result<bool, LexiconError> {
        if casual.as_ref().is_some_and(Vec::is_empty) || personal.as_ref().is_some_and(Vec::is_empty)
        {
            return Err(LexiconError::InvalidEntry(format!(
                "'{}' cannot be updated with an empty translation list",
                key
            )));
        }
        let Some(idx) = self.position(key) else {
            return Ok(false);
        };
        let entry = &mut self.entries[idx];
        if let Some(casual) = casual {
            entry.translations.casual = casual;
        }
        if let Some(personal) = personal {
            entry.translations.personal = personal;
        }
        if let Some(category) = category {
            entry.category = category.to_string();
        }
        Ok(true)
    }

    pub fn delete_word(&mut self, key: &str) -> bool {
        match self.position(key) {
            Some(idx) => {
                self.entries.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Adds a pattern. `(pattern_type, formal_pattern)` is unique; adding an
    /// existing pair returns `false`.
    pub fn add_pattern(
        &mut self,
        pattern_type: &str,
        formal_pattern: &str,
        casual_pattern: &str,
        examples: Vec<String>,
    ) -> bool {
        let exists = self
            .patterns
            .iter()
            .any(|p| p.pattern_type == pattern_type && p.formal_pattern == formal_pattern);
        if exists {
            debug!(pattern_type, formal_pattern, "pattern already in lexicon");
            return false;
        }
        self.patterns.push(PatternEntry {
            pattern_type: pattern_type.to_string(),
            formal_pattern: formal_pattern.to_string(),
            casual_pattern: casual_pattern.to_string(),
            examples,
        });
        true
    }
}

impl Lexicon for MemoryLexicon {
    fn find_by_category(&self, category: &str) -> Result<Vec<LexiconEntry>, LexiconError> {
        Ok(self
            .entries
            .iter()
            .filter(|entry| entry.category == category)
            .cloned()
            .collect())
    }

    fn find_translation(&self, word: &str) -> Result<Option<LexiconEntry>, LexiconError> {
        Ok(self.position(word).map(|idx| self.entries[idx].clone()))
    }

    fn find_patterns(&self, filter: &PatternFilter) -> Result<Vec<PatternEntry>, LexiconError> {
        Ok(self
            .patterns
            .iter()
            .filter(|pattern| filter.matches(pattern))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_key_is_a_successful_noop() {
        let mut lex = MemoryLexicon::new();
        assert_eq!(lex.add_word("saya", ["gue"], ["aku"], "pronouns"), Ok(true));
        assert_eq!(lex.add_word("saya", ["gw"], ["saya"], "verbs"), Ok(false));
        let entry = lex.find_translation("saya").unwrap().unwrap();
        assert_eq!(entry.translations.casual, vec!["gue"]);
        assert_eq!(lex.len(), 1);
    }

    #[test]
    fn empty_candidates_are_rejected() {
        let mut lex = MemoryLexicon::new();
        let err = lex
            .add_word("dapat", Vec::<String>::new(), ["dapat"], "verbs")
            .unwrap_err();
        assert!(matches!(err, LexiconError::InvalidEntry(_)));
        assert!(lex.is_empty());
    }

    #[test]
    fn translation_lookup_is_case_sensitive() {
        let mut lex = MemoryLexicon::new();
        lex.add_word("Anda", ["lu"], ["kamu"], "pronouns").unwrap();
        assert!(lex.find_translation("Anda").unwrap().is_some());
        assert!(lex.find_translation("anda").unwrap().is_none());
    }

    #[test]
    fn update_replaces_only_given_fields() {
        let mut lex = MemoryLexicon::new();
        lex.add_word("untuk", ["buat"], ["untuk"], "prepositions").unwrap();
        let updated = lex
            .update_word("untuk", Some(vec!["bwt".into()]), None, None)
            .unwrap();
        assert!(updated);
        let entry = lex.find_translation("untuk").unwrap().unwrap();
        assert_eq!(entry.translations.casual, vec!["bwt"]);
        assert_eq!(entry.translations.personal, vec!["untuk"]);
        assert_eq!(entry.category, "prepositions");

        assert!(!lex.update_word("missing", None, None, Some("nouns")).unwrap());
        assert!(lex
            .update_word("untuk", None, Some(Vec::new()), None)
            .is_err());
    }

    #[test]
    fn delete_reports_whether_removed() {
        let mut lex = MemoryLexicon::new();
        lex.add_word("atau", ["ato"], ["atau"], "conjunctions").unwrap();
        assert!(lex.delete_word("atau"));
        assert!(!lex.delete_word("atau"));
    }

    #[test]
    fn patterns_are_unique_per_type_and_filterable() {
        let mut lex = MemoryLexicon::new();
        assert!(lex.add_pattern("starter", "jika", "kalo", vec![]));
        assert!(!lex.add_pattern("starter", "jika", "kalau", vec![]));
        assert!(lex.add_pattern("question", "jika", "kalo", vec![]));
        assert!(lex.add_pattern("question", "mengapa", "kenapa", vec![]));

        assert_eq!(lex.find_patterns(&PatternFilter::all()).unwrap().len(), 3);
        let questions = lex.find_patterns(&PatternFilter::by_type("question")).unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].formal_pattern, "jika");
    }

    #[test]
    fn category_lookup_keeps_insertion_order() {
        let mut lex = MemoryLexicon::new();
        lex.add_word("tahun", ["taun"], ["tahun"], "nouns").unwrap();
        lex.add_word("dapat", ["bisa"], ["dapat"], "verbs").unwrap();
        lex.add_word("karier", ["kerjaan"], ["karir"], "nouns").unwrap();
        let keys: Vec<_> = lex
            .find_by_category("nouns")
            .unwrap()
            .into_iter()
            .map(|e| e.key)
            .collect();
        assert_eq!(keys, vec!["tahun", "karier"]);
        assert!(lex.find_by_category("phrases").unwrap().is_empty());
    }
}
