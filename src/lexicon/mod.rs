// File: src/lexicon/mod.rs
pub mod memory;
pub mod seed;

use crate::core::types::{LexiconEntry, PatternEntry, PatternFilter};
use crate::error::LexiconError;
use std::sync::Arc;

pub use memory::MemoryLexicon;

/// Read access to the translation dictionary and sentence patterns.
///
/// Implementations must be safe for concurrent reads. A miss is `Ok(None)` or
/// an empty list; `Err` is reserved for a store that cannot answer at all.
pub trait Lexicon: Send + Sync {
    /// All entries tagged with `category`, in the store's stable order.
    fn find_by_category(&self, category: &str) -> Result<Vec<LexiconEntry>, LexiconError>;

    /// Exact, case-sensitive lookup by entry key.
    fn find_translation(&self, word: &str) -> Result<Option<LexiconEntry>, LexiconError>;

    fn find_patterns(&self, filter: &PatternFilter) -> Result<Vec<PatternEntry>, LexiconError>;
}

impl<T: Lexicon + ?Sized> Lexicon for &T {
    fn find_by_category(&self, category: &str) -> Result<Vec<LexiconEntry>, LexiconError> {
        (**self).find_by_category(category)
    }

    fn find_translation(&self, word: &str) -> Result<Option<LexiconEntry>, LexiconError> {
        (**self).find_translation(word)
    }

    fn find_patterns(&self, filter: &PatternFilter) -> Result<Vec<PatternEntry>, LexiconError> {
        (**self).find_patterns(filter)
    }
}

impl<T: Lexicon + ?Sized> Lexicon for Box<T> {
    fn find_by_category(&self, category: &str) -> Result<Vec<LexiconEntry>, LexiconError> {
        (**self).find_by_category(category)
    }

    fn find_translation(&self, word: &str) -> Result<Option<LexiconEntry>, LexiconError> {
        (**self).find_translation(word)
    }

    fn find_patterns(&self, filter: &PatternFilter) -> Result<Vec<PatternEntry>, LexiconError> {
        (**self).find_patterns(filter)
    }
}

impl<T: Lexicon + ?Sized> Lexicon for Arc<T> {
    fn find_by_category(&self, category: &str) -> Result<Vec<LexiconEntry>, LexiconError> {
        (**self).find_by_category(category)
    }

    fn find_translation(&self, word: &str) -> Result<Option<LexiconEntry>, LexiconError> {
        (**self).find_translation(word)
    }

    fn find_patterns(&self, filter: &PatternFilter) -> Result<Vec<PatternEntry>, LexiconError> {
        (**self).find_patterns(filter)
    }
}
