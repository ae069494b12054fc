use crate::core::types::{Confidence, HumanizeResponse, Style, StyleReport, WordChange};
use crate::core::{context, finisher, rewriter, tokens};
use crate::error::{LexiconError, Result};
use crate::lexicon::Lexicon;
use crate::suggest::Suggester;
use tracing::{debug, warn};

/// Inputs with more whitespace-separated words than this report `High`.
const HIGH_CONFIDENCE_MIN_WORDS: usize = 5;

/// The humanizer: context detection followed by phrase, word and pattern
/// rewriting. Holds no per-call state, so one instance can serve concurrent
/// callers as long as the lexicon can.
pub struct Humanizer<L: Lexicon> {
    lexicon: L,
    suggester: Option<Box<dyn Suggester>>,
}

impl<L: Lexicon> Humanizer<L> {
    pub fn new(lexicon: L) -> Self {
        Self {
            lexicon,
            suggester: None,
        }
    }

    pub fn with_suggester(mut self, suggester: Box<dyn Suggester>) -> Self {
        self.suggester = Some(suggester);
        self
    }

    pub fn lexicon(&self) -> &L {
        &self.lexicon
    }

    pub fn lexicon_mut(&mut self) -> &mut L {
        &mut self.lexicon
    }

    pub fn detect_context(&self, text: &str) -> Result<Style> {
        context::classify(&self.lexicon, text).map_err(|e| self.fail(e))
    }

    /// Rewrites `text` into `style`. Nothing partial is returned on failure.
    pub fn translate(&self, text: &str, style: Style) -> Result<String> {
        self.run(text, style).map_err(|e| self.fail(e))
    }

    fn run(&self, text: &str, style: Style) -> std::result::Result<String, LexiconError> {
        debug!(%style, len = text.len(), "translating");
        let phrased = rewriter::rewrite_phrases(&self.lexicon, text, style)?;
        let words = rewriter::WordRewriter::new(&self.lexicon, style)
            .with_suggester(self.suggester.as_deref())
            .rewrite(&phrased)?;
        let joined = tokens::join(&words);
        finisher::finish(&self.lexicon, &joined, text, style)
    }

    /// Rewrites `text`, detecting the style unless one is forced, and lists
    /// the words that changed.
    pub fn humanize(&self, text: &str, style_override: Option<Style>) -> Result<HumanizeResponse> {
        let style = match style_override {
            Some(style) => style,
            None => self.detect_context(text)?,
        };
        let humanized = self.translate(text, style)?;
        let changes = word_changes(text, &humanized);
        debug!(%style, changes = changes.len(), "humanized");

        Ok(HumanizeResponse {
            original: text.to_string(),
            humanized,
            detected_style: style,
            changes,
        })
    }

    pub fn detect_style(&self, text: &str) -> Result<StyleReport> {
        let style = self.detect_context(text)?;
        let confidence = if text.split_whitespace().count() > HIGH_CONFIDENCE_MIN_WORDS {
            Confidence::High
        } else {
            Confidence::Medium
        };
        Ok(StyleReport {
            text: text.to_string(),
            style,
            confidence,
        })
    }

    fn fail(&self, e: LexiconError) -> crate::error::HumanizeError {
        warn!(error = %e, "lexicon call failed");
        e.into()
    }
}

/// Pairs input and output words by whitespace position and keeps the pairs
/// that differ ignoring case.
pub fn word_changes(original: &str, humanized: &str) -> Vec<WordChange> {
    let mut changes = Vec::new();
    for (orig, human) in original.split_whitespace().zip(humanized.split_whitespace()) {
        if orig.to_lowercase() != human.to_lowercase() {
            changes.push(WordChange {
                original: orig.to_string(),
                humanized: human.to_string(),
                position: changes.len(),
            });
        }
    }
    changes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HumanizeError;
    use crate::lexicon::MemoryLexicon;

    #[test]
    fn changes_are_numbered_within_the_list() {
        let changes = word_changes("Saya dapat membantu", "gue bisa membantu");
        assert_eq!(changes.len(), 2);
        assert_eq!(changes[1].original, "dapat");
        assert_eq!(changes[1].humanized, "bisa");
        assert_eq!(changes[1].position, 1);
    }

    #[test]
    fn confidence_depends_on_word_count() {
        let engine = Humanizer::new(MemoryLexicon::new());
        let short = engine.detect_style("satu dua tiga empat lima").unwrap();
        assert_eq!(short.confidence, Confidence::Medium);
        let long = engine.detect_style("satu dua tiga empat lima enam").unwrap();
        assert_eq!(long.confidence, Confidence::High);
    }

    #[test]
    fn override_drives_the_rewrite() {
        let mut lex = MemoryLexicon::new();
        lex.add_word("saya", ["gue"], ["aku"], "pronouns").unwrap();
        let engine = Humanizer::new(lex);
        let out = engine.humanize("saya", Some(Style::Personal)).unwrap();
        assert_eq!(out.humanized, "Aku");
        assert_eq!(out.detected_style, Style::Personal);
    }

    #[test]
    fn invalid_entries_map_to_malformed_input() {
        let err: HumanizeError = LexiconError::InvalidEntry("x".into()).into();
        assert!(matches!(err, HumanizeError::MalformedInput(_)));
    }
}
