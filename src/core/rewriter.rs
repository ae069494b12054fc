// src/core/rewriter.rs
use crate::core::tokens::{capitalize_first, is_word, join, starts_uppercase, title_case, tokenize};
use crate::core::types::{category, Style};
use crate::error::LexiconError;
use crate::lexicon::Lexicon;
use crate::suggest::{filter_for_style, Suggester, MASK_TOKEN};
use std::collections::HashMap;
use tracing::trace;

/// Rewrites multi-word phrases before the text is tokenized.
///
/// Phrases are tried in the order the lexicon returns them. The presence test
/// ignores case, but only the first occurrence spelled exactly like the key is
/// replaced.
pub fn rewrite_phrases<L: Lexicon + ?Sized>(
    lexicon: &L,
    text: &str,
    style: Style,
) -> Result<String, LexiconError> {
    let mut rewritten = text.to_string();
    for phrase in lexicon.find_by_category(category::PHRASES)? {
        if !rewritten
            .to_lowercase()
            .contains(&phrase.key.to_lowercase())
        {
            continue;
        }
        if let Some(replacement) = phrase.translations.preferred(style) {
            trace!(phrase = %phrase.key, replacement, "phrase");
            rewritten = rewritten.replacen(&phrase.key, replacement, 1);
        }
    }
    Ok(rewritten)
}

/// What a word resolved to the first time it was seen.
#[derive(Debug, Clone)]
enum Resolved {
    Replace(String),
    Keep,
}

/// Per-call state for word-level rewriting. Every occurrence of a word
/// (compared case-insensitively) gets the replacement chosen for its first
/// occurrence.
pub struct WordRewriter<'a, L: Lexicon + ?Sized> {
    lexicon: &'a L,
    suggester: Option<&'a dyn Suggester>,
    style: Style,
    word_translations: HashMap<String, Resolved>,
}

impl<'a, L: Lexicon + ?Sized> WordRewriter<'a, L> {
    pub fn new(lexicon: &'a L, style: Style) -> Self {
        Self {
            lexicon,
            suggester: None,
            style,
            word_translations: HashMap::new(),
        }
    }

    pub fn with_suggester(mut self, suggester: Option<&'a dyn Suggester>) -> Self {
        self.suggester = suggester;
        self
    }

    /// Tokenizes `text` and rewrites each word token. Punctuation passes
    /// through untouched.
    pub fn rewrite(&mut self, text: &str) -> Result<Vec<String>, LexiconError> {
        let tokens = tokenize(text);
        let mut output = Vec::with_capacity(tokens.len());

        for (i, token) in tokens.iter().enumerate() {
            if !is_word(token) {
                output.push(token.clone());
                continue;
            }

            let lower = token.to_lowercase();
            let resolved = match self.word_translations.get(&lower) {
                Some(cached) => cached.clone(),
                None => {
                    let resolved = self.resolve(&tokens, i)?;
                    self.word_translations.insert(lower, resolved.clone());
                    resolved
                }
            };

            output.push(match resolved {
                Resolved::Keep => token.clone(),
                Resolved::Replace(replacement) if starts_uppercase(token) => {
                    capitalize_first(&replacement)
                }
                Resolved::Replace(replacement) => replacement,
            });
        }
        Ok(output)
    }

    /// Exact form first, then title case, then lower case.
    fn resolve(&self, tokens: &[String], idx: usize) -> Result<Resolved, LexiconError> {
        let word = &tokens[idx];
        for key in [word.clone(), title_case(word), word.to_lowercase()] {
            if let Some(entry) = self.lexicon.find_translation(&key)? {
                return Ok(match entry.translations.preferred(self.style) {
                    Some(replacement) => {
                        trace!(word = %word, key = %entry.key, replacement, "word");
                        Resolved::Replace(replacement.to_string())
                    }
                    None => Resolved::Keep,
                });
            }
        }

        let Some(suggester) = self.suggester else {
            return Ok(Resolved::Keep);
        };
        let mut masked = tokens.to_vec();
        masked[idx] = MASK_TOKEN.to_string();
        let suggestions = filter_for_style(suggester.suggest(&join(&masked), self.style), self.style);
        Ok(match suggestions.into_iter().next() {
            Some(suggestion) => {
                trace!(word = %word, suggestion = %suggestion, "suggested");
                Resolved::Replace(suggestion)
            }
            None => Resolved::Keep,
        })
    }
}
