// File: src/core/context.rs
use crate::core::types::{category, Style};
use crate::error::LexiconError;
use crate::lexicon::Lexicon;
use tracing::debug;

/// Counts how many marker keys of `category` occur in `lowered`.
fn count_markers<L: Lexicon + ?Sized>(
    lexicon: &L,
    category: &str,
    lowered: &str,
) -> Result<usize, LexiconError> {
    Ok(lexicon
        .find_by_category(category)?
        .iter()
        .filter(|marker| lowered.contains(&marker.key.to_lowercase()))
        .count())
}

/// Picks the register for `text`.
///
/// Any formal-context marker forces `Personal`, no matter how many casual
/// markers are present. With no formal marker the text is `Casual`.
pub fn classify<L: Lexicon + ?Sized>(lexicon: &L, text: &str) -> Result<Style, LexiconError> {
    let lowered = text.to_lowercase();
    let formal = count_markers(lexicon, category::FORMAL_CONTEXT, &lowered)?;
    let casual = count_markers(lexicon, category::CASUAL_CONTEXT, &lowered)?;
    debug!(formal, casual, "context markers");

    Ok(if formal > 0 {
        Style::Personal
    } else {
        Style::Casual
    })
}
