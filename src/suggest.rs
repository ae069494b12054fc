// File: src/suggest.rs
use crate::core::types::Style;

/// Placeholder that replaces the target word in the text handed to a suggester.
pub const MASK_TOKEN: &str = "[MASK]";

/// Casual pronouns a personal-style suggestion must not contain.
const CASUAL_MARKERS: &[&str] = &["gw", "lu", "elu", "gue", "loe"];

const MAX_SUGGESTIONS: usize = 5;

/// A masked-language-model style scorer. Given the sentence with one word
/// replaced by [`MASK_TOKEN`], it proposes replacements, best first.
///
/// No implementation ships with the crate; the engine works without one.
pub trait Suggester: Send + Sync {
    fn suggest(&self, masked_text: &str, style: Style) -> Vec<String>;
}

/// Trims raw suggestions, drops blanks and (for `Personal`) anything that
/// looks like a casual pronoun, and keeps the best few.
pub fn filter_for_style(raw: Vec<String>, style: Style) -> Vec<String> {
    raw.into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .filter(|s| match style {
            Style::Casual => true,
            Style::Personal => {
                let lower = s.to_lowercase();
                !CASUAL_MARKERS.iter().any(|m| lower.contains(m))
            }
        })
        .take(MAX_SUGGESTIONS)
        .collect()
}
