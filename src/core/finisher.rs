// src/core/finisher.rs
use crate::core::tokens::capitalize_first;
use crate::core::types::{PatternFilter, Style};
use crate::error::LexiconError;
use crate::lexicon::Lexicon;
use tracing::trace;

/// Casual particles that should not survive into personal output.
const STRAY_PARTICLES: &[&str] = &["nih, ", "tuh "];

/// Applies the style-specific last pass to the reconstructed text.
///
/// Casual: the first pattern whose formal form occurs in `original` has its
/// first occurrence in the output swapped for the casual form, then the whole
/// output is lower-cased. Personal: stray particles are removed and the first
/// character is upper-cased.
pub fn finish<L: Lexicon + ?Sized>(
    lexicon: &L,
    text: &str,
    original: &str,
    style: Style,
) -> Result<String, LexiconError> {
    match style {
        Style::Casual => finish_casual(lexicon, text, original),
        Style::Personal => Ok(finish_personal(text)),
    }
}

fn finish_casual<L: Lexicon + ?Sized>(
    lexicon: &L,
    text: &str,
    original: &str,
) -> Result<String, LexiconError> {
    let lowered_original = original.to_lowercase();
    let mut result = text.to_lowercase();

    let patterns = lexicon.find_patterns(&PatternFilter::all())?;
    let matched = patterns
        .iter()
        .find(|p| lowered_original.contains(&p.formal_pattern.to_lowercase()));

    if let Some(pattern) = matched {
        trace!(
            pattern_type = %pattern.pattern_type,
            formal = %pattern.formal_pattern,
            "pattern"
        );
        result = result.replacen(
            &pattern.formal_pattern.to_lowercase(),
            &pattern.casual_pattern.to_lowercase(),
            1,
        );
    }
    Ok(result.to_lowercase())
}

fn finish_personal(text: &str) -> String {
    let mut result = text.to_string();
    for particle in STRAY_PARTICLES {
        result = result.replace(particle, "");
    }
    if result.chars().next().is_some_and(char::is_lowercase) {
        result = capitalize_first(&result);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::MemoryLexicon;

    fn lexicon() -> MemoryLexicon {
        let mut lex = MemoryLexicon::new();
        lex.add_pattern("question", "bagaimana", "gimana", vec![]);
        lex.add_pattern("starter", "jika", "kalo", vec![]);
        lex.add_pattern("starter", "apabila", "kalo", vec![]);
        lex
    }

    #[test]
    fn casual_uses_first_pattern_found_in_original() {
        let lex = lexicon();
        let out = finish(&lex, "Jika bagaimana, jika", "jika bagaimana, jika", Style::Casual)
            .unwrap();
        assert_eq!(out, "jika gimana, jika");
    }

    #[test]
    fn casual_matches_against_original_not_output() {
        let lex = lexicon();
        let out = finish(&lex, "Jika lu mau", "Kalau Anda mau", Style::Casual).unwrap();
        assert_eq!(out, "jika lu mau");
    }

    #[test]
    fn casual_is_always_lower_case() {
        let lex = MemoryLexicon::new();
        assert_eq!(finish(&lex, "HALO Dunia", "HALO Dunia", Style::Casual).unwrap(), "halo dunia");
        assert_eq!(finish(&lex, "", "", Style::Casual).unwrap(), "");
    }

    #[test]
    fn personal_strips_particles_and_capitalizes() {
        let lex = MemoryLexicon::new();
        let out = finish(&lex, "nih, ini tuh cara kamu", "", Style::Personal).unwrap();
        assert_eq!(out, "Ini cara kamu");
        assert_eq!(finish(&lex, "", "", Style::Personal).unwrap(), "");
        assert_eq!(finish(&lex, "1 langkah", "", Style::Personal).unwrap(), "1 langkah");
    }
}
