// File: src/lexicon/seed.rs
//! Default Indonesian lexicon shipped with the crate.

use crate::core::types::category;
use crate::lexicon::MemoryLexicon;
use std::collections::HashSet;
use tracing::warn;

type Seed = (&'static str, &'static [&'static str], &'static [&'static str]);

const PATTERNS: &[(&str, &str, &str, &str)] = &[
    ("starter", "jika", "kalo", "Jika Anda -> Kalo lu"),
    ("starter", "kalau", "kalo", "Kalau Anda -> Kalo lu"),
    ("starter", "apabila", "kalo", "Apabila Anda -> Kalo lu"),
    ("question", "bagaimana", "gimana", "Bagaimana cara -> Gimana cara"),
    ("question", "mengapa", "kenapa", "Mengapa tidak -> Kenapa ngga"),
    ("ability", "saya dapat", "gue bisa", "Saya dapat membantu -> Gue bisa bantu"),
    ("ability", "saya bisa", "gue bisa", "Saya bisa menjelaskan -> Gue bisa jelasin"),
];

const PRONOUNS: &[Seed] = &[
    ("saya", &["gue", "gw"], &["aku"]),
    ("kamu", &["lu", "elo"], &["kamu"]),
    ("Anda", &["lu", "elo"], &["kamu"]),
    ("anda", &["lu", "elo"], &["kamu"]),
];

const PHRASES: &[Seed] = &[
    ("tindakan yang disarankan", &["yang disaranin"], &["yang disarankan"]),
    ("ini berarti", &["maksudnya tuh"], &["ini artinya"]),
    ("tujuan hidup", &["cita-cita"], &["tujuan hidup"]),
    ("langkah ini berguna", &["ini berguna"], &["ini berguna"]),
    ("mencari tahu", &["nyari"], &["mencari"]),
    ("langkah-langkah", &["cara-cara"], &["langkah-langkah"]),
];

const VERBS: &[Seed] = &[
    ("mengevaluasi", &["mikirin"], &["memikirkan"]),
    ("mempertimbangkan", &["pikirin"], &["pikirkan"]),
    ("dapat", &["bisa"], &["dapat"]),
    ("pelajari", &["pelajarin"], &["pelajari"]),
    ("meningkatkan", &["ningkatin"], &["meningkatkan"]),
];

const NOUNS: &[Seed] = &[
    ("karier", &["kerjaan"], &["karir"]),
    ("pencapaian", &["pencapaian"], &["pencapaian"]),
    ("keterampilan", &["skill"], &["kemampuan"]),
    ("pekerjaan", &["kerjaan"], &["pekerjaan"]),
    ("tahun", &["taun"], &["tahun"]),
    ("langkah", &["cara"], &["langkah"]),
    ("pengembangan pribadi", &["pengembangan diri"], &["pengembangan pribadi"]),
    ("pengembangan profesional", &["pengembangan karir"], &["pengembangan profesional"]),
];

const PREPOSITIONS: &[Seed] = &[
    ("untuk", &["buat"], &["untuk"]),
    ("melalui", &["lewat"], &["melalui"]),
    ("di", &["di"], &["di"]),
];

const CONJUNCTIONS: &[Seed] = &[
    ("atau", &["ato"], &["atau"]),
    ("dan", &["sama"], &["dan"]),
    ("yang", &["yang"], &["yang"]),
];

const ADJECTIVES: &[Seed] = &[
    ("baru", &["baru"], &["baru"]),
    ("berguna", &["berguna"], &["berguna"]),
];

const FORMAL_CONTEXT: &[Seed] = &[
    ("evaluasi", &["evaluasi"], &["evaluasi"]),
    ("tujuan", &["tujuan"], &["tujuan"]),
    ("profesional", &["profesional"], &["profesional"]),
    ("pengembangan", &["pengembangan"], &["pengembangan"]),
    ("disarankan", &["disarankan"], &["disarankan"]),
];

const CASUAL_CONTEXT: &[Seed] = &[
    ("ngobrol", &["ngobrol"], &["berbicara"]),
    ("santai", &["santai"], &["rileks"]),
];

/// Loads the default patterns and words into `lexicon`. A key whose
/// lower-case form was already seeded is skipped, so `Anda` shadows `anda`.
pub fn populate(lexicon: &mut MemoryLexicon) {
    for &(pattern_type, formal, casual, example) in PATTERNS {
        lexicon.add_pattern(pattern_type, formal, casual, vec![example.to_string()]);
    }

    let groups: [(&str, &[Seed]); 9] = [
        (category::PRONOUNS, PRONOUNS),
        (category::PHRASES, PHRASES),
        (category::VERBS, VERBS),
        (category::NOUNS, NOUNS),
        (category::PREPOSITIONS, PREPOSITIONS),
        (category::CONJUNCTIONS, CONJUNCTIONS),
        (category::ADJECTIVES, ADJECTIVES),
        (category::FORMAL_CONTEXT, FORMAL_CONTEXT),
        (category::CASUAL_CONTEXT, CASUAL_CONTEXT),
    ];

    let mut seen = HashSet::new();
    for (category, words) in groups {
        for &(word, casual, personal) in words {
            if !seen.insert(word.to_lowercase()) {
                continue;
            }
            if let Err(e) = lexicon.add_word(
                word,
                casual.iter().copied(),
                personal.iter().copied(),
                category,
            ) {
                warn!(word, error = %e, "skipping seed entry");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::PatternFilter;
    use crate::lexicon::Lexicon;

    #[test]
    fn seeds_patterns_in_order() {
        let lex = MemoryLexicon::seeded();
        let patterns = lex.find_patterns(&PatternFilter::all()).unwrap();
        assert_eq!(patterns.len(), 7);
        assert_eq!(patterns[0].formal_pattern, "jika");
        assert_eq!(patterns[6].casual_pattern, "gue bisa");
    }

    #[test]
    fn lower_case_duplicate_is_skipped() {
        let lex = MemoryLexicon::seeded();
        assert!(lex.find_translation("Anda").unwrap().is_some());
        assert!(lex.find_translation("anda").unwrap().is_none());
    }

    #[test]
    fn context_markers_are_seeded() {
        let lex = MemoryLexicon::seeded();
        assert_eq!(lex.find_by_category(category::FORMAL_CONTEXT).unwrap().len(), 5);
        assert_eq!(lex.find_by_category(category::CASUAL_CONTEXT).unwrap().len(), 2);
    }
}
