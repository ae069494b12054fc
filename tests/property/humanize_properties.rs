use humanize_core::core::context::classify;
use humanize_core::{Humanizer, MemoryLexicon, Style};
use proptest::prelude::*;

fn engine() -> Humanizer<MemoryLexicon> {
    Humanizer::new(MemoryLexicon::seeded())
}

/// Known words plus a few the seeded lexicon does not contain.
const VOCAB: &[&str] = &[
    "saya", "anda", "dapat", "untuk", "karier", "tahun", "membantu", "rumah", "melalui",
];

fn recase(word: &str, mode: u8) -> String {
    match mode % 3 {
        0 => word.to_string(),
        1 => word.to_uppercase(),
        _ => {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}

// ── Every occurrence of a word gets the same replacement ──────────────────

proptest! {
    #[test]
    fn repeated_words_are_rewritten_consistently(
        idx in 0..VOCAB.len(),
        modes in prop::collection::vec(any::<u8>(), 2..6)
    ) {
        let word = VOCAB[idx];
        let text = modes.iter().map(|&m| recase(word, m)).collect::<Vec<_>>().join(" ");
        let out = engine().translate(&text, Style::Personal).unwrap();
        let lowered: Vec<String> = out.split_whitespace().map(str::to_lowercase).collect();
        prop_assert_eq!(lowered.len(), modes.len());
        prop_assert!(
            lowered.windows(2).all(|w| w[0] == w[1]),
            "inconsistent rewrite of '{}': {}",
            text,
            out
        );
    }

    #[test]
    fn first_occurrence_decides_when_keys_differ_only_in_case(
        modes in prop::collection::vec(any::<u8>(), 2..6)
    ) {
        let mut lexicon = MemoryLexicon::new();
        lexicon.add_word("anda", ["lu"], ["engkau"], "pronouns").unwrap();
        lexicon.add_word("Anda", ["lo"], ["kamu"], "pronouns").unwrap();
        let engine = Humanizer::new(lexicon);

        let text = modes.iter().map(|&m| recase("anda", m)).collect::<Vec<_>>().join(" ");
        let out = engine.translate(&text, Style::Personal).unwrap();
        let lowered: Vec<String> = out.split_whitespace().map(str::to_lowercase).collect();
        let expected = if modes[0] % 3 == 0 { "engkau" } else { "kamu" };
        prop_assert!(
            lowered.iter().all(|w| w == expected),
            "'{}' gave {}",
            text,
            out
        );
    }
}

// ── Casual output is lower case, personal output starts with a capital ────

proptest! {
    #[test]
    fn casual_output_is_entirely_lower_case(text in "[A-Za-z ,.!?]{0,60}") {
        let out = engine().translate(&text, Style::Casual).unwrap();
        prop_assert_eq!(out.to_lowercase(), out);
    }

    #[test]
    fn personal_output_starts_upper_case(text in "[a-z][a-z ,.!?]{0,40}") {
        let out = engine().translate(&text, Style::Personal).unwrap();
        if let Some(first) = out.chars().next() {
            if first.is_alphabetic() {
                prop_assert!(first.is_uppercase(), "lower-case start: {}", out);
            }
        }
    }
}

// ── Unknown words pass through, capitalization follows the source ─────────

proptest! {
    #[test]
    fn unknown_words_pass_through(
        words in prop::collection::vec("[bcdfghjklmnpqrstvwxz]{3,8}", 1..6)
    ) {
        let text = words.join(" ");
        let out = engine().translate(&text, Style::Casual).unwrap();
        prop_assert_eq!(out, text);
    }

    #[test]
    fn capitalized_source_gives_capitalized_replacement(idx in 0..VOCAB.len()) {
        let word = recase(VOCAB[idx], 2);
        let out = engine().translate(&format!("nah {}", word), Style::Personal).unwrap();
        let second = out.split_whitespace().nth(1).unwrap().to_string();
        prop_assert!(second.chars().next().unwrap().is_uppercase(), "{}", out);

        let out = engine().translate(&format!("nah {}", VOCAB[idx]), Style::Personal).unwrap();
        let second = out.split_whitespace().nth(1).unwrap().to_string();
        prop_assert!(second.chars().next().unwrap().is_lowercase(), "{}", out);
    }
}

// ── Classification is a pure function of text and lexicon ─────────────────

proptest! {
    #[test]
    fn classification_is_deterministic(text in "[a-z ]{0,80}") {
        let lexicon = MemoryLexicon::seeded();
        let first = classify(&lexicon, &text).unwrap();
        let second = classify(&lexicon, &text).unwrap();
        prop_assert_eq!(first, second);
    }
}
