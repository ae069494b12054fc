// src/core/tokens.rs
//! Word-boundary segmentation and the inverse re-spacing join.

/// Splits text into maximal alphanumeric runs plus one token per other
/// non-whitespace character. Whitespace only separates tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut word = String::new();

    for c in text.chars() {
        if c.is_alphanumeric() {
            word.push(c);
            continue;
        }
        if !word.is_empty() {
            tokens.push(std::mem::take(&mut word));
        }
        if !c.is_whitespace() {
            tokens.push(c.to_string());
        }
    }
    if !word.is_empty() {
        tokens.push(word);
    }
    tokens
}

/// True for a non-empty token made only of alphanumeric characters.
pub fn is_word(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphanumeric)
}

fn opens_space(token: &str) -> bool {
    is_word(token) || matches!(token, "," | "." | "!" | "?")
}

/// Joins tokens, putting one space before a word that follows a word or one
/// of `, . ! ?`. Everything else is glued to its predecessor.
pub fn join(tokens: &[String]) -> String {
    let mut result = String::new();
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 && is_word(token) && opens_space(&tokens[i - 1]) {
            result.push(' ');
        }
        result.push_str(token);
    }
    result
}

pub fn starts_uppercase(s: &str) -> bool {
    s.chars().next().is_some_and(char::is_uppercase)
}

/// Upper-cases the first character, leaving the rest as it is.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// First character upper-case, the rest lower-case. Used to build the
/// title-cased lookup key for a token.
pub fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn punctuation_becomes_its_own_token() {
        assert_eq!(tokenize("Halo, dunia!"), toks(&["Halo", ",", "dunia", "!"]));
        assert_eq!(tokenize("langkah-langkah"), toks(&["langkah", "-", "langkah"]));
        assert_eq!(tokenize("  "), Vec::<String>::new());
        assert_eq!(tokenize("a_b"), toks(&["a", "_", "b"]));
    }

    #[test]
    fn join_spaces_words_after_sentence_punctuation() {
        assert_eq!(join(&toks(&["halo", ",", "dunia"])), "halo, dunia");
        assert_eq!(join(&toks(&["ya", "?", "oke", "."])), "ya? oke.");
    }

    #[test]
    fn join_glues_other_punctuation() {
        assert_eq!(join(&toks(&["cara", "-", "cara"])), "cara-cara");
        assert_eq!(join(&toks(&["(", "halo", ")", "dunia"])), "(halo)dunia");
        assert_eq!(join(&[]), "");
    }

    #[test]
    fn capitalization_helpers() {
        assert_eq!(capitalize_first("kamu"), "Kamu");
        assert_eq!(capitalize_first("gUE"), "GUE");
        assert_eq!(title_case("ANDA"), "Anda");
        assert_eq!(capitalize_first(""), "");
        assert!(starts_uppercase("Saya"));
        assert!(!starts_uppercase("1saya"));
    }
}
