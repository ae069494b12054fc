// src/core/types.rs
use crate::error::HumanizeError;
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// The register a rewrite targets. Serialized lower case, parsed in any case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Casual,
    Personal,
}

impl Style {
    pub fn as_str(self) -> &'static str {
        match self {
            Style::Casual => "casual",
            Style::Personal => "personal",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Style {
    type Err = HumanizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "casual" => Ok(Style::Casual),
            "personal" => Ok(Style::Personal),
            other => Err(HumanizeError::MalformedInput(format!(
                "unknown style '{}', expected 'casual' or 'personal'",
                other
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for Style {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// Well-known lexicon categories. Categories are plain strings so new ones
/// can be added by data alone.
pub mod category {
    pub const PRONOUNS: &str = "pronouns";
    pub const PHRASES: &str = "phrases";
    pub const VERBS: &str = "verbs";
    pub const NOUNS: &str = "nouns";
    pub const PREPOSITIONS: &str = "prepositions";
    pub const CONJUNCTIONS: &str = "conjunctions";
    pub const ADJECTIVES: &str = "adjectives";
    pub const CONTEXT_MARKERS: &str = "context_markers";
    pub const FORMAL_CONTEXT: &str = "formal_context";
    pub const CASUAL_CONTEXT: &str = "casual_context";
}

/// Candidate surface forms for both styles. The first candidate of each list
/// is the one the engine uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translations {
    pub casual: Vec<String>,
    pub personal: Vec<String>,
}

impl Translations {
    pub fn new<C, P>(casual: C, personal: P) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        Self {
            casual: casual.into_iter().map(Into::into).collect(),
            personal: personal.into_iter().map(Into::into).collect(),
        }
    }

    pub fn candidates(&self, style: Style) -> &[String] {
        match style {
            Style::Casual => &self.casual,
            Style::Personal => &self.personal,
        }
    }

    /// The preferred substitution for `style`.
    pub fn preferred(&self, style: Style) -> Option<&str> {
        self.candidates(style).first().map(String::as_str)
    }

    pub fn is_complete(&self) -> bool {
        !self.casual.is_empty() && !self.personal.is_empty()
    }
}

/// A formal word or phrase and its conversational replacements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconEntry {
    #[serde(alias = "word")]
    pub key: String,
    pub category: String,
    pub translations: Translations,
}

/// A paired formal/casual sentence starter or transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternEntry {
    pub pattern_type: String,
    pub formal_pattern: String,
    pub casual_pattern: String,
    #[serde(default)]
    pub examples: Vec<String>,
}

/// Optional criteria for pattern lookups. An empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternFilter {
    pub pattern_type: Option<String>,
    pub formal_pattern: Option<String>,
}

impl PatternFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn by_type(pattern_type: impl Into<String>) -> Self {
        Self {
            pattern_type: Some(pattern_type.into()),
            formal_pattern: None,
        }
    }

    pub fn matches(&self, pattern: &PatternEntry) -> bool {
        self.pattern_type
            .as_deref()
            .map_or(true, |t| t == pattern.pattern_type)
            && self
                .formal_pattern
                .as_deref()
                .map_or(true, |f| f == pattern.formal_pattern)
    }
}

/// One word that changed between input and output, paired by position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordChange {
    pub original: String,
    pub humanized: String,
    /// Index within the change list, not within the text.
    pub position: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HumanizeResponse {
    pub original: String,
    pub humanized: String,
    pub detected_style: Style,
    pub changes: Vec<WordChange>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleReport {
    pub text: String,
    pub style: Style,
    pub confidence: Confidence,
}
