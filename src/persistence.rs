// File: src/persistence.rs
use crate::core::types::{LexiconEntry, PatternEntry, Translations};
use crate::error::PersistenceError;
use crate::lexicon::MemoryLexicon;
use serde::{Deserialize, Deserializer, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{info, warn};

/// Writes `lexicon` as a bincode snapshot. The data goes to a temp file in
/// the target directory first and is then renamed over `path`.
pub fn save_snapshot(lexicon: &MemoryLexicon, path: &Path) -> Result<(), PersistenceError> {
    let temp_file = temp_file_for(path)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        bincode::serialize_into(&mut writer, lexicon)?;
        writer.flush()?;
    }
    temp_file.persist(path)?;
    info!(path = %path.display(), words = lexicon.len(), "lexicon snapshot saved");
    Ok(())
}

pub fn load_snapshot(path: &Path) -> Result<MemoryLexicon, PersistenceError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let lexicon: MemoryLexicon = bincode::deserialize_from(reader)?;
    info!(path = %path.display(), words = lexicon.len(), "lexicon snapshot loaded");
    Ok(lexicon)
}

/// Explicit start-up step: load the snapshot at `path`, or fall back to the
/// built-in lexicon when there is none and `seed_if_missing` is set.
pub fn open_or_seed(path: &Path, seed_if_missing: bool) -> Result<MemoryLexicon, PersistenceError> {
    match load_snapshot(path) {
        Ok(lexicon) => Ok(lexicon),
        Err(PersistenceError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound && seed_if_missing => {
            warn!(path = %path.display(), "no lexicon snapshot, using built-in lexicon");
            Ok(MemoryLexicon::seeded())
        }
        Err(e) => Err(e),
    }
}

fn temp_file_for(path: &Path) -> Result<NamedTempFile, PersistenceError> {
    let parent_dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;
    Ok(NamedTempFile::new_in(parent_dir)?)
}

// --- JSON documents: the hand-editable form of a lexicon ---

#[derive(Serialize)]
struct ExportDocument<'a> {
    words: &'a [LexiconEntry],
    patterns: &'a [PatternEntry],
}

#[derive(Deserialize)]
struct ImportDocument {
    #[serde(default)]
    words: Vec<ImportEntry>,
    #[serde(default)]
    patterns: Vec<PatternEntry>,
}

#[derive(Deserialize)]
struct ImportEntry {
    #[serde(alias = "word")]
    key: String,
    category: String,
    translations: ImportTranslations,
}

#[derive(Deserialize)]
struct ImportTranslations {
    #[serde(deserialize_with = "one_or_many")]
    casual: Vec<String>,
    #[serde(deserialize_with = "one_or_many")]
    personal: Vec<String>,
}

/// Accepts either `"gue"` or `["gue", "gw"]`.
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(s) => vec![s],
        OneOrMany::Many(v) => v,
    })
}

/// Builds a lexicon from a JSON document. Duplicate keys keep the first
/// entry; an entry with an empty translation list fails the whole import.
pub fn import_json_str(json: &str) -> Result<MemoryLexicon, PersistenceError> {
    let doc: ImportDocument = serde_json::from_str(json)?;
    let mut lexicon = MemoryLexicon::new();
    for entry in doc.words {
        lexicon.insert_entry(LexiconEntry {
            key: entry.key,
            category: entry.category,
            translations: Translations {
                casual: entry.translations.casual,
                personal: entry.translations.personal,
            },
        })?;
    }
    for p in doc.patterns {
        lexicon.add_pattern(&p.pattern_type, &p.formal_pattern, &p.casual_pattern, p.examples);
    }
    Ok(lexicon)
}

pub fn import_json(path: &Path) -> Result<MemoryLexicon, PersistenceError> {
    let json = fs::read_to_string(path)?;
    let lexicon = import_json_str(&json)?;
    info!(path = %path.display(), words = lexicon.len(), "lexicon imported");
    Ok(lexicon)
}

pub fn export_json(lexicon: &MemoryLexicon, path: &Path) -> Result<(), PersistenceError> {
    let doc = ExportDocument {
        words: lexicon.entries(),
        patterns: lexicon.patterns(),
    };
    let temp_file = temp_file_for(path)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        serde_json::to_writer_pretty(&mut writer, &doc)?;
        writer.flush()?;
    }
    temp_file.persist(path)?;
    Ok(())
}
