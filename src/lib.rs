// src/lib.rs

pub mod c_api;
pub mod config;
pub mod core;
pub mod error;
pub mod lexicon;
pub mod logging;
pub mod persistence;
pub mod suggest;

pub use crate::core::engine::Humanizer;
pub use crate::core::types::{HumanizeResponse, Style, StyleReport};
pub use crate::error::{HumanizeError, LexiconError, Result};
pub use crate::lexicon::{Lexicon, MemoryLexicon};
