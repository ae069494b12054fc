// src/core/mod.rs
pub mod context;
pub mod engine;
pub mod finisher;
pub mod rewriter;
pub mod tokens;
pub mod types;
