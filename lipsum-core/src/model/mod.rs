//! Top-level module for the placeholder text generator.
//!
//! This module provides:
//! - The generation configuration (`GenerationConfig`) and its formatting options
//! - The fixed word list used as the sampling universe (`Vocabulary`)
//! - The bounded random generator (`Generator`)

/// Generation parameters: amount, word and sentence bounds, separators, prefixes.
///
/// Defaults are enumerated once, in `GenerationConfig::default`.
pub mod config;

/// Bounded random generation of words, sentences and paragraphs.
pub mod generator;

/// Read-only word lists.
pub mod vocabulary;
