//! Placeholder ("lorem ipsum") text generation library.
//!
//! This crate provides a bounded random text generator including:
//! - A fixed, read-only Latin vocabulary
//! - Sentence, paragraph and multi-paragraph generation with
//!   caller-controlled bounds and formatting
//! - Host-agnostic glue (commands, text insertion, settings storage)
//!   so an editor can drive the generator without the generator
//!   knowing anything about the editor
//!
//! The generator performs no I/O. Every call is a pure function of its
//! configuration and the random source it is given.

/// Errors raised by configuration validation and plugin glue.
pub mod error;

/// Generation configuration, vocabulary and the text generator itself.
pub mod model;

/// Editor-facing glue: commands, cursor insertion and settings storage.
///
/// Hosts implement the traits in this module; nothing here depends on a
/// concrete editor.
pub mod plugin;

pub use error::GenerationError;
pub use model::config::{GenerationConfig, LinePrefix, ParagraphSeparator};
pub use model::generator::{
	generate_paragraph, generate_paragraphs, generate_sentence, generate_sentences, generate_words,
	Generator,
};
pub use model::vocabulary::Vocabulary;
