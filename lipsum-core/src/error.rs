//! Error types for text generation

use thiserror::Error;

/// Convenience alias used throughout the generator.
pub type GenerationResult<T> = Result<T, GenerationError>;

/// Errors that can occur while validating a configuration or generating text.
///
/// All of them are raised before any sampling happens, so a failed call
/// never produces partial output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
	/// A lower bound exceeds its upper bound, or a bound is zero.
	#[error("Invalid {what} range: min {min}, max {max} (bounds must be positive and min <= max)")]
	InvalidRange {
		what: &'static str,
		min: usize,
		max: usize,
	},

	#[error("Invalid amount: {0} (must be at least 1)")]
	InvalidAmount(usize),

	#[error("Vocabulary must contain at least one word")]
	EmptyVocabulary,

	/// The custom-amount command was run without an amount.
	#[error("This command needs an amount")]
	MissingAmount,
}
