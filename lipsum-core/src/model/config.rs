use std::borrow::Cow;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::{GenerationError, GenerationResult};

/// Paragraphs generated when no amount is given.
pub const DEFAULT_AMOUNT: usize = 1;
/// Default bounds on words per sentence.
pub const DEFAULT_WORDS_PER_SENTENCE: RangeInclusive<usize> = 4..=16;
/// Default bounds on sentences per paragraph.
pub const DEFAULT_SENTENCES_PER_PARAGRAPH: RangeInclusive<usize> = 1..=5;

/// String placed between two consecutive paragraphs.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ParagraphSeparator {
	/// `"\n"`
	#[default]
	SingleNewline,
	/// `"\n\n"`, an empty line between paragraphs.
	BlankLine,
}

impl ParagraphSeparator {
	pub fn as_str(self) -> &'static str {
		match self {
			ParagraphSeparator::SingleNewline => "\n",
			ParagraphSeparator::BlankLine => "\n\n",
		}
	}
}

/// Marker prepended to every generated paragraph.
///
/// `Numbered` and `Literal("num")` are distinct: a literal prefix is always
/// written verbatim, numbering is only ever requested explicitly.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LinePrefix {
	/// `"1. "`, `"2. "`, ...
	Numbered,
	/// Prepended as-is, e.g. `"- "` or `"> "`.
	Literal(String),
}

impl LinePrefix {
	/// Returns the marker for the paragraph at `index` (0-based).
	pub fn for_index(&self, index: usize) -> Cow<'_, str> {
		match self {
			LinePrefix::Numbered => Cow::Owned(format!("{}. ", index + 1)),
			LinePrefix::Literal(s) => Cow::Borrowed(s.as_str()),
		}
	}
}

/// Parameters of a generation call.
///
/// # Invariants (checked by `validate*`, never clamped)
/// - `amount >= 1`
/// - `1 <= min_words_per_sentence <= max_words_per_sentence`
/// - `1 <= min_sentences_per_paragraph <= max_sentences_per_paragraph`
///
/// Fields missing from serialized data take the values of `Default`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct GenerationConfig {
	/// Number of paragraphs (or sentences) to generate.
	pub amount: usize,
	pub min_words_per_sentence: usize,
	pub max_words_per_sentence: usize,
	pub min_sentences_per_paragraph: usize,
	pub max_sentences_per_paragraph: usize,
	pub paragraph_separator: ParagraphSeparator,
	pub line_prefix: Option<LinePrefix>,
}

impl Default for GenerationConfig {
	fn default() -> Self {
		Self {
			amount: DEFAULT_AMOUNT,
			min_words_per_sentence: *DEFAULT_WORDS_PER_SENTENCE.start(),
			max_words_per_sentence: *DEFAULT_WORDS_PER_SENTENCE.end(),
			min_sentences_per_paragraph: *DEFAULT_SENTENCES_PER_PARAGRAPH.start(),
			max_sentences_per_paragraph: *DEFAULT_SENTENCES_PER_PARAGRAPH.end(),
			paragraph_separator: ParagraphSeparator::default(),
			line_prefix: None,
		}
	}
}

impl GenerationConfig {
	pub fn with_amount(mut self, amount: usize) -> Self {
		self.amount = amount;
		self
	}

	pub fn with_words_per_sentence(mut self, min: usize, max: usize) -> Self {
		self.min_words_per_sentence = min;
		self.max_words_per_sentence = max;
		self
	}

	pub fn with_sentences_per_paragraph(mut self, min: usize, max: usize) -> Self {
		self.min_sentences_per_paragraph = min;
		self.max_sentences_per_paragraph = max;
		self
	}

	pub fn with_separator(mut self, separator: ParagraphSeparator) -> Self {
		self.paragraph_separator = separator;
		self
	}

	pub fn with_prefix(mut self, prefix: Option<LinePrefix>) -> Self {
		self.line_prefix = prefix;
		self
	}

	/// Inclusive word-count range, once validated.
	pub fn words_per_sentence(&self) -> GenerationResult<RangeInclusive<usize>> {
		checked_range("words per sentence", self.min_words_per_sentence, self.max_words_per_sentence)
	}

	/// Inclusive sentence-count range, once validated.
	pub fn sentences_per_paragraph(&self) -> GenerationResult<RangeInclusive<usize>> {
		checked_range(
			"sentences per paragraph",
			self.min_sentences_per_paragraph,
			self.max_sentences_per_paragraph,
		)
	}

	/// Returns `amount` if it is at least 1.
	pub fn checked_amount(&self) -> GenerationResult<usize> {
		if self.amount < 1 {
			return Err(GenerationError::InvalidAmount(self.amount));
		}
		Ok(self.amount)
	}

	/// Checks every invariant at once.
	pub fn validate(&self) -> GenerationResult<()> {
		self.checked_amount()?;
		self.words_per_sentence()?;
		self.sentences_per_paragraph()?;
		Ok(())
	}
}

fn checked_range(what: &'static str, min: usize, max: usize) -> GenerationResult<RangeInclusive<usize>> {
	if min == 0 || max == 0 || min > max {
		return Err(GenerationError::InvalidRange { what, min, max });
	}
	Ok(min..=max)
}
