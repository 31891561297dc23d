use std::ops::RangeInclusive;

use log::debug;
use rand::Rng;

use crate::error::{GenerationError, GenerationResult};
use crate::model::config::GenerationConfig;
use crate::model::vocabulary::Vocabulary;

/// Bounded random text generator over a fixed vocabulary.
///
/// # Responsibilities
/// - Validate the configuration before touching the random source
/// - Sample word and sentence counts uniformly within the configured bounds
/// - Draw words uniformly, with replacement, from the vocabulary
/// - Apply paragraph prefixes and separators
///
/// The generator holds no mutable state: every call is a pure function of
/// the configuration and the random source it is given.
#[derive(Clone, Copy, Debug)]
pub struct Generator<'a> {
	vocabulary: Vocabulary<'a>,
}

impl Default for Generator<'static> {
	/// A generator over the built-in Latin vocabulary.
	fn default() -> Self {
		Self::new(Vocabulary::latin())
	}
}

impl<'a> Generator<'a> {
	pub fn new(vocabulary: Vocabulary<'a>) -> Self {
		Self { vocabulary }
	}

	pub fn vocabulary(&self) -> Vocabulary<'a> {
		self.vocabulary
	}

	/// Generates `count` lowercase words separated by single spaces.
	///
	/// No capitalization, no punctuation.
	///
	/// # Errors
	/// Returns `InvalidAmount` if `count` is 0.
	pub fn words<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> GenerationResult<String> {
		if count < 1 {
			return Err(GenerationError::InvalidAmount(count));
		}
		debug!("Generating {count} words");
		Ok(self.sample_words(count, rng).join(" "))
	}

	/// Generates one sentence.
	///
	/// The word count is sampled uniformly in
	/// `[min_words_per_sentence, max_words_per_sentence]`. The first letter is
	/// capitalized and a period is appended.
	///
	/// # Errors
	/// Returns `InvalidRange` if the word bounds are invalid. `amount` and the
	/// sentence bounds are not looked at.
	pub fn sentence<R: Rng + ?Sized>(&self, config: &GenerationConfig, rng: &mut R) -> GenerationResult<String> {
		let words = config.words_per_sentence()?;
		Ok(self.sample_sentence(&words, rng))
	}

	/// Generates `amount` sentences joined by single spaces.
	///
	/// # Errors
	/// Returns `InvalidAmount` or `InvalidRange` (word bounds).
	pub fn sentences<R: Rng + ?Sized>(&self, config: &GenerationConfig, rng: &mut R) -> GenerationResult<String> {
		let amount = config.checked_amount()?;
		let words = config.words_per_sentence()?;
		debug!("Generating {amount} sentences of {words:?} words");

		let sentences: Vec<String> = (0..amount).map(|_| self.sample_sentence(&words, rng)).collect();
		Ok(sentences.join(" "))
	}

	/// Generates one paragraph: a sentence count sampled uniformly in
	/// `[min_sentences_per_paragraph, max_sentences_per_paragraph]`, sentences
	/// joined by single spaces.
	///
	/// Neither prefix nor separator is applied here.
	///
	/// # Errors
	/// Returns `InvalidRange` if the word or sentence bounds are invalid.
	pub fn paragraph<R: Rng + ?Sized>(&self, config: &GenerationConfig, rng: &mut R) -> GenerationResult<String> {
		let words = config.words_per_sentence()?;
		let sentences = config.sentences_per_paragraph()?;
		Ok(self.sample_paragraph(&words, &sentences, rng))
	}

	/// Generates `amount` independent paragraphs.
	///
	/// # Behavior
	/// - Each paragraph resamples its own sentence count.
	/// - Paragraph `i` (0-based) is prefixed with `"{i+1}. "` when numbered,
	///   the literal prefix when one is set, nothing otherwise.
	/// - Paragraphs are joined with the configured separator; no trailing
	///   separator is added.
	///
	/// # Errors
	/// Returns `InvalidAmount` or `InvalidRange`, before any sampling.
	pub fn paragraphs<R: Rng + ?Sized>(&self, config: &GenerationConfig, rng: &mut R) -> GenerationResult<String> {
		let amount = config.checked_amount()?;
		let words = config.words_per_sentence()?;
		let sentences = config.sentences_per_paragraph()?;
		debug!(
			"Generating {amount} paragraphs ({sentences:?} sentences, {words:?} words, prefix {:?})",
			config.line_prefix
		);

		let paragraphs: Vec<String> = (0..amount)
			.map(|i| {
				let paragraph = self.sample_paragraph(&words, &sentences, rng);
				match &config.line_prefix {
					Some(prefix) => format!("{}{paragraph}", prefix.for_index(i)),
					None => paragraph,
				}
			})
			.collect();

		Ok(paragraphs.join(config.paragraph_separator.as_str()))
	}

	fn sample_words<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<&'a str> {
		(0..count).map(|_| self.vocabulary.choose(rng)).collect()
	}

	/// Bounds are assumed valid.
	fn sample_sentence<R: Rng + ?Sized>(&self, words: &RangeInclusive<usize>, rng: &mut R) -> String {
		let count = rng.random_range(words.clone());
		let mut sentence = capitalize(&self.sample_words(count, rng).join(" "));
		sentence.push('.');
		sentence
	}

	/// Bounds are assumed valid.
	fn sample_paragraph<R: Rng + ?Sized>(
		&self,
		words: &RangeInclusive<usize>,
		sentences: &RangeInclusive<usize>,
		rng: &mut R,
	) -> String {
		let count = rng.random_range(sentences.clone());
		let sentences: Vec<String> = (0..count).map(|_| self.sample_sentence(words, rng)).collect();
		sentences.join(" ")
	}
}

/// Uppercases the first character (UTF-8 aware).
fn capitalize(s: &str) -> String {
	let mut chars = s.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}

/// Generates `count` words from the Latin vocabulary with the thread-local RNG.
pub fn generate_words(count: usize) -> GenerationResult<String> {
	Generator::default().words(count, &mut rand::rng())
}

/// Generates one sentence from the Latin vocabulary with the thread-local RNG.
pub fn generate_sentence(config: &GenerationConfig) -> GenerationResult<String> {
	Generator::default().sentence(config, &mut rand::rng())
}

/// Generates `config.amount` sentences with the thread-local RNG.
pub fn generate_sentences(config: &GenerationConfig) -> GenerationResult<String> {
	Generator::default().sentences(config, &mut rand::rng())
}

/// Generates one paragraph with the thread-local RNG.
pub fn generate_paragraph(config: &GenerationConfig) -> GenerationResult<String> {
	Generator::default().paragraph(config, &mut rand::rng())
}

/// Generates `config.amount` paragraphs with the thread-local RNG.
pub fn generate_paragraphs(config: &GenerationConfig) -> GenerationResult<String> {
	Generator::default().paragraphs(config, &mut rand::rng())
}
