use rand::Rng;
use rand::seq::IndexedRandom;

use crate::error::{GenerationError, GenerationResult};

/// The classic "lorem ipsum dolor sit amet" word list.
pub const LATIN_WORDS: &[&str] = &[
	"ad", "adipisicing", "aliqua", "aliquip", "amet", "anim", "aute", "cillum",
	"commodo", "consectetur", "consequat", "culpa", "cupidatat", "deserunt", "do", "dolor",
	"dolore", "duis", "ea", "eiusmod", "elit", "enim", "esse", "est",
	"et", "eu", "ex", "excepteur", "exercitation", "fugiat", "id", "in",
	"incididunt", "ipsum", "irure", "labore", "laboris", "laborum", "lorem", "magna",
	"minim", "mollit", "nisi", "non", "nostrud", "nulla", "occaecat", "officia",
	"pariatur", "proident", "qui", "quis", "reprehenderit", "sint", "sit", "sunt",
	"tempor", "ullamco", "ut", "velit", "veniam", "voluptate",
];

/// Ordered, read-only sampling universe shared by every generation call.
///
/// # Invariants
/// - Never empty
/// - Never mutated after construction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Vocabulary<'a> {
	words: &'a [&'a str],
}

impl Vocabulary<'static> {
	/// Built-in Latin vocabulary.
	pub const fn latin() -> Self {
		Self { words: LATIN_WORDS }
	}
}

impl Default for Vocabulary<'static> {
	fn default() -> Self {
		Self::latin()
	}
}

impl<'a> Vocabulary<'a> {
	/// Wraps a custom word list.
	///
	/// # Errors
	/// Returns `EmptyVocabulary` if `words` is empty.
	pub fn new(words: &'a [&'a str]) -> GenerationResult<Self> {
		if words.is_empty() {
			return Err(GenerationError::EmptyVocabulary);
		}
		Ok(Self { words })
	}

	pub fn words(&self) -> &'a [&'a str] {
		self.words
	}

	pub fn len(&self) -> usize {
		self.words.len()
	}

	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	pub fn contains(&self, word: &str) -> bool {
		self.words.iter().any(|w| *w == word)
	}

	/// Draws one word uniformly (with replacement).
	pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &'a str {
		// Non-empty by construction
		self.words.choose(rng).copied().unwrap_or_default()
	}
}
