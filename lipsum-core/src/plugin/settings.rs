use std::convert::Infallible;

use serde::{Deserialize, Serialize};

use crate::error::GenerationResult;
use crate::model::config::{GenerationConfig, LinePrefix, ParagraphSeparator};

/// User settings persisted by the host between sessions.
///
/// Holds every `GenerationConfig` field except `amount`, which each command
/// decides for itself. Fields absent from stored data take the defaults of
/// `GenerationConfig::default`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct PluginSettings {
	pub min_words_per_sentence: usize,
	pub max_words_per_sentence: usize,
	pub min_sentences_per_paragraph: usize,
	pub max_sentences_per_paragraph: usize,
	pub paragraph_separator: ParagraphSeparator,
	pub line_prefix: Option<LinePrefix>,
}

impl Default for PluginSettings {
	fn default() -> Self {
		Self::from(&GenerationConfig::default())
	}
}

impl From<&GenerationConfig> for PluginSettings {
	fn from(config: &GenerationConfig) -> Self {
		Self {
			min_words_per_sentence: config.min_words_per_sentence,
			max_words_per_sentence: config.max_words_per_sentence,
			min_sentences_per_paragraph: config.min_sentences_per_paragraph,
			max_sentences_per_paragraph: config.max_sentences_per_paragraph,
			paragraph_separator: config.paragraph_separator,
			line_prefix: config.line_prefix.clone(),
		}
	}
}

impl PluginSettings {
	/// Builds the configuration of a generation call producing `amount` items.
	pub fn generation_config(&self, amount: usize) -> GenerationConfig {
		GenerationConfig {
			amount,
			min_words_per_sentence: self.min_words_per_sentence,
			max_words_per_sentence: self.max_words_per_sentence,
			min_sentences_per_paragraph: self.min_sentences_per_paragraph,
			max_sentences_per_paragraph: self.max_sentences_per_paragraph,
			paragraph_separator: self.paragraph_separator,
			line_prefix: self.line_prefix.clone(),
		}
	}

	/// Checks the word and sentence bounds.
	pub fn validate(&self) -> GenerationResult<()> {
		self.generation_config(1).validate()
	}
}

/// Host-provided key/value persistence for `PluginSettings`.
pub trait SettingsStore {
	type Error: std::error::Error + 'static;

	/// Returns the stored settings, or `None` if nothing was saved yet.
	fn load_data(&self) -> Result<Option<PluginSettings>, Self::Error>;

	fn save_data(&mut self, settings: &PluginSettings) -> Result<(), Self::Error>;
}

/// Settings store that keeps the last saved value in memory.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
	data: Option<PluginSettings>,
}

impl MemoryStore {
	pub fn with_data(settings: PluginSettings) -> Self {
		Self { data: Some(settings) }
	}

	pub fn data(&self) -> Option<&PluginSettings> {
		self.data.as_ref()
	}
}

impl SettingsStore for MemoryStore {
	type Error = Infallible;

	fn load_data(&self) -> Result<Option<PluginSettings>, Self::Error> {
		Ok(self.data.clone())
	}

	fn save_data(&mut self, settings: &PluginSettings) -> Result<(), Self::Error> {
		self.data = Some(settings.clone());
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::GenerationError;

	#[test]
	fn defaults_match_generation_defaults() {
		let settings = PluginSettings::default();
		assert_eq!(settings.generation_config(1), GenerationConfig::default());
	}

	#[test]
	fn partial_data_is_completed_with_defaults() {
		let settings: PluginSettings =
			serde_json::from_str(r#"{"line_prefix": {"literal": "- "}, "min_words_per_sentence": 2}"#).unwrap();
		assert_eq!(settings.min_words_per_sentence, 2);
		assert_eq!(settings.max_words_per_sentence, 16);
		assert_eq!(settings.paragraph_separator, ParagraphSeparator::SingleNewline);
		assert_eq!(settings.line_prefix, Some(LinePrefix::Literal("- ".to_owned())));
	}

	#[test]
	fn validate_checks_bounds() {
		let settings = PluginSettings { min_sentences_per_paragraph: 6, ..PluginSettings::default() };
		assert!(matches!(settings.validate(), Err(GenerationError::InvalidRange { .. })));
	}

	#[test]
	fn memory_store_keeps_last_save() {
		let mut store = MemoryStore::default();
		assert_eq!(store.load_data(), Ok(None));

		let settings = PluginSettings { max_words_per_sentence: 5, ..PluginSettings::default() };
		store.save_data(&settings).unwrap();
		assert_eq!(store.load_data(), Ok(Some(settings)));
	}
}
