//! Editor-facing glue around the generator.
//!
//! The host editor provides:
//! - a command dispatcher, which calls `LoremIpsumPlugin::run`
//! - a text surface, through `TextInserter`
//! - key/value persistence, through `SettingsStore`
//! - a modal dialog collecting the amount for
//!   `Command::GenerateParagraphCustomAmount`

use log::{info, warn};
use rand::Rng;
use thiserror::Error;

use crate::error::{GenerationError, GenerationResult};
use crate::model::generator::Generator;

/// Command table.
pub mod command;

/// Cursor positions, the `TextInserter` trait and an in-memory buffer.
pub mod editor;

/// Persisted settings and the `SettingsStore` trait.
pub mod settings;

pub use command::Command;
pub use editor::{insert_at_cursor, Position, TextBuffer, TextInserter};
pub use settings::{MemoryStore, PluginSettings, SettingsStore};

/// Errors raised by the plugin glue.
///
/// `E` is the error type of the host's settings store.
#[derive(Error, Debug)]
pub enum PluginError<E: std::error::Error + 'static> {
	#[error(transparent)]
	Generation(#[from] GenerationError),

	#[error("Settings store error: {0}")]
	Store(#[source] E),
}

/// Plugin state: the loaded settings and the store they persist to.
///
/// # Responsibilities
/// - Load settings on startup, completing absent fields with defaults
/// - Validate and save settings changes
/// - Turn a `Command` into generated text and insert it at the cursor
#[derive(Debug)]
pub struct LoremIpsumPlugin<S: SettingsStore> {
	store: S,
	settings: PluginSettings,
	generator: Generator<'static>,
}

impl<S: SettingsStore> LoremIpsumPlugin<S> {
	/// Loads the settings from `store`.
	///
	/// Stored settings are kept as they are even when their bounds are
	/// invalid; commands will then report the error instead of producing text.
	///
	/// # Errors
	/// Returns `Store` if the store fails to load.
	pub fn load(store: S) -> Result<Self, PluginError<S::Error>> {
		let settings = store.load_data().map_err(PluginError::Store)?.unwrap_or_default();
		if let Err(e) = settings.validate() {
			warn!("Stored settings are invalid: {e}");
		}
		Ok(Self { store, settings, generator: Generator::default() })
	}

	pub fn settings(&self) -> &PluginSettings {
		&self.settings
	}

	pub fn store(&self) -> &S {
		&self.store
	}

	/// Mutable access for hosts whose store needs flushing.
	pub fn store_mut(&mut self) -> &mut S {
		&mut self.store
	}

	pub fn into_store(self) -> S {
		self.store
	}

	/// Applies `change` to a copy of the settings, validates and saves it.
	///
	/// On error the current settings are left untouched.
	pub fn update_settings<F>(&mut self, change: F) -> Result<(), PluginError<S::Error>>
	where
		F: FnOnce(&mut PluginSettings),
	{
		let mut settings = self.settings.clone();
		change(&mut settings);
		settings.validate()?;

		self.store.save_data(&settings).map_err(PluginError::Store)?;
		info!("Settings saved");
		self.settings = settings;
		Ok(())
	}

	/// Generates the text for `command` without inserting it.
	///
	/// `amount` is required by `GenerateParagraphCustomAmount` and ignored by
	/// the other commands, which always produce exactly one item.
	pub fn generate<R: Rng + ?Sized>(
		&self,
		command: Command,
		amount: Option<usize>,
		rng: &mut R,
	) -> GenerationResult<String> {
		match command {
			Command::GenerateSentence => self.generator.sentences(&self.settings.generation_config(1), rng),
			Command::GenerateParagraph => self.generator.paragraphs(&self.settings.generation_config(1), rng),
			Command::GenerateParagraphCustomAmount => {
				let amount = amount.ok_or(GenerationError::MissingAmount)?;
				self.generator.paragraphs(&self.settings.generation_config(amount), rng)
			}
		}
	}

	/// Runs `command` against `inserter` with the thread-local RNG.
	///
	/// Returns the inserted text.
	pub fn run<T: TextInserter + ?Sized>(
		&self,
		command: Command,
		inserter: &mut T,
		amount: Option<usize>,
	) -> GenerationResult<String> {
		self.run_with_rng(command, inserter, amount, &mut rand::rng())
	}

	/// Same as `run`, with an explicit random source.
	pub fn run_with_rng<T, R>(
		&self,
		command: Command,
		inserter: &mut T,
		amount: Option<usize>,
		rng: &mut R,
	) -> GenerationResult<String>
	where
		T: TextInserter + ?Sized,
		R: Rng + ?Sized,
	{
		let text = self.generate(command, amount, rng)?;
		let end = insert_at_cursor(inserter, &text);
		info!("{} ({}): inserted {} chars, cursor now at {:?}", command.id(), command.name(), text.chars().count(), end);
		Ok(text)
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;
	use crate::model::config::LinePrefix;

	fn plugin() -> LoremIpsumPlugin<MemoryStore> {
		LoremIpsumPlugin::load(MemoryStore::default()).unwrap()
	}

	#[test]
	fn load_without_data_uses_defaults() {
		assert_eq!(plugin().settings(), &PluginSettings::default());
	}

	#[test]
	fn load_keeps_stored_settings() {
		let stored = PluginSettings { line_prefix: Some(LinePrefix::Numbered), ..PluginSettings::default() };
		let plugin = LoremIpsumPlugin::load(MemoryStore::with_data(stored.clone())).unwrap();
		assert_eq!(plugin.settings(), &stored);
	}

	#[test]
	fn update_settings_saves_valid_changes() {
		let mut plugin = plugin();
		plugin.update_settings(|s| s.max_words_per_sentence = 6).unwrap();
		assert_eq!(plugin.settings().max_words_per_sentence, 6);
		assert_eq!(plugin.store().data().map(|s| s.max_words_per_sentence), Some(6));
	}

	#[test]
	fn update_settings_rejects_invalid_changes() {
		let mut plugin = plugin();
		let result = plugin.update_settings(|s| s.min_words_per_sentence = 20);
		assert!(matches!(result, Err(PluginError::Generation(GenerationError::InvalidRange { .. }))));
		assert_eq!(plugin.settings(), &PluginSettings::default());
		assert!(plugin.store().data().is_none());
	}

	#[test]
	fn sentence_command_inserts_one_sentence() {
		let plugin = plugin();
		let mut buffer = TextBuffer::new("Start: ");
		buffer.set_cursor_index(7);

		let text = plugin
			.run_with_rng(Command::GenerateSentence, &mut buffer, None, &mut StdRng::seed_from_u64(3))
			.unwrap();
		assert_eq!(text.matches('.').count(), 1);
		assert_eq!(buffer.text(), format!("Start: {text}"));
		assert_eq!(buffer.cursor_index(), buffer.text().chars().count());
	}

	#[test]
	fn custom_amount_command() {
		let plugin = plugin();
		let mut buffer = TextBuffer::default();
		let mut rng = StdRng::seed_from_u64(3);

		assert_eq!(
			plugin.run_with_rng(Command::GenerateParagraphCustomAmount, &mut buffer, None, &mut rng),
			Err(GenerationError::MissingAmount)
		);
		assert_eq!(
			plugin.run_with_rng(Command::GenerateParagraphCustomAmount, &mut buffer, Some(0), &mut rng),
			Err(GenerationError::InvalidAmount(0))
		);
		assert_eq!(buffer.text(), "");

		let text = plugin
			.run_with_rng(Command::GenerateParagraphCustomAmount, &mut buffer, Some(4), &mut rng)
			.unwrap();
		assert_eq!(text.split('\n').count(), 4);
		assert_eq!(buffer.cursor().line, 3);
	}

	#[test]
	fn paragraph_command_ignores_amount() {
		let plugin = plugin();
		let text = plugin
			.generate(Command::GenerateParagraph, Some(5), &mut StdRng::seed_from_u64(9))
			.unwrap();
		assert!(!text.contains('\n'));
	}
}
