use std::fmt;

/// Editor commands the plugin registers with its host.
///
/// Ids are stable: hosts may persist them (hotkeys, menus).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
	/// One sentence at the cursor.
	GenerateSentence,
	/// One paragraph at the cursor.
	GenerateParagraph,
	/// Asks the user how many paragraphs, then inserts them.
	GenerateParagraphCustomAmount,
}

impl Command {
	pub const ALL: [Command; 3] = [
		Command::GenerateSentence,
		Command::GenerateParagraph,
		Command::GenerateParagraphCustomAmount,
	];

	pub fn id(self) -> &'static str {
		match self {
			Command::GenerateSentence => "generate-sentence",
			Command::GenerateParagraph => "generate-paragraph",
			Command::GenerateParagraphCustomAmount => "generate-paragraph-custom-amount",
		}
	}

	/// Human readable name, as shown in a command palette.
	pub fn name(self) -> &'static str {
		match self {
			Command::GenerateSentence => "Generate a sentence",
			Command::GenerateParagraph => "Generate a paragraph",
			Command::GenerateParagraphCustomAmount => "Generate a custom amount of paragraphs",
		}
	}

	pub fn from_id(id: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|c| c.id() == id)
	}

	/// Whether the host must collect an amount (modal dialog) before running.
	pub fn needs_amount(self) -> bool {
		matches!(self, Command::GenerateParagraphCustomAmount)
	}
}

impl fmt::Display for Command {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}
