use serde::{Deserialize, Serialize};

/// A cursor position in a document.
///
/// Both fields are 0-based; `ch` counts chars, not bytes.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
	pub line: usize,
	pub ch: usize,
}

impl Position {
	pub fn new(line: usize, ch: usize) -> Self {
		Self { line, ch }
	}

	/// Position reached after writing `text` starting at `self`.
	///
	/// Line breaks inside `text` move to the following lines.
	pub fn after(self, text: &str) -> Self {
		match text.rfind('\n') {
			None => Self::new(self.line, self.ch + text.chars().count()),
			Some(last) => Self::new(
				self.line + text.matches('\n').count(),
				text[last + 1..].chars().count(),
			),
		}
	}
}

/// Narrow view of a host editor: enough to insert text at the cursor.
pub trait TextInserter {
	fn cursor(&self) -> Position;

	/// Inserts `text` at `at`, replacing nothing.
	fn replace_range(&mut self, text: &str, at: Position);

	fn set_cursor(&mut self, cursor: Position);
}

/// Inserts `text` at the cursor and moves the cursor past it.
///
/// Returns the new cursor position.
pub fn insert_at_cursor<T: TextInserter + ?Sized>(inserter: &mut T, text: &str) -> Position {
	let cursor = inserter.cursor();
	inserter.replace_range(text, cursor);
	let end = cursor.after(text);
	inserter.set_cursor(end);
	end
}

/// In-memory document with a single cursor.
///
/// Out-of-range positions are clamped: a column past the end of its line
/// goes to the line end, a line past the last goes to the end of the text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextBuffer {
	text: String,
	cursor: Position,
}

impl TextBuffer {
	/// Creates a buffer with the cursor at the very beginning.
	pub fn new(text: impl Into<String>) -> Self {
		Self { text: text.into(), cursor: Position::default() }
	}

	pub fn text(&self) -> &str {
		&self.text
	}

	/// Mutable access for hosts that edit the text directly (widgets).
	pub fn text_mut(&mut self) -> &mut String {
		&mut self.text
	}

	pub fn into_text(self) -> String {
		self.text
	}

	/// Cursor as a char offset from the start of the text.
	pub fn cursor_index(&self) -> usize {
		self.char_index(self.cursor)
	}

	/// Moves the cursor to a char offset (clamped to the text length).
	pub fn set_cursor_index(&mut self, index: usize) {
		self.cursor = self.position_at(index);
	}

	/// Char offset of `pos`, after clamping.
	pub fn char_index(&self, pos: Position) -> usize {
		self.text[..self.byte_offset(pos)].chars().count()
	}

	/// Position of the char offset `index` (clamped to the text length).
	pub fn position_at(&self, index: usize) -> Position {
		let mut pos = Position::default();
		for c in self.text.chars().take(index) {
			if c == '\n' {
				pos.line += 1;
				pos.ch = 0;
			} else {
				pos.ch += 1;
			}
		}
		pos
	}

	fn byte_offset(&self, pos: Position) -> usize {
		let mut line_start = 0;
		for _ in 0..pos.line {
			match self.text[line_start..].find('\n') {
				Some(i) => line_start += i + 1,
				None => return self.text.len(),
			}
		}
		let line_end = self.text[line_start..]
			.find('\n')
			.map_or(self.text.len(), |i| line_start + i);

		self.text[line_start..line_end]
			.char_indices()
			.nth(pos.ch)
			.map_or(line_end, |(i, _)| line_start + i)
	}
}

impl TextInserter for TextBuffer {
	fn cursor(&self) -> Position {
		self.cursor
	}

	fn replace_range(&mut self, text: &str, at: Position) {
		let offset = self.byte_offset(at);
		self.text.insert_str(offset, text);
	}

	fn set_cursor(&mut self, cursor: Position) {
		self.cursor = self.position_at(self.char_index(cursor));
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn position_after_single_line() {
		assert_eq!(Position::new(2, 3).after("abc"), Position::new(2, 6));
		assert_eq!(Position::new(0, 0).after(""), Position::new(0, 0));
	}

	#[test]
	fn position_after_multi_line() {
		assert_eq!(Position::new(1, 4).after("ab\ncd\nxyz"), Position::new(3, 3));
		assert_eq!(Position::new(0, 7).after("ab\n"), Position::new(1, 0));
	}

	#[test]
	fn insert_in_the_middle() {
		let mut buffer = TextBuffer::new("first\nsecond");
		buffer.set_cursor(Position::new(1, 3));
		let end = insert_at_cursor(&mut buffer, "Lorem.\nIpsum. ");
		assert_eq!(buffer.text(), "first\nsecLorem.\nIpsum. ond");
		assert_eq!(end, Position::new(2, 7));
		assert_eq!(buffer.cursor(), end);
		assert_eq!(buffer.into_text(), "first\nsecLorem.\nIpsum. ond");
	}

	#[test]
	fn cursor_is_clamped() {
		let mut buffer = TextBuffer::new("ab\ncd");
		buffer.set_cursor(Position::new(0, 10));
		assert_eq!(buffer.cursor(), Position::new(0, 2));
		buffer.set_cursor(Position::new(5, 0));
		assert_eq!(buffer.cursor(), Position::new(1, 2));
		buffer.set_cursor_index(100);
		assert_eq!(buffer.cursor_index(), 5);
	}

	#[test]
	fn char_offsets_are_utf8_aware() {
		let mut buffer = TextBuffer::new("héllo\nwörld");
		buffer.set_cursor_index(8);
		assert_eq!(buffer.cursor(), Position::new(1, 2));
		insert_at_cursor(&mut buffer, "X");
		assert_eq!(buffer.text(), "héllo\nwöXrld");
		assert_eq!(buffer.cursor_index(), 9);
	}
}
