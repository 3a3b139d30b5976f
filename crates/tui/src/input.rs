//! Single-line query input backed by `tui-textarea`.

use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

/// The search box.
pub struct SearchInput<'a> {
	textarea: TextArea<'a>,
	placeholder: Option<(String, Style)>,
}

impl<'a> SearchInput<'a> {
	#[must_use]
	pub fn new(initial: impl Into<String>) -> Self {
		let mut input = Self {
			textarea: TextArea::default(),
			placeholder: None,
		};
		input.set_text(initial);
		input
	}

	/// Current query text.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or("")
	}

	/// Replace the query text and move the cursor to its end.
	pub fn set_text(&mut self, text: impl Into<String>) {
		let mut textarea = TextArea::new(vec![text.into()]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(CursorMove::End);
		if let Some((text, style)) = &self.placeholder {
			textarea.set_placeholder_text(text.clone());
			textarea.set_placeholder_style(*style);
		}
		self.textarea = textarea;
	}

	/// Apply an editing key. Returns `true` when the text changed.
	///
	/// Keys that would split the line are ignored.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		if matches!(key.code, KeyCode::Enter | KeyCode::Tab | KeyCode::BackTab) {
			return false;
		}
		let before = self.text().to_string();
		self.textarea.input(key);
		if self.textarea.lines().len() > 1 {
			self.set_text(before);
			return false;
		}
		self.text() != before
	}

	/// Apply a placeholder shown while the input is empty.
	pub fn set_placeholder(&mut self, text: impl Into<String>, style: Style) {
		let text = text.into();
		self.textarea.set_placeholder_text(text.clone());
		self.textarea.set_placeholder_style(style);
		self.placeholder = Some((text, style));
	}

	pub(crate) fn widget(&self) -> &TextArea<'a> {
		&self.textarea
	}
}

#[cfg(test)]
mod tests {
	use ratatui::crossterm::event::KeyModifiers;

	use super::*;

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	#[test]
	fn typing_appends_and_reports_changes() {
		let mut input = SearchInput::new("str");
		assert!(input.input(key(KeyCode::Char('i'))));
		assert_eq!(input.text(), "stri");

		assert!(input.input(key(KeyCode::Backspace)));
		assert_eq!(input.text(), "str");
	}

	#[test]
	fn enter_never_splits_the_line() {
		let mut input = SearchInput::new("stripe");
		assert!(!input.input(key(KeyCode::Enter)));
		assert_eq!(input.text(), "stripe");
	}

	#[test]
	fn set_text_replaces_query() {
		let mut input = SearchInput::new("");
		input.set_text("datadog");
		assert_eq!(input.text(), "datadog");
		assert!(input.input(key(KeyCode::Char('!'))));
		assert_eq!(input.text(), "datadog!");
	}
}
