use anyhow::Result;
use atlas_core::{DirectoryOutcome, ViewMode};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::App;

impl App<'_> {
	/// Process a keyboard event and return a result if the user exits.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Result<Option<DirectoryOutcome>> {
		if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
			return Ok(Some(self.cancel()));
		}
		match self.mode() {
			ViewMode::List => Ok(self.handle_list_key(key)),
			ViewMode::Detail => Ok(self.handle_detail_key(key)),
		}
	}

	fn handle_list_key(&mut self, key: KeyEvent) -> Option<DirectoryOutcome> {
		match key.code {
			KeyCode::Esc => return Some(self.cancel()),
			KeyCode::Enter => self.open_highlighted(),
			KeyCode::Up => self.move_selection(-1),
			KeyCode::Down => self.move_selection(1),
			KeyCode::PageUp => self.move_selection(-10),
			KeyCode::PageDown => self.move_selection(10),
			KeyCode::Tab => self.cycle_category(true),
			KeyCode::BackTab => self.cycle_category(false),
			KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				self.cycle_recent();
			}
			_ => {
				if self.search_input.input(key) {
					self.recent_cursor = None;
					self.refresh_results();
				}
			}
		}
		None
	}

	fn handle_detail_key(&mut self, key: KeyEvent) -> Option<DirectoryOutcome> {
		match key.code {
			KeyCode::Esc | KeyCode::Backspace | KeyCode::Left => self.close_detail(),
			KeyCode::Up => self.move_related(-1),
			KeyCode::Down => self.move_related(1),
			KeyCode::Enter => self.open_related(),
			KeyCode::Char('y') => return self.accept(),
			KeyCode::Char('q') => return Some(self.cancel()),
			_ => {}
		}
		None
	}
}
