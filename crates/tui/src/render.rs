use atlas_core::ViewMode;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin, Rect};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::App;
use crate::components::rows::{RowContext, build_list_rows, build_related_rows};
use crate::components::tables::{HIGHLIGHT_SYMBOL, TABLE_COLUMN_SPACING};
use crate::components::{
	DetailContext, InputContext, ProgressState, TableSpec, render_detail, render_input,
	render_table,
};
use crate::loading::LoadState;

const NAME_WIDTH: u16 = 24;
const CATEGORY_WIDTH: u16 = 18;
const SCORE_WIDTH: u16 = 5;

impl App<'_> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});
		let [headline_area, input_area, filter_area, body_area, hints_area] = Layout::vertical([
			Constraint::Length(1),
			Constraint::Length(1),
			Constraint::Length(1),
			Constraint::Min(3),
			Constraint::Length(1),
		])
		.areas(area);

		frame.render_widget(
			Line::styled(self.ui.headline(self.directory.len()), self.style.theme.section_style()),
			headline_area,
		);
		self.render_prompt(frame, input_area);
		frame.render_widget(self.filter_line(), filter_area);

		match self.mode() {
			ViewMode::List => self.render_list(frame, body_area),
			ViewMode::Detail => self.render_detail_view(frame, body_area),
		}

		frame.render_widget(
			Line::styled(self.hints(), self.style.theme.empty),
			hints_area,
		);
	}

	fn render_prompt(&self, frame: &mut Frame, area: Rect) {
		let (progress_text, progress_complete) = match &self.load_state {
			LoadState::Loading => ("Loading directory", false),
			LoadState::Ready | LoadState::Failed(_) => ("", true),
		};
		render_input(
			frame,
			InputContext {
				search_input: &self.search_input,
				label: &self.ui.filter_label,
				area,
				theme: &self.style.theme,
			},
			ProgressState {
				progress_text,
				progress_complete,
				throbber_state: &self.throbber_state,
			},
		);
	}

	/// Category filter and recent searches, when either applies.
	fn filter_line(&self) -> Line<'static> {
		let theme = &self.style.theme;
		let mut spans = Vec::new();
		if self.options.intent_filters {
			let category = self.category_filter().unwrap_or("All").to_string();
			spans.push(Span::styled("Category: ", theme.empty));
			spans.push(Span::styled(category, theme.prompt));
		}
		let recent = self.recent_searches();
		if !recent.is_empty() && self.search_input.text().trim().is_empty() {
			if !spans.is_empty() {
				spans.push(Span::raw("   "));
			}
			spans.push(Span::styled("Recent: ", theme.empty));
			spans.push(Span::raw(recent.join(", ")));
		}
		Line::from(spans)
	}

	fn hints(&self) -> String {
		match self.mode() {
			ViewMode::List => {
				let mut hints = vec!["↑/↓ move", "Enter open"];
				if self.options.intent_filters {
					hints.push("Tab category");
				}
				if self.recent.is_some() {
					hints.push("Ctrl+R recent");
				}
				hints.push("Esc quit");
				hints.join("  ")
			}
			ViewMode::Detail => {
				"Esc back  ↑/↓ related  Enter open related  y accept  q quit".to_string()
			}
		}
	}

	fn render_list(&mut self, frame: &mut Frame, area: Rect) {
		let theme = self.style.theme;
		let query = self.search_input.text().to_string();
		let show_score = self.options.ranking_enabled;
		let mut fixed = NAME_WIDTH + CATEGORY_WIDTH + 2 * TABLE_COLUMN_SPACING;
		if show_score {
			fixed += SCORE_WIDTH + TABLE_COLUMN_SPACING;
		}
		let description_width = usize::from(
			area.width
				.saturating_sub(2 + fixed)
				.saturating_sub(u16::try_from(HIGHLIGHT_SYMBOL.width()).unwrap_or(u16::MAX)),
		);
		let rows = build_list_rows(
			&self.rows,
			&RowContext {
				companies: self.directory.companies(),
				query: &query,
				theme: &theme,
				description_width,
				show_score,
			},
		);

		let empty = match &self.load_state {
			LoadState::Loading => Line::styled("Loading directory…", theme.empty),
			LoadState::Failed(message) => {
				Line::styled(format!("Failed to load directory: {message}"), theme.error)
			}
			LoadState::Ready => Line::styled(self.ui.empty_message.clone(), theme.empty),
		};
		let title = format!("{} ({})", self.ui.list_title(&query), self.match_count);

		let mut headers: Vec<String> = vec!["Name".into(), "Category".into(), "Description".into()];
		let mut widths = vec![
			Constraint::Length(NAME_WIDTH),
			Constraint::Length(CATEGORY_WIDTH),
			Constraint::Fill(1),
		];
		if show_score {
			headers.push("Score".into());
			widths.push(Constraint::Length(SCORE_WIDTH));
		}

		let spec = TableSpec {
			headers,
			widths,
			rows,
			title: Some(title),
			empty: Some(empty),
		};
		render_table(frame, area, &mut self.table_state, spec, &theme);
	}

	fn render_detail_view(&mut self, frame: &mut Frame, area: Rect) {
		let Some(index) = self.selection.index() else {
			return;
		};
		let Some(company) = self.directory.get(index) else {
			return;
		};
		let related_rows = build_related_rows(self.directory.companies(), &self.related);
		render_detail(
			frame,
			area,
			DetailContext {
				company,
				title: &self.ui.detail_title,
				related_title: &self.ui.related_title,
				logo_service: &self.logo_service,
				show_resources: self.options.intent_filters,
				related_rows,
				related_state: &mut self.related_state,
				theme: &self.style.theme,
			},
		);
	}
}
