use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use throbber_widgets_tui::{Throbber, ThrobberState};
use unicode_width::UnicodeWidthStr;

use crate::input::SearchInput;
use crate::style::Theme;

/// Argument bundle for rendering the input row.
pub struct InputContext<'a> {
	pub search_input: &'a SearchInput<'a>,
	pub label: &'a str,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Status shown at the right end of the input row.
pub struct ProgressState<'a> {
	pub progress_text: &'a str,
	/// Draws a spinner in front of the text while `false`.
	pub progress_complete: bool,
	pub throbber_state: &'a ThrobberState,
}

/// Render `label: <input>` with the progress status right-aligned.
pub fn render_input(frame: &mut Frame, input: InputContext<'_>, progress: ProgressState<'_>) {
	let InputContext {
		search_input,
		label,
		area,
		theme,
	} = input;
	if area.width == 0 || area.height == 0 {
		return;
	}

	let status = progress_line(progress, theme);
	let status_width = u16::try_from(status.width()).unwrap_or(u16::MAX);
	let prompt = format!("{label}: ");
	let prompt_width = u16::try_from(prompt.width()).unwrap_or(u16::MAX);

	let [prompt_area, input_area, status_area] = Layout::horizontal([
		Constraint::Length(prompt_width),
		Constraint::Fill(1),
		Constraint::Length(status_width),
	])
	.areas(area);

	frame.render_widget(Line::from(Span::styled(prompt, theme.prompt)), prompt_area);
	frame.render_widget(search_input.widget(), input_area);
	if status_width > 0 {
		frame.render_widget(status, status_area);
	}
}

fn progress_line<'a>(progress: ProgressState<'a>, theme: &Theme) -> Line<'a> {
	let ProgressState {
		progress_text,
		progress_complete,
		throbber_state,
	} = progress;
	let mut line = Line::default();
	if progress_text.is_empty() {
		return line;
	}
	if !progress_complete {
		let spinner = Throbber::default()
			.style(theme.empty)
			.throbber_style(theme.empty);
		line.spans.push(spinner.to_symbol_span(throbber_state));
	}
	line.spans
		.push(Span::styled(progress_text.to_string(), theme.empty));
	line
}
