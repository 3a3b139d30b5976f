use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
	Block, Borders, Cell, HighlightSpacing, Paragraph, Row, ScrollbarState, Table, TableState,
};

use crate::components::render_scrollbar;
use crate::style::Theme;

pub(crate) const HIGHLIGHT_SYMBOL: &str = "▶ ";
pub(crate) const TABLE_COLUMN_SPACING: u16 = 1;
/// Header row + separator height inside the table's viewport.
pub(crate) const TABLE_HEADER_ROWS: u16 = 2;

/// Fully materialized table configuration.
pub struct TableSpec<'a> {
	pub headers: Vec<String>,
	pub widths: Vec<Constraint>,
	pub rows: Vec<Row<'a>>,
	pub title: Option<String>,
	/// Shown centered below the header when `rows` is empty.
	pub empty: Option<Line<'a>>,
}

/// Render a bordered table with a header separator and an overflow scrollbar.
pub fn render_table(
	frame: &mut Frame,
	area: Rect,
	table_state: &mut TableState,
	spec: TableSpec<'_>,
	theme: &Theme,
) {
	let border_style = Style::default().fg(theme.header.fg.unwrap_or(Color::Reset));
	let mut block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(border_style);
	if let Some(title) = spec.title {
		block = block.title(title);
	}

	let inner = block.inner(area);
	frame.render_widget(block, area);
	if inner.width == 0 || inner.height == 0 {
		return;
	}

	let header = Row::new(spec.headers.into_iter().map(Cell::from).collect::<Vec<_>>())
		.style(border_style)
		.height(1)
		.bottom_margin(1);
	let widths = if spec.widths.is_empty() {
		vec![Constraint::Fill(1)]
	} else {
		spec.widths
	};

	let available_rows = usize::from(inner.height.saturating_sub(TABLE_HEADER_ROWS));
	let total_rows = spec.rows.len();
	let needs_scrollbar = available_rows > 0 && total_rows > available_rows;
	let table_area = if needs_scrollbar {
		let mut scrollbar_state = ScrollbarState::new(total_rows)
			.viewport_content_length(available_rows)
			.position(table_state.selected().unwrap_or(0));
		render_scrollbar(frame, inner, &mut scrollbar_state, theme)
	} else {
		inner
	};

	let table = Table::new(spec.rows, widths)
		.header(header)
		.column_spacing(TABLE_COLUMN_SPACING)
		.highlight_spacing(HighlightSpacing::WhenSelected)
		.row_highlight_style(theme.row_highlight)
		.highlight_symbol(HIGHLIGHT_SYMBOL);
	frame.render_stateful_widget(table, table_area, table_state);

	render_header_separator(frame, table_area, theme);

	if total_rows == 0
		&& let Some(message) = spec.empty
		&& table_area.height > TABLE_HEADER_ROWS
	{
		let message_area = Rect {
			y: table_area.y + TABLE_HEADER_ROWS,
			height: table_area.height - TABLE_HEADER_ROWS,
			..table_area
		};
		frame.render_widget(
			Paragraph::new(message).alignment(Alignment::Center),
			message_area,
		);
	}
}

fn render_header_separator(frame: &mut Frame, area: Rect, theme: &Theme) {
	if area.height <= 1 || area.width == 0 {
		return;
	}
	let rect = Rect {
		y: area.y + 1,
		height: 1,
		..area
	};
	let width = usize::from(area.width);
	if width <= 2 {
		frame.render_widget(Paragraph::new(" ".repeat(width)), rect);
		return;
	}

	let style = Style::default().fg(theme.header.fg.unwrap_or(Color::Reset));
	let line = Line::from(vec![
		Span::raw(" "),
		Span::styled("─".repeat(width - 2), style),
		Span::raw(" "),
	]);
	frame.render_widget(Paragraph::new(line), rect);
}
