use std::ops::Range;

use atlas_core::Company;
use atlas_core::search::fold_case;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Row};
use unicode_truncate::UnicodeTruncateStr;
use unicode_width::UnicodeWidthStr;

use crate::app::ListRow;
use crate::style::Theme;

const ELLIPSIS: &str = "…";

/// Inputs shared by every row of the list table.
pub(crate) struct RowContext<'a> {
	pub companies: &'a [Company],
	pub query: &'a str,
	pub theme: &'a Theme,
	/// Width available to the description column.
	pub description_width: usize,
	/// Append a relevance score column.
	pub show_score: bool,
}

/// Build table rows for the list view.
pub(crate) fn build_list_rows(rows: &[ListRow], ctx: &RowContext<'_>) -> Vec<Row<'static>> {
	rows.iter()
		.filter_map(|row| match row {
			ListRow::Section { category, count } => {
				let mut cells = vec![Cell::from(format!("{category} ({count})"))];
				cells.resize_with(column_count(ctx), || Cell::from(""));
				Some(Row::new(cells).style(ctx.theme.section_style()))
			}
			ListRow::Company(hit) => {
				let company = ctx.companies.get(hit.index)?;
				let description = company.description.as_deref().unwrap_or_default();
				let mut cells = vec![
					highlight_cell(&company.name, ctx.query, ctx.theme.highlight),
					highlight_cell(&company.category, ctx.query, ctx.theme.highlight),
					Cell::from(Span::styled(
						truncate_to_width(description, ctx.description_width),
						ctx.theme.empty,
					)),
				];
				if ctx.show_score {
					cells.push(Cell::from(
						hit.field
							.map(|field| field.score().to_string())
							.unwrap_or_default(),
					));
				}
				Some(Row::new(cells))
			}
		})
		.collect()
}

fn column_count(ctx: &RowContext<'_>) -> usize {
	if ctx.show_score { 4 } else { 3 }
}

/// Build the rows of the related-records table.
pub(crate) fn build_related_rows(companies: &[Company], related: &[usize]) -> Vec<Row<'static>> {
	related
		.iter()
		.filter_map(|&index| companies.get(index))
		.map(|company| {
			Row::new([
				Cell::from(company.name.clone()),
				Cell::from(company.category.clone()),
			])
		})
		.collect()
}

/// Style the first case-insensitive occurrence of `query` within `text`.
pub(crate) fn highlight_cell(text: &str, query: &str, style: Style) -> Cell<'static> {
	let Some(range) = match_range(text, query.trim()) else {
		return Cell::from(text.to_string());
	};
	let chars: Vec<char> = text.chars().collect();
	let before: String = chars[..range.start].iter().collect();
	let matched: String = chars[range.clone()].iter().collect();
	let after: String = chars[range.end..].iter().collect();
	Cell::from(Line::from(vec![
		Span::raw(before),
		Span::styled(matched, style),
		Span::raw(after),
	]))
}

/// Char range of `text` covering the first case-insensitive occurrence of
/// `needle`, folded the same way search folds.
pub(crate) fn match_range(text: &str, needle: &str) -> Option<Range<usize>> {
	let needle: Vec<char> = fold_case(needle).chars().collect();
	if needle.is_empty() {
		return None;
	}
	// Each folded char remembers the index of the char it came from.
	let haystack: Vec<(usize, char)> = text
		.chars()
		.enumerate()
		.flat_map(|(index, c)| c.to_lowercase().map(move |lower| (index, lower)))
		.collect();
	if needle.len() > haystack.len() {
		return None;
	}
	haystack
		.windows(needle.len())
		.find(|window| window.iter().map(|&(_, c)| c).eq(needle.iter().copied()))
		.and_then(|window| Some(window.first()?.0..window.last()?.0 + 1))
}

/// Cut `text` to `max_width` columns, marking the cut with an ellipsis.
pub(crate) fn truncate_to_width(text: &str, max_width: usize) -> String {
	if text.width() <= max_width {
		return text.to_string();
	}
	if max_width <= ELLIPSIS.width() {
		return String::new();
	}
	let (slice, _) = text.unicode_truncate(max_width - ELLIPSIS.width());
	format!("{}{ELLIPSIS}", slice.trim_end())
}
