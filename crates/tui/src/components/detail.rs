//! Detail panel for the selected company.

use atlas_core::Company;
use atlas_core::links::{logo_url, resource_links};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Row, TableState, Wrap};
use tracing::debug;

use crate::components::tables::{TableSpec, render_table};
use crate::style::Theme;

/// Argument bundle for the detail view.
pub struct DetailContext<'a> {
	pub company: &'a Company,
	pub title: &'a str,
	pub related_title: &'a str,
	pub logo_service: &'a str,
	/// Show the per-intent resource links.
	pub show_resources: bool,
	pub related_rows: Vec<Row<'static>>,
	pub related_state: &'a mut TableState,
	pub theme: &'a Theme,
}

/// Render the company card above its related records.
pub fn render_detail(frame: &mut Frame, area: Rect, ctx: DetailContext<'_>) {
	let related_height = u16::try_from(ctx.related_rows.len().max(1))
		.unwrap_or(u16::MAX)
		.saturating_add(4);
	let [card_area, related_area] =
		Layout::vertical([Constraint::Min(3), Constraint::Length(related_height)]).areas(area);

	let lines = detail_lines(ctx.company, ctx.logo_service, ctx.show_resources, ctx.theme);
	let card = Paragraph::new(lines)
		.wrap(Wrap { trim: false })
		.block(
			Block::default()
				.borders(Borders::ALL)
				.border_set(ratatui::symbols::border::ROUNDED)
				.border_style(Style::default().fg(ctx.theme.header.fg.unwrap_or(Color::Reset)))
				.title(ctx.title.to_string()),
		);
	frame.render_widget(card, card_area);

	let spec = TableSpec {
		headers: vec!["Name".into(), "Category".into()],
		widths: vec![Constraint::Fill(2), Constraint::Fill(1)],
		rows: ctx.related_rows,
		title: Some(ctx.related_title.to_string()),
		empty: Some(Line::styled("No related products", ctx.theme.empty)),
	};
	render_table(frame, related_area, ctx.related_state, spec, ctx.theme);
}

/// Text lines of the company card.
pub(crate) fn detail_lines(
	company: &Company,
	logo_service: &str,
	show_resources: bool,
	theme: &Theme,
) -> Vec<Line<'static>> {
	let label = theme.empty;
	let field = |name: &str, value: String| {
		Line::from(vec![
			Span::styled(format!("{name:<10}"), label),
			Span::raw(value),
		])
	};

	let mut lines = vec![
		Line::styled(
			company.name.clone(),
			Style::default().add_modifier(Modifier::BOLD),
		),
		field("Category", company.category.clone()),
		field("Docs", company.docs_url.clone()),
	];
	match logo_url(logo_service, &company.docs_url) {
		Ok(url) => lines.push(field("Logo", url)),
		Err(err) => debug!(id = %company.id, error = %err, "no derived links for company"),
	}
	if let Some(created) = &company.created_at {
		lines.push(field("Added", created.clone()));
	}
	if let Some(updated) = &company.updated_at {
		lines.push(field("Updated", updated.clone()));
	}

	lines.push(Line::default());
	match company.description.as_deref().map(str::trim) {
		Some(description) if !description.is_empty() => {
			lines.push(Line::raw(description.to_string()));
		}
		_ => lines.push(Line::styled("No description", label)),
	}

	if show_resources && let Ok(links) = resource_links(&company.docs_url) {
		lines.push(Line::default());
		lines.push(Line::styled("Resources", theme.section_style()));
		lines.extend(links.into_iter().map(|link| {
			Line::from(vec![
				Span::styled(format!("  {:<16}", link.intent.label()), label),
				Span::styled(link.url, theme.highlight),
			])
		}));
	}

	lines
}
