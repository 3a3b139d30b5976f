use ratatui::style::{Color, Modifier, Style};

/// Colour scheme for the directory view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Table headers, borders and category section rows.
	pub header: Style,
	/// The highlighted result row.
	pub row_highlight: Style,
	/// Prompt label in front of the search input.
	pub prompt: Style,
	/// Muted text: empty states, hints, secondary columns.
	pub empty: Style,
	/// Matched text and links.
	pub highlight: Style,
	/// Load failures.
	pub error: Style,
}

impl Theme {
	/// Style for category section rows in grouped lists.
	#[must_use]
	pub fn section_style(&self) -> Style {
		Style::new()
			.fg(self.header.fg.unwrap_or(Color::Reset))
			.add_modifier(Modifier::BOLD)
	}
}

pub const SLATE: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.bg(Color::Rgb(15, 23, 42)),
	row_highlight: Style::new()
		.bg(Color::Rgb(30, 41, 59))
		.fg(Color::Rgb(250, 204, 21)),
	prompt: Style::new().fg(Color::LightCyan),
	empty: Style::new().fg(Color::DarkGray),
	highlight: Style::new()
		.fg(Color::Yellow)
		.add_modifier(Modifier::BOLD),
	error: Style::new().fg(Color::LightRed),
};

pub const LIGHT: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(226, 232, 240)),
	row_highlight: Style::new()
		.bg(Color::Rgb(200, 200, 200))
		.fg(Color::Rgb(120, 120, 0)),
	prompt: Style::new().fg(Color::Rgb(0, 102, 153)),
	empty: Style::new().fg(Color::Rgb(100, 100, 100)),
	highlight: Style::new()
		.fg(Color::Rgb(120, 120, 0))
		.add_modifier(Modifier::BOLD),
	error: Style::new().fg(Color::Rgb(180, 30, 30)),
};

pub const SOLARIZED: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(147, 161, 161))
		.bg(Color::Rgb(0, 43, 54)),
	row_highlight: Style::new()
		.bg(Color::Rgb(7, 54, 66))
		.fg(Color::Rgb(181, 137, 0)),
	prompt: Style::new().fg(Color::Rgb(42, 161, 152)),
	empty: Style::new().fg(Color::Rgb(88, 110, 117)),
	highlight: Style::new()
		.fg(Color::Rgb(38, 139, 210))
		.add_modifier(Modifier::BOLD),
	error: Style::new().fg(Color::Rgb(220, 50, 47)),
};

const BUILTINS: [(&str, &[&str], Theme); 3] = [
	("slate", &["default", "dark"], SLATE),
	("light", &[], LIGHT),
	("solarized", &["solarized-dark"], SOLARIZED),
];

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

#[must_use]
pub fn default_theme() -> Theme {
	SLATE
}

/// Names of the built-in themes, without aliases.
#[must_use]
pub fn names() -> Vec<&'static str> {
	BUILTINS.iter().map(|(name, _, _)| *name).collect()
}

/// Look up a theme by name or alias, ignoring case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let wanted = name.trim().to_ascii_lowercase();
	BUILTINS
		.iter()
		.find(|(theme_name, aliases, _)| *theme_name == wanted || aliases.contains(&wanted.as_str()))
		.map(|(_, _, theme)| *theme)
}
