use anyhow::Result;
use atlas_core::{CompanySource, DirectoryOptions, DirectoryOutcome, RecentSearches};

use crate::App;
use crate::config::UiLabels;
use crate::style::{self, Theme};

/// A small builder for configuring the interactive directory view before
/// running it.
pub struct DirectoryUi {
	source: Box<dyn CompanySource>,
	options: DirectoryOptions,
	theme: Option<Theme>,
	labels: Option<UiLabels>,
	initial_query: Option<String>,
	recent: Option<RecentSearches>,
	logo_service: Option<String>,
}

impl DirectoryUi {
	/// Create a view that loads its companies from `source` once it starts.
	pub fn new(source: Box<dyn CompanySource>) -> Self {
		Self {
			source,
			options: DirectoryOptions::default(),
			theme: None,
			labels: None,
			initial_query: None,
			recent: None,
			logo_service: None,
		}
	}

	pub fn with_options(mut self, options: DirectoryOptions) -> Self {
		self.options = options;
		self
	}

	/// Select a built-in theme. Unknown names keep the default.
	pub fn with_theme_name(mut self, name: &str) -> Self {
		if let Some(theme) = style::by_name(name) {
			self.theme = Some(theme);
		}
		self
	}

	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = Some(theme);
		self
	}

	pub fn with_labels(mut self, labels: UiLabels) -> Self {
		self.labels = Some(labels);
		self
	}

	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		self.initial_query = Some(query.into());
		self
	}

	/// Persist committed queries through `recent`.
	pub fn with_recent_searches(mut self, recent: RecentSearches) -> Self {
		self.recent = Some(recent);
		self
	}

	pub fn with_logo_service(mut self, service: impl Into<String>) -> Self {
		self.logo_service = Some(service.into());
		self
	}

	/// Build the [`App`] without entering the terminal.
	pub fn into_app<'a>(self) -> App<'a> {
		let mut app = App::loading(self.source);
		app.set_options(self.options);
		if let Some(labels) = self.labels {
			app.set_labels(labels);
		}
		if let Some(theme) = self.theme {
			app.set_theme(theme);
		}
		if let Some(query) = self.initial_query {
			app.set_initial_query(query);
		}
		if let Some(recent) = self.recent {
			app.set_recent_searches(recent);
		}
		if let Some(service) = self.logo_service {
			app.set_logo_service(service);
		}
		app
	}

	/// Run the interactive directory view with the configured options.
	pub fn run(self) -> Result<DirectoryOutcome> {
		self.into_app().run()
	}
}

#[cfg(test)]
mod tests {
	use atlas_core::{MemoryStore, StaticSource};

	use super::*;
	use crate::style::theme::LIGHT;

	#[test]
	fn builder_applies_every_setting() {
		let recent = RecentSearches::load(Box::new(MemoryStore::default()));
		let app = DirectoryUi::new(Box::new(StaticSource::default()))
			.with_options(DirectoryOptions {
				ranking_enabled: false,
				group_by_category: true,
				intent_filters: false,
			})
			.with_theme_name("light")
			.with_initial_query("pay")
			.with_recent_searches(recent)
			.with_logo_service("https://logos.example")
			.into_app();

		assert!(app.options.group_by_category);
		assert_eq!(app.style.theme, LIGHT);
		assert_eq!(app.search_input.text(), "pay");
		assert!(app.recent.is_some());
		assert_eq!(app.logo_service, "https://logos.example");
		assert!(app.load_state.is_loading());
	}

	#[test]
	fn unknown_theme_name_keeps_default() {
		let app = DirectoryUi::new(Box::new(StaticSource::default()))
			.with_theme_name("neon")
			.into_app();
		assert_eq!(app.style.theme, style::default_theme());
	}
}
