//! Core state container for the directory view.
//!
//! [`App`] owns the loaded [`Directory`], the query input and every piece of
//! state derived from them: the visible rows, the highlighted row, the
//! selected record and its related records. Derived state is recomputed
//! synchronously whenever the query, the category filter or the list changes.

use std::sync::mpsc::{Receiver, TryRecvError};

use atlas_core::links::DEFAULT_LOGO_SERVICE;
use atlas_core::{
	Company, CompanySource, Directory, DirectoryOptions, DirectoryOutcome, LoadOutcome, Query,
	RecentSearches, SearchHit, Selection, ViewMode,
};
use ratatui::widgets::TableState;
use throbber_widgets_tui::ThrobberState;
use tracing::{debug, warn};

use crate::config::UiLabels;
use crate::input::SearchInput;
use crate::loading::{LoadState, spawn_load};
use crate::style::{StyleConfig, Theme};

/// One line of the list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ListRow {
	/// Category heading in grouped mode.
	Section { category: String, count: usize },
	Company(SearchHit),
}

/// Aggregate state shared across the terminal UI.
pub struct App<'a> {
	/// Loaded company list.
	pub directory: Directory,
	/// Variant switches for ranking, grouping and intent filters.
	pub options: DirectoryOptions,
	/// Text input widget for the search query.
	pub search_input: SearchInput<'a>,
	/// Highlighted row of the list view.
	pub table_state: TableState,
	/// Current style and theme configuration.
	pub style: StyleConfig,
	pub(crate) ui: UiLabels,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) load_state: LoadState,
	pub(crate) load_updates: Option<Receiver<LoadOutcome>>,
	pub(crate) rows: Vec<ListRow>,
	pub(crate) match_count: usize,
	pub(crate) selection: Selection,
	pub(crate) related: Vec<usize>,
	pub(crate) related_state: TableState,
	/// Index into [`Directory::categories`].
	pub(crate) category_filter: Option<usize>,
	pub(crate) recent: Option<RecentSearches>,
	pub(crate) recent_cursor: Option<usize>,
	pub(crate) logo_service: String,
}

impl<'a> App<'a> {
	/// Construct an [`App`] over an already loaded directory.
	pub fn new(directory: Directory) -> Self {
		let mut app = Self {
			directory,
			options: DirectoryOptions::default(),
			search_input: SearchInput::new(""),
			table_state: TableState::default(),
			style: StyleConfig::default(),
			ui: UiLabels::default(),
			throbber_state: ThrobberState::default(),
			load_state: LoadState::Ready,
			load_updates: None,
			rows: Vec::new(),
			match_count: 0,
			selection: Selection::default(),
			related: Vec::new(),
			related_state: TableState::default(),
			category_filter: None,
			recent: None,
			recent_cursor: None,
			logo_service: DEFAULT_LOGO_SERVICE.to_string(),
		};
		app.apply_placeholder();
		app.refresh_results();
		app
	}

	/// Construct an [`App`] that loads its directory from `source` in the
	/// background.
	pub fn loading(source: Box<dyn CompanySource>) -> Self {
		let mut app = Self::new(Directory::default());
		app.load_state = LoadState::Loading;
		app.load_updates = Some(spawn_load(source));
		app
	}

	pub fn set_options(&mut self, options: DirectoryOptions) {
		self.options = options;
		if !options.intent_filters {
			self.category_filter = None;
		}
		self.refresh_results();
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.style = StyleConfig::with_theme(theme);
		self.apply_placeholder();
	}

	pub fn set_labels(&mut self, labels: UiLabels) {
		self.ui = labels;
		self.apply_placeholder();
	}

	pub fn set_initial_query(&mut self, query: impl Into<String>) {
		self.search_input.set_text(query);
		self.refresh_results();
	}

	pub fn set_recent_searches(&mut self, recent: RecentSearches) {
		self.recent = Some(recent);
	}

	pub fn set_logo_service(&mut self, service: impl Into<String>) {
		self.logo_service = service.into();
	}

	fn apply_placeholder(&mut self) {
		let placeholder = self.ui.placeholder.clone();
		self.search_input
			.set_placeholder(placeholder, self.style.theme.empty);
	}

	/// Current view mode.
	#[must_use]
	pub fn mode(&self) -> ViewMode {
		self.selection.mode()
	}

	/// Drain the loader channel, applying the outcome once it arrives.
	pub(crate) fn pump_load_updates(&mut self) {
		let Some(updates) = &self.load_updates else {
			return;
		};
		match updates.try_recv() {
			Ok(outcome) => {
				self.load_updates = None;
				self.apply_load(outcome);
			}
			Err(TryRecvError::Empty) => {}
			Err(TryRecvError::Disconnected) => {
				self.load_updates = None;
				warn!("directory loader stopped without a result");
				self.load_state = LoadState::Failed("loader stopped unexpectedly".to_string());
			}
		}
	}

	/// Replace the directory with a load result.
	pub(crate) fn apply_load(&mut self, outcome: LoadOutcome) {
		self.load_state = match &outcome.error {
			Some(err) => LoadState::Failed(err.to_string()),
			None => LoadState::Ready,
		};
		self.directory = Directory::new(outcome.companies);
		self.category_filter = None;
		self.selection.clear();
		self.related.clear();
		self.refresh_results();
	}

	/// Category the list is restricted to, if any.
	#[must_use]
	pub fn category_filter(&self) -> Option<&str> {
		self.category_filter
			.and_then(|index| self.directory.categories().get(index))
			.map(String::as_str)
	}

	/// Recompute visible rows for the current query and category filter.
	pub(crate) fn refresh_results(&mut self) {
		let query = Query::new(self.search_input.text())
			.in_category(self.category_filter())
			.with_strategy(self.options.strategy());
		let hits = self.directory.search(&query);
		self.match_count = hits.len();

		self.rows = if self.options.group_by_category {
			self.directory
				.group(&hits)
				.into_iter()
				.flat_map(|(category, members)| {
					let section = ListRow::Section {
						category: category.to_string(),
						count: members.len(),
					};
					std::iter::once(section).chain(members.into_iter().map(ListRow::Company))
				})
				.collect()
		} else {
			hits.into_iter().map(ListRow::Company).collect()
		};

		self.table_state.select(None);
		self.ensure_selection();
	}

	/// Keep the highlight on a company row, preferring the first one.
	pub(crate) fn ensure_selection(&mut self) {
		let current = self
			.table_state
			.selected()
			.filter(|&row| matches!(self.rows.get(row), Some(ListRow::Company(_))));
		if current.is_some() {
			return;
		}
		let first = self
			.rows
			.iter()
			.position(|row| matches!(row, ListRow::Company(_)));
		self.table_state.select(first);
	}

	/// Move the highlight by `delta` company rows, skipping section headings.
	pub(crate) fn move_selection(&mut self, delta: isize) {
		let company_rows: Vec<usize> = self
			.rows
			.iter()
			.enumerate()
			.filter(|(_, row)| matches!(row, ListRow::Company(_)))
			.map(|(index, _)| index)
			.collect();
		if company_rows.is_empty() {
			self.table_state.select(None);
			return;
		}

		let position = self
			.table_state
			.selected()
			.and_then(|row| company_rows.iter().position(|&candidate| candidate == row))
			.unwrap_or(0);
		let last = company_rows.len() - 1;
		let target = position.saturating_add_signed(delta).min(last);
		self.table_state.select(Some(company_rows[target]));
	}

	/// Directory index of the highlighted list row.
	#[must_use]
	pub fn highlighted(&self) -> Option<usize> {
		match self.rows.get(self.table_state.selected()?)? {
			ListRow::Company(hit) => Some(hit.index),
			ListRow::Section { .. } => None,
		}
	}

	/// The record shown in the detail view.
	#[must_use]
	pub fn selected_company(&self) -> Option<&Company> {
		self.selection.company(self.directory.companies())
	}

	/// Switch to the detail view for the record at `index`.
	pub(crate) fn open_detail(&mut self, index: usize) {
		if self.directory.get(index).is_none() {
			return;
		}
		self.selection.select(index);
		self.related = self.directory.related(index);
		self.related_state.select(None);
		debug!(index, related = self.related.len(), "opened company detail");
	}

	/// Open the highlighted record, committing the query to recent searches.
	pub(crate) fn open_highlighted(&mut self) {
		let Some(index) = self.highlighted() else {
			return;
		};
		self.record_query();
		self.open_detail(index);
	}

	/// Open the highlighted related record, replacing the selection.
	pub(crate) fn open_related(&mut self) {
		let Some(index) = self
			.related_state
			.selected()
			.and_then(|row| self.related.get(row).copied())
		else {
			return;
		};
		self.open_detail(index);
	}

	pub(crate) fn close_detail(&mut self) {
		self.selection.clear();
		self.related.clear();
		self.related_state.select(None);
	}

	pub(crate) fn move_related(&mut self, delta: isize) {
		if self.related.is_empty() {
			return;
		}
		let last = self.related.len() - 1;
		let next = match self.related_state.selected() {
			None if delta >= 0 => 0,
			None => last,
			Some(current) => current.saturating_add_signed(delta).min(last),
		};
		self.related_state.select(Some(next));
	}

	/// Step the category filter through "all" and each distinct category.
	pub(crate) fn cycle_category(&mut self, forward: bool) {
		if !self.options.intent_filters {
			return;
		}
		let count = self.directory.categories().len();
		if count == 0 {
			return;
		}
		self.category_filter = match (self.category_filter, forward) {
			(None, true) => Some(0),
			(None, false) => Some(count - 1),
			(Some(current), true) if current + 1 < count => Some(current + 1),
			(Some(current), false) if current > 0 => Some(current - 1),
			(Some(_), _) => None,
		};
		self.refresh_results();
	}

	/// Replace the query with the next entry of the recent searches.
	pub(crate) fn cycle_recent(&mut self) {
		let Some(entries) = self.recent.as_ref().map(RecentSearches::entries) else {
			return;
		};
		if entries.is_empty() {
			return;
		}
		let next = match self.recent_cursor {
			Some(current) => (current + 1) % entries.len(),
			None => 0,
		};
		let query = entries[next].clone();
		self.recent_cursor = Some(next);
		self.search_input.set_text(query);
		self.refresh_results();
	}

	/// Recent searches, most recent first.
	#[must_use]
	pub fn recent_searches(&self) -> &[String] {
		self.recent
			.as_ref()
			.map(RecentSearches::entries)
			.unwrap_or_default()
	}

	fn record_query(&mut self) {
		let query = self.search_input.text().to_string();
		let Some(recent) = self.recent.as_mut() else {
			return;
		};
		if let Err(err) = recent.record(&query) {
			warn!(error = %err, "failed to persist recent searches");
		}
		self.recent_cursor = None;
	}

	pub(crate) fn cancel(&self) -> DirectoryOutcome {
		DirectoryOutcome::cancelled(self.search_input.text())
	}

	pub(crate) fn accept(&self) -> Option<DirectoryOutcome> {
		let company = self.selected_company()?.clone();
		Some(DirectoryOutcome::accepted(self.search_input.text(), company))
	}
}

#[cfg(test)]
pub(crate) mod tests {
	use atlas_core::{MemoryStore, StaticSource};

	use super::*;

	pub(crate) fn sample_directory() -> Directory {
		Directory::new(vec![
			Company::new("1", "Amplitude", "Analytics", "https://amplitude.com/docs"),
			Company::new("2", "Datadog", "Observability", "https://www.datadoghq.com/help"),
			Company::new("3", "Mixpanel", "Analytics", "https://mixpanel.com"),
			Company::new("4", "Segment", "Analytics", "https://segment.com/docs")
				.with_description("stripe data pipeline"),
			Company::new("5", "Stripe", "Payments", "https://www.stripe.com/docs"),
		])
	}

	fn type_text(app: &mut App, text: &str) {
		app.search_input.set_text(text);
		app.refresh_results();
	}

	fn visible_names(app: &App) -> Vec<String> {
		app.rows
			.iter()
			.filter_map(|row| match row {
				ListRow::Company(hit) => Some(app.directory.companies()[hit.index].name.clone()),
				ListRow::Section { .. } => None,
			})
			.collect()
	}

	#[test]
	fn empty_query_lists_everything_in_order() {
		let app = App::new(sample_directory());
		assert_eq!(
			visible_names(&app),
			vec!["Amplitude", "Datadog", "Mixpanel", "Segment", "Stripe"]
		);
		assert_eq!(app.highlighted(), Some(0));
	}

	#[test]
	fn ranked_query_puts_name_matches_first() {
		let mut app = App::new(sample_directory());
		type_text(&mut app, "stripe");
		assert_eq!(visible_names(&app), vec!["Stripe", "Segment"]);
	}

	#[test]
	fn grouping_inserts_sections_and_skips_them_when_moving() {
		let mut app = App::new(sample_directory());
		app.set_options(DirectoryOptions {
			group_by_category: true,
			..DirectoryOptions::default()
		});

		assert!(matches!(&app.rows[0], ListRow::Section { category, count: 3 } if category == "Analytics"));
		assert_eq!(app.table_state.selected(), Some(1));

		app.move_selection(3);
		assert_eq!(app.highlighted(), Some(1), "should land on Datadog");
		assert!(matches!(app.rows[app.table_state.selected().unwrap_or(0)], ListRow::Company(_)));
	}

	#[test]
	fn category_filter_cycles_through_all_categories() {
		let mut app = App::new(sample_directory());
		app.cycle_category(true);
		assert_eq!(app.category_filter(), Some("Analytics"));
		assert_eq!(visible_names(&app), vec!["Amplitude", "Mixpanel", "Segment"]);

		app.cycle_category(false);
		assert_eq!(app.category_filter(), None);

		app.cycle_category(false);
		assert_eq!(app.category_filter(), Some("Payments"));
	}

	#[test]
	fn category_filter_is_unavailable_without_intent_filters() {
		let mut app = App::new(sample_directory());
		app.set_options(DirectoryOptions {
			intent_filters: false,
			..DirectoryOptions::default()
		});
		app.cycle_category(true);
		assert_eq!(app.category_filter(), None);
	}

	#[test]
	fn opening_detail_tracks_related_and_back_returns_to_list() {
		let mut app = App::new(sample_directory());
		app.open_highlighted();
		assert_eq!(app.mode(), ViewMode::Detail);
		assert_eq!(app.selected_company().map(|c| c.id.as_str()), Some("1"));
		assert_eq!(app.related, vec![2, 3]);

		app.move_related(1);
		app.open_related();
		assert_eq!(app.selected_company().map(|c| c.id.as_str()), Some("3"));
		assert_eq!(app.related, vec![0, 3]);

		app.close_detail();
		assert_eq!(app.mode(), ViewMode::List);
		assert!(app.selected_company().is_none());
	}

	#[test]
	fn committed_queries_are_recorded_and_cycled() {
		let mut app = App::new(sample_directory());
		app.set_recent_searches(RecentSearches::load(Box::new(MemoryStore::default())));

		type_text(&mut app, "data");
		app.open_highlighted();
		app.close_detail();
		type_text(&mut app, "stripe");
		app.open_highlighted();
		app.close_detail();
		assert_eq!(app.recent_searches(), ["stripe", "data"]);

		type_text(&mut app, "");
		app.cycle_recent();
		assert_eq!(app.search_input.text(), "stripe");
		app.cycle_recent();
		assert_eq!(app.search_input.text(), "data");
		assert_eq!(visible_names(&app), vec!["Datadog", "Segment"]);
	}

	#[test]
	fn failed_load_is_reported_distinctly() {
		let mut app = App::new(Directory::default());
		app.apply_load(LoadOutcome {
			companies: Vec::new(),
			error: Some(atlas_core::LoadError::Status { status: 500 }),
		});
		assert!(matches!(app.load_state, LoadState::Failed(ref message) if message.contains("500")));
		assert!(app.rows.is_empty());
	}

	#[test]
	fn background_load_populates_the_directory() {
		let source = StaticSource::new(sample_directory().companies().to_vec());
		let mut app = App::loading(Box::new(source));
		assert!(app.load_state.is_loading());

		let deadline = std::time::Instant::now() + std::time::Duration::from_secs(2);
		while app.load_state.is_loading() && std::time::Instant::now() < deadline {
			std::thread::sleep(std::time::Duration::from_millis(5));
			app.pump_load_updates();
		}

		assert_eq!(app.load_state, LoadState::Ready);
		assert_eq!(app.directory.len(), 5);
		assert_eq!(app.highlighted(), Some(0));
	}

	#[test]
	fn accept_requires_a_selection() {
		let mut app = App::new(sample_directory());
		assert!(app.accept().is_none());
		app.open_highlighted();
		let outcome = app.accept().expect("accepted outcome");
		assert!(outcome.accepted);
		assert_eq!(outcome.selection.map(|c| c.name), Some("Amplitude".to_string()));
	}
}
