use std::path::Path;

use anyhow::{Context, Result};
use atlas_core::{
	CompanySource, Directory, DirectoryOutcome, FileSource, FileStore, KeyValueStore,
	MemoryStore, Query, RecentSearches, RestSource, SearchHit, UnconfiguredSource,
	load_directory,
};
use atlas_tui::DirectoryUi;
use tracing::{info, warn};

use crate::settings::{ResolvedConfig, SourceConfig};

const STATE_FILE: &str = "state.json";

/// Coordinates building and running the directory view.
pub(crate) struct DirectoryWorkflow {
	config: ResolvedConfig,
}

/// Records matching the configured query, for non-interactive output.
pub(crate) struct BatchResult {
	pub directory: Directory,
	pub hits: Vec<SearchHit>,
}

impl DirectoryWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Self {
		Self { config }
	}

	/// Open the interactive view, persisting recent searches under `data_dir`.
	pub(crate) fn run(self, data_dir: Option<&Path>) -> Result<DirectoryOutcome> {
		let ResolvedConfig {
			source,
			logo_service,
			options,
			initial_query,
			theme,
		} = self.config;

		let mut ui = DirectoryUi::new(build_source(&source))
			.with_options(options)
			.with_initial_query(initial_query)
			.with_logo_service(logo_service)
			.with_recent_searches(RecentSearches::load(recent_store(data_dir)));
		if let Some(theme) = theme {
			ui = ui.with_theme_name(&theme);
		}
		ui.run()
	}

	/// Load synchronously and search once. A failed load is an error here.
	pub(crate) fn run_batch(self) -> Result<BatchResult> {
		let source = build_source(&self.config.source);
		let outcome = load_directory(source.as_ref());
		if let Some(err) = outcome.error {
			return Err(err).with_context(|| format!("failed to load {}", source.describe()));
		}

		let directory = Directory::new(outcome.companies);
		let query =
			Query::new(&self.config.initial_query).with_strategy(self.config.options.strategy());
		let hits = directory.search(&query);
		info!(
			query = %self.config.initial_query,
			matches = hits.len(),
			"batch search finished"
		);
		Ok(BatchResult { directory, hits })
	}
}

pub(crate) fn build_source(config: &SourceConfig) -> Box<dyn CompanySource> {
	match config {
		SourceConfig::File(path) => Box::new(FileSource::new(path.clone())),
		SourceConfig::Rest {
			url,
			table,
			api_key,
		} => Box::new(
			RestSource::new(url.clone())
				.with_table(table.clone())
				.with_api_key(api_key.clone()),
		),
		SourceConfig::Unset => Box::new(UnconfiguredSource),
	}
}

fn recent_store(data_dir: Option<&Path>) -> Box<dyn KeyValueStore> {
	match data_dir {
		Some(dir) => Box::new(FileStore::new(dir.join(STATE_FILE))),
		None => {
			warn!("no data directory; recent searches are kept for this session only");
			Box::new(MemoryStore::default())
		}
	}
}

#[cfg(test)]
mod tests {
	use std::fs;

	use atlas_core::DirectoryOptions;
	use tempfile::TempDir;

	use super::*;

	fn config(source: SourceConfig, query: &str) -> ResolvedConfig {
		ResolvedConfig {
			source,
			logo_service: "https://logos.example".to_string(),
			options: DirectoryOptions::default(),
			initial_query: query.to_string(),
			theme: None,
		}
	}

	#[test]
	fn batch_search_reads_file_source() {
		let dir = TempDir::new().expect("tempdir");
		let path = dir.path().join("companies.json");
		fs::write(
			&path,
			r#"[
				{"id": 3, "name": "Stripe", "category": "Payments", "docs_url": "https://stripe.com/docs"},
				{"id": 1, "name": "Datadog", "category": "Observability", "docs_url": "https://datadoghq.com"},
				{"id": 2, "name": "Segment", "category": "Analytics", "docs_url": "https://segment.com", "description": "stripe data pipeline"}
			]"#,
		)
		.expect("write");

		let result = DirectoryWorkflow::from_config(config(SourceConfig::File(path), "stripe"))
			.run_batch()
			.expect("batch");
		let names: Vec<_> = result
			.hits
			.iter()
			.map(|hit| result.directory.companies()[hit.index].name.as_str())
			.collect();
		assert_eq!(names, vec!["Stripe", "Segment"]);
	}

	#[test]
	fn batch_without_source_is_an_error() {
		let err = DirectoryWorkflow::from_config(config(SourceConfig::Unset, ""))
			.run_batch()
			.err()
			.expect("should fail");
		assert!(format!("{err:#}").contains("no company source configured"));
	}

	#[test]
	fn recent_store_lives_in_data_dir() {
		let dir = TempDir::new().expect("tempdir");
		let mut recent = RecentSearches::load(recent_store(Some(dir.path())));
		recent.record("billing").expect("record");
		assert!(dir.path().join(STATE_FILE).exists());

		let reloaded = RecentSearches::load(recent_store(Some(dir.path())));
		assert_eq!(reloaded.entries(), ["billing"]);
	}
}
