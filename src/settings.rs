use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow, bail};
use atlas_core::DirectoryOptions;
use atlas_core::links::DEFAULT_LOGO_SERVICE;
use atlas_core::source::DEFAULT_TABLE;
use config::{Config, ConfigError, File};
use serde::Deserialize;

use crate::app_dirs;
use crate::cli::CliArgs;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
	source: SourceSection,
	view: ViewSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SourceSection {
	url: Option<String>,
	api_key: Option<String>,
	table: Option<String>,
	file: Option<PathBuf>,
	logo_service: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ViewSection {
	ranking: Option<bool>,
	grouping: Option<bool>,
	intent_filters: Option<bool>,
	initial_query: Option<String>,
	theme: Option<String>,
}

/// Where company records come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SourceConfig {
	File(PathBuf),
	Rest {
		url: String,
		table: String,
		api_key: Option<String>,
	},
	/// Nothing configured; loading reports a missing source.
	Unset,
}

#[derive(Debug, Clone)]
pub(crate) struct ResolvedConfig {
	pub source: SourceConfig,
	pub logo_service: String,
	pub options: DirectoryOptions,
	pub initial_query: String,
	pub theme: Option<String>,
}

impl ResolvedConfig {
	pub(crate) fn print_summary(&self) {
		println!("Effective configuration:");
		match &self.source {
			SourceConfig::File(path) => println!("  Source: file {}", path.display()),
			SourceConfig::Rest {
				url,
				table,
				api_key,
			} => {
				println!("  Source: {url} (table {table})");
				println!(
					"  API key: {}",
					if api_key.is_some() { "set" } else { "not set" }
				);
			}
			SourceConfig::Unset => println!("  Source: (none)"),
		}
		println!("  Logo service: {}", self.logo_service);
		println!("  Ranking: {}", bool_to_word(self.options.ranking_enabled));
		println!("  Grouping: {}", bool_to_word(self.options.group_by_category));
		println!(
			"  Intent filters: {}",
			bool_to_word(self.options.intent_filters)
		);
		println!(
			"  UI theme: {}",
			self.theme.as_deref().unwrap_or("(use the library default)")
		);
		if !self.initial_query.is_empty() {
			println!("  Initial query: {}", self.initial_query);
		}
	}
}

pub(crate) fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve()
}

fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		config::Environment::with_prefix("atlas")
			.separator("__")
			.try_parsing(true),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".atlas.toml"));
		files.push(current_dir.join("atlas.toml"));
	}

	files
}

impl RawConfig {
	fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(url) = cli.source_url.clone() {
			self.source.url = Some(url);
		}
		if let Some(key) = cli.api_key.clone() {
			self.source.api_key = Some(key);
		}
		if let Some(table) = cli.table.clone() {
			self.source.table = Some(table);
		}
		if let Some(file) = cli.file.clone() {
			self.source.file = Some(file);
		}
		if let Some(service) = cli.logo_service.clone() {
			self.source.logo_service = Some(service);
		}

		if let Some(value) = cli.ranking {
			self.view.ranking = Some(value);
		}
		if let Some(value) = cli.grouping {
			self.view.grouping = Some(value);
		}
		if let Some(value) = cli.intent_filters {
			self.view.intent_filters = Some(value);
		}
		if let Some(query) = cli.initial_query.clone() {
			self.view.initial_query = Some(query);
		}
		if let Some(theme) = cli.theme.clone() {
			self.view.theme = Some(theme);
		}
	}

	fn resolve(self) -> Result<ResolvedConfig> {
		let source = match (non_blank(self.source.url), self.source.file) {
			(_, Some(file)) => SourceConfig::File(file),
			(Some(url), None) => SourceConfig::Rest {
				url,
				table: non_blank(self.source.table).unwrap_or_else(|| DEFAULT_TABLE.to_string()),
				api_key: non_blank(self.source.api_key),
			},
			(None, None) => SourceConfig::Unset,
		};

		let theme = non_blank(self.view.theme);
		if let Some(name) = &theme
			&& atlas_tui::style::by_name(name).is_none()
		{
			bail!(
				"unknown theme '{name}' (available: {})",
				atlas_tui::style::names().join(", ")
			);
		}

		let defaults = DirectoryOptions::default();
		let options = DirectoryOptions {
			ranking_enabled: self.view.ranking.unwrap_or(defaults.ranking_enabled),
			group_by_category: self.view.grouping.unwrap_or(defaults.group_by_category),
			intent_filters: self.view.intent_filters.unwrap_or(defaults.intent_filters),
		};

		Ok(ResolvedConfig {
			source,
			logo_service: non_blank(self.source.logo_service)
				.unwrap_or_else(|| DEFAULT_LOGO_SERVICE.to_string()),
			options,
			initial_query: self.view.initial_query.unwrap_or_default(),
			theme,
		})
	}
}

fn non_blank(value: Option<String>) -> Option<String> {
	value
		.map(|value| value.trim().to_string())
		.filter(|value| !value.is_empty())
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "enabled" } else { "disabled" }
}
