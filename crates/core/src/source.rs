//! Backing stores the directory can be loaded from.

use std::fs;
use std::path::PathBuf;

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use tracing::debug;
use url::Url;

use crate::{Company, LoadError};

/// Table read when none is configured.
pub const DEFAULT_TABLE: &str = "companies";

/// Read access to the full company collection.
pub trait CompanySource: Send {
	/// Short description used in logs and the status line.
	fn describe(&self) -> String;

	/// Fetch every company row, ordered by name.
	///
	/// Stores order by their own collation; sources without one sort
	/// byte-wise with [`sort_by_name`].
	fn fetch_companies(&self) -> Result<Vec<Company>, LoadError>;
}

/// PostgREST-style HTTP endpoint, as exposed by hosted Postgres services.
#[derive(Debug, Clone)]
pub struct RestSource {
	base_url: String,
	table: String,
	api_key: Option<String>,
}

impl RestSource {
	#[must_use]
	pub fn new(base_url: impl Into<String>) -> Self {
		Self {
			base_url: base_url.into(),
			table: DEFAULT_TABLE.to_string(),
			api_key: None,
		}
	}

	#[must_use]
	pub fn with_table(mut self, table: impl Into<String>) -> Self {
		self.table = table.into();
		self
	}

	#[must_use]
	pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
		self.api_key = api_key.filter(|key| !key.trim().is_empty());
		self
	}

	/// `select * from <table> order by name asc`, in PostgREST form.
	pub fn query_url(&self) -> Result<Url, LoadError> {
		let raw = format!(
			"{}/rest/v1/{}",
			self.base_url.trim_end_matches('/'),
			self.table
		);
		let mut url = Url::parse(&raw).map_err(|source| LoadError::InvalidUrl { url: raw, source })?;
		url.query_pairs_mut()
			.append_pair("select", "*")
			.append_pair("order", "name.asc");
		Ok(url)
	}
}

impl CompanySource for RestSource {
	fn describe(&self) -> String {
		format!("{} ({})", self.base_url, self.table)
	}

	fn fetch_companies(&self) -> Result<Vec<Company>, LoadError> {
		let url = self.query_url()?;
		debug!(%url, "requesting company list");

		let mut request = Client::builder()
			.user_agent(concat!("atlas/", env!("CARGO_PKG_VERSION")))
			.build()?
			.get(url)
			.header(ACCEPT, "application/json");
		if let Some(key) = &self.api_key {
			request = request.header("apikey", key).bearer_auth(key);
		}

		let response = request.send()?;
		let status = response.status();
		if !status.is_success() {
			return Err(LoadError::Status {
				status: status.as_u16(),
			});
		}

		let body = response.text()?;
		decode_rows(&body)
	}
}

/// A JSON array of rows on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
	path: PathBuf,
}

impl FileSource {
	#[must_use]
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}
}

impl CompanySource for FileSource {
	fn describe(&self) -> String {
		self.path.display().to_string()
	}

	fn fetch_companies(&self) -> Result<Vec<Company>, LoadError> {
		let body = fs::read_to_string(&self.path).map_err(|source| LoadError::Io {
			path: self.path.clone(),
			source,
		})?;
		let mut rows = decode_rows(&body)?;
		sort_by_name(&mut rows);
		Ok(rows)
	}
}

/// Rows held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
	companies: Vec<Company>,
}

impl StaticSource {
	#[must_use]
	pub fn new(companies: Vec<Company>) -> Self {
		Self { companies }
	}
}

impl CompanySource for StaticSource {
	fn describe(&self) -> String {
		format!("{} built-in records", self.companies.len())
	}

	fn fetch_companies(&self) -> Result<Vec<Company>, LoadError> {
		let mut rows = self.companies.clone();
		sort_by_name(&mut rows);
		Ok(rows)
	}
}

/// Stand-in when nothing is configured; every fetch fails with
/// [`LoadError::MissingSource`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredSource;

impl CompanySource for UnconfiguredSource {
	fn describe(&self) -> String {
		"no source".to_string()
	}

	fn fetch_companies(&self) -> Result<Vec<Company>, LoadError> {
		Err(LoadError::MissingSource)
	}
}

/// Stable, case-sensitive byte order on `name`.
pub fn sort_by_name(rows: &mut [Company]) {
	rows.sort_by(|a, b| a.name.cmp(&b.name));
}

/// Decode a row payload. `null` and empty bodies are an empty list.
pub fn decode_rows(body: &str) -> Result<Vec<Company>, LoadError> {
	if body.trim().is_empty() {
		return Ok(Vec::new());
	}
	let rows: Option<Vec<Company>> = serde_json::from_str(body)?;
	Ok(rows.unwrap_or_default())
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use tempfile::NamedTempFile;

	use super::*;

	#[test]
	fn query_url_selects_all_rows_ordered_by_name() {
		let source = RestSource::new("https://db.example.com/");
		let url = source.query_url().expect("url");
		assert_eq!(
			url.as_str(),
			"https://db.example.com/rest/v1/companies?select=*&order=name.asc"
		);

		let custom = RestSource::new("https://db.example.com").with_table("vendors");
		assert!(
			custom
				.query_url()
				.expect("url")
				.as_str()
				.contains("/rest/v1/vendors?")
		);
	}

	#[test]
	fn invalid_base_url_is_reported() {
		let source = RestSource::new("not a url");
		assert!(matches!(
			source.query_url(),
			Err(LoadError::InvalidUrl { .. })
		));
	}

	#[test]
	fn blank_api_keys_are_ignored() {
		let source = RestSource::new("https://db.example.com").with_api_key(Some("  ".into()));
		assert!(source.api_key.is_none());
	}

	#[test]
	fn null_and_empty_payloads_are_empty_lists() {
		assert!(decode_rows("null").expect("null").is_empty());
		assert!(decode_rows("").expect("empty").is_empty());
		assert!(decode_rows("[]").expect("array").is_empty());
		assert!(matches!(decode_rows("{}"), Err(LoadError::Decode(_))));
	}

	#[test]
	fn file_source_reads_rows() {
		let mut file = NamedTempFile::new().expect("tempfile");
		write!(
			file,
			r#"[{{"id":"1","name":"Stripe","category":"Payments","docs_url":"https://stripe.com/docs"}},
			{{"id":"2","name":"Datadog","category":"Observability","docs_url":"https://datadoghq.com"}}]"#
		)
		.expect("write");

		let rows = FileSource::new(file.path()).fetch_companies().expect("rows");
		let names: Vec<_> = rows.iter().map(|row| row.name.as_str()).collect();
		assert_eq!(names, ["Datadog", "Stripe"]);
	}

	#[test]
	fn unconfigured_source_always_fails() {
		assert!(matches!(
			UnconfiguredSource.fetch_companies(),
			Err(LoadError::MissingSource)
		));
	}

	#[test]
	fn missing_file_is_an_io_error() {
		let source = FileSource::new("/definitely/not/here.json");
		assert!(matches!(
			source.fetch_companies(),
			Err(LoadError::Io { .. })
		));
	}
}
