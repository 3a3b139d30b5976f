//! Recently committed search queries, persisted through an injected store.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::StoreError;

/// Key under which the history is stored.
pub const RECENT_SEARCHES_KEY: &str = "recent_searches";
/// Number of distinct queries retained.
pub const MAX_RECENT_SEARCHES: usize = 5;

/// Minimal string key-value storage.
pub trait KeyValueStore: Send {
	fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
	fn set(&mut self, key: &str, value: String) -> Result<(), StoreError>;
}

/// Process-local store, used when persistence is disabled and in tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
	values: HashMap<String, String>,
}

impl KeyValueStore for MemoryStore {
	fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
		Ok(self.values.get(key).cloned())
	}

	fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
		self.values.insert(key.to_string(), value);
		Ok(())
	}
}

/// Store backed by a single JSON object on disk.
#[derive(Debug, Clone)]
pub struct FileStore {
	path: PathBuf,
}

impl FileStore {
	#[must_use]
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	#[must_use]
	pub fn path(&self) -> &Path {
		&self.path
	}

	fn read_all(&self) -> Result<BTreeMap<String, String>, StoreError> {
		match fs::read_to_string(&self.path) {
			Ok(contents) if contents.trim().is_empty() => Ok(BTreeMap::new()),
			Ok(contents) => Ok(serde_json::from_str(&contents)?),
			Err(err) if err.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
			Err(source) => Err(self.io_error(source)),
		}
	}

	fn io_error(&self, source: std::io::Error) -> StoreError {
		StoreError::Io {
			path: self.path.clone(),
			source,
		}
	}
}

impl KeyValueStore for FileStore {
	fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
		Ok(self.read_all()?.remove(key))
	}

	fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
		let mut values = self.read_all()?;
		values.insert(key.to_string(), value);

		if let Some(parent) = self.path.parent() {
			fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
		}
		let contents = serde_json::to_string_pretty(&values)?;
		fs::write(&self.path, contents).map_err(|source| self.io_error(source))
	}
}

/// Move `query` to the front of `entries`, dropping duplicates and anything
/// beyond [`MAX_RECENT_SEARCHES`]. Blank queries are ignored.
pub fn remember(entries: &mut Vec<String>, query: &str) -> bool {
	let query = query.trim();
	if query.is_empty() {
		return false;
	}
	entries.retain(|existing| existing != query);
	entries.insert(0, query.to_string());
	entries.truncate(MAX_RECENT_SEARCHES);
	true
}

/// Bounded most-recent-first query history.
pub struct RecentSearches {
	store: Box<dyn KeyValueStore>,
	entries: Vec<String>,
}

impl RecentSearches {
	/// Read the history from `store`.
	///
	/// A missing or unreadable history starts empty; the failure is logged.
	/// Stored entries are trimmed and deduplicated the same way [`remember`]
	/// does, so an edited state file cannot show blank or repeated queries.
	pub fn load(store: Box<dyn KeyValueStore>) -> Self {
		let entries = match store.get(RECENT_SEARCHES_KEY) {
			Ok(Some(raw)) => match serde_json::from_str::<Vec<String>>(&raw) {
				Ok(stored) => {
					let mut entries = Vec::with_capacity(MAX_RECENT_SEARCHES);
					for query in stored.iter().rev() {
						remember(&mut entries, query);
					}
					entries
				}
				Err(err) => {
					warn!(error = %err, "discarding unreadable recent searches");
					Vec::new()
				}
			},
			Ok(None) => Vec::new(),
			Err(err) => {
				warn!(error = %err, "failed to read recent searches");
				Vec::new()
			}
		};
		Self { store, entries }
	}

	/// Record a committed query and persist the updated history.
	pub fn record(&mut self, query: &str) -> Result<(), StoreError> {
		if !remember(&mut self.entries, query) {
			return Ok(());
		}
		let raw = serde_json::to_string(&self.entries)?;
		self.store.set(RECENT_SEARCHES_KEY, raw)
	}

	#[must_use]
	pub fn entries(&self) -> &[String] {
		&self.entries
	}

	#[must_use]
	pub fn store(&self) -> &dyn KeyValueStore {
		self.store.as_ref()
	}
}

impl std::fmt::Debug for RecentSearches {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("RecentSearches")
			.field("entries", &self.entries)
			.finish_non_exhaustive()
	}
}
