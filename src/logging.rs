//! File logging. The terminal belongs to the directory view, so log output
//! goes to `atlas.log` in the cache directory.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "ATLAS_LOG";
const LOG_FILE: &str = "atlas.log";
const DEFAULT_FILTER: &str = "info";

/// Install the global subscriber, appending to `<dir>/atlas.log`.
pub fn initialize(dir: &Path) -> Result<PathBuf> {
	fs::create_dir_all(dir)
		.with_context(|| format!("failed to create log directory {}", dir.display()))?;
	let path = dir.join(LOG_FILE);
	let file = OpenOptions::new()
		.create(true)
		.append(true)
		.open(&path)
		.with_context(|| format!("failed to open log file {}", path.display()))?;

	let filter =
		EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_ansi(false)
		.with_writer(Mutex::new(file))
		.try_init()
		.map_err(|err| anyhow!("failed to install log subscriber: {err}"))?;

	Ok(path)
}
