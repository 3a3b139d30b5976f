//! Resolve configuration, cache, and data directories for `atlas`.
//!
//! Environment overrides win; otherwise the platform locations from the
//! `directories` crate are used.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const QUALIFIER: &str = "io";
const ORGANIZATION: &str = "saas-atlas";
const APPLICATION: &str = "atlas";

const CONFIG_DIR_ENV: &str = "ATLAS_CONFIG_DIR";
const DATA_DIR_ENV: &str = "ATLAS_DATA_DIR";
const CACHE_DIR_ENV: &str = "ATLAS_CACHE_DIR";

fn project_dirs() -> Result<ProjectDirs> {
	ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
		.ok_or_else(|| anyhow!("unable to determine project directories for atlas"))
}

/// An empty value counts as unset.
fn dir_from_env(name: &str) -> Option<PathBuf> {
	let value = env::var_os(name)?;
	if value.is_empty() {
		None
	} else {
		Some(PathBuf::from(value))
	}
}

/// Directory holding `config.toml`.
pub fn get_config_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(CONFIG_DIR_ENV) {
		return Ok(dir);
	}
	Ok(project_dirs()?.config_local_dir().to_path_buf())
}

/// Directory holding persisted state such as recent searches.
pub fn get_data_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(DATA_DIR_ENV) {
		return Ok(dir);
	}
	Ok(project_dirs()?.data_local_dir().to_path_buf())
}

/// Directory holding the log file.
pub fn get_cache_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(CACHE_DIR_ENV) {
		return Ok(dir);
	}
	Ok(project_dirs()?.cache_dir().to_path_buf())
}
