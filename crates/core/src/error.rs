use std::path::PathBuf;

use thiserror::Error;

/// Failures while retrieving the company list from a [`CompanySource`](crate::CompanySource).
#[derive(Debug, Error)]
pub enum LoadError {
	/// No source was configured to load from.
	#[error("no company source configured")]
	MissingSource,

	/// The configured store address could not be turned into a request URL.
	#[error("invalid store url '{url}': {source}")]
	InvalidUrl {
		url: String,
		#[source]
		source: url::ParseError,
	},

	/// The request never produced a response.
	#[error("request to the company store failed: {0}")]
	Http(#[from] reqwest::Error),

	/// The store answered with a non-success status code.
	#[error("company store answered with status {status}")]
	Status { status: u16 },

	/// The payload was not a list of company rows.
	#[error("malformed company payload: {0}")]
	Decode(#[from] serde_json::Error),

	/// A file-backed source could not be read.
	#[error("failed to read {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}

/// Failures while deriving links from a record's `docs_url`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LinkError {
	#[error("'{url}' is not an absolute url: {reason}")]
	InvalidUrl { url: String, reason: url::ParseError },

	#[error("'{url}' has no host component")]
	MissingHost { url: String },
}

/// Failures of the key-value storage behind recent searches.
#[derive(Debug, Error)]
pub enum StoreError {
	#[error("failed to access {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("stored value is not valid json: {0}")]
	Serde(#[from] serde_json::Error),
}
