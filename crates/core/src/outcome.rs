use serde::Serialize;

use crate::Company;

/// How the user left the directory view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryOutcome {
	/// `true` when the user confirmed a selection.
	pub accepted: bool,
	/// Query text at exit.
	pub query: String,
	/// The confirmed record, if any.
	pub selection: Option<Company>,
}

impl DirectoryOutcome {
	#[must_use]
	pub fn cancelled(query: impl Into<String>) -> Self {
		Self {
			accepted: false,
			query: query.into(),
			selection: None,
		}
	}

	#[must_use]
	pub fn accepted(query: impl Into<String>, selection: Company) -> Self {
		Self {
			accepted: true,
			query: query.into(),
			selection: Some(selection),
		}
	}
}
