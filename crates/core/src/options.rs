use serde::{Deserialize, Serialize};

use crate::search::SearchStrategy;

/// Switches that select between the directory view's variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DirectoryOptions {
	/// Order search results by relevance score.
	pub ranking_enabled: bool,
	/// Render the list as category sections.
	pub group_by_category: bool,
	/// Offer the category filter and the per-intent resource links.
	pub intent_filters: bool,
}

impl Default for DirectoryOptions {
	fn default() -> Self {
		Self {
			ranking_enabled: true,
			group_by_category: false,
			intent_filters: true,
		}
	}
}

impl DirectoryOptions {
	#[must_use]
	pub fn strategy(&self) -> SearchStrategy {
		if self.ranking_enabled {
			SearchStrategy::Ranked
		} else {
			SearchStrategy::Unranked
		}
	}
}
