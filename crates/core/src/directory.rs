//! The loaded company list and the views derived from it.

use indexmap::IndexMap;

use crate::grouping::{distinct_categories, group_hits};
use crate::search::{self, Query, SearchHit};
use crate::selection::related_records;
use crate::Company;

/// Read-only company list plus data derived once per list change.
#[derive(Debug, Clone, Default)]
pub struct Directory {
	companies: Vec<Company>,
	categories: Vec<String>,
}

impl Directory {
	/// Wrap an already prepared, name-ordered list.
	#[must_use]
	pub fn new(companies: Vec<Company>) -> Self {
		let categories = distinct_categories(&companies);
		Self {
			companies,
			categories,
		}
	}

	#[must_use]
	pub fn companies(&self) -> &[Company] {
		&self.companies
	}

	/// Distinct categories, sorted ascending.
	#[must_use]
	pub fn categories(&self) -> &[String] {
		&self.categories
	}

	#[must_use]
	pub fn get(&self, index: usize) -> Option<&Company> {
		self.companies.get(index)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.companies.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.companies.is_empty()
	}

	pub fn search(&self, query: &Query<'_>) -> Vec<SearchHit> {
		search::run(&self.companies, query)
	}

	/// Split `hits` into category sections.
	pub fn group<'a>(&'a self, hits: &[SearchHit]) -> IndexMap<&'a str, Vec<SearchHit>> {
		group_hits(&self.companies, hits)
	}

	/// Records related to the one at `index`.
	pub fn related(&self, index: usize) -> Vec<usize> {
		related_records(&self.companies, index)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::search::SearchStrategy;

	fn directory() -> Directory {
		Directory::new(vec![
			Company::new("1", "Datadog", "Observability", "https://datadoghq.com"),
			Company::new("2", "Segment", "Analytics", "https://segment.com")
				.with_description("stripe data pipeline"),
			Company::new("3", "Stripe", "Payments", "https://stripe.com"),
		])
	}

	#[test]
	fn categories_are_derived_on_construction() {
		assert_eq!(
			directory().categories(),
			["Analytics", "Observability", "Payments"]
		);
	}

	#[test]
	fn search_and_group_share_indices() {
		let directory = directory();
		let hits = directory.search(&Query::new("stripe").with_strategy(SearchStrategy::Ranked));
		let groups = directory.group(&hits);

		let keys: Vec<&str> = groups.keys().copied().collect();
		assert_eq!(keys, vec!["Payments", "Analytics"]);
		let payments = directory.get(groups["Payments"][0].index).expect("record");
		assert_eq!(payments.id, "3");
	}
}
