//! One-shot retrieval of the directory.

use std::collections::HashSet;

use tracing::{error, info, warn};

use crate::{Company, CompanySource, LoadError};

/// Result of a directory load.
///
/// A failed load still yields a (empty) company list so the view can render;
/// the error is kept so it can be shown instead of "no results".
#[derive(Debug, Default)]
pub struct LoadOutcome {
	pub companies: Vec<Company>,
	pub error: Option<LoadError>,
}

impl LoadOutcome {
	#[must_use]
	pub fn is_failed(&self) -> bool {
		self.error.is_some()
	}
}

/// Fetch every company from `source` and prepare the list for display.
pub fn load_directory(source: &dyn CompanySource) -> LoadOutcome {
	let description = source.describe();
	match source.fetch_companies() {
		Ok(rows) => {
			let companies = prepare_rows(rows);
			info!(source = %description, count = companies.len(), "loaded company directory");
			LoadOutcome {
				companies,
				error: None,
			}
		}
		Err(err) => {
			error!(source = %description, error = %err, "failed to load company directory");
			LoadOutcome {
				companies: Vec::new(),
				error: Some(err),
			}
		}
	}
}

/// Drop rows that break the directory invariants, keeping source order.
///
/// Rows with blank `id`, `name` or `category` are skipped, as are repeated
/// ids after their first occurrence. Ordering belongs to the source: a store
/// returns rows in its own collation and that order is shown as is.
#[must_use]
pub fn prepare_rows(rows: Vec<Company>) -> Vec<Company> {
	let mut seen = HashSet::new();
	rows
		.into_iter()
		.filter(|company| {
			if let Some(defect) = company.defect() {
				warn!(id = %company.id, defect, "skipping invalid company row");
				return false;
			}
			if !seen.insert(company.id.clone()) {
				warn!(id = %company.id, "skipping duplicate company id");
				return false;
			}
			true
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::StaticSource;

	struct FailingSource;

	impl CompanySource for FailingSource {
		fn describe(&self) -> String {
			"failing".into()
		}

		fn fetch_companies(&self) -> Result<Vec<Company>, LoadError> {
			Err(LoadError::Status { status: 503 })
		}
	}

	/// Returns rows the way a store with a case-insensitive collation does.
	struct CollatedSource(Vec<Company>);

	impl CompanySource for CollatedSource {
		fn describe(&self) -> String {
			"collated".into()
		}

		fn fetch_companies(&self) -> Result<Vec<Company>, LoadError> {
			Ok(self.0.clone())
		}
	}

	fn company(id: &str, name: &str) -> Company {
		Company::new(id, name, "Tools", "https://example.com")
	}

	fn names(companies: &[Company]) -> Vec<&str> {
		companies.iter().map(|company| company.name.as_str()).collect()
	}

	#[test]
	fn rows_are_validated_and_deduplicated_in_source_order() {
		let rows = vec![
			Company::new("3", "Stripe", "Payments", "https://stripe.com"),
			Company::new("1", "Datadog", "Observability", "https://datadoghq.com"),
			Company::new("", "Ghost", "Payments", "https://ghost.example"),
			Company::new("4", "Blank", " ", "https://blank.example"),
			Company::new("1", "Datadog Copy", "Observability", "https://copy.example"),
			Company::new("2", "airtable", "Productivity", "https://airtable.com"),
		];

		let prepared = prepare_rows(rows);
		assert_eq!(names(&prepared), vec!["Stripe", "Datadog", "airtable"]);
	}

	#[test]
	fn store_collation_order_is_kept() {
		let source = CollatedSource(vec![
			company("1", "airtable"),
			company("2", "Datadog"),
			company("3", "notion"),
			company("4", "Stripe"),
		]);
		let outcome = load_directory(&source);
		assert_eq!(
			names(&outcome.companies),
			vec!["airtable", "Datadog", "notion", "Stripe"]
		);
	}

	#[test]
	fn unordered_sources_come_back_sorted() {
		let source = StaticSource::new(vec![
			company("1", "notion"),
			company("2", "Stripe"),
			company("3", "airtable"),
			company("4", "Datadog"),
		]);
		let outcome = load_directory(&source);
		assert_eq!(
			names(&outcome.companies),
			vec!["Datadog", "Stripe", "airtable", "notion"]
		);
	}

	#[test]
	fn successful_load_has_no_error() {
		let source = StaticSource::new(vec![Company::new(
			"1",
			"Stripe",
			"Payments",
			"https://stripe.com",
		)]);
		let outcome = load_directory(&source);
		assert!(!outcome.is_failed());
		assert_eq!(outcome.companies.len(), 1);
	}

	#[test]
	fn failed_load_yields_empty_list_and_keeps_error() {
		let outcome = load_directory(&FailingSource);
		assert!(outcome.companies.is_empty());
		assert!(matches!(
			outcome.error,
			Some(LoadError::Status { status: 503 })
		));
	}

	#[test]
	fn empty_store_is_not_an_error() {
		let outcome = load_directory(&StaticSource::default());
		assert!(outcome.companies.is_empty());
		assert!(!outcome.is_failed());
	}
}
