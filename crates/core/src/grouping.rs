//! Partition records by category.

use std::collections::BTreeSet;

use indexmap::IndexMap;

use crate::Company;
use crate::search::SearchHit;

/// Group `records` by category.
///
/// Categories appear in the order they are first encountered and members keep
/// their relative input order.
#[must_use]
pub fn group_by_category<'a, I>(records: I) -> IndexMap<&'a str, Vec<&'a Company>>
where
	I: IntoIterator<Item = &'a Company>,
{
	let mut groups: IndexMap<&'a str, Vec<&'a Company>> = IndexMap::new();
	for company in records {
		groups
			.entry(company.category.as_str())
			.or_default()
			.push(company);
	}
	groups
}

/// Group search hits by the category of the record they point at.
#[must_use]
pub fn group_hits<'a>(
	companies: &'a [Company],
	hits: &[SearchHit],
) -> IndexMap<&'a str, Vec<SearchHit>> {
	let mut groups: IndexMap<&'a str, Vec<SearchHit>> = IndexMap::new();
	for hit in hits {
		let Some(company) = companies.get(hit.index) else {
			continue;
		};
		groups
			.entry(company.category.as_str())
			.or_default()
			.push(*hit);
	}
	groups
}

/// Distinct categories present in `companies`, sorted ascending.
#[must_use]
pub fn distinct_categories(companies: &[Company]) -> Vec<String> {
	companies
		.iter()
		.map(|company| company.category.as_str())
		.collect::<BTreeSet<_>>()
		.into_iter()
		.map(str::to_string)
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::search::{SearchStrategy, search};

	fn sample() -> Vec<Company> {
		vec![
			Company::new("1", "Amplitude", "Analytics", "https://amplitude.com"),
			Company::new("2", "Datadog", "Observability", "https://datadoghq.com"),
			Company::new("3", "Mixpanel", "Analytics", "https://mixpanel.com"),
			Company::new("4", "Sentry", "Observability", "https://sentry.io"),
			Company::new("5", "Stripe", "Payments", "https://stripe.com"),
		]
	}

	#[test]
	fn groups_cover_input_exactly_once_and_keep_order() {
		let companies = sample();
		let groups = group_by_category(&companies);

		let keys: Vec<&str> = groups.keys().copied().collect();
		assert_eq!(keys, vec!["Analytics", "Observability", "Payments"]);

		let mut seen: Vec<&str> = Vec::new();
		for (category, members) in &groups {
			for member in members {
				assert_eq!(member.category, *category);
				seen.push(member.id.as_str());
			}
		}
		seen.sort_unstable();
		assert_eq!(seen, vec!["1", "2", "3", "4", "5"]);

		let observability: Vec<&str> = groups["Observability"]
			.iter()
			.map(|company| company.name.as_str())
			.collect();
		assert_eq!(observability, vec!["Datadog", "Sentry"]);
	}

	#[test]
	fn empty_input_has_no_groups() {
		let companies: Vec<Company> = Vec::new();
		let groups = group_by_category(&companies);
		assert!(groups.is_empty());
	}

	#[test]
	fn hits_group_in_ranked_order() {
		let companies = sample();
		let hits = search(&companies, "a", SearchStrategy::Ranked);
		let groups = group_hits(&companies, &hits);

		let total: usize = groups.values().map(Vec::len).sum();
		assert_eq!(total, hits.len());
		for (category, members) in &groups {
			for hit in members {
				assert_eq!(companies[hit.index].category, *category);
			}
		}
	}

	#[test]
	fn distinct_categories_are_sorted_and_unique() {
		assert_eq!(
			distinct_categories(&sample()),
			vec!["Analytics", "Observability", "Payments"]
		);
	}
}
