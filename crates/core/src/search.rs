//! Case-insensitive substring search over the loaded directory.
//!
//! Each record is tested against `name`, `category` and `description` in that
//! order. The first field that contains the query decides the record's
//! relevance score. Ranked searches order hits by score with a stable sort so
//! records of equal score keep their list order; unranked searches return the
//! matches in list order.

use serde::{Deserialize, Serialize};

use crate::Company;

/// Score for a query found in the record's name.
pub const NAME_SCORE: u16 = 100;
/// Score for a query found in the category but not the name.
pub const CATEGORY_SCORE: u16 = 75;
/// Score for a query found only in the description.
pub const DESCRIPTION_SCORE: u16 = 50;

/// The record field that satisfied a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchField {
	Name,
	Category,
	Description,
}

impl MatchField {
	/// Relevance score awarded for a match in this field.
	#[must_use]
	pub const fn score(self) -> u16 {
		match self {
			Self::Name => NAME_SCORE,
			Self::Category => CATEGORY_SCORE,
			Self::Description => DESCRIPTION_SCORE,
		}
	}

	#[must_use]
	pub const fn label(self) -> &'static str {
		match self {
			Self::Name => "name",
			Self::Category => "category",
			Self::Description => "description",
		}
	}
}

/// How matches are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStrategy {
	/// Sort by relevance score, keeping list order for ties.
	#[default]
	Ranked,
	/// Keep list order.
	Unranked,
}

/// A record selected by a search, addressed by its index in the searched slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchHit {
	pub index: usize,
	/// `None` when the query was empty and every record passed unfiltered.
	pub field: Option<MatchField>,
}

impl SearchHit {
	#[must_use]
	pub fn score(&self) -> u16 {
		self.field.map_or(0, MatchField::score)
	}
}

/// Parameters for a single search pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct Query<'a> {
	/// Free text typed by the user. Surrounding whitespace is ignored.
	pub text: &'a str,
	/// Restrict results to records in this category before matching text.
	pub category: Option<&'a str>,
	pub strategy: SearchStrategy,
}

impl<'a> Query<'a> {
	#[must_use]
	pub fn new(text: &'a str) -> Self {
		Self {
			text,
			..Self::default()
		}
	}

	#[must_use]
	pub fn in_category(mut self, category: Option<&'a str>) -> Self {
		self.category = category;
		self
	}

	#[must_use]
	pub fn with_strategy(mut self, strategy: SearchStrategy) -> Self {
		self.strategy = strategy;
		self
	}
}

/// Lowercase `text` one char at a time.
///
/// Matching and highlighting both fold with this so they agree on chars
/// whose lowercase form is longer than a single char.
#[must_use]
pub fn fold_case(text: &str) -> String {
	text.chars().flat_map(char::to_lowercase).collect()
}

/// Return the highest-priority field of `company` that contains `needle`.
///
/// `needle` must already be folded with [`fold_case`].
#[must_use]
pub fn match_field(company: &Company, needle: &str) -> Option<MatchField> {
	if contains_folded(&company.name, needle) {
		Some(MatchField::Name)
	} else if contains_folded(&company.category, needle) {
		Some(MatchField::Category)
	} else if company
		.description
		.as_deref()
		.is_some_and(|description| contains_folded(description, needle))
	{
		Some(MatchField::Description)
	} else {
		None
	}
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
	fold_case(haystack).contains(needle)
}

/// Run `query` against `companies`.
///
/// An empty or whitespace-only query text returns every record (after the
/// category restriction) in list order regardless of strategy.
#[must_use]
pub fn run(companies: &[Company], query: &Query<'_>) -> Vec<SearchHit> {
	let in_scope = companies
		.iter()
		.enumerate()
		.filter(|(_, company)| query.category.is_none_or(|category| company.category == category));

	let text = query.text.trim();
	if text.is_empty() {
		return in_scope
			.map(|(index, _)| SearchHit { index, field: None })
			.collect();
	}

	let needle = fold_case(text);
	let mut hits: Vec<SearchHit> = in_scope
		.filter_map(|(index, company)| {
			match_field(company, &needle).map(|field| SearchHit {
				index,
				field: Some(field),
			})
		})
		.collect();

	if query.strategy == SearchStrategy::Ranked {
		// `sort_by` is stable, so equal scores keep their encounter order.
		hits.sort_by(|a, b| b.score().cmp(&a.score()));
	}
	hits
}

/// Ranked search without a category restriction.
#[must_use]
pub fn search(companies: &[Company], text: &str, strategy: SearchStrategy) -> Vec<SearchHit> {
	run(companies, &Query::new(text).with_strategy(strategy))
}

/// Return the records matching `text` in list order.
#[must_use]
pub fn filter<'a>(companies: &'a [Company], text: &str) -> Vec<&'a Company> {
	search(companies, text, SearchStrategy::Unranked)
		.into_iter()
		.map(|hit| &companies[hit.index])
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sample() -> Vec<Company> {
		vec![
			Company::new("1", "Stripe", "Payments", "https://stripe.com/docs"),
			Company::new("2", "Datadog", "Observability", "https://docs.datadoghq.com"),
			Company::new("3", "Segment", "Analytics", "https://segment.com/docs")
				.with_description("stripe data pipeline"),
		]
	}

	fn wider_sample() -> Vec<Company> {
		vec![
			Company::new("1", "Amplitude", "Analytics", "https://amplitude.com/docs")
				.with_description("product analytics"),
			Company::new("2", "Mixpanel", "Analytics", "https://mixpanel.com"),
			Company::new("3", "Analytix Pro", "Reporting", "https://analytix.example"),
			Company::new("4", "Looker", "BI", "https://looker.com")
				.with_description("analytics dashboards"),
			Company::new("5", "PostHog", "Product", "https://posthog.com/docs")
				.with_description("open source ANALYTICS suite"),
		]
	}

	#[test]
	fn ranked_search_orders_name_before_description() {
		let companies = sample();
		let hits = search(&companies, "stripe", SearchStrategy::Ranked);

		let ranked: Vec<(&str, u16)> = hits
			.iter()
			.map(|hit| (companies[hit.index].name.as_str(), hit.score()))
			.collect();
		assert_eq!(ranked, vec![("Stripe", 100), ("Segment", 50)]);
	}

	#[test]
	fn empty_query_returns_everything_in_list_order() {
		let companies = sample();
		for text in ["", "   ", "\t"] {
			let hits = search(&companies, text, SearchStrategy::Ranked);
			let order: Vec<usize> = hits.iter().map(|hit| hit.index).collect();
			assert_eq!(order, vec![0, 1, 2]);
			assert!(hits.iter().all(|hit| hit.field.is_none()));
		}
	}

	#[test]
	fn matching_ignores_case_and_surrounding_whitespace() {
		let companies = sample();
		let hits = search(&companies, "  DATADOG ", SearchStrategy::Ranked);
		assert_eq!(hits.len(), 1);
		assert_eq!(hits[0].index, 1);
		assert_eq!(hits[0].field, Some(MatchField::Name));
	}

	#[test]
	fn dotted_capital_i_matches_its_folded_form() {
		let companies = vec![Company::new(
			"1",
			"İyzico",
			"Payments",
			"https://iyzico.com",
		)];
		let hits = search(&companies, "i\u{307}y", SearchStrategy::Ranked);
		assert_eq!(hits.len(), 1);
		assert_eq!(fold_case("İ"), "i\u{307}");
	}

	#[test]
	fn every_result_contains_the_query_in_some_field() {
		let companies = wider_sample();
		for text in ["analy", "a", "o", "docs", "suite", "x"] {
			let needle = text.to_lowercase();
			for company in filter(&companies, text) {
				let in_description = company
					.description
					.as_deref()
					.is_some_and(|d| d.to_lowercase().contains(&needle));
				assert!(
					company.name.to_lowercase().contains(&needle)
						|| company.category.to_lowercase().contains(&needle)
						|| in_description,
					"{} should not match {text:?}",
					company.name
				);
			}
		}
	}

	#[test]
	fn filtering_is_idempotent() {
		let companies = wider_sample();
		for text in ["analy", "o", "zzz", ""] {
			let once: Vec<Company> = filter(&companies, text).into_iter().cloned().collect();
			let twice: Vec<Company> = filter(&once, text).into_iter().cloned().collect();
			assert_eq!(once, twice, "filtering {text:?} twice changed the result");
		}
	}

	#[test]
	fn ranking_respects_field_priority_and_keeps_ties_stable() {
		let companies = wider_sample();
		let hits = search(&companies, "analy", SearchStrategy::Ranked);

		let scores: Vec<u16> = hits.iter().map(SearchHit::score).collect();
		assert!(scores.windows(2).all(|pair| pair[0] >= pair[1]));

		let order: Vec<&str> = hits
			.iter()
			.map(|hit| companies[hit.index].name.as_str())
			.collect();
		assert_eq!(
			order,
			vec!["Analytix Pro", "Amplitude", "Mixpanel", "Looker", "PostHog"]
		);
	}

	#[test]
	fn unranked_search_keeps_list_order() {
		let companies = wider_sample();
		let hits = search(&companies, "analy", SearchStrategy::Unranked);
		let order: Vec<usize> = hits.iter().map(|hit| hit.index).collect();
		assert_eq!(order, vec![0, 1, 2, 3, 4]);
	}

	#[test]
	fn category_restriction_applies_before_text() {
		let companies = wider_sample();
		let query = Query::new("").in_category(Some("Analytics"));
		let hits = run(&companies, &query);
		let order: Vec<usize> = hits.iter().map(|hit| hit.index).collect();
		assert_eq!(order, vec![0, 1]);

		let query = Query::new("mix").in_category(Some("Analytics"));
		assert_eq!(run(&companies, &query).len(), 1);

		let query = Query::new("looker").in_category(Some("Analytics"));
		assert!(run(&companies, &query).is_empty());
	}
}
