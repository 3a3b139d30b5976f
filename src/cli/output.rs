use anyhow::Result;
use atlas_core::{Company, DirectoryOutcome, SearchHit};
use serde_json::json;

/// Print a plain-text representation of the view outcome.
pub(crate) fn print_plain(outcome: &DirectoryOutcome) {
	println!("{}", format_outcome_plain(outcome));
}

pub(crate) fn format_outcome_plain(outcome: &DirectoryOutcome) -> String {
	if !outcome.accepted {
		return format!("Search cancelled (query: '{}')", outcome.query);
	}
	match &outcome.selection {
		Some(company) => format!(
			"{}\t{}\t{}",
			company.name, company.category, company.docs_url
		),
		None => "No selection".to_string(),
	}
}

/// Format the view outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &DirectoryOutcome) -> Result<String> {
	Ok(serde_json::to_string_pretty(outcome)?)
}

pub(crate) fn print_json(outcome: &DirectoryOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

/// One line per batch match: name, category, score and docs URL.
pub(crate) fn format_matches_plain(companies: &[Company], hits: &[SearchHit]) -> String {
	hits.iter()
		.filter_map(|hit| {
			let company = companies.get(hit.index)?;
			let score = hit
				.field
				.map(|field| field.score().to_string())
				.unwrap_or_else(|| "-".to_string());
			Some(format!(
				"{}\t{}\t{score}\t{}",
				company.name, company.category, company.docs_url
			))
		})
		.collect::<Vec<_>>()
		.join("\n")
}

pub(crate) fn format_matches_json(companies: &[Company], hits: &[SearchHit]) -> Result<String> {
	let entries: Vec<_> = hits
		.iter()
		.filter_map(|hit| {
			let company = companies.get(hit.index)?;
			Some(json!({
				"company": company,
				"matched": hit.field.map(|field| field.label()),
				"score": hit.field.map(|field| field.score()),
			}))
		})
		.collect();
	Ok(serde_json::to_string_pretty(&entries)?)
}

#[cfg(test)]
mod tests {
	use atlas_core::{SearchStrategy, search::search};
	use serde_json::Value;

	use super::*;

	fn companies() -> Vec<Company> {
		vec![
			Company::new("1", "Datadog", "Observability", "https://datadoghq.com"),
			Company::new("2", "Segment", "Analytics", "https://segment.com")
				.with_description("stripe data pipeline"),
			Company::new("3", "Stripe", "Payments", "https://stripe.com/docs"),
		]
	}

	#[test]
	fn json_format_includes_company_selection() {
		let company = Company::new("3", "Stripe", "Payments", "https://stripe.com/docs");
		let outcome = DirectoryOutcome::accepted("str", company);

		let json = format_outcome_json(&outcome).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["accepted"], true);
		assert_eq!(value["query"], "str");
		assert_eq!(value["selection"]["name"], "Stripe");
		assert_eq!(value["selection"]["docs_url"], "https://stripe.com/docs");
	}

	#[test]
	fn plain_format_reports_cancellation() {
		let outcome = DirectoryOutcome::cancelled("pay");
		assert_eq!(
			format_outcome_plain(&outcome),
			"Search cancelled (query: 'pay')"
		);
	}

	#[test]
	fn batch_output_lists_ranked_matches() {
		let companies = companies();
		let hits = search(&companies, "stripe", SearchStrategy::Ranked);

		let plain = format_matches_plain(&companies, &hits);
		assert_eq!(
			plain,
			"Stripe\tPayments\t100\thttps://stripe.com/docs\nSegment\tAnalytics\t50\thttps://segment.com"
		);

		let json = format_matches_json(&companies, &hits).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value[0]["company"]["name"], "Stripe");
		assert_eq!(value[0]["score"], 100);
		assert_eq!(value[1]["score"], 50);
	}
}
