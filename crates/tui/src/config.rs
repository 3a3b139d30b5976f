/// Human-readable text rendered around the directory view.
#[derive(Debug, Clone)]
pub struct UiLabels {
	/// Title shown in front of the product count.
	pub title: String,
	/// Label in front of the search input.
	pub filter_label: String,
	/// Placeholder shown while the input is empty.
	pub placeholder: String,
	/// Heading of the list while no query is active.
	pub all_title: String,
	/// Heading of the list while a query is active.
	pub results_title: String,
	/// Title of the detail panel.
	pub detail_title: String,
	/// Title of the related records table.
	pub related_title: String,
	/// Message shown when a search matches nothing.
	pub empty_message: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			title: "SaaS Atlas".to_string(),
			filter_label: "Search".to_string(),
			placeholder: "Search by name, category or description".to_string(),
			all_title: "All Products".to_string(),
			results_title: "Results".to_string(),
			detail_title: "Company details".to_string(),
			related_title: "Related".to_string(),
			empty_message: "No results".to_string(),
		}
	}
}

impl UiLabels {
	/// Heading of the list for the current query.
	#[must_use]
	pub fn list_title(&self, query: &str) -> &str {
		if query.trim().is_empty() {
			&self.all_title
		} else {
			&self.results_title
		}
	}

	/// `"<title> - <count> products"`.
	#[must_use]
	pub fn headline(&self, count: usize) -> String {
		let noun = if count == 1 { "product" } else { "products" };
		format!("{} - {count} {noun}", self.title)
	}
}
