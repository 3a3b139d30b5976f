//! The company record served by the backing store.

use serde::{Deserialize, Deserializer, Serialize};

/// A single company entry in the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
	/// Opaque identifier, unique within a loaded set.
	#[serde(deserialize_with = "id_from_text_or_number")]
	pub id: String,
	/// Display name and primary search field.
	pub name: String,
	/// Grouping key and secondary search field.
	pub category: String,
	/// Absolute URL of the company's documentation.
	pub docs_url: String,
	/// Optional free-form description, searched last.
	#[serde(default)]
	pub description: Option<String>,
	#[serde(default)]
	pub created_at: Option<String>,
	#[serde(default)]
	pub updated_at: Option<String>,
}

impl Company {
	/// Construct a record with the fields every company must carry.
	#[must_use]
	pub fn new(
		id: impl Into<String>,
		name: impl Into<String>,
		category: impl Into<String>,
		docs_url: impl Into<String>,
	) -> Self {
		Self {
			id: id.into(),
			name: name.into(),
			category: category.into(),
			docs_url: docs_url.into(),
			description: None,
			created_at: None,
			updated_at: None,
		}
	}

	/// Attach a description.
	#[must_use]
	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}

	/// Return the reason this record breaks the directory invariants, if any.
	#[must_use]
	pub fn defect(&self) -> Option<&'static str> {
		if self.id.trim().is_empty() {
			Some("empty id")
		} else if self.name.trim().is_empty() {
			Some("empty name")
		} else if self.category.trim().is_empty() {
			Some("empty category")
		} else {
			None
		}
	}
}

/// Stores hand out either uuid strings or serial integers as ids.
fn id_from_text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
	D: Deserializer<'de>,
{
	#[derive(Deserialize)]
	#[serde(untagged)]
	enum RawId {
		Text(String),
		Number(i64),
	}

	Ok(match RawId::deserialize(deserializer)? {
		RawId::Text(text) => text,
		RawId::Number(number) => number.to_string(),
	})
}
