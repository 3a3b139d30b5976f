//! Links derived from a company's documentation URL.
//!
//! None of these are checked for reachability. The resource paths are guesses
//! that hold for many SaaS sites and are presented as such.

use serde::Serialize;
use url::Url;

use crate::LinkError;

/// Logo service queried by domain when none is configured.
pub const DEFAULT_LOGO_SERVICE: &str = "https://logo.clearbit.com";

/// Categories of support content a user may be looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceIntent {
	KnowledgeBase,
	Community,
	Academy,
	DeveloperDocs,
	Support,
}

impl ResourceIntent {
	pub const ALL: [Self; 5] = [
		Self::KnowledgeBase,
		Self::Community,
		Self::Academy,
		Self::DeveloperDocs,
		Self::Support,
	];

	#[must_use]
	pub const fn label(self) -> &'static str {
		match self {
			Self::KnowledgeBase => "Knowledge base",
			Self::Community => "Community forum",
			Self::Academy => "Academy",
			Self::DeveloperDocs => "Developer docs",
			Self::Support => "Support contact",
		}
	}

	/// Candidate paths in order of preference.
	#[must_use]
	pub const fn candidate_paths(self) -> &'static [&'static str] {
		match self {
			Self::KnowledgeBase => &["/docs", "/help", "/support", "/kb"],
			Self::Community => &["/community", "/forum", "/discuss"],
			Self::Academy => &["/academy", "/learn", "/training"],
			Self::DeveloperDocs => &["/developers", "/api", "/docs/api"],
			Self::Support => &["/contact", "/support/contact", "/help/contact"],
		}
	}

	#[must_use]
	pub const fn primary_path(self) -> &'static str {
		self.candidate_paths()[0]
	}
}

/// A guessed resource URL for one intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceLink {
	pub intent: ResourceIntent,
	pub url: String,
}

fn parse(docs_url: &str) -> Result<Url, LinkError> {
	Url::parse(docs_url.trim()).map_err(|reason| LinkError::InvalidUrl {
		url: docs_url.to_string(),
		reason,
	})
}

fn domain_of(url: &Url, docs_url: &str) -> Result<String, LinkError> {
	let host = url
		.host_str()
		.filter(|host| !host.is_empty())
		.ok_or_else(|| LinkError::MissingHost {
			url: docs_url.to_string(),
		})?;
	Ok(host.strip_prefix("www.").unwrap_or(host).to_string())
}

/// Host of `docs_url` without the scheme or a leading `www.`.
pub fn logo_domain(docs_url: &str) -> Result<String, LinkError> {
	let url = parse(docs_url)?;
	domain_of(&url, docs_url)
}

/// Logo image URL for `docs_url` from the logo service at `service`.
pub fn logo_url(service: &str, docs_url: &str) -> Result<String, LinkError> {
	let domain = logo_domain(docs_url)?;
	Ok(format!("{}/{domain}", service.trim_end_matches('/')))
}

/// Scheme, bare domain and non-default port of `docs_url`.
///
/// Path, query and fragment are dropped, as is a leading `www.`, so that
/// derived links agree with the logo domain.
pub fn site_origin(docs_url: &str) -> Result<String, LinkError> {
	let url = parse(docs_url)?;
	let domain = domain_of(&url, docs_url)?;
	Ok(match url.port() {
		Some(port) => format!("{}://{domain}:{port}", url.scheme()),
		None => format!("{}://{domain}", url.scheme()),
	})
}

/// Resource URLs for every intent, in [`ResourceIntent::ALL`] order.
pub fn resource_links(docs_url: &str) -> Result<Vec<ResourceLink>, LinkError> {
	let origin = site_origin(docs_url)?;
	Ok(ResourceIntent::ALL
		.into_iter()
		.map(|intent| ResourceLink {
			intent,
			url: format!("{origin}{}", intent.primary_path()),
		})
		.collect())
}
