//! Data model and view logic for the SaaS Atlas company directory.
//!
//! The crate loads the company list from a [`CompanySource`], searches and
//! groups it in memory, tracks the selected record and derives support links
//! from each company's documentation URL. It has no terminal dependencies so
//! the same logic can back other front ends.

mod company;
pub mod directory;
mod error;
pub mod grouping;
pub mod links;
pub mod loader;
mod options;
mod outcome;
pub mod recent;
pub mod search;
pub mod selection;
pub mod source;

pub use company::Company;
pub use directory::Directory;
pub use error::{LinkError, LoadError, StoreError};
pub use links::{ResourceIntent, ResourceLink};
pub use loader::{LoadOutcome, load_directory};
pub use options::DirectoryOptions;
pub use outcome::DirectoryOutcome;
pub use recent::{FileStore, KeyValueStore, MemoryStore, RecentSearches};
pub use search::{MatchField, Query, SearchHit, SearchStrategy};
pub use selection::{Selection, ViewMode};
pub use source::{CompanySource, FileSource, RestSource, StaticSource, UnconfiguredSource};
