//! Single-record selection and the list/detail view switch.

use crate::Company;

/// Upper bound on records listed as related to the selection.
pub const RELATED_LIMIT: usize = 5;

/// The two mutually exclusive presentations of the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
	#[default]
	List,
	Detail,
}

/// At most one selected record, addressed by its index in the loaded list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
	selected: Option<usize>,
}

impl Selection {
	/// Select a record, replacing any previous selection.
	pub fn select(&mut self, index: usize) {
		self.selected = Some(index);
	}

	pub fn clear(&mut self) {
		self.selected = None;
	}

	#[must_use]
	pub fn index(&self) -> Option<usize> {
		self.selected
	}

	/// Detail while something is selected, otherwise the list.
	#[must_use]
	pub fn mode(&self) -> ViewMode {
		if self.selected.is_some() {
			ViewMode::Detail
		} else {
			ViewMode::List
		}
	}

	/// Resolve the selection against the list it indexes.
	#[must_use]
	pub fn company<'a>(&self, companies: &'a [Company]) -> Option<&'a Company> {
		companies.get(self.selected?)
	}
}

/// Indices of records sharing the category of `companies[selected]`, in list
/// order, excluding the selected record and capped at [`RELATED_LIMIT`].
#[must_use]
pub fn related_records(companies: &[Company], selected: usize) -> Vec<usize> {
	let Some(current) = companies.get(selected) else {
		return Vec::new();
	};

	companies
		.iter()
		.enumerate()
		.filter(|(_, company)| company.category == current.category && company.id != current.id)
		.map(|(index, _)| index)
		.take(RELATED_LIMIT)
		.collect()
}
