//! Background retrieval of the directory.

use std::sync::mpsc::{self, Receiver};
use std::thread;

use atlas_core::{CompanySource, LoadOutcome, load_directory};

/// Progress of the one directory load issued per view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
	Loading,
	Ready,
	/// The load failed; the message is shown instead of "no results".
	Failed(String),
}

impl LoadState {
	#[must_use]
	pub fn is_loading(&self) -> bool {
		matches!(self, Self::Loading)
	}
}

/// Run the load on its own thread and hand back the receiving end.
pub(crate) fn spawn_load(source: Box<dyn CompanySource>) -> Receiver<LoadOutcome> {
	let (tx, rx) = mpsc::channel();
	thread::spawn(move || {
		let outcome = load_directory(source.as_ref());
		// The view may have exited before the load finished.
		let _ = tx.send(outcome);
	});
	rx
}
