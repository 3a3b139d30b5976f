//! UI building blocks used by the renderer.

/// Company card and related records.
pub mod detail;
/// Input prompt rendering and progress display.
pub mod prompt;
/// Table row construction and highlighting.
pub(crate) mod rows;
pub mod scrollbar;
/// Table rendering and configuration.
pub mod tables;

pub use detail::{DetailContext, render_detail};
pub use prompt::{InputContext, ProgressState, render_input};
pub use scrollbar::render_scrollbar;
pub use tables::{TableSpec, render_table};
