//! Interactive terminal UI for browsing the SaaS directory.
//!
//! This crate contains the builder, event loop, rendering pipeline and state
//! management of the `atlas` directory view, plus the widgets and themes that
//! power it. The data model and search rules live in `atlas-core`.

mod actions;
mod app;
mod builder;
pub mod components;
mod config;
pub mod input;
mod loading;
mod render;
mod runtime;
pub mod style;

pub use app::App;
pub use builder::DirectoryUi;
pub use config::UiLabels;
pub use loading::LoadState;
pub use runtime::run;

pub use crate::input::SearchInput;
pub use crate::style::{StyleConfig, Theme, default_theme};
