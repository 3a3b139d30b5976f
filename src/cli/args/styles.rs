use std::fmt::Write;

use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};

use crate::app_dirs;

/// Version banner including the config and data directories.
pub(super) fn long_version() -> &'static str {
	let describe = |dir: anyhow::Result<std::path::PathBuf>| match dir {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};

	let mut details = format!("atlas {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(details, "config directory: {}", describe(app_dirs::get_config_dir()));
	let _ = writeln!(details, "data directory: {}", describe(app_dirs::get_data_dir()));
	let _ = write!(details, "cache directory: {}", describe(app_dirs::get_cache_dir()));

	Box::leak(details.into_boxed_str())
}

pub(super) fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}
