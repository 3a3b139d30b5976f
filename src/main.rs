mod app_dirs;
mod cli;
mod logging;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{
	CliArgs, OutputFormat, format_matches_json, format_matches_plain, parse_cli, print_json,
	print_plain,
};
use settings::ResolvedConfig;
use tracing::info;
use workflow::DirectoryWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in atlas_tui::style::names() {
			println!("{name}");
		}
		return Ok(());
	}

	init_logging();
	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	if cli.batch {
		run_batch(&cli, resolved)
	} else {
		run_view(cli.output, resolved)
	}
}

/// Logging is best effort; the view runs without it.
fn init_logging() {
	let result = app_dirs::get_cache_dir().and_then(|dir| logging::initialize(&dir));
	match result {
		Ok(path) => info!(path = %path.display(), "logging initialized"),
		Err(err) => eprintln!("atlas: logging disabled: {err:#}"),
	}
}

/// Run the interactive view and print the outcome in the chosen format.
fn run_view(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let data_dir = app_dirs::get_data_dir().ok();
	let outcome = DirectoryWorkflow::from_config(settings).run(data_dir.as_deref())?;

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}

fn run_batch(cli: &CliArgs, settings: ResolvedConfig) -> Result<()> {
	let result = DirectoryWorkflow::from_config(settings).run_batch()?;
	let companies = result.directory.companies();
	let rendered = match cli.output {
		OutputFormat::Plain => format_matches_plain(companies, &result.hits),
		OutputFormat::Json => format_matches_json(companies, &result.hits)?,
	};
	if !rendered.is_empty() {
		println!("{rendered}");
	}
	Ok(())
}
