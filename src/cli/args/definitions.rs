use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `atlas` binary.
#[derive(Parser, Debug)]
#[command(
	name = "atlas",
	version,
	long_version = long_version(),
	about = "Browse a directory of SaaS products and their support resources",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "ATLAS_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'u',
		long = "source-url",
		value_name = "URL",
		help = "Base URL of the REST backend (default: none)"
	)]
	pub(crate) source_url: Option<String>,
	#[arg(
		long = "api-key",
		value_name = "KEY",
		env = "ATLAS_API_KEY",
		hide_env_values = true,
		help = "Key sent with every backend request (default: none)"
	)]
	pub(crate) api_key: Option<String>,
	#[arg(
		long,
		value_name = "NAME",
		help = "Table holding the company records (default: companies)"
	)]
	pub(crate) table: Option<String>,
	#[arg(
		short = 'f',
		long,
		value_name = "PATH",
		help = "Read company records from a JSON file instead of the backend (default: none)"
	)]
	pub(crate) file: Option<PathBuf>,
	#[arg(
		short = 'q',
		long = "query",
		value_name = "QUERY",
		help = "Provide an initial search query (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long,
		value_parser = BoolishValueParser::new(),
		value_name = "BOOL",
		help = "Rank results by the field that matched (default: enabled)"
	)]
	pub(crate) ranking: Option<bool>,
	#[arg(
		short = 'g',
		long,
		value_parser = BoolishValueParser::new(),
		value_name = "BOOL",
		help = "Group results under their category (default: disabled)"
	)]
	pub(crate) grouping: Option<bool>,
	#[arg(
		long = "intent-filters",
		value_parser = BoolishValueParser::new(),
		value_name = "BOOL",
		help = "Offer the category filter and resource links (default: enabled)"
	)]
	pub(crate) intent_filters: Option<bool>,
	#[arg(
		long = "logo-service",
		value_name = "URL",
		help = "Logo image service used for detail links (default: https://logo.clearbit.com)"
	)]
	pub(crate) logo_service: Option<String>,
	#[arg(
		short = 'b',
		long,
		help = "Print the records matching the query without opening the view (default: disabled)"
	)]
	pub(crate) batch: bool,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}
