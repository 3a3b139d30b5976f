use clap::{CommandFactory, Parser};

use super::{CliArgs, OutputFormat};

#[test]
fn command_definition_is_valid() {
	CliArgs::command().debug_assert();
}

#[test]
fn parse_cli_accepts_default_arguments() {
	let parsed = CliArgs::try_parse_from(["atlas"]).expect("parses");
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert!(parsed.config.is_empty());
	assert!(!parsed.batch);
	assert_eq!(parsed.ranking, None);
}

#[test]
fn boolean_switches_accept_boolish_values() {
	let parsed = CliArgs::try_parse_from([
		"atlas",
		"--ranking",
		"off",
		"--grouping",
		"yes",
		"--intent-filters",
		"false",
	])
	.expect("parses");
	assert_eq!(parsed.ranking, Some(false));
	assert_eq!(parsed.grouping, Some(true));
	assert_eq!(parsed.intent_filters, Some(false));
}

#[test]
fn config_files_accumulate() {
	let parsed = CliArgs::try_parse_from([
		"atlas", "-c", "one.toml", "--config", "two.toml", "--output", "json", "-b", "-q", "pay",
	])
	.expect("parses");
	assert_eq!(parsed.config.len(), 2);
	assert_eq!(parsed.output, OutputFormat::Json);
	assert!(parsed.batch);
	assert_eq!(parsed.initial_query.as_deref(), Some("pay"));
}
