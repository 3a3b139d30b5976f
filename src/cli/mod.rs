mod args;
mod output;

pub(crate) use args::{CliArgs, OutputFormat, parse_cli};
pub(crate) use output::{format_matches_json, format_matches_plain, print_json, print_plain};
