//! CLI argument definitions for the list view browser.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "tabview",
    version,
    about = "Browse fixture-backed list views from the terminal",
    long_about = "Search, filter, sort and page through the record collections behind\n\
                  the console's list screens (campaigns, customers, prospects, users, orders)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow record values (search terms, filter values) in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Prefix pretty and compact log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the known views.
    Views(ViewsArgs),

    /// Show one page of a view.
    Show(ShowArgs),
}

#[derive(Args)]
pub struct ViewsArgs {
    /// TOML file of extra or replacement `[[view]]` definitions.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct ShowArgs {
    /// View name, e.g. campaigns or users.
    #[arg(value_name = "VIEW")]
    pub view: String,

    /// Directory holding the fixture files.
    #[arg(long = "data-dir", value_name = "DIR", default_value = "fixtures")]
    pub data_dir: PathBuf,

    /// TOML file of extra or replacement `[[view]]` definitions.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Case-insensitive search over the view's searchable fields.
    #[arg(long = "search", value_name = "TEXT")]
    pub search: Option<String>,

    /// Exact-match filter; repeatable. A value of `all` clears the filter.
    #[arg(long = "filter", value_name = "KEY=VALUE", value_parser = parse_filter)]
    pub filters: Vec<(String, String)>,

    /// Sort field; repeat the same field to flip direction.
    #[arg(long = "sort", value_name = "PATH")]
    pub sorts: Vec<String>,

    /// 1-based page number; out-of-range pages are clamped.
    #[arg(long = "page", value_name = "N", default_value_t = 1)]
    pub page: usize,

    /// Rows per page (defaults to the view's page size; standard sizes are 10, 25, 50, 100).
    #[arg(long = "page-size", value_name = "N", value_parser = parse_page_size)]
    pub page_size: Option<usize>,

    /// Print the computed page as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

fn parse_filter(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got {raw:?}"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing filter key in {raw:?}"));
    }
    Ok((key.to_string(), value.trim().to_string()))
}

fn parse_page_size(raw: &str) -> Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(0) => Err("page size must be at least 1".to_string()),
        Ok(size) => Ok(size),
        Err(error) => Err(error.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_show_with_repeated_flags() {
        let cli = Cli::try_parse_from([
            "tabview",
            "show",
            "campaigns",
            "--filter",
            "visibility=Riêng tư",
            "--sort",
            "revenue.amount",
            "--sort",
            "revenue.amount",
            "--page",
            "3",
            "--log-data",
            "--log-timestamps",
        ])
        .expect("parse");
        assert!(cli.log_data);
        assert!(cli.log_timestamps);
        let Command::Show(args) = cli.command else {
            panic!("expected show");
        };
        assert_eq!(args.view, "campaigns");
        assert_eq!(
            args.filters,
            vec![("visibility".to_string(), "Riêng tư".to_string())]
        );
        assert_eq!(args.sorts.len(), 2);
        assert_eq!(args.page, 3);
        assert_eq!(args.page_size, None);
    }

    #[test]
    fn rejects_malformed_filter_and_zero_page_size() {
        assert!(Cli::try_parse_from(["tabview", "show", "users", "--filter", "role"]).is_err());
        assert!(
            Cli::try_parse_from(["tabview", "show", "users", "--page-size", "0"]).is_err()
        );
    }
}
