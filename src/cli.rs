use crate::input::DEFAULT_PAGE_URL;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
    Text,
}

#[derive(Parser, Debug)]
#[command(
    name = "cookies-exposed",
    version,
    about = "Inspect script-visible cookies and score their security risk",
    long_about = "cookies-exposed parses a browser cookie string the way page script sees it, \
                  fills in what script cannot observe with documented defaults, and rates each \
                  cookie's exposure."
)]
pub struct Cli {
    /// URL of the page the cookies belong to (sets domain and secure context)
    #[arg(short, long, default_value = DEFAULT_PAGE_URL)]
    pub url: String,

    /// Raw cookie string, as returned by document.cookie
    #[arg(long, conflicts_with_all = ["cookie_file", "records"])]
    pub cookies: Option<String>,

    /// Read the raw cookie string from a file ("-" for stdin)
    #[arg(long, conflicts_with = "records")]
    pub cookie_file: Option<PathBuf>,

    /// JSON file with a list of cookie records carrying real attributes
    #[arg(long)]
    pub records: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Terminal)]
    pub format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Configuration file (YAML, JSON or TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Strict mode: exit with status 1 when any cookie reaches the fail_on tier
    #[arg(short, long)]
    pub strict: bool,

    /// CI mode: non-interactive, uncolored output
    #[arg(long)]
    pub ci: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
