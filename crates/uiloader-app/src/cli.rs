use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// uiloader - resolve loading overlay options into a renderable view.
#[derive(Parser, Debug)]
#[command(name = "uiloader", version, about)]
pub struct Args {
    /// Options file (TOML or JSON). Defaults to the platform config path.
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Application-level default record used for fallback values.
    #[arg(long)]
    pub defaults: Option<PathBuf>,

    /// Output format.
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Write the documented default options file and exit.
    #[arg(long)]
    pub init: bool,

    /// Fail instead of falling back when an option is rejected.
    #[arg(long)]
    pub strict: bool,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// The full view as pretty-printed JSON.
    Json,
    /// A stylesheet snippet with the computed offsets.
    Css,
}

pub fn parse() -> Args {
    Args::parse()
}
