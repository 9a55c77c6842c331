use std::path::PathBuf;

use cellar_core::Platform;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "cellar")]
#[command(about = "Search the cellar catalog from the command line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// JSON catalog to search instead of the embedded one (defaults to $CELLAR_CATALOG)
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search catalog entries by keyword and platform
    #[command(alias = "find")]
    Search {
        /// Search query
        query: Vec<String>,
        /// Only show entries published on this platform (repeatable)
        #[arg(short, long = "platform", value_name = "NAME", value_parser = parse_platform)]
        platforms: Vec<Platform>,
        /// Number of entries to show
        #[arg(short, long)]
        limit: Option<usize>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List every catalog entry
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show filter platforms with their markers and entry counts
    Platforms {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}

pub fn parse_platform(value: &str) -> Result<Platform, String> {
    Platform::from_name(value).ok_or_else(|| {
        let known = Platform::ALL.map(Platform::name).join(", ");
        format!("unknown platform `{value}` (expected one of: {known})")
    })
}
