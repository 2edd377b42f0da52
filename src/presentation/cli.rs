//! CLI Argument Parsing
//!
//! Global flags are handled by clap and may appear before or after the verb.
//! The verb itself is a free positional: an unknown verb must reach the
//! application as a usage error instead of failing argument parsing.

use std::path::PathBuf;

use clap::Parser;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Build and serve the voxel-test web page
#[derive(Parser, Debug)]
#[command(name = "webpage")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Verbs:\n  build  Build the web page under fips-deploy/\n  serve  Open a browser and serve the built page\n  help   Show verb usage")]
pub struct Cli {
    /// Config file (default: <project>/webpage.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Project directory (default: current directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub project: Option<PathBuf>,

    /// fips checkout (default: `fips` next to the project)
    #[arg(long, global = true, value_name = "DIR")]
    pub fips_dir: Option<PathBuf>,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v shows skipped artifacts and shell commands)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Verb (`build`, `serve` or `help`); further words are ignored
    #[arg(value_name = "VERB")]
    pub args: Vec<String>,
}
