use std::path::PathBuf;

use clap::{ArgAction, Parser};
use diff_report::ThemeKind;
use row_diff::DiffAlgorithm;

/// Compare two text files line by line and write the result as an HTML report
#[derive(Debug, Parser)]
#[command(name = "difftable")]
#[command(about = "Side-by-side HTML report of the line differences between two files", long_about = None)]
pub struct Cli {
    /// The original file
    pub original: PathBuf,

    /// The revised file
    pub revised: PathBuf,

    /// Where to write the report [default: test-result.html]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Stylesheet href linked from the report [default: style.css]
    #[arg(long)]
    pub stylesheet: Option<String>,

    /// Embed the stylesheet in the report instead of linking it
    #[arg(long)]
    pub inline_style: bool,

    /// Write the default stylesheet next to the report
    #[arg(long)]
    pub write_stylesheet: bool,

    /// Leave out the tables with the plain content of both files
    #[arg(long)]
    pub no_originals: bool,

    /// Color theme of the stylesheet (light, dark)
    #[arg(long)]
    pub theme: Option<ThemeKind>,

    /// Diff algorithm (myers, patience, lcs)
    #[arg(long)]
    pub algorithm: Option<DiffAlgorithm>,

    /// Stop looking for a minimal diff after this many milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Compute the two comparison directions one after the other
    #[arg(long)]
    pub sequential: bool,

    /// Configuration file [default: difftable.toml if present]
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
