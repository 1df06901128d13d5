use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ffold", version, about = "Collapse frame sequences in path listings")]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a folder and list its files with sequences collapsed
    Scan(ScanArgs),
    /// Collapse the given paths, or paths read from stdin
    Collapse(CollapseArgs),
}

impl Commands {
    pub fn output(&self) -> &OutputArgs {
        match self {
            Commands::Scan(a) => &a.output,
            Commands::Collapse(a) => &a.output,
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct ScanArgs {
    /// Folder to walk recursively
    pub dir: PathBuf,

    /// Whitespace-separated extensions to keep, e.g. "png exr tif"
    #[arg(short, long)]
    pub filter: Option<String>,

    /// List files as found, without collapsing
    #[arg(long)]
    pub raw: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(clap::Args, Debug)]
pub struct CollapseArgs {
    /// Paths to collapse; read one per line from stdin when omitted
    pub paths: Vec<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Smallest sequence that gets collapsed
    #[arg(long, default_value_t = 1)]
    pub min_members: usize,

    /// Print sequences and remaining files as JSON
    #[arg(long)]
    pub json: bool,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
