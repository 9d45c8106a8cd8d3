use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "ojcli",
    version,
    about = "Perform Online Judge actions from the command line"
)]
pub struct Cli {
    /// Draw report tables with plain ASCII borders instead of box drawing
    #[arg(long, global = true)]
    pub ascii: bool,

    /// Custom config file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Submit a solution
    Submit {
        /// Solution source files (duplicates are ignored)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Problem number (overrides the file-stem guess)
        #[arg(long, short)]
        problem: Option<u32>,

        /// Programming language (overrides the extension guess)
        #[arg(long, short)]
        language: Option<String>,
    },

    /// See verdict data
    Verdict {
        /// Verdicts for a specific problem number
        #[arg(long, short)]
        problem: Option<u32>,

        /// Maximum number of verdicts to show (default 25)
        #[arg(long, short, conflicts_with = "all")]
        limit: Option<usize>,

        /// Show every verdict
        #[arg(long, short)]
        all: bool,
    },

    /// See the world ranklist around your rank
    Rank {
        /// Show N users ranked above you
        #[arg(long, short, conflicts_with = "surround")]
        above: Option<u32>,

        /// Show N users ranked below you
        #[arg(long, short, conflicts_with = "surround")]
        below: Option<u32>,

        /// Show N users above and below you
        #[arg(long, short = 'C')]
        surround: Option<u32>,

        /// Show how many accepted problems are needed to ascend N ranks
        #[arg(long, short)]
        next: Option<u32>,
    },

    /// Get a random problem to solve
    Random {
        /// Restrict the choice to a specific problem volume
        #[arg(long, short)]
        volume: Option<u32>,
    },

    /// Show problem-set progress
    Progress {
        /// Restrict progress to a specific problem volume
        #[arg(long, short)]
        volume: Option<u32>,
    },

    /// Show statistics about submissions
    Stats {
        /// Only show statistics on verdicts
        #[arg(long, short)]
        submissions: bool,

        /// Only show statistics on languages
        #[arg(long, short)]
        languages: bool,
    },
}
