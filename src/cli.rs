//! Command-line arguments

use clap::{Parser, Subcommand};
use offside_core::Team;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "offside", version, about = "Detect offside positions in a still image of a play")]
pub struct Cli {
    /// JSON detection config; defaults are used when omitted
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log per-stage detail
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Detect player and ball markers only
    Detect {
        image: PathBuf,
    },

    /// Detect markers and evaluate offside
    Analyze {
        image: PathBuf,

        /// Team in possession (red or blue)
        #[arg(short, long, default_value = "red")]
        possession: Team,

        /// Write the annotated image here
        #[arg(long)]
        overlay: Option<PathBuf>,

        /// Write the analysis result as JSON here
        #[arg(long)]
        json: Option<PathBuf>,
    },
}
