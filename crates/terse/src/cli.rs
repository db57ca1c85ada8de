use clap::{Parser, Subcommand};
use terse_core::{Aggressiveness, DEFAULT_COST_PER_TOKEN};

#[derive(Parser)]
#[command(name = "terse")]
#[command(version)]
#[command(about = "Trim verbose prompts and track token savings")]
pub struct Cli {
    /// Dollar cost of one token, used for savings estimates
    #[arg(long, global = true, default_value_t = DEFAULT_COST_PER_TOKEN)]
    pub cost_per_token: f64,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Optimize one prompt and record the savings
    Optimize {
        /// Prompt text (reads stdin when omitted)
        text: Option<String>,

        /// Keep courtesy words instead of stripping them
        #[arg(long)]
        preserve_politeness: bool,

        /// Rewrite strength: gentle, medium, or aggressive
        #[arg(long, default_value = "medium")]
        aggressiveness: Aggressiveness,
    },

    /// Interactive prompt loop
    Session,

    /// Show cumulative savings and recent runs
    Summary {
        /// Days of history in the breakdown
        #[arg(long, default_value_t = 7)]
        days: i64,
    },

    /// Print version information
    Version,
}
