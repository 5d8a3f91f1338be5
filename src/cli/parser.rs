use clap::{Parser, Subcommand};

/// Command-line interface definition for timecard
/// CLI application to track time spent per git commit
#[derive(Parser)]
#[command(
    name = "timecard",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track time spent per git commit: start a session, record checkpoints, end it against the current HEAD",
    long_about = None
)]
pub struct Cli {
    /// Working tree root (defaults to the current directory)
    #[arg(global = true, long = "dir")]
    pub dir: Option<String>,

    /// Override the record file path (useful for tests or a custom location)
    #[arg(global = true, long = "file")]
    pub file: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create an empty timecard for the current repository
    Init {
        /// Re-initialize even if a timecard already exists (discards history)
        #[arg(long = "force", short = 'f')]
        force: bool,
    },

    /// Start a new session at the current commit
    Start,

    /// Record a labeled checkpoint within the open session
    Checkpoint {
        /// Free-form tag for the checkpoint (a note or sub-task identifier)
        label: String,
    },

    /// End the open session at the current commit
    End,
}
