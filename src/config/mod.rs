use std::env;
use std::path::PathBuf;

use crate::cli::parser::Cli;
use crate::errors::AppResult;

/// Default record filename, hidden at the working tree root.
pub const RECORD_FILE: &str = ".timecard";

/// Per-invocation configuration, resolved once from the CLI in `run()` and
/// passed explicitly into command handlers. There is no ambient process-wide
/// state beyond this value.
#[derive(Debug, Clone)]
pub struct Config {
    /// Working tree root the repository probe operates in.
    pub root: PathBuf,
    /// Full path of the record file.
    pub record_path: PathBuf,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> AppResult<Self> {
        let root = match &cli.dir {
            Some(dir) => PathBuf::from(dir),
            None => env::current_dir()?,
        };

        // Record path: user provided (absolute, or relative to the root) or
        // the default hidden file in the root.
        let record_path = match &cli.file {
            Some(file) => {
                let p = PathBuf::from(file);
                if p.is_absolute() { p } else { root.join(p) }
            }
            None => root.join(RECORD_FILE),
        };

        Ok(Self { root, record_path })
    }
}
