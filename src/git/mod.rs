//! Git adapter.
//!
//! The core only needs two answers from version control: "is this directory
//! a working tree" and "what commit is HEAD at". That capability is kept
//! behind [`RepositoryProbe`] so tests can substitute a stub, with a small
//! wrapper around `git` subprocess calls as the real implementation.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use crate::errors::{AppError, AppResult};

/// Narrow version-control capability consumed by the engine.
pub trait RepositoryProbe {
    /// True iff the probed directory is inside a valid working tree.
    fn is_valid_repository(&self) -> bool;

    /// Hash of the current HEAD commit. Fails with `NoCommits` if the
    /// repository has no commits yet.
    fn current_commit(&self) -> AppResult<String>;
}

/// Probe backed by the `git` binary, executed in a fixed working directory.
#[derive(Debug, Clone)]
pub struct Git {
    workdir: PathBuf,
}

impl Git {
    /// Open a probe on `workdir`, failing with `NotARepository` if the
    /// directory is not part of a working tree.
    pub fn open(workdir: impl Into<PathBuf>) -> AppResult<Self> {
        let git = Self {
            workdir: workdir.into(),
        };
        if !git.is_valid_repository() {
            return Err(AppError::NotARepository(git.workdir.display().to_string()));
        }
        Ok(git)
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    fn run(&self, args: &[&str]) -> AppResult<Output> {
        Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .map_err(|e| AppError::Git(format!("{}: {}", args.join(" "), e)))
    }
}

impl RepositoryProbe for Git {
    fn is_valid_repository(&self) -> bool {
        self.run(&["rev-parse", "--is-inside-work-tree"])
            .map(|out| out.status.success() && String::from_utf8_lossy(&out.stdout).trim() == "true")
            .unwrap_or(false)
    }

    fn current_commit(&self) -> AppResult<String> {
        // In a valid working tree a failing HEAD lookup means the repository
        // has no commits yet.
        let out = self.run(&["rev-parse", "--verify", "HEAD"])?;
        if !out.status.success() {
            return Err(AppError::NoCommits);
        }
        Ok(String::from_utf8_lossy(&out.stdout).trim().to_string())
    }
}

/// Abbreviated commit hash for confirmation messages.
pub fn short_hash(commit: &str) -> &str {
    &commit[..commit.len().min(7)]
}
