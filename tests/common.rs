#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::path::{Path, PathBuf};
use std::process::Command as Proc;
use tempfile::TempDir;

pub fn tc() -> Command {
    cargo_bin_cmd!("timecard")
}

/// Create a scratch git repository with one initial commit.
pub fn git_repo() -> TempDir {
    let dir = empty_git_repo();
    commit(dir.path(), "initial");
    dir
}

/// Create a scratch git repository with no commits yet.
pub fn empty_git_repo() -> TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    git(dir.path(), &["init", "-q"]);
    git(dir.path(), &["config", "user.email", "tester@example.com"]);
    git(dir.path(), &["config", "user.name", "Tester"]);
    dir
}

/// Record an empty commit (content is irrelevant to the timecard).
pub fn commit(dir: &Path, msg: &str) {
    git(dir, &["commit", "-q", "--allow-empty", "-m", msg]);
}

pub fn git(dir: &Path, args: &[&str]) {
    let status = Proc::new("git")
        .args(args)
        .current_dir(dir)
        .status()
        .expect("run git");
    assert!(status.success(), "git {:?} failed in {}", args, dir.display());
}

/// Current HEAD hash of the scratch repository.
pub fn head(dir: &Path) -> String {
    let out = Proc::new("git")
        .args(["rev-parse", "HEAD"])
        .current_dir(dir)
        .output()
        .expect("rev-parse HEAD");
    assert!(out.status.success(), "rev-parse HEAD failed");
    String::from_utf8_lossy(&out.stdout).trim().to_string()
}

pub fn record_path(dir: &Path) -> PathBuf {
    dir.join(".timecard")
}
