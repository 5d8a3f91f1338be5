use crate::config::Config;
use crate::core::TimecardEngine;
use crate::errors::AppResult;
use crate::git::{Git, short_hash};
use crate::store::{RecordLock, TimecardStore, lock};
use crate::ui::messages;

/// Handle the `end` command: close the open session at the current HEAD.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let git = Git::open(&cfg.root)?;
    let store = TimecardStore::new(&cfg.record_path);

    let _lock = RecordLock::acquire(&cfg.record_path, lock::LOCK_WAIT)?;
    let timecard = store.load()?;
    let mut engine = TimecardEngine::new(&git, &store, timecard);
    let commit = engine.end()?;

    messages::success(format!("Session ended at commit {}", short_hash(&commit)));
    Ok(())
}
