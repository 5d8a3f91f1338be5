use crate::config::Config;
use crate::core::TimecardEngine;
use crate::errors::AppResult;
use crate::git::Git;
use crate::store::{RecordLock, TimecardStore, lock};
use crate::ui::messages;

/// Handle the `checkpoint` command: record a labeled point inside the open
/// session.
pub fn handle(cfg: &Config, label: &str) -> AppResult<()> {
    let git = Git::open(&cfg.root)?;
    let store = TimecardStore::new(&cfg.record_path);

    let _lock = RecordLock::acquire(&cfg.record_path, lock::LOCK_WAIT)?;
    let timecard = store.load()?;
    let mut engine = TimecardEngine::new(&git, &store, timecard);
    engine.checkpoint(label)?;

    messages::success(format!("Checkpoint '{}' recorded", label));
    Ok(())
}
