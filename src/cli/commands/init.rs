use crate::config::Config;
use crate::errors::AppResult;
use crate::git::Git;
use crate::store::{RecordLock, TimecardStore, lock};
use crate::ui::messages;

/// Handle the `init` command
///
/// Creates an empty timecard record for the repository at the configured
/// root. Refuses to overwrite an existing record unless `--force` was given.
pub fn handle(cfg: &Config, force: bool) -> AppResult<()> {
    // A timecard only makes sense inside a working tree.
    let git = Git::open(&cfg.root)?;
    messages::info(format!("Initializing timecard for {}", git.workdir().display()));

    let store = TimecardStore::new(&cfg.record_path);
    let _lock = RecordLock::acquire(&cfg.record_path, lock::LOCK_WAIT)?;
    store.init(force)?;

    messages::success(format!(
        "Initialized empty timecard at {}",
        cfg.record_path.display()
    ));
    Ok(())
}
