//! Record store tests: round-trips, atomicity, corruption detection, and
//! the cross-process lock.

use std::fs;
use std::time::Duration;

use chrono::{TimeZone, Utc};

use timecard::errors::AppError;
use timecard::models::{Session, Timecard};
use timecard::store::{RecordLock, TimecardStore};

fn scratch_store() -> (tempfile::TempDir, TimecardStore) {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = TimecardStore::new(dir.path().join(".timecard"));
    (dir, store)
}

/// A timecard with one closed, checkpointed session and one open session.
fn sample_timecard(store: &TimecardStore) -> Timecard {
    let t0 = Utc.with_ymd_and_hms(2026, 8, 27, 9, 0, 0).unwrap();
    let mut closed = Session::open_at("aaaa1111", t0);
    closed
        .record_checkpoint("lunch", t0 + chrono::Duration::hours(3))
        .expect("checkpoint");
    closed
        .close("bbbb2222", t0 + chrono::Duration::hours(8))
        .expect("close");

    let open = Session::open_at("bbbb2222", t0 + chrono::Duration::hours(9));
    Timecard::from_sessions(store.path(), vec![closed, open])
}

#[test]
fn save_then_load_round_trips_exactly() {
    let (_dir, store) = scratch_store();
    let timecard = sample_timecard(&store);

    store.save(&timecard).expect("save");
    let loaded = store.load().expect("load");

    assert_eq!(loaded, timecard);
}

#[test]
fn exists_reflects_the_file() {
    let (_dir, store) = scratch_store();
    assert!(!store.exists());
    store.init(false).expect("init");
    assert!(store.exists());
}

#[test]
fn init_refuses_to_clobber_without_force() {
    let (_dir, store) = scratch_store();
    let timecard = sample_timecard(&store);
    store.save(&timecard).expect("save");

    let err = store.init(false).expect_err("must fail");
    assert!(matches!(err, AppError::AlreadyExists(_)));
    assert_eq!(store.load().expect("load"), timecard);

    let reset = store.init(true).expect("force init");
    assert!(reset.sessions().is_empty());
}

#[test]
fn load_missing_record_is_not_found() {
    let (_dir, store) = scratch_store();
    let err = store.load().expect_err("must fail");
    assert!(matches!(err, AppError::NotFound(_)));
}

#[test]
fn save_leaves_no_temp_file_behind() {
    let (dir, store) = scratch_store();
    store.save(&sample_timecard(&store)).expect("save");
    assert!(!dir.path().join(".timecard.tmp").exists());
}

#[test]
fn load_rejects_unparsable_json() {
    let (_dir, store) = scratch_store();
    fs::write(store.path(), "{ not json").expect("write");
    let err = store.load().expect_err("must fail");
    assert!(matches!(err, AppError::CorruptRecord(_)));
}

#[test]
fn load_rejects_unknown_version() {
    let (_dir, store) = scratch_store();
    fs::write(store.path(), r#"{"version": 99, "sessions": []}"#).expect("write");
    let err = store.load().expect_err("must fail");
    assert!(matches!(err, AppError::CorruptRecord(_)));
}

#[test]
fn load_rejects_two_open_sessions() {
    let (_dir, store) = scratch_store();
    fs::write(
        store.path(),
        r#"{
  "version": 1,
  "sessions": [
    { "start_commit": "aaaa1111", "start_time": "2026-08-27T09:00:00Z" },
    { "start_commit": "bbbb2222", "start_time": "2026-08-27T10:00:00Z" }
  ]
}"#,
    )
    .expect("write");
    let err = store.load().expect_err("must fail");
    assert!(matches!(err, AppError::CorruptRecord(_)));
}

#[test]
fn load_rejects_out_of_order_timestamps() {
    let (_dir, store) = scratch_store();
    fs::write(
        store.path(),
        r#"{
  "version": 1,
  "sessions": [
    {
      "start_commit": "aaaa1111",
      "start_time": "2026-08-27T09:00:00Z",
      "checkpoints": [ { "label": "early", "time": "2026-08-27T08:00:00Z" } ]
    }
  ]
}"#,
    )
    .expect("write");
    let err = store.load().expect_err("must fail");
    assert!(matches!(err, AppError::CorruptRecord(_)));
}

#[test]
fn load_rejects_half_closed_session() {
    let (_dir, store) = scratch_store();
    fs::write(
        store.path(),
        r#"{
  "version": 1,
  "sessions": [
    {
      "start_commit": "aaaa1111",
      "start_time": "2026-08-27T09:00:00Z",
      "end_commit": "bbbb2222"
    }
  ]
}"#,
    )
    .expect("write");
    let err = store.load().expect_err("must fail");
    assert!(matches!(err, AppError::CorruptRecord(_)));
}

#[test]
fn lock_is_exclusive_until_dropped() {
    let (_dir, store) = scratch_store();
    let wait = Duration::from_millis(50);

    let lock = RecordLock::acquire(store.path(), wait).expect("first acquire");

    let err = RecordLock::acquire(store.path(), wait).expect_err("second acquire");
    assert!(matches!(err, AppError::RecordLocked(_)));

    drop(lock);
    let relock = RecordLock::acquire(store.path(), wait).expect("reacquire after drop");
    drop(relock);
}

#[test]
fn lock_file_is_removed_on_release() {
    let (dir, store) = scratch_store();
    let lock_path = dir.path().join(".timecard.lock");

    let lock = RecordLock::acquire(store.path(), Duration::from_millis(50)).expect("acquire");
    assert!(lock_path.exists());
    drop(lock);
    assert!(!lock_path.exists());
}
