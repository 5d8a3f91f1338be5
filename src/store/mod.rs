pub mod lock;
pub mod record;

pub use lock::RecordLock;
pub use record::TimecardStore;
