pub mod checkpoint;
pub mod session;
pub mod timecard;

pub use checkpoint::Checkpoint;
pub use session::Session;
pub use timecard::Timecard;
