pub mod engine;

pub use engine::TimecardEngine;
