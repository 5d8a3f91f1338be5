pub mod checkpoint;
pub mod end;
pub mod init;
pub mod start;
