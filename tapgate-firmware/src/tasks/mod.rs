//! Embassy async tasks

pub mod lock;

pub use lock::lock_task;
