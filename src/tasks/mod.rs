//! Background Tasks Module
//!
//! # Tasks
//! - Cache sweep: purges expired entries at a configured interval (off by default)

mod cleanup;

pub use cleanup::spawn_cleanup_task;
