use std::sync::LazyLock;
use std::time::Instant;

pub mod config;
pub mod io;

/// Time of the program start, all log timestamps are relative to it.
pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);
