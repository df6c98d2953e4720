// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Time source the command services stamp timestamps from.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
