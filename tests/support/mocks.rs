// tests/support/mocks.rs
use chrono::{DateTime, Utc};
use newsroom_core::application::ports::time::Clock;
use once_cell::sync::Lazy;

/// Fixed timestamp shared by every test binary.
static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks.rs")
        .with_timezone(&Utc)
});

/// Deterministic timestamp matching what `FixedClock` hands out.
pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

/// Clock whose `now` never moves.
pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        fixed_now()
    }
}

/// Clock that advances by a fixed step on every reading, so consecutive
/// operations get distinct timestamps.
pub struct SteppingClock {
    start: DateTime<Utc>,
    step: chrono::Duration,
    calls: std::sync::Mutex<i32>,
}

impl SteppingClock {
    pub fn new(start: DateTime<Utc>, step: chrono::Duration) -> Self {
        Self {
            start,
            step,
            calls: std::sync::Mutex::new(0),
        }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let mut calls = self.calls.lock().expect("clock lock");
        let now = self.start + self.step * *calls;
        *calls += 1;
        now
    }
}
