use chrono::{Local, NaiveDateTime, Timelike};

use crate::schedule::Shift;

/// Source of local wall-clock time
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock that always reads the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Guesses the running shift from the local hour: before noon is morning.
/// Ignores time zones and real shift boundaries.
pub fn shift_at(now: NaiveDateTime) -> Shift {
    if now.hour() < 12 {
        Shift::Morning
    } else {
        Shift::Evening
    }
}
