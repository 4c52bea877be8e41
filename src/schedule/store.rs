use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::OnceLock;

use chrono::NaiveDate;
use tracing::info;

use super::types::{DaySchedule, Site};
use crate::error::RosterError;
use crate::parser::load_roster;

/// The reference roster compiled into the binary
const EMBEDDED_ROSTER: &str = include_str!("../../data/roster.csv");

static REFERENCE: OnceLock<ScheduleStore> = OnceLock::new();

/// Read-only roster: built once, queried many times, never mutated
#[derive(Debug, Clone)]
pub struct ScheduleStore {
    days: Vec<DaySchedule>,
}

impl ScheduleStore {
    /// Builds a store from days in any order; duplicate dates keep the last entry
    pub fn new(mut days: Vec<DaySchedule>) -> Self {
        days.sort_by_key(|day| day.date);
        days.reverse();
        days.dedup_by_key(|day| day.date);
        days.reverse();
        Self { days }
    }

    pub fn from_reader<R: Read>(source: R) -> Result<Self, RosterError> {
        Ok(Self::new(load_roster(source)?))
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, RosterError> {
        let path = path.as_ref();
        let store = Self::from_reader(File::open(path)?)?;
        info!(path = %path.display(), days = store.len(), "loaded roster from file");
        Ok(store)
    }

    /// The process-wide embedded roster, parsed on first use
    pub fn reference() -> Result<&'static ScheduleStore, RosterError> {
        if let Some(store) = REFERENCE.get() {
            return Ok(store);
        }
        let store = Self::from_reader(EMBEDDED_ROSTER.as_bytes())?;
        info!(days = store.len(), "loaded embedded roster");
        Ok(REFERENCE.get_or_init(|| store))
    }

    /// Every day in chronological order
    pub fn all_days(&self) -> &[DaySchedule] {
        &self.days
    }

    pub fn day(&self, date: NaiveDate) -> Option<&DaySchedule> {
        self.days
            .binary_search_by_key(&date, |day| day.date)
            .ok()
            .map(|index| &self.days[index])
    }

    /// Site columns in declared order
    pub fn sites(&self) -> &'static [Site] {
        &Site::ALL
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
