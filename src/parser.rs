use csv::{ReaderBuilder, Trim};
use std::collections::btree_map::{BTreeMap, Entry};
use std::collections::HashSet;
use std::io::Read;

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::debug;

use crate::error::RosterError;
use crate::schedule::{Assignment, DaySchedule, Shift, Site};

/// One CSV row: a single shift of a single day, one column per site.
/// Site columns missing from the header load as unassigned.
#[derive(Debug, Deserialize)]
struct RosterRecord {
    date: String,
    shift: String,
    #[serde(rename = "SURIA88", default)]
    suria88: Option<String>,
    #[serde(rename = "HAKABET", default)]
    hakabet: Option<String>,
    #[serde(rename = "VIOBET", default)]
    viobet: Option<String>,
    #[serde(rename = "TEMPO88", default)]
    tempo88: Option<String>,
    #[serde(rename = "FILA88", default)]
    fila88: Option<String>,
    #[serde(rename = "IJOBET", default)]
    ijobet: Option<String>,
    #[serde(rename = "HAHAWIN88", default)]
    hahawin88: Option<String>,
    #[serde(rename = "OFF DAY UG", default)]
    off_day_ug: Option<String>,
}

impl RosterRecord {
    fn cell(&self, site: Site) -> Option<&str> {
        let value = match site {
            Site::Suria88 => &self.suria88,
            Site::Hakabet => &self.hakabet,
            Site::Viobet => &self.viobet,
            Site::Tempo88 => &self.tempo88,
            Site::Fila88 => &self.fila88,
            Site::Ijobet => &self.ijobet,
            Site::Hahawin88 => &self.hahawin88,
            Site::OffDayUg => &self.off_day_ug,
        };
        value.as_deref()
    }
}

/// Parses an ISO calendar date (YYYY-MM-DD)
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Loads a roster table, merging the morning and evening rows of each date.
///
/// Days come back in chronological order regardless of row order in the file.
/// A date listed for only one shift gets an all-unassigned row for the other.
pub fn load_roster<R: Read>(source: R) -> Result<Vec<DaySchedule>, RosterError> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(source);
    let mut days: BTreeMap<NaiveDate, DaySchedule> = BTreeMap::new();
    let mut seen: HashSet<(NaiveDate, Shift)> = HashSet::new();

    for (index, result) in reader.deserialize::<RosterRecord>().enumerate() {
        // header is row 1
        let row = index + 2;
        let record = result?;

        let date = parse_date(&record.date).ok_or_else(|| RosterError::InvalidDate {
            row,
            value: record.date.clone(),
        })?;
        let shift: Shift = record.shift.parse().map_err(|_| RosterError::InvalidShift {
            row,
            value: record.shift.clone(),
        })?;

        if !seen.insert((date, shift)) {
            return Err(RosterError::DuplicateShift { row, date, shift });
        }

        let day = match days.entry(date) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(DaySchedule::new(date)),
        };
        let cells = day.shift_mut(shift);
        for site in Site::ALL {
            let assignment = record.cell(site).map(Assignment::parse).unwrap_or_default();
            cells.set(site, assignment);
        }
    }

    debug!(days = days.len(), "roster table parsed");
    Ok(days.into_values().collect())
}
