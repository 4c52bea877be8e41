use chrono::{NaiveDate, NaiveDateTime};

use crate::clock::shift_at;
use crate::display::{format_long_date, format_timestamp};
use crate::schedule::{ScheduleStore, Shift, Site};

/// Snapshot of one staff member's coverage on a single date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffDetails {
    pub staff_name: String,
    pub date: NaiveDate,
    /// Sites worked that day, empty on an off day
    pub websites: Vec<(Shift, Site)>,
    pub current_shift: Shift,
    pub updated_at: NaiveDateTime,
}

impl StaffDetails {
    /// Looks a name up on `date`. Names are compared whole and case-insensitively,
    /// so `Andi` does not pick up `Andika`.
    pub fn lookup(store: &ScheduleStore, name: &str, date: NaiveDate, now: NaiveDateTime) -> Self {
        let wanted = name.trim();
        let mut staff_name = wanted.to_string();
        let mut websites = Vec::new();

        if let Some(day) = store.day(date) {
            for shift in Shift::ALL {
                for (site, assignment) in day.shift(shift).iter() {
                    if let Some(found) = assignment
                        .names()
                        .iter()
                        .find(|candidate| candidate.eq_ignore_ascii_case(wanted))
                    {
                        staff_name = found.clone();
                        websites.push((shift, site));
                    }
                }
            }
        }

        Self {
            staff_name,
            date,
            websites,
            current_shift: shift_at(now),
            updated_at: now,
        }
    }

    pub fn is_off_day(&self) -> bool {
        self.websites.is_empty()
    }

    pub fn render(&self) -> String {
        let mut rows: Vec<(&str, String)> = vec![
            ("Staff Name", self.staff_name.clone()),
            ("Date", format_long_date(self.date)),
        ];
        if self.is_off_day() {
            rows.push(("Status", "Off Day".to_string()));
        } else {
            rows.push(("Status", "Active".to_string()));
            let sites: Vec<String> = self
                .websites
                .iter()
                .map(|(shift, site)| format!("{} ({})", site, shift))
                .collect();
            rows.push(("Assigned Websites", sites.join(", ")));
        }
        let current = match self.current_shift {
            Shift::Morning => "Morning",
            Shift::Evening => "Evening",
        };
        rows.push(("Current Shift", current.to_string()));
        rows.push(("Last Updated", format_timestamp(self.updated_at)));

        let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
        let mut out = String::from("== Staff Details ==");
        for (label, value) in rows {
            out.push_str(&format!("\n{:<width$}  {}", label, value, width = width));
        }
        out
    }
}
