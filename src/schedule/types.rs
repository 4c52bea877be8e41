use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

/// Display marker for a shift that is explicitly unstaffed
pub const OFF_DAY_MARKER: &str = "OFF DAY";

/// Display placeholder for a cell nobody has been put in yet
pub const UNASSIGNED_MARKER: &str = "-";

/// One of the fixed websites covered by the roster, in declared column order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Site {
    Suria88,
    Hakabet,
    Viobet,
    Tempo88,
    Fila88,
    Ijobet,
    Hahawin88,
    OffDayUg,
}

impl Site {
    pub const COUNT: usize = 8;

    /// Every site in the order the roster declares them
    pub const ALL: [Site; Site::COUNT] = [
        Site::Suria88,
        Site::Hakabet,
        Site::Viobet,
        Site::Tempo88,
        Site::Fila88,
        Site::Ijobet,
        Site::Hahawin88,
        Site::OffDayUg,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Site::Suria88 => "SURIA88",
            Site::Hakabet => "HAKABET",
            Site::Viobet => "VIOBET",
            Site::Tempo88 => "TEMPO88",
            Site::Fila88 => "FILA88",
            Site::Ijobet => "IJOBET",
            Site::Hahawin88 => "HAHAWIN88",
            Site::OffDayUg => "OFF DAY UG",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shift {
    Morning,
    Evening,
}

impl Shift {
    pub const ALL: [Shift; 2] = [Shift::Morning, Shift::Evening];

    /// Upper-case label used in search result rows
    pub fn badge(self) -> &'static str {
        match self {
            Shift::Morning => "MORNING",
            Shift::Evening => "EVENING",
        }
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shift::Morning => f.write_str("morning"),
            Shift::Evening => f.write_str("evening"),
        }
    }
}

impl FromStr for Shift {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "morning" | "day" => Ok(Shift::Morning),
            "evening" | "night" => Ok(Shift::Evening),
            _ => Err(()),
        }
    }
}

/// Content of a single (day, shift, site) cell
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Assignment {
    /// One or more staff sharing the cell; never empty
    Staffed(Vec<String>),
    OffDay,
    #[default]
    Unassigned,
}

impl Assignment {
    /// Parses raw cell text: blank or `-` is unassigned, `OFF DAY` is an off day,
    /// anything else is a comma-separated list of names.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == UNASSIGNED_MARKER {
            return Assignment::Unassigned;
        }
        if trimmed.eq_ignore_ascii_case(OFF_DAY_MARKER) {
            return Assignment::OffDay;
        }

        let names: Vec<String> = trimmed
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty() && *name != UNASSIGNED_MARKER)
            .map(str::to_string)
            .collect();

        if names.is_empty() {
            Assignment::Unassigned
        } else {
            Assignment::Staffed(names)
        }
    }

    pub fn names(&self) -> &[String] {
        match self {
            Assignment::Staffed(names) => names,
            _ => &[],
        }
    }

    /// Text shown in the grid cell
    pub fn display_text(&self) -> Cow<'_, str> {
        match self {
            Assignment::Staffed(names) if names.len() == 1 => Cow::Borrowed(names[0].as_str()),
            Assignment::Staffed(names) => Cow::Owned(names.join(", ")),
            Assignment::OffDay => Cow::Borrowed(OFF_DAY_MARKER),
            Assignment::Unassigned => Cow::Borrowed(UNASSIGNED_MARKER),
        }
    }
}

/// All site cells for one shift of one day, indexed by site
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShiftRoster {
    cells: [Assignment; Site::COUNT],
}

impl ShiftRoster {
    pub fn get(&self, site: Site) -> &Assignment {
        &self.cells[site.index()]
    }

    pub fn set(&mut self, site: Site, assignment: Assignment) {
        self.cells[site.index()] = assignment;
    }

    /// Cells in declared site order
    pub fn iter(&self) -> impl Iterator<Item = (Site, &Assignment)> {
        Site::ALL.into_iter().zip(self.cells.iter())
    }
}

/// Schedule for a single calendar date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySchedule {
    pub date: NaiveDate,
    pub morning: ShiftRoster,
    pub evening: ShiftRoster,
}

impl DaySchedule {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            morning: ShiftRoster::default(),
            evening: ShiftRoster::default(),
        }
    }

    /// Weekday name, always derived from the date
    pub fn day_name(&self) -> String {
        self.date.format("%A").to_string()
    }

    pub fn shift(&self, shift: Shift) -> &ShiftRoster {
        match shift {
            Shift::Morning => &self.morning,
            Shift::Evening => &self.evening,
        }
    }

    pub fn shift_mut(&mut self, shift: Shift) -> &mut ShiftRoster {
        match shift {
            Shift::Morning => &mut self.morning,
            Shift::Evening => &mut self.evening,
        }
    }
}

/// One matching staffed cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Full cell text, e.g. `Andi, Anggie` for shared coverage
    pub staff_name: String,
    pub date: NaiveDate,
    pub day_name: String,
    pub shift: Shift,
    pub site: Site,
}
