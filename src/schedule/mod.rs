pub mod types;
pub mod store;

pub use types::{Assignment, DaySchedule, SearchResult, Shift, ShiftRoster, Site};
pub use types::{OFF_DAY_MARKER, UNASSIGNED_MARKER};
pub use store::ScheduleStore;
