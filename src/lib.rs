//! Staff shift roster viewer.
//!
//! A fixed roster of staff covering a set of websites over morning and
//! evening shifts, rendered as a terminal grid with a live staff-name search.

pub mod app;
pub mod clock;
pub mod config;
pub mod display;
pub mod error;
pub mod parser;
pub mod schedule;
pub mod search;
pub mod view;

pub use app::{App, Command, Event, Flow};
pub use config::Config;
pub use error::{RosterError, ViewError};
pub use schedule::{Assignment, DaySchedule, ScheduleStore, SearchResult, Shift, Site};
pub use search::{Query, SearchEngine};
