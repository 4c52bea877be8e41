pub mod details;
pub mod page;
pub mod presenter;
pub mod timer;

pub use details::StaffDetails;
pub use page::{Page, Region, DEFAULT_LAYOUT};
pub use presenter::{Presenter, SearchView, TimerKind, Timings};
pub use timer::{Ticket, TimerSlot};
