use std::time::Duration;

use chrono::NaiveDateTime;
use tokio::time::Instant;
use tracing::debug;

use super::details::StaffDetails;
use super::page::{Page, Region};
use super::timer::{Ticket, TimerSlot};
use crate::display::{format_clock, format_long_date, format_match_count, format_short_date, format_table};
use crate::error::ViewError;
use crate::schedule::{DaySchedule, SearchResult, Site};
use crate::search::Query;

const NO_MATCH_TITLE: &str = "No staff found matching your search criteria";
const NO_MATCH_HINT: &str = "Try searching for a different name or website";

/// Which transient view a timer belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    Notice,
    Details,
}

/// State of the search area
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchView {
    Idle,
    Results { query: String, count: usize },
    NoMatch { query: String },
}

#[derive(Debug, Clone, Copy)]
pub struct Timings {
    /// How long the no-match notice stays up
    pub notice: Duration,
    /// How long the staff details panel stays up
    pub details: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            notice: Duration::from_secs(3),
            details: Duration::from_secs(10),
        }
    }
}

/// Owns the page and every change made to it
pub struct Presenter {
    page: Page,
    view: SearchView,
    notice: TimerSlot,
    details: TimerSlot,
    timings: Timings,
}

impl Presenter {
    pub fn mount(layout: &str, timings: Timings) -> Result<Self, ViewError> {
        let mut presenter = Self {
            page: Page::parse(layout)?,
            view: SearchView::Idle,
            notice: TimerSlot::default(),
            details: TimerSlot::default(),
            timings,
        };
        presenter.render_input("");
        Ok(presenter)
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn view(&self) -> &SearchView {
        &self.view
    }

    /// Redraws the full schedule grid: a morning and an evening row per day,
    /// led by the weekday name and the date respectively.
    pub fn render_grid(&mut self, days: &[DaySchedule]) {
        let mut header = vec!["Date"];
        header.extend(Site::ALL.iter().map(|site| site.label()));

        let mut rows = Vec::with_capacity(days.len() * 2);
        for day in days {
            let mut morning = vec![day.day_name()];
            morning.extend(day.morning.iter().map(|(_, cell)| cell.display_text().into_owned()));
            rows.push(morning);

            let mut evening = vec![format_long_date(day.date)];
            evening.extend(day.evening.iter().map(|(_, cell)| cell.display_text().into_owned()));
            rows.push(evening);
        }

        debug!(rows = rows.len(), "grid rendered");
        self.page.set(Region::Grid, format_table(&header, &rows));
    }

    pub fn render_clock(&mut self, now: NaiveDateTime) {
        self.page.set(Region::Clock, format_clock(now));
    }

    /// Echoes the current text of the search input
    pub fn render_input(&mut self, raw: &str) {
        self.page.set(Region::Search, format!("Search staff: {}", raw));
    }

    /// Moves the search area to the state implied by `query` and `results`.
    ///
    /// A blank query returns to idle. A query with no results shows the
    /// no-match notice and arms its dismissal; any later call supersedes
    /// that pending dismissal.
    pub fn render_search(&mut self, query: Option<&Query>, results: &[SearchResult], now: Instant) {
        self.notice.cancel();

        let Some(query) = query else {
            self.page.clear(Region::Results);
            self.view = SearchView::Idle;
            return;
        };

        if results.is_empty() {
            self.page.set(Region::Results, format!("{}\n{}", NO_MATCH_TITLE, NO_MATCH_HINT));
            self.notice.arm(now, self.timings.notice);
            self.view = SearchView::NoMatch {
                query: query.as_str().to_string(),
            };
            return;
        }

        let rows: Vec<Vec<String>> = results
            .iter()
            .map(|result| {
                vec![
                    result.staff_name.clone(),
                    format_short_date(result.date),
                    result.shift.badge().to_string(),
                    format!("Websites: {}", result.site),
                ]
            })
            .collect();
        let panel = format!(
            "Search Results for \"{}\"\n{}\n{}",
            query.as_str(),
            format_match_count(results.len()),
            format_table(&["Staff", "Date", "Shift", "Websites"], &rows)
        );
        self.page.set(Region::Results, panel);
        self.view = SearchView::Results {
            query: query.as_str().to_string(),
            count: results.len(),
        };
    }

    pub fn show_staff_details(&mut self, details: &StaffDetails, now: Instant) {
        self.page.set(Region::Details, details.render());
        self.details.arm(now, self.timings.details);
    }

    /// Handles a due timer. Returns false for a ticket that was superseded.
    pub fn dismiss(&mut self, kind: TimerKind, ticket: Ticket) -> bool {
        match kind {
            TimerKind::Notice => {
                if !self.notice.fire(ticket) {
                    return false;
                }
                if matches!(self.view, SearchView::NoMatch { .. }) {
                    self.page.clear(Region::Results);
                    self.view = SearchView::Idle;
                }
                true
            }
            TimerKind::Details => {
                if !self.details.fire(ticket) {
                    return false;
                }
                self.page.clear(Region::Details);
                true
            }
        }
    }

    /// The earliest pending dismissal
    pub fn next_deadline(&self) -> Option<(Instant, TimerKind, Ticket)> {
        let notice = self
            .notice
            .deadline()
            .map(|(at, ticket)| (at, TimerKind::Notice, ticket));
        let details = self
            .details
            .deadline()
            .map(|(at, ticket)| (at, TimerKind::Details, ticket));

        match (notice, details) {
            (Some(a), Some(b)) => Some(if b.0 < a.0 { b } else { a }),
            (a, b) => a.or(b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::ScheduleStore;
    use crate::search::SearchEngine;
    use crate::view::DEFAULT_LAYOUT;

    fn presenter() -> Presenter {
        Presenter::mount(DEFAULT_LAYOUT, Timings::default()).unwrap()
    }

    fn search(raw: &str) -> (Option<Query>, Vec<SearchResult>) {
        let store = ScheduleStore::reference().unwrap();
        let query = Query::parse(raw);
        let results = query
            .as_ref()
            .map(|q| SearchEngine::new(store).search(q))
            .unwrap_or_default();
        (query, results)
    }

    #[test]
    fn grid_has_two_rows_per_day_and_rerendering_replaces_it() {
        let store = ScheduleStore::reference().unwrap();
        let mut presenter = presenter();
        presenter.render_grid(store.all_days());
        let once = presenter.page().render();
        presenter.render_grid(store.all_days());
        assert_eq!(presenter.page().render(), once);

        let grid = presenter.page().region(Region::Grid);
        // header + rule + rows
        assert_eq!(grid.lines().count(), 2 + store.len() * 2);
        assert!(grid.contains("| Sunday "));
        assert!(grid.contains("| December 21, 2025 "));
        assert!(grid.contains("Andi, Anggie"));
    }

    #[test]
    fn unassigned_cells_render_as_a_dash() {
        let store = ScheduleStore::reference().unwrap();
        let mut presenter = presenter();
        let day = store.day(chrono::NaiveDate::from_ymd_opt(2025, 12, 23).unwrap()).unwrap();
        presenter.render_grid(std::slice::from_ref(day));

        let grid = presenter.page().region(Region::Grid);
        let morning = grid.lines().nth(2).unwrap();
        assert!(morning.starts_with("| Tuesday "));
        let last_cell = morning.split('|').map(str::trim).filter(|c| !c.is_empty()).last();
        assert_eq!(last_cell, Some("-"));
    }

    #[test]
    fn results_panel_lists_matches_with_a_count() {
        let mut presenter = presenter();
        let (query, results) = search("  Kheiren ");
        presenter.render_search(query.as_ref(), &results, Instant::now());

        assert_eq!(
            presenter.view(),
            &SearchView::Results {
                query: "Kheiren".to_string(),
                count: results.len()
            }
        );
        let panel = presenter.page().region(Region::Results);
        assert!(panel.starts_with("Search Results for \"Kheiren\"\n"));
        assert!(panel.contains(&format!("{} assignments found", results.len())));
        assert!(panel.contains("| Kheiren        | Sun, Dec 21, 2025 | EVENING | Websites: FILA88"));
        assert!(presenter.next_deadline().is_none());
    }

    #[test]
    fn clearing_restores_the_base_page() {
        let store = ScheduleStore::reference().unwrap();
        let mut presenter = presenter();
        presenter.render_grid(store.all_days());
        let base = presenter.page().render();

        let (query, results) = search("andi");
        presenter.render_search(query.as_ref(), &results, Instant::now());
        assert_ne!(presenter.page().render(), base);

        presenter.render_search(None, &[], Instant::now());
        assert_eq!(presenter.view(), &SearchView::Idle);
        assert_eq!(presenter.page().render(), base);
    }

    #[test]
    fn no_match_notice_dismisses_itself() {
        let mut presenter = presenter();
        let now = Instant::now();
        let (query, results) = search("zzz");
        presenter.render_search(query.as_ref(), &results, now);

        assert!(matches!(presenter.view(), SearchView::NoMatch { .. }));
        assert!(presenter.page().region(Region::Results).contains(NO_MATCH_TITLE));

        let (at, kind, ticket) = presenter.next_deadline().unwrap();
        assert_eq!(at, now + Duration::from_secs(3));
        assert_eq!(kind, TimerKind::Notice);
        assert!(presenter.dismiss(kind, ticket));
        assert_eq!(presenter.view(), &SearchView::Idle);
        assert!(presenter.page().region(Region::Results).is_empty());
    }

    #[test]
    fn stale_dismissal_does_not_erase_newer_results() {
        let mut presenter = presenter();
        let now = Instant::now();
        let (query, results) = search("zzz");
        presenter.render_search(query.as_ref(), &results, now);
        let (_, kind, stale) = presenter.next_deadline().unwrap();

        let (query, results) = search("Dea");
        presenter.render_search(query.as_ref(), &results, now + Duration::from_secs(1));

        assert!(!presenter.dismiss(kind, stale));
        assert!(matches!(presenter.view(), SearchView::Results { .. }));
        assert!(presenter.page().region(Region::Results).contains("Dea"));
    }

    #[test]
    fn repeated_no_match_rearms_the_notice() {
        let mut presenter = presenter();
        let now = Instant::now();
        let (query, results) = search("zzz");
        presenter.render_search(query.as_ref(), &results, now);
        let (_, _, first) = presenter.next_deadline().unwrap();

        let (query, results) = search("zzzz");
        presenter.render_search(query.as_ref(), &results, now + Duration::from_secs(2));
        let (at, _, second) = presenter.next_deadline().unwrap();

        assert_eq!(at, now + Duration::from_secs(5));
        assert!(!presenter.dismiss(TimerKind::Notice, first));
        assert!(presenter.page().region(Region::Results).contains(NO_MATCH_TITLE));
        assert!(presenter.dismiss(TimerKind::Notice, second));
    }

    #[test]
    fn details_panel_hides_after_its_own_delay() {
        let store = ScheduleStore::reference().unwrap();
        let mut presenter = presenter();
        let now = Instant::now();
        let date = chrono::NaiveDate::from_ymd_opt(2025, 12, 21).unwrap();
        let details = StaffDetails::lookup(store, "Dea", date, date.and_hms_opt(18, 0, 0).unwrap());
        presenter.show_staff_details(&details, now);

        assert!(presenter.page().region(Region::Details).contains("Staff Name"));
        let (at, kind, ticket) = presenter.next_deadline().unwrap();
        assert_eq!((at, kind), (now + Duration::from_secs(10), TimerKind::Details));
        assert!(presenter.dismiss(kind, ticket));
        assert!(presenter.page().region(Region::Details).is_empty());
    }

    #[test]
    fn missing_mount_point_is_reported() {
        assert!(matches!(
            Presenter::mount("{grid}\n", Timings::default()),
            Err(ViewError::MissingMount("search"))
        ));
    }
}
