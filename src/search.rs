use tracing::debug;

use crate::schedule::{Assignment, ScheduleStore, SearchResult, Shift};

/// A non-blank, trimmed search term
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    text: String,
    needle: String,
}

impl Query {
    /// Returns `None` for empty or whitespace-only input, which means
    /// "no active search" rather than "match everything".
    pub fn parse(raw: &str) -> Option<Self> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            text: text.to_string(),
            needle: text.to_lowercase(),
        })
    }

    /// The trimmed query as typed
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Case-insensitive containment against a cell's display text
    pub fn matches(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.needle)
    }
}

/// Filters the roster's staffed cells by staff name
pub struct SearchEngine<'a> {
    store: &'a ScheduleStore,
}

impl<'a> SearchEngine<'a> {
    pub fn new(store: &'a ScheduleStore) -> Self {
        Self { store }
    }

    /// Every staffed cell whose joined names contain the query.
    ///
    /// Order: date, then morning before evening, then declared site order.
    /// A shared cell such as `Andi, Anggie` yields a single result.
    pub fn search(&self, query: &Query) -> Vec<SearchResult> {
        let mut results = Vec::new();

        for day in self.store.all_days() {
            for shift in Shift::ALL {
                for (site, assignment) in day.shift(shift).iter() {
                    let Assignment::Staffed(_) = assignment else {
                        continue;
                    };
                    let staff_name = assignment.display_text();
                    if query.matches(&staff_name) {
                        results.push(SearchResult {
                            staff_name: staff_name.into_owned(),
                            date: day.date,
                            day_name: day.day_name(),
                            shift,
                            site,
                        });
                    }
                }
            }
        }

        debug!(query = query.as_str(), matches = results.len(), "search finished");
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{DaySchedule, Site};
    use chrono::NaiveDate;

    fn reference() -> &'static ScheduleStore {
        ScheduleStore::reference().unwrap()
    }

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, d).unwrap()
    }

    #[test]
    fn blank_queries_are_not_searches() {
        assert!(Query::parse("").is_none());
        assert!(Query::parse("   \t").is_none());
        assert_eq!(Query::parse("  Andi ").unwrap().as_str(), "Andi");
    }

    #[test]
    fn andi_matches_single_and_shared_cells_on_the_first_day() {
        let query = Query::parse("andi").unwrap();
        let results = SearchEngine::new(reference()).search(&query);

        let first_day: Vec<_> = results.iter().filter(|r| r.date == date(21)).collect();
        assert_eq!(first_day.len(), 2);

        assert_eq!(first_day[0].site, Site::Hakabet);
        assert_eq!(first_day[0].shift, Shift::Morning);
        assert_eq!(first_day[0].staff_name, "Andi");
        assert_eq!(first_day[0].day_name, "Sunday");

        assert_eq!(first_day[1].site, Site::Hahawin88);
        assert_eq!(first_day[1].staff_name, "Andi, Anggie");
    }

    #[test]
    fn every_result_contains_the_query() {
        let query = Query::parse("AN").unwrap();
        let results = SearchEngine::new(reference()).search(&query);
        assert!(!results.is_empty());
        assert!(results.iter().all(|r| r.staff_name.to_lowercase().contains("an")));
    }

    #[test]
    fn search_is_complete_over_staffed_cells() {
        let store = reference();
        let query = Query::parse("heno").unwrap();
        let results = SearchEngine::new(store).search(&query);

        let expected = store
            .all_days()
            .iter()
            .flat_map(|day| Shift::ALL.into_iter().map(move |shift| day.shift(shift)))
            .flat_map(|roster| roster.iter())
            .filter(|(_, cell)| cell.names().iter().any(|n| n.to_lowercase().contains("heno")))
            .count();
        assert_eq!(results.len(), expected);
    }

    #[test]
    fn results_follow_date_shift_site_order() {
        let query = Query::parse("a").unwrap();
        let results = SearchEngine::new(reference()).search(&query);

        let keys: Vec<_> = results
            .iter()
            .map(|r| (r.date, r.shift == Shift::Evening, r.site))
            .collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn repeated_searches_are_identical() {
        let engine = SearchEngine::new(reference());
        let query = Query::parse("Valvi").unwrap();
        assert_eq!(engine.search(&query), engine.search(&query));
    }

    #[test]
    fn no_match_is_an_empty_sequence() {
        let query = Query::parse("zzz").unwrap();
        assert!(SearchEngine::new(reference()).search(&query).is_empty());
    }

    #[test]
    fn off_day_and_unassigned_cells_never_match() {
        let mut day = DaySchedule::new(date(21));
        day.morning.set(Site::Suria88, Assignment::OffDay);
        let store = ScheduleStore::new(vec![day]);
        let engine = SearchEngine::new(&store);

        assert!(engine.search(&Query::parse("off").unwrap()).is_empty());
        assert!(engine.search(&Query::parse("-").unwrap()).is_empty());
    }
}
