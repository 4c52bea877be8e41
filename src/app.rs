use std::io::{self, Write};
use std::time::Duration;

use chrono::NaiveDate;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::time::{interval_at, sleep_until, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::clock::Clock;
use crate::parser::parse_date;
use crate::schedule::ScheduleStore;
use crate::search::{Query, SearchEngine};
use crate::view::{Presenter, StaffDetails, Ticket, TimerKind};

/// Clears the terminal and homes the cursor before each redraw
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// One line typed at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// New value of the search box; blank clears the search
    Search(String),
    Staff { name: String, date: Option<NaiveDate> },
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Command {
        let trimmed = line.trim();
        if trimmed == "/quit" {
            return Command::Quit;
        }
        if let Some(rest) = trimmed.strip_prefix("/staff") {
            if rest.is_empty() || rest.starts_with(char::is_whitespace) {
                let rest = rest.trim();
                let (name, date) = match rest.rsplit_once(char::is_whitespace) {
                    Some((name, last)) => match parse_date(last) {
                        Some(date) => (name.trim(), Some(date)),
                        None => (rest, None),
                    },
                    None => (rest, None),
                };
                return Command::Staff {
                    name: name.to_string(),
                    date,
                };
            }
        }
        Command::Search(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Input(String),
    /// Periodic clock refresh
    Tick,
    Timer(TimerKind, Ticket),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// The viewer: one store, one presenter, handlers run one event at a time
pub struct App<'a, C: Clock> {
    store: &'a ScheduleStore,
    presenter: Presenter,
    clock: C,
    clock_interval: Duration,
}

impl<'a, C: Clock> App<'a, C> {
    /// Draws the base page: clock header and the full grid
    pub fn new(store: &'a ScheduleStore, mut presenter: Presenter, clock: C, clock_interval: Duration) -> Self {
        presenter.render_clock(clock.now());
        presenter.render_grid(store.all_days());
        Self {
            store,
            presenter,
            clock,
            clock_interval,
        }
    }

    pub fn presenter(&self) -> &Presenter {
        &self.presenter
    }

    pub fn handle(&mut self, event: Event, now: Instant) -> Flow {
        match event {
            Event::Input(line) => return self.handle_input(&line, now),
            Event::Tick => self.presenter.render_clock(self.clock.now()),
            Event::Timer(kind, ticket) => {
                if !self.presenter.dismiss(kind, ticket) {
                    debug!(?kind, "ignored superseded timer");
                }
            }
        }
        Flow::Continue
    }

    fn handle_input(&mut self, line: &str, now: Instant) -> Flow {
        match Command::parse(line) {
            Command::Quit => return Flow::Quit,
            Command::Staff { name, date } => {
                if name.is_empty() {
                    warn!("/staff needs a name");
                    return Flow::Continue;
                }
                let wall = self.clock.now();
                let date = date.unwrap_or_else(|| wall.date());
                let details = StaffDetails::lookup(self.store, &name, date, wall);
                info!(staff = %details.staff_name, %date, sites = details.websites.len(), "staff details");
                self.presenter.show_staff_details(&details, now);
            }
            Command::Search(raw) => {
                self.presenter.render_input(&raw);
                let query = Query::parse(&raw);
                let results = match &query {
                    Some(query) => SearchEngine::new(self.store).search(query),
                    None => Vec::new(),
                };
                if let Some(query) = &query {
                    info!(query = query.as_str(), matches = results.len(), "search");
                }
                self.presenter.render_search(query.as_ref(), &results, now);
            }
        }
        Flow::Continue
    }

    pub fn draw<W: Write>(&self, output: &mut W) -> io::Result<()> {
        write!(output, "{}{}", CLEAR_SCREEN, self.presenter.page().render())?;
        output.flush()
    }

    /// Runs until `/quit` or end of input.
    ///
    /// Input lines, clock ticks and dismissal deadlines are served one at a
    /// time; the page is redrawn after each.
    pub async fn run<R, W>(&mut self, input: R, output: &mut W) -> io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut lines = input.lines();
        let mut ticker = interval_at(Instant::now() + self.clock_interval, self.clock_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        self.draw(output)?;
        loop {
            let pending = self.presenter.next_deadline();
            let due = async move {
                match pending {
                    Some((at, kind, ticket)) => {
                        sleep_until(at).await;
                        (kind, ticket)
                    }
                    None => std::future::pending().await,
                }
            };

            let event = tokio::select! {
                line = lines.next_line() => match line? {
                    Some(line) => Event::Input(line),
                    None => break,
                },
                _ = ticker.tick() => Event::Tick,
                (kind, ticket) = due => Event::Timer(kind, ticket),
            };

            if self.handle(event, Instant::now()) == Flow::Quit {
                break;
            }
            self.draw(output)?;
        }

        info!("viewer closed");
        Ok(())
    }
}
