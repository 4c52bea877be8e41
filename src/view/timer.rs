use std::time::Duration;

use tokio::time::Instant;

/// Identifies one arming of a [`TimerSlot`]. Only the latest ticket is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
}

/// A one-shot, supersedable delay.
///
/// Arming or cancelling bumps the generation, so a ticket handed out
/// earlier can never fire against newer output.
#[derive(Debug, Default)]
pub struct TimerSlot {
    generation: u64,
    armed: Option<Instant>,
}

impl TimerSlot {
    pub fn arm(&mut self, now: Instant, delay: Duration) -> Ticket {
        self.generation += 1;
        self.armed = Some(now + delay);
        Ticket { generation: self.generation }
    }

    pub fn cancel(&mut self) {
        if self.armed.take().is_some() {
            self.generation += 1;
        }
    }

    /// When the live ticket is due, if any
    pub fn deadline(&self) -> Option<(Instant, Ticket)> {
        self.armed.map(|at| (at, Ticket { generation: self.generation }))
    }

    /// Consumes the live ticket. Stale tickets return false and change nothing.
    pub fn fire(&mut self, ticket: Ticket) -> bool {
        if self.armed.is_some() && ticket.generation == self.generation {
            self.armed = None;
            true
        } else {
            false
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }
}
