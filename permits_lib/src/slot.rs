//! Sequenced holder for the most recent search results.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use permits_api::types::Permit;

/// Sequence number a search takes before its request is sent. Later
/// submissions always receive larger tickets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Ticket {
    pub fn seq(self) -> u64 {
        self.0
    }
}

struct SlotState {
    /// Ticket of the result currently shown. 0 means nothing applied yet.
    applied: u64,
    records: Arc<Vec<Permit>>,
}

/// The single piece of shared result state.
///
/// Completed searches are applied only when their ticket is newer than the
/// one already applied, so a slow response to an earlier submission can never
/// overwrite the results of a later one.
pub struct ResultSlot {
    next: AtomicU64,
    state: Mutex<SlotState>,
}

impl Default for ResultSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultSlot {
    pub fn new() -> Self {
        Self {
            next: AtomicU64::new(0),
            state: Mutex::new(SlotState {
                applied: 0,
                records: Arc::new(Vec::new()),
            }),
        }
    }

    /// Takes the next ticket.
    pub fn begin(&self) -> Ticket {
        Ticket(self.next.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Replaces the held records if `ticket` is newer than the last applied
    /// one. Returns whether the records were applied.
    pub fn apply(&self, ticket: Ticket, records: Vec<Permit>) -> bool {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        if ticket.0 <= state.applied {
            tracing::debug!(
                "Discarding stale result #{} (showing #{})",
                ticket.0,
                state.applied
            );
            return false;
        }
        state.applied = ticket.0;
        state.records = Arc::new(records);
        true
    }

    /// The currently held records.
    pub fn records(&self) -> Arc<Vec<Permit>> {
        self.snapshot().1
    }

    /// Ticket and records of the currently held result, read under one lock.
    /// The ticket is `None` before the first apply.
    pub fn snapshot(&self) -> (Option<Ticket>, Arc<Vec<Permit>>) {
        let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        let ticket = (state.applied > 0).then_some(Ticket(state.applied));
        (ticket, Arc::clone(&state.records))
    }
}
