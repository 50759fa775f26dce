//! Append-only in-memory record of issued tickets.

use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use tracing::info;

use crate::domain::{Fare, Path, StationId, Ticket, TicketId};

#[derive(Debug, Default)]
struct LedgerState {
    tickets: Vec<Ticket>,
    next_sequence: u64,
}

/// Ticket ledger.
///
/// Tickets are never updated or removed. `issue` takes `&self` and
/// serializes on an internal mutex, so one ledger can be shared between
/// request handlers while preserving issuance order and unique ids.
#[derive(Debug, Default)]
pub struct TicketLedger {
    state: Mutex<LedgerState>,
}

impl TicketLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new ticket and return it.
    ///
    /// Callers are expected to pass a fully validated, priced path; the
    /// ledger stores exactly what it is given.
    pub fn issue(
        &self,
        source: StationId,
        destination: StationId,
        fare: Fare,
        path: Path,
    ) -> Ticket {
        let mut state = self.lock();
        state.next_sequence += 1;
        let id = TicketId::from_sequence(state.next_sequence);

        let ticket = Ticket::new(id, source, destination, fare, path, Utc::now());
        state.tickets.push(ticket.clone());

        info!(
            ticket = %ticket.id(),
            source = %ticket.source(),
            destination = %ticket.destination(),
            fare = %ticket.fare(),
            "Ticket issued"
        );
        ticket
    }

    /// All tickets, in issuance order.
    pub fn list(&self) -> Vec<Ticket> {
        self.lock().tickets.clone()
    }

    /// Find a ticket by id.
    pub fn get(&self, id: TicketId) -> Option<Ticket> {
        self.lock().tickets.iter().find(|t| t.id() == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().tickets.is_empty()
    }

    // Every write completes a push before releasing the lock, so the state
    // behind a poisoned mutex is still consistent.
    fn lock(&self) -> MutexGuard<'_, LedgerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
