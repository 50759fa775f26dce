//! Tickets and fares.

use std::fmt;

use chrono::{DateTime, Utc};

use super::{Path, StationId};

/// An amount in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Fare(u32);

impl Fare {
    pub const ZERO: Fare = Fare(0);

    pub const fn new(units: u32) -> Self {
        Fare(units)
    }

    pub fn units(&self) -> u32 {
        self.0
    }

    /// `self * n`, or `None` if the amount does not fit.
    pub fn checked_mul(self, n: u32) -> Option<Fare> {
        self.0.checked_mul(n).map(Fare)
    }
}

impl fmt::Display for Fare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque ticket identifier, unique within one ledger.
///
/// Rendered as `T` followed by six zero-padded digits.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TicketId(u64);

impl TicketId {
    /// Only the ledger mints ids.
    pub(crate) fn from_sequence(n: u64) -> Self {
        TicketId(n)
    }

    /// Parse the rendered form back into an id (`T000042`).
    pub fn parse(s: &str) -> Option<Self> {
        let digits = s.strip_prefix('T')?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok().map(TicketId)
    }
}

impl fmt::Debug for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TicketId({})", self)
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{:06}", self.0)
    }
}

/// An issued ticket. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    id: TicketId,
    source: StationId,
    destination: StationId,
    fare: Fare,
    path: Path,
    issued_at: DateTime<Utc>,
}

impl Ticket {
    pub(crate) fn new(
        id: TicketId,
        source: StationId,
        destination: StationId,
        fare: Fare,
        path: Path,
        issued_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            source,
            destination,
            fare,
            path,
            issued_at,
        }
    }

    pub fn id(&self) -> TicketId {
        self.id
    }

    pub fn source(&self) -> &StationId {
        &self.source
    }

    pub fn destination(&self) -> &StationId {
        &self.destination
    }

    pub fn fare(&self) -> Fare {
        self.fare
    }

    /// The path this ticket was priced from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ticket[{}] {} → {} ({})",
            self.id, self.source, self.destination, self.fare
        )
    }
}
