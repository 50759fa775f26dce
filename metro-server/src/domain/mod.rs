//! Domain types for the metro ticketing system.
//!
//! This module contains the validated identifiers and value types shared by
//! the network model, the planner and the ticket ledger. All types enforce
//! their invariants at construction time, so code that receives these types
//! can trust their validity.

mod line;
mod path;
mod station;
mod ticket;

pub use line::{InvalidLineCode, Line, LineCode};
pub use path::{InvalidPath, Path};
pub use station::{InvalidStationId, Station, StationId};
pub use ticket::{Fare, Ticket, TicketId};
