//! Web layer for the metro ticketing system.
//!
//! Provides an HTML front end plus JSON endpoints for listing stations,
//! buying tickets, listing tickets and exporting the network map.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
