//! Application state for the web layer.

use std::sync::Arc;

use crate::metro::MetroSystem;

/// Shared application state.
///
/// The network inside `metro` is read-only; the ticket ledger serializes
/// its own writes, so no extra locking is needed here.
#[derive(Clone)]
pub struct AppState {
    /// Routing, pricing and ticketing
    pub metro: Arc<MetroSystem>,

    /// Currency symbol for HTML pages
    pub currency: Arc<str>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(metro: MetroSystem, currency: &str) -> Self {
        Self {
            metro: Arc::new(metro),
            currency: Arc::from(currency),
        }
    }
}
