//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::Ticket;
use crate::metro::Receipt;
use crate::network::NetworkModel;

use super::dto::station_name;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page: stations, purchase form and ticket history.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub stations: Vec<StationView>,
    pub tickets: Vec<TicketView>,
    pub currency: String,
}

/// Receipt shown after a purchase.
#[derive(Template)]
#[template(path = "receipt.html")]
pub struct ReceiptTemplate {
    pub ticket: TicketView,
    pub route: Vec<String>,
    pub legs: Vec<String>,
    pub currency: String,
}

/// Error page.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub message: String,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Station view model for templates.
#[derive(Debug, Clone)]
pub struct StationView {
    pub id: String,
    pub name: String,
    pub lines: String,
    pub is_transfer: bool,
}

impl StationView {
    pub fn all(network: &NetworkModel) -> Vec<Self> {
        network
            .stations()
            .iter()
            .map(|s| {
                let lines = network.lines_serving(&s.id).unwrap_or_default();
                StationView {
                    id: s.id.to_string(),
                    name: s.name.clone(),
                    lines: lines
                        .iter()
                        .map(|l| l.name.as_str())
                        .collect::<Vec<_>>()
                        .join(", "),
                    is_transfer: lines.len() > 1,
                }
            })
            .collect()
    }
}

/// Ticket view model for templates.
#[derive(Debug, Clone)]
pub struct TicketView {
    pub id: String,
    pub from: String,
    pub to: String,
    pub fare: u32,
    pub hops: usize,
    pub issued_at: String,
}

impl TicketView {
    pub fn from_ticket(ticket: &Ticket, network: &NetworkModel) -> Self {
        Self {
            id: ticket.id().to_string(),
            from: station_name(network, ticket.source()),
            to: station_name(network, ticket.destination()),
            fare: ticket.fare().units(),
            hops: ticket.path().hops(),
            issued_at: ticket.issued_at().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        }
    }
}

impl ReceiptTemplate {
    pub fn from_receipt(receipt: &Receipt, network: &NetworkModel, currency: &str) -> Self {
        Self {
            ticket: TicketView::from_ticket(&receipt.ticket, network),
            route: receipt.itinerary.iter().map(|h| h.to_string()).collect(),
            legs: receipt
                .itinerary
                .legs()
                .iter()
                .map(|l| l.to_string())
                .collect(),
            currency: currency.to_string(),
        }
    }
}
