//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Station, StationId, Ticket};
use crate::network::NetworkModel;
use crate::planner::{HopDescription, Itinerary};

/// Request to buy a ticket (JSON body) or quote a trip (query string).
#[derive(Debug, Clone, Deserialize)]
pub struct TripRequest {
    /// Source station id; bare numbers are accepted (`4` → `S4`)
    pub source: String,

    /// Destination station id
    pub destination: String,
}

/// A station in listings.
#[derive(Debug, Clone, Serialize)]
pub struct StationResult {
    pub id: String,
    pub name: String,
    /// Codes of the lines serving this station
    pub lines: Vec<String>,
    pub is_transfer: bool,
}

impl StationResult {
    pub fn from_station(station: &Station, network: &NetworkModel) -> Self {
        let lines: Vec<String> = network
            .lines_serving(&station.id)
            .map(|lines| lines.iter().map(|l| l.code.to_string()).collect())
            .unwrap_or_default();
        Self {
            id: station.id.to_string(),
            name: station.name.clone(),
            is_transfer: lines.len() > 1,
            lines,
        }
    }
}

/// Response listing all stations.
#[derive(Debug, Serialize)]
pub struct StationListResponse {
    pub stations: Vec<StationResult>,
}

/// One hop of a route.
#[derive(Debug, Clone, Serialize)]
pub struct HopResult {
    pub from: String,
    pub to: String,
    pub line: String,
    pub line_code: String,
    /// Ready-to-print instruction, e.g. "Metro Center → Gallery Place (Red Line)"
    pub instruction: String,
}

impl From<&HopDescription> for HopResult {
    fn from(hop: &HopDescription) -> Self {
        Self {
            from: hop.from.clone(),
            to: hop.to.clone(),
            line: hop.line.clone(),
            line_code: hop.line_code.to_string(),
            instruction: hop.to_string(),
        }
    }
}

/// Convert a whole itinerary.
pub fn route_result(itinerary: &Itinerary) -> Vec<HopResult> {
    itinerary.iter().map(HopResult::from).collect()
}

/// An issued ticket.
#[derive(Debug, Clone, Serialize)]
pub struct TicketResult {
    pub id: String,
    pub source: String,
    pub source_name: String,
    pub destination: String,
    pub destination_name: String,
    pub fare: u32,
    /// Stations crossed
    pub hops: usize,
    pub path: Vec<String>,
    /// RFC 3339 timestamp
    pub issued_at: String,
}

impl TicketResult {
    pub fn from_ticket(ticket: &Ticket, network: &NetworkModel) -> Self {
        Self {
            id: ticket.id().to_string(),
            source: ticket.source().to_string(),
            source_name: station_name(network, ticket.source()),
            destination: ticket.destination().to_string(),
            destination_name: station_name(network, ticket.destination()),
            fare: ticket.fare().units(),
            hops: ticket.path().hops(),
            path: ticket.path().stations().iter().map(|s| s.to_string()).collect(),
            issued_at: ticket.issued_at().to_rfc3339(),
        }
    }
}

/// Response listing issued tickets.
#[derive(Debug, Serialize)]
pub struct TicketListResponse {
    pub tickets: Vec<TicketResult>,
}

/// Outcome of a purchase.
///
/// A trip between disconnected stations is an ordinary outcome, not an
/// HTTP error.
#[derive(Debug, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PurchaseResponse {
    Issued {
        ticket: TicketResult,
        route: Vec<HopResult>,
        transfers: usize,
    },
    NoPath {
        source: String,
        destination: String,
    },
}

/// Outcome of a quote.
#[derive(Debug, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum QuoteResponse {
    Quoted {
        fare: u32,
        hops: usize,
        path: Vec<String>,
        route: Vec<HopResult>,
        transfers: usize,
    },
    NoPath {
        source: String,
        destination: String,
    },
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Display name for a station, falling back to its id.
pub fn station_name(network: &NetworkModel, id: &StationId) -> String {
    network
        .station(id)
        .map(|s| s.name.clone())
        .unwrap_or_else(|_| id.to_string())
}
