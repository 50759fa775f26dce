//! The metro system: network, fares and ticket ledger behind one interface.
//!
//! Front ends (the web layer, a CLI, a map renderer) talk to
//! [`MetroSystem`] and never to the router or ledger directly.

use tracing::error;

use crate::domain::{Fare, Path, Station, StationId, Ticket};
use crate::ledger::TicketLedger;
use crate::network::{NetworkError, NetworkMap, NetworkModel};
use crate::planner::{FareCalculator, Itinerary, PlanError, Router, describe};

/// Why a ticket could not be issued.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PurchaseError {
    /// Source or destination is not a station in the network
    #[error("unknown station: {0}")]
    UnknownStation(StationId),

    /// The stations are in disconnected parts of the network
    #[error("no route from {from} to {to}")]
    NoPath { from: StationId, to: StationId },

    /// The router produced a path the network cannot describe
    #[error("inconsistent path: no connection between {from} and {to}")]
    InconsistentPath { from: StationId, to: StationId },

    /// The configured per-hop rate is too large to price this trip
    #[error("fare overflow: {hops} hops at {per_hop} per hop")]
    FareOverflow { hops: usize, per_hop: Fare },

    /// Any other network lookup failure
    #[error(transparent)]
    Network(NetworkError),
}

impl From<NetworkError> for PurchaseError {
    fn from(e: NetworkError) -> Self {
        match e {
            NetworkError::UnknownStation(id) => PurchaseError::UnknownStation(id),
            other => PurchaseError::Network(other),
        }
    }
}

impl From<PlanError> for PurchaseError {
    fn from(e: PlanError) -> Self {
        match e {
            PlanError::Network(e) => e.into(),
            PlanError::InconsistentPath { from, to } => {
                PurchaseError::InconsistentPath { from, to }
            }
            PlanError::FareOverflow { hops, per_hop } => {
                PurchaseError::FareOverflow { hops, per_hop }
            }
        }
    }
}

/// Price and route for a trip, without issuing a ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub path: Path,
    pub fare: Fare,
    pub itinerary: Itinerary,
}

/// An issued ticket together with its route instructions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub ticket: Ticket,
    pub itinerary: Itinerary,
}

/// Routing, pricing and ticketing over one network.
#[derive(Debug)]
pub struct MetroSystem {
    network: NetworkModel,
    fares: FareCalculator,
    ledger: TicketLedger,
}

impl MetroSystem {
    /// Create a system with an empty ticket ledger.
    pub fn new(network: NetworkModel, fares: FareCalculator) -> Self {
        Self {
            network,
            fares,
            ledger: TicketLedger::new(),
        }
    }

    /// Read-only access to the network.
    pub fn network(&self) -> &NetworkModel {
        &self.network
    }

    pub fn fares(&self) -> &FareCalculator {
        &self.fares
    }

    /// All stations, in load order.
    pub fn list_stations(&self) -> &[Station] {
        self.network.stations()
    }

    /// All issued tickets, in issuance order.
    pub fn list_tickets(&self) -> Vec<Ticket> {
        self.ledger.list()
    }

    pub fn ticket_count(&self) -> usize {
        self.ledger.len()
    }

    /// Snapshot of the network for a map renderer.
    pub fn map(&self) -> NetworkMap {
        NetworkMap::from_network(&self.network)
    }

    /// Route and price a trip without issuing a ticket.
    pub fn quote(
        &self,
        source: &StationId,
        destination: &StationId,
    ) -> Result<Quote, PurchaseError> {
        for id in [source, destination] {
            if !self.network.contains_station(id) {
                return Err(PurchaseError::UnknownStation(id.clone()));
            }
        }

        let path = Router::new(&self.network)
            .find_path(source, destination)?
            .ok_or_else(|| PurchaseError::NoPath {
                from: source.clone(),
                to: destination.clone(),
            })?;

        let fare = self.fares.price(&path)?;
        let itinerary = describe(&path, &self.network).inspect_err(|e| {
            error!(
                source = %source,
                destination = %destination,
                error = %e,
                "Router returned a path the network cannot describe"
            );
        })?;

        Ok(Quote {
            path,
            fare,
            itinerary,
        })
    }

    /// Route, price and issue a ticket.
    ///
    /// Nothing is written to the ledger unless routing, pricing and
    /// itinerary construction all succeed.
    pub fn purchase(
        &self,
        source: &StationId,
        destination: &StationId,
    ) -> Result<Receipt, PurchaseError> {
        let quote = self.quote(source, destination)?;
        let ticket = self
            .ledger
            .issue(source.clone(), destination.clone(), quote.fare, quote.path);

        Ok(Receipt {
            ticket,
            itinerary: quote.itinerary,
        })
    }
}
