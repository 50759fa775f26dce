//! Station paths through the network.

use super::StationId;

/// Error returned when constructing an empty path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("a path must contain at least one station")]
pub struct InvalidPath;

/// An ordered, non-empty sequence of stations.
///
/// A single-station path is the trivial zero-hop path (source equals
/// destination). Whether consecutive stations are actually connected is a
/// property of the network, not of the path; the router only ever produces
/// connected paths, and the itinerary builder re-checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    stations: Vec<StationId>,
}

impl Path {
    /// Build a path from its stations.
    pub fn new(stations: Vec<StationId>) -> Result<Self, InvalidPath> {
        if stations.is_empty() {
            return Err(InvalidPath);
        }
        Ok(Self { stations })
    }

    /// The zero-hop path consisting of a single station.
    pub fn trivial(station: StationId) -> Self {
        Self {
            stations: vec![station],
        }
    }

    /// Extend the path by one station.
    pub(crate) fn push(&mut self, station: StationId) {
        self.stations.push(station);
    }

    /// Number of connections traversed.
    pub fn hops(&self) -> usize {
        self.stations.len() - 1
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Always false; kept for symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn origin(&self) -> &StationId {
        &self.stations[0]
    }

    pub fn destination(&self) -> &StationId {
        &self.stations[self.stations.len() - 1]
    }

    pub fn stations(&self) -> &[StationId] {
        &self.stations
    }

    /// Consecutive `(from, to)` pairs, one per hop.
    pub fn pairs(&self) -> impl Iterator<Item = (&StationId, &StationId)> + '_ {
        self.stations.windows(2).map(|w| (&w[0], &w[1]))
    }
}
