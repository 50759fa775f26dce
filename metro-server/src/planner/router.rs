//! Breadth-first shortest-path search.
//!
//! Fares depend only on hop count, so every connection has unit weight and
//! BFS finds a minimal path. Ties between equally short paths are broken by
//! neighbour enumeration order: the first path discovered wins.

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::domain::{Path, StationId};
use crate::network::{NetworkError, NetworkModel};

/// Shortest-path router over a network.
#[derive(Debug, Clone, Copy)]
pub struct Router<'a> {
    network: &'a NetworkModel,
}

impl<'a> Router<'a> {
    /// Create a router for the given network.
    pub fn new(network: &'a NetworkModel) -> Self {
        Self { network }
    }

    /// Find a path with the fewest hops from `source` to `destination`.
    ///
    /// Returns `Ok(None)` when the stations are in disconnected parts of the
    /// network; that is an ordinary outcome, not an error.
    ///
    /// # Errors
    ///
    /// `UnknownStation` if either id is not in the network. Both ids are
    /// checked before any searching starts.
    pub fn find_path(
        &self,
        source: &StationId,
        destination: &StationId,
    ) -> Result<Option<Path>, NetworkError> {
        let start = self
            .network
            .index_of(source)
            .ok_or_else(|| NetworkError::UnknownStation(source.clone()))?;
        let goal = self
            .network
            .index_of(destination)
            .ok_or_else(|| NetworkError::UnknownStation(destination.clone()))?;

        if start == goal {
            return Ok(Some(Path::trivial(source.clone())));
        }

        let count = self.network.station_count();
        let mut parent: Vec<Option<usize>> = vec![None; count];
        let mut visited = vec![false; count];
        let mut queue = VecDeque::from([start]);
        visited[start] = true;
        let mut expanded = 0usize;

        while let Some(current) = queue.pop_front() {
            expanded += 1;
            trace!(station = %self.network.station_at(current).id, "Expanding");

            for adj in self.network.adjacent(current) {
                if visited[adj.station] {
                    continue;
                }
                visited[adj.station] = true;
                parent[adj.station] = Some(current);

                if adj.station == goal {
                    let path = self.reconstruct(&parent, goal);
                    debug!(
                        source = %source,
                        destination = %destination,
                        hops = path.hops(),
                        expanded,
                        "Path found"
                    );
                    return Ok(Some(path));
                }
                queue.push_back(adj.station);
            }
        }

        debug!(
            source = %source,
            destination = %destination,
            expanded,
            "No path"
        );
        Ok(None)
    }

    /// Walk parent links back from `goal` to the start.
    fn reconstruct(&self, parent: &[Option<usize>], goal: usize) -> Path {
        let mut chain = vec![goal];
        let mut current = goal;
        while let Some(prev) = parent[current] {
            chain.push(prev);
            current = prev;
        }

        let mut indices = chain.into_iter().rev();
        let first = indices.next().unwrap_or(goal);
        let mut path = Path::trivial(self.network.station_at(first).id.clone());
        for idx in indices {
            path.push(self.network.station_at(idx).id.clone());
        }
        path
    }
}

#[cfg(test)]
#[path = "router_tests.rs"]
mod tests;
