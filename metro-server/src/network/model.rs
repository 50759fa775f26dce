//! In-memory network model: stations, lines and the connections between them.

use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use crate::domain::{Line, LineCode, Station, StationId};

use super::error::NetworkError;

/// An undirected connection between two stations, operated by one line.
///
/// Two stations may be joined by several connections on different lines;
/// they are kept distinct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub a: StationId,
    pub b: StationId,
    pub line: LineCode,
}

impl Connection {
    pub fn new(a: StationId, b: StationId, line: LineCode) -> Self {
        Self { a, b, line }
    }

    /// True if this connection joins `x` and `y`, in either direction.
    pub fn joins(&self, x: &StationId, y: &StationId) -> bool {
        (&self.a == x && &self.b == y) || (&self.a == y && &self.b == x)
    }
}

/// Adjacency entry: neighbouring station and the line of the connecting segment,
/// both as indices into the model's tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Adjacent {
    pub station: usize,
    pub line: usize,
}

/// Read-only view of the transit network.
///
/// Built once through [`NetworkBuilder`]; every station and line referenced
/// by a connection is guaranteed to exist. Neighbour enumeration follows the
/// order connections were added, which fixes the router's tie-breaking.
#[derive(Debug, Clone)]
pub struct NetworkModel {
    stations: Vec<Station>,
    station_index: HashMap<StationId, usize>,
    lines: Vec<Line>,
    line_index: HashMap<LineCode, usize>,
    connections: Vec<Connection>,
    adjacency: Vec<Vec<Adjacent>>,
}

impl NetworkModel {
    /// Start building a network.
    pub fn builder() -> NetworkBuilder {
        NetworkBuilder::new()
    }

    /// Look up a station by id.
    pub fn station(&self, id: &StationId) -> Result<&Station, NetworkError> {
        self.station_index
            .get(id)
            .map(|&idx| &self.stations[idx])
            .ok_or_else(|| NetworkError::UnknownStation(id.clone()))
    }

    /// Look up a line by code.
    pub fn line(&self, code: &LineCode) -> Result<&Line, NetworkError> {
        self.line_index
            .get(code)
            .map(|&idx| &self.lines[idx])
            .ok_or_else(|| NetworkError::UnknownLine(code.clone()))
    }

    pub fn contains_station(&self, id: &StationId) -> bool {
        self.station_index.contains_key(id)
    }

    /// All stations, in load order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// All lines, in load order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// All connections, in load order (exact duplicates removed).
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Stations adjacent to `id`, each paired with the line of the connecting
    /// segment, in connection load order.
    ///
    /// A neighbour reachable on two lines appears twice.
    pub fn neighbors<'a>(
        &'a self,
        id: &StationId,
    ) -> Result<impl Iterator<Item = (&'a StationId, &'a LineCode)> + use<'a>, NetworkError> {
        let idx = self.require_index(id)?;
        Ok(self.adjacency[idx]
            .iter()
            .map(|adj| (&self.stations[adj.station].id, &self.lines[adj.line].code)))
    }

    /// Lines with a connection between `a` and `b`, sorted by code, without
    /// duplicates. Empty if the stations are not adjacent.
    pub fn lines_between(&self, a: &StationId, b: &StationId) -> Result<Vec<&Line>, NetworkError> {
        let from = self.require_index(a)?;
        let to = self.require_index(b)?;

        let mut lines: Vec<&Line> = self.adjacency[from]
            .iter()
            .filter(|adj| adj.station == to)
            .map(|adj| &self.lines[adj.line])
            .collect();
        lines.sort_by(|x, y| x.code.cmp(&y.code));
        lines.dedup_by(|x, y| x.code == y.code);
        Ok(lines)
    }

    /// The line a rider boards between two adjacent stations.
    ///
    /// When several lines serve the pair, the lexicographically smallest line
    /// code wins. Returns `Ok(None)` if the stations are not adjacent.
    pub fn line_between(&self, a: &StationId, b: &StationId) -> Result<Option<&Line>, NetworkError> {
        Ok(self.lines_between(a, b)?.into_iter().next())
    }

    /// Distinct lines serving a station, sorted by code.
    pub fn lines_serving(&self, id: &StationId) -> Result<Vec<&Line>, NetworkError> {
        let idx = self.require_index(id)?;
        let mut lines: Vec<&Line> = self.adjacency[idx]
            .iter()
            .map(|adj| &self.lines[adj.line])
            .collect();
        lines.sort_by(|x, y| x.code.cmp(&y.code));
        lines.dedup_by(|x, y| x.code == y.code);
        Ok(lines)
    }

    /// True when more than one line serves the station.
    pub fn is_transfer(&self, id: &StationId) -> Result<bool, NetworkError> {
        Ok(self.lines_serving(id)?.len() > 1)
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub(crate) fn index_of(&self, id: &StationId) -> Option<usize> {
        self.station_index.get(id).copied()
    }

    pub(crate) fn adjacent(&self, idx: usize) -> &[Adjacent] {
        &self.adjacency[idx]
    }

    pub(crate) fn station_at(&self, idx: usize) -> &Station {
        &self.stations[idx]
    }

    fn require_index(&self, id: &StationId) -> Result<usize, NetworkError> {
        self.index_of(id)
            .ok_or_else(|| NetworkError::UnknownStation(id.clone()))
    }
}

/// Builder for [`NetworkModel`].
///
/// Collects rows in any order; all validation happens in [`build`](Self::build).
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    stations: Vec<Station>,
    lines: Vec<Line>,
    connections: Vec<Connection>,
}

impl NetworkBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a station.
    pub fn station(mut self, id: StationId, name: impl Into<String>) -> Self {
        self.stations.push(Station::new(id, name));
        self
    }

    /// Add a line.
    pub fn line(mut self, code: LineCode, name: impl Into<String>) -> Self {
        self.lines.push(Line::new(code, name));
        self
    }

    /// Add an undirected connection between two stations on a line.
    pub fn connect(mut self, a: StationId, b: StationId, line: LineCode) -> Self {
        self.connections.push(Connection::new(a, b, line));
        self
    }

    /// Validate and build the network.
    ///
    /// # Errors
    ///
    /// - `DuplicateStation` / `DuplicateLine` if an id is declared twice
    /// - `UnknownStation` / `UnknownLine` if a connection references
    ///   something undeclared
    /// - `SelfLoop` if a connection joins a station to itself
    pub fn build(self) -> Result<NetworkModel, NetworkError> {
        let mut station_index = HashMap::with_capacity(self.stations.len());
        for (idx, station) in self.stations.iter().enumerate() {
            if station_index.insert(station.id.clone(), idx).is_some() {
                return Err(NetworkError::DuplicateStation(station.id.clone()));
            }
        }

        let mut line_index = HashMap::with_capacity(self.lines.len());
        for (idx, line) in self.lines.iter().enumerate() {
            if line_index.insert(line.code.clone(), idx).is_some() {
                return Err(NetworkError::DuplicateLine(line.code.clone()));
            }
        }

        let mut adjacency = vec![Vec::new(); self.stations.len()];
        let mut connections = Vec::with_capacity(self.connections.len());
        let mut seen: HashSet<(usize, usize, usize)> = HashSet::new();

        for conn in self.connections {
            let a = *station_index
                .get(&conn.a)
                .ok_or_else(|| NetworkError::UnknownStation(conn.a.clone()))?;
            let b = *station_index
                .get(&conn.b)
                .ok_or_else(|| NetworkError::UnknownStation(conn.b.clone()))?;
            let line = *line_index
                .get(&conn.line)
                .ok_or_else(|| NetworkError::UnknownLine(conn.line.clone()))?;

            if a == b {
                return Err(NetworkError::SelfLoop(conn.a, conn.line));
            }

            if !seen.insert((a.min(b), a.max(b), line)) {
                warn!(
                    a = %conn.a,
                    b = %conn.b,
                    line = %conn.line,
                    "Duplicate connection ignored"
                );
                continue;
            }

            adjacency[a].push(Adjacent { station: b, line });
            adjacency[b].push(Adjacent { station: a, line });
            connections.push(conn);
        }

        debug!(
            stations = self.stations.len(),
            lines = self.lines.len(),
            connections = connections.len(),
            "Network built"
        );

        Ok(NetworkModel {
            stations: self.stations,
            station_index,
            lines: self.lines,
            line_index,
            connections,
            adjacency,
        })
    }
}
