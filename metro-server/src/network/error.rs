//! Network model error types.

use std::path::PathBuf;

use crate::domain::{InvalidLineCode, InvalidStationId, LineCode, StationId};

/// Errors from building or querying the network model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// A station id is not part of the network
    #[error("unknown station: {0}")]
    UnknownStation(StationId),

    /// A line code is not part of the network
    #[error("unknown line: {0}")]
    UnknownLine(LineCode),

    /// The same station id was declared twice
    #[error("duplicate station: {0}")]
    DuplicateStation(StationId),

    /// The same line code was declared twice
    #[error("duplicate line: {0}")]
    DuplicateLine(LineCode),

    /// A connection joins a station to itself
    #[error("connection from {0} to itself on line {1}")]
    SelfLoop(StationId, LineCode),
}

/// Errors from loading a network description from disk.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// File could not be opened or read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV
    #[error("malformed CSV in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A station id in the data failed validation
    #[error("{path} row {row}: {source}")]
    StationId {
        path: PathBuf,
        row: usize,
        #[source]
        source: InvalidStationId,
    },

    /// A line code in the data failed validation
    #[error("{path} row {row}: {source}")]
    LineCode {
        path: PathBuf,
        row: usize,
        #[source]
        source: InvalidLineCode,
    },

    /// The rows parsed but do not form a consistent network
    #[error("inconsistent network data: {0}")]
    Network(#[from] NetworkError),
}
