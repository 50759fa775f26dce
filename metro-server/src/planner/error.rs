//! Planner error types.

use crate::domain::{Fare, StationId};
use crate::network::NetworkError;

/// Errors from turning a path into fares and route instructions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    /// A lookup against the network failed
    #[error(transparent)]
    Network(#[from] NetworkError),

    /// Two consecutive stations in a path have no connection.
    /// The router and the network disagree; this is always a bug.
    #[error("inconsistent path: no connection between {from} and {to}")]
    InconsistentPath { from: StationId, to: StationId },

    /// The fare for a path does not fit in a [`Fare`]
    #[error("fare overflow: {hops} hops at {per_hop} per hop")]
    FareOverflow { hops: usize, per_hop: Fare },
}
