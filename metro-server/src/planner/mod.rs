//! Route planning: shortest paths, fares and route instructions.
//!
//! The router finds a minimum-hop path with breadth-first search; the fare
//! calculator prices it by hop count; the itinerary builder turns it into
//! per-hop instructions naming the line ridden.

mod error;
mod fare;
mod itinerary;
mod router;

pub use error::PlanError;
pub use fare::{DEFAULT_FARE_PER_HOP, FareCalculator};
pub use itinerary::{HopDescription, Itinerary, RideLeg, describe};
pub use router::Router;
