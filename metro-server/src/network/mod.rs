//! The transit network: stations, lines and the connections between them.
//!
//! The model is built once (usually by [`load_network`]) and is read-only
//! afterwards, so it can be shared freely between requests.

mod error;
mod loader;
mod map;
mod model;

pub use error::{LoadError, NetworkError};
pub use loader::{EDGES_FILE, LINES_FILE, STATIONS_FILE, load_network};
pub use map::{MapLine, MapSegment, MapStation, NetworkMap};
pub use model::{Connection, NetworkBuilder, NetworkModel};
