//! Render-ready description of the network for map visualization.
//!
//! No drawing happens here: a visualizer consumes this structure (usually
//! as JSON) and decides on layout and colours itself.

use serde::Serialize;

use super::model::NetworkModel;

/// A station on the map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MapStation {
    pub id: String,
    pub name: String,
    /// Codes of the lines serving this station, sorted.
    pub lines: Vec<String>,
    /// Served by more than one line.
    pub is_transfer: bool,
}

/// A drawable segment between two stations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MapSegment {
    pub from: String,
    pub to: String,
    pub line: String,
}

/// A line legend entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MapLine {
    pub code: String,
    pub name: String,
}

/// Everything a visualizer needs to draw the network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkMap {
    pub stations: Vec<MapStation>,
    pub lines: Vec<MapLine>,
    pub segments: Vec<MapSegment>,
    pub total_stations: usize,
    pub total_lines: usize,
    pub transfer_stations: usize,
}

impl NetworkMap {
    /// Snapshot the network.
    pub fn from_network(network: &NetworkModel) -> Self {
        let stations: Vec<MapStation> = network
            .stations()
            .iter()
            .map(|station| {
                let lines: Vec<String> = network
                    .lines_serving(&station.id)
                    .map(|lines| lines.iter().map(|l| l.code.to_string()).collect())
                    .unwrap_or_default();
                MapStation {
                    id: station.id.to_string(),
                    name: station.name.clone(),
                    is_transfer: lines.len() > 1,
                    lines,
                }
            })
            .collect();

        let lines = network
            .lines()
            .iter()
            .map(|l| MapLine {
                code: l.code.to_string(),
                name: l.name.clone(),
            })
            .collect();

        let segments = network
            .connections()
            .iter()
            .map(|c| MapSegment {
                from: c.a.to_string(),
                to: c.b.to_string(),
                line: c.line.to_string(),
            })
            .collect();

        let transfer_stations = stations.iter().filter(|s| s.is_transfer).count();

        Self {
            total_stations: stations.len(),
            total_lines: network.line_count(),
            transfer_stations,
            stations,
            lines,
            segments,
        }
    }
}
