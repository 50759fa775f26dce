//! CSV loader for network descriptions.
//!
//! A data directory holds three files with header rows:
//!
//! - `stations.csv`: `id,name`
//! - `lines.csv`: `id,name`
//! - `edges.csv`: `from,to,line`
//!
//! Every problem (missing file, malformed row, bad identifier, dangling
//! reference) is reported here so the network never has to mask it later.

use std::fs::File;
use std::path::Path;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::info;

use crate::domain::{LineCode, StationId};

use super::error::LoadError;
use super::model::{NetworkBuilder, NetworkModel};

pub const STATIONS_FILE: &str = "stations.csv";
pub const LINES_FILE: &str = "lines.csv";
pub const EDGES_FILE: &str = "edges.csv";

#[derive(Debug, Deserialize)]
struct StationRow {
    id: String,
    name: String,
}

#[derive(Debug, Deserialize)]
struct LineRow {
    id: String,
    name: String,
}

#[derive(Debug, Deserialize)]
struct EdgeRow {
    from: String,
    to: String,
    line: String,
}

/// Load and validate a network from the CSV files in `dir`.
pub fn load_network(dir: impl AsRef<Path>) -> Result<NetworkModel, LoadError> {
    let dir = dir.as_ref();
    let mut builder = NetworkBuilder::new();

    let stations_path = dir.join(STATIONS_FILE);
    for (row, record) in read_rows::<StationRow>(&stations_path)?.into_iter().enumerate() {
        let id = parse_station(&stations_path, row, &record.id)?;
        builder = builder.station(id, record.name);
    }

    let lines_path = dir.join(LINES_FILE);
    for (row, record) in read_rows::<LineRow>(&lines_path)?.into_iter().enumerate() {
        let code = parse_line(&lines_path, row, &record.id)?;
        builder = builder.line(code, record.name);
    }

    let edges_path = dir.join(EDGES_FILE);
    for (row, record) in read_rows::<EdgeRow>(&edges_path)?.into_iter().enumerate() {
        let from = parse_station(&edges_path, row, &record.from)?;
        let to = parse_station(&edges_path, row, &record.to)?;
        let line = parse_line(&edges_path, row, &record.line)?;
        builder = builder.connect(from, to, line);
    }

    let network = builder.build()?;
    info!(
        dir = %dir.display(),
        stations = network.station_count(),
        lines = network.line_count(),
        connections = network.connections().len(),
        "Loaded network"
    );
    Ok(network)
}

fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file)
        .deserialize()
        .map(|record| {
            record.map_err(|source| LoadError::Csv {
                path: path.to_path_buf(),
                source,
            })
        })
        .collect()
}

// Rows are reported 1-based, counting data rows only.
fn parse_station(path: &Path, row: usize, raw: &str) -> Result<StationId, LoadError> {
    StationId::parse(raw).map_err(|source| LoadError::StationId {
        path: path.to_path_buf(),
        row: row + 1,
        source,
    })
}

fn parse_line(path: &Path, row: usize, raw: &str) -> Result<LineCode, LoadError> {
    LineCode::parse(raw).map_err(|source| LoadError::LineCode {
        path: path.to_path_buf(),
        row: row + 1,
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::NetworkError;
    use tempfile::tempdir;

    fn write_dataset(dir: &Path, stations: &str, lines: &str, edges: &str) {
        std::fs::write(dir.join(STATIONS_FILE), stations).unwrap();
        std::fs::write(dir.join(LINES_FILE), lines).unwrap();
        std::fs::write(dir.join(EDGES_FILE), edges).unwrap();
    }

    #[test]
    fn loads_valid_dataset() {
        let dir = tempdir().unwrap();
        write_dataset(
            dir.path(),
            "id,name\nS1,Metro Center\nS2, Gallery Place \nS3,Union Station\n",
            "id,name\nR,Red\nB,Blue\n",
            "from,to,line\nS1,S2,R\nS2,S3,B\n",
        );

        let net = load_network(dir.path()).unwrap();
        assert_eq!(net.station_count(), 3);
        assert_eq!(net.line_count(), 2);
        assert_eq!(net.connections().len(), 2);

        // Fields are trimmed
        let s2 = net.station(&StationId::parse("S2").unwrap()).unwrap();
        assert_eq!(s2.name, "Gallery Place");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(STATIONS_FILE), "id,name\nS1,A\n").unwrap();

        let err = load_network(dir.path()).unwrap_err();
        match err {
            LoadError::Io { path, .. } => assert!(path.ends_with(LINES_FILE)),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn missing_column_is_csv_error() {
        let dir = tempdir().unwrap();
        write_dataset(
            dir.path(),
            "id,name\nS1,A\n",
            "id,name\nR,Red\n",
            "from,to\nS1,S1\n",
        );

        assert!(matches!(
            load_network(dir.path()).unwrap_err(),
            LoadError::Csv { .. }
        ));
    }

    #[test]
    fn bad_station_id_reports_row() {
        let dir = tempdir().unwrap();
        write_dataset(
            dir.path(),
            "id,name\nS1,A\nbad id,B\n",
            "id,name\nR,Red\n",
            "from,to,line\n",
        );

        match load_network(dir.path()).unwrap_err() {
            LoadError::StationId { row, .. } => assert_eq!(row, 2),
            other => panic!("expected StationId error, got {other:?}"),
        }
    }

    #[test]
    fn bad_line_code_reports_row() {
        let dir = tempdir().unwrap();
        write_dataset(
            dir.path(),
            "id,name\nS1,A\nS2,B\n",
            "id,name\nR,Red\n",
            "from,to,line\nS1,S2,red\n",
        );

        match load_network(dir.path()).unwrap_err() {
            LoadError::LineCode { row, path, .. } => {
                assert_eq!(row, 1);
                assert!(path.ends_with(EDGES_FILE));
            }
            other => panic!("expected LineCode error, got {other:?}"),
        }
    }

    #[test]
    fn dangling_line_is_fatal_at_load() {
        let dir = tempdir().unwrap();
        write_dataset(
            dir.path(),
            "id,name\nS1,A\nS2,B\n",
            "id,name\nR,Red\n",
            "from,to,line\nS1,S2,G\n",
        );

        match load_network(dir.path()).unwrap_err() {
            LoadError::Network(NetworkError::UnknownLine(code)) => assert_eq!(code.as_str(), "G"),
            other => panic!("expected UnknownLine, got {other:?}"),
        }
    }

    #[test]
    fn bundled_dataset_loads() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
        let net = load_network(&dir).unwrap();

        assert!(net.station_count() > 10);
        assert_eq!(net.line_count(), 5);
        assert!(
            net.stations()
                .iter()
                .any(|s| net.is_transfer(&s.id).unwrap())
        );
    }
}
