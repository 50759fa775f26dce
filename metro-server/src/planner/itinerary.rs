//! Human-readable route instructions derived from a path.

use std::fmt;

use crate::domain::{Line, LineCode, Path, StationId};
use crate::network::NetworkModel;

use super::error::PlanError;

/// One hop of a route: the two stations and the line ridden between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HopDescription {
    pub from_id: StationId,
    pub from: String,
    pub to_id: StationId,
    pub to: String,
    pub line_code: LineCode,
    pub line: String,
}

impl fmt::Display for HopDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {} ({} Line)", self.from, self.to, self.line)
    }
}

/// Consecutive hops on the same line, merged into a single ride.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RideLeg {
    pub line_code: LineCode,
    pub line: String,
    pub board: String,
    pub alight: String,
    pub hops: usize,
}

impl fmt::Display for RideLeg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stops = if self.hops == 1 { "stop" } else { "stops" };
        write!(
            f,
            "{} Line: {} → {} ({} {})",
            self.line, self.board, self.alight, self.hops, stops
        )
    }
}

/// Ordered per-hop description of a path.
///
/// Owns its hops, so it can be iterated any number of times.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Itinerary {
    hops: Vec<HopDescription>,
}

impl Itinerary {
    pub fn hops(&self) -> &[HopDescription] {
        &self.hops
    }

    pub fn len(&self) -> usize {
        self.hops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hops.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HopDescription> {
        self.hops.iter()
    }

    /// Merge runs of hops on the same line into rides.
    pub fn legs(&self) -> Vec<RideLeg> {
        let mut legs: Vec<RideLeg> = Vec::new();
        for hop in &self.hops {
            match legs.last_mut() {
                Some(leg) if leg.line_code == hop.line_code => {
                    leg.alight = hop.to.clone();
                    leg.hops += 1;
                }
                _ => legs.push(RideLeg {
                    line_code: hop.line_code.clone(),
                    line: hop.line.clone(),
                    board: hop.from.clone(),
                    alight: hop.to.clone(),
                    hops: 1,
                }),
            }
        }
        legs
    }

    /// Number of line changes along the route.
    pub fn transfers(&self) -> usize {
        self.legs().len().saturating_sub(1)
    }
}

impl<'a> IntoIterator for &'a Itinerary {
    type Item = &'a HopDescription;
    type IntoIter = std::slice::Iter<'a, HopDescription>;

    fn into_iter(self) -> Self::IntoIter {
        self.hops.iter()
    }
}

impl IntoIterator for Itinerary {
    type Item = HopDescription;
    type IntoIter = std::vec::IntoIter<HopDescription>;

    fn into_iter(self) -> Self::IntoIter {
        self.hops.into_iter()
    }
}

/// Describe each hop of `path` with station and line names.
///
/// When several lines serve a pair, the line of the previous hop is kept if
/// it serves this pair too, so a ride only splits where the line really
/// changes. Otherwise the smallest line code wins, as in
/// [`NetworkModel::line_between`].
///
/// # Errors
///
/// - `InconsistentPath` if two consecutive stations are not connected
/// - `Network(UnknownStation)` if the path names a station the network lacks
pub fn describe(path: &Path, network: &NetworkModel) -> Result<Itinerary, PlanError> {
    let mut hops = Vec::with_capacity(path.hops());
    let mut riding: Option<&Line> = None;

    for (a, b) in path.pairs() {
        let from = network.station(a)?;
        let to = network.station(b)?;
        let serving = network.lines_between(a, b)?;
        let line = riding
            .filter(|current| serving.iter().any(|l| l.code == current.code))
            .or_else(|| serving.first().copied())
            .ok_or_else(|| PlanError::InconsistentPath {
                from: a.clone(),
                to: b.clone(),
            })?;
        riding = Some(line);

        hops.push(HopDescription {
            from_id: a.clone(),
            from: from.name.clone(),
            to_id: b.clone(),
            to: to.name.clone(),
            line_code: line.code.clone(),
            line: line.name.clone(),
        });
    }

    Ok(Itinerary { hops })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::NetworkError;

    fn sid(s: &str) -> StationId {
        StationId::parse(s).unwrap()
    }

    fn code(s: &str) -> LineCode {
        LineCode::parse(s).unwrap()
    }

    fn path(ids: &[&str]) -> Path {
        Path::new(ids.iter().map(|s| sid(s)).collect()).unwrap()
    }

    /// S1(A) - S2(B) - S3(C) - S5(E) on R, S2(B) - S4(D) on B,
    /// plus S3 - S5 also on G.
    fn network() -> NetworkModel {
        NetworkModel::builder()
            .station(sid("S1"), "A")
            .station(sid("S2"), "B")
            .station(sid("S3"), "C")
            .station(sid("S4"), "D")
            .station(sid("S5"), "E")
            .line(code("R"), "Red")
            .line(code("B"), "Blue")
            .line(code("G"), "Green")
            .connect(sid("S1"), sid("S2"), code("R"))
            .connect(sid("S2"), sid("S3"), code("R"))
            .connect(sid("S2"), sid("S4"), code("B"))
            .connect(sid("S3"), sid("S5"), code("R"))
            .connect(sid("S3"), sid("S5"), code("G"))
            .build()
            .unwrap()
    }

    #[test]
    fn describes_each_hop() {
        let net = network();
        let itinerary = describe(&path(&["S1", "S2", "S4"]), &net).unwrap();

        assert_eq!(itinerary.len(), 2);
        let text: Vec<String> = itinerary.iter().map(|h| h.to_string()).collect();
        assert_eq!(text, vec!["A → B (Red Line)", "B → D (Blue Line)"]);
    }

    #[test]
    fn trivial_path_is_empty() {
        let net = network();
        let itinerary = describe(&path(&["S1"]), &net).unwrap();
        assert!(itinerary.is_empty());
        assert!(itinerary.legs().is_empty());
        assert_eq!(itinerary.transfers(), 0);
    }

    #[test]
    fn parallel_lines_pick_smallest_code() {
        let net = network();
        let itinerary = describe(&path(&["S3", "S5"]), &net).unwrap();
        assert_eq!(itinerary.hops()[0].line_code, code("G"));
        assert_eq!(itinerary.hops()[0].line, "Green");
    }

    #[test]
    fn disconnected_pair_is_inconsistent() {
        let net = network();
        let err = describe(&path(&["S1", "S4"]), &net).unwrap_err();
        assert!(matches!(
            err,
            PlanError::InconsistentPath { ref from, ref to } if from == &sid("S1") && to == &sid("S4")
        ));
    }

    #[test]
    fn unknown_station_in_path() {
        let net = network();
        let err = describe(&path(&["S1", "S9"]), &net).unwrap_err();
        assert!(matches!(
            err,
            PlanError::Network(NetworkError::UnknownStation(_))
        ));
    }

    #[test]
    fn legs_merge_same_line() {
        let net = network();
        let itinerary = describe(&path(&["S1", "S2", "S3", "S5"]), &net).unwrap();

        // S3-S5 is also on Green, but the rider stays on Red
        let legs = itinerary.legs();
        assert_eq!(legs.len(), 1);
        assert_eq!(legs[0].line, "Red");
        assert_eq!(legs[0].board, "A");
        assert_eq!(legs[0].alight, "E");
        assert_eq!(legs[0].hops, 3);
        assert_eq!(legs[0].to_string(), "Red Line: A → E (3 stops)");
        assert_eq!(itinerary.transfers(), 0);
    }

    #[test]
    fn legs_split_where_line_changes() {
        let net = network();
        let itinerary = describe(&path(&["S4", "S2", "S1"]), &net).unwrap();

        let legs = itinerary.legs();
        assert_eq!(legs.len(), 2);
        assert_eq!(legs[0].to_string(), "Blue Line: D → B (1 stop)");
        assert_eq!(legs[1].to_string(), "Red Line: B → A (1 stop)");
        assert_eq!(itinerary.transfers(), 1);
    }

    #[test]
    fn shared_section_keeps_current_line() {
        // S1 - S2 on O only; S2 - S3 - S4 on both B and O
        let net = NetworkModel::builder()
            .station(sid("S1"), "Vienna")
            .station(sid("S2"), "Ballston")
            .station(sid("S3"), "Rosslyn")
            .station(sid("S4"), "Metro Center")
            .station(sid("S5"), "Franconia")
            .line(code("O"), "Orange")
            .line(code("B"), "Blue")
            .connect(sid("S1"), sid("S2"), code("O"))
            .connect(sid("S2"), sid("S3"), code("O"))
            .connect(sid("S2"), sid("S3"), code("B"))
            .connect(sid("S3"), sid("S4"), code("O"))
            .connect(sid("S3"), sid("S4"), code("B"))
            .connect(sid("S5"), sid("S2"), code("B"))
            .build()
            .unwrap();

        let itinerary = describe(&path(&["S1", "S2", "S3", "S4"]), &net).unwrap();
        let lines: Vec<&str> = itinerary.iter().map(|h| h.line_code.as_str()).collect();
        assert_eq!(lines, vec!["O", "O", "O"]);
        assert_eq!(itinerary.transfers(), 0);

        // Boarding on the shared section takes the smallest code
        let itinerary = describe(&path(&["S3", "S4"]), &net).unwrap();
        assert_eq!(itinerary.hops()[0].line_code, code("B"));

        // Arriving on Blue stays on Blue
        let itinerary = describe(&path(&["S5", "S2", "S3", "S4"]), &net).unwrap();
        assert_eq!(itinerary.transfers(), 0);
        assert_eq!(itinerary.legs()[0].line, "Blue");
    }

    #[test]
    fn bundled_through_rides_have_no_transfers() {
        let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
        let net = crate::network::load_network(&dir).unwrap();
        let router = crate::planner::Router::new(&net);

        // Vienna to Metro Center is Orange all the way
        let trip = router.find_path(&sid("S10"), &sid("S5")).unwrap().unwrap();
        let itinerary = describe(&trip, &net).unwrap();
        assert_eq!(itinerary.transfers(), 0);
        assert_eq!(itinerary.legs()[0].line, "Orange");

        // Huntington to Mount Vernon Square is Yellow all the way
        let trip = router.find_path(&sid("S24"), &sid("S23")).unwrap().unwrap();
        let itinerary = describe(&trip, &net).unwrap();
        assert_eq!(itinerary.transfers(), 0);
        assert_eq!(itinerary.legs()[0].line, "Yellow");
    }

    #[test]
    fn iteration_is_restartable() {
        let net = network();
        let itinerary = describe(&path(&["S1", "S2", "S4"]), &net).unwrap();

        let first: Vec<_> = (&itinerary).into_iter().collect();
        let second: Vec<_> = itinerary.iter().collect();
        assert_eq!(first, second);
    }
}
