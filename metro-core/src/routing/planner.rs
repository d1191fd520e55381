use log::debug;
use petgraph::graph::{EdgeIndex, NodeIndex};
use serde::Serialize;

use super::dijkstra::{TracedPath, shortest_path};
use crate::{
    Distance, Error, MINUTES_PER_STOP,
    model::{Connection, MetroNetwork, Station},
};

/// Maximal run of consecutive route edges sharing one line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineSegment {
    pub line: String,
    pub start_station: String,
    pub end_station: String,
}

impl LineSegment {
    pub fn new(
        line: impl Into<String>,
        start_station: impl Into<String>,
        end_station: impl Into<String>,
    ) -> Self {
        Self {
            line: line.into(),
            start_station: start_station.into(),
            end_station: end_station.into(),
        }
    }
}

/// Shortest route between two stations
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    /// Station names from source to destination inclusive
    pub stations: Vec<String>,
    /// Lines to ride, in travel order
    pub segments: Vec<LineSegment>,
    pub distance_km: Distance,
}

impl Route {
    /// Number of stops travelled
    pub fn stop_count(&self) -> usize {
        self.stations.len().saturating_sub(1)
    }

    /// Number of line changes along the route
    pub fn transfers(&self) -> usize {
        self.segments.len().saturating_sub(1)
    }

    pub fn estimated_travel_time_minutes(&self) -> u32 {
        u32::try_from(self.stop_count())
            .unwrap_or(u32::MAX)
            .saturating_mul(MINUTES_PER_STOP)
    }

    pub fn source(&self) -> Option<&str> {
        self.stations.first().map(String::as_str)
    }

    pub fn destination(&self) -> Option<&str> {
        self.stations.last().map(String::as_str)
    }
}

impl MetroNetwork {
    /// Finds the shortest route between two stations by name.
    ///
    /// Returns `None` when either station is unknown or the destination is
    /// unreachable. Callers that need to tell these apart should check
    /// [`MetroNetwork::contains_station`] first.
    pub fn find_route(&self, source: &str, destination: &str) -> Option<Route> {
        let (Some(start), Some(target)) = (self.node_index(source), self.node_index(destination))
        else {
            debug!("Unknown station in route query {source:?} -> {destination:?}");
            return None;
        };

        let Some(TracedPath { cost, nodes, edges }) = shortest_path(self, start, target) else {
            debug!("No path between {source:?} and {destination:?}");
            return None;
        };

        let segments = self.line_segments(&nodes, &edges);
        let stations = nodes
            .iter()
            .map(|&node| self.station_name(node).to_owned())
            .collect();

        debug!(
            "Route {source:?} -> {destination:?}: {} stops, {} segments, {cost:.2} km",
            nodes.len() - 1,
            segments.len()
        );

        Some(Route {
            stations,
            segments,
            distance_km: cost,
        })
    }

    /// Splits a path into maximal single-line runs.
    /// `edges[i]` must join `nodes[i]` and `nodes[i + 1]`.
    fn line_segments(&self, nodes: &[NodeIndex], edges: &[EdgeIndex]) -> Vec<LineSegment> {
        let mut segments = Vec::new();
        let mut state = SegmentState::NoSegment;

        for (&from, &edge) in nodes.iter().zip(edges) {
            let line = self.edge(edge).line.as_str();
            state = match state {
                SegmentState::NoSegment => SegmentState::InSegment { line, start: from },
                SegmentState::InSegment {
                    line: current,
                    start,
                } if current != line => {
                    segments.push(self.segment(current, start, from));
                    SegmentState::InSegment { line, start: from }
                }
                open @ SegmentState::InSegment { .. } => open,
            };
        }

        if let (SegmentState::InSegment { line, start }, Some(&last)) = (state, nodes.last()) {
            segments.push(self.segment(line, start, last));
        }

        segments
    }

    fn segment(&self, line: &str, start: NodeIndex, end: NodeIndex) -> LineSegment {
        LineSegment::new(line, self.station_name(start), self.station_name(end))
    }
}

#[derive(Clone, Copy)]
enum SegmentState<'a> {
    NoSegment,
    InSegment { line: &'a str, start: NodeIndex },
}

/// Builds a fresh network from the catalogs and finds the shortest route.
///
/// # Errors
///
/// Fails if the catalogs do not form a valid network, most notably when a
/// connection references a station id that is not in `stations`.
/// An unknown or unreachable station is not an error and yields `Ok(None)`.
pub fn find_route(
    source: &str,
    destination: &str,
    stations: &[Station],
    connections: &[Connection],
) -> Result<Option<Route>, Error> {
    let network = MetroNetwork::new(stations, connections)?;
    Ok(network.find_route(source, destination))
}
