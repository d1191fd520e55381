//! Route planning over the metro network

mod dijkstra;
mod planner;
mod to_geojson;

pub use planner::{LineSegment, Route, find_route};
