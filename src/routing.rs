use metro_core::prelude::*;
use pyo3::prelude::*;

use crate::error::to_py_err;
use crate::model::{PyConnection, PyStation};

/// Stretch of a route ridden on a single line
#[cfg_attr(feature = "stubgen", pyo3_stub_gen::derive::gen_stub_pyclass)]
#[pyclass(name = "LineSegment", frozen)]
pub struct PyLineSegment {
    #[pyo3(get)]
    pub line: String,
    #[pyo3(get)]
    pub start_station: String,
    #[pyo3(get)]
    pub end_station: String,
}

#[cfg_attr(feature = "stubgen", pyo3_stub_gen::derive::gen_stub_pymethods)]
#[pymethods]
impl PyLineSegment {
    fn __repr__(&self) -> String {
        format!(
            "LineSegment({}: {} -> {})",
            self.line, self.start_station, self.end_station
        )
    }
}

impl From<&LineSegment> for PyLineSegment {
    fn from(segment: &LineSegment) -> Self {
        Self {
            line: segment.line.clone(),
            start_station: segment.start_station.clone(),
            end_station: segment.end_station.clone(),
        }
    }
}

/// Shortest route between two stations
#[cfg_attr(feature = "stubgen", pyo3_stub_gen::derive::gen_stub_pyclass)]
#[pyclass(name = "Route", frozen)]
pub struct PyRoute {
    pub(crate) inner: Route,
}

impl From<Route> for PyRoute {
    fn from(inner: Route) -> Self {
        Self { inner }
    }
}

#[cfg_attr(feature = "stubgen", pyo3_stub_gen::derive::gen_stub_pymethods)]
#[pymethods]
impl PyRoute {
    /// Station names from source to destination
    #[getter]
    fn stations(&self) -> Vec<String> {
        self.inner.stations.clone()
    }

    /// Lines to ride, in travel order
    #[getter]
    fn segments(&self) -> Vec<PyLineSegment> {
        self.inner.segments.iter().map(PyLineSegment::from).collect()
    }

    #[getter]
    fn distance_km(&self) -> f64 {
        self.inner.distance_km
    }

    #[getter]
    fn stop_count(&self) -> usize {
        self.inner.stop_count()
    }

    #[getter]
    fn transfers(&self) -> usize {
        self.inner.transfers()
    }

    /// Travel time estimate, two minutes per stop
    #[getter]
    fn estimated_travel_time_minutes(&self) -> u32 {
        self.inner.estimated_travel_time_minutes()
    }

    fn __len__(&self) -> usize {
        self.inner.stations.len()
    }

    fn __repr__(&self) -> String {
        format!(
            "Route({} -> {}, {} stops, {:.2} km)",
            self.inner.source().unwrap_or_default(),
            self.inner.destination().unwrap_or_default(),
            self.inner.stop_count(),
            self.inner.distance_km
        )
    }
}

/// Find the shortest route between two stations
///
/// The network is built from the given records for this query only.
///
/// Returns
/// -------
/// Route | None
///     None when either station is unknown or no path exists
///
/// Raises
/// ------
/// LookupError
///     If a connection references an unknown station id
#[cfg_attr(feature = "stubgen", pyo3_stub_gen::derive::gen_stub_pyfunction)]
#[pyfunction]
pub fn find_route(
    source: &str,
    destination: &str,
    stations: Vec<PyRef<'_, PyStation>>,
    connections: Vec<PyRef<'_, PyConnection>>,
) -> PyResult<Option<PyRoute>> {
    let stations: Vec<Station> = stations.iter().map(|s| s.inner.clone()).collect();
    let connections: Vec<Connection> = connections.iter().map(|c| c.inner.clone()).collect();

    metro_core::find_route(source, destination, &stations, &connections)
        .map(|route| route.map(PyRoute::from))
        .map_err(to_py_err)
}
