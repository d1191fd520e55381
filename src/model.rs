use std::path::PathBuf;

use metro_core::prelude::*;
use pyo3::prelude::*;

use crate::error::to_py_err;
use crate::routing::PyRoute;

/// Metro station record
#[cfg_attr(feature = "stubgen", pyo3_stub_gen::derive::gen_stub_pyclass)]
#[pyclass(name = "Station", frozen)]
pub struct PyStation {
    pub(crate) inner: Station,
}

#[cfg_attr(feature = "stubgen", pyo3_stub_gen::derive::gen_stub_pymethods)]
#[pymethods]
impl PyStation {
    #[new]
    pub fn new(id: StationId, name: String, line: String, latitude: f64, longitude: f64) -> Self {
        Self {
            inner: Station::new(id, name, line, latitude, longitude),
        }
    }

    #[getter]
    fn id(&self) -> StationId {
        self.inner.id
    }

    #[getter]
    fn name(&self) -> &str {
        &self.inner.name
    }

    #[getter]
    fn line(&self) -> &str {
        &self.inner.line
    }

    #[getter]
    fn latitude(&self) -> f64 {
        self.inner.latitude()
    }

    #[getter]
    fn longitude(&self) -> f64 {
        self.inner.longitude()
    }

    fn __repr__(&self) -> String {
        format!(
            "Station(id={}, name={:?}, line={:?})",
            self.inner.id, self.inner.name, self.inner.line
        )
    }
}

/// Undirected connection between two station ids
#[cfg_attr(feature = "stubgen", pyo3_stub_gen::derive::gen_stub_pyclass)]
#[pyclass(name = "Connection", frozen)]
pub struct PyConnection {
    pub(crate) inner: Connection,
}

#[cfg_attr(feature = "stubgen", pyo3_stub_gen::derive::gen_stub_pymethods)]
#[pymethods]
impl PyConnection {
    #[new]
    pub fn new(station_1: StationId, station_2: StationId, line: String, distance_km: f64) -> Self {
        Self {
            inner: Connection::new(station_1, station_2, line, distance_km),
        }
    }

    #[getter]
    fn station_1(&self) -> StationId {
        self.inner.from
    }

    #[getter]
    fn station_2(&self) -> StationId {
        self.inner.to
    }

    #[getter]
    fn line(&self) -> &str {
        &self.inner.line
    }

    #[getter]
    fn distance_km(&self) -> f64 {
        self.inner.distance_km
    }

    fn __repr__(&self) -> String {
        format!(
            "Connection({} - {}, line={:?}, distance_km={})",
            self.inner.from, self.inner.to, self.inner.line, self.inner.distance_km
        )
    }
}

/// MetroNetwork
///
/// Undirected graph of metro stations joined by their connections,
/// weighted by distance in kilometres. Built once from the station and
/// connection catalogs and reused for every route query.
///
/// Example:
///
/// .. code-block:: python
///
///     network = load_metro_network("data/stations.csv", "data/connections.csv")
///     route = network.find_route("Baiyappanahalli", "Kengeri")
#[cfg_attr(feature = "stubgen", pyo3_stub_gen::derive::gen_stub_pyclass)]
#[pyclass(name = "MetroNetwork", frozen)]
pub struct PyMetroNetwork {
    pub(crate) network: MetroNetwork,
}

#[cfg_attr(feature = "stubgen", pyo3_stub_gen::derive::gen_stub_pymethods)]
#[pymethods]
impl PyMetroNetwork {
    pub fn station_count(&self) -> usize {
        self.network.station_count()
    }

    pub fn connection_count(&self) -> usize {
        self.network.connection_count()
    }

    pub fn contains_station(&self, name: &str) -> bool {
        self.network.contains_station(name)
    }

    /// Sorted station names
    pub fn station_names(&self) -> Vec<String> {
        self.network
            .station_names()
            .into_iter()
            .map(str::to_owned)
            .collect()
    }

    pub fn stations(&self) -> Vec<PyStation> {
        self.network
            .stations()
            .map(|station| PyStation {
                inner: station.clone(),
            })
            .collect()
    }

    pub fn lines(&self) -> Vec<String> {
        self.network.lines().into_iter().map(str::to_owned).collect()
    }

    /// Shortest route between two stations, or None if either station is
    /// unknown or the destination cannot be reached
    pub fn find_route(&self, source: &str, destination: &str) -> Option<PyRoute> {
        self.network
            .find_route(source, destination)
            .map(PyRoute::from)
    }

    /// Shortest route as a GeoJSON FeatureCollection string, or None
    pub fn route_geojson(&self, source: &str, destination: &str) -> PyResult<Option<String>> {
        self.network
            .find_route(source, destination)
            .map(|route| route.to_geojson_string(&self.network))
            .transpose()
            .map_err(to_py_err)
    }

    fn __repr__(&self) -> String {
        format!(
            "MetroNetwork with {} stations, {} connections and {} lines",
            self.network.station_count(),
            self.network.connection_count(),
            self.network.lines().len()
        )
    }

    fn __str__(&self) -> String {
        self.__repr__()
    }
}

/// Load a metro network from station and connection CSV files
///
/// Parameters
/// ----------
/// stations_path : str
///     CSV with columns Station_ID, Station_Name, Line, Latitude, Longitude
/// connections_path : str
///     CSV with columns Station_1, Station_2, Line, Distance_KM
///
/// Raises
/// ------
/// OSError
///     If a file is missing or malformed
/// LookupError
///     If a connection references an unknown station id
///
/// Notes
/// -----
/// The function releases the GIL while loading.
#[cfg_attr(feature = "stubgen", pyo3_stub_gen::derive::gen_stub_pyfunction)]
#[pyfunction(name = "load_metro_network")]
pub fn py_load_metro_network(
    py: Python<'_>,
    stations_path: PathBuf,
    connections_path: PathBuf,
) -> PyResult<PyMetroNetwork> {
    py.detach(|| {
        let config = NetworkConfig::new(stations_path, connections_path);
        let network = metro_core::create_metro_network(&config).map_err(to_py_err)?;
        Ok(PyMetroNetwork { network })
    })
}

/// Build a metro network from in-memory station and connection records
///
/// Raises
/// ------
/// LookupError
///     If a connection references an unknown station id
#[cfg_attr(feature = "stubgen", pyo3_stub_gen::derive::gen_stub_pyfunction)]
#[pyfunction]
pub fn build_network(
    stations: Vec<PyRef<'_, PyStation>>,
    connections: Vec<PyRef<'_, PyConnection>>,
) -> PyResult<PyMetroNetwork> {
    let stations: Vec<Station> = stations.iter().map(|s| s.inner.clone()).collect();
    let connections: Vec<Connection> = connections.iter().map(|c| c.inner.clone()).collect();

    let network = MetroNetwork::new(&stations, &connections).map_err(to_py_err)?;
    Ok(PyMetroNetwork { network })
}
