use pyo3::prelude::*;

use model::{PyConnection, PyMetroNetwork, PyStation, build_network, py_load_metro_network};
use routing::{PyLineSegment, PyRoute, find_route};
use stats::{PyPassengerData, py_load_passenger_data};

mod error;
pub mod model;
pub mod routing;
pub mod stats;

/// A Python module implemented in Rust.
#[pymodule]
fn metro(m: &Bound<'_, PyModule>) -> PyResult<()> {
    pyo3_log::init();

    m.add_class::<PyStation>()?;
    m.add_class::<PyConnection>()?;
    m.add_class::<PyMetroNetwork>()?;
    m.add_function(wrap_pyfunction!(py_load_metro_network, m)?)?;
    m.add_function(wrap_pyfunction!(build_network, m)?)?;

    m.add_class::<PyLineSegment>()?;
    m.add_class::<PyRoute>()?;
    m.add_function(wrap_pyfunction!(find_route, m)?)?;

    m.add_class::<PyPassengerData>()?;
    m.add_function(wrap_pyfunction!(py_load_passenger_data, m)?)?;
    Ok(())
}

#[cfg(feature = "stubgen")]
pyo3_stub_gen::define_stub_info_gatherer!(stub_info);
