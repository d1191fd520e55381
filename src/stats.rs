use std::path::PathBuf;

use metro_core::prelude::*;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::error::to_py_err;

/// Monthly passenger counts with the dashboard's aggregate views
#[cfg_attr(feature = "stubgen", pyo3_stub_gen::derive::gen_stub_pyclass)]
#[pyclass(name = "PassengerData", frozen)]
pub struct PyPassengerData {
    records: Vec<PassengerRecord>,
}

#[cfg_attr(feature = "stubgen", pyo3_stub_gen::derive::gen_stub_pymethods)]
#[pymethods]
impl PyPassengerData {
    pub fn years(&self) -> Vec<i32> {
        available_years(&self.records)
    }

    /// Mean, median, min, max and sum of passengers per month of `year`
    pub fn monthly_stats<'py>(
        &self,
        py: Python<'py>,
        year: i32,
    ) -> PyResult<Vec<Bound<'py, PyDict>>> {
        monthly_stats(&self.records, year)
            .iter()
            .map(|stats| {
                let dict = PyDict::new(py);
                dict.set_item("month", stats.month)?;
                dict.set_item("month_name", stats.month_name)?;
                dict.set_item("mean", stats.mean)?;
                dict.set_item("median", stats.median)?;
                dict.set_item("min", stats.min)?;
                dict.set_item("max", stats.max)?;
                dict.set_item("sum", stats.sum)?;
                Ok(dict)
            })
            .collect()
    }

    /// Average, minimum, maximum and total monthly passengers per year
    pub fn yearly_stats<'py>(&self, py: Python<'py>) -> PyResult<Vec<Bound<'py, PyDict>>> {
        yearly_stats(&self.records)
            .iter()
            .map(|stats| {
                let dict = PyDict::new(py);
                dict.set_item("year", stats.year)?;
                dict.set_item("mean", stats.mean)?;
                dict.set_item("min", stats.min)?;
                dict.set_item("max", stats.max)?;
                dict.set_item("sum", stats.sum)?;
                Ok(dict)
            })
            .collect()
    }

    /// Yearly totals with the percentage change against the previous year
    pub fn yearly_growth<'py>(&self, py: Python<'py>) -> PyResult<Vec<Bound<'py, PyDict>>> {
        yearly_growth(&self.records)
            .iter()
            .map(|growth| {
                let dict = PyDict::new(py);
                dict.set_item("year", growth.year)?;
                dict.set_item("total", growth.total)?;
                dict.set_item("growth_percent", growth.growth_percent)?;
                Ok(dict)
            })
            .collect()
    }

    /// Purple and Green line passengers of `year`, or None without data
    pub fn line_utilization<'py>(
        &self,
        py: Python<'py>,
        year: i32,
    ) -> PyResult<Option<Bound<'py, PyDict>>> {
        let Some(usage) = line_utilization(&self.records, year) else {
            return Ok(None);
        };

        let dict = PyDict::new(py);
        dict.set_item("year", usage.year)?;
        dict.set_item("purple_line", usage.purple_line)?;
        dict.set_item("green_line", usage.green_line)?;
        dict.set_item("purple_share", usage.purple_share)?;
        dict.set_item("green_share", usage.green_share)?;
        Ok(Some(dict))
    }

    fn __len__(&self) -> usize {
        self.records.len()
    }

    fn __repr__(&self) -> String {
        format!("PassengerData with {} monthly records", self.records.len())
    }
}

/// Load monthly passenger counts from a CSV file with columns
/// Year, Month, Passengers, Purple_Line_Passengers, Green_Line_Passengers
#[cfg_attr(feature = "stubgen", pyo3_stub_gen::derive::gen_stub_pyfunction)]
#[pyfunction(name = "load_passenger_data")]
pub fn py_load_passenger_data(py: Python<'_>, path: PathBuf) -> PyResult<PyPassengerData> {
    let records = py
        .detach(|| metro_core::load_passengers(&path))
        .map_err(to_py_err)?;
    Ok(PyPassengerData { records })
}
