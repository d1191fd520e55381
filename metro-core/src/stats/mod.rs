//! Passenger statistics for the dashboard charts.
//!
//! All aggregates are computed on demand from the records passed in.

mod passenger;

pub use passenger::{
    LineUtilization, MonthlyStats, PassengerRecord, YearlyGrowth, YearlyStats, available_years,
    line_utilization, monthly_stats, yearly_growth, yearly_stats,
};
