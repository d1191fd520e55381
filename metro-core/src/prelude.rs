// Re-export key components
pub use crate::loading::{NetworkConfig, create_metro_network};
pub use crate::model::{Connection, MetroNetwork, Station, station_names};
pub use crate::routing::{LineSegment, Route, find_route};
pub use crate::stats::{
    LineUtilization, MonthlyStats, PassengerRecord, YearlyGrowth, YearlyStats, available_years,
    line_utilization, monthly_stats, yearly_growth, yearly_stats,
};

// Core types
pub use crate::Distance; // kilometres
pub use crate::Error;
pub use crate::MINUTES_PER_STOP;
pub use crate::StationId;
