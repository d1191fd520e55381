use std::collections::BTreeMap;

use chrono::Month;
use itertools::Itertools;
use serde::Serialize;

/// Monthly passenger count
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PassengerRecord {
    pub year: i32,
    /// 1..=12
    pub month: u32,
    pub passengers: u64,
    pub purple_line_passengers: u64,
    pub green_line_passengers: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyStats {
    pub month: u32,
    pub month_name: &'static str,
    pub mean: f64,
    pub median: f64,
    pub min: u64,
    pub max: u64,
    pub sum: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearlyStats {
    pub year: i32,
    /// Average monthly passengers
    pub mean: f64,
    pub min: u64,
    pub max: u64,
    pub sum: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearlyGrowth {
    pub year: i32,
    pub total: u64,
    /// Change against the previous year in percent, `None` for the first
    /// year or when the previous total is zero
    pub growth_percent: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineUtilization {
    pub year: i32,
    pub purple_line: u64,
    pub green_line: u64,
    pub purple_share: f64,
    pub green_share: f64,
}

struct Summary {
    mean: f64,
    median: f64,
    min: u64,
    max: u64,
    sum: u64,
}

#[allow(clippy::cast_precision_loss)]
fn summarize(values: &mut [u64]) -> Option<Summary> {
    if values.is_empty() {
        return None;
    }
    values.sort_unstable();

    let len = values.len();
    let sum: u64 = values.iter().sum();
    let median = if len % 2 == 0 {
        (values[len / 2 - 1] as f64 + values[len / 2] as f64) / 2.0
    } else {
        values[len / 2] as f64
    };

    Some(Summary {
        mean: sum as f64 / len as f64,
        median,
        min: values[0],
        max: values[len - 1],
        sum,
    })
}

fn month_name(month: u32) -> &'static str {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map_or("Unknown", |m| m.name())
}

/// Sorted distinct years present in the records
pub fn available_years(records: &[PassengerRecord]) -> Vec<i32> {
    records.iter().map(|r| r.year).sorted_unstable().dedup().collect()
}

/// Passenger statistics per month of a single year
pub fn monthly_stats(records: &[PassengerRecord], year: i32) -> Vec<MonthlyStats> {
    let mut by_month: BTreeMap<u32, Vec<u64>> = BTreeMap::new();
    for record in records.iter().filter(|r| r.year == year) {
        by_month.entry(record.month).or_default().push(record.passengers);
    }

    by_month
        .into_iter()
        .filter_map(|(month, mut values)| {
            let summary = summarize(&mut values)?;
            Some(MonthlyStats {
                month,
                month_name: month_name(month),
                mean: summary.mean,
                median: summary.median,
                min: summary.min,
                max: summary.max,
                sum: summary.sum,
            })
        })
        .collect()
}

/// Statistics of the monthly totals of every year
pub fn yearly_stats(records: &[PassengerRecord]) -> Vec<YearlyStats> {
    passengers_by_year(records)
        .into_iter()
        .filter_map(|(year, mut values)| {
            let summary = summarize(&mut values)?;
            Some(YearlyStats {
                year,
                mean: summary.mean,
                min: summary.min,
                max: summary.max,
                sum: summary.sum,
            })
        })
        .collect()
}

/// Year-over-year change of the total passenger count
#[allow(clippy::cast_precision_loss)]
pub fn yearly_growth(records: &[PassengerRecord]) -> Vec<YearlyGrowth> {
    let mut previous: Option<u64> = None;

    passengers_by_year(records)
        .into_iter()
        .map(|(year, values)| {
            let total: u64 = values.iter().sum();
            let growth_percent = previous
                .filter(|&prev| prev > 0)
                .map(|prev| (total as f64 - prev as f64) / prev as f64 * 100.0);
            previous = Some(total);
            YearlyGrowth {
                year,
                total,
                growth_percent,
            }
        })
        .collect()
}

/// Split of a year's passengers between the Purple and Green lines
#[allow(clippy::cast_precision_loss)]
pub fn line_utilization(records: &[PassengerRecord], year: i32) -> Option<LineUtilization> {
    let (purple_line, green_line) = records
        .iter()
        .filter(|r| r.year == year)
        .fold(None, |acc: Option<(u64, u64)>, r| {
            let (purple, green) = acc.unwrap_or_default();
            Some((
                purple + r.purple_line_passengers,
                green + r.green_line_passengers,
            ))
        })?;

    let total = (purple_line + green_line) as f64;
    let share = |count: u64| {
        if total > 0.0 {
            count as f64 / total
        } else {
            0.0
        }
    };

    Some(LineUtilization {
        year,
        purple_line,
        green_line,
        purple_share: share(purple_line),
        green_share: share(green_line),
    })
}

fn passengers_by_year(records: &[PassengerRecord]) -> BTreeMap<i32, Vec<u64>> {
    let mut by_year: BTreeMap<i32, Vec<u64>> = BTreeMap::new();
    for record in records {
        by_year.entry(record.year).or_default().push(record.passengers);
    }
    by_year
}
