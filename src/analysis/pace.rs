// Per-driver pace distributions over clean laps

use std::cmp::Ordering;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::session::Lap;

/// Lap-time distribution of one driver.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PaceSummary {
    pub driver: String,
    /// Lap durations in ascending order, seconds
    pub lap_times_s: Vec<f64>,
    pub fastest_s: f64,
    pub median_s: f64,
    pub mean_s: f64,
}

/// Summarize each driver's lap-time distribution.
///
/// Intended to run on the output of `LapCleaner::clean`, so that pit-stop
/// and caution-period laps do not skew the statistics. Drivers contributing
/// no timed laps are omitted from the result; driver order follows first
/// appearance in the input.
pub fn pace_distribution(laps: &[Lap]) -> Vec<PaceSummary> {
    let driver_order: Vec<&str> = laps.iter().map(|lap| lap.driver.as_str()).unique().collect();

    driver_order
        .into_iter()
        .filter_map(|driver| {
            let mut times: Vec<f64> = laps
                .iter()
                .filter(|lap| lap.driver == driver)
                .filter_map(|lap| lap.lap_time_s)
                .collect();
            if times.is_empty() {
                return None;
            }
            times.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

            let fastest_s = times[0];
            let mean_s = times.iter().sum::<f64>() / times.len() as f64;
            let mid = times.len() / 2;
            let median_s = if times.len() % 2 == 1 {
                times[mid]
            } else {
                (times[mid - 1] + times[mid]) / 2.0
            };

            Some(PaceSummary {
                driver: driver.to_string(),
                lap_times_s: times,
                fastest_s,
                median_s,
                mean_s,
            })
        })
        .collect()
}
