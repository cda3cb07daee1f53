// Read-only lap record filtering

use std::cmp::Ordering;
use std::collections::HashSet;

use itertools::Itertools;
use log::debug;

use crate::session::Lap;

/// Filter lap records to a driver set and an inclusive lap-number range.
///
/// An empty driver set means "all drivers"; `None` for the range means the
/// full session. A driver set that matches nothing yields an empty sequence.
/// Output is ordered by (driver, lap number).
pub fn laps_for(
    laps: &[Lap],
    drivers: &HashSet<String>,
    lap_range: Option<(u32, u32)>,
) -> Vec<Lap> {
    let filtered: Vec<Lap> = laps
        .iter()
        .filter(|lap| drivers.is_empty() || drivers.contains(lap.driver.as_str()))
        .filter(|lap| match lap_range {
            Some((min, max)) => lap.number >= min && lap.number <= max,
            None => true,
        })
        .cloned()
        .sorted_by(|a, b| a.driver.cmp(&b.driver).then(a.number.cmp(&b.number)))
        .collect();
    debug!("lap filter retained {} of {} records", filtered.len(), laps.len());
    filtered
}

/// The lap with the minimum defined duration, or `None` if no lap in the
/// input carries a valid time.
pub fn fastest_lap(laps: &[Lap]) -> Option<&Lap> {
    laps.iter()
        .filter(|lap| lap.lap_time_s.is_some())
        .min_by(|a, b| {
            a.lap_time_s
                .partial_cmp(&b.lap_time_s)
                .unwrap_or(Ordering::Equal)
        })
}
