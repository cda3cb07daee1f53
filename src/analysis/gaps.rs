// Inter-driver gap calculation

use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::RacetraceError;
use crate::session::Lap;

/// One lap's time delta between two drivers.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct GapPoint {
    pub lap: u32,
    /// Seconds; positive means the reference driver completed the lap sooner
    pub gap_s: f64,
}

/// Per-lap time deltas for an ordered (reference, other) driver pair.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GapSeries {
    pub reference: String,
    pub other: String,
    pub points: Vec<GapPoint>,
}

/// Align two drivers' lap-completion timestamps by lap number and produce the
/// per-lap delta series, in seconds.
///
/// Inner-join semantics: a lap number missing (or untimed) for either driver
/// is excluded, never imputed, so two drivers with valid but disjoint lap
/// sets yield an empty series. Only a driver contributing no timed laps at
/// all fails, with `InsufficientData`. To compare more than two drivers,
/// call this once per (reference, other) pair with a shared reference.
pub fn gap(reference: &str, other: &str, laps: &[Lap]) -> Result<GapSeries, RacetraceError> {
    let reference_times = completion_times(reference, laps);
    if reference_times.is_empty() {
        return Err(RacetraceError::InsufficientData {
            reason: format!("no timed laps for driver {reference}"),
        });
    }
    let other_times = completion_times(other, laps);
    if other_times.is_empty() {
        return Err(RacetraceError::InsufficientData {
            reason: format!("no timed laps for driver {other}"),
        });
    }

    let points: Vec<GapPoint> = reference_times
        .iter()
        .filter_map(|(&lap, &reference_t)| {
            other_times.get(&lap).map(|other_t| GapPoint {
                lap,
                gap_s: other_t - reference_t,
            })
        })
        .collect();
    debug!("gap {reference} vs {other}: {} common laps", points.len());

    Ok(GapSeries {
        reference: reference.to_string(),
        other: other.to_string(),
        points,
    })
}

fn completion_times(driver: &str, laps: &[Lap]) -> BTreeMap<u32, f64> {
    laps.iter()
        .filter(|lap| lap.driver == driver)
        .filter_map(|lap| lap.completion_time_s.map(|t| (lap.number, t)))
        .collect()
}
