// Position timeline and overtake extraction

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::session::Lap;

/// A driver gaining track position between two consecutive classified laps.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct OvertakeEvent {
    pub driver: String,
    /// Lap on which the improved position was recorded
    pub lap: u32,
    pub previous_position: u32,
    /// Always strictly less than `previous_position`
    pub new_position: u32,
}

/// One driver's classified position on one lap.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct PositionPoint {
    pub lap: u32,
    pub position: u32,
}

/// Classified positions of one driver across the session, ordered by lap.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PositionSeries {
    pub driver: String,
    pub points: Vec<PositionPoint>,
}

/// Each driver's classification position per lap, for position-chart style
/// consumption.
///
/// Drivers appear in order of first appearance in the input; within a
/// driver, points are sorted by lap number. Laps without a classified
/// position are skipped, so a driver with none contributes an empty series.
pub fn position_timeline(laps: &[Lap]) -> Vec<PositionSeries> {
    let driver_order: Vec<&str> = laps.iter().map(|lap| lap.driver.as_str()).unique().collect();

    driver_order
        .into_iter()
        .map(|driver| PositionSeries {
            driver: driver.to_string(),
            points: laps
                .iter()
                .filter(|lap| lap.driver == driver)
                .filter_map(|lap| {
                    lap.position.map(|position| PositionPoint {
                        lap: lap.number,
                        position,
                    })
                })
                .sorted_by_key(|point| point.lap)
                .collect(),
        })
        .collect()
}

/// Extract position improvements from per-lap classification data.
///
/// An event is emitted wherever a driver's position number decreased
/// relative to the immediately preceding classified lap. The first lap of
/// each driver has no predecessor and contributes no event; unchanged or
/// worsened positions are not events.
pub fn overtakes(laps: &[Lap]) -> Vec<OvertakeEvent> {
    let mut events = Vec::new();
    for series in position_timeline(laps) {
        for (previous, current) in series.points.iter().tuple_windows() {
            if current.position < previous.position {
                events.push(OvertakeEvent {
                    driver: series.driver.clone(),
                    lap: current.lap,
                    previous_position: previous.position,
                    new_position: current.position,
                });
            }
        }
    }
    events
}
