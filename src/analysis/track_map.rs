// Fastest-lap telemetry projected onto track coordinates

use std::cmp::Ordering;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::RacetraceError;
use crate::session::{CornerMarker, Lap, Session, TelemetrySample};

/// Telemetry channel painted onto the track outline.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum OverlayChannel {
    /// Car speed, continuous scalar in km/h
    Speed,
    /// Selected gear, small discrete integer
    Gear,
    /// Brake state, 0 or 1
    Brake,
}

impl OverlayChannel {
    fn value(&self, sample: &TelemetrySample) -> f32 {
        match self {
            OverlayChannel::Speed => sample.speed_kmh,
            OverlayChannel::Gear => sample.gear as f32,
            OverlayChannel::Brake => {
                if sample.brake > 0.0 {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }
}

impl FromStr for OverlayChannel {
    type Err = RacetraceError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "speed" => Ok(OverlayChannel::Speed),
            // "nGear" is the channel name used by the data provider
            "gear" | "ngear" => Ok(OverlayChannel::Gear),
            "brake" => Ok(OverlayChannel::Brake),
            _ => Err(RacetraceError::UnknownChannel {
                channel: name.to_string(),
            }),
        }
    }
}

/// One telemetry sample mapped onto track coordinates.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct TrackOverlayPoint {
    pub x: f32,
    pub y: f32,
    /// Value of the selected channel at this sample
    pub value: f32,
}

/// Map a driver's fastest-lap telemetry onto 2D track coordinates with the
/// selected channel as the point value.
///
/// The fastest lap is the driver's lap with the minimum defined duration;
/// laps without a duration (e.g. an incomplete final lap) are never selected.
/// Fails with `DriverNotFound` when the driver has no lap records at all,
/// and with `NoLapData` when no lap has a defined duration or the fastest
/// lap carries no telemetry.
pub fn project(
    session: &Session,
    driver: &str,
    channel: OverlayChannel,
) -> Result<Vec<TrackOverlayPoint>, RacetraceError> {
    let (fastest, samples) = fastest_telemetry_lap(session, driver)?;
    debug!(
        "projecting {channel:?} over lap {} of {driver} ({} samples)",
        fastest.number,
        samples.len()
    );

    Ok(samples
        .iter()
        .map(|sample| TrackOverlayPoint {
            x: sample.x,
            y: sample.y,
            value: channel.value(sample),
        })
        .collect())
}

/// One fastest-lap telemetry sample against lap distance.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct TraceSample {
    /// Meters traveled from the start line
    pub distance_m: f32,
    /// Car speed, km/h
    pub speed_kmh: f32,
    /// Engine rotational speed, RPM
    pub engine_rpm: f32,
    /// Selected gear
    pub gear: i8,
    /// Throttle application, 0-100
    pub throttle_pct: f32,
    /// Brake application, 0 = released to 1 = full pedal
    pub brake: f32,
}

/// A driver's fastest-lap telemetry against lap distance, carrying the
/// channels the trace view plots (speed, RPM, gear, throttle, brake).
///
/// Callers overlay one trace per driver to compare them on a shared distance
/// axis. Lap selection and failure modes are those of [`project`]:
/// `DriverNotFound` without lap records, `NoLapData` without a timed lap or
/// without telemetry for it.
pub fn telemetry_trace(
    session: &Session,
    driver: &str,
) -> Result<Vec<TraceSample>, RacetraceError> {
    let (fastest, samples) = fastest_telemetry_lap(session, driver)?;
    debug!(
        "tracing lap {} of {driver} ({} samples)",
        fastest.number,
        samples.len()
    );

    Ok(samples
        .iter()
        .map(|sample| TraceSample {
            distance_m: sample.distance_m,
            speed_kmh: sample.speed_kmh,
            engine_rpm: sample.engine_rpm,
            gear: sample.gear,
            throttle_pct: sample.throttle_pct,
            brake: sample.brake,
        })
        .collect())
}

/// The driver's fastest timed lap and its telemetry samples.
fn fastest_telemetry_lap<'a>(
    session: &'a Session,
    driver: &str,
) -> Result<(&'a Lap, &'a [TelemetrySample]), RacetraceError> {
    let driver_laps: Vec<_> = session
        .laps()
        .iter()
        .filter(|lap| lap.driver == driver)
        .collect();
    if driver_laps.is_empty() {
        return Err(RacetraceError::DriverNotFound {
            driver: driver.to_string(),
        });
    }

    let fastest = driver_laps
        .iter()
        .filter(|lap| lap.lap_time_s.is_some())
        .min_by(|a, b| {
            a.lap_time_s
                .partial_cmp(&b.lap_time_s)
                .unwrap_or(Ordering::Equal)
        })
        .ok_or_else(|| RacetraceError::NoLapData {
            driver: driver.to_string(),
        })?;

    let samples = session
        .telemetry_for(driver, fastest.number)
        .ok_or_else(|| RacetraceError::NoLapData {
            driver: driver.to_string(),
        })?;
    Ok((fastest, samples))
}

/// Corner annotations for the session's circuit, in the same coordinate
/// frame as the overlay points. Independent of driver and channel; empty
/// when the loader delivered no circuit geometry.
pub fn corner_markers(session: &Session) -> Vec<CornerMarker> {
    session
        .circuit()
        .map(|circuit| circuit.corners().to_vec())
        .unwrap_or_default()
}
