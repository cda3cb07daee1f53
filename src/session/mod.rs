// Session snapshot model: the read-only view of one loaded session that every
// analysis pass operates on.

pub mod circuit;

use std::collections::{BTreeMap, HashMap};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

pub use circuit::{CircuitGeometry, CornerMarker};

/// Tyre compound classification.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Compound {
    Soft,
    Medium,
    Hard,
    Intermediate,
    Wet,
    #[default]
    Unknown,
}

/// One timing row per (driver, lap number).
///
/// Durations and timestamps are seconds of elapsed session time; `None` marks
/// a value the timing feed never produced, e.g. the duration of an incomplete
/// final lap.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Lap {
    /// Driver identifier (three-letter abbreviation in F1 data)
    pub driver: String,
    /// Lap number, positive and unique per driver
    pub number: u32,
    /// Elapsed session time at lap completion, seconds
    pub completion_time_s: Option<f64>,
    /// Lap duration, seconds
    pub lap_time_s: Option<f64>,
    /// First sector duration, seconds
    pub sector1_time_s: Option<f64>,
    /// Second sector duration, seconds
    pub sector2_time_s: Option<f64>,
    /// Third sector duration, seconds
    pub sector3_time_s: Option<f64>,
    /// Tyre compound fitted for this lap
    pub compound: Compound,
    /// Driver-local stint index, non-decreasing as lap number increases
    pub stint: u32,
    /// Classification position at the end of the lap
    pub position: Option<u32>,
    /// Age of the fitted tyre set, laps
    pub tyre_life: u32,
}

impl Default for Lap {
    fn default() -> Self {
        Self {
            driver: String::new(),
            number: 0,
            completion_time_s: None,
            lap_time_s: None,
            sector1_time_s: None,
            sector2_time_s: None,
            sector3_time_s: None,
            compound: Compound::Unknown,
            stint: 0,
            position: None,
            tyre_life: 0,
        }
    }
}

/// One car-state measurement within a lap.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct TelemetrySample {
    /// Meters traveled from the start line this lap, non-decreasing within a lap
    pub distance_m: f32,
    /// Track-plane X coordinate
    pub x: f32,
    /// Track-plane Y coordinate
    pub y: f32,
    /// Car speed, km/h
    pub speed_kmh: f32,
    /// Engine rotational speed, RPM
    pub engine_rpm: f32,
    /// Selected gear; 0 = neutral
    pub gear: i8,
    /// Throttle application, 0-100
    pub throttle_pct: f32,
    /// Brake application, 0 = released to 1 = full pedal
    pub brake: f32,
}

/// A driver's telemetry for the session, keyed by lap number.
pub type TelemetryStream = BTreeMap<u32, Vec<TelemetrySample>>;

/// One row of the session classification table.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ClassificationEntry {
    pub driver: String,
    /// Finishing/classification position
    pub position: u32,
    /// Classification status as published, e.g. "Finished" or "+1 Lap"
    pub status: String,
}

/// Immutable snapshot of one loaded session.
///
/// Constructed once by the session-loading collaborator and read-only
/// thereafter; safe to share across threads.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Session {
    year: u16,
    event: String,
    session_type: String,
    laps: Vec<Lap>,
    telemetry: HashMap<String, TelemetryStream>,
    classification: Vec<ClassificationEntry>,
    circuit: Option<CircuitGeometry>,
}

impl Session {
    pub fn new(
        year: u16,
        event: impl Into<String>,
        session_type: impl Into<String>,
        laps: Vec<Lap>,
        telemetry: HashMap<String, TelemetryStream>,
        classification: Vec<ClassificationEntry>,
        circuit: Option<CircuitGeometry>,
    ) -> Self {
        Self {
            year,
            event: event.into(),
            session_type: session_type.into(),
            laps,
            telemetry,
            classification,
            circuit,
        }
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn event(&self) -> &str {
        &self.event
    }

    pub fn session_type(&self) -> &str {
        &self.session_type
    }

    /// All lap records of the session, in the order the loader delivered them.
    pub fn laps(&self) -> &[Lap] {
        &self.laps
    }

    /// Telemetry samples recorded by `driver` during lap `number`, if any.
    pub fn telemetry_for(&self, driver: &str, number: u32) -> Option<&[TelemetrySample]> {
        self.telemetry
            .get(driver)
            .and_then(|stream| stream.get(&number))
            .map(Vec::as_slice)
    }

    /// Classification table ordered by finishing position.
    pub fn classification(&self) -> Vec<&ClassificationEntry> {
        self.classification
            .iter()
            .sorted_by_key(|entry| entry.position)
            .collect()
    }

    /// Driver identifiers in classification order, falling back to first
    /// appearance in the lap records when no classification is available.
    pub fn drivers(&self) -> Vec<&str> {
        if self.classification.is_empty() {
            self.laps.iter().map(|lap| lap.driver.as_str()).unique().collect()
        } else {
            self.classification()
                .into_iter()
                .map(|entry| entry.driver.as_str())
                .collect()
        }
    }

    pub fn circuit(&self) -> Option<&CircuitGeometry> {
        self.circuit.as_ref()
    }
}
