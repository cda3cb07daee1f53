// Circuit geometry delivered by the session-loading collaborator

use serde::{Deserialize, Serialize};

/// A fixed corner annotation in the same coordinate frame as the telemetry
/// position samples, independent of any driver's data.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct CornerMarker {
    /// Track-plane X coordinate
    pub x: f32,
    /// Track-plane Y coordinate
    pub y: f32,
    /// Corner number as published by the circuit
    pub number: u32,
}

/// Corner layout of the circuit a session ran on.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct CircuitGeometry {
    corners: Vec<CornerMarker>,
}

impl CircuitGeometry {
    /// Build the geometry from loader-provided markers, ordered by corner
    /// number regardless of delivery order.
    pub fn new(mut corners: Vec<CornerMarker>) -> Self {
        corners.sort_by_key(|corner| corner.number);
        Self { corners }
    }

    pub fn corners(&self) -> &[CornerMarker] {
        &self.corners
    }
}
