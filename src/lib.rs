// Library interface for racetrace
//
// All analysis passes are pure functions over an immutable Session snapshot
// built by the data-loading collaborator; nothing in here performs I/O.

pub mod analysis;
pub mod errors;
pub mod session;

// Re-export commonly used types
pub use analysis::{
    DEFAULT_PACE_OUTLIER_MULTIPLIER, GapPoint, GapSeries, LapCleaner, OverlayChannel,
    OvertakeEvent, PaceSummary, PositionPoint, PositionSeries, Stint, TraceSample,
    TrackOverlayPoint, corner_markers, fastest_lap, gap, laps_for, overtakes, pace_distribution,
    position_timeline, project, segment, telemetry_trace,
};
pub use errors::RacetraceError;
pub use session::{
    CircuitGeometry, ClassificationEntry, Compound, CornerMarker, Lap, Session, TelemetrySample,
    TelemetryStream,
};
