// Analysis passes over a loaded session. Each pass is a pure function (or a
// configurable struct with a pure method) from lap/telemetry records to a
// derived artifact; none of them mutate session state.

pub mod cleaner;
pub mod gaps;
pub mod pace;
pub mod positions;
pub mod stints;
pub mod store;
pub mod track_map;

pub use cleaner::{DEFAULT_PACE_OUTLIER_MULTIPLIER, LapCleaner};
pub use gaps::{GapPoint, GapSeries, gap};
pub use pace::{PaceSummary, pace_distribution};
pub use positions::{OvertakeEvent, PositionPoint, PositionSeries, overtakes, position_timeline};
pub use stints::{Stint, segment};
pub use store::{fastest_lap, laps_for};
pub use track_map::{
    OverlayChannel, TraceSample, TrackOverlayPoint, corner_markers, project, telemetry_trace,
};
