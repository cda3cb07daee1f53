// Outlier-lap removal ahead of pace statistics

use log::debug;

use crate::errors::RacetraceError;
use crate::session::Lap;

/// Multiplier over the session's fastest lap beyond which a lap is treated as
/// an outlier. Pit-stop and caution-period laps are multiples slower than
/// green-flag pace and would distort any pace distribution.
pub const DEFAULT_PACE_OUTLIER_MULTIPLIER: f64 = 1.15;

/// Removes laps that do not represent green-flag pace.
pub struct LapCleaner {
    /// Laps at or above `fastest x multiplier` seconds are dropped.
    pub outlier_multiplier: f64,
}

impl Default for LapCleaner {
    fn default() -> Self {
        Self {
            outlier_multiplier: DEFAULT_PACE_OUTLIER_MULTIPLIER,
        }
    }
}

impl LapCleaner {
    pub fn new(outlier_multiplier: f64) -> Self {
        Self { outlier_multiplier }
    }

    /// Retain only laps whose duration is strictly below the outlier
    /// threshold. Laps without a defined duration never pass the filter.
    ///
    /// Fails with `InsufficientData` when `fastest_lap_s` is `None` (a
    /// session with no valid laps), rather than silently returning the
    /// unfiltered input.
    pub fn clean(
        &self,
        laps: &[Lap],
        fastest_lap_s: Option<f64>,
    ) -> Result<Vec<Lap>, RacetraceError> {
        let fastest = fastest_lap_s.ok_or_else(|| RacetraceError::InsufficientData {
            reason: "no valid fastest lap to derive a pace threshold from".to_string(),
        })?;
        let threshold = fastest * self.outlier_multiplier;
        let retained: Vec<Lap> = laps
            .iter()
            .filter(|lap| matches!(lap.lap_time_s, Some(time) if time < threshold))
            .cloned()
            .collect();
        debug!(
            "pace filter at {threshold:.3}s retained {} of {} laps",
            retained.len(),
            laps.len()
        );
        Ok(retained)
    }
}
