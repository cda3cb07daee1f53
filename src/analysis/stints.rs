// Tyre-stint segmentation

use std::collections::BTreeMap;

use itertools::{Itertools, MinMaxResult};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::errors::RacetraceError;
use crate::session::{Compound, Lap};

/// A contiguous run of laps by one driver on one tyre compound.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Stint {
    pub driver: String,
    pub compound: Compound,
    /// First lap number of the stint
    pub start_lap: u32,
    /// Last lap number of the stint, inclusive
    pub end_lap: u32,
    /// Number of lap records in the stint
    pub lap_count: u32,
}

/// Group lap records into tyre stints, one per distinct (driver, stint index)
/// pair found in the input.
///
/// Output is grouped by driver in order of first appearance in the input,
/// then by increasing stint index. The compound is required to be constant
/// within a stint-index group; a group spanning more than one compound is a
/// data-quality violation and fails with `InconsistentStint` listing every
/// conflicting compound.
pub fn segment(laps: &[Lap]) -> Result<Vec<Stint>, RacetraceError> {
    let driver_order: Vec<&str> = laps.iter().map(|lap| lap.driver.as_str()).unique().collect();

    let mut stints = Vec::new();
    for driver in driver_order {
        let mut groups: BTreeMap<u32, Vec<&Lap>> = BTreeMap::new();
        for lap in laps.iter().filter(|lap| lap.driver == driver) {
            groups.entry(lap.stint).or_default().push(lap);
        }

        for (stint, group) in groups {
            let compounds: Vec<Compound> = group.iter().map(|lap| lap.compound).unique().collect();
            if compounds.len() > 1 {
                warn!("driver {driver} stint {stint} spans compounds {compounds:?}");
                return Err(RacetraceError::InconsistentStint {
                    driver: driver.to_string(),
                    stint,
                    compounds,
                });
            }

            let (start_lap, end_lap) = match group.iter().map(|lap| lap.number).minmax() {
                MinMaxResult::MinMax(min, max) => (min, max),
                MinMaxResult::OneElement(only) => (only, only),
                // groups are only created around at least one lap
                MinMaxResult::NoElements => continue,
            };
            stints.push(Stint {
                driver: driver.to_string(),
                compound: compounds[0],
                start_lap,
                end_lap,
                lap_count: group.len() as u32,
            });
        }
    }
    Ok(stints)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stints_cover_each_drivers_laps() {
        let laps = vec![
            lap("VER", 1, 1, Compound::Soft),
            lap("VER", 2, 1, Compound::Soft),
            lap("VER", 3, 2, Compound::Hard),
            lap("VER", 4, 2, Compound::Hard),
            lap("VER", 5, 2, Compound::Hard),
        ];

        let stints = segment(&laps).unwrap();
        assert_eq!(
            stints,
            vec![
                Stint {
                    driver: "VER".to_string(),
                    compound: Compound::Soft,
                    start_lap: 1,
                    end_lap: 2,
                    lap_count: 2,
                },
                Stint {
                    driver: "VER".to_string(),
                    compound: Compound::Hard,
                    start_lap: 3,
                    end_lap: 5,
                    lap_count: 3,
                },
            ]
        );
    }

    #[test]
    fn test_driver_order_is_first_appearance() {
        let laps = vec![
            lap("HAM", 1, 1, Compound::Medium),
            lap("VER", 1, 1, Compound::Soft),
            lap("HAM", 2, 1, Compound::Medium),
            lap("VER", 2, 2, Compound::Medium),
        ];

        let stints = segment(&laps).unwrap();
        let drivers: Vec<&str> = stints.iter().map(|s| s.driver.as_str()).collect();
        assert_eq!(drivers, vec!["HAM", "VER", "VER"]);
    }

    #[test]
    fn test_single_lap_stint() {
        let laps = vec![lap("VER", 7, 3, Compound::Intermediate)];

        let stints = segment(&laps).unwrap();
        assert_eq!(stints.len(), 1);
        assert_eq!(stints[0].start_lap, 7);
        assert_eq!(stints[0].end_lap, 7);
        assert_eq!(stints[0].lap_count, 1);
    }

    #[test]
    fn test_mixed_compound_stint_is_surfaced() {
        let laps = vec![
            lap("VER", 1, 1, Compound::Soft),
            lap("VER", 2, 1, Compound::Medium),
        ];

        let result = segment(&laps);
        match result {
            Err(RacetraceError::InconsistentStint {
                driver,
                stint,
                compounds,
            }) => {
                assert_eq!(driver, "VER");
                assert_eq!(stint, 1);
                assert_eq!(compounds, vec![Compound::Soft, Compound::Medium]);
            }
            other => panic!("expected InconsistentStint, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_input_yields_no_stints() {
        assert!(segment(&[]).unwrap().is_empty());
    }

    fn lap(driver: &str, number: u32, stint: u32, compound: Compound) -> Lap {
        Lap {
            driver: driver.to_string(),
            number,
            stint,
            compound,
            ..Default::default()
        }
    }
}
