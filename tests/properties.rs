// Property tests for the analysis passes

use proptest::prelude::*;

use racetrace::{Compound, Lap, LapCleaner, gap, overtakes, segment};

const COMPOUNDS: [Compound; 6] = [
    Compound::Soft,
    Compound::Medium,
    Compound::Hard,
    Compound::Intermediate,
    Compound::Wet,
    Compound::Unknown,
];

fn timed_laps(driver: &str, completion_times: &[f64]) -> Vec<Lap> {
    completion_times
        .iter()
        .enumerate()
        .map(|(idx, &time)| Lap {
            driver: driver.to_string(),
            number: idx as u32 + 1,
            completion_time_s: Some(time),
            ..Default::default()
        })
        .collect()
}

proptest! {
    #[test]
    fn gap_series_are_exact_negations(
        a_times in proptest::collection::vec(60.0..200.0f64, 1..25),
        b_times in proptest::collection::vec(60.0..200.0f64, 1..25),
    ) {
        let mut laps = timed_laps("A", &a_times);
        laps.extend(timed_laps("B", &b_times));

        let forward = gap("A", "B", &laps).unwrap();
        let backward = gap("B", "A", &laps).unwrap();

        prop_assert_eq!(forward.points.len(), backward.points.len());
        for (f, b) in forward.points.iter().zip(&backward.points) {
            prop_assert_eq!(f.lap, b.lap);
            prop_assert_eq!(f.gap_s, -b.gap_s);
        }
    }

    #[test]
    fn clean_threshold_is_strict_and_total(
        lap_times in proptest::collection::vec(60.0..400.0f64, 1..60),
        multiplier in 1.0..1.5f64,
    ) {
        let laps: Vec<Lap> = lap_times
            .iter()
            .enumerate()
            .map(|(idx, &time)| Lap {
                driver: "A".to_string(),
                number: idx as u32 + 1,
                lap_time_s: Some(time),
                ..Default::default()
            })
            .collect();
        let fastest = lap_times.iter().cloned().fold(f64::INFINITY, f64::min);
        let threshold = fastest * multiplier;

        let cleaner = LapCleaner::new(multiplier);
        let cleaned = cleaner.clean(&laps, Some(fastest)).unwrap();

        for lap in &cleaned {
            prop_assert!(lap.lap_time_s.unwrap() < threshold);
        }
        let excluded = laps.len() - cleaned.len();
        let over_threshold = lap_times.iter().filter(|&&t| t >= threshold).count();
        prop_assert_eq!(excluded, over_threshold);
    }

    #[test]
    fn clean_is_idempotent(
        lap_times in proptest::collection::vec(60.0..400.0f64, 1..60),
    ) {
        let laps: Vec<Lap> = lap_times
            .iter()
            .enumerate()
            .map(|(idx, &time)| Lap {
                driver: "A".to_string(),
                number: idx as u32 + 1,
                lap_time_s: Some(time),
                ..Default::default()
            })
            .collect();
        let fastest = lap_times.iter().cloned().fold(f64::INFINITY, f64::min);

        let cleaner = LapCleaner::default();
        let once = cleaner.clean(&laps, Some(fastest)).unwrap();
        let twice = cleaner.clean(&once, Some(fastest)).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn stints_partition_a_drivers_laps(
        plan in proptest::collection::vec((0usize..6, 1u32..8), 1..5),
    ) {
        // one compound per stint index, contiguous lap numbers
        let mut laps = Vec::new();
        let mut number = 0u32;
        for (stint_idx, (compound_idx, count)) in plan.iter().enumerate() {
            for _ in 0..*count {
                number += 1;
                laps.push(Lap {
                    driver: "A".to_string(),
                    number,
                    stint: stint_idx as u32 + 1,
                    compound: COMPOUNDS[*compound_idx],
                    ..Default::default()
                });
            }
        }

        let stints = segment(&laps).unwrap();
        prop_assert_eq!(stints.len(), plan.len());

        // non-overlapping, in stint order, and covering every lap number
        let mut expected_start = 1u32;
        for (stint, (compound_idx, count)) in stints.iter().zip(&plan) {
            prop_assert_eq!(stint.start_lap, expected_start);
            prop_assert_eq!(stint.lap_count, *count);
            prop_assert_eq!(stint.end_lap, expected_start + count - 1);
            prop_assert_eq!(stint.compound, COMPOUNDS[*compound_idx]);
            expected_start = stint.end_lap + 1;
        }
        prop_assert_eq!(expected_start - 1, number);
    }

    #[test]
    fn overtakes_only_ever_improve_position(
        positions in proptest::collection::vec(1u32..20, 1..40),
    ) {
        let laps: Vec<Lap> = positions
            .iter()
            .enumerate()
            .map(|(idx, &position)| Lap {
                driver: "A".to_string(),
                number: idx as u32 + 1,
                position: Some(position),
                ..Default::default()
            })
            .collect();

        for event in overtakes(&laps) {
            prop_assert!(event.new_position < event.previous_position);
            prop_assert!(event.lap > 1);
        }
    }
}
