//! Property tests for the max-of-two-dice distribution.

use oracle_dice::{compute_distribution, compute_statistics, DieSides, Distribution};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn test_pmf_sums_to_one_for_every_selector_die() {
    for sides in DieSides::all() {
        let total: f64 = sides.distribution().iter().map(|r| r.probability).sum();
        assert!(
            (total - 1.0).abs() < 1e-12,
            "{} sums to {}",
            sides,
            total
        );
    }
}

#[test]
fn test_mode_is_largest_value_for_every_selector_die() {
    for sides in DieSides::all() {
        let rows = sides.distribution();
        let stats = sides.statistics();
        let best = rows
            .iter()
            .max_by(|a, b| a.probability.total_cmp(&b.probability))
            .unwrap();
        assert_eq!(best.k, sides.get());
        assert_eq!(stats.mode, sides.get());
        assert_eq!(best.probability, stats.mode_probability);
    }
}

#[test]
fn test_mean_increases_with_sides() {
    let means: Vec<f64> = DieSides::all().map(|s| s.statistics().mean).collect();
    for pair in means.windows(2) {
        assert!(pair[1] > pair[0], "{} !> {}", pair[1], pair[0]);
    }
}

#[test]
fn test_d20_example() {
    let view = Distribution::for_die(DieSides::new(20).unwrap());
    let last = view.table.last().unwrap();
    assert_eq!(last.row.fraction(), "39/400");
    assert!((last.row.probability - 0.0975).abs() < 1e-12);
    assert_eq!(view.statistics.mode, 20);
}

#[test]
fn test_json_shape() {
    let view = Distribution::for_die(DieSides::new(4).unwrap());
    let value = serde_json::to_value(&view).unwrap();
    assert_eq!(value["sides"], 4);
    assert_eq!(value["statistics"]["mode"], 4);
    assert_eq!(value["table"][3]["k"], 4);
    assert_eq!(value["table"][3]["percentage"], "43.75");
    assert_eq!(value["table"][3]["is_mode"], true);
}

proptest! {
    #[test]
    fn prop_pmf_sums_to_one(sides in 1u32..=200) {
        let total: f64 = compute_distribution(sides).unwrap().iter().map(|r| r.probability).sum();
        prop_assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn prop_rows_are_ascending_and_increasing(sides in 1u32..=200) {
        let rows = compute_distribution(sides).unwrap();
        prop_assert_eq!(rows.len() as u32, sides);
        for (i, pair) in rows.windows(2).enumerate() {
            prop_assert_eq!(pair[0].k, i as u32 + 1);
            prop_assert!(pair[1].probability > pair[0].probability);
        }
    }

    #[test]
    fn prop_mode_probability_matches_last_row(sides in 1u32..=200) {
        let rows = compute_distribution(sides).unwrap();
        let stats = compute_statistics(sides).unwrap();
        prop_assert_eq!(rows.last().unwrap().probability, stats.mode_probability);
    }
}
