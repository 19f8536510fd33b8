//! End-to-end search runs against exact hand-checked fixtures.

use dicetarget::search::{evaluate_pool, find_matching_pools};
use dicetarget::types::{MatchRecord, TargetProbability};

fn tp(num: u128, den: u128) -> TargetProbability {
    TargetProbability::new(num, den).unwrap()
}

fn record(dice: &[u32], target: u32) -> MatchRecord {
    MatchRecord {
        dice: dice.to_vec(),
        target,
    }
}

#[test]
fn single_d4_half_probability() {
    // P(roll ≥ 3 on a d4) = 2/4 = 1/2
    let found = evaluate_pool(&vec![4], tp(1, 2)).unwrap();
    assert_eq!(found, record(&[4], 3));
}

#[test]
fn half_probability_matches_each_catalog_die() {
    let outcome = find_matching_pools(tp(1, 2), 20);
    assert_eq!(outcome.matched_pool_size, Some(1));
    assert_eq!(outcome.pools_evaluated, 6);
    assert_eq!(
        outcome.matches,
        vec![
            record(&[4], 3),
            record(&[6], 4),
            record(&[8], 5),
            record(&[10], 6),
            record(&[12], 7),
            record(&[20], 11),
        ]
    );
}

#[test]
fn quarter_probability_skips_d6_and_d10() {
    // (s − T + 1)/s = 1/4 needs 4 | s: holds for s = 4, 8, 12, 20
    let outcome = find_matching_pools(tp(1, 4), 8);
    assert_eq!(outcome.matched_pool_size, Some(1));
    assert_eq!(
        outcome.matches,
        vec![
            record(&[4], 4),
            record(&[8], 7),
            record(&[12], 10),
            record(&[20], 16),
        ]
    );
}

#[test]
fn certainty_matches_minimum_roll_on_every_die() {
    let outcome = find_matching_pools(tp(1, 1), 3);
    assert_eq!(outcome.matched_pool_size, Some(1));
    let targets: Vec<u32> = outcome.matches.iter().map(|m| m.target).collect();
    assert_eq!(targets, vec![1, 1, 1, 1, 1, 1]);
}

#[test]
fn two_ninths_regression_stops_at_four_dice() {
    // The documented full run: 2/9 over pools of up to 20 dice terminates at
    // the 4-dice tier with three matches, never touching tiers 5..20.
    let outcome = find_matching_pools(tp(2, 9), 20);
    assert_eq!(outcome.pools_enumerated, 230_229);
    assert_eq!(outcome.matched_pool_size, Some(4));
    assert_eq!(outcome.pools_evaluated, 6 + 21 + 56 + 126);
    assert_eq!(
        outcome.matches,
        vec![
            record(&[4, 6, 6, 6], 16),
            record(&[6, 6, 8, 10], 21),
            record(&[10, 12, 12, 20], 36),
        ]
    );
}

#[test]
fn no_match_probability_yields_empty_outcome() {
    // Catalog products factor into 2, 3, 5 only, so a denominator of 7 can
    // never divide a pool's outcome count.
    let outcome = find_matching_pools(tp(1, 7), 3);
    assert!(outcome.matches.is_empty());
    assert_eq!(outcome.matched_pool_size, None);
    assert_eq!(outcome.pools_evaluated, outcome.pools_enumerated);
}
