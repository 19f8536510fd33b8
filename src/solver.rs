//! Exact-probability target search over a pool's roll density.
//!
//! For a candidate total T, P(T) = (outcomes with sum ≥ T) / (total
//! outcomes). P is non-increasing in T, so a binary search over
//! [min_roll, max_roll] either lands on an exact rational match or closes
//! the bracket empty. A bracket that closes without a hit is an expected
//! outcome, not an error: most pools have no total matching a given
//! probability.

use std::cmp::Ordering;

use crate::density::RollDensity;
use crate::types::{MatchRecord, TargetProbability};

/// Outcome counts (successes, total) for rolling at least `target`.
///
/// A single die is computed directly as (s − target + 1, s); the general
/// path sums the density tail. `target` must lie within
/// [min_roll, max_roll], which the binary search guarantees.
pub fn probability_of_at_least(density: &RollDensity, target: u32) -> (u128, u128) {
    let total = density.total_outcomes();
    if density.num_dice() == 1 {
        return (total - target as u128 + 1, total);
    }
    (density.outcomes_at_least(target), total)
}

/// Binary-search the roll range for a total whose reach probability equals
/// `tp` exactly.
///
/// The first midpoint that compares equal is the recorded target. Ties in
/// P across consecutive totals can only arise from zero-coefficient gaps;
/// whichever tied total the search probes first wins, and that choice is
/// deterministic.
pub fn find_target_roll(
    density: &RollDensity,
    pool: &[u32],
    tp: TargetProbability,
) -> Option<MatchRecord> {
    let mut lo = density.min_roll();
    let mut hi = density.max_roll();

    while lo <= hi {
        let mid = (lo + hi) / 2;
        let (successes, total) = probability_of_at_least(density, mid);
        match tp.cmp_ratio(successes, total) {
            Ordering::Equal => {
                return Some(MatchRecord {
                    dice: pool.to_vec(),
                    target: mid,
                });
            }
            // P(mid) below target: larger probabilities live at smaller totals.
            Ordering::Less => hi = mid - 1,
            Ordering::Greater => lo = mid + 1,
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tp(num: u128, den: u128) -> TargetProbability {
        TargetProbability::new(num, den).unwrap()
    }

    #[test]
    fn test_single_die_probability_endpoints() {
        for size in [4u32, 6, 8, 10, 12, 20] {
            let density = RollDensity::for_pool(&[size]);
            // P(1) = 1, P(s) = 1/s
            assert_eq!(probability_of_at_least(&density, 1), (size as u128, size as u128));
            assert_eq!(probability_of_at_least(&density, size), (1, size as u128));
        }
    }

    #[test]
    fn test_d4_half_probability_target() {
        // (4 − T + 1)/4 = 1/2 ⇒ T = 3
        let density = RollDensity::for_pool(&[4]);
        let record = find_target_roll(&density, &[4], tp(1, 2)).unwrap();
        assert_eq!(record.dice, vec![4]);
        assert_eq!(record.target, 3);
    }

    #[test]
    fn test_two_d6_seven_or_better() {
        let density = RollDensity::for_pool(&[6, 6]);
        assert_eq!(probability_of_at_least(&density, 7), (21, 36));
        // 21/36 = 7/12; the bracket midpoint is 7, so the search hits it first
        let record = find_target_roll(&density, &[6, 6], tp(7, 12)).unwrap();
        assert_eq!(record.target, 7);
    }

    #[test]
    fn test_no_match_closes_silently() {
        // (6 − T + 1)/6 = 1/4 has no integer solution
        let density = RollDensity::for_pool(&[6]);
        assert!(find_target_roll(&density, &[6], tp(1, 4)).is_none());
    }

    #[test]
    fn test_certainty_matches_minimum_roll() {
        let density = RollDensity::for_pool(&[6, 6]);
        let record = find_target_roll(&density, &[6, 6], tp(1, 1)).unwrap();
        assert_eq!(record.target, 2);
    }

    #[test]
    fn test_four_dice_regression_pool() {
        // [4,6,6,6]: 192 of 864 outcomes reach 16 ⇒ exactly 2/9
        let pool = [4u32, 6, 6, 6];
        let density = RollDensity::for_pool(&pool);
        assert_eq!(probability_of_at_least(&density, 16), (192, 864));
        let record = find_target_roll(&density, &pool, tp(2, 9)).unwrap();
        assert_eq!(record.target, 16);
    }
}
