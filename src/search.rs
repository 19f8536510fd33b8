//! Tiered search pipeline: enumerate once, solve pools in parallel per
//! tier, stop at the first pool size that yields any match.
//!
//! The scan favors small pools by construction: tiers run in ascending dice
//! count and the scan short-circuits once a tier produces at least one
//! match. Every pool of that tier is still evaluated, so the result holds
//! *all* matches of the smallest matching size. Ordering is restored by
//! sorting on enumeration index after the parallel collect instead of
//! relying on append order.
//!
//! The memoized enumeration completes before any parallel consumption, so
//! the per-pool work (density + solve) shares nothing but immutable pools.

use std::time::Instant;

use rayon::prelude::*;

use crate::density::RollDensity;
use crate::enumeration::enumerate_tiers;
use crate::solver::find_target_roll;
use crate::types::{DicePool, MatchRecord, TargetProbability};

/// Result of one tiered search run.
pub struct SearchOutcome {
    /// Matches from the smallest matching tier, in enumeration order.
    pub matches: Vec<MatchRecord>,
    /// Dice count of the matching tier, if any tier matched.
    pub matched_pool_size: Option<usize>,
    /// Total pools enumerated across all tiers.
    pub pools_enumerated: usize,
    /// Pools actually evaluated before the scan stopped.
    pub pools_evaluated: usize,
}

/// Evaluate one pool: build its density and search for an exact match.
pub fn evaluate_pool(pool: &DicePool, tp: TargetProbability) -> Option<MatchRecord> {
    let density = RollDensity::for_pool(pool);
    find_target_roll(&density, pool, tp)
}

/// Run the tiered search for `tp` over pools of 1..=max_dice dice.
pub fn find_matching_pools(tp: TargetProbability, max_dice: usize) -> SearchOutcome {
    let t0 = Instant::now();
    let tiers = enumerate_tiers(max_dice);
    let pools_enumerated: usize = tiers.iter().map(|t| t.len()).sum();
    println!(
        "{} pools enumerated in {:.1} ms",
        pools_enumerated,
        t0.elapsed().as_secs_f64() * 1000.0
    );

    let mut pools_evaluated = 0usize;
    for (tier_idx, tier) in tiers.iter().enumerate() {
        let num_dice = tier_idx + 1;
        println!("Checking pools with {} dice ({} pools).", num_dice, tier.len());
        pools_evaluated += tier.len();

        let mut hits: Vec<(usize, MatchRecord)> = tier
            .par_iter()
            .enumerate()
            .filter_map(|(idx, pool)| evaluate_pool(pool, tp).map(|m| (idx, m)))
            .collect();
        hits.sort_by_key(|&(idx, _)| idx);

        if !hits.is_empty() {
            return SearchOutcome {
                matches: hits.into_iter().map(|(_, m)| m).collect(),
                matched_pool_size: Some(num_dice),
                pools_enumerated,
                pools_evaluated,
            };
        }
    }

    SearchOutcome {
        matches: Vec::new(),
        matched_pool_size: None,
        pools_enumerated,
        pools_evaluated,
    }
}
