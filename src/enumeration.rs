//! Canonical pool enumeration, memoized on (remaining dice, catalog index).
//!
//! Pools are built by choosing a catalog entry i and a run length r, then
//! recursing on (remaining − r, i + 1). Every later choice comes from a
//! strictly higher catalog index, so die sizes appear in non-decreasing
//! order and each multiset is generated exactly once.
//!
//! The same (remaining, start) subproblem recurs across many outer pools, so
//! results are memoized as shared read-only lists for the duration of one
//! enumeration call. That bounds the work to O(max_dice × catalog) distinct
//! subproblems instead of an exponential recursion tree.

use std::sync::Arc;

use crate::constants::{CATALOG_SIZE, DIE_CATALOG};
use crate::types::DicePool;

/// Memo table scoped to one enumeration run: (remaining, start) → pool list.
struct MemoTable {
    cells: Vec<Option<Arc<Vec<DicePool>>>>,
}

impl MemoTable {
    fn new(max_dice: usize) -> Self {
        Self {
            cells: vec![None; (max_dice + 1) * (CATALOG_SIZE + 1)],
        }
    }

    #[inline(always)]
    fn slot(remaining: usize, start: usize) -> usize {
        remaining * (CATALOG_SIZE + 1) + start
    }

    fn get(&self, remaining: usize, start: usize) -> Option<Arc<Vec<DicePool>>> {
        self.cells[Self::slot(remaining, start)].clone()
    }

    fn put(&mut self, remaining: usize, start: usize, pools: Arc<Vec<DicePool>>) {
        self.cells[Self::slot(remaining, start)] = Some(pools);
    }
}

/// All pools of exactly `remaining` dice whose smallest die sits at catalog
/// index `start` or later.
///
/// `remaining == 0` yields the single empty pool — the recursion terminator.
/// It never escapes the enumerator: the public entry points start at
/// `remaining ≥ 1`, where every emitted pool carries at least one die.
fn pools_from(memo: &mut MemoTable, remaining: usize, start: usize) -> Arc<Vec<DicePool>> {
    if let Some(hit) = memo.get(remaining, start) {
        return hit;
    }

    let mut pools: Vec<DicePool> = Vec::new();
    if remaining == 0 {
        pools.push(DicePool::new());
    } else {
        for i in start..CATALOG_SIZE {
            for run in 1..=remaining {
                let suffixes = pools_from(memo, remaining - run, i + 1);
                for suffix in suffixes.iter() {
                    let mut pool = vec![DIE_CATALOG[i]; run];
                    pool.extend_from_slice(suffix);
                    pools.push(pool);
                }
            }
        }
    }

    let shared = Arc::new(pools);
    memo.put(remaining, start, Arc::clone(&shared));
    shared
}

/// Enumerate pools grouped by size: element t holds every pool of t+1 dice.
pub fn enumerate_tiers(max_dice: usize) -> Vec<Vec<DicePool>> {
    let mut memo = MemoTable::new(max_dice);
    (1..=max_dice)
        .map(|n| pools_from(&mut memo, n, 0).as_ref().clone())
        .collect()
}

/// Enumerate every pool of 1..=max_dice dice, smaller pools first; order
/// within a size is deterministic. `max_dice == 0` yields an empty
/// enumeration.
pub fn enumerate_pools(max_dice: usize) -> Vec<DicePool> {
    enumerate_tiers(max_dice).into_iter().flatten().collect()
}
