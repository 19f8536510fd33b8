//! # Dicetarget — exact-probability dice pool search
//!
//! Finds pools of dice (multisets drawn from the fixed catalog d4, d6, d8,
//! d10, d12, d20) that admit an integer target roll T with P(sum ≥ T)
//! *exactly* equal to a requested probability.
//!
//! ## Pipeline overview
//!
//! | Stage | Rust module | Description |
//! |-------|-------------|-------------|
//! | 1 | [`enumeration`] | Enumerate canonical pools of 1..=N dice, memoized on (remaining, catalog index) |
//! | 2 | [`density`] | Exact outcome counts of a pool's roll sum via integer polynomial convolution |
//! | 3 | [`solver`] | Binary search over roll totals for an exact probability match |
//! | 4 | [`search`] | Tiered parallel scan that stops at the first pool size with any match |
//!
//! Probabilities are compared as exact rationals (u128 cross-multiplication),
//! never as floats: a pool matches if and only if its outcome ratio equals the
//! requested probability as a rational number.
//!
//! ## Pool representation
//!
//! A pool is a `Vec<u32>` of die sizes in non-decreasing catalog order. The
//! enumerator only ever extends a pool with contiguous runs of a single
//! catalog entry before moving to strictly higher indices, so each multiset
//! of dice is produced exactly once.

pub mod constants;
pub mod density;
pub mod enumeration;
pub mod report;
pub mod search;
pub mod solver;
pub mod types;
