//! The die catalog and enumeration bounds.
//!
//! The catalog ordering is load-bearing: pools are canonical when their dice
//! appear in non-decreasing catalog order, which is what makes the
//! enumeration duplicate-free.

/// Allowed die sizes, ordered for canonical pool enumeration.
pub const DIE_CATALOG: [u32; 6] = [4, 6, 8, 10, 12, 20];

/// Number of catalog entries.
pub const CATALOG_SIZE: usize = DIE_CATALOG.len();

/// Upper bound on total dice per pool for a full search run.
///
/// Also the guaranteed-exact range for the u128 coefficient arithmetic: a
/// pool's total outcome count is the product of its die sizes, at most
/// 20^20 (~1.05e26), leaving headroom for cross-multiplied comparisons
/// against parsed probability denominators up to 1e9.
pub const MAX_TOTAL_DICE: usize = 20;
