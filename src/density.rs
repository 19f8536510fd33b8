//! Exact outcome densities via integer polynomial convolution.
//!
//! The density of a pool is the generating function of its roll sum: the
//! coefficient at offset i counts the outcomes summing to i + num_dice.
//! Faces are 1-indexed, so totals below the dice count are impossible and
//! the leading zeros are omitted by construction.
//!
//! A single die of size s contributes the uniform sequence of s ones.
//! Repeated dice self-convolve, and per-size densities convolve together;
//! convolution is associative and commutative, so grouping order does not
//! affect the result.

/// Discrete convolution of two coefficient sequences:
/// `out[k] = Σ_j a[j] · b[k − j]`.
///
/// This is the sum-of-independent-variables operation on outcome counts.
/// Coefficients stay exact in u128 for any pool within
/// [`MAX_TOTAL_DICE`](crate::constants::MAX_TOTAL_DICE).
pub fn convolve(a: &[u128], b: &[u128]) -> Vec<u128> {
    let mut out = vec![0u128; a.len() + b.len() - 1];
    for (i, &x) in a.iter().enumerate() {
        if x == 0 {
            continue;
        }
        for (j, &y) in b.iter().enumerate() {
            out[i + j] += x * y;
        }
    }
    out
}

/// Exact distribution of a pool's roll sum.
pub struct RollDensity {
    /// coeffs[i] = number of outcomes with roll sum i + num_dice.
    coeffs: Vec<u128>,
    num_dice: usize,
}

impl RollDensity {
    /// Build the density of a canonical pool by grouping equal die sizes
    /// into runs and convolving the per-size densities together.
    ///
    /// The empty pool maps to the convolution identity `[1]`. It exists as
    /// a recursion terminator in the enumerator and never reaches the
    /// solver.
    pub fn for_pool(pool: &[u32]) -> Self {
        let mut coeffs: Vec<u128> = vec![1];
        let mut i = 0;
        while i < pool.len() {
            let size = pool[i];
            let mut count = 0usize;
            while i < pool.len() && pool[i] == size {
                count += 1;
                i += 1;
            }

            let single = vec![1u128; size as usize];
            let mut group = single.clone();
            for _ in 1..count {
                group = convolve(&group, &single);
            }
            coeffs = convolve(&coeffs, &group);
        }

        Self {
            coeffs,
            num_dice: pool.len(),
        }
    }

    pub fn num_dice(&self) -> usize {
        self.num_dice
    }

    pub fn coefficients(&self) -> &[u128] {
        &self.coeffs
    }

    /// Total outcome count: Σ coefficients = Π die sizes.
    pub fn total_outcomes(&self) -> u128 {
        self.coeffs.iter().sum()
    }

    /// Lowest possible roll: one pip per die.
    pub fn min_roll(&self) -> u32 {
        self.num_dice as u32
    }

    /// Highest possible roll: every die on its largest face.
    pub fn max_roll(&self) -> u32 {
        self.num_dice as u32 + self.coeffs.len() as u32 - 1
    }

    /// Number of outcomes with roll sum ≥ `target`.
    pub fn outcomes_at_least(&self, target: u32) -> u128 {
        if target <= self.min_roll() {
            return self.total_outcomes();
        }
        let offset = (target - self.min_roll()) as usize;
        if offset >= self.coeffs.len() {
            return 0;
        }
        self.coeffs[offset..].iter().sum()
    }
}
