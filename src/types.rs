//! Core types: dice pools, match records, and the exact target probability.

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

/// A pool of dice: die sizes in non-decreasing catalog order.
///
/// Canonical ordering is established by the enumerator and assumed (not
/// re-checked) by the density builder, which groups equal sizes as
/// contiguous runs.
pub type DicePool = Vec<u32>;

/// A successful search result: a pool and the roll total whose reach
/// probability equals the requested target exactly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    pub dice: DicePool,
    pub target: u32,
}

/// Exact target probability in (0, 1], stored as a reduced fraction.
///
/// Comparisons against an outcome ratio successes/total use u128
/// cross-multiplication, so equality means exact rational equality — no
/// float rounding can produce a spurious miss or a spurious hit. The
/// cross-products stay inside u128 for any pool of up to
/// [`MAX_TOTAL_DICE`](crate::constants::MAX_TOTAL_DICE) catalog dice and
/// denominators up to 1e9.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TargetProbability {
    num: u128,
    den: u128,
}

impl TargetProbability {
    /// Construct from a numerator/denominator pair, reducing by gcd.
    /// Returns `None` unless 0 < num/den ≤ 1.
    pub fn new(num: u128, den: u128) -> Option<Self> {
        if num == 0 || den == 0 || num > den {
            return None;
        }
        let g = gcd(num, den);
        Some(Self {
            num: num / g,
            den: den / g,
        })
    }

    /// Parse `"p/q"`, a decimal like `"0.25"` (at most 9 fractional digits),
    /// or a bare integer (only `"1"` is in range).
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if let Some((num_text, den_text)) = text.split_once('/') {
            let num: u128 = num_text.trim().parse().ok()?;
            let den: u128 = den_text.trim().parse().ok()?;
            return Self::new(num, den);
        }
        if let Some((int_text, frac_text)) = text.split_once('.') {
            if frac_text.is_empty()
                || frac_text.len() > 9
                || !frac_text.bytes().all(|b| b.is_ascii_digit())
            {
                return None;
            }
            let int_part: u128 = if int_text.is_empty() {
                0
            } else {
                int_text.parse().ok()?
            };
            let frac_part: u128 = frac_text.parse().ok()?;
            let den = 10u128.pow(frac_text.len() as u32);
            return Self::new(int_part * den + frac_part, den);
        }
        let num: u128 = text.parse().ok()?;
        Self::new(num, 1)
    }

    pub fn numerator(&self) -> u128 {
        self.num
    }

    pub fn denominator(&self) -> u128 {
        self.den
    }

    /// Exact ordering of successes/total relative to this probability.
    #[inline(always)]
    pub fn cmp_ratio(&self, successes: u128, total: u128) -> Ordering {
        (successes * self.den).cmp(&(self.num * total))
    }

    /// True when successes/total equals this probability exactly.
    #[inline(always)]
    pub fn matches(&self, successes: u128, total: u128) -> bool {
        self.cmp_ratio(successes, total) == Ordering::Equal
    }
}

impl fmt::Display for TargetProbability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}
