use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::combinatorics::factorial::FactorialCache;
use crate::error::{Error, Result};

/// Exact count of the tuples [`uniq_msets`] yields for `(total, length)`,
/// without enumerating them.
///
/// Partition recurrence over a table indexed by sum and part count,
/// `P(i, j) = P(i - 1, j - 1) + P(i - j, j)` with `P(i, 1) = 1`; summing
/// the final row over every part count admits the trailing-zero-padded
/// tuples. The runtime of most whole-enumeration operations in this crate
/// is proportional to this value.
///
/// [`uniq_msets`]: crate::combinatorics::enumerate::uniq_msets
pub fn num_uniq_msets(total: u64, length: usize) -> BigUint {
    let n = total as usize;
    if length == 0 {
        return if n == 0 { BigUint::one() } else { BigUint::zero() };
    }
    let mut nparts = vec![vec![BigUint::zero(); length + 1]; n + 1];
    for i in 0..=n {
        nparts[i][1] = BigUint::one();
        for j in 2..=length.min(i) {
            let count = &nparts[i - 1][j - 1] + &nparts[i - j][j];
            nparts[i][j] = count;
        }
    }
    nparts[n].iter().sum()
}

/// Stars-and-bars count of every ordered sequence of `length` non-negative
/// integers summing to `total`: `multinomial_coeff([total, length - 1])`.
///
/// Equals the sum of arrangement counts over the whole enumeration for the
/// same inputs.
pub fn multiset_number(
    cache: &mut FactorialCache,
    total: u64,
    length: usize,
) -> Result<BigUint> {
    if length == 0 {
        return Err(Error::ZeroLength);
    }
    cache.multinomial_coeff(&[total, (length - 1) as u64])
}
