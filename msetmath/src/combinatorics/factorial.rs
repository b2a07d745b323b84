use num_bigint::BigUint;
use num_traits::One;
use rustc_hash::FxHashMap;

use crate::error::{Error, Result};

/// Memoized factorial table backing every exact coefficient in the crate.
///
/// Entries are dense from `0!` up to the largest `n` requested so far, so a
/// cold lookup costs O(n) and sequential lookups amortize to O(1). The
/// table is a pure cache: [`FactorialCache::clear`] resets it to its
/// initial single-entry state without affecting the correctness of later
/// calls.
#[derive(Debug, Clone)]
pub struct FactorialCache {
    table: Vec<BigUint>,
}

impl Default for FactorialCache {
    fn default() -> Self {
        Self::new()
    }
}

impl FactorialCache {
    /// Creates a cache holding only `0! = 1`.
    pub fn new() -> Self {
        Self {
            table: vec![BigUint::one()],
        }
    }

    /// Creates a cache prefilled through `n!`.
    pub fn up_to(n: u64) -> Self {
        let mut cache = Self::new();
        cache.extend_to(n as usize);
        cache
    }

    /// Number of factorials currently cached.
    pub fn cached(&self) -> usize {
        self.table.len()
    }

    /// Drops every entry except `0!`.
    pub fn clear(&mut self) {
        self.table.truncate(1);
    }

    fn extend_to(&mut self, n: usize) {
        for v in self.table.len()..=n {
            let next = &self.table[v - 1] * (v as u64);
            self.table.push(next);
        }
    }

    /// Returns `n!`, filling every missing entry from the current cache
    /// frontier up to `n` on a miss.
    pub fn factorial(&mut self, n: u64) -> BigUint {
        let n = n as usize;
        if n >= self.table.len() {
            self.extend_to(n);
        }
        self.table[n].clone()
    }

    /// Multinomial coefficient `(Σ parts)! / Π parts!`.
    ///
    /// Counts the distinct ways to order a sequence whose elements fall
    /// into groups of the given sizes; the division is always exact.
    pub fn multinomial_coeff(&mut self, parts: &[u64]) -> Result<BigUint> {
        if parts.is_empty() {
            return Err(Error::EmptyParts);
        }
        Ok(self.quotient_of_factorials(parts))
    }

    /// Number of distinct orderings of the exact multiset of values in
    /// `parts`: the multinomial coefficient of its value-frequency profile.
    pub fn number_of_arrangements(&mut self, parts: &[u64]) -> Result<BigUint> {
        if parts.is_empty() {
            return Err(Error::EmptyParts);
        }
        Ok(self.arrangements(parts))
    }

    fn arrangements(&mut self, parts: &[u64]) -> BigUint {
        let mut freq: FxHashMap<u64, u64> = FxHashMap::default();
        for &value in parts {
            *freq.entry(value).or_insert(0) += 1;
        }
        let multiplicities: Vec<u64> = freq.into_values().collect();
        self.quotient_of_factorials(&multiplicities)
    }

    fn quotient_of_factorials(&mut self, parts: &[u64]) -> BigUint {
        let total: u64 = parts.iter().sum();
        let mut denominator = BigUint::one();
        for &part in parts {
            denominator *= self.factorial(part);
        }
        self.factorial(total) / denominator
    }

    /// Weight of one enumerated multiset in the full sample space: its
    /// multinomial coefficient times its arrangement count. The empty tuple
    /// weighs 1 (empty product).
    pub(crate) fn mset_weight(&mut self, mset: &[u64]) -> BigUint {
        if mset.is_empty() {
            return BigUint::one();
        }
        let orderings = self.arrangements(mset);
        self.quotient_of_factorials(mset) * orderings
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng, rngs::StdRng};

    use super::*;

    fn naive_factorial(n: u64) -> BigUint {
        (1..=n).fold(BigUint::one(), |acc, v| acc * v)
    }

    #[test]
    fn test_factorial_small_inputs() {
        let mut cache = FactorialCache::new();
        let pairs = [(0u64, 1u32), (1, 1), (2, 2), (3, 6), (5, 120)];
        for (value, expected) in pairs {
            assert_eq!(cache.factorial(value), BigUint::from(expected));
        }
    }

    #[test]
    fn test_factorial_random_inputs() {
        let mut cache = FactorialCache::new();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..5 {
            let value = rng.random_range(0..300u64);
            assert_eq!(cache.factorial(value), naive_factorial(value));
        }
    }

    #[test]
    fn test_clear_resets_cache() {
        let mut cache = FactorialCache::new();
        cache.factorial(10);
        assert!(cache.cached() > 10);
        cache.clear();
        assert_eq!(cache.cached(), 1);
        assert_eq!(cache.factorial(4), BigUint::from(24u32));
    }

    #[test]
    fn test_up_to_prefills() {
        let cache = FactorialCache::up_to(12);
        assert_eq!(cache.cached(), 13);
    }

    #[test]
    fn test_multinomial_coeff_good_inputs() {
        let mut cache = FactorialCache::new();
        let pairs: [(&[u64], u32); 4] = [(&[0], 1), (&[3], 1), (&[2, 3], 10), (&[1, 2, 3], 60)];
        for (parts, expected) in pairs {
            assert_eq!(
                cache.multinomial_coeff(parts).unwrap(),
                BigUint::from(expected)
            );
        }
    }

    #[test]
    fn test_multinomial_coeff_empty_input() {
        let mut cache = FactorialCache::new();
        assert_eq!(cache.multinomial_coeff(&[]), Err(Error::EmptyParts));
    }

    #[test]
    fn test_number_of_arrangements_good_inputs() {
        let mut cache = FactorialCache::new();
        let pairs: [(&[u64], u32); 3] = [(&[3], 1), (&[2, 3], 2), (&[1, 2, 3], 6)];
        for (parts, expected) in pairs {
            assert_eq!(
                cache.number_of_arrangements(parts).unwrap(),
                BigUint::from(expected)
            );
        }
    }

    #[test]
    fn test_number_of_arrangements_empty_input() {
        let mut cache = FactorialCache::new();
        assert_eq!(cache.number_of_arrangements(&[]), Err(Error::EmptyParts));
    }

    #[test]
    fn test_number_of_arrangements_over_groups() {
        let mut cache = FactorialCache::new();
        for parts in [[0u64, 5], [1, 4], [2, 3]] {
            assert_eq!(
                cache.number_of_arrangements(&parts).unwrap(),
                BigUint::from(2u32)
            );
        }
    }
}
