//! Probability that a distributed top-`n` query misses results.
//!
//! When the top `n` results of a query are scattered uniformly across `m`
//! workers and each worker returns only its own best `count` rows, some of
//! the true top `n` are lost whenever a single worker holds `count` or more
//! of them. These routines turn the exact enumeration weights into the
//! cumulative probability of that loss as a function of `count`, against
//! the `m^n` equally likely ways the results can land on workers.

use num_bigint::BigUint;
use num_traits::{ToPrimitive, pow};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::combinatorics::{
    aggregate::{NumWays, num_ways},
    enumerate::uniq_msets,
    factorial::FactorialCache,
};

/// One cumulative record: the probability `p` that at least one of `m`
/// workers holds `count` or more of the top `n` results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissStats {
    pub count: u64,
    pub n: u64,
    pub m: usize,
    pub p: f64,
}

impl MissStats {
    pub fn pretty_print(
        &self,
        f: &mut impl std::fmt::Write,
        count_width: usize,
        digits: usize,
    ) -> std::fmt::Result {
        write!(
            f,
            "Probability of {count:>width$} or more of top {n} from one of {m} sets is {p:.digits$e}.",
            count = self.count,
            width = count_width,
            n = self.n,
            m = self.m,
            p = self.p,
            digits = digits,
        )
    }
}

/// Buckets the full enumeration of `(n, m)` by each multiset's largest
/// element, summing ordering weights per bucket.
///
/// Map-based, so it works regardless of the enumerator's emission order.
pub fn ways_by_largest_subpopulation(
    cache: &mut FactorialCache,
    n: u64,
    m: usize,
) -> FxHashMap<u64, BigUint> {
    let mut ways: FxHashMap<u64, BigUint> = FxHashMap::default();
    for mset in uniq_msets(n, m) {
        let largest = mset.iter().copied().max().unwrap_or(0);
        *ways.entry(largest).or_default() += cache.mset_weight(&mset);
    }
    ways
}

/// Every cumulative record for `(n, m)`, largest-subpopulation keys
/// ascending.
///
/// The running numerator stays an exact integer starting from `m^n`; only
/// the final ratio of each record goes through `f64`.
pub fn compute_all_probabilities(cache: &mut FactorialCache, n: u64, m: usize) -> Vec<MissStats> {
    let ways = ways_by_largest_subpopulation(cache, n, m);
    let mut counts: Vec<u64> = ways.keys().copied().collect();
    counts.sort_unstable();
    log::debug!(
        "{} largest-subpopulation buckets for n={n} m={m}",
        counts.len()
    );
    let mut numerator = pow(BigUint::from(m as u64), n as usize);
    let denominator = numerator.to_f64().unwrap_or(f64::INFINITY);
    let mut records = Vec::with_capacity(counts.len());
    for count in counts {
        let p = numerator.to_f64().unwrap_or(f64::INFINITY) / denominator;
        records.push(MissStats { count, n, m, p });
        numerator -= &ways[&count];
    }
    records
}

/// Streams cumulative records straight off the grouped enumeration,
/// optionally stopping at an integer `threshold`.
///
/// Records below the threshold are yielded, the record equal to it is the
/// last one, and a record above it ends the stream unseen. Consumers that
/// stop pulling simply abandon the rest of the enumeration.
pub fn compute_probabilities(
    cache: &mut FactorialCache,
    n: u64,
    m: usize,
    threshold: Option<u64>,
) -> CumulativeProbabilities<'_> {
    let numerator = pow(BigUint::from(m as u64), n as usize);
    let denominator = numerator.to_f64().unwrap_or(f64::INFINITY);
    CumulativeProbabilities {
        ways: num_ways(cache, n, m, 1),
        numerator,
        denominator,
        n,
        m,
        threshold,
        done: false,
    }
}

/// Iterator behind [`compute_probabilities`].
pub struct CumulativeProbabilities<'a> {
    ways: NumWays<'a>,
    numerator: BigUint,
    denominator: f64,
    n: u64,
    m: usize,
    threshold: Option<u64>,
    done: bool,
}

impl Iterator for CumulativeProbabilities<'_> {
    type Item = MissStats;

    fn next(&mut self) -> Option<MissStats> {
        if self.done {
            return None;
        }
        let (key, group_ways) = self.ways.next()?;
        let count = *key.first()?;
        let p = self.numerator.to_f64().unwrap_or(f64::INFINITY) / self.denominator;
        if let Some(threshold) = self.threshold {
            if count > threshold {
                self.done = true;
                return None;
            }
            if count == threshold {
                self.done = true;
            }
        }
        self.numerator -= group_ways;
        Some(MissStats {
            count,
            n: self.n,
            m: self.m,
            p,
        })
    }
}

/// Prints the full cumulative table for `(n, m)`, one aligned line per
/// record.
pub fn print_cumulative_prob(cache: &mut FactorialCache, n: u64, m: usize, digits: usize) {
    let count_width = n.to_string().len();
    for stats in compute_all_probabilities(cache, n, m) {
        let mut line = String::new();
        if stats.pretty_print(&mut line, count_width, digits).is_ok() {
            println!("{line}");
        }
    }
}
