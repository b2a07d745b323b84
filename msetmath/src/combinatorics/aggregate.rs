use std::iter::Peekable;

use num_bigint::BigUint;

use crate::combinatorics::{
    enumerate::{UniqMsets, uniq_msets},
    factorial::FactorialCache,
};

/// Groups the enumeration of `(total, length)` by the first `key_len`
/// elements of each tuple and sums the ordering weight of every group.
///
/// Equal keys are contiguous under the enumerator's emission order, so a
/// single forward pass suffices; keys come out in first-occurrence order
/// and never repeat. The weight of one tuple is its multinomial
/// coefficient times its arrangement count.
pub fn num_ways(
    cache: &mut FactorialCache,
    total: u64,
    length: usize,
    key_len: usize,
) -> NumWays<'_> {
    NumWays {
        cache,
        msets: uniq_msets(total, length).peekable(),
        key_len,
    }
}

pub struct NumWays<'a> {
    cache: &'a mut FactorialCache,
    msets: Peekable<UniqMsets>,
    key_len: usize,
}

impl Iterator for NumWays<'_> {
    type Item = (Vec<u64>, BigUint);

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.msets.next()?;
        let key_len = self.key_len.min(first.len());
        let key = first[..key_len].to_vec();
        let mut ways = self.cache.mset_weight(&first);
        while let Some(mset) = self.msets.next_if(|seq| seq[..key_len] == key[..]) {
            ways += self.cache.mset_weight(&mset);
        }
        Some((key, ways))
    }
}
