pub mod combinatorics;
pub mod error;
pub mod probability;

pub use error::{Error, Result};

pub mod prelude {
    pub use crate::combinatorics::{
        aggregate::{NumWays, num_ways},
        enumerate::{UniqMsets, uniq_msets},
        factorial::FactorialCache,
        partition::{multiset_number, num_uniq_msets},
    };
    pub use crate::error::{Error, Result};
    pub use crate::probability::missing::{
        CumulativeProbabilities, MissStats, compute_all_probabilities, compute_probabilities,
        print_cumulative_prob, ways_by_largest_subpopulation,
    };
}
