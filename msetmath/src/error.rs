use thiserror::Error;

/// Errors the combinatorics engine can raise.
///
/// Every variant is a contract violation detected before any cache
/// mutation, so callers never observe a partially updated factorial table.
/// None of these conditions is transient; failures propagate unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A multinomial coefficient or arrangement count was requested over an
    /// empty sequence of parts.
    #[error("at least one part is required")]
    EmptyParts,
    /// A multiset number was requested for zero slots.
    #[error("length must be at least 1")]
    ZeroLength,
}

pub type Result<T> = std::result::Result<T, Error>;
