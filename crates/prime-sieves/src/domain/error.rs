//! Sieve errors

use thiserror::Error;

/// Errors raised before a sieve can start marking
///
/// Every arithmetic step of the sieves is overflow-checked, and an overflowing
/// value always lies beyond the limit, so the only way a sieve can fail is
/// that its marker storage for `[0, limit]` cannot be obtained.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SieveError {
    /// Marker storage for the limit does not fit the platform's address space
    #[error("limit {limit} is too large: marker storage does not fit in memory addressing")]
    LimitTooLarge { limit: i64 },
    /// The allocator refused the marker storage
    #[error("failed to allocate marker storage for limit {limit}")]
    Allocation { limit: i64 },
}
