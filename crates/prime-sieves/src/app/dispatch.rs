//! Sieve dispatch
//!
//! This module selects a sieve by `SieveType` and returns its result as is.

use crate::domain::eratosthenes::sieve_eratosthenes;
use crate::domain::error::SieveError;
use crate::domain::sieve_type::SieveType;
use crate::domain::sundaram::sieve_sundaram;

/// Generate all primes `<= limit` with the selected sieve
///
/// Returns an empty vector for any `limit < 2`. The result is strictly
/// increasing and identical for every `SieveType`.
///
/// # Errors
/// Propagates `SieveError` from the selected sieve when its marker set for
/// `[0, limit]` cannot be allocated.
pub fn primes_up_to(limit: i64, sieve_type: SieveType) -> Result<Vec<i64>, SieveError> {
    match sieve_type {
        SieveType::Eratosthenes => sieve_eratosthenes(limit),
        SieveType::Sundaram => sieve_sundaram(limit),
    }
}
