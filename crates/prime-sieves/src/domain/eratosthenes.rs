//! Sieve of Eratosthenes
//!
//! Scans odd candidates from 3 and crosses out the multiples of every prime
//! it finds, starting at the prime's square. Every smaller multiple has a
//! smaller prime factor and is already crossed out by then.

use crate::constants::{CANDIDATE_STEP, FIRST_ODD_CANDIDATE, FIRST_PRIME};
use crate::domain::error::SieveError;
use crate::domain::marks::MarkerSet;

/// Generate all primes `<= limit` with the Sieve of Eratosthenes
///
/// Returns an empty vector for any `limit < 2`.
///
/// # Errors
/// Fails only when the composite marker set for `[0, limit]` cannot be
/// allocated (see [`MarkerSet::with_bound`]).
pub fn sieve_eratosthenes(limit: i64) -> Result<Vec<i64>, SieveError> {
    if limit < FIRST_PRIME {
        return Ok(Vec::new());
    }

    let mut composites = MarkerSet::with_bound(limit)?;
    let mut primes = vec![FIRST_PRIME];
    let mut candidate = FIRST_ODD_CANDIDATE;

    while candidate <= limit {
        if !composites.is_marked(candidate) {
            primes.push(candidate);
            mark_multiples(&mut composites, candidate, limit);
        }

        // Even numbers above 2 are never prime
        candidate = match candidate.checked_add(CANDIDATE_STEP) {
            Some(next) => next,
            None => break,
        };
    }

    Ok(primes)
}

/// Cross out multiples of `prime` from `prime * prime` upward
///
/// The body runs before the `<= limit` test, so the square is always visited.
/// The test is inclusive: with `< limit` an odd composite limit that is not
/// reached by a later square would stay unmarked and be reported as prime.
/// An overflowing product or sum is past `limit` and ends the loop.
fn mark_multiples(composites: &mut MarkerSet, prime: i64, limit: i64) {
    let Some(mut composite) = prime.checked_mul(prime) else {
        return;
    };

    loop {
        composites.mark(composite);
        composite = match composite.checked_add(prime) {
            Some(next) if next <= limit => next,
            _ => break,
        };
    }
}
