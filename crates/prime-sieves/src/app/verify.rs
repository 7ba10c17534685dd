//! Cross-algorithm verification workflow
//!
//! This module runs both sieves over one limit or a range of limits and
//! checks that their results are strictly increasing, agree with each other,
//! and (optionally) match the trial-division oracle.

use crate::app::dispatch::primes_up_to;
use crate::constants::PROGRESS_INTERVAL;
use crate::domain::error::SieveError;
use crate::domain::sieve_type::SieveType;
use crate::domain::trial::primes_by_trial_division;
use rayon::prelude::*;
use std::ops::RangeInclusive;
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;

/// Verification failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifyError {
    /// A sieve could not run
    #[error(transparent)]
    Sieve(#[from] SieveError),
    /// A result is not strictly increasing
    #[error("{sieve_type} result for limit {limit} is not strictly increasing at position {position}")]
    NotIncreasing {
        limit: i64,
        sieve_type: SieveType,
        position: usize,
    },
    /// The two sieves disagree
    #[error(
        "sieves disagree for limit {limit} at position {position}: eratosthenes {eratosthenes:?}, sundaram {sundaram:?}"
    )]
    Disagreement {
        limit: i64,
        position: usize,
        eratosthenes: Option<i64>,
        sundaram: Option<i64>,
    },
    /// The agreed result differs from trial division
    #[error(
        "result for limit {limit} differs from trial division at position {position}: expected {expected:?}, found {found:?}"
    )]
    ReferenceMismatch {
        limit: i64,
        position: usize,
        expected: Option<i64>,
        found: Option<i64>,
    },
}

/// Options for range verification
#[derive(Clone)]
pub struct VerifyOptions<F = fn(u64, u64)> {
    /// Also compare against the trial-division oracle (default: false)
    pub reference_check: bool,
    /// Progress callback (done, total)
    pub on_progress: Option<F>,
}

impl Default for VerifyOptions<fn(u64, u64)> {
    fn default() -> Self {
        Self {
            reference_check: false,
            on_progress: None,
        }
    }
}

impl VerifyOptions<fn(u64, u64)> {
    /// Compare the two sieves with each other only
    pub fn agreement_only() -> Self {
        Self::default()
    }

    /// Compare the two sieves with each other and with trial division
    pub fn full() -> Self {
        Self::default().with_reference_check(true)
    }
}

impl<F> VerifyOptions<F> {
    /// Enable or disable the trial-division check
    pub fn with_reference_check(mut self, reference_check: bool) -> Self {
        self.reference_check = reference_check;
        self
    }

    /// Set the progress callback
    pub fn with_progress<G>(self, callback: G) -> VerifyOptions<G> {
        VerifyOptions {
            reference_check: self.reference_check,
            on_progress: Some(callback),
        }
    }
}

/// Verify both sieves for a single limit
///
/// Returns the agreed prime sequence on success.
pub fn verify_limit(limit: i64, reference_check: bool) -> Result<Vec<i64>, VerifyError> {
    let eratosthenes = increasing_primes(limit, SieveType::Eratosthenes)?;
    let sundaram = increasing_primes(limit, SieveType::Sundaram)?;

    if let Some(position) = first_difference(&eratosthenes, &sundaram) {
        return Err(VerifyError::Disagreement {
            limit,
            position,
            eratosthenes: eratosthenes.get(position).copied(),
            sundaram: sundaram.get(position).copied(),
        });
    }

    if reference_check {
        let expected = primes_by_trial_division(limit);
        if let Some(position) = first_difference(&expected, &eratosthenes) {
            return Err(VerifyError::ReferenceMismatch {
                limit,
                position,
                expected: expected.get(position).copied(),
                found: eratosthenes.get(position).copied(),
            });
        }
    }

    Ok(eratosthenes)
}

/// Verify every limit in the range, in order
///
/// Stops at the first failing limit. Returns the number of limits checked.
pub fn verify_range<F>(
    range: RangeInclusive<i64>,
    options: VerifyOptions<F>,
) -> Result<u64, VerifyError>
where
    F: FnMut(u64, u64), // (done, total)
{
    let VerifyOptions {
        reference_check,
        mut on_progress,
    } = options;

    let total = range_len(&range);
    let mut done = 0u64;

    for limit in range {
        verify_limit(limit, reference_check)?;
        done += 1;

        if done % PROGRESS_INTERVAL == 0 {
            if let Some(ref mut callback) = on_progress {
                callback(done, total);
            }
        }
    }

    if let Some(ref mut callback) = on_progress {
        callback(total, total);
    }
    Ok(total)
}

/// Verify every limit in the range using rayon
///
/// Each sieve call stays single-threaded; limits are spread across the
/// thread pool. On failure the error for the smallest failing limit is
/// returned, as `verify_range` would.
pub fn verify_range_parallel<F>(
    range: RangeInclusive<i64>,
    options: VerifyOptions<F>,
) -> Result<u64, VerifyError>
where
    F: Fn(u64, u64) + Sync,
{
    let VerifyOptions {
        reference_check,
        on_progress,
    } = options;

    let total = range_len(&range);
    let progress = AtomicU64::new(0);

    let failure = range.into_par_iter().find_map_first(|limit| {
        let result = verify_limit(limit, reference_check).err();

        if let Some(ref callback) = on_progress {
            let done = progress.fetch_add(1, Ordering::Relaxed) + 1;
            if done % PROGRESS_INTERVAL == 0 {
                callback(done, total);
            }
        }

        result
    });

    if let Some(err) = failure {
        return Err(err);
    }

    if let Some(ref callback) = on_progress {
        callback(total, total);
    }
    Ok(total)
}

/// Run one sieve and check its result is strictly increasing
fn increasing_primes(limit: i64, sieve_type: SieveType) -> Result<Vec<i64>, VerifyError> {
    let primes = primes_up_to(limit, sieve_type)?;

    if let Some(index) = primes.windows(2).position(|w| w[0] >= w[1]) {
        return Err(VerifyError::NotIncreasing {
            limit,
            sieve_type,
            position: index + 1,
        });
    }

    Ok(primes)
}

/// First position where two sequences differ (including length)
fn first_difference(a: &[i64], b: &[i64]) -> Option<usize> {
    a.iter()
        .zip(b)
        .position(|(x, y)| x != y)
        .or_else(|| (a.len() != b.len()).then(|| a.len().min(b.len())))
}

/// Number of limits in an inclusive range
fn range_len(range: &RangeInclusive<i64>) -> u64 {
    if range.is_empty() {
        return 0;
    }
    range.end().abs_diff(*range.start()).saturating_add(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_verify_limit_returns_agreed_primes() {
        assert_eq!(
            verify_limit(30, true),
            Ok(vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29])
        );
    }

    #[test]
    fn test_verify_limit_below_two() {
        assert_eq!(verify_limit(-3, true), Ok(vec![]));
        assert_eq!(verify_limit(1, false), Ok(vec![]));
    }

    #[test]
    fn test_verify_range_small() {
        let checked = verify_range(-10..=300, VerifyOptions::full()).unwrap();
        assert_eq!(checked, 311);
    }

    #[test]
    fn test_verify_range_empty() {
        #[allow(clippy::reversed_empty_ranges)]
        let checked = verify_range(10..=5, VerifyOptions::default()).unwrap();
        assert_eq!(checked, 0);
    }

    #[test]
    fn test_verify_range_progress() {
        let mut calls = Vec::new();
        let options = VerifyOptions::agreement_only()
            .with_progress(|done: u64, total: u64| calls.push((done, total)));

        verify_range(0..=2499, options).unwrap();

        assert_eq!(calls, vec![(1000, 2500), (2000, 2500), (2500, 2500)]);
    }

    #[test]
    fn test_verify_range_parallel_matches_sequential() {
        let sequential = verify_range(0..=2000, VerifyOptions::full());
        let parallel = verify_range_parallel(0..=2000, VerifyOptions::full());
        assert_eq!(sequential, parallel);
        assert_eq!(parallel, Ok(2001));
    }

    #[test]
    fn test_verify_range_parallel_progress_final_call() {
        let calls = Mutex::new(Vec::new());
        let options = VerifyOptions::default().with_progress(|done: u64, total: u64| {
            calls.lock().unwrap().push((done, total));
        });

        verify_range_parallel(0..=1500, options).unwrap();

        let calls = calls.into_inner().unwrap();
        assert_eq!(calls.last(), Some(&(1501, 1501)));
        assert!(calls.contains(&(1000, 1501)));
    }

    #[test]
    fn test_first_difference() {
        assert_eq!(first_difference(&[2, 3, 5], &[2, 3, 5]), None);
        assert_eq!(first_difference(&[2, 3, 5], &[2, 3, 7]), Some(2));
        assert_eq!(first_difference(&[2, 3], &[2, 3, 5]), Some(2));
        assert_eq!(first_difference(&[], &[2]), Some(0));
    }

    #[test]
    fn test_range_len() {
        assert_eq!(range_len(&(0..=0)), 1);
        assert_eq!(range_len(&(-5..=5)), 11);
        assert_eq!(range_len(&(i64::MIN..=i64::MAX)), u64::MAX);
    }

    #[test]
    fn test_error_display() {
        let err = VerifyError::NotIncreasing {
            limit: 10,
            sieve_type: SieveType::Sundaram,
            position: 3,
        };
        assert_eq!(
            err.to_string(),
            "sundaram result for limit 10 is not strictly increasing at position 3"
        );
    }
}
