//! Sieve of Sundaram
//!
//! An odd number `2k + 1 > 1` is composite exactly when `k = i + j + 2ij` for
//! some `1 <= i <= j`. The sieve excludes every such `k` up to the limit and
//! maps the surviving indices to primes with `p = 2k + 1`.

use crate::constants::{FIRST_PRIME, FIRST_SUNDARAM_INDEX};
use crate::domain::error::SieveError;
use crate::domain::marks::MarkerSet;

/// Generate all primes `<= limit` with the Sieve of Sundaram
///
/// Returns an empty vector for any `limit < 2`.
///
/// # Errors
/// Fails only when the exclusion set for `[0, limit]` cannot be allocated
/// (see [`MarkerSet::with_bound`]).
pub fn sieve_sundaram(limit: i64) -> Result<Vec<i64>, SieveError> {
    if limit < FIRST_PRIME {
        return Ok(Vec::new());
    }

    let excluded = build_exclusion_set(limit)?;
    let mut primes = vec![FIRST_PRIME];

    for k in FIRST_SUNDARAM_INDEX..=limit {
        if excluded.is_marked(k) {
            continue;
        }

        // The transform is monotonic in k: the first odd value past the
        // limit ends the scan.
        match odd_from_index(k) {
            Some(prime) if prime <= limit => primes.push(prime),
            _ => break,
        }
    }

    Ok(primes)
}

/// Build the set of all `i + j + 2ij <= limit` with `1 <= i <= j`
///
/// For each `i`, `j` runs upward from `i` until the value exceeds `limit`.
/// The outer loop stops once even `j = i` exceeds `limit`.
pub fn build_exclusion_set(limit: i64) -> Result<MarkerSet, SieveError> {
    let mut excluded = MarkerSet::with_bound(limit)?;
    let mut i = FIRST_SUNDARAM_INDEX;

    while let Some(first) = exclusion_index(i, i).filter(|&value| value <= limit) {
        let mut j = i;
        let mut value = first;

        loop {
            excluded.mark(value);
            // value <= limit keeps j + 1 in range
            j += 1;
            value = match exclusion_index(i, j) {
                Some(next) if next <= limit => next,
                _ => break,
            };
        }

        i += 1;
    }

    Ok(excluded)
}

/// `i + j + 2ij`, or `None` on overflow (which is always past any limit)
#[inline]
fn exclusion_index(i: i64, j: i64) -> Option<i64> {
    i.checked_mul(j)?
        .checked_mul(2)?
        .checked_add(i)?
        .checked_add(j)
}

/// `2k + 1`, or `None` on overflow
#[inline]
fn odd_from_index(k: i64) -> Option<i64> {
    k.checked_mul(2)?.checked_add(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_below_two_is_empty() {
        for limit in [-100, -1, 0, 1] {
            assert_eq!(sieve_sundaram(limit), Ok(vec![]), "limit {}", limit);
        }
    }

    #[test]
    fn test_small_limits() {
        assert_eq!(sieve_sundaram(2), Ok(vec![2]));
        assert_eq!(sieve_sundaram(3), Ok(vec![2, 3]));
        assert_eq!(sieve_sundaram(4), Ok(vec![2, 3]));
        assert_eq!(sieve_sundaram(10), Ok(vec![2, 3, 5, 7]));
    }

    #[test]
    fn test_limit_thirty() {
        assert_eq!(
            sieve_sundaram(30),
            Ok(vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29])
        );
    }

    #[test]
    fn test_limit_is_odd_composite() {
        assert_eq!(sieve_sundaram(9), Ok(vec![2, 3, 5, 7]));
        assert_eq!(sieve_sundaram(15), Ok(vec![2, 3, 5, 7, 11, 13]));
        assert_eq!(sieve_sundaram(25), Ok(vec![2, 3, 5, 7, 11, 13, 17, 19, 23]));
    }

    #[test]
    fn test_exclusion_set_small() {
        // i = 1: 4, 7, 10, 13, ...; i = 2: 12, 17, ...; i = 3: 24, ...
        let excluded = build_exclusion_set(13).unwrap();
        let marked: Vec<i64> = (0..=13).filter(|&k| excluded.is_marked(k)).collect();
        assert_eq!(marked, vec![4, 7, 10, 12, 13]);
    }

    #[test]
    fn test_exclusion_set_below_first_value() {
        // Smallest exclusion value is 1 + 1 + 2 = 4
        let excluded = build_exclusion_set(3).unwrap();
        assert_eq!(excluded.marked_count(), 0);
    }

    #[test]
    fn test_exclusion_indices_map_to_odd_composites() {
        let limit = 500;
        let excluded = build_exclusion_set(limit).unwrap();
        for k in 1..=limit {
            let odd = 2 * k + 1;
            let composite = (3..odd)
                .step_by(2)
                .take_while(|d| d * d <= odd)
                .any(|d| odd % d == 0);
            assert_eq!(excluded.is_marked(k), composite, "k = {}, 2k + 1 = {}", k, odd);
        }
    }

    #[test]
    fn test_exclusion_index_overflow() {
        assert_eq!(exclusion_index(1, 1), Some(4));
        assert_eq!(exclusion_index(2, 3), Some(17));
        assert_eq!(exclusion_index(i64::MAX, 1), None);
        assert_eq!(exclusion_index(1 << 31, 1 << 31), None);
    }

    #[test]
    fn test_odd_from_index_overflow() {
        assert_eq!(odd_from_index(3), Some(7));
        assert_eq!(odd_from_index(i64::MAX / 2), Some(i64::MAX));
        assert_eq!(odd_from_index(i64::MAX / 2 + 1), None);
    }

    #[test]
    fn test_results_strictly_increasing() {
        let primes = sieve_sundaram(1000).unwrap();
        assert_eq!(primes.len(), 168);
        assert!(primes.windows(2).all(|w| w[0] < w[1]));
    }
}
