//! Trial-division primality oracle
//!
//! Independent of both sieves; used as the reference when verifying them.

use crate::constants::{CANDIDATE_STEP, FIRST_ODD_CANDIDATE, FIRST_PRIME};

/// Check primality by trial division with odd divisors up to `sqrt(n)`
pub fn is_prime(n: i64) -> bool {
    if n < FIRST_PRIME {
        return false;
    }
    if n % 2 == 0 {
        return n == FIRST_PRIME;
    }

    let mut divisor = FIRST_ODD_CANDIDATE;
    // divisor * divisor overflowing means divisor is already past sqrt(n)
    while divisor.checked_mul(divisor).is_some_and(|square| square <= n) {
        if n % divisor == 0 {
            return false;
        }
        divisor += CANDIDATE_STEP;
    }

    true
}

/// List all primes `<= limit` by testing each integer independently
pub fn primes_by_trial_division(limit: i64) -> Vec<i64> {
    if limit < FIRST_PRIME {
        return Vec::new();
    }
    (FIRST_PRIME..=limit).filter(|&n| is_prime(n)).collect()
}
