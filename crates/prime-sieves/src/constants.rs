//! Sieve related constants

// =============================================================================
// Candidate scanning
// =============================================================================

/// The only even prime; every non-empty result starts with it
pub const FIRST_PRIME: i64 = 2;

/// First odd candidate scanned by the Sieve of Eratosthenes
pub const FIRST_ODD_CANDIDATE: i64 = 3;

/// Candidate increment (even numbers above 2 are never tested)
pub const CANDIDATE_STEP: i64 = 2;

// =============================================================================
// Sundaram transform
// =============================================================================

/// Smallest `i` (and `j`) in the exclusion form `i + j + 2ij`
pub const FIRST_SUNDARAM_INDEX: i64 = 1;

// =============================================================================
// Marker storage
// =============================================================================

/// Bits per word of the dense marker set
pub const MARKER_WORD_BITS: u64 = u64::BITS as u64;

// =============================================================================
// Verification
// =============================================================================

/// Number of limits between progress callbacks during range verification
pub const PROGRESS_INTERVAL: u64 = 1000;
