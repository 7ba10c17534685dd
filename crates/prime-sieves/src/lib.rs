//! prime-sieves - Prime generation up to an inclusive limit
//!
//! This crate provides functionality to:
//! - Generate all primes up to a limit with the Sieve of Eratosthenes
//! - Generate all primes up to a limit with the Sieve of Sundaram
//! - Select either sieve at runtime through `SieveType`
//! - Cross-check both sieves against each other and against trial division

pub mod app;
pub mod constants;
pub mod domain;

// Re-export commonly used types
pub use constants::*;
pub use app::dispatch::primes_up_to;
pub use app::verify::{
    VerifyError, VerifyOptions, verify_limit, verify_range, verify_range_parallel,
};
pub use domain::eratosthenes::sieve_eratosthenes;
pub use domain::error::SieveError;
pub use domain::sieve_type::{ParseSieveTypeError, SieveType};
pub use domain::sundaram::sieve_sundaram;
