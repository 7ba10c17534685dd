//! Domain layer - Pure computational logic
//!
//! This module contains the sieves and their building blocks, without I/O.

pub mod eratosthenes;
pub mod error;
pub mod marks;
pub mod sieve_type;
pub mod sundaram;
pub mod trial;
