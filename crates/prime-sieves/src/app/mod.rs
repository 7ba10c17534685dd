//! Application layer - Use case implementations
//!
//! This module composes the domain sieves into the public entry points.

pub mod dispatch;
pub mod verify;
