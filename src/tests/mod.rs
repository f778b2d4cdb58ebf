//! Crate-level tests.
//!
//! - Integration tests (live servers over TCP)
//! - Fuzz tests (random request bodies)

pub mod integration;
pub mod fuzz;
