//! Shared test utilities for lease contract tests.
//!
//! This crate provides:
//! - Factory functions for sample messages ([`LeaseFactory`])
//! - Hand-built wire fragments for malformed and forward-compatible input ([`wire`])
//! - `proptest` strategies for every message type ([`strategies`])
//! - Custom assertion helpers
//!
//! # Example
//!
//! ```rust,ignore
//! use lease_test_utils::{LeaseFactory, assert_round_trip};
//!
//! #[test]
//! fn test_example() {
//!     assert_round_trip(&LeaseFactory::lease());
//! }
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
// Test utilities use expect/unwrap for cleaner test code - panics are acceptable in tests
#![allow(clippy::expect_used)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::missing_panics_doc)]

pub mod assertions;
pub mod fixtures;
pub mod strategies;
pub mod wire;

pub use assertions::*;
pub use fixtures::*;

/// Initialize test logging (call once per test module).
pub fn init_test_logging() {
    use tracing_subscriber::{EnvFilter, fmt};

    let _ = fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("lease_proto=debug".parse().expect("valid directive")),
        )
        .with_test_writer()
        .try_init();
}
