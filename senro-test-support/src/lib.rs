//! Shared test utilities used across senro crates.

pub mod proptest_profile;
pub mod tracing;
