//! Property-based tests for the walk engine.
//!
//! Generates graphs of several shapes from seeded [`rand::rngs::SmallRng`]
//! streams, drives engines over them and checks the walk invariants after
//! every step: visited-set consistency, self-avoidance, cap enforcement,
//! dead-end handling, determinism and agent independence.

mod invariants;
mod strategies;
mod types;
