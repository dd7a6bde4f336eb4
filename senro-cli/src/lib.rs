//! Support library for the senro CLI binary.
//!
//! Exposes the command pipeline and logging setup so tests can drive a walk
//! without spawning a subprocess.

pub mod cli;
pub mod logging;
