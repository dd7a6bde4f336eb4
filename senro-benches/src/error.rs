//! Benchmark setup error type.

use senro_core::{GraphError, WalkError};

/// Errors that may occur while preparing benchmark inputs.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Graph construction failed.
    #[error("graph construction failed: {0}")]
    Graph(#[from] GraphError),
    /// Engine configuration or stepping failed.
    #[error("walk engine failed: {0}")]
    Walk(#[from] WalkError),
    /// A zero value was passed where a non-zero integer was required.
    #[error("expected a non-zero value for {context}")]
    ZeroValue {
        /// Parameter that was unexpectedly zero.
        context: &'static str,
    },
    /// A size computation overflowed `usize`.
    #[error("{context} overflows usize")]
    Overflow {
        /// Computation that overflowed.
        context: &'static str,
    },
}
