use std::io;

use thiserror::Error;

/// Errors raised while loading a [`crate::MeshSource`].
#[derive(Debug, Error)]
pub enum MeshSourceError {
    /// Reading the input failed.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    /// A coordinate or index token could not be parsed.
    #[error("line {line}: `{token}` is not a valid number")]
    InvalidNumber {
        /// 1-based line number.
        line: usize,
        /// Offending token.
        token: String,
    },
    /// A `v` record had fewer than three coordinates.
    #[error("line {line}: vertex records need three coordinates")]
    MissingCoordinate {
        /// 1-based line number.
        line: usize,
    },
    /// An element referenced a vertex that is not defined (yet).
    #[error("line {line}: vertex index {index} does not refer to a defined vertex")]
    InvalidIndex {
        /// 1-based line number, or 0 for edges supplied programmatically.
        line: usize,
        /// Index as written in the source.
        index: i64,
    },
    /// The input defined no vertices.
    #[error("mesh defines no vertices")]
    EmptyMesh,
}
