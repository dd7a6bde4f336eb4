//! Error types for the senro core library.
//!
//! Defines the graph and walk error enums exposed by the public API, their
//! stable machine-readable codes, and a convenient result alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced while building or querying an [`crate::AdjacencyGraph`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// A vertex id outside `[0, vertex_count)` was supplied or requested.
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    OutOfRange {
        /// The offending vertex id.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// The topology contained no vertices, so no walk can start.
    #[error("graph contains no vertices")]
    EmptyGraph,
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// A vertex id outside the graph was supplied or requested.
        OutOfRange => OutOfRange { .. } => "GRAPH_OUT_OF_RANGE",
        /// The topology contained no vertices.
        EmptyGraph => EmptyGraph => "GRAPH_EMPTY",
    }
}

/// Error type produced when configuring or advancing a [`crate::WalkEngine`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum WalkError {
    /// Path length caps must be greater than zero.
    #[error("path_length_cap must be at least 1 (got {got})")]
    InvalidPathLengthCap {
        /// The invalid cap supplied by the caller.
        got: usize,
    },
    /// The engine was configured without any seeds.
    #[error("at least one seed must be configured")]
    NoAgents,
    /// Seeds double as agent ids, so every seed must be unique.
    #[error("seed {seed} is configured more than once")]
    DuplicateSeed {
        /// The repeated seed.
        seed: u64,
    },
    /// A graph query failed while advancing the walk.
    #[error("graph query failed: {error}")]
    Graph {
        #[source]
        /// Underlying graph error.
        error: GraphError,
    },
}

define_error_codes! {
    /// Stable codes describing [`WalkError`] variants.
    enum WalkErrorCode for WalkError {
        /// Path length caps must be greater than zero.
        InvalidPathLengthCap => InvalidPathLengthCap { .. } => "WALK_INVALID_PATH_LENGTH_CAP",
        /// The engine was configured without any seeds.
        NoAgents => NoAgents => "WALK_NO_AGENTS",
        /// A seed was configured more than once.
        DuplicateSeed => DuplicateSeed { .. } => "WALK_DUPLICATE_SEED",
        /// A graph query failed while advancing the walk.
        GraphFailure => Graph { .. } => "WALK_GRAPH_FAILURE",
    }
}

impl WalkError {
    /// Retrieve the inner [`GraphErrorCode`] when the error originated in the
    /// [`crate::AdjacencyGraph`].
    #[must_use]
    pub const fn graph_code(&self) -> Option<GraphErrorCode> {
        match self {
            Self::Graph { error } => Some(error.code()),
            _ => None,
        }
    }
}

impl From<GraphError> for WalkError {
    fn from(error: GraphError) -> Self {
        Self::Graph { error }
    }
}

/// Convenient alias for results returned by the walk API.
pub type Result<T> = core::result::Result<T, WalkError>;
