//! Senro core library.
//!
//! Animates self-avoiding random walks over a fixed, undirected graph. A
//! [`WalkEngine`] owns one [`WalkAgent`] per seed; every step moves each agent
//! along one edge to a neighbour it has not visited since its last reset, and
//! restarts agents that reach a dead end or their path length cap. The engine
//! emits [`WalkEvent`]s naming vertex ids; turning them into geometry is the
//! job of whichever [`PathSink`] consumes them.
//!
//! # Examples
//! ```
//! use senro_core::{AdjacencyGraph, PathSet, WalkEngineBuilder};
//!
//! let graph = AdjacencyGraph::from_edges(5, &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)])?;
//! let mut engine = WalkEngineBuilder::new()
//!     .with_seeds([42, 46])
//!     .with_path_length_cap(500)
//!     .build(graph)?;
//!
//! let mut paths = PathSet::default();
//! for frame in 1..=30 {
//!     engine.advance(frame == 1, &mut paths)?;
//! }
//! assert!(paths.point_count() >= 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

mod agent;
mod builder;
mod engine;
mod error;
mod event;
mod graph;
mod sink;
mod topology;

#[cfg(test)]
mod property;

#[cfg(test)]
mod test_utils;

pub use crate::{
    agent::{AgentId, AgentPhase, WalkAgent},
    builder::{DEFAULT_PATH_LENGTH_CAP, WalkEngineBuilder},
    engine::WalkEngine,
    error::{GraphError, GraphErrorCode, Result, WalkError, WalkErrorCode},
    event::{ResetCause, WalkEvent},
    graph::AdjacencyGraph,
    sink::{PathSet, PathSink},
    topology::TopologySource,
};
