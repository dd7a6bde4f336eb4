//! Benchmark parameter types.

use std::fmt;

/// Parameters for a walk stepping benchmark run.
#[derive(Clone, Debug)]
pub struct WalkBenchParams {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Number of agents walking concurrently.
    pub agents: usize,
}

impl fmt::Display for WalkBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},agents={}", self.vertex_count, self.agents)
    }
}

/// Parameters for a graph construction benchmark run.
#[derive(Clone, Debug)]
pub struct GraphBenchParams {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Number of undirected edges supplied.
    pub edge_count: usize,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},e={}", self.vertex_count, self.edge_count)
    }
}
