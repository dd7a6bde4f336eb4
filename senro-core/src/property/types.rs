//! Fixture types for walk property tests.

use test_strategy::Arbitrary;

use crate::AdjacencyGraph;

/// Shape of a generated graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum GraphShape {
    /// A simple path; every walk eventually dead-ends at an end vertex.
    #[weight(2)]
    Path,
    /// A single cycle; walks dead-end after circling once.
    #[weight(2)]
    Cycle,
    /// A rectangular grid resembling a quad mesh.
    #[weight(3)]
    Grid,
    /// Random sparse edges, including parallel edges and self-loops.
    #[weight(3)]
    Sparse,
    /// Several disjoint cliques plus isolated vertices.
    #[weight(2)]
    Disconnected,
}

/// Generated input for one property case.
#[derive(Clone, Debug)]
pub(super) struct WalkFixture {
    /// Shape the graph was generated from.
    pub shape: GraphShape,
    /// Graph shared by the agents.
    pub graph: AdjacencyGraph,
    /// Unique seeds, one agent each.
    pub seeds: Vec<u64>,
    /// Engine-wide path length cap.
    pub cap: usize,
    /// Number of steps to run after the initial full reset.
    pub steps: usize,
}
