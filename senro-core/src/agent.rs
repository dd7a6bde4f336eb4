//! Walk agents: one independent self-avoiding traversal each.
//!
//! Every agent owns a private [`SmallRng`] seeded from its own seed, so the
//! draws of one agent never influence another. The seed doubles as the
//! agent's [`AgentId`].

use std::collections::HashSet;
use std::fmt;
use std::num::NonZeroUsize;

use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};

use crate::graph::AdjacencyGraph;

/// Identifier of a walk agent; wraps the seed the agent was created with.
///
/// # Examples
/// ```
/// use senro_core::AgentId;
///
/// let id = AgentId::new(42);
/// assert_eq!(id.get(), 42);
/// assert_eq!(id.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AgentId(u64);

impl AgentId {
    /// Wraps a seed as an agent identifier.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Returns the seed backing this identifier.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle phase of an agent between two resets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentPhase {
    /// The agent was just reset and sits on its start vertex.
    Fresh,
    /// The agent has moved at least once since its last reset.
    Walking,
}

/// One self-avoiding traversal over an [`AdjacencyGraph`].
///
/// Agents are created and advanced by [`crate::WalkEngine`]; callers observe
/// them through the read-only accessors below.
#[derive(Debug, Clone)]
pub struct WalkAgent {
    id: AgentId,
    rng: SmallRng,
    path_length_cap: Option<NonZeroUsize>,
    current: usize,
    visited: HashSet<usize>,
    path: Vec<usize>,
}

impl WalkAgent {
    /// Seeds the agent's stream and places it on a random start vertex.
    pub(crate) fn new(
        seed: u64,
        path_length_cap: Option<NonZeroUsize>,
        graph: &AdjacencyGraph,
    ) -> Self {
        let mut agent = Self {
            id: AgentId::new(seed),
            rng: SmallRng::seed_from_u64(seed),
            path_length_cap,
            current: 0,
            visited: HashSet::new(),
            path: Vec::new(),
        };
        agent.restart(graph);
        agent
    }

    /// Restores the stream to its seeded state and restarts the walk.
    ///
    /// Afterwards the agent is indistinguishable from a freshly built one.
    pub(crate) fn reseed(&mut self, graph: &AdjacencyGraph) -> usize {
        self.rng = SmallRng::seed_from_u64(self.id.get());
        self.restart(graph)
    }

    /// Draws a uniform start vertex and clears the walk history.
    ///
    /// Consumes exactly one value from the agent's stream and returns the new
    /// start vertex.
    pub(crate) fn restart(&mut self, graph: &AdjacencyGraph) -> usize {
        let start = self.rng.gen_range(0..graph.vertex_count());
        self.current = start;
        self.visited.clear();
        self.visited.insert(start);
        self.path.clear();
        self.path.push(start);
        start
    }

    /// Copies the neighbours of the current vertex that were not visited since
    /// the last reset into `candidates`, keeping neighbour-list order.
    pub(crate) fn collect_candidates(&self, neighbours: &[usize], candidates: &mut Vec<usize>) {
        candidates.clear();
        candidates.extend(
            neighbours
                .iter()
                .copied()
                .filter(|vertex| !self.visited.contains(vertex)),
        );
    }

    /// Picks one of `candidates` uniformly and moves onto it.
    ///
    /// Returns `None` without touching the stream when `candidates` is empty.
    pub(crate) fn advance_to_random(&mut self, candidates: &[usize]) -> Option<usize> {
        let next = *candidates.choose(&mut self.rng)?;
        self.current = next;
        self.visited.insert(next);
        self.path.push(next);
        Some(next)
    }

    /// Returns the agent identifier.
    #[must_use]
    pub const fn id(&self) -> AgentId {
        self.id
    }

    /// Returns the seed the agent's stream was created from.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.id.get()
    }

    /// Returns the vertex the agent currently occupies.
    #[must_use]
    pub const fn current_vertex(&self) -> usize {
        self.current
    }

    /// Returns the vertices visited since the last reset.
    #[must_use]
    pub const fn visited(&self) -> &HashSet<usize> {
        &self.visited
    }

    /// Returns whether `vertex` was visited since the last reset.
    #[must_use]
    pub fn has_visited(&self, vertex: usize) -> bool {
        self.visited.contains(&vertex)
    }

    /// Returns the vertex ids emitted since the last reset, oldest first.
    #[must_use]
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// Returns the number of points emitted since the last reset.
    #[must_use]
    pub fn path_length(&self) -> usize {
        self.path.len()
    }

    /// Returns the per-agent cap overriding the engine cap, if any.
    #[must_use]
    pub const fn path_length_cap(&self) -> Option<NonZeroUsize> {
        self.path_length_cap
    }

    /// Returns the lifecycle phase derived from the current path.
    #[must_use]
    pub fn phase(&self) -> AgentPhase {
        if self.path.len() > 1 {
            AgentPhase::Walking
        } else {
            AgentPhase::Fresh
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycle(n: usize) -> AdjacencyGraph {
        let edges: Vec<(usize, usize)> = (0..n).map(|v| (v, (v + 1) % n)).collect();
        AdjacencyGraph::from_edges(n, &edges).expect("cycle edges are in range")
    }

    #[test]
    fn new_agent_is_fresh_on_a_valid_vertex() {
        let graph = cycle(8);
        let agent = WalkAgent::new(7, None, &graph);
        assert_eq!(agent.id(), AgentId::new(7));
        assert!(agent.current_vertex() < 8);
        assert_eq!(agent.path(), &[agent.current_vertex()]);
        assert!(agent.has_visited(agent.current_vertex()));
        assert_eq!(agent.phase(), AgentPhase::Fresh);
    }

    #[test]
    fn same_seed_yields_same_start() {
        let graph = cycle(64);
        let first = WalkAgent::new(1234, None, &graph);
        let second = WalkAgent::new(1234, None, &graph);
        assert_eq!(first.current_vertex(), second.current_vertex());
    }

    #[test]
    fn candidates_exclude_visited_and_keep_order() {
        let graph = AdjacencyGraph::from_edges(4, &[(0, 1), (0, 2), (0, 3)])
            .expect("edges are in range");
        let mut agent = WalkAgent::new(3, None, &graph);
        agent.current = 0;
        agent.visited = HashSet::from([0, 2]);
        agent.path = vec![2, 0];

        let mut candidates = Vec::new();
        agent.collect_candidates(
            graph.neighbours_of(0).expect("vertex 0 exists"),
            &mut candidates,
        );
        assert_eq!(candidates, vec![1, 3]);
    }

    #[test]
    fn advance_without_candidates_leaves_state_untouched() {
        let graph = cycle(4);
        let mut agent = WalkAgent::new(9, None, &graph);
        let before = agent.path().to_vec();
        assert_eq!(agent.advance_to_random(&[]), None);
        assert_eq!(agent.path(), before.as_slice());
    }

    #[test]
    fn advance_moves_and_records_the_vertex() {
        let graph = cycle(4);
        let mut agent = WalkAgent::new(9, None, &graph);
        let next = agent.advance_to_random(&[5]).expect("one candidate is available");
        assert_eq!(next, 5);
        assert_eq!(agent.current_vertex(), 5);
        assert!(agent.has_visited(5));
        assert_eq!(agent.path_length(), 2);
        assert_eq!(agent.phase(), AgentPhase::Walking);
    }

    #[test]
    fn reseed_reproduces_the_initial_start() {
        let graph = cycle(128);
        let mut agent = WalkAgent::new(99, None, &graph);
        let initial = agent.current_vertex();
        for _ in 0..5 {
            agent.restart(&graph);
        }
        assert_eq!(agent.reseed(&graph), initial);
        assert_eq!(agent.path(), &[initial]);
    }
}
