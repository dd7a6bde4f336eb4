//! Multi-agent walk orchestration.
//!
//! [`WalkEngine`] advances every agent by one edge per step over a shared
//! [`AdjacencyGraph`]. Agents are processed in configuration order and each
//! draws only from its own stream, so a fixed set of seeds and a fixed number
//! of steps always yields the same events.

use std::{num::NonZeroUsize, sync::Arc};

use tracing::{debug, info, instrument, trace};

use crate::{
    Result,
    agent::{AgentId, WalkAgent},
    builder::WalkEngineBuilder,
    error::GraphError,
    event::{ResetCause, WalkEvent},
    graph::AdjacencyGraph,
    sink::PathSink,
};

/// Owns the walk agents and the graph they share.
///
/// The engine holds no global state and does not know about frames: the host
/// calls [`Self::advance`] once per trigger and says whether the trigger is the
/// first step of its sequence.
///
/// # Examples
/// ```
/// use senro_core::{AdjacencyGraph, PathSet, WalkEngine};
///
/// let graph = AdjacencyGraph::from_edges(4, &[(0, 1), (1, 2), (2, 3)])?;
/// let mut engine = WalkEngine::build(graph, &[42, 46])?;
/// let mut paths = PathSet::default();
///
/// for frame in 1..=10 {
///     let events = engine.advance(frame == 1, &mut paths)?;
///     assert_eq!(events.len(), 2);
/// }
/// for agent in engine.agents() {
///     assert_eq!(paths.current_path(agent.id()), Some(agent.path()));
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct WalkEngine {
    graph: Arc<AdjacencyGraph>,
    agents: Vec<WalkAgent>,
    path_length_cap: NonZeroUsize,
    candidates: Vec<usize>,
}

impl WalkEngine {
    pub(crate) fn new(
        graph: Arc<AdjacencyGraph>,
        agents: &[(u64, Option<NonZeroUsize>)],
        path_length_cap: NonZeroUsize,
    ) -> Self {
        let agents = agents
            .iter()
            .map(|&(seed, cap)| WalkAgent::new(seed, cap, &graph))
            .collect();
        Self {
            graph,
            agents,
            path_length_cap,
            candidates: Vec::new(),
        }
    }

    /// Builds an engine with one agent per seed and the default path length
    /// cap of [`crate::DEFAULT_PATH_LENGTH_CAP`] points.
    ///
    /// Agents start in their fresh state without emitting events; hosts are
    /// expected to open their sequence with `is_first_step = true`.
    ///
    /// # Errors
    /// See [`WalkEngineBuilder::build`].
    pub fn build(graph: impl Into<Arc<AdjacencyGraph>>, seeds: &[u64]) -> Result<Self> {
        WalkEngineBuilder::new()
            .with_seeds(seeds.iter().copied())
            .build(graph)
    }

    /// Restarts every agent from its seed and returns one
    /// [`WalkEvent::StartPath`] per agent in configuration order.
    ///
    /// The caller is responsible for discarding previously rendered paths;
    /// [`Self::advance`] does so through [`PathSink::clear`].
    #[instrument(
        name = "engine.full_reset",
        skip(self),
        fields(agents = self.agents.len(), vertices = self.graph.vertex_count()),
    )]
    pub fn full_reset(&mut self) -> Vec<WalkEvent> {
        let events: Vec<WalkEvent> = self
            .agents
            .iter_mut()
            .map(|agent| {
                let vertex = agent.reseed(&self.graph);
                WalkEvent::StartPath {
                    agent: agent.id(),
                    vertex,
                    cause: ResetCause::FullReset,
                }
            })
            .collect();
        info!(agents = events.len(), "all agents restarted");
        events
    }

    /// Advances every agent by one edge, restarting agents that hit their
    /// path length cap or a dead end.
    ///
    /// Returns exactly one event per agent in configuration order.
    ///
    /// # Errors
    /// Returns [`crate::WalkError::Graph`] if the graph rejects a vertex id,
    /// which indicates corrupted agent state.
    #[instrument(
        name = "engine.step",
        level = "debug",
        err,
        skip(self),
        fields(agents = self.agents.len()),
    )]
    pub fn step(&mut self) -> Result<Vec<WalkEvent>> {
        let mut events = Vec::with_capacity(self.agents.len());
        for agent in &mut self.agents {
            let event = step_agent(
                agent,
                &self.graph,
                self.path_length_cap,
                &mut self.candidates,
            )?;
            events.push(event);
        }
        Ok(events)
    }

    /// Handles one host trigger: a full reset when `is_first_step` is set,
    /// otherwise a regular step. Events are forwarded to `sink` and returned.
    ///
    /// # Errors
    /// Propagates the errors of [`Self::step`].
    pub fn advance<S: PathSink + ?Sized>(
        &mut self,
        is_first_step: bool,
        sink: &mut S,
    ) -> Result<Vec<WalkEvent>> {
        let events = if is_first_step {
            sink.clear();
            self.full_reset()
        } else {
            self.step()?
        };
        for event in &events {
            event.apply_to(sink);
        }
        Ok(events)
    }

    /// Returns the agents in configuration order.
    #[must_use]
    pub fn agents(&self) -> &[WalkAgent] {
        &self.agents
    }

    /// Returns the agent identified by `id`, if configured.
    #[must_use]
    pub fn agent(&self, id: AgentId) -> Option<&WalkAgent> {
        self.agents.iter().find(|agent| agent.id() == id)
    }

    /// Returns the graph shared by every agent.
    #[must_use]
    pub const fn graph(&self) -> &Arc<AdjacencyGraph> {
        &self.graph
    }

    /// Returns the engine-wide path length cap.
    #[must_use]
    pub const fn path_length_cap(&self) -> NonZeroUsize {
        self.path_length_cap
    }

    /// Consumes the engine and hands the shared graph back to the caller.
    #[must_use]
    pub fn teardown(self) -> Arc<AdjacencyGraph> {
        debug!(agents = self.agents.len(), "engine torn down");
        self.graph
    }
}

fn step_agent(
    agent: &mut WalkAgent,
    graph: &AdjacencyGraph,
    engine_cap: NonZeroUsize,
    candidates: &mut Vec<usize>,
) -> core::result::Result<WalkEvent, GraphError> {
    let cap = agent.path_length_cap().unwrap_or(engine_cap);
    if agent.path_length() >= cap.get() {
        return Ok(restart_agent(agent, graph, ResetCause::LengthCap));
    }

    let current = agent.current_vertex();
    agent.collect_candidates(graph.neighbours_of(current)?, candidates);
    let Some(vertex) = agent.advance_to_random(candidates) else {
        return Ok(restart_agent(agent, graph, ResetCause::DeadEnd));
    };

    trace!(agent = %agent.id(), from = current, to = vertex, "agent moved");
    Ok(WalkEvent::AppendPoint {
        agent: agent.id(),
        vertex,
    })
}

fn restart_agent(agent: &mut WalkAgent, graph: &AdjacencyGraph, cause: ResetCause) -> WalkEvent {
    let stuck_at = agent.current_vertex();
    let path_length = agent.path_length();
    let vertex = agent.restart(graph);
    debug!(
        agent = %agent.id(),
        cause = %cause,
        stuck_at,
        path_length,
        vertex,
        "agent path restarted"
    );
    WalkEvent::StartPath {
        agent: agent.id(),
        vertex,
        cause,
    }
}
