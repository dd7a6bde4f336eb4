//! Builder utilities for configuring [`WalkEngine`] instances.
//!
//! Collects seeds and path length caps and validates them before any agent is
//! created, so a misconfigured engine is rejected at build time rather than on
//! its first step.

use std::{collections::HashSet, num::NonZeroUsize, sync::Arc};

use crate::{Result, engine::WalkEngine, error::WalkError, graph::AdjacencyGraph};

/// Path length cap applied when none is configured.
pub const DEFAULT_PATH_LENGTH_CAP: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct AgentConfig {
    seed: u64,
    path_length_cap: Option<usize>,
}

/// Configures and constructs [`WalkEngine`] instances.
///
/// # Examples
/// ```
/// use senro_core::{AdjacencyGraph, WalkEngineBuilder};
///
/// let graph = AdjacencyGraph::from_edges(3, &[(0, 1), (1, 2)])?;
/// let engine = WalkEngineBuilder::new()
///     .with_seeds([42, 46])
///     .with_path_length_cap(100)
///     .build(graph)?;
/// assert_eq!(engine.agents().len(), 2);
/// assert_eq!(engine.path_length_cap().get(), 100);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct WalkEngineBuilder {
    agents: Vec<AgentConfig>,
    path_length_cap: usize,
}

impl Default for WalkEngineBuilder {
    fn default() -> Self {
        Self {
            agents: Vec::new(),
            path_length_cap: DEFAULT_PATH_LENGTH_CAP,
        }
    }
}

impl WalkEngineBuilder {
    /// Creates a builder with no seeds and the default path length cap.
    ///
    /// # Examples
    /// ```
    /// use senro_core::{DEFAULT_PATH_LENGTH_CAP, WalkEngineBuilder};
    ///
    /// let builder = WalkEngineBuilder::new();
    /// assert!(builder.seeds().is_empty());
    /// assert_eq!(builder.path_length_cap(), DEFAULT_PATH_LENGTH_CAP);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one agent driven by `seed`.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.agents.push(AgentConfig {
            seed,
            path_length_cap: None,
        });
        self
    }

    /// Appends one agent per seed, preserving iteration order.
    ///
    /// # Examples
    /// ```
    /// use senro_core::WalkEngineBuilder;
    ///
    /// let builder = WalkEngineBuilder::new().with_seed(7).with_seeds([42, 46]);
    /// assert_eq!(builder.seeds(), vec![7, 42, 46]);
    /// ```
    #[must_use]
    pub fn with_seeds(self, seeds: impl IntoIterator<Item = u64>) -> Self {
        seeds.into_iter().fold(self, Self::with_seed)
    }

    /// Appends one agent driven by `seed` whose paths are capped at `cap`
    /// points instead of the engine-wide cap.
    #[must_use]
    pub fn with_capped_seed(mut self, seed: u64, cap: usize) -> Self {
        self.agents.push(AgentConfig {
            seed,
            path_length_cap: Some(cap),
        });
        self
    }

    /// Overrides the engine-wide path length cap.
    #[must_use]
    pub fn with_path_length_cap(mut self, cap: usize) -> Self {
        self.path_length_cap = cap;
        self
    }

    /// Returns the configured seeds in agent order.
    #[must_use]
    pub fn seeds(&self) -> Vec<u64> {
        self.agents.iter().map(|agent| agent.seed).collect()
    }

    /// Returns the configured engine-wide path length cap.
    #[must_use]
    pub const fn path_length_cap(&self) -> usize {
        self.path_length_cap
    }

    /// Validates the configuration and constructs a [`WalkEngine`] over
    /// `graph`, placing every agent on its seeded start vertex.
    ///
    /// # Errors
    /// Returns [`WalkError::InvalidPathLengthCap`] when a cap is zero,
    /// [`WalkError::NoAgents`] when no seed was configured and
    /// [`WalkError::DuplicateSeed`] when a seed repeats.
    ///
    /// # Examples
    /// ```
    /// use senro_core::{AdjacencyGraph, WalkEngineBuilder, WalkError};
    ///
    /// let graph = AdjacencyGraph::from_edges(2, &[(0, 1)])?;
    /// let err = WalkEngineBuilder::new().with_seeds([1, 1]).build(graph).unwrap_err();
    /// assert_eq!(err, WalkError::DuplicateSeed { seed: 1 });
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn build(self, graph: impl Into<Arc<AdjacencyGraph>>) -> Result<WalkEngine> {
        let path_length_cap = validate_cap(self.path_length_cap)?;
        if self.agents.is_empty() {
            return Err(WalkError::NoAgents);
        }

        let mut seen = HashSet::with_capacity(self.agents.len());
        let mut agents = Vec::with_capacity(self.agents.len());
        for agent in self.agents {
            if !seen.insert(agent.seed) {
                return Err(WalkError::DuplicateSeed { seed: agent.seed });
            }
            let cap = agent.path_length_cap.map(validate_cap).transpose()?;
            agents.push((agent.seed, cap));
        }

        Ok(WalkEngine::new(graph.into(), &agents, path_length_cap))
    }
}

fn validate_cap(cap: usize) -> Result<NonZeroUsize> {
    NonZeroUsize::new(cap).ok_or(WalkError::InvalidPathLengthCap { got: cap })
}
