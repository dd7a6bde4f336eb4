//! Receivers for path events and the in-memory [`PathSet`] sink.

use std::collections::BTreeMap;

use crate::agent::AgentId;

/// Receiver of the path changes produced by [`crate::WalkEngine`].
///
/// The engine only ever clears or appends to a sink; it never reads back.
pub trait PathSink {
    /// Drops every rendered path for every agent.
    fn clear(&mut self);

    /// Begins a new path for `agent` at `vertex`, leaving earlier paths of
    /// the agent and the paths of other agents untouched.
    fn start_path(&mut self, agent: AgentId, vertex: usize);

    /// Appends `vertex` to the current path of `agent`.
    fn append_point(&mut self, agent: AgentId, vertex: usize);
}

/// Polylines accumulated per agent since the last clear.
///
/// Each agent owns a list of paths; a [`PathSink::start_path`] call opens a
/// new one and [`PathSink::append_point`] extends the newest. Points appended
/// before any path was started open an implicit path.
///
/// # Examples
/// ```
/// use senro_core::{AgentId, PathSet, PathSink};
///
/// let agent = AgentId::new(42);
/// let mut paths = PathSet::default();
/// paths.start_path(agent, 0);
/// paths.append_point(agent, 1);
/// paths.start_path(agent, 5);
/// assert_eq!(paths.paths(agent).len(), 2);
/// assert_eq!(paths.current_path(agent), Some(&[5][..]));
/// assert_eq!(paths.point_count(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathSet {
    paths: BTreeMap<AgentId, Vec<Vec<usize>>>,
}

impl PathSet {
    /// Returns every path recorded for `agent`, oldest first.
    #[must_use]
    pub fn paths(&self, agent: AgentId) -> &[Vec<usize>] {
        self.paths.get(&agent).map_or(&[][..], Vec::as_slice)
    }

    /// Returns the path `agent` is currently extending, if any.
    #[must_use]
    pub fn current_path(&self, agent: AgentId) -> Option<&[usize]> {
        self.paths(agent).last().map(Vec::as_slice)
    }

    /// Iterates agents in ascending id order with their paths.
    pub fn iter(&self) -> impl Iterator<Item = (AgentId, &[Vec<usize>])> {
        self.paths.iter().map(|(agent, paths)| (*agent, paths.as_slice()))
    }

    /// Returns the total number of points across all agents and paths.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.paths.values().flatten().map(Vec::len).sum()
    }

    /// Returns whether no points are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.values().flatten().all(Vec::is_empty)
    }
}

impl PathSink for PathSet {
    fn clear(&mut self) {
        self.paths.clear();
    }

    fn start_path(&mut self, agent: AgentId, vertex: usize) {
        self.paths.entry(agent).or_default().push(vec![vertex]);
    }

    fn append_point(&mut self, agent: AgentId, vertex: usize) {
        let paths = self.paths.entry(agent).or_default();
        match paths.last_mut() {
            Some(current) => current.push(vertex),
            None => paths.push(vec![vertex]),
        }
    }
}
