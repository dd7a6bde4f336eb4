//! Path events emitted by [`crate::WalkEngine`].

use std::fmt;

use crate::{agent::AgentId, sink::PathSink};

/// Reason an agent started a new path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResetCause {
    /// Every agent restarted because the host signalled the first step.
    FullReset,
    /// The agent's path reached its length cap.
    LengthCap,
    /// Every neighbour of the current vertex was already visited, or it had
    /// none.
    DeadEnd,
}

impl ResetCause {
    /// Returns a stable lowercase label suitable for structured logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FullReset => "full_reset",
            Self::LengthCap => "length_cap",
            Self::DeadEnd => "dead_end",
        }
    }
}

impl fmt::Display for ResetCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single change to one agent's rendered path.
///
/// The engine only knows vertex ids; resolving them to positions is left to
/// whoever consumes the events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WalkEvent {
    /// Begin a new path for `agent` at `vertex`.
    StartPath {
        /// Agent whose path restarts.
        agent: AgentId,
        /// First vertex of the new path.
        vertex: usize,
        /// Why the path restarted.
        cause: ResetCause,
    },
    /// Extend the current path of `agent` with `vertex`.
    AppendPoint {
        /// Agent whose path grows.
        agent: AgentId,
        /// Vertex appended to the path.
        vertex: usize,
    },
}

impl WalkEvent {
    /// Returns the agent the event belongs to.
    #[must_use]
    pub const fn agent(&self) -> AgentId {
        match self {
            Self::StartPath { agent, .. } | Self::AppendPoint { agent, .. } => *agent,
        }
    }

    /// Returns the vertex the event refers to.
    #[must_use]
    pub const fn vertex(&self) -> usize {
        match self {
            Self::StartPath { vertex, .. } | Self::AppendPoint { vertex, .. } => *vertex,
        }
    }

    /// Returns the reset cause for [`Self::StartPath`] events.
    #[must_use]
    pub const fn reset_cause(&self) -> Option<ResetCause> {
        match self {
            Self::StartPath { cause, .. } => Some(*cause),
            Self::AppendPoint { .. } => None,
        }
    }

    /// Forwards the event to `sink`.
    ///
    /// # Examples
    /// ```
    /// use senro_core::{AgentId, PathSet, ResetCause, WalkEvent};
    ///
    /// let agent = AgentId::new(1);
    /// let mut paths = PathSet::default();
    /// WalkEvent::StartPath { agent, vertex: 3, cause: ResetCause::FullReset }.apply_to(&mut paths);
    /// WalkEvent::AppendPoint { agent, vertex: 4 }.apply_to(&mut paths);
    /// assert_eq!(paths.current_path(agent), Some(&[3, 4][..]));
    /// ```
    pub fn apply_to<S: PathSink + ?Sized>(&self, sink: &mut S) {
        match *self {
            Self::StartPath { agent, vertex, .. } => sink.start_path(agent, vertex),
            Self::AppendPoint { agent, vertex } => sink.append_point(agent, vertex),
        }
    }
}
