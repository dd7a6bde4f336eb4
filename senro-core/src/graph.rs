//! Immutable adjacency graph shared by every walk agent.

use tracing::instrument;

use crate::{error::GraphError, topology::TopologySource};

/// Read-only mapping from vertex id to the ids of its neighbours.
///
/// Neighbour lists keep the order in which edges were supplied. Parallel
/// edges produce duplicate entries and isolated vertices have empty lists.
///
/// # Examples
/// ```
/// use senro_core::AdjacencyGraph;
///
/// let graph = AdjacencyGraph::from_edges(4, &[(0, 1), (1, 2), (2, 3)])?;
/// assert_eq!(graph.vertex_count(), 4);
/// assert_eq!(graph.neighbours_of(1)?, &[0, 2]);
/// assert!(graph.neighbours_of(4).is_err());
/// # Ok::<(), senro_core::GraphError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyGraph {
    neighbours: Vec<Vec<usize>>,
    edge_count: usize,
}

impl AdjacencyGraph {
    /// Builds a graph from a vertex count and a list of undirected edges.
    ///
    /// Each edge `(a, b)` appends `b` to the list of `a` and `a` to the list
    /// of `b`. A self-loop `(a, a)` is recorded once.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyGraph`] when `vertex_count` is zero and
    /// [`GraphError::OutOfRange`] when an edge references a vertex outside
    /// `[0, vertex_count)`.
    #[instrument(name = "graph.from_edges", level = "debug", err, skip(edges), fields(edges = edges.len()))]
    pub fn from_edges(vertex_count: usize, edges: &[(usize, usize)]) -> Result<Self, GraphError> {
        if vertex_count == 0 {
            return Err(GraphError::EmptyGraph);
        }

        let mut neighbours = vec![Vec::new(); vertex_count];
        for &(a, b) in edges {
            let out_of_range = |vertex| GraphError::OutOfRange {
                vertex,
                vertex_count,
            };
            if b >= vertex_count {
                return Err(out_of_range(b));
            }
            neighbours.get_mut(a).ok_or_else(|| out_of_range(a))?.push(b);
            if a != b {
                neighbours.get_mut(b).ok_or_else(|| out_of_range(b))?.push(a);
            }
        }

        Ok(Self {
            neighbours,
            edge_count: edges.len(),
        })
    }

    /// Builds a graph from explicit per-vertex neighbour lists.
    ///
    /// The lists are taken as-is; no symmetry is enforced, which allows a
    /// cached adjacency map to be reused without rebuilding it from edges.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyGraph`] when `neighbours` is empty and
    /// [`GraphError::OutOfRange`] when a list references an unknown vertex.
    ///
    /// # Examples
    /// ```
    /// use senro_core::AdjacencyGraph;
    ///
    /// let graph = AdjacencyGraph::from_adjacency(vec![vec![1], vec![0], vec![]])?;
    /// assert!(graph.neighbours_of(2)?.is_empty());
    /// # Ok::<(), senro_core::GraphError>(())
    /// ```
    pub fn from_adjacency(neighbours: Vec<Vec<usize>>) -> Result<Self, GraphError> {
        let vertex_count = neighbours.len();
        if vertex_count == 0 {
            return Err(GraphError::EmptyGraph);
        }
        if let Some(&vertex) = neighbours.iter().flatten().find(|&&v| v >= vertex_count) {
            return Err(GraphError::OutOfRange {
                vertex,
                vertex_count,
            });
        }

        let directed: usize = neighbours.iter().map(Vec::len).sum();
        Ok(Self {
            neighbours,
            edge_count: directed.div_ceil(2),
        })
    }

    /// Builds a graph from an external [`TopologySource`].
    ///
    /// Sources reporting [`TopologySource::is_empty`] are rejected before
    /// their edges are read.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyGraph`] for an empty source and otherwise
    /// propagates the errors of [`Self::from_edges`].
    pub fn from_source<T: TopologySource + ?Sized>(source: &T) -> Result<Self, GraphError> {
        if source.is_empty() {
            return Err(GraphError::EmptyGraph);
        }
        Self::from_edges(source.vertex_count(), source.edges())
    }

    /// Returns the number of vertices, always at least one.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.neighbours.len()
    }

    /// Returns the number of edges the graph was built from.
    ///
    /// Graphs built with [`Self::from_adjacency`] report half the number of
    /// directed entries, rounded up.
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns the neighbours of `vertex` in insertion order.
    ///
    /// # Errors
    /// Returns [`GraphError::OutOfRange`] if `vertex` is not a valid id.
    pub fn neighbours_of(&self, vertex: usize) -> Result<&[usize], GraphError> {
        self.neighbours
            .get(vertex)
            .map(Vec::as_slice)
            .ok_or(GraphError::OutOfRange {
                vertex,
                vertex_count: self.neighbours.len(),
            })
    }

    /// Returns the number of neighbour entries recorded for `vertex`.
    ///
    /// # Errors
    /// Returns [`GraphError::OutOfRange`] if `vertex` is not a valid id.
    pub fn degree(&self, vertex: usize) -> Result<usize, GraphError> {
        self.neighbours_of(vertex).map(<[usize]>::len)
    }

    /// Returns whether `vertex` has no neighbours at all.
    ///
    /// # Errors
    /// Returns [`GraphError::OutOfRange`] if `vertex` is not a valid id.
    pub fn is_isolated(&self, vertex: usize) -> Result<bool, GraphError> {
        self.neighbours_of(vertex).map(<[usize]>::is_empty)
    }
}
