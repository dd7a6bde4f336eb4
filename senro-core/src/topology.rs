//! Topology provider abstraction consumed when building an
//! [`crate::AdjacencyGraph`].

/// External source of vertex topology, such as an imported surface mesh.
///
/// Implementors describe how many vertices exist and which undirected edges
/// connect them. Vertex positions and any other geometry stay with the
/// implementor; the walk engine only ever deals in vertex ids.
///
/// # Examples
/// ```
/// use senro_core::{AdjacencyGraph, TopologySource};
///
/// struct Triangle;
///
/// impl TopologySource for Triangle {
///     fn name(&self) -> &str { "triangle" }
///     fn vertex_count(&self) -> usize { 3 }
///     fn edges(&self) -> &[(usize, usize)] { &[(0, 1), (1, 2), (2, 0)] }
/// }
///
/// let graph = AdjacencyGraph::from_source(&Triangle)?;
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.neighbours_of(0)?, &[1, 2]);
/// # Ok::<(), senro_core::GraphError>(())
/// ```
pub trait TopologySource {
    /// Returns a human-readable name for diagnostics.
    fn name(&self) -> &str;

    /// Returns the number of vertices in the topology.
    fn vertex_count(&self) -> usize;

    /// Returns the undirected edges in source order.
    fn edges(&self) -> &[(usize, usize)];

    /// Returns whether the topology contains no vertices.
    #[must_use]
    fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }
}
