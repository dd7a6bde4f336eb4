//! Mesh topology source implementing [`TopologySource`].
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use senro_core::{GraphError, TopologySource};
use tracing::{debug, instrument};

use crate::errors::MeshSourceError;
use crate::parse::{EdgeSet, parse_mesh};

/// A vertex position in object space.
pub type Position = [f32; 3];

/// Vertex positions and unique undirected edges of a surface mesh.
///
/// # Examples
/// ```
/// use senro_core::{AdjacencyGraph, TopologySource};
/// use senro_providers_mesh::MeshSource;
///
/// let obj = "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n";
/// let mesh = MeshSource::try_from_reader("quad", obj.as_bytes())?;
/// assert_eq!(mesh.vertex_count(), 4);
/// assert_eq!(mesh.edges(), &[(0, 1), (1, 2), (2, 3), (3, 0)]);
///
/// let graph = AdjacencyGraph::from_source(&mesh)?;
/// assert_eq!(graph.neighbours_of(0)?, &[1, 3]);
/// assert_eq!(mesh.position(2)?, [1.0, 1.0, 0.0]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MeshSource {
    name: String,
    positions: Vec<Position>,
    edges: Vec<(usize, usize)>,
}

impl MeshSource {
    /// Builds a source from explicit positions and edges.
    ///
    /// Edges are de-duplicated in first-seen order and self-loops dropped,
    /// matching what [`Self::try_from_reader`] produces.
    ///
    /// # Errors
    /// Returns [`MeshSourceError::EmptyMesh`] when `positions` is empty and
    /// [`MeshSourceError::InvalidIndex`] (with line 0) when an edge endpoint
    /// is not a vertex.
    pub fn from_parts(
        name: impl Into<String>,
        positions: Vec<Position>,
        edges: &[(usize, usize)],
    ) -> Result<Self, MeshSourceError> {
        let mut unique = EdgeSet::default();
        for &(a, b) in edges {
            if let Some(&vertex) = [a, b].iter().find(|&&v| v >= positions.len()) {
                return Err(MeshSourceError::InvalidIndex {
                    line: 0,
                    index: i64::try_from(vertex).unwrap_or(i64::MAX),
                });
            }
            unique.insert(a, b);
        }
        Self::validated(name.into(), positions, unique.into_vec())
    }

    /// Loads a mesh from OBJ-style text.
    ///
    /// # Errors
    /// Returns [`MeshSourceError`] when reading fails, a record is malformed,
    /// an element references an undefined vertex, or no vertex is defined.
    #[instrument(name = "mesh.load", err, skip(name, reader))]
    pub fn try_from_reader<R: BufRead>(
        name: impl Into<String>,
        reader: R,
    ) -> Result<Self, MeshSourceError> {
        let parsed = parse_mesh(reader)?;
        let source = Self::validated(name.into(), parsed.positions, parsed.edges.into_vec())?;
        debug!(
            mesh = source.name.as_str(),
            vertices = source.positions.len(),
            edges = source.edges.len(),
            "mesh loaded"
        );
        Ok(source)
    }

    /// Loads a mesh from an OBJ-style file on disk.
    ///
    /// # Errors
    /// See [`Self::try_from_reader`].
    pub fn try_from_path(
        name: impl Into<String>,
        path: impl AsRef<Path>,
    ) -> Result<Self, MeshSourceError> {
        let file = File::open(path)?;
        Self::try_from_reader(name, BufReader::new(file))
    }

    fn validated(
        name: String,
        positions: Vec<Position>,
        edges: Vec<(usize, usize)>,
    ) -> Result<Self, MeshSourceError> {
        if positions.is_empty() {
            return Err(MeshSourceError::EmptyMesh);
        }
        Ok(Self {
            name,
            positions,
            edges,
        })
    }

    /// Returns the position of `vertex`.
    ///
    /// # Errors
    /// Returns [`GraphError::OutOfRange`] when `vertex` is not defined.
    pub fn position(&self, vertex: usize) -> Result<Position, GraphError> {
        self.positions
            .get(vertex)
            .copied()
            .ok_or(GraphError::OutOfRange {
                vertex,
                vertex_count: self.positions.len(),
            })
    }

    /// Returns every vertex position in id order.
    #[must_use]
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }
}

impl TopologySource for MeshSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }
}
