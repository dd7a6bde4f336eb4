//! Mesh topology provider for senro walks.
//!
//! Reads the vertex and edge records of a Wavefront OBJ-style text file into a
//! [`MeshSource`], which feeds [`senro_core::AdjacencyGraph::from_source`] and
//! resolves vertex ids back to positions when paths are rendered.

mod errors;
mod parse;
mod source;

pub use errors::MeshSourceError;
pub use source::{MeshSource, Position};

#[cfg(test)]
mod tests;
