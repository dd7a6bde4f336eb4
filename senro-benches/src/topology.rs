//! Synthetic topologies shaped like the meshes walks usually run on.
//!
//! [`GridTopology`] mimics a subdivided plane, every interior vertex having
//! four neighbours. [`RandomTopology`] scatters seeded random edges and leaves
//! isolated vertices and dead ends behind, exercising the restart paths.

use std::collections::HashSet;

use rand::{Rng, SeedableRng, rngs::SmallRng};
use senro_core::TopologySource;

use crate::error::BenchSetupError;

/// Dimensions of a grid topology.
#[derive(Clone, Copy, Debug)]
pub struct GridConfig {
    /// Vertices per row.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
}

/// A `width` by `height` lattice with edges between horizontal and vertical
/// neighbours.
#[derive(Clone, Debug)]
pub struct GridTopology {
    vertex_count: usize,
    edges: Vec<(usize, usize)>,
}

impl GridTopology {
    /// Generates the lattice described by `config`.
    ///
    /// # Errors
    /// Returns [`BenchSetupError::ZeroValue`] when a dimension is zero and
    /// [`BenchSetupError::Overflow`] when the vertex count overflows.
    ///
    /// # Examples
    /// ```
    /// use senro_benches::topology::{GridConfig, GridTopology};
    /// use senro_core::TopologySource;
    ///
    /// let grid = GridTopology::generate(&GridConfig { width: 3, height: 2 })?;
    /// assert_eq!(grid.vertex_count(), 6);
    /// assert_eq!(grid.edges().len(), 7);
    /// # Ok::<(), senro_benches::error::BenchSetupError>(())
    /// ```
    pub fn generate(config: &GridConfig) -> Result<Self, BenchSetupError> {
        let GridConfig { width, height } = *config;
        if width == 0 {
            return Err(BenchSetupError::ZeroValue { context: "width" });
        }
        if height == 0 {
            return Err(BenchSetupError::ZeroValue { context: "height" });
        }
        let vertex_count = width
            .checked_mul(height)
            .ok_or(BenchSetupError::Overflow {
                context: "grid vertex count",
            })?;

        let mut edges = Vec::with_capacity(vertex_count.saturating_mul(2));
        for row in 0..height {
            let base = row * width;
            for column in 0..width {
                let vertex = base + column;
                if column + 1 < width {
                    edges.push((vertex, vertex + 1));
                }
                if row + 1 < height {
                    edges.push((vertex, vertex + width));
                }
            }
        }
        Ok(Self {
            vertex_count,
            edges,
        })
    }
}

impl TopologySource for GridTopology {
    fn name(&self) -> &str {
        "grid"
    }

    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }
}

/// Configuration of a random topology.
#[derive(Clone, Copy, Debug)]
pub struct RandomConfig {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Number of edge draws; repeats and self-loops are discarded.
    pub edge_draws: usize,
    /// Seed for the edge generator.
    pub seed: u64,
}

/// Seeded random undirected graph without repeated edges or self-loops.
#[derive(Clone, Debug)]
pub struct RandomTopology {
    vertex_count: usize,
    edges: Vec<(usize, usize)>,
}

impl RandomTopology {
    /// Generates a random graph from `config`.
    ///
    /// # Errors
    /// Returns [`BenchSetupError::ZeroValue`] when `vertex_count` is zero.
    pub fn generate(config: &RandomConfig) -> Result<Self, BenchSetupError> {
        if config.vertex_count == 0 {
            return Err(BenchSetupError::ZeroValue {
                context: "vertex_count",
            });
        }
        let mut rng = SmallRng::seed_from_u64(config.seed);
        let mut seen = HashSet::with_capacity(config.edge_draws);
        let mut edges = Vec::with_capacity(config.edge_draws);
        for _ in 0..config.edge_draws {
            let a = rng.gen_range(0..config.vertex_count);
            let b = rng.gen_range(0..config.vertex_count);
            if a != b && seen.insert((a.min(b), a.max(b))) {
                edges.push((a, b));
            }
        }
        Ok(Self {
            vertex_count: config.vertex_count,
            edges,
        })
    }
}

impl TopologySource for RandomTopology {
    fn name(&self) -> &str {
        "random"
    }

    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }
}
