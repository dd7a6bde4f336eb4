//! Strategy builders for walk property tests.

use std::collections::BTreeSet;

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::AdjacencyGraph;

use super::types::{GraphShape, WalkFixture};

const MIN_VERTICES: usize = 1;
const MAX_VERTICES: usize = 48;
const MAX_AGENTS: usize = 4;
const MAX_STEPS: usize = 160;

/// Generates walk fixtures across every graph shape.
pub(super) fn walk_fixture_strategy() -> impl Strategy<Value = WalkFixture> {
    (any::<GraphShape>(), any::<u64>()).prop_map(|(shape, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(shape, &mut rng)
    })
}

/// Generates a fixture for a specific shape.
pub(super) fn generate_fixture(shape: GraphShape, rng: &mut SmallRng) -> WalkFixture {
    let graph = match shape {
        GraphShape::Path => generate_path(rng),
        GraphShape::Cycle => generate_cycle(rng),
        GraphShape::Grid => generate_grid(rng),
        GraphShape::Sparse => generate_sparse(rng),
        GraphShape::Disconnected => generate_disconnected(rng),
    };

    let agent_count = rng.gen_range(1..=MAX_AGENTS);
    let mut seeds = BTreeSet::new();
    while seeds.len() < agent_count {
        seeds.insert(rng.gen_range(0..=u64::MAX));
    }

    WalkFixture {
        shape,
        graph,
        seeds: seeds.into_iter().collect(),
        cap: rng.gen_range(1..=64),
        steps: rng.gen_range(1..=MAX_STEPS),
    }
}

fn build(vertex_count: usize, edges: &[(usize, usize)]) -> AdjacencyGraph {
    AdjacencyGraph::from_edges(vertex_count, edges).expect("generated edges are in range")
}

fn generate_path(rng: &mut SmallRng) -> AdjacencyGraph {
    let n = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let edges: Vec<_> = (1..n).map(|v| (v - 1, v)).collect();
    build(n, &edges)
}

fn generate_cycle(rng: &mut SmallRng) -> AdjacencyGraph {
    let n = rng.gen_range(3..=MAX_VERTICES);
    let edges: Vec<_> = (0..n).map(|v| (v, (v + 1) % n)).collect();
    build(n, &edges)
}

fn generate_grid(rng: &mut SmallRng) -> AdjacencyGraph {
    let width = rng.gen_range(1..=7);
    let height = rng.gen_range(1..=7);
    let mut edges = Vec::new();
    for y in 0..height {
        for x in 0..width {
            let v = y * width + x;
            if x + 1 < width {
                edges.push((v, v + 1));
            }
            if y + 1 < height {
                edges.push((v, v + width));
            }
        }
    }
    build(width * height, &edges)
}

fn generate_sparse(rng: &mut SmallRng) -> AdjacencyGraph {
    let n = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let edge_count = rng.gen_range(0..=n * 2);
    let edges: Vec<_> = (0..edge_count)
        .map(|_| (rng.gen_range(0..n), rng.gen_range(0..n)))
        .collect();
    build(n, &edges)
}

fn generate_disconnected(rng: &mut SmallRng) -> AdjacencyGraph {
    let components = rng.gen_range(1..=4);
    let mut edges = Vec::new();
    let mut offset = 0;
    for _ in 0..components {
        let size = rng.gen_range(1..=6);
        for a in 0..size {
            for b in (a + 1)..size {
                edges.push((offset + a, offset + b));
            }
        }
        offset += size;
    }
    let isolated = rng.gen_range(0..=3);
    build(offset + isolated, &edges)
}
