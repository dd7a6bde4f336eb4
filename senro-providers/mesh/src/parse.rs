//! Line-oriented parsing of OBJ-style vertex and element records.

use std::collections::HashSet;
use std::io::BufRead;

use crate::errors::MeshSourceError;
use crate::source::Position;

#[derive(Debug, Default)]
pub(crate) struct ParsedMesh {
    pub(crate) positions: Vec<Position>,
    pub(crate) edges: EdgeSet,
}

/// Undirected edges in first-seen order without repeats or self-loops.
#[derive(Debug, Default)]
pub(crate) struct EdgeSet {
    seen: HashSet<(usize, usize)>,
    edges: Vec<(usize, usize)>,
}

impl EdgeSet {
    pub(crate) fn insert(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        if self.seen.insert((a.min(b), a.max(b))) {
            self.edges.push((a, b));
        }
    }

    fn extend_chain(&mut self, vertices: &[usize], closed: bool) {
        for pair in vertices.windows(2) {
            if let [a, b] = pair {
                self.insert(*a, *b);
            }
        }
        if closed && vertices.len() > 2 {
            if let (Some(&last), Some(&first)) = (vertices.last(), vertices.first()) {
                self.insert(last, first);
            }
        }
    }

    pub(crate) fn into_vec(self) -> Vec<(usize, usize)> {
        self.edges
    }
}

pub(crate) fn parse_mesh<R: BufRead>(reader: R) -> Result<ParsedMesh, MeshSourceError> {
    let mut mesh = ParsedMesh::default();
    for (index, read) in reader.lines().enumerate() {
        let text = read?;
        let line = index + 1;
        let mut tokens = text.split_whitespace();
        match tokens.next() {
            Some("v") => mesh.positions.push(parse_position(line, tokens)?),
            Some("l") => {
                let vertices = resolve_indices(line, tokens, mesh.positions.len())?;
                mesh.edges.extend_chain(&vertices, false);
            }
            Some("f") => {
                let vertices = resolve_indices(line, tokens, mesh.positions.len())?;
                mesh.edges.extend_chain(&vertices, true);
            }
            // Comments, groups, normals, texture coordinates and materials
            // carry no topology.
            _ => {}
        }
    }
    Ok(mesh)
}

fn parse_position<'a>(
    line: usize,
    mut tokens: impl Iterator<Item = &'a str>,
) -> Result<Position, MeshSourceError> {
    let mut coordinate = || -> Result<f32, MeshSourceError> {
        let token = tokens
            .next()
            .ok_or(MeshSourceError::MissingCoordinate { line })?;
        token
            .parse::<f32>()
            .map_err(|_| MeshSourceError::InvalidNumber {
                line,
                token: token.to_owned(),
            })
    };
    Ok([coordinate()?, coordinate()?, coordinate()?])
}

fn resolve_indices<'a>(
    line: usize,
    tokens: impl Iterator<Item = &'a str>,
    defined: usize,
) -> Result<Vec<usize>, MeshSourceError> {
    tokens
        .map(|token| {
            // `v/vt/vn` references only need the vertex component.
            let raw = token.split('/').next().unwrap_or(token);
            let index = raw
                .parse::<i64>()
                .map_err(|_| MeshSourceError::InvalidNumber {
                    line,
                    token: token.to_owned(),
                })?;
            resolve_index(index, defined).ok_or(MeshSourceError::InvalidIndex { line, index })
        })
        .collect()
}

/// Maps a 1-based (or negative, relative) OBJ index onto a 0-based vertex id.
pub(crate) fn resolve_index(index: i64, defined: usize) -> Option<usize> {
    if index > 0 {
        usize::try_from(index)
            .ok()
            .map(|one_based| one_based - 1)
            .filter(|&vertex| vertex < defined)
    } else {
        let back = usize::try_from(index.unsigned_abs()).ok()?;
        if back == 0 {
            return None;
        }
        defined.checked_sub(back)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::first(1, 3, Some(0))]
    #[case::last(3, 3, Some(2))]
    #[case::past_end(4, 3, None)]
    #[case::zero(0, 3, None)]
    #[case::relative_last(-1, 3, Some(2))]
    #[case::relative_first(-3, 3, Some(0))]
    #[case::relative_before_start(-4, 3, None)]
    fn resolve_index_handles_absolute_and_relative_forms(
        #[case] index: i64,
        #[case] defined: usize,
        #[case] expected: Option<usize>,
    ) {
        assert_eq!(resolve_index(index, defined), expected);
    }

    #[test]
    fn edge_set_skips_repeats_and_self_loops() {
        let mut edges = EdgeSet::default();
        edges.insert(0, 1);
        edges.insert(1, 0);
        edges.insert(2, 2);
        edges.insert(1, 2);
        assert_eq!(edges.into_vec(), vec![(0, 1), (1, 2)]);
    }

    #[test]
    fn closed_chains_add_the_closing_edge() {
        let mut edges = EdgeSet::default();
        edges.extend_chain(&[0, 1, 2, 3], true);
        assert_eq!(edges.into_vec(), vec![(0, 1), (1, 2), (2, 3), (3, 0)]);
    }
}
