//! Unit tests for OBJ-style mesh ingestion.

use rstest::rstest;
use senro_core::{GraphError, TopologySource};

use crate::{MeshSource, MeshSourceError};

const CUBE: &str = "\
# unit cube
o cube
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
v 0 0 1
v 1 0 1
v 1 1 1
v 0 1 1
vn 0 0 1
f 1 2 3 4
f 5/1/1 6/2/1 7/3/1 8/4/1
f 1 2 6 5
f 2 3 7 6
f 3 4 8 7
f 4 1 5 8
";

fn load(text: &str) -> Result<MeshSource, MeshSourceError> {
    MeshSource::try_from_reader("test", text.as_bytes())
}

#[test]
fn cube_faces_share_edges() {
    let mesh = load(CUBE).expect("cube parses");
    assert_eq!(mesh.vertex_count(), 8);
    assert_eq!(mesh.edges().len(), 12);
    assert_eq!(mesh.name(), "test");
}

#[test]
fn line_records_form_open_chains() {
    let mesh = load("v 0 0 0\nv 1 0 0\nv 2 0 0\nl 1 2 3\n").expect("polyline parses");
    assert_eq!(mesh.edges(), &[(0, 1), (1, 2)]);
}

#[test]
fn relative_indices_resolve_against_defined_vertices() {
    let mesh = load("v 0 0 0\nv 1 0 0\nv 1 1 0\nf -3 -2 -1\n").expect("relative face parses");
    assert_eq!(mesh.edges(), &[(0, 1), (1, 2), (2, 0)]);
}

#[test]
fn homogeneous_weight_is_ignored() {
    let mesh = load("v 1.5 -2 3e1 1.0\n").expect("vertex parses");
    assert_eq!(mesh.position(0).expect("vertex 0 exists"), [1.5, -2.0, 30.0]);
}

#[test]
fn positions_follow_definition_order() {
    let mesh = load("v 0 0 0\n# skipped\nv 1 2 3\nv -1 -2 -3\n").expect("vertices parse");
    assert_eq!(
        mesh.positions(),
        &[[0.0, 0.0, 0.0], [1.0, 2.0, 3.0], [-1.0, -2.0, -3.0]]
    );
    for (vertex, position) in mesh.positions().iter().enumerate() {
        assert_eq!(mesh.position(vertex).expect("vertex exists"), *position);
    }
}

#[test]
fn isolated_vertices_are_kept() {
    let mesh = load("v 0 0 0\nv 1 0 0\nv 5 5 5\nl 1 2\n").expect("mesh parses");
    assert_eq!(mesh.vertex_count(), 3);
    assert_eq!(mesh.edges(), &[(0, 1)]);
}

#[rstest]
#[case::empty("")]
#[case::comments_only("# nothing here\n\n")]
#[case::edges_without_vertices("o empty\ng group\n")]
fn inputs_without_vertices_are_rejected(#[case] text: &str) {
    let err = load(text).expect_err("no vertices must fail");
    assert!(matches!(err, MeshSourceError::EmptyMesh));
}

#[rstest]
#[case::bad_coordinate("v 0 zero 0\n", 1, "zero")]
#[case::bad_index("v 0 0 0\nv 1 1 1\nl 1 two\n", 3, "two")]
fn malformed_numbers_report_line_and_token(
    #[case] text: &str,
    #[case] expected_line: usize,
    #[case] expected_token: &str,
) {
    match load(text) {
        Err(MeshSourceError::InvalidNumber { line, token }) => {
            assert_eq!(line, expected_line);
            assert_eq!(token, expected_token);
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn short_vertex_records_are_rejected() {
    let err = load("v 0 0\n").expect_err("two coordinates must fail");
    assert!(matches!(err, MeshSourceError::MissingCoordinate { line: 1 }));
}

#[rstest]
#[case::forward_reference("v 0 0 0\nl 1 2\nv 1 1 1\n", 2)]
#[case::zero("v 0 0 0\nv 1 1 1\nl 0 1\n", 0)]
#[case::relative_overflow("v 0 0 0\nl -1 -2\n", -2)]
fn undefined_vertices_are_rejected(#[case] text: &str, #[case] expected: i64) {
    match load(text) {
        Err(MeshSourceError::InvalidIndex { index, .. }) => assert_eq!(index, expected),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn from_parts_deduplicates_edges() {
    let mesh = MeshSource::from_parts(
        "parts",
        vec![[0.0; 3], [1.0; 3], [2.0; 3]],
        &[(0, 1), (1, 0), (1, 2), (2, 2)],
    )
    .expect("parts are valid");
    assert_eq!(mesh.edges(), &[(0, 1), (1, 2)]);
}

#[test]
fn from_parts_rejects_unknown_endpoints() {
    let err = MeshSource::from_parts("parts", vec![[0.0; 3]], &[(0, 3)])
        .expect_err("endpoint 3 is undefined");
    assert!(matches!(err, MeshSourceError::InvalidIndex { line: 0, index: 3 }));
}

#[test]
fn position_rejects_unknown_vertices() {
    let mesh = load("v 0 0 0\n").expect("vertex parses");
    assert_eq!(
        mesh.position(1),
        Err(GraphError::OutOfRange {
            vertex: 1,
            vertex_count: 1
        })
    );
}
