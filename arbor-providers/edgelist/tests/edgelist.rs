#![expect(clippy::expect_used, reason = "tests require contextual panics")]
//! Integration tests covering both edge-list layouts.
use std::io::{Cursor, Write};

use arbor_core::{Edge, GraphError};
use arbor_providers_edgelist::{
    EdgeListError, EdgeListFormat, MAX_VERTEX_COUNT, from_reader, load_path,
};
use arbor_test_support::tracing::RecordingLayer;
use rstest::rstest;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;

#[rstest]
#[case::plain("3 2\n0 1 0.5\n1 2 1.5\n")]
#[case::blank_lines("\n\n3 2\n\n0 1 0.5\n   \n1 2 1.5\n")]
#[case::carriage_returns("3 2\r\n0 1 0.5\r\n1 2 1.5\r\n")]
#[case::float_endpoints("3 2\n0.0 1.0 0.5\n1 2.0 1.5")]
#[case::tabs("3\t2\n0\t1\t0.5\n1\t2\t1.5\n")]
fn header_format_parses_weighted_edges(#[case] raw: &str) {
    let graph = from_reader(Cursor::new(raw), EdgeListFormat::Header).expect("graph must load");
    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(
        graph.edges(),
        &[Edge::new(0, 1, 0.5), Edge::new(1, 2, 1.5)]
    );
}

#[rstest]
fn header_keeps_isolated_vertices() {
    let graph =
        from_reader(Cursor::new("5 1\n3 4 -2.5\n"), EdgeListFormat::Header).expect("graph must load");
    assert_eq!(graph.vertex_count(), 5);
    assert_eq!(graph.component_count(), 4);
}

#[rstest]
fn header_edge_count_mismatch_is_only_a_warning() {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    let graph = tracing::subscriber::with_default(subscriber, || {
        from_reader(Cursor::new("3 5\n0 1 1\n1 2 2\n"), EdgeListFormat::Header)
    })
    .expect("graph must load");
    assert_eq!(graph.edge_count(), 2);

    let warnings = layer.events_at(Level::WARN);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].field("declared"), Some("5"));
    assert_eq!(warnings[0].field("parsed"), Some("2"));
}

#[rstest]
#[case::empty("")]
#[case::blank_only("\n  \n\t\n")]
fn header_format_requires_header(#[case] raw: &str) {
    let err = from_reader(Cursor::new(raw), EdgeListFormat::Header)
        .expect_err("missing header must fail");
    assert!(matches!(err, EdgeListError::MissingHeader));
    assert_eq!(err.code().as_str(), "EDGELIST_MISSING_HEADER");
}

#[rstest]
#[case::short_header("3\n0 1 1\n", 1)]
#[case::fractional_count("3.5 1\n0 1 1\n", 1)]
#[case::missing_weight("3 1\n\n0 1\n", 3)]
#[case::extra_field("3 1\n0 1 1 9\n", 2)]
#[case::fractional_endpoint("3 1\n0 1.5 1\n", 2)]
#[case::negative_endpoint("3 1\n-1 1 1\n", 2)]
#[case::word_weight("3 1\n0 1 heavy\n", 2)]
fn header_format_reports_malformed_lines(#[case] raw: &str, #[case] expected_line: usize) {
    let err =
        from_reader(Cursor::new(raw), EdgeListFormat::Header).expect_err("malformed input must fail");
    match err {
        EdgeListError::MalformedLine { line, .. } => assert_eq!(line, expected_line),
        other => panic!("unexpected error: {other}"),
    }
}

#[rstest]
#[case::out_of_range("2 1\n0 2 1\n")]
#[case::nan_weight("2 1\n0 1 NaN\n")]
#[case::infinite_weight("2 1\n0 1 inf\n")]
fn header_format_surfaces_graph_validation(#[case] raw: &str) {
    let err = from_reader(Cursor::new(raw), EdgeListFormat::Header)
        .expect_err("invalid graph must fail");
    assert!(matches!(err, EdgeListError::Graph(_)));
    assert_eq!(err.code().as_str(), "EDGELIST_INVALID_GRAPH");
}

#[rstest]
fn header_format_reports_offending_vertex() {
    let err = from_reader(Cursor::new("2 1\n0 7 1\n"), EdgeListFormat::Header)
        .expect_err("invalid graph must fail");
    assert!(matches!(
        err,
        EdgeListError::Graph(GraphError::InvalidVertex { vertex: 7, vertex_count: 2, .. })
    ));
}

#[rstest]
fn header_edge_count_does_not_size_allocation() {
    let graph = from_reader(
        Cursor::new("3 18446744073709551615\n0 1 1.0\n"),
        EdgeListFormat::Header,
    )
    .expect("graph must load");
    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.edges(), &[Edge::new(0, 1, 1.0)]);
}

#[rstest]
#[case::huge_vertex_count("18446744073709551615 1\n0 1 1\n", 1)]
#[case::vertex_count_over_limit("134217729 0\n", 1)]
#[case::huge_endpoint("3 1\n0 18446744073709551615 1\n", 2)]
#[case::huge_float_endpoint("3 1\n0 9007199254740992.0 1\n", 2)]
fn header_format_bounds_vertex_ids(#[case] raw: &str, #[case] expected_line: usize) {
    let err =
        from_reader(Cursor::new(raw), EdgeListFormat::Header).expect_err("oversized input must fail");
    match err {
        EdgeListError::MalformedLine { line, reason } => {
            assert_eq!(line, expected_line);
            assert!(reason.contains("exceeds the limit"), "{reason}");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[rstest]
#[case::float_id("0 9007199254740992\n")]
#[case::beyond_u32("0 4294967296\n")]
#[case::at_limit("0 1\n134217728 0\n")]
fn snap_format_rejects_ids_beyond_limit(#[case] raw: &str) {
    let err = from_reader(Cursor::new(raw), EdgeListFormat::Snap)
        .expect_err("oversized vertex id must fail");
    assert!(matches!(err, EdgeListError::MalformedLine { .. }), "{err}");
    assert_eq!(err.code().as_str(), "EDGELIST_MALFORMED_LINE");
}

#[rstest]
fn snap_format_accepts_largest_id() {
    let raw = format!("{} 0\n", MAX_VERTEX_COUNT - 1);
    let graph = from_reader(Cursor::new(raw), EdgeListFormat::Snap).expect("graph must load");
    assert_eq!(graph.vertex_count(), MAX_VERTEX_COUNT);
    assert_eq!(graph.edge_count(), 1);
}

#[rstest]
fn snap_format_uses_unit_weights_and_max_id() {
    let raw = "# Directed graph: roadNet-demo\n# FromNodeId\tToNodeId\n0\t1\n1\t4\n\n4\t0\n";
    let graph = from_reader(Cursor::new(raw), EdgeListFormat::Snap).expect("graph must load");
    assert_eq!(graph.vertex_count(), 5);
    assert_eq!(graph.edge_count(), 3);
    assert!(graph.edges().iter().all(|edge| edge.weight() == 1.0));
    // Vertices 2 and 3 never appear.
    assert_eq!(graph.component_count(), 3);
}

#[rstest]
fn snap_format_with_only_comments_is_empty() {
    let graph = from_reader(Cursor::new("# nothing here\n"), EdgeListFormat::Snap)
        .expect("graph must load");
    assert_eq!(graph.vertex_count(), 0);
    assert_eq!(graph.edge_count(), 0);
}

#[rstest]
fn snap_format_rejects_weighted_lines() {
    let err = from_reader(Cursor::new("0 1\n1 2 3.0\n"), EdgeListFormat::Snap)
        .expect_err("extra field must fail");
    assert!(matches!(err, EdgeListError::MalformedLine { line: 2, .. }));
    assert_eq!(err.code().as_str(), "EDGELIST_MALFORMED_LINE");
}

#[rstest]
fn from_reader_propagates_io_error() {
    struct FailingReader;

    impl std::io::Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("boom"))
        }
    }

    impl std::io::BufRead for FailingReader {
        fn fill_buf(&mut self) -> std::io::Result<&[u8]> {
            Err(std::io::Error::other("boom"))
        }

        fn consume(&mut self, _amt: usize) {}

        fn read_line(&mut self, _buf: &mut String) -> std::io::Result<usize> {
            Err(std::io::Error::other("boom"))
        }
    }

    for format in [EdgeListFormat::Header, EdgeListFormat::Snap] {
        let err = from_reader(FailingReader, format).expect_err("I/O failure must propagate");
        assert!(matches!(err, EdgeListError::Io(_)), "{format}");
    }
}

#[rstest]
fn load_path_reads_files() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file must be created");
    writeln!(file, "4 3\n0 1 1.0\n1 2 2.0\n2 3 3.0").expect("write must succeed");
    let graph = load_path(file.path(), EdgeListFormat::Header).expect("graph must load");
    assert_eq!(graph.vertex_count(), 4);
    assert_eq!(graph.component_count(), 1);
}

#[rstest]
fn load_path_reports_missing_file() {
    let dir = tempfile::tempdir().expect("temp dir must be created");
    let err = load_path(dir.path().join("absent.txt"), EdgeListFormat::Snap)
        .expect_err("missing file must fail");
    assert!(matches!(err, EdgeListError::Io(_)));
    assert_eq!(err.code().as_str(), "EDGELIST_IO");
}
