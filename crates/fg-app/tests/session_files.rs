use std::fs;
use std::path::PathBuf;

use fg_app::{Session, WorkspaceConfig, resolve_config};
use fg_core::VertexId;
use fg_solver::Distance;

fn workspace(name: &str, vertices: &str, edges: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("fg_app_it_{name}"));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("vertex_names.txt"), vertices).unwrap();
    fs::write(dir.join("input.txt"), edges).unwrap();
    dir
}

fn vid(raw: u32) -> VertexId {
    VertexId::new(raw).unwrap()
}

#[test]
fn open_and_query() {
    let dir = workspace("open", "1 Delhi\n2 Agra\n3 Jaipur\n4 Goa\n", "1 233 2\n2 240 3\n1 280 3\n");
    let config = resolve_config(None, &dir).unwrap();
    let (session, report) = Session::open(&config).unwrap();

    assert!(report.is_clean());
    assert_eq!(session.summary().vertices, 4);

    let answer = session.query(0, 2).unwrap();
    assert_eq!(answer.distance, Distance::Finite(280));
    assert_eq!(
        answer.to_string(),
        "Shortest distance between Delhi and Jaipur: 280"
    );
    assert_eq!(
        session.query(3, 0).unwrap().to_string(),
        "No valid path between Goa and Delhi."
    );
}

#[test]
fn edits_are_written_back_and_survive_reopen() {
    let dir = workspace("persist", "1 A\n2 B\n", "1 4 2\n");
    let config = resolve_config(None, &dir).unwrap();
    let (mut session, _) = Session::open(&config).unwrap();

    let c = session.add_vertex("C").unwrap();
    assert_eq!(c, vid(3));
    session.add_edge(c, vid(2), 1).unwrap();
    session.rename_vertex(vid(1), "Alpha").unwrap();

    assert_eq!(
        fs::read_to_string(dir.join("vertex_names.txt")).unwrap(),
        "1 Alpha\n2 B\n3 C\n"
    );
    assert_eq!(
        fs::read_to_string(dir.join("input.txt")).unwrap(),
        "1 4 2\n3 1 2\n"
    );

    let (reopened, report) = Session::open(&config).unwrap();
    assert!(report.is_clean());
    assert_eq!(reopened.matrix(), session.matrix());
    assert_eq!(
        reopened.query_ids(vid(1), c).unwrap().distance,
        Distance::Finite(5)
    );
    assert_eq!(reopened.model().vertex_name(vid(1)).unwrap(), "Alpha");
}

#[test]
fn persist_disabled_leaves_files_alone() {
    let dir = workspace("readonly", "1 A\n2 B\n", "");
    let config = WorkspaceConfig {
        persist: false,
        ..WorkspaceConfig::default()
    }
    .relative_to(&dir);
    let (mut session, _) = Session::open(&config).unwrap();
    assert!(session.store().is_none());

    session.add_edge(vid(1), vid(2), 3).unwrap();
    assert_eq!(session.query(0, 1).unwrap().distance, Distance::Finite(3));
    assert_eq!(fs::read_to_string(dir.join("input.txt")).unwrap(), "");
}

#[test]
fn bad_seed_rows_are_reported_not_fatal() {
    let dir = workspace("bad_seed", "1 A\n2 B\n", "1 5 2\n2 7 9\nfoo\n");
    let config = resolve_config(None, &dir).unwrap();
    let (session, report) = Session::open(&config).unwrap();
    assert_eq!(report.warnings.len(), 2);
    assert_eq!(session.summary().edges, 1);
    assert_eq!(session.query(0, 1).unwrap().distance, Distance::Finite(5));
}

#[test]
fn rename_after_skipped_row_reloads_same_graph() {
    let dir = workspace("skipped_row", "1 A\n2\n3 C\n", "1 6 3\n");
    let config = resolve_config(None, &dir).unwrap();
    let (mut session, report) = Session::open(&config).unwrap();
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(session.model().vertex_name(vid(2)).unwrap(), "C");

    session.rename_vertex(vid(2), "Z").unwrap();
    assert_eq!(
        fs::read_to_string(dir.join("vertex_names.txt")).unwrap(),
        "1 A\n2 Z\n"
    );

    let (reopened, report) = Session::open(&config).unwrap();
    assert!(report.is_clean());
    assert_eq!(reopened.model(), session.model());
    assert_eq!(reopened.query(0, 1).unwrap().to_string(), "Shortest distance between A and Z: 6");
}

#[test]
fn failed_write_rolls_back_the_edit() {
    let dir = workspace("rollback", "1 A\n2 B\n", "");
    let config = resolve_config(None, &dir).unwrap();
    let (mut session, _) = Session::open(&config).unwrap();

    // A directory in place of the edge file makes the save fail.
    fs::remove_file(dir.join("input.txt")).unwrap();
    fs::create_dir_all(dir.join("input.txt").join("blocker")).unwrap();

    assert!(session.add_edge(vid(1), vid(2), 3).is_err());
    assert_eq!(session.model().edge_count(), 0);
    assert_eq!(session.query(0, 1).unwrap().distance, Distance::Unreachable);
}
