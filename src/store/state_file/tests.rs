// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archflow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fs;
use std::path::PathBuf;

use rstest::{fixture, rstest};
use tempfile::TempDir;

use super::{SaveResult, StateFile, StoreError, StoreErrorKind, WriteDurability, STATE_FILENAME};
use crate::model::fixtures::{rag_pipeline, users_api};
use crate::model::{DiagramState, Viewport};

struct StateFileTestCtx {
    _tmp: TempDir,
    data_dir: PathBuf,
    store: StateFile,
}

impl StateFileTestCtx {
    fn new() -> Self {
        let tmp = tempfile::tempdir().unwrap();
        let data_dir = tmp.path().join("data");
        let store = StateFile::new(&data_dir);
        Self {
            _tmp: tmp,
            data_dir,
            store,
        }
    }

    fn dir_entries(&self) -> Vec<String> {
        let mut names = fs::read_dir(&self.data_dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect::<Vec<_>>();
        names.sort();
        names
    }
}

#[fixture]
fn ctx() -> StateFileTestCtx {
    StateFileTestCtx::new()
}

#[rstest]
fn load_without_save_returns_empty_state_and_creates_nothing(ctx: StateFileTestCtx) {
    let state = ctx.store.load().unwrap();

    assert_eq!(state, DiagramState::empty());
    assert_eq!(state.viewport, Some(Viewport::default()));
    assert!(!ctx.data_dir.exists());
    assert!(!ctx.store.exists().unwrap());
}

#[rstest]
fn save_creates_data_dir_lazily_and_reports_counts(ctx: StateFileTestCtx) {
    let result = ctx.store.save(&rag_pipeline()).unwrap();

    assert_eq!(
        result,
        SaveResult {
            node_count: 5,
            edge_count: 4
        }
    );
    assert!(ctx.data_dir.is_dir());
    assert!(ctx.store.exists().unwrap());
    assert_eq!(ctx.store.path(), ctx.data_dir.join(STATE_FILENAME));
}

#[rstest]
#[case::with_viewport(rag_pipeline())]
#[case::without_viewport(users_api())]
#[case::empty(DiagramState::empty())]
#[case::no_nodes_no_viewport(DiagramState::new(Vec::new(), Vec::new()))]
fn load_after_save_round_trips(ctx: StateFileTestCtx, #[case] state: DiagramState) {
    assert_eq!(ctx.store.load().unwrap(), DiagramState::empty());

    ctx.store.save(&state).unwrap();

    assert_eq!(ctx.store.load().unwrap(), state);
}

#[rstest]
fn stored_file_is_pretty_json_with_state_keys(ctx: StateFileTestCtx) {
    ctx.store.save(&users_api()).unwrap();

    let raw = fs::read_to_string(ctx.store.path()).unwrap();
    assert!(raw.starts_with("{\n  \"nodes\": ["));
    assert!(raw.ends_with("}\n"));

    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let mut keys = value.as_object().unwrap().keys().cloned().collect::<Vec<_>>();
    keys.sort();
    assert_eq!(keys, ["edges", "nodes", "viewport"]);
    assert_eq!(value["viewport"], serde_json::Value::Null);
    assert_eq!(value["nodes"][0]["data"]["nodeType"], "PostgreSQL");
    assert_eq!(value["edges"][0]["type"], "smoothstep");
}

#[rstest]
fn save_replaces_previous_state_wholesale(ctx: StateFileTestCtx) {
    ctx.store.save(&rag_pipeline()).unwrap();
    ctx.store.save(&users_api()).unwrap();

    let loaded = ctx.store.load().unwrap();
    assert_eq!(loaded, users_api());
    assert_eq!(loaded.viewport, None);
}

#[rstest]
fn save_leaves_no_temp_files_behind(ctx: StateFileTestCtx) {
    for _ in 0..3 {
        ctx.store.save(&rag_pipeline()).unwrap();
    }

    assert_eq!(ctx.dir_entries(), [STATE_FILENAME]);
}

#[rstest]
fn durable_writes_round_trip(ctx: StateFileTestCtx) {
    let store = ctx.store.clone().with_durability(WriteDurability::Durable);
    assert_eq!(store.durability(), WriteDurability::Durable);

    store.save(&rag_pipeline()).unwrap();

    assert_eq!(store.load().unwrap(), rag_pipeline());
    assert_eq!(ctx.dir_entries(), [STATE_FILENAME]);
}

#[rstest]
fn clear_removes_state_and_is_idempotent(ctx: StateFileTestCtx) {
    ctx.store.save(&users_api()).unwrap();

    ctx.store.clear().unwrap();
    assert!(!ctx.store.exists().unwrap());
    assert_eq!(ctx.store.load().unwrap(), DiagramState::empty());

    ctx.store.clear().unwrap();
    assert!(!ctx.store.exists().unwrap());
    assert_eq!(ctx.store.load().unwrap(), DiagramState::empty());
}

#[rstest]
fn clear_on_missing_data_dir_is_a_no_op(ctx: StateFileTestCtx) {
    ctx.store.clear().unwrap();
    assert!(!ctx.data_dir.exists());
}

#[rstest]
#[case::not_json("{ nodes: oops")]
#[case::wrong_shape(r#"{"nodes": {}, "edges": []}"#)]
#[case::missing_edges(r#"{"nodes": []}"#)]
#[case::empty_file("")]
fn malformed_state_is_a_read_error(ctx: StateFileTestCtx, #[case] contents: &str) {
    fs::create_dir_all(&ctx.data_dir).unwrap();
    fs::write(ctx.store.path(), contents).unwrap();

    let err = ctx.store.load().unwrap_err();
    assert_eq!(err.kind(), StoreErrorKind::Read);
    match err {
        StoreError::Malformed { path, .. } => assert_eq!(path, ctx.store.path()),
        other => panic!("expected Malformed, got: {other:?}"),
    }
}

#[rstest]
fn unwritable_location_is_a_write_error(ctx: StateFileTestCtx) {
    fs::create_dir_all(&ctx.data_dir).unwrap();
    let blocker = ctx.data_dir.join("blocker");
    fs::write(&blocker, b"not a directory").unwrap();
    let store = StateFile::new(blocker.join("nested"));

    let err = store.save(&users_api()).unwrap_err();
    assert_eq!(err.kind(), StoreErrorKind::Write);
    assert!(matches!(err, StoreError::Write { .. }), "got: {err:?}");
    assert!(err.to_string().contains("cannot write diagram state"));
}

#[rstest]
fn failed_save_keeps_previous_state(ctx: StateFileTestCtx) {
    ctx.store.save(&users_api()).unwrap();
    // Rooting a store at the existing state file makes directory creation fail.
    let store = StateFile::new(ctx.data_dir.join(STATE_FILENAME));

    assert!(store.save(&rag_pipeline()).is_err());
    assert_eq!(ctx.store.load().unwrap(), users_api());
}

#[cfg(unix)]
#[rstest]
fn save_refuses_to_follow_symlink(ctx: StateFileTestCtx) {
    fs::create_dir_all(&ctx.data_dir).unwrap();
    let target = ctx.data_dir.join("elsewhere.json");
    fs::write(&target, b"{}").unwrap();
    std::os::unix::fs::symlink(&target, ctx.store.path()).unwrap();

    let err = ctx.store.save(&users_api()).unwrap_err();
    assert!(matches!(err, StoreError::SymlinkRefused { .. }), "got: {err:?}");
    assert_eq!(fs::read(&target).unwrap(), b"{}");
}
