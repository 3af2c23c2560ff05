#![allow(dead_code)]

use std::path::{Path, PathBuf};

use docpoint::config::LoaderSettings;
use docpoint::vfs::{FileId, Overlay};
use docpoint::{Doc, Workspace, document_at};

pub fn fixture_path(rel: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/testdata").join(rel)
}

pub fn load_fixture(rel: &str) -> (Workspace, FileId, String) {
    load_fixture_with_overlay(rel, &Overlay::empty())
}

pub fn load_fixture_with_overlay(
    rel: &str,
    overlay: &Overlay,
) -> (Workspace, FileId, String) {
    let path = fixture_path(rel);
    let settings = LoaderSettings {
        source_roots: Vec::new(),
        include_tests: false,
    };
    let workspace =
        Workspace::load(&path, overlay, &settings).expect("fixture workspace should load");
    let file = FileId::from_path(&path);
    let source = workspace
        .tree(&file)
        .expect("fixture file should be parsed")
        .source()
        .to_string();
    (workspace, file, source)
}

/// Byte offset of the first occurrence of `needle` after `anchor`.
pub fn offset_after(
    source: &str,
    anchor: &str,
    needle: &str,
) -> usize {
    let start = source
        .find(anchor)
        .unwrap_or_else(|| panic!("anchor {anchor:?} not found in fixture"));
    start
        + source[start..]
            .find(needle)
            .unwrap_or_else(|| panic!("needle {needle:?} not found after {anchor:?}"))
}

pub fn offset_of(
    source: &str,
    needle: &str,
) -> usize {
    offset_after(source, needle, needle)
}

pub fn doc_at(
    workspace: &Workspace,
    file: &FileId,
    offset: usize,
) -> Doc {
    document_at(workspace, file, offset, false)
        .unwrap_or_else(|err| panic!("query at offset {offset} failed: {err}"))
}
