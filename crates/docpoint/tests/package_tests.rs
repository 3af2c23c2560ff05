mod common;

use common::{doc_at, load_fixture, offset_after};

#[test]
fn aliased_import_returns_canonical_path() {
    let (ws, file, source) = load_fixture("idents/idents.go");
    // Query the alias at the import spec.
    let doc = doc_at(&ws, &file, offset_after(&source, "g \"example.com/idents/greet\"", "g"));
    assert_eq!(doc.import, "example.com/idents/greet");
    assert_eq!(doc.name, "greet");
    assert_eq!(doc.decl, "package greet");
    assert_eq!(doc.doc, "Package greet provides greetings.\n");
}

#[test]
fn import_path_string_resolves_to_package() {
    let (ws, file, source) = load_fixture("idents/idents.go");
    let offset = offset_after(&source, "example.com/idents/greet", "greet");
    let doc = doc_at(&ws, &file, offset);
    assert_eq!(doc.import, "example.com/idents/greet");
    assert_eq!(doc.pkg, "greet");
}

#[test]
fn qualifier_use_resolves_to_package() {
    let (ws, file, source) = load_fixture("idents/idents.go");
    let doc = doc_at(&ws, &file, offset_after(&source, "g.Greeting", "g"));
    assert_eq!(doc.import, "example.com/idents/greet");
    assert_eq!(doc.decl, "package greet");
}

#[test]
fn package_clause_yields_package_doc() {
    let (ws, file, source) = load_fixture("idents/idents.go");
    let doc = doc_at(&ws, &file, offset_after(&source, "package idents", "idents"));
    assert_eq!(doc.name, "idents");
    assert_eq!(doc.doc, "Package idents exercises identifier resolution.\n");
}

#[test]
fn qualified_const_resolves_across_packages() {
    let (ws, file, source) = load_fixture("idents/idents.go");
    let doc = doc_at(&ws, &file, offset_after(&source, "g.Greeting", "Greeting"));
    assert_eq!(doc.doc, "Greeting is the canonical greeting.\n\nConstant Value: \"hello\"");
    assert_eq!(doc.decl, "const Greeting = \"hello\"");
    assert_eq!(doc.pkg, "greet");
}

// ──────────────────────────── vendoring ─────────────────────────────────

#[test]
fn vendored_identifier_strips_vendor_segments() {
    let (ws, file, source) = load_fixture("prog/main.go");
    let doc = doc_at(&ws, &file, offset_after(&source, "vp.Hello()", "Hello"));
    assert_eq!(doc.import, "github.com/zmb3/vp");
    assert_eq!(doc.doc, "Hello says hello from the vendored package.\n");
    assert_eq!(doc.pkg, "vp");
}

#[test]
fn vendored_import_spec_strips_vendor_segments() {
    let (ws, file, source) = load_fixture("prog/main.go");
    let doc = doc_at(&ws, &file, offset_after(&source, "\"github.com/zmb3/vp\"", "zmb3"));
    assert_eq!(doc.import, "github.com/zmb3/vp");
    assert_eq!(doc.doc, "Package vp is a vendored dependency.\n");
}

#[test]
fn query_inside_vendored_file_strips_vendor_segments() {
    let (ws, file, source) = load_fixture("prog/vendor/github.com/zmb3/vp/vp.go");
    let doc = doc_at(&ws, &file, offset_after(&source, "func Hello", "Hello"));
    assert_eq!(doc.import, "github.com/zmb3/vp");
}
