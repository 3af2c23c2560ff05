use std::path::{Path, PathBuf};

use rowan::TextSize;

use super::*;
use crate::config::LoaderSettings;
use crate::loader::Workspace;
use crate::syntax::helpers::token_at_offset;
use crate::vfs::{FileId, Overlay};

fn fixture(rel: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/testdata").join(rel)
}

fn resolve_at(
    rel: &str,
    anchor: &str,
    needle: &str,
) -> Symbol {
    let path = fixture(rel);
    let ws = Workspace::load(&path, &Overlay::empty(), &LoaderSettings::default())
        .expect("fixture should load");
    let file = FileId::from_path(&path);
    let tree = ws.tree(&file).expect("tree");
    let source = tree.source().to_string();

    let start = source.find(anchor).expect("anchor");
    let offset = start + source[start..].find(needle).expect("needle");
    let token = token_at_offset(&tree.root(), TextSize::from(offset as u32)).expect("token");
    resolve(&ws, &file, &token).expect("resolution")
}

#[test]
fn use_site_resolves_to_definition() {
    let symbol = resolve_at("idents/idents.go", "return Message", "Message");
    assert_eq!(symbol.kind, SymbolKind::Variable);
    let def = symbol.def.expect("definition site");
    assert!(def.file.as_str().ends_with("idents.go"));
}

#[test]
fn definition_site_resolves_to_itself() {
    let symbol = resolve_at("idents/idents.go", "const Answer", "Answer");
    assert_eq!(symbol.kind, SymbolKind::Constant);
    assert_eq!(symbol.const_value.as_deref(), Some("42"));
}

#[test]
fn predeclared_identifier_signals_builtin_fallback() {
    let symbol = resolve_at("idents/idents.go", "append(list", "append");
    assert_eq!(symbol.kind, SymbolKind::Builtin);
    assert!(symbol.def.is_none());
    assert_eq!(symbol.pkg_path, "builtin");
}

#[test]
fn selector_through_import_alias() {
    let symbol = resolve_at("idents/idents.go", "g.Name()", "Name");
    assert_eq!(symbol.kind, SymbolKind::Function);
    assert_eq!(symbol.pkg_name, "greet");
}

#[test]
fn embedded_field_resolves_to_its_type() {
    let symbol = resolve_at("idents/idents.go", "type Wrapper struct {\n\tBase", "Base");
    assert_eq!(symbol.kind, SymbolKind::TypeName);
}

#[test]
fn promoted_member_resolves_through_embedding() {
    let symbol = resolve_at("idents/idents.go", "return w.ID", "ID");
    assert_eq!(symbol.kind, SymbolKind::StructField);
    assert_eq!(symbol.recv_type.as_deref(), Some("Base"));
}

#[test]
fn method_on_local_value() {
    let symbol = resolve_at("idents/idents.go", "words.Print()", "Print");
    assert_eq!(symbol.kind, SymbolKind::Function);
    assert_eq!(symbol.recv_type.as_deref(), Some("Foo"));
}

#[test]
fn interface_method_kind() {
    let symbol = resolve_at("idents/idents.go", "Area() float64", "Area");
    assert_eq!(symbol.kind, SymbolKind::InterfaceMethod);
}

#[test]
fn parameter_resolves_as_local_variable() {
    let symbol = resolve_at("idents/idents.go", "return w.ID", "w");
    assert_eq!(symbol.kind, SymbolKind::Variable);
    assert_eq!(symbol.type_text.as_deref(), Some("Wrapper"));
}

#[test]
fn unknown_identifier_is_an_error() {
    let path = fixture("idents/idents.go");
    let contents = "package idents\n\nvar X = mystery\n";
    let archive = format!("{}\n{}\n{}", path.display(), contents.len(), contents);
    let overlay = Overlay::from_archive(&mut archive.as_bytes()).unwrap();

    let ws = Workspace::load(&path, &overlay, &LoaderSettings::default()).unwrap();
    let file = FileId::from_path(&path);
    let tree = ws.tree(&file).unwrap();

    let offset = contents.find("mystery").unwrap();
    let token = token_at_offset(&tree.root(), TextSize::from(offset as u32)).unwrap();
    let err = resolve(&ws, &file, &token).unwrap_err();
    assert!(matches!(err, QueryError::UnresolvedIdentifier(ref name) if name == "mystery"));
}
