use std::path::{Path, PathBuf};

use super::*;
use crate::config::LoaderSettings;
use crate::vfs::Overlay;

fn testdata(rel: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/testdata").join(rel)
}

fn load(rel: &str) -> Workspace {
    Workspace::load(&testdata(rel), &Overlay::empty(), &LoaderSettings::default())
        .expect("fixture should load")
}

#[test]
fn module_path_from_go_mod() {
    let ws = load("idents/idents.go");
    let pkg = ws.package("example.com/idents").expect("root package");
    assert_eq!(pkg.name, "idents");
    assert!(pkg.files.len() == 1, "files: {:?}", pkg.files);
}

#[test]
fn imports_load_transitively() {
    let ws = load("idents/idents.go");
    let greet = ws.package("example.com/idents/greet").expect("imported package");
    assert_eq!(greet.name, "greet");
    assert_eq!(greet.doc, "Package greet provides greetings.\n");
    assert!(greet.bindings.funcs.contains_key("Name"));
    assert!(greet.bindings.consts.contains_key("Greeting"));
}

#[test]
fn import_alias_maps_to_package_key() {
    let ws = load("idents/idents.go");
    let pkg = ws.package("example.com/idents").unwrap();
    let imports = pkg.imports.values().next().expect("file imports");
    assert_eq!(
        imports.by_name.get("g").map(String::as_str),
        Some("example.com/idents/greet")
    );
    assert_eq!(
        imports.by_path.get("example.com/idents/greet").map(String::as_str),
        Some("example.com/idents/greet")
    );
}

#[test]
fn vendored_package_keeps_physical_path() {
    let ws = load("prog/main.go");
    let key = "example.com/prog/vendor/github.com/zmb3/vp";
    let vp = ws.package(key).expect("vendored package");
    assert_eq!(vp.name, "vp");
    assert!(vp.bindings.funcs.contains_key("Hello"));
}

#[test]
fn package_bindings_cover_declarations() {
    let ws = load("idents/idents.go");
    let pkg = ws.package("example.com/idents").unwrap();
    assert!(pkg.bindings.funcs.contains_key("SayHello"));
    assert!(pkg.bindings.vars.contains_key("Message"));
    assert!(pkg.bindings.consts.contains_key("Answer"));
    assert!(pkg.bindings.types.contains_key("Foo"));
    let methods = pkg.bindings.methods_of("Foo");
    assert!(methods.iter().any(|method| method.name == "Print"));
}

#[test]
fn missing_file_fails() {
    let err = Workspace::load(
        &testdata("idents/nope.go"),
        &Overlay::empty(),
        &LoaderSettings::default(),
    )
    .unwrap_err();
    assert!(err.to_string().contains("cannot read"), "error was {err}");
}

#[test]
fn test_files_excluded_unless_requested() {
    let ws = load("idents/idents.go");
    let pkg = ws.package("example.com/idents").unwrap();
    assert!(
        pkg.files
            .iter()
            .all(|file| !file.as_str().ends_with("_test.go"))
    );
}
