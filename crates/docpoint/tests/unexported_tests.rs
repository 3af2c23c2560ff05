mod common;

use common::{load_fixture, offset_after};
use docpoint::document_at;

#[test]
fn unexported_fields_elided_by_default() {
    let (ws, file, source) = load_fixture("idents/idents.go");
    let offset = offset_after(&source, "type HasUnexported", "HasUnexported");

    let doc = document_at(&ws, &file, offset, false).expect("query should succeed");
    assert!(!doc.decl.contains("notVisible"), "decl was {:?}", doc.decl);
    assert!(doc.decl.contains("Visible string"), "decl was {:?}", doc.decl);
    assert!(doc.decl.contains("// Has unexported fields."), "decl was {:?}", doc.decl);

    for line in doc.decl.lines().skip(1) {
        let member = line.trim_start();
        if member == "}" || member.starts_with("//") {
            continue;
        }
        assert!(
            member.chars().next().is_some_and(char::is_uppercase),
            "unexported member leaked into {:?}",
            doc.decl
        );
    }
}

#[test]
fn unexported_fields_shown_on_request() {
    let (ws, file, source) = load_fixture("idents/idents.go");
    let offset = offset_after(&source, "type HasUnexported", "HasUnexported");

    let doc = document_at(&ws, &file, offset, true).expect("query should succeed");
    assert!(doc.decl.contains("notVisible string"), "decl was {:?}", doc.decl);
    assert!(!doc.decl.contains("// Has unexported"), "decl was {:?}", doc.decl);
}

#[test]
fn unexported_interface_methods_elided() {
    let (ws, file, source) = load_fixture("idents/idents.go");
    let offset = offset_after(&source, "type Shape", "Shape");

    let doc = document_at(&ws, &file, offset, false).expect("query should succeed");
    assert!(doc.decl.contains("Area() float64"), "decl was {:?}", doc.decl);
    assert!(!doc.decl.contains("name() string"), "decl was {:?}", doc.decl);
    assert!(doc.decl.contains("// Has unexported methods."), "decl was {:?}", doc.decl);
}

#[test]
fn exported_embedded_fields_survive_elision() {
    let (ws, file, source) = load_fixture("idents/idents.go");
    let offset = offset_after(&source, "type Wrapper", "Wrapper");

    let doc = document_at(&ws, &file, offset, false).expect("query should succeed");
    assert!(doc.decl.contains("\tBase"), "decl was {:?}", doc.decl);
    assert!(doc.decl.contains("Label string"), "decl was {:?}", doc.decl);
    assert!(!doc.decl.contains("// Has unexported"), "decl was {:?}", doc.decl);
}
