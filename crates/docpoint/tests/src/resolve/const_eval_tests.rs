use super::*;
use crate::resolve::scope::PackageBindings;
use crate::syntax::SyntaxTree;
use crate::syntax::ast::{AstNode, SourceFile};
use crate::vfs::FileId;

fn bind(source: &str) -> PackageBindings {
    let tree = SyntaxTree::parse(source);
    let file = FileId::from_path(std::path::Path::new("const.go"));
    let mut bindings = PackageBindings::default();
    let root = SourceFile::cast(tree.root()).unwrap();
    for decl in root.gen_decls() {
        bind_const_decl(&mut bindings, &file, &decl);
    }
    bindings
}

fn value_of<'a>(
    bindings: &'a PackageBindings,
    name: &str,
) -> &'a str {
    bindings
        .consts
        .get(name)
        .and_then(|binding| binding.value.as_deref())
        .unwrap_or_else(|| panic!("no value for {name}"))
}

#[test]
fn integer_literals() {
    let bindings = bind("package p\nconst A = 42\nconst B = 0x2A\nconst C = 0b101\n");
    assert_eq!(value_of(&bindings, "A"), "42");
    assert_eq!(value_of(&bindings, "B"), "42");
    assert_eq!(value_of(&bindings, "C"), "5");
}

#[test]
fn iota_expands_per_spec() {
    let bindings = bind("package p\nconst (\n\tA = iota\n\tB\n\tC\n)\n");
    assert_eq!(value_of(&bindings, "A"), "0");
    assert_eq!(value_of(&bindings, "B"), "1");
    assert_eq!(value_of(&bindings, "C"), "2");
}

#[test]
fn iota_in_expression_repeats() {
    let bindings = bind("package p\nconst (\n\tKB = 1 << (10 * (iota + 1))\n\tMB\n)\n");
    assert_eq!(value_of(&bindings, "KB"), "1024");
    assert_eq!(value_of(&bindings, "MB"), "1048576");
}

#[test]
fn floats_are_exact_rationals() {
    let bindings = bind("package p\nconst Half = 1.5\nconst Whole = 42.0\nconst Small = 25e-2\n");
    assert_eq!(value_of(&bindings, "Half"), "3/2");
    assert_eq!(value_of(&bindings, "Whole"), "42");
    assert_eq!(value_of(&bindings, "Small"), "1/4");
}

#[test]
fn strings_are_quoted() {
    let bindings = bind("package p\nconst S = \"hi\"\nconst T = S + \" there\"\n");
    assert_eq!(value_of(&bindings, "S"), "\"hi\"");
    assert_eq!(value_of(&bindings, "T"), "\"hi there\"");
}

#[test]
fn references_to_earlier_constants() {
    let bindings = bind("package p\nconst A = 2\nconst B = A * 3\nconst C = -B\n");
    assert_eq!(value_of(&bindings, "B"), "6");
    assert_eq!(value_of(&bindings, "C"), "-6");
}

#[test]
fn unevaluable_expression_falls_back_to_source_text() {
    let bindings = bind("package p\nconst X = unsafe.Sizeof(0)\n");
    assert_eq!(value_of(&bindings, "X"), "unsafe.Sizeof(0)");
}

#[test]
fn multi_name_specs() {
    let bindings = bind("package p\nconst A, B = 1, 2\n");
    assert_eq!(value_of(&bindings, "A"), "1");
    assert_eq!(value_of(&bindings, "B"), "2");
}
