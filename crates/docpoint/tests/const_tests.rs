mod common;

use common::{doc_at, load_fixture, offset_after, offset_of};

#[test]
fn iota_values_follow_spec_index() {
    let (ws, file, source) = load_fixture("consts/const.go");
    let cases = [("Zero = iota", "Zero", "0"), ("\tOne", "One", "1"), ("\tTwo", "Two", "2")];
    for (anchor, needle, value) in cases {
        let doc = doc_at(&ws, &file, offset_after(&source, anchor, needle));
        assert!(
            doc.doc.ends_with(&format!("Constant Value: {value}")),
            "{needle}: doc was {:?}",
            doc.doc
        );
    }
}

#[test]
fn const_value_appended_after_doc() {
    let (ws, file, source) = load_fixture("consts/const.go");
    let doc = doc_at(&ws, &file, offset_after(&source, "const Three", "Three"));
    assert_eq!(doc.doc, "Three is one more than two.\n\nConstant Value: 3");
    assert_eq!(doc.decl, "const Three = 3");
}

#[test]
fn non_integer_constant_keeps_exact_rational_value() {
    let (ws, file, source) = load_fixture("consts/const.go");
    let doc = doc_at(&ws, &file, offset_after(&source, "const Half", "Half"));
    assert!(doc.doc.ends_with("Constant Value: 3/2"), "doc was {:?}", doc.doc);
}

#[test]
fn shifted_constant_evaluates() {
    let (ws, file, source) = load_fixture("consts/const.go");
    let doc = doc_at(&ws, &file, offset_of(&source, "Shifted"));
    assert!(doc.doc.ends_with("Constant Value: 1024"), "doc was {:?}", doc.doc);
}

#[test]
fn const_use_site_matches_definition_site() {
    let (ws, file, source) = load_fixture("consts/const.go");
    let use_doc = doc_at(&ws, &file, offset_after(&source, "Two + Three", "Three"));
    let def_doc = doc_at(&ws, &file, offset_after(&source, "const Three", "Three"));
    assert_eq!(use_doc, def_doc);
}
