use super::*;

fn record(
    import: &str,
    decl: &str,
    doc: &str,
) -> Doc {
    Doc {
        name: "X".into(),
        import: import.into(),
        pkg: "p".into(),
        decl: decl.into(),
        doc: doc.into(),
        pos: String::new(),
    }
}

#[test]
fn empty_doc_prints_placeholder() {
    let text = record("", "var X int", "").to_text(80);
    assert_eq!(text, "var X int\n\nUndocumented.\n");
}

#[test]
fn import_clause_printed_when_present() {
    let text = record("lib/math", "const Pi = 3", "Pi doc.\n").to_text(80);
    assert!(text.starts_with("import \"lib/math\"\n\n"), "text was {text:?}");
}

#[test]
fn long_paragraphs_wrap_at_line_length() {
    let doc = "word ".repeat(30);
    let text = record("", "var X int", &doc).to_text(20);
    for line in text.lines() {
        assert!(line.chars().count() <= 20, "line too long: {line:?}");
    }
}

#[test]
fn preformatted_lines_keep_their_shape() {
    let doc = "Intro text.\n\n\tslice = append(slice, elem)\n\tslice = x\n";
    let text = record("", "var X int", doc).to_text(80);
    assert!(
        text.contains("    slice = append(slice, elem)\n    slice = x\n"),
        "text was {text:?}"
    );
}

#[test]
fn serializes_with_lowercase_keys() {
    let json = serde_json::to_string(&record("lib/math", "const Pi = 3", "")).unwrap();
    for key in ["\"name\"", "\"import\"", "\"pkg\"", "\"decl\"", "\"doc\"", "\"pos\""] {
        assert!(json.contains(key), "missing {key} in {json}");
    }
}
