use expect_test::expect;
use rowan::TextSize;

use super::*;
use crate::doc::extract;
use crate::syntax::SyntaxTree;
use crate::syntax::helpers::token_at_offset;

/// Render the declaration of the identifier at the `«` marker.
fn render_at_marker(
    marked_source: &str,
    show_unexported: bool,
) -> String {
    let offset = marked_source.find('«').expect("marker in source");
    let source = marked_source.replace('«', "");

    let tree = SyntaxTree::parse(&source);
    let token = token_at_offset(&tree.root(), TextSize::from(offset as u32)).expect("token");
    let extraction = extract(&token);

    let symbol = Symbol {
        name: token.text().to_string(),
        kind: SymbolKind::TypeName,
        pkg_path: "example.com/p".into(),
        pkg_name: "p".into(),
        def: Some(crate::resolve::scope::DefSite {
            file: crate::vfs::FileId::from_path(std::path::Path::new("p.go")),
            range: token.text_range(),
        }),
        const_value: None,
        type_text: None,
        recv_type: None,
    };
    render_decl(&symbol, &extraction, show_unexported)
}

#[test]
fn function_signature_drops_doc_and_body() {
    let rendered = render_at_marker(
        "package p\n\n// Doc dropped.\nfunc «Greet(name string) (string, error) {\n\treturn name, nil\n}\n",
        false,
    );
    expect!["func Greet(name string) (string, error)"].assert_eq(&rendered);
}

#[test]
fn method_signature_keeps_receiver() {
    let rendered = render_at_marker(
        "package p\n\nfunc (g *Greeter) «SayHello() string { return \"\" }\n",
        false,
    );
    expect!["func (g *Greeter) SayHello() string"].assert_eq(&rendered);
}

#[test]
fn grouped_decl_renders_single_spec_without_parens() {
    let rendered = render_at_marker(
        "package p\n\nconst (\n\tA = 1\n\t«B = 2\n\tC = 3\n)\n",
        false,
    );
    expect!["const B = 2"].assert_eq(&rendered);
}

#[test]
fn struct_elides_unexported_fields() {
    let rendered = render_at_marker(
        "package p\n\ntype «Record struct {\n\tName string // visible\n\tValue int\n\thidden bool\n\tcount, Total int\n}\n",
        false,
    );
    expect![[r#"
        type Record struct {
        	Name string
        	Value int
        	// Has unexported fields.
        }"#]]
    .assert_eq(&rendered);
}

#[test]
fn struct_keeps_unexported_fields_on_request() {
    let rendered = render_at_marker(
        "package p\n\ntype «Record struct {\n\tName string\n\thidden bool\n}\n",
        true,
    );
    expect![[r#"
        type Record struct {
        	Name string
        	hidden bool
        }"#]]
    .assert_eq(&rendered);
}

#[test]
fn mixed_name_list_is_elided_entirely() {
    // A single unexported name removes the whole field from rendering.
    let rendered = render_at_marker(
        "package p\n\ntype «Pair struct {\n\tLeft, right int\n}\n",
        false,
    );
    expect![[r#"
        type Pair struct {
        	// Has unexported fields.
        }"#]]
    .assert_eq(&rendered);
}

#[test]
fn interface_elides_unexported_methods() {
    let rendered = render_at_marker(
        "package p\n\ntype «Walker interface {\n\tWalk(dist int) error\n\trest()\n}\n",
        false,
    );
    expect![[r#"
        type Walker interface {
        	Walk(dist int) error
        	// Has unexported methods.
        }"#]]
    .assert_eq(&rendered);
}

#[test]
fn embedded_error_always_retained() {
    let rendered = render_at_marker(
        "package p\n\ntype «Failer interface {\n\terror\n\tcleanup()\n}\n",
        false,
    );
    expect![[r#"
        type Failer interface {
        	error
        	// Has unexported methods.
        }"#]]
    .assert_eq(&rendered);
}

#[test]
fn exported_embedded_field_retained() {
    let rendered = render_at_marker(
        "package p\n\ntype «Outer struct {\n\tInner\n\tsecret int\n}\n",
        false,
    );
    expect![[r#"
        type Outer struct {
        	Inner
        	// Has unexported fields.
        }"#]]
    .assert_eq(&rendered);
}

#[test]
fn empty_struct_renders_inline() {
    let rendered = render_at_marker("package p\n\ntype «Unit struct{}\n", false);
    expect!["type Unit struct{}"].assert_eq(&rendered);
}

#[test]
fn plain_type_spec_renders_one_line() {
    let rendered = render_at_marker("package p\n\ntype «Dur int64\n", false);
    expect!["type Dur int64"].assert_eq(&rendered);
}

#[test]
fn vendor_segments_are_stripped() {
    assert_eq!(strip_vendor("github.com/me/prog/vendor/github.com/dep/pkg"), "github.com/dep/pkg");
    assert_eq!(strip_vendor("vendor/github.com/dep/pkg"), "github.com/dep/pkg");
    assert_eq!(strip_vendor("github.com/dep/pkg"), "github.com/dep/pkg");
}
