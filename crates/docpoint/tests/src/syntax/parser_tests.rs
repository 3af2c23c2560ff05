use crate::syntax::SyntaxTree;
use crate::syntax::ast::{AstNode, SourceFile};
use crate::syntax::kind::SyntaxKind;

fn parse(source: &str) -> SourceFile {
    let tree = SyntaxTree::parse(source);
    SourceFile::cast(tree.root()).expect("root should be a source file")
}

#[test]
fn package_clause_and_name() {
    let file = parse("package main\n");
    assert_eq!(file.package_name().as_deref(), Some("main"));
}

#[test]
fn lossless_reparse() {
    let source = "package p\n\n// doc\nconst A = 1 // trailing\n\nfunc f(a, b int) {}\n";
    let tree = SyntaxTree::parse(source);
    assert_eq!(tree.root().text().to_string(), source);
}

#[test]
fn grouped_const_specs() {
    let file = parse("package p\n\nconst (\n\tA = iota\n\tB\n\tC\n)\n");
    let decl = file.gen_decls().next().expect("one declaration");
    assert_eq!(decl.keyword(), Some(SyntaxKind::KwConst));
    assert!(decl.is_grouped());
    let names: Vec<String> = decl
        .value_specs()
        .flat_map(|spec| spec.names())
        .map(|token| token.text().to_string())
        .collect();
    assert_eq!(names, ["A", "B", "C"]);
}

#[test]
fn import_specs_with_alias() {
    let file = parse("package p\n\nimport (\n\tm \"lib/math\"\n\t\"fmt\"\n)\n");
    let specs: Vec<_> = file.import_specs().collect();
    assert_eq!(specs.len(), 2);
    assert_eq!(specs[0].alias_token().map(|token| token.text().to_string()), Some("m".into()));
    assert_eq!(specs[0].import_path(), Some("lib/math".into()));
    assert!(specs[1].alias_token().is_none());
    assert_eq!(specs[1].import_path(), Some("fmt".into()));
}

#[test]
fn func_decl_with_receiver() {
    let file = parse("package p\n\nfunc (g *Greeter) SayHello(name string) string { return name }\n");
    let func = file.func_decls().next().expect("one function");
    assert_eq!(func.name_token().map(|token| token.text().to_string()), Some("SayHello".into()));
    let receiver = func.receiver().expect("receiver");
    assert_eq!(receiver.name_token().map(|token| token.text().to_string()), Some("g".into()));
    assert_eq!(receiver.type_name(), Some("Greeter".into()));
    assert!(func.block().is_some());
}

#[test]
fn struct_fields_and_embedding() {
    let source = "package p\n\ntype T struct {\n\tA, b int\n\tEmbedded\n\t*Ptr\n\tpkg.Qual\n\tC string `tag`\n}\n";
    let file = parse(source);
    let decl = file.gen_decls().next().expect("one declaration");
    let spec = decl.type_specs().next().expect("type spec");
    let strukt = crate::syntax::ast::StructType::cast(spec.type_node().expect("struct type"))
        .expect("struct");
    let fields: Vec<_> = strukt.fields().collect();
    assert_eq!(fields.len(), 5);

    let names: Vec<String> = fields[0]
        .name_tokens()
        .iter()
        .map(|token| token.text().to_string())
        .collect();
    assert_eq!(names, ["A", "b"]);
    assert!(!fields[0].is_embedded());

    assert!(fields[1].is_embedded());
    assert_eq!(fields[1].embedded_name(), Some((None, "Embedded".into())));

    assert!(fields[2].is_embedded());
    assert_eq!(fields[2].embedded_name(), Some((None, "Ptr".into())));

    assert!(fields[3].is_embedded());
    assert_eq!(fields[3].embedded_name(), Some((Some("pkg".into()), "Qual".into())));

    assert!(!fields[4].is_embedded());
    assert!(fields[4].tag_token().is_some());
}

#[test]
fn interface_members() {
    let source = "package p\n\ntype I interface {\n\tArea() float64\n\terror\n\tio.Reader\n}\n";
    let file = parse(source);
    let spec = file.gen_decls().next().unwrap().type_specs().next().unwrap();
    let iface = crate::syntax::ast::InterfaceType::cast(spec.type_node().unwrap()).unwrap();
    let members: Vec<_> = iface.members().collect();
    assert_eq!(members.len(), 3);
    assert!(members[0].param_list().is_some());
    assert!(members[1].is_embedded());
    assert_eq!(members[1].embedded_name(), Some((None, "error".into())));
    assert_eq!(members[2].embedded_name(), Some((Some("io".into()), "Reader".into())));
}

#[test]
fn body_statements_have_nodes() {
    let source = "package p\n\nfunc f() {\n\tx := compute(1, 2)\n\tx = x + 1\n\tif x > 0 {\n\t\tuse(x)\n\t}\n}\n";
    let tree = SyntaxTree::parse(source);
    let root = tree.root();
    let kinds: Vec<SyntaxKind> = root
        .descendants()
        .map(|node| node.kind())
        .collect();
    assert!(kinds.contains(&SyntaxKind::AssignStmt));
    assert!(kinds.contains(&SyntaxKind::CallExpr));
    assert!(kinds.contains(&SyntaxKind::IfStmt));
    assert!(kinds.contains(&SyntaxKind::BinaryExpr));
}

#[test]
fn unknown_constructs_do_not_break_following_decls() {
    let source = "package p\n\n@@ not go at all @@\n\n// D doc\nconst D = 1\n";
    let file = parse(source);
    let decl = file.gen_decls().next().expect("const survives garbage");
    assert_eq!(decl.keyword(), Some(SyntaxKind::KwConst));
}

#[test]
fn composite_literal_with_keys() {
    let source = "package p\n\nvar v = T{A: 1, B: 2}\n";
    let tree = SyntaxTree::parse(source);
    let kinds: Vec<SyntaxKind> = tree.root().descendants().map(|node| node.kind()).collect();
    assert!(kinds.contains(&SyntaxKind::CompositeLit));
    assert!(kinds.contains(&SyntaxKind::KeyValueExpr));
}
