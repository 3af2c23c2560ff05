use rowan::TextSize;

use super::*;
use crate::syntax::SyntaxTree;
use crate::syntax::ast::{AstNode, SourceFile};

fn parse(source: &str) -> SyntaxTree {
    SyntaxTree::parse(source)
}

fn first_decl_node(tree: &SyntaxTree) -> SyntaxNode {
    SourceFile::cast(tree.root())
        .unwrap()
        .gen_decls()
        .next()
        .unwrap()
        .syntax()
        .clone()
}

#[test]
fn token_at_offset_prefers_identifiers() {
    let source = "package p\n\nvar x int\n";
    let tree = parse(source);
    let offset = source.find('x').unwrap();
    let token = token_at_offset(&tree.root(), TextSize::from(offset as u32)).unwrap();
    assert_eq!(token.kind(), SyntaxKind::Ident);
    assert_eq!(token.text(), "x");
}

#[test]
fn leading_doc_attaches_across_multiple_lines() {
    let source = "package p\n\n// Line one.\n// Line two.\nconst A = 1\n";
    let tree = parse(source);
    let decl = first_decl_node(&tree);
    assert_eq!(doc_text(&decl), "Line one.\nLine two.\n");
}

#[test]
fn blank_line_detaches_comment() {
    let source = "package p\n\n// Stray comment.\n\nconst A = 1\n";
    let tree = parse(source);
    let decl = first_decl_node(&tree);
    assert_eq!(doc_text(&decl), "");
}

#[test]
fn trailing_comment_of_previous_line_is_not_doc() {
    let source = "package p\n\nconst (\n\tA = 1 // A trailing\n\tB = 2\n)\n";
    let tree = parse(source);
    let decl = first_decl_node(&tree);
    let specs: Vec<SyntaxNode> = decl
        .children()
        .filter(|node| node.kind() == SyntaxKind::ValueSpec)
        .collect();
    assert_eq!(doc_text(&specs[1]), "");
    assert_eq!(trailing_comment_text(&specs[0]), "A trailing\n");
}

#[test]
fn block_comment_text_is_normalized() {
    let source = "package p\n\n/* Block doc. */\nconst A = 1\n";
    let tree = parse(source);
    let decl = first_decl_node(&tree);
    assert_eq!(doc_text(&decl), "Block doc.\n");
}

#[test]
fn line_col_is_one_based() {
    let source = "a\nbb\nccc\n";
    assert_eq!(line_col(source, 0), (1, 1));
    assert_eq!(line_col(source, 2), (2, 1));
    assert_eq!(line_col(source, 6), (3, 2));
}

#[test]
fn enclosing_chain_is_innermost_first() {
    let source = "package p\n\nfunc f() {\n\tx := 1\n\t_ = x\n}\n";
    let tree = parse(source);
    let offset = source.find("x := 1").unwrap();
    let token = token_at_offset(&tree.root(), TextSize::from(offset as u32)).unwrap();
    let chain = enclosing_chain(&token);
    assert_eq!(chain.first().map(|node| node.kind()), Some(SyntaxKind::AssignStmt));
    assert_eq!(chain.last().map(|node| node.kind()), Some(SyntaxKind::SourceFile));
}
