//! Documentation extraction from the defining occurrence's enclosing chain.

use crate::syntax::cst::{SyntaxNode, SyntaxToken};
use crate::syntax::helpers;
use crate::syntax::kind::SyntaxKind;

/// What a single walk over the defining chain produced: the nearest
/// declaration node, the spec inside a grouped declaration, and the
/// extracted documentation text.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub decl_node: Option<SyntaxNode>,
    pub spec_node: Option<SyntaxNode>,
    /// The definition sits in a plain statement (a `:=` binding), so there
    /// is no declaration node to render.
    pub statement_context: bool,
    pub doc: String,
}

/// Walk the enclosing chain of a defining identifier once, recording both
/// the nearest declaration node and the nearest documentation-bearing
/// node, then apply the doc/comment precedence policy.
pub fn extract(def_token: &SyntaxToken) -> Extraction {
    let chain = helpers::enclosing_chain(def_token);

    let mut decl_node = None;
    let mut spec_node = None;
    let mut statement_context = false;

    for node in &chain {
        match node.kind() {
            SyntaxKind::ValueSpec | SyntaxKind::TypeSpec => {
                if spec_node.is_none() {
                    spec_node = Some(node.clone());
                }
            },
            SyntaxKind::Field | SyntaxKind::FuncDecl | SyntaxKind::GenDecl => {
                decl_node = Some(node.clone());
                break;
            },
            SyntaxKind::AssignStmt => {
                statement_context = true;
                break;
            },
            _ => {},
        }
    }

    let doc = match &decl_node {
        Some(node) if node.kind() == SyntaxKind::FuncDecl => helpers::doc_text(node),
        Some(node) if node.kind() == SyntaxKind::Field => {
            // The doc comment wins over a trailing same-line comment.
            let doc = helpers::doc_text(node);
            if doc.is_empty() {
                helpers::trailing_comment_text(node)
            } else {
                doc
            }
        },
        Some(node) if node.kind() == SyntaxKind::GenDecl => {
            let mut doc = match &spec_node {
                Some(spec) => {
                    let own = helpers::doc_text(spec);
                    if own.is_empty() {
                        helpers::trailing_comment_text(spec)
                    } else {
                        own
                    }
                },
                None => String::new(),
            };
            // A bare spec falls back to the enclosing group's doc.
            if doc.is_empty() {
                doc = helpers::doc_text(node);
            }
            doc
        },
        _ => String::new(),
    };

    Extraction {
        decl_node,
        spec_node,
        statement_context,
        doc,
    }
}
