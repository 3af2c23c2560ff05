//! The query engine: position → symbol → documentation record.

use rowan::TextSize;
use tracing::debug;

use crate::builtins;
use crate::doc::{Doc, extract, render_decl, strip_vendor};
use crate::error::QueryError;
use crate::loader::Workspace;
use crate::resolve::{self, Symbol, SymbolKind};
use crate::syntax::helpers;
use crate::syntax::kind::SyntaxKind;
use crate::vfs::FileId;

/// Produce the documentation record for the symbol at `offset` in `file`.
///
/// The query is synchronous and stateless: the same workspace and position
/// always yield an identical record.
pub fn document_at(
    ws: &Workspace,
    file: &FileId,
    offset: usize,
    show_unexported: bool,
) -> Result<Doc, QueryError> {
    let tree = ws.tree(file).ok_or_else(|| QueryError::FileNotFound(file.as_str().into()))?;
    let source_len = tree.source().len();
    if offset > source_len {
        return Err(QueryError::OutOfRange {
            file: file.as_str().into(),
            offset,
            len: source_len,
        });
    }

    let root = tree.root();
    let token = helpers::token_at_offset(&root, TextSize::from(offset as u32))
        .ok_or_else(|| QueryError::OutOfRange {
            file: file.as_str().into(),
            offset,
            len: source_len,
        })?;

    if token.kind() != SyntaxKind::Ident
        && token
            .parent()
            .and_then(|parent| helpers::find_ancestor(parent, SyntaxKind::ImportSpec))
            .is_none()
    {
        return Err(QueryError::NoDocumentationFound(token.text().to_string()));
    }

    let symbol = resolve::resolve(ws, file, &token)?;
    debug!(name = %symbol.name, kind = ?symbol.kind, "resolved symbol");

    match symbol.kind {
        SymbolKind::Package => package_doc(ws, &symbol),
        SymbolKind::Builtin => builtin_doc(&symbol),
        _ => symbol_doc(ws, &symbol, show_unexported),
    }
}

/// Package-level documentation for imports and package clauses.
fn package_doc(
    ws: &Workspace,
    symbol: &Symbol,
) -> Result<Doc, QueryError> {
    let package = ws
        .package(&symbol.pkg_path)
        .ok_or_else(|| QueryError::NoDocumentationFound(symbol.name.clone()))?;

    Ok(Doc {
        name: package.name.clone(),
        import: strip_vendor(&package.path).to_string(),
        pkg: package.name.clone(),
        decl: format!("package {}", package.name),
        doc: package.doc.clone(),
        pos: String::new(),
    })
}

/// Predeclared identifiers resolve through the builtin catalog.
fn builtin_doc(symbol: &Symbol) -> Result<Doc, QueryError> {
    let (doc, decl) =
        builtins::lookup(&symbol.name).ok_or_else(|| {
            QueryError::NoDocumentationFound(symbol.name.clone())
        })?;

    Ok(Doc {
        name: symbol.name.clone(),
        import: "builtin".into(),
        pkg: String::new(),
        decl,
        doc,
        pos: String::new(),
    })
}

fn symbol_doc(
    ws: &Workspace,
    symbol: &Symbol,
    show_unexported: bool,
) -> Result<Doc, QueryError> {
    let def = symbol
        .def
        .as_ref()
        .ok_or_else(|| QueryError::NoDocumentationFound(symbol.name.clone()))?;

    let def_tree = ws
        .tree(&def.file)
        .ok_or_else(|| QueryError::NoDocumentationFound(symbol.name.clone()))?;
    let def_token = helpers::token_at_offset(&def_tree.root(), def.range.start())
        .ok_or_else(|| QueryError::NoDocumentationFound(symbol.name.clone()))?;

    let extraction = extract(&def_token);
    let decl = render_decl(symbol, &extraction, show_unexported);
    let mut doc = extraction.doc;

    if symbol.kind == SymbolKind::Constant
        && let Some(value) = &symbol.const_value
    {
        doc.push_str(&format!("\nConstant Value: {value}"));
    }

    let (line, col) = helpers::line_col(def_tree.source(), def.range.start().into());

    Ok(Doc {
        name: symbol.name.clone(),
        import: strip_vendor(&symbol.pkg_path).to_string(),
        pkg: symbol.pkg_name.clone(),
        decl,
        doc,
        pos: format!("{}:{line}:{col}", def.file),
    })
}
