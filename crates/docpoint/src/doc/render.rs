//! Declaration rendering: a source-like, single-declaration textual form
//! of the resolved entity, stripped of documentation and bodies.

use crate::doc::extract::Extraction;
use crate::resolve::scope::is_exported;
use crate::resolve::{Symbol, SymbolKind, collapse_text};
use crate::syntax::ast::{AstNode, Field, GenDecl, InterfaceType, StructType, TypeSpec};
use crate::syntax::cst::{SyntaxElement, SyntaxNode};
use crate::syntax::kind::SyntaxKind;

/// Render the declaration of a resolved symbol. Never fails: unsupported
/// node shapes degrade to the symbol's canonical string form.
pub fn render_decl(
    symbol: &Symbol,
    extraction: &Extraction,
    show_unexported: bool,
) -> String {
    let Some(decl_node) = &extraction.decl_node else {
        return canonical_string(symbol);
    };
    if extraction.statement_context {
        return canonical_string(symbol);
    }

    match decl_node.kind() {
        SyntaxKind::FuncDecl => render_func_signature(decl_node),
        SyntaxKind::GenDecl => {
            match render_gen_decl(decl_node, extraction, symbol, show_unexported) {
                Some(text) => text,
                None => canonical_string(symbol),
            }
        },
        SyntaxKind::Field => match Field::cast(decl_node.clone()) {
            Some(field) => render_field(symbol, &field),
            None => canonical_string(symbol),
        },
        _ => canonical_string(symbol),
    }
}

/// Fields and interface methods render via the symbol's canonical form,
/// with the type or signature read off the defining field node.
fn render_field(
    symbol: &Symbol,
    field: &Field,
) -> String {
    let type_text = field
        .type_node()
        .map(|node| collapse_text(&node))
        .or_else(|| symbol.type_text.clone());

    match symbol.kind {
        SymbolKind::StructField => match type_text {
            Some(type_text) => format!("field {} {type_text}", symbol.name),
            None => format!("field {}", symbol.name),
        },
        SymbolKind::InterfaceMethod | SymbolKind::Function => {
            let mut out = method_string(symbol);
            if let Some(params) = field.param_list() {
                out.push_str(&collapse_text(params.syntax()));
            }
            if let Some(results) = field.result_list() {
                out.push(' ');
                out.push_str(&collapse_text(results.syntax()));
            }
            out
        },
        _ => match type_text {
            Some(type_text) => format!("var {} {type_text}", symbol.name),
            None => format!("var {}", symbol.name),
        },
    }
}

/// The function signature only: doc comment and body dropped.
fn render_func_signature(decl: &SyntaxNode) -> String {
    let mut out = String::new();
    let mut pending_space = false;
    for element in decl.children_with_tokens() {
        match element {
            SyntaxElement::Node(node) if node.kind() == SyntaxKind::Block => break,
            SyntaxElement::Node(node) => {
                let text = collapse_text(&node);
                if !text.is_empty() {
                    if pending_space {
                        out.push(' ');
                    }
                    pending_space = false;
                    out.push_str(&text);
                }
            },
            SyntaxElement::Token(token) => match token.kind() {
                SyntaxKind::Whitespace | SyntaxKind::Newline => {
                    if !out.is_empty() {
                        pending_space = true;
                    }
                },
                SyntaxKind::Comment => {},
                _ => {
                    if pending_space {
                        out.push(' ');
                    }
                    pending_space = false;
                    out.push_str(token.text());
                },
            },
        }
    }
    out.trim().to_string()
}

/// One spec of a general declaration, rendered standalone: the group's
/// parentheses are dropped so the text reads as a single declaration.
fn render_gen_decl(
    decl_node: &SyntaxNode,
    extraction: &Extraction,
    symbol: &Symbol,
    show_unexported: bool,
) -> Option<String> {
    let decl = GenDecl::cast(decl_node.clone())?;
    let keyword = match decl.keyword()? {
        SyntaxKind::KwConst => "const",
        SyntaxKind::KwVar => "var",
        SyntaxKind::KwType => "type",
        SyntaxKind::KwImport => "import",
        _ => return None,
    };

    let spec = extraction
        .spec_node
        .clone()
        .or_else(|| {
            symbol
                .def
                .as_ref()
                .and_then(|def| decl.spec_at(def.range.start()))
        })?;

    match spec.kind() {
        SyntaxKind::TypeSpec => {
            let type_spec = TypeSpec::cast(spec)?;
            Some(render_type_spec(&type_spec, show_unexported))
        },
        SyntaxKind::ValueSpec => Some(format!("{keyword} {}", collapse_text(&spec))),
        _ => None,
    }
}

fn render_type_spec(
    spec: &TypeSpec,
    show_unexported: bool,
) -> String {
    let name = spec
        .name_token()
        .map(|token| token.text().to_string())
        .unwrap_or_default();

    let Some(type_node) = spec.type_node() else {
        return format!("type {}", collapse_text(spec.syntax()));
    };

    if let Some(strukt) = StructType::cast(type_node.clone()) {
        let fields: Vec<Field> = strukt.fields().collect();
        return render_members(&name, "struct", &fields, false, show_unexported);
    }
    if let Some(iface) = InterfaceType::cast(type_node.clone()) {
        let members: Vec<Field> = iface.members().collect();
        return render_members(&name, "interface", &members, true, show_unexported);
    }

    format!("type {}", collapse_text(spec.syntax()))
}

/// Struct or interface body with unexported members elided. A contiguous
/// run of elided members collapses into one synthetic placeholder line.
fn render_members(
    name: &str,
    shape: &str,
    members: &[Field],
    is_interface: bool,
    show_unexported: bool,
) -> String {
    let mut kept: Vec<String> = Vec::new();
    let mut trimmed = false;

    for member in members {
        if show_unexported || keep_member(member, is_interface) {
            kept.push(collapse_text(member.syntax()));
        } else {
            trimmed = true;
        }
    }

    if kept.is_empty() && !trimmed {
        return format!("type {name} {shape}{{}}");
    }

    let mut out = format!("type {name} {shape} {{");
    for line in &kept {
        out.push_str("\n\t");
        out.push_str(line);
    }
    if trimmed {
        let what = if is_interface { "methods" } else { "fields" };
        out.push_str(&format!("\n\t// Has unexported {what}."));
    }
    out.push_str("\n}");
    out
}

/// The elision policy of the documentation tooling: a member survives only
/// when every name in its name list is exported. Embedded fields go by
/// their type name; the predeclared error interface embedded in an
/// interface is always shown.
fn keep_member(
    member: &Field,
    is_interface: bool,
) -> bool {
    if member.is_embedded() {
        let Some((qualifier, name)) = member.embedded_name() else {
            return true;
        };
        if is_interface && qualifier.is_none() && name == "error" {
            return true;
        }
        return is_exported(&name);
    }

    let names = member.name_tokens();
    if names.is_empty() {
        return true;
    }
    names.iter().all(|token| is_exported(token.text()))
}

/// The symbol's canonical string form, used when no declaration node can
/// be rendered: locals, parameters, struct fields and interface methods.
pub fn canonical_string(symbol: &Symbol) -> String {
    match symbol.kind {
        SymbolKind::Variable => match &symbol.type_text {
            Some(type_text) => format!("var {} {type_text}", symbol.name),
            None => format!("var {}", symbol.name),
        },
        SymbolKind::Constant => match &symbol.type_text {
            Some(type_text) => format!("const {} {type_text}", symbol.name),
            None => format!("const {}", symbol.name),
        },
        SymbolKind::StructField => match &symbol.type_text {
            Some(type_text) => format!("field {} {type_text}", symbol.name),
            None => format!("field {}", symbol.name),
        },
        SymbolKind::InterfaceMethod | SymbolKind::Function => method_string(symbol),
        SymbolKind::TypeName => format!("type {}", symbol.name),
        SymbolKind::Package => format!("package {}", symbol.name),
        SymbolKind::Builtin => symbol.name.clone(),
    }
}

fn method_string(symbol: &Symbol) -> String {
    let import = strip_vendor(&symbol.pkg_path);
    match &symbol.recv_type {
        Some(recv) if !import.is_empty() => {
            format!("func ({import}.{recv}).{}", symbol.name)
        },
        Some(recv) => format!("func ({recv}).{}", symbol.name),
        None => format!("func {}", symbol.name),
    }
}

/// Strip vendor path segments so vendored dependencies display under their
/// original logical import path.
pub fn strip_vendor(import_path: &str) -> &str {
    const VENDOR: &str = "/vendor/";
    if let Some(idx) = import_path.rfind(VENDOR) {
        return &import_path[idx + VENDOR.len()..];
    }
    import_path.strip_prefix("vendor/").unwrap_or(import_path)
}

#[cfg(test)]
#[path = "../../tests/src/doc/render_tests.rs"]
mod tests;
