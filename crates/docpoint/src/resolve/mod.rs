//! Use-site to defining-occurrence resolution.
//!
//! Bindings are best-effort: lexical scopes, package scope, file imports,
//! then the predeclared universe. Selector expressions resolve through an
//! imported package qualifier or through the syntactic declared type of
//! the qualifier, including transitively embedded fields.

pub mod const_eval;
pub mod scope;

use std::collections::BTreeSet;

use tracing::debug;

use crate::builtins;
use crate::error::QueryError;
use crate::loader::{Package, Workspace};
use crate::syntax::ast::{
    AstNode, Field, FuncDecl, GenDecl, ImportSpec, Receiver, SelectorExpr, TypeSpec, ValueSpec,
};
use crate::syntax::cst::{SyntaxElement, SyntaxNode, SyntaxToken};
use crate::syntax::helpers;
use crate::syntax::kind::SyntaxKind;
use crate::vfs::FileId;
use scope::{DefSite, FieldBinding};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    Function,
    Variable,
    Constant,
    TypeName,
    StructField,
    InterfaceMethod,
    Package,
    Builtin,
}

/// The resolved entity denoted by an identifier.
#[derive(Debug, Clone)]
pub struct Symbol {
    pub name: String,
    pub kind: SymbolKind,
    /// Physical import path of the owning package; "builtin" for
    /// predeclared identifiers.
    pub pkg_path: String,
    pub pkg_name: String,
    /// Defining occurrence; None signals the builtin fallback.
    pub def: Option<DefSite>,
    /// Exact literal value, for constants.
    pub const_value: Option<String>,
    /// Declared or inferred type text, for canonical string forms.
    pub type_text: Option<String>,
    /// Receiver or interface type name, for methods.
    pub recv_type: Option<String>,
}

impl Symbol {
    fn new(
        name: &str,
        kind: SymbolKind,
        pkg: &Package,
        def: Option<DefSite>,
    ) -> Self {
        Self {
            name: name.to_string(),
            kind,
            pkg_path: pkg.path.clone(),
            pkg_name: pkg.name.clone(),
            def,
            const_value: None,
            type_text: None,
            recv_type: None,
        }
    }
}

/// Resolve the identifier under `token` to the entity it denotes.
pub fn resolve(
    ws: &Workspace,
    file: &FileId,
    token: &SyntaxToken,
) -> Result<Symbol, QueryError> {
    let pkg = ws
        .package_of(file)
        .ok_or_else(|| QueryError::UnresolvedIdentifier(token.text().to_string()))?;
    let name = token.text().to_string();

    // Import paths and aliases resolve to the imported package itself.
    if let Some(spec) = token
        .parent()
        .and_then(|parent| helpers::find_ancestor(parent, SyntaxKind::ImportSpec))
        .and_then(ImportSpec::cast)
    {
        return import_symbol(ws, pkg, file, &spec)
            .ok_or_else(|| QueryError::UnresolvedIdentifier(name));
    }

    if token
        .parent()
        .is_some_and(|parent| parent.kind() == SyntaxKind::PackageClause)
    {
        let mut symbol = Symbol::new(&name, SymbolKind::Package, pkg, None);
        symbol.name = pkg.name.clone();
        return Ok(symbol);
    }

    // Defining occurrences resolve to themselves.
    if let Some(symbol) = def_site_symbol(ws, pkg, file, token) {
        return Ok(symbol);
    }

    // Selector uses: pkg.Name, value.Field, value.Method().
    if let Some(parent) = token.parent()
        && let Some(selector) = SelectorExpr::cast(parent)
        && selector
            .sel_ident()
            .is_some_and(|sel| sel.text_range() == token.text_range())
        && selector
            .base_ident()
            .is_some_and(|base| base.text_range() != token.text_range())
    {
        return selector_symbol(ws, pkg, file, token, &selector);
    }

    // Plain identifiers: lexical scopes, package scope, imports, universe.
    if let Some(symbol) = local_symbol(ws, pkg, file, token, &name) {
        return Ok(symbol);
    }
    if let Some(symbol) = package_scope_symbol(pkg, &name) {
        return Ok(symbol);
    }
    if let Some(imports) = pkg.imports.get(file)
        && let Some(key) = imports.by_name.get(&name)
    {
        let target = ws.package(key);
        let pkg_name = target.map(|p| p.name.clone()).unwrap_or_else(|| name.clone());
        return Ok(Symbol {
            name: pkg_name.clone(),
            kind: SymbolKind::Package,
            pkg_path: key.clone(),
            pkg_name,
            def: None,
            const_value: None,
            type_text: None,
            recv_type: None,
        });
    }
    if builtins::is_predeclared(&name) {
        debug!(ident = %name, "resolved to predeclared identifier");
        return Ok(Symbol {
            name,
            kind: SymbolKind::Builtin,
            pkg_path: "builtin".into(),
            pkg_name: "builtin".into(),
            def: None,
            const_value: None,
            type_text: None,
            recv_type: None,
        });
    }

    Err(QueryError::UnresolvedIdentifier(name))
}

fn import_symbol(
    ws: &Workspace,
    pkg: &Package,
    file: &FileId,
    spec: &ImportSpec,
) -> Option<Symbol> {
    let written = spec.import_path()?;
    let key = pkg
        .imports
        .get(file)
        .and_then(|imports| imports.by_path.get(&written))
        .cloned()
        .unwrap_or_else(|| written.clone());
    let target = ws.package(&key);
    let name = target
        .map(|p| p.name.clone())
        .unwrap_or_else(|| written.rsplit('/').next().unwrap_or(&written).to_string());
    Some(Symbol {
        name: name.clone(),
        kind: SymbolKind::Package,
        pkg_path: key,
        pkg_name: name,
        def: None,
        const_value: None,
        type_text: None,
        recv_type: None,
    })
}

/// When the queried identifier is itself a declared name, resolution is
/// the identity: the defining occurrence is the identifier.
fn def_site_symbol(
    ws: &Workspace,
    pkg: &Package,
    file: &FileId,
    token: &SyntaxToken,
) -> Option<Symbol> {
    let parent = token.parent()?;
    let range = token.text_range();
    let def = Some(DefSite {
        file: file.clone(),
        range,
    });

    match parent.kind() {
        SyntaxKind::Field => {
            let field = Field::cast(parent.clone())?;
            if !field
                .name_tokens()
                .iter()
                .any(|name| name.text_range() == range)
            {
                return None;
            }
            let context = parent.parent()?.kind();
            match context {
                SyntaxKind::StructType => {
                    let mut symbol =
                        Symbol::new(token.text(), SymbolKind::StructField, pkg, def);
                    symbol.type_text = field.type_node().map(|node| collapse_text(&node));
                    Some(symbol)
                },
                SyntaxKind::InterfaceType => {
                    let mut symbol =
                        Symbol::new(token.text(), SymbolKind::InterfaceMethod, pkg, def);
                    symbol.recv_type = enclosing_type_name(&parent);
                    Some(symbol)
                },
                SyntaxKind::ParamList | SyntaxKind::ResultList => {
                    let mut symbol = Symbol::new(token.text(), SymbolKind::Variable, pkg, def);
                    symbol.type_text = field.type_node().map(|node| collapse_text(&node));
                    Some(symbol)
                },
                _ => None,
            }
        },
        SyntaxKind::Receiver => {
            let receiver = Receiver::cast(parent)?;
            if receiver.name_token()?.text_range() != range {
                return None;
            }
            let mut symbol = Symbol::new(token.text(), SymbolKind::Variable, pkg, def);
            symbol.type_text = receiver.type_node().map(|node| collapse_text(&node));
            Some(symbol)
        },
        SyntaxKind::FuncDecl => {
            let func = FuncDecl::cast(parent)?;
            if func.name_token()?.text_range() != range {
                return None;
            }
            let mut symbol = Symbol::new(token.text(), SymbolKind::Function, pkg, def);
            symbol.recv_type = func.receiver().and_then(|recv| recv.type_name());
            Some(symbol)
        },
        SyntaxKind::TypeSpec => {
            let spec = TypeSpec::cast(parent)?;
            if spec.name_token()?.text_range() != range {
                return None;
            }
            Some(Symbol::new(token.text(), SymbolKind::TypeName, pkg, def))
        },
        SyntaxKind::ValueSpec => {
            let spec = ValueSpec::cast(parent.clone())?;
            if !spec.names().iter().any(|name| name.text_range() == range) {
                return None;
            }
            let decl = parent.parent().and_then(GenDecl::cast);
            let keyword = decl.as_ref().and_then(GenDecl::keyword);
            match keyword {
                Some(SyntaxKind::KwConst) => {
                    let mut symbol = Symbol::new(token.text(), SymbolKind::Constant, pkg, def);
                    let is_local = helpers::find_ancestor(parent.clone(), SyntaxKind::Block)
                        .is_some();
                    symbol.const_value = if is_local {
                        decl.as_ref().and_then(|decl| local_const_value(pkg, decl, token.text()))
                    } else {
                        const_value_for(pkg, token)
                    };
                    Some(symbol)
                },
                _ => {
                    let mut symbol = Symbol::new(token.text(), SymbolKind::Variable, pkg, def);
                    symbol.type_text = spec
                        .type_node()
                        .map(|node| collapse_text(&node))
                        .or_else(|| initializer_type_text(ws, pkg, file, &spec.init_exprs(), 0));
                    Some(symbol)
                },
            }
        },
        _ => None,
    }
}

/// The type name a struct field or interface member belongs to.
fn enclosing_type_name(field_node: &SyntaxNode) -> Option<String> {
    let spec = helpers::find_ancestor(field_node.clone(), SyntaxKind::TypeSpec)?;
    TypeSpec::cast(spec)?.name_token().map(|token| token.text().to_string())
}

fn const_value_for(
    pkg: &Package,
    token: &SyntaxToken,
) -> Option<String> {
    pkg.bindings
        .consts
        .get(token.text())
        .and_then(|binding| binding.value.clone())
}

fn selector_symbol(
    ws: &Workspace,
    pkg: &Package,
    file: &FileId,
    token: &SyntaxToken,
    selector: &SelectorExpr,
) -> Result<Symbol, QueryError> {
    let name = token.text().to_string();
    let qualifier = selector.base_ident();

    if let Some(qualifier) = &qualifier {
        // Package-qualified reference.
        if let Some(imports) = pkg.imports.get(file)
            && let Some(key) = imports.by_name.get(qualifier.text())
        {
            let target = ws
                .package(key)
                .ok_or_else(|| QueryError::UnresolvedIdentifier(name.clone()))?;
            return package_scope_symbol(target, &name)
                .ok_or(QueryError::UnresolvedIdentifier(name));
        }

        // Member reference through the qualifier's declared type.
        if let Some((type_pkg, type_name)) = qualifier_type(ws, pkg, file, qualifier) {
            let mut visited = BTreeSet::new();
            if let Some(symbol) = find_member(ws, &type_pkg, &type_name, &name, &mut visited) {
                return Ok(symbol);
            }
        }
    }

    // Last resort: a unique member of any type in the current package.
    let mut visited = BTreeSet::new();
    for type_name in pkg.bindings.types.keys() {
        if let Some(symbol) = find_member(ws, &pkg.path, type_name, &name, &mut visited) {
            return Ok(symbol);
        }
    }
    Err(QueryError::UnresolvedIdentifier(name))
}

/// The declared type of a selector qualifier: a local variable, package
/// variable, or the type itself for method expressions.
fn qualifier_type(
    ws: &Workspace,
    pkg: &Package,
    file: &FileId,
    qualifier: &SyntaxToken,
) -> Option<(String, String)> {
    let name = qualifier.text().to_string();

    if let Some(symbol) = local_symbol(ws, pkg, file, qualifier, &name) {
        if let Some((qual, type_name)) = symbol
            .type_text
            .as_deref()
            .and_then(parse_type_text_core)
        {
            return resolve_type_qualifier(ws, pkg, file, qual, type_name);
        }
        return None;
    }

    if let Some(binding) = pkg.bindings.vars.get(&name) {
        let (qual, type_name) = binding.type_name.clone()?;
        return resolve_type_qualifier(ws, pkg, file, qual, type_name);
    }

    // Method expression: T.Method.
    if pkg.bindings.types.contains_key(&name) {
        return Some((pkg.path.clone(), name));
    }

    None
}

fn resolve_type_qualifier(
    ws: &Workspace,
    pkg: &Package,
    file: &FileId,
    qualifier: Option<String>,
    type_name: String,
) -> Option<(String, String)> {
    match qualifier {
        None => Some((pkg.path.clone(), type_name)),
        Some(alias) => {
            let key = pkg.imports.get(file)?.by_name.get(&alias)?.clone();
            ws.package(&key)?;
            Some((key, type_name))
        },
    }
}

/// Parse the core named type out of collapsed type text, e.g. `*pkg.T`.
fn parse_type_text_core(text: &str) -> Option<(Option<String>, String)> {
    let trimmed = text.trim_start_matches(['*', '&', ' ']);
    if trimmed.is_empty()
        || !trimmed
            .chars()
            .next()
            .is_some_and(|ch| ch.is_alphabetic() || ch == '_')
    {
        return None;
    }
    let core: &str = trimmed
        .split(|ch: char| !(ch.is_alphanumeric() || ch == '_' || ch == '.'))
        .next()?;
    match core.split_once('.') {
        Some((qual, name)) => Some((Some(qual.to_string()), name.to_string())),
        None => Some((None, core.to_string())),
    }
}

/// Look up a member (field or method) of a named type, walking embedded
/// fields breadth-first across packages. Embedded fields referenced by
/// their own promoted name resolve to the embedded *type*, exposing the
/// type's documentation rather than a field's.
fn find_member(
    ws: &Workspace,
    pkg_key: &str,
    type_name: &str,
    member: &str,
    visited: &mut BTreeSet<(String, String)>,
) -> Option<Symbol> {
    if !visited.insert((pkg_key.to_string(), type_name.to_string())) {
        return None;
    }
    let pkg = ws.package(pkg_key)?;
    let binding = pkg.bindings.types.get(type_name)?;

    for field in binding.fields.iter().filter(|field| !field.embedded) {
        if field.name == member {
            let mut symbol =
                Symbol::new(member, SymbolKind::StructField, pkg, Some(field.def.clone()));
            symbol.recv_type = Some(type_name.to_string());
            return Some(symbol);
        }
    }

    for method in pkg.bindings.methods_of(type_name) {
        if method.name == member {
            let kind = if method.from_interface {
                SymbolKind::InterfaceMethod
            } else {
                SymbolKind::Function
            };
            let mut symbol = Symbol::new(member, kind, pkg, Some(method.def.clone()));
            symbol.recv_type = Some(type_name.to_string());
            return Some(symbol);
        }
    }

    // An embedded field used by its promoted name: surface the type.
    for field in binding.fields.iter().filter(|field| field.embedded) {
        if field.name == member {
            if let Some((target_key, target_name)) = embedded_target(ws, pkg, field)
                && let Some(target_pkg) = ws.package(&target_key)
                && let Some(target_type) = target_pkg.bindings.types.get(&target_name)
            {
                return Some(Symbol::new(
                    member,
                    SymbolKind::TypeName,
                    target_pkg,
                    Some(target_type.def.clone()),
                ));
            }
            let mut symbol =
                Symbol::new(member, SymbolKind::StructField, pkg, Some(field.def.clone()));
            symbol.recv_type = Some(type_name.to_string());
            return Some(symbol);
        }
    }

    for field in binding.fields.iter().filter(|field| field.embedded) {
        if let Some((target_key, target_name)) = embedded_target(ws, pkg, field)
            && let Some(symbol) = find_member(ws, &target_key, &target_name, member, visited)
        {
            return Some(symbol);
        }
    }

    None
}

fn embedded_target(
    ws: &Workspace,
    pkg: &Package,
    field: &FieldBinding,
) -> Option<(String, String)> {
    match &field.qualifier {
        None => Some((pkg.path.clone(), field.name.clone())),
        Some(alias) => {
            let key = pkg.imports.get(&field.def.file)?.by_name.get(alias)?.clone();
            ws.package(&key)?;
            Some((key, field.name.clone()))
        },
    }
}

fn package_scope_symbol(
    pkg: &Package,
    name: &str,
) -> Option<Symbol> {
    if let Some(def) = pkg.bindings.funcs.get(name) {
        return Some(Symbol::new(name, SymbolKind::Function, pkg, Some(def.clone())));
    }
    if let Some(binding) = pkg.bindings.consts.get(name) {
        let mut symbol =
            Symbol::new(name, SymbolKind::Constant, pkg, Some(binding.def.clone()));
        symbol.const_value = binding.value.clone();
        return Some(symbol);
    }
    if let Some(binding) = pkg.bindings.vars.get(name) {
        return Some(Symbol::new(name, SymbolKind::Variable, pkg, Some(binding.def.clone())));
    }
    if let Some(binding) = pkg.bindings.types.get(name) {
        return Some(Symbol::new(name, SymbolKind::TypeName, pkg, Some(binding.def.clone())));
    }
    None
}

/// Walk the lexical scopes enclosing a use site: block-local declarations
/// before the offset, then function parameters, receivers and named
/// results.
fn local_symbol(
    ws: &Workspace,
    pkg: &Package,
    file: &FileId,
    token: &SyntaxToken,
    name: &str,
) -> Option<Symbol> {
    let offset = token.text_range().start();
    let chain = helpers::enclosing_chain(token);

    for node in &chain {
        match node.kind() {
            SyntaxKind::Block
            | SyntaxKind::IfStmt
            | SyntaxKind::ForStmt
            | SyntaxKind::SwitchStmt => {
                let mut found: Option<Symbol> = None;
                for child in node.children() {
                    if child.text_range().start() > offset {
                        break;
                    }
                    match child.kind() {
                        SyntaxKind::AssignStmt => {
                            if let Some(symbol) =
                                short_var_symbol(ws, pkg, file, &child, name)
                            {
                                found = Some(symbol);
                            }
                        },
                        SyntaxKind::GenDecl => {
                            if let Some(symbol) =
                                local_decl_symbol(ws, pkg, file, &child, name)
                            {
                                found = Some(symbol);
                            }
                        },
                        _ => {},
                    }
                }
                if found.is_some() {
                    return found;
                }
            },
            SyntaxKind::FuncDecl => {
                let func = FuncDecl::cast(node.clone())?;
                return func_scope_symbol(pkg, file, &func, name);
            },
            _ => {},
        }
    }
    None
}

/// A name introduced by `:=` in an assignment statement.
fn short_var_symbol(
    ws: &Workspace,
    pkg: &Package,
    file: &FileId,
    assign: &SyntaxNode,
    name: &str,
) -> Option<Symbol> {
    let mut lhs = Vec::new();
    let mut rhs = Vec::new();
    let mut op_seen = false;
    let mut is_define = false;
    for element in assign.children_with_tokens() {
        match &element {
            SyntaxElement::Token(token) => match token.kind() {
                SyntaxKind::Define => {
                    op_seen = true;
                    is_define = true;
                },
                kind if kind == SyntaxKind::Assign || !op_seen => {
                    if token.kind() == SyntaxKind::Ident && !op_seen {
                        lhs.push(token.clone());
                    }
                    if kind == SyntaxKind::Assign {
                        op_seen = true;
                    }
                },
                _ => {},
            },
            SyntaxElement::Node(_) => {
                if op_seen && !element.as_node().is_some_and(|n| n.kind().is_trivia()) {
                    rhs.push(element.clone());
                }
            },
        }
    }
    if !is_define {
        return None;
    }

    let index = lhs.iter().position(|token| token.text() == name)?;
    let def = DefSite {
        file: file.clone(),
        range: lhs[index].text_range(),
    };
    let mut symbol = Symbol::new(name, SymbolKind::Variable, pkg, Some(def));
    symbol.type_text = initializer_type_text(ws, pkg, file, &rhs, index);
    Some(symbol)
}

/// Names introduced by a block-local var/const/type declaration.
fn local_decl_symbol(
    ws: &Workspace,
    pkg: &Package,
    file: &FileId,
    decl_node: &SyntaxNode,
    name: &str,
) -> Option<Symbol> {
    let decl = GenDecl::cast(decl_node.clone())?;
    let keyword = decl.keyword()?;
    match keyword {
        SyntaxKind::KwVar | SyntaxKind::KwConst => {
            for spec in decl.value_specs() {
                for spec_name in spec.names() {
                    if spec_name.text() != name {
                        continue;
                    }
                    let def = DefSite {
                        file: file.clone(),
                        range: spec_name.text_range(),
                    };
                    let kind = if keyword == SyntaxKind::KwConst {
                        SymbolKind::Constant
                    } else {
                        SymbolKind::Variable
                    };
                    let mut symbol = Symbol::new(name, kind, pkg, Some(def));
                    symbol.type_text = spec
                        .type_node()
                        .map(|node| collapse_text(&node))
                        .or_else(|| {
                            initializer_type_text(ws, pkg, file, &spec.init_exprs(), 0)
                        });
                    if kind == SymbolKind::Constant {
                        symbol.const_value = local_const_value(pkg, &decl, name);
                    }
                    return Some(symbol);
                }
            }
            None
        },
        SyntaxKind::KwType => {
            for spec in decl.type_specs() {
                if let Some(spec_name) = spec.name_token()
                    && spec_name.text() == name
                {
                    let def = DefSite {
                        file: file.clone(),
                        range: spec_name.text_range(),
                    };
                    return Some(Symbol::new(name, SymbolKind::TypeName, pkg, Some(def)));
                }
            }
            None
        },
        _ => None,
    }
}

/// Evaluate a function-local const declaration against the package's
/// constant environment.
fn local_const_value(
    pkg: &Package,
    decl: &GenDecl,
    name: &str,
) -> Option<String> {
    let mut scratch = scope::PackageBindings {
        const_values: pkg.bindings.const_values.clone(),
        ..Default::default()
    };
    let file = FileId::from_path(std::path::Path::new(""));
    const_eval::bind_const_decl(&mut scratch, &file, decl);
    scratch.consts.get(name).and_then(|binding| binding.value.clone())
}

fn func_scope_symbol(
    pkg: &Package,
    file: &FileId,
    func: &FuncDecl,
    name: &str,
) -> Option<Symbol> {
    if let Some(receiver) = func.receiver()
        && let Some(recv_name) = receiver.name_token()
        && recv_name.text() == name
    {
        let def = DefSite {
            file: file.clone(),
            range: recv_name.text_range(),
        };
        let mut symbol = Symbol::new(name, SymbolKind::Variable, pkg, Some(def));
        symbol.type_text = receiver.type_node().map(|node| collapse_text(&node));
        return Some(symbol);
    }

    let params = func.param_list().map(|list| fields_with_types(list.fields().collect()));
    let results = func
        .result_list()
        .map(|list| fields_with_types(list.fields().collect()));

    for (token, type_text) in params.into_iter().flatten().chain(results.into_iter().flatten()) {
        if token.text() == name {
            let def = DefSite {
                file: file.clone(),
                range: token.text_range(),
            };
            let mut symbol = Symbol::new(name, SymbolKind::Variable, pkg, Some(def));
            symbol.type_text = type_text;
            return Some(symbol);
        }
    }
    None
}

/// Pair parameter names with their types, giving name-only fields the type
/// of the next field that has one (`a, b int`).
fn fields_with_types(fields: Vec<Field>) -> Vec<(SyntaxToken, Option<String>)> {
    let types: Vec<Option<String>> = fields
        .iter()
        .map(|field| field.type_node().map(|node| collapse_text(&node)))
        .collect();

    let mut result = Vec::new();
    for (index, field) in fields.iter().enumerate() {
        let own = types[index]
            .clone()
            .or_else(|| types[index..].iter().flatten().next().cloned());
        for token in field.name_tokens() {
            result.push((token, own.clone()));
        }
    }
    result
}

/// Best-effort type text of an initializer expression: composite literals
/// carry their type, calls resolve through the callee's result list.
fn initializer_type_text(
    ws: &Workspace,
    pkg: &Package,
    file: &FileId,
    exprs: &[SyntaxElement],
    index: usize,
) -> Option<String> {
    let element = exprs.get(index.min(exprs.len().saturating_sub(1)))?;
    let node = element.as_node()?;
    match node.kind() {
        SyntaxKind::CompositeLit => composite_type_text(node),
        SyntaxKind::UnaryExpr => {
            let inner = node.children().next()?;
            initializer_type_text(
                ws,
                pkg,
                file,
                &[SyntaxElement::Node(inner)],
                0,
            )
            .map(|text| format!("*{text}"))
        },
        SyntaxKind::CallExpr => {
            let callee_name = node
                .children_with_tokens()
                .find_map(|element| match element {
                    SyntaxElement::Token(token) if token.kind() == SyntaxKind::Ident => {
                        Some(token.text().to_string())
                    },
                    SyntaxElement::Node(inner) if inner.kind() == SyntaxKind::SelectorExpr => {
                        SelectorExpr::cast(inner)
                            .and_then(|sel| sel.sel_ident())
                            .map(|token| token.text().to_string())
                    },
                    _ => None,
                })?;
            let def = pkg.bindings.funcs.get(&callee_name)?;
            let tree = ws.tree(&def.file)?;
            let token = helpers::token_at_offset(&tree.root(), def.range.start())?;
            let func = helpers::find_ancestor(token.parent()?, SyntaxKind::FuncDecl)
                .and_then(FuncDecl::cast)?;
            let result_list = func.result_list()?;
            let fields: Vec<Field> = result_list.fields().collect();
            if fields.is_empty() {
                // An unparenthesized result list holds the type directly.
                return result_list
                    .syntax()
                    .children()
                    .find(|child| crate::syntax::ast::is_type_kind(child.kind()))
                    .map(|node| collapse_text(&node));
            }
            if fields.len() == 1 && fields[0].name_tokens().is_empty() {
                fields[0].type_node().map(|node| collapse_text(&node))
            } else if fields.len() == 1 {
                // A result list of one bare identifier is a single type name.
                Some(collapse_text(fields[0].syntax()))
            } else {
                None
            }
        },
        _ => None,
    }
}

/// The type written on a composite literal: a node for composite shapes,
/// a bare identifier token for plain named types.
fn composite_type_text(node: &SyntaxNode) -> Option<String> {
    if let Some(type_node) = node
        .children()
        .find(|child| crate::syntax::ast::is_type_kind(child.kind()))
    {
        return Some(collapse_text(&type_node));
    }
    node.children_with_tokens()
        .filter_map(|element| element.into_token())
        .take_while(|token| token.kind() != SyntaxKind::LBrace)
        .find(|token| token.kind() == SyntaxKind::Ident)
        .map(|token| token.text().to_string())
}

/// Single-line source text of a node: comments dropped, whitespace runs
/// collapsed.
pub fn collapse_text(node: &SyntaxNode) -> String {
    let mut out = String::new();
    let mut pending_space = false;
    for element in node.descendants_with_tokens() {
        let SyntaxElement::Token(token) = element else {
            continue;
        };
        match token.kind() {
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
        }
    }
    out.trim().to_string()
}

#[cfg(test)]
#[path = "../../tests/src/resolve/resolver_tests.rs"]
mod tests;
