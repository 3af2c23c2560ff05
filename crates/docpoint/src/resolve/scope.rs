use std::collections::BTreeMap;

use rowan::TextRange;

use crate::resolve::const_eval;
use crate::syntax::SyntaxTree;
use crate::syntax::ast::{AstNode, Field, GenDecl, InterfaceType, SourceFile, StructType, TypeSpec};
use crate::syntax::cst::{SyntaxNode, SyntaxToken};
use crate::syntax::kind::SyntaxKind;
use crate::vfs::FileId;

/// The defining occurrence of a symbol: the file and the byte range of the
/// declared identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefSite {
    pub file: FileId,
    pub range: TextRange,
}

#[derive(Debug, Clone)]
pub struct ConstBinding {
    pub def: DefSite,
    /// Exact textual value, iota-expanded.
    pub value: Option<String>,
}

#[derive(Debug, Clone)]
pub struct VarBinding {
    pub def: DefSite,
    /// Qualifier and name of the declared type, when syntactically present.
    pub type_name: Option<(Option<String>, String)>,
}

#[derive(Debug, Clone)]
pub struct FieldBinding {
    /// Field name; for embedded fields, the type name that stands in for it.
    pub name: String,
    pub def: DefSite,
    pub embedded: bool,
    /// Package qualifier of an embedded field's type.
    pub qualifier: Option<String>,
    /// Declared type of a named field, for chained selector resolution.
    pub type_name: Option<(Option<String>, String)>,
}

#[derive(Debug, Clone)]
pub struct MethodBinding {
    pub name: String,
    pub def: DefSite,
    pub from_interface: bool,
}

#[derive(Debug, Clone)]
pub struct TypeBinding {
    pub def: DefSite,
    pub fields: Vec<FieldBinding>,
    pub methods: Vec<MethodBinding>,
}

/// Name-to-definition tables for one package, aggregated over all of its
/// files. Receiver methods are keyed by base type name so member lookup
/// works regardless of which file declared the type.
#[derive(Debug, Default)]
pub struct PackageBindings {
    pub funcs: BTreeMap<String, DefSite>,
    pub consts: BTreeMap<String, ConstBinding>,
    pub vars: BTreeMap<String, VarBinding>,
    pub types: BTreeMap<String, TypeBinding>,
    pub methods: BTreeMap<String, Vec<MethodBinding>>,
    pub(crate) const_values: BTreeMap<String, const_eval::Value>,
}

impl PackageBindings {
    /// Methods attached to a type, interface members first.
    pub fn methods_of(
        &self,
        type_name: &str,
    ) -> Vec<&MethodBinding> {
        let mut result: Vec<&MethodBinding> = Vec::new();
        if let Some(binding) = self.types.get(type_name) {
            result.extend(binding.methods.iter());
        }
        if let Some(methods) = self.methods.get(type_name) {
            result.extend(methods.iter());
        }
        result
    }
}

/// Add one file's declarations to the package tables.
pub fn bind_file(
    bindings: &mut PackageBindings,
    file: &FileId,
    tree: &SyntaxTree,
) {
    let Some(source_file) = SourceFile::cast(tree.root()) else {
        return;
    };

    for decl in source_file.gen_decls() {
        match decl.keyword() {
            Some(SyntaxKind::KwConst) => const_eval::bind_const_decl(bindings, file, &decl),
            Some(SyntaxKind::KwVar) => bind_var_decl(bindings, file, &decl),
            Some(SyntaxKind::KwType) => bind_type_decl(bindings, file, &decl),
            _ => {},
        }
    }

    for func in source_file.func_decls() {
        let Some(name) = func.name_token() else {
            continue;
        };
        let def = def_site(file, &name);
        match func.receiver().and_then(|recv| recv.type_name()) {
            Some(type_name) => {
                bindings.methods.entry(type_name).or_default().push(MethodBinding {
                    name: name.text().to_string(),
                    def,
                    from_interface: false,
                });
            },
            None => {
                bindings.funcs.entry(name.text().to_string()).or_insert(def);
            },
        }
    }
}

fn bind_var_decl(
    bindings: &mut PackageBindings,
    file: &FileId,
    decl: &GenDecl,
) {
    for spec in decl.value_specs() {
        let declared = spec.type_node().and_then(|node| crate::syntax::ast::type_core_name(&node));
        let inits = spec.init_exprs();
        for (index, name) in spec.names().iter().enumerate() {
            let type_name = declared
                .clone()
                .or_else(|| inits.get(index).and_then(initializer_type_name));
            bindings.vars.entry(name.text().to_string()).or_insert(VarBinding {
                def: def_site(file, name),
                type_name,
            });
        }
    }
}

/// Best-effort type of an initializer: composite literals carry their type
/// syntactically.
pub(crate) fn initializer_type_name(
    element: &crate::syntax::cst::SyntaxElement
) -> Option<(Option<String>, String)> {
    let node = element.as_node()?;
    match node.kind() {
        SyntaxKind::CompositeLit => {
            if let Some(type_node) = node
                .children()
                .find(|child| crate::syntax::ast::is_type_kind(child.kind()))
            {
                return crate::syntax::ast::type_core_name(&type_node);
            }
            // A plain named type is a bare identifier token on the literal.
            node.children_with_tokens()
                .filter_map(|element| element.into_token())
                .take_while(|token| token.kind() != SyntaxKind::LBrace)
                .find(|token| token.kind() == SyntaxKind::Ident)
                .map(|token| (None, token.text().to_string()))
        },
        SyntaxKind::UnaryExpr => {
            // &T{...} yields a value whose members resolve through T.
            let inner = node.children().next()?;
            initializer_type_name(&crate::syntax::cst::SyntaxElement::Node(inner))
        },
        _ => None,
    }
}

fn bind_type_decl(
    bindings: &mut PackageBindings,
    file: &FileId,
    decl: &GenDecl,
) {
    for spec in decl.type_specs() {
        bind_type_spec(bindings, file, &spec);
    }
}

fn bind_type_spec(
    bindings: &mut PackageBindings,
    file: &FileId,
    spec: &TypeSpec,
) {
    let Some(name) = spec.name_token() else {
        return;
    };

    let mut fields = Vec::new();
    let mut methods = Vec::new();

    match spec.type_node() {
        Some(node) => {
            if let Some(strukt) = StructType::cast(node.clone()) {
                for field in strukt.fields() {
                    bind_struct_field(&mut fields, file, &field);
                }
            } else if let Some(iface) = InterfaceType::cast(node) {
                for member in iface.members() {
                    bind_interface_member(&mut fields, &mut methods, file, &member);
                }
            }
        },
        None => return,
    }

    bindings.types.entry(name.text().to_string()).or_insert(TypeBinding {
        def: def_site(file, &name),
        fields,
        methods,
    });
}

fn bind_struct_field(
    fields: &mut Vec<FieldBinding>,
    file: &FileId,
    field: &Field,
) {
    if field.is_embedded() {
        let Some((qualifier, name)) = field.embedded_name() else {
            return;
        };
        let Some(token) = embedded_ident_token(field) else {
            return;
        };
        fields.push(FieldBinding {
            name,
            def: def_site(file, &token),
            embedded: true,
            qualifier,
            type_name: None,
        });
        return;
    }

    let type_name = field.type_node().and_then(|node| crate::syntax::ast::type_core_name(&node));
    for name in field.name_tokens() {
        fields.push(FieldBinding {
            name: name.text().to_string(),
            def: def_site(file, &name),
            embedded: false,
            qualifier: None,
            type_name: type_name.clone(),
        });
    }
}

fn bind_interface_member(
    fields: &mut Vec<FieldBinding>,
    methods: &mut Vec<MethodBinding>,
    file: &FileId,
    member: &Field,
) {
    if member.param_list().is_some() {
        if let Some(name) = member.name_tokens().into_iter().next() {
            methods.push(MethodBinding {
                name: name.text().to_string(),
                def: def_site(file, &name),
                from_interface: true,
            });
        }
        return;
    }
    if member.is_embedded()
        && let Some((qualifier, name)) = member.embedded_name()
        && let Some(token) = embedded_ident_token(member)
    {
        fields.push(FieldBinding {
            name,
            def: def_site(file, &token),
            embedded: true,
            qualifier,
            type_name: None,
        });
    }
}

/// The identifier token that names an embedded field's type.
pub fn embedded_ident_token(field: &Field) -> Option<SyntaxToken> {
    let node = field.type_node()?;
    rightmost_ident(&node)
}

fn rightmost_ident(node: &SyntaxNode) -> Option<SyntaxToken> {
    match node.kind() {
        SyntaxKind::SelectorExpr => node
            .children_with_tokens()
            .filter_map(|element| element.into_token())
            .filter(|token| token.kind() == SyntaxKind::Ident)
            .last(),
        SyntaxKind::IndexExpr => {
            // Generic instantiation: name the base, not the arguments.
            if let Some(inner) = node
                .children()
                .find(|child| crate::syntax::ast::is_type_kind(child.kind()))
            {
                return rightmost_ident(&inner);
            }
            node.children_with_tokens()
                .filter_map(|element| element.into_token())
                .find(|token| token.kind() == SyntaxKind::Ident)
        },
        _ => {
            if let Some(inner) = node
                .children()
                .find(|child| crate::syntax::ast::is_type_kind(child.kind()))
            {
                return rightmost_ident(&inner);
            }
            node.children_with_tokens()
                .filter_map(|element| element.into_token())
                .find(|token| token.kind() == SyntaxKind::Ident)
        },
    }
}

pub fn def_site(
    file: &FileId,
    token: &SyntaxToken,
) -> DefSite {
    DefSite {
        file: file.clone(),
        range: token.text_range(),
    }
}

/// True when the name's first letter is upper case, Go's export rule.
pub fn is_exported(name: &str) -> bool {
    name.chars().next().is_some_and(|ch| ch.is_uppercase())
}
