use crate::syntax::cst::{SyntaxElement, SyntaxNode, SyntaxToken};
use crate::syntax::kind::SyntaxKind;

pub trait AstNode: Sized {
    fn cast(syntax: SyntaxNode) -> Option<Self>;
    fn syntax(&self) -> &SyntaxNode;
}

macro_rules! ast_node {
    ($name:ident, $kind:expr) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name {
            syntax: SyntaxNode,
        }

        impl AstNode for $name {
            fn cast(syntax: SyntaxNode) -> Option<Self> {
                if syntax.kind() == $kind {
                    Some(Self { syntax })
                } else {
                    None
                }
            }

            fn syntax(&self) -> &SyntaxNode {
                &self.syntax
            }
        }
    };
}

ast_node!(SourceFile, SyntaxKind::SourceFile);
ast_node!(PackageClause, SyntaxKind::PackageClause);
ast_node!(GenDecl, SyntaxKind::GenDecl);
ast_node!(ImportSpec, SyntaxKind::ImportSpec);
ast_node!(ValueSpec, SyntaxKind::ValueSpec);
ast_node!(TypeSpec, SyntaxKind::TypeSpec);
ast_node!(FuncDecl, SyntaxKind::FuncDecl);
ast_node!(Receiver, SyntaxKind::Receiver);
ast_node!(ParamList, SyntaxKind::ParamList);
ast_node!(ResultList, SyntaxKind::ResultList);
ast_node!(Field, SyntaxKind::Field);
ast_node!(StructType, SyntaxKind::StructType);
ast_node!(InterfaceType, SyntaxKind::InterfaceType);
ast_node!(Block, SyntaxKind::Block);
ast_node!(SelectorExpr, SyntaxKind::SelectorExpr);
ast_node!(CallExpr, SyntaxKind::CallExpr);
ast_node!(CompositeLit, SyntaxKind::CompositeLit);
ast_node!(AssignStmt, SyntaxKind::AssignStmt);
ast_node!(TypeRef, SyntaxKind::TypeRef);

fn direct_ident_tokens(syntax: &SyntaxNode) -> impl Iterator<Item = SyntaxToken> + '_ {
    syntax
        .children_with_tokens()
        .filter_map(|element| element.into_token())
        .filter(|token| token.kind() == SyntaxKind::Ident)
}

fn first_ident_token(syntax: &SyntaxNode) -> Option<SyntaxToken> {
    direct_ident_tokens(syntax).next()
}

impl SourceFile {
    pub fn package_clause(&self) -> Option<PackageClause> {
        self.syntax.children().find_map(PackageClause::cast)
    }

    pub fn package_name(&self) -> Option<String> {
        self.package_clause()
            .and_then(|clause| clause.name_token())
            .map(|token| token.text().to_string())
    }

    pub fn gen_decls(&self) -> impl Iterator<Item = GenDecl> + '_ {
        self.syntax.children().filter_map(GenDecl::cast)
    }

    pub fn func_decls(&self) -> impl Iterator<Item = FuncDecl> + '_ {
        self.syntax.children().filter_map(FuncDecl::cast)
    }

    pub fn import_specs(&self) -> impl Iterator<Item = ImportSpec> + '_ {
        self.gen_decls()
            .filter(|decl| decl.keyword() == Some(SyntaxKind::KwImport))
            .flat_map(|decl| decl.import_specs().collect::<Vec<_>>())
    }
}

impl PackageClause {
    pub fn name_token(&self) -> Option<SyntaxToken> {
        first_ident_token(&self.syntax)
    }
}

impl GenDecl {
    /// The declaration keyword: const, var, type or import.
    pub fn keyword(&self) -> Option<SyntaxKind> {
        self.syntax
            .children_with_tokens()
            .filter_map(|element| element.into_token())
            .map(|token| token.kind())
            .find(|kind| kind.is_decl_keyword())
    }

    /// Whether the specs are wrapped in parentheses.
    pub fn is_grouped(&self) -> bool {
        self.syntax
            .children_with_tokens()
            .filter_map(|element| element.into_token())
            .any(|token| token.kind() == SyntaxKind::LParen)
    }

    pub fn value_specs(&self) -> impl Iterator<Item = ValueSpec> + '_ {
        self.syntax.children().filter_map(ValueSpec::cast)
    }

    pub fn type_specs(&self) -> impl Iterator<Item = TypeSpec> + '_ {
        self.syntax.children().filter_map(TypeSpec::cast)
    }

    pub fn import_specs(&self) -> impl Iterator<Item = ImportSpec> + '_ {
        self.syntax.children().filter_map(ImportSpec::cast)
    }

    /// The spec whose range contains the given offset, if any.
    pub fn spec_at(
        &self,
        offset: rowan::TextSize,
    ) -> Option<SyntaxNode> {
        self.syntax
            .children()
            .filter(|child| {
                matches!(
                    child.kind(),
                    SyntaxKind::ValueSpec | SyntaxKind::TypeSpec | SyntaxKind::ImportSpec
                )
            })
            .find(|child| child.text_range().contains_inclusive(offset))
    }
}

impl ImportSpec {
    /// The local alias token, for `alias "path"` imports. A dot import
    /// yields the `.` token.
    pub fn alias_token(&self) -> Option<SyntaxToken> {
        self.syntax
            .children_with_tokens()
            .filter_map(|element| element.into_token())
            .find(|token| matches!(token.kind(), SyntaxKind::Ident | SyntaxKind::Dot))
    }

    pub fn path_token(&self) -> Option<SyntaxToken> {
        self.syntax
            .children_with_tokens()
            .filter_map(|element| element.into_token())
            .find(|token| matches!(token.kind(), SyntaxKind::String | SyntaxKind::RawString))
    }

    /// The import path with its quotation marks trimmed.
    pub fn import_path(&self) -> Option<String> {
        let token = self.path_token()?;
        let text = token.text();
        if text.len() < 2 {
            return None;
        }
        Some(text[1..text.len() - 1].to_string())
    }
}

impl ValueSpec {
    /// The declared names: identifier tokens before the type or `=`.
    pub fn names(&self) -> Vec<SyntaxToken> {
        let mut names = Vec::new();
        for element in self.syntax.children_with_tokens() {
            match element {
                SyntaxElement::Token(token) => match token.kind() {
                    SyntaxKind::Ident => names.push(token),
                    SyntaxKind::Comma
                    | SyntaxKind::Whitespace
                    | SyntaxKind::Newline
                    | SyntaxKind::Comment => {},
                    _ => break,
                },
                SyntaxElement::Node(_) => break,
            }
        }
        names
    }

    /// The declared type, if spelled out.
    pub fn type_node(&self) -> Option<SyntaxNode> {
        let mut past_assign = false;
        for element in self.syntax.children_with_tokens() {
            match element {
                SyntaxElement::Token(token) if token.kind() == SyntaxKind::Assign => {
                    past_assign = true;
                },
                SyntaxElement::Node(node) if !past_assign && is_type_kind(node.kind()) => {
                    return Some(node);
                },
                _ => {},
            }
        }
        None
    }

    /// The initializer expressions after `=`, in order.
    pub fn init_exprs(&self) -> Vec<SyntaxElement> {
        let mut exprs = Vec::new();
        let mut past_assign = false;
        for element in self.syntax.children_with_tokens() {
            let keep = match &element {
                SyntaxElement::Token(token) if token.kind() == SyntaxKind::Assign => {
                    past_assign = true;
                    false
                },
                SyntaxElement::Token(token) => {
                    past_assign
                        && !token.kind().is_trivia()
                        && token.kind() != SyntaxKind::Comma
                },
                SyntaxElement::Node(_) => past_assign,
            };
            if keep {
                exprs.push(element);
            }
        }
        exprs
    }
}

impl TypeSpec {
    pub fn name_token(&self) -> Option<SyntaxToken> {
        first_ident_token(&self.syntax)
    }

    pub fn type_node(&self) -> Option<SyntaxNode> {
        self.syntax
            .children()
            .find(|node| is_type_kind(node.kind()))
    }

    pub fn is_alias(&self) -> bool {
        self.syntax
            .children_with_tokens()
            .filter_map(|element| element.into_token())
            .any(|token| token.kind() == SyntaxKind::Assign)
    }
}

impl FuncDecl {
    /// The function name. Receiver names live inside the Receiver node,
    /// so the first direct identifier is always the declared name.
    pub fn name_token(&self) -> Option<SyntaxToken> {
        first_ident_token(&self.syntax)
    }

    pub fn receiver(&self) -> Option<Receiver> {
        self.syntax.children().find_map(Receiver::cast)
    }

    pub fn param_list(&self) -> Option<ParamList> {
        self.syntax.children().find_map(ParamList::cast)
    }

    pub fn result_list(&self) -> Option<ResultList> {
        self.syntax.children().find_map(ResultList::cast)
    }

    pub fn block(&self) -> Option<Block> {
        self.syntax.children().find_map(Block::cast)
    }
}

impl Receiver {
    pub fn name_token(&self) -> Option<SyntaxToken> {
        first_ident_token(&self.syntax)
    }

    pub fn type_node(&self) -> Option<SyntaxNode> {
        self.syntax
            .children()
            .find(|node| is_type_kind(node.kind()))
    }

    /// The receiver's base type name, with any pointer stripped.
    pub fn type_name(&self) -> Option<String> {
        let node = self.type_node()?;
        type_core_name(&node).map(|(_, name)| name)
    }
}

impl ParamList {
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.syntax.children().filter_map(Field::cast)
    }
}

impl ResultList {
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.syntax.children().filter_map(Field::cast)
    }
}

impl Field {
    pub fn name_tokens(&self) -> Vec<SyntaxToken> {
        direct_ident_tokens(&self.syntax).collect()
    }

    pub fn type_node(&self) -> Option<SyntaxNode> {
        self.syntax
            .children()
            .find(|node| is_type_kind(node.kind()))
    }

    /// Anonymous fields carry no names of their own.
    pub fn is_embedded(&self) -> bool {
        self.name_tokens().is_empty() && self.param_list().is_none() && self.type_node().is_some()
    }

    /// For an embedded field: the qualifier (package alias, if any) and the
    /// type name that stands in for the field name.
    pub fn embedded_name(&self) -> Option<(Option<String>, String)> {
        if !self.is_embedded() {
            return None;
        }
        type_core_name(&self.type_node()?)
    }

    /// Interface methods parse with an attached parameter list.
    pub fn param_list(&self) -> Option<ParamList> {
        self.syntax.children().find_map(ParamList::cast)
    }

    pub fn result_list(&self) -> Option<ResultList> {
        self.syntax.children().find_map(ResultList::cast)
    }

    pub fn tag_token(&self) -> Option<SyntaxToken> {
        self.syntax
            .children_with_tokens()
            .filter_map(|element| element.into_token())
            .find(|token| matches!(token.kind(), SyntaxKind::String | SyntaxKind::RawString))
    }
}

impl StructType {
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.syntax.children().filter_map(Field::cast)
    }
}

impl InterfaceType {
    pub fn members(&self) -> impl Iterator<Item = Field> + '_ {
        self.syntax.children().filter_map(Field::cast)
    }
}

impl SelectorExpr {
    /// The qualifier, when it is a plain identifier.
    pub fn base_ident(&self) -> Option<SyntaxToken> {
        match self.syntax.children_with_tokens().find(|el| {
            !matches!(
                el.kind(),
                SyntaxKind::Whitespace | SyntaxKind::Newline | SyntaxKind::Comment
            )
        })? {
            SyntaxElement::Token(token) if token.kind() == SyntaxKind::Ident => Some(token),
            _ => None,
        }
    }

    /// The selected identifier (right of the dot).
    pub fn sel_ident(&self) -> Option<SyntaxToken> {
        direct_ident_tokens(&self.syntax).last()
    }
}

pub fn is_type_kind(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::TypeRef
            | SyntaxKind::PointerType
            | SyntaxKind::ArrayType
            | SyntaxKind::MapType
            | SyntaxKind::ChanType
            | SyntaxKind::FuncType
            | SyntaxKind::StructType
            | SyntaxKind::InterfaceType
            | SyntaxKind::ParenExpr
            | SyntaxKind::SelectorExpr
            | SyntaxKind::IndexExpr
    )
}

/// The named core of a type expression: `*pkg.T` yields `(Some("pkg"), "T")`,
/// `*T` and `T` yield `(None, "T")`. Composite shapes have no core name.
pub fn type_core_name(node: &SyntaxNode) -> Option<(Option<String>, String)> {
    match node.kind() {
        SyntaxKind::PointerType | SyntaxKind::ParenExpr | SyntaxKind::TypeRef => {
            // TypeRef wraps either a bare identifier or a selector/index node.
            if let Some(inner) = node
                .children()
                .find(|child| is_type_kind(child.kind()))
            {
                return type_core_name(&inner);
            }
            let ident = node
                .children_with_tokens()
                .filter_map(|element| element.into_token())
                .find(|token| token.kind() == SyntaxKind::Ident)?;
            Some((None, ident.text().to_string()))
        },
        SyntaxKind::SelectorExpr => {
            let sel = SelectorExpr::cast(node.clone())?;
            let base = sel.base_ident().map(|token| token.text().to_string());
            let name = sel.sel_ident()?.text().to_string();
            Some((base, name))
        },
        SyntaxKind::IndexExpr => {
            // Generic instantiation: use the base type's name.
            let first = node.children().find(|child| is_type_kind(child.kind()));
            match first {
                Some(inner) => type_core_name(&inner),
                None => {
                    let ident = node
                        .children_with_tokens()
                        .filter_map(|element| element.into_token())
                        .find(|token| token.kind() == SyntaxKind::Ident)?;
                    Some((None, ident.text().to_string()))
                },
            }
        },
        _ => None,
    }
}
