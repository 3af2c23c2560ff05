use rowan::{Checkpoint, GreenNode, GreenNodeBuilder};

use crate::syntax::{kind::SyntaxKind, lexer::Lexer};

/// Error-tolerant recursive-descent parser for Go source files.
///
/// Declarations are parsed precisely (doc comments stay adjacent to the
/// nodes they document); statements inside function bodies are swept
/// loosely, enough to give every identifier and selector an accurate node.
/// Unknown constructs consume tokens without failing.
pub struct Parser<'a> {
    tokens: Vec<(SyntaxKind, &'a str)>,
    pos: usize,
    builder: GreenNodeBuilder<'static>,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        let tokens: Vec<_> = Lexer::new(input).collect();
        Self {
            tokens,
            pos: 0,
            builder: GreenNodeBuilder::new(),
        }
    }

    pub fn parse(mut self) -> GreenNode {
        self.start_node(SyntaxKind::SourceFile);
        self.parse_source_file();
        self.finish_node();
        self.builder.finish()
    }

    // ── builder plumbing ────────────────────────────────────────────────

    fn start_node(
        &mut self,
        kind: SyntaxKind,
    ) {
        self.builder.start_node(kind.into());
    }

    fn start_node_at(
        &mut self,
        checkpoint: Checkpoint,
        kind: SyntaxKind,
    ) {
        self.builder.start_node_at(checkpoint, kind.into());
    }

    fn checkpoint(&mut self) -> Checkpoint {
        self.builder.checkpoint()
    }

    fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    fn is_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn peek(&self) -> SyntaxKind {
        self.tokens
            .get(self.pos)
            .map(|(kind, _)| *kind)
            .unwrap_or(SyntaxKind::Error)
    }

    fn at(
        &self,
        kind: SyntaxKind,
    ) -> bool {
        !self.is_eof() && self.peek() == kind
    }

    fn bump(&mut self) {
        if let Some((kind, text)) = self.tokens.get(self.pos) {
            self.builder.token((*kind).into(), text);
            self.pos += 1;
        }
    }

    /// Skip spaces only. Comments are left in place so they end up as
    /// siblings of the declarations they document, never swallowed into
    /// the middle of a node.
    fn skip_space(&mut self) {
        while self.at(SyntaxKind::Whitespace) {
            self.bump();
        }
    }

    /// Skip all trivia including newlines and comments.
    fn skip_trivia(&mut self) {
        while !self.is_eof() && self.peek().is_trivia() {
            self.bump();
        }
    }

    /// Kind of the next non-trivia token on the same line, if any.
    fn peek_same_line(&self) -> Option<SyntaxKind> {
        let mut idx = self.pos + 1;
        while let Some((kind, _)) = self.tokens.get(idx) {
            match kind {
                SyntaxKind::Whitespace | SyntaxKind::Comment => idx += 1,
                SyntaxKind::Newline => return None,
                other => return Some(*other),
            }
        }
        None
    }

    /// Kind of the nth non-trivia token, counting the current one as 0.
    fn peek_nth_non_trivia(
        &self,
        n: usize,
    ) -> Option<SyntaxKind> {
        let mut remaining = n;
        let mut idx = self.pos;
        while let Some((kind, _)) = self.tokens.get(idx) {
            if !kind.is_trivia() {
                if remaining == 0 {
                    return Some(*kind);
                }
                remaining -= 1;
            }
            idx += 1;
        }
        None
    }

    /// Consume everything from an opening delimiter to its balanced close.
    fn consume_balanced(
        &mut self,
        open: SyntaxKind,
        close: SyntaxKind,
    ) {
        let mut depth = 0usize;
        while !self.is_eof() {
            if self.at(open) {
                depth += 1;
            } else if self.at(close) {
                depth = depth.saturating_sub(1);
                self.bump();
                if depth == 0 {
                    return;
                }
                continue;
            }
            self.bump();
        }
    }

    // ── file structure ──────────────────────────────────────────────────

    fn parse_source_file(&mut self) {
        while !self.is_eof() {
            self.skip_trivia();
            if self.is_eof() {
                break;
            }

            match self.peek() {
                SyntaxKind::KwPackage => self.parse_package_clause(),
                SyntaxKind::KwImport
                | SyntaxKind::KwConst
                | SyntaxKind::KwVar
                | SyntaxKind::KwType => self.parse_gen_decl(),
                SyntaxKind::KwFunc => self.parse_func_decl(),
                _ => {
                    // Consume unexpected token to make progress
                    self.bump();
                },
            }
        }
    }

    fn parse_package_clause(&mut self) {
        self.start_node(SyntaxKind::PackageClause);
        self.bump(); // package keyword
        self.skip_space();
        if self.at(SyntaxKind::Ident) {
            self.bump();
        }
        self.finish_node();
    }

    // ── general declarations ────────────────────────────────────────────

    fn parse_gen_decl(&mut self) {
        let keyword = self.peek();
        self.start_node(SyntaxKind::GenDecl);
        self.bump(); // const / var / type / import
        self.skip_space();

        if self.at(SyntaxKind::LParen) {
            self.bump();
            loop {
                self.skip_trivia();
                if self.is_eof() || self.at(SyntaxKind::RParen) {
                    break;
                }
                self.parse_spec(keyword);
                self.skip_space();
                if self.at(SyntaxKind::Semicolon) {
                    self.bump();
                }
            }
            if self.at(SyntaxKind::RParen) {
                self.bump();
            }
        } else {
            self.parse_spec(keyword);
        }

        self.finish_node();
    }

    fn parse_spec(
        &mut self,
        keyword: SyntaxKind,
    ) {
        match keyword {
            SyntaxKind::KwImport => self.parse_import_spec(),
            SyntaxKind::KwType => self.parse_type_spec(),
            _ => self.parse_value_spec(),
        }
    }

    fn parse_import_spec(&mut self) {
        self.start_node(SyntaxKind::ImportSpec);
        if self.at(SyntaxKind::Ident) || self.at(SyntaxKind::Dot) {
            self.bump(); // local alias or dot import
            self.skip_space();
        }
        if self.at(SyntaxKind::String) || self.at(SyntaxKind::RawString) {
            self.bump();
        } else if !self.is_eof() && !self.at(SyntaxKind::RParen) {
            self.bump();
        }
        self.finish_node();
    }

    fn parse_type_spec(&mut self) {
        self.start_node(SyntaxKind::TypeSpec);
        if self.at(SyntaxKind::Ident) {
            self.bump();
        }
        self.skip_space();
        if self.at(SyntaxKind::LBracket) && self.looks_like_type_params() {
            self.consume_balanced(SyntaxKind::LBracket, SyntaxKind::RBracket);
            self.skip_space();
        }
        if self.at(SyntaxKind::Assign) {
            self.bump(); // type alias
            self.skip_space();
        }
        self.parse_type();
        self.finish_node();
    }

    /// Distinguish `type T[P any] …` from `type T [N]E`.
    fn looks_like_type_params(&self) -> bool {
        matches!(self.peek_nth_non_trivia(1), Some(SyntaxKind::Ident))
            && matches!(
                self.peek_nth_non_trivia(2),
                Some(
                    SyntaxKind::Ident
                        | SyntaxKind::Comma
                        | SyntaxKind::KwInterface
                        | SyntaxKind::Tilde
                        | SyntaxKind::Star
                )
            )
    }

    fn parse_value_spec(&mut self) {
        self.start_node(SyntaxKind::ValueSpec);
        if self.at(SyntaxKind::Ident) {
            self.bump();
            self.skip_space();
            while self.at(SyntaxKind::Comma) {
                self.bump();
                self.skip_trivia();
                if self.at(SyntaxKind::Ident) {
                    self.bump();
                }
                self.skip_space();
            }
        } else if !self.is_eof() && !self.at(SyntaxKind::RParen) {
            self.bump();
        }

        if self.at_type_start() {
            self.parse_type();
            self.skip_space();
        }

        if self.at(SyntaxKind::Assign) {
            self.bump();
            self.skip_space();
            self.parse_expr_list(true);
        }
        self.finish_node();
    }

    // ── functions ───────────────────────────────────────────────────────

    fn parse_func_decl(&mut self) {
        self.start_node(SyntaxKind::FuncDecl);
        self.bump(); // func keyword
        self.skip_space();

        if self.at(SyntaxKind::LParen) {
            self.parse_receiver();
            self.skip_space();
        }

        if self.at(SyntaxKind::Ident) {
            self.bump();
        }
        if self.at(SyntaxKind::LBracket) && self.looks_like_type_params() {
            self.consume_balanced(SyntaxKind::LBracket, SyntaxKind::RBracket);
        }
        self.skip_space();

        if self.at(SyntaxKind::LParen) {
            self.parse_field_list(SyntaxKind::ParamList);
        }
        self.parse_result_opt();
        self.skip_space();

        if self.at(SyntaxKind::LBrace) {
            self.parse_block();
        }
        self.finish_node();
    }

    fn parse_receiver(&mut self) {
        self.start_node(SyntaxKind::Receiver);
        self.bump(); // (
        self.skip_trivia();
        if self.at(SyntaxKind::Ident)
            && matches!(
                self.peek_nth_non_trivia(1),
                Some(SyntaxKind::Star | SyntaxKind::Ident)
            )
        {
            self.bump(); // receiver name
            self.skip_space();
        }
        if !self.at(SyntaxKind::RParen) {
            self.parse_type();
        }
        self.skip_trivia();
        if self.at(SyntaxKind::RParen) {
            self.bump();
        }
        self.finish_node();
    }

    fn parse_field_list(
        &mut self,
        kind: SyntaxKind,
    ) {
        self.start_node(kind);
        self.bump(); // (
        loop {
            self.skip_trivia();
            if self.is_eof() || self.at(SyntaxKind::RParen) {
                break;
            }
            self.parse_param_field();
            self.skip_trivia();
            if self.at(SyntaxKind::Comma) {
                self.bump();
            }
        }
        if self.at(SyntaxKind::RParen) {
            self.bump();
        }
        self.finish_node();
    }

    /// One comma-separated element of a parameter or result list.
    ///
    /// `a, b int` produces one name-only field and one named field; the
    /// grouping back into Go's shared-type form happens during binding.
    fn parse_param_field(&mut self) {
        self.start_node(SyntaxKind::Field);
        if self.at(SyntaxKind::Ellipsis) {
            self.bump();
            self.skip_space();
            if self.at_type_start() {
                self.parse_type();
            }
        } else if self.at(SyntaxKind::Ident) {
            match self.peek_nth_non_trivia(1) {
                Some(SyntaxKind::Comma) | Some(SyntaxKind::RParen) | None => {
                    self.bump(); // bare name or bare type
                },
                Some(SyntaxKind::Dot) => {
                    self.parse_type(); // qualified type
                },
                Some(SyntaxKind::Ellipsis) => {
                    self.bump(); // parameter name
                    self.skip_space();
                    self.bump(); // ...
                    self.skip_space();
                    if self.at_type_start() {
                        self.parse_type();
                    }
                },
                _ => {
                    self.bump(); // parameter name
                    self.skip_space();
                    if self.at_type_start() {
                        self.parse_type();
                    }
                },
            }
        } else if self.at_type_start() {
            self.parse_type();
        } else if !self.is_eof() {
            self.bump();
        }
        self.finish_node();
    }

    fn parse_result_opt(&mut self) {
        self.skip_space();
        if self.at(SyntaxKind::LParen) {
            self.parse_field_list(SyntaxKind::ResultList);
        } else if self.at_type_start() {
            self.start_node(SyntaxKind::ResultList);
            self.parse_type();
            self.finish_node();
        }
    }

    // ── types ───────────────────────────────────────────────────────────

    fn at_type_start(&self) -> bool {
        matches!(
            self.peek(),
            SyntaxKind::Ident
                | SyntaxKind::Star
                | SyntaxKind::LBracket
                | SyntaxKind::KwMap
                | SyntaxKind::KwChan
                | SyntaxKind::KwFunc
                | SyntaxKind::KwStruct
                | SyntaxKind::KwInterface
                | SyntaxKind::LParen
                | SyntaxKind::Arrow
        )
    }

    fn parse_type(&mut self) {
        match self.peek() {
            SyntaxKind::Star => {
                self.start_node(SyntaxKind::PointerType);
                self.bump();
                self.skip_space();
                self.parse_type();
                self.finish_node();
            },
            SyntaxKind::LBracket => {
                self.start_node(SyntaxKind::ArrayType);
                self.bump();
                self.skip_space();
                if self.at(SyntaxKind::Ellipsis) {
                    self.bump();
                } else if !self.at(SyntaxKind::RBracket) {
                    self.parse_expr(false);
                }
                self.skip_space();
                if self.at(SyntaxKind::RBracket) {
                    self.bump();
                }
                self.skip_space();
                self.parse_type();
                self.finish_node();
            },
            SyntaxKind::KwMap => {
                self.start_node(SyntaxKind::MapType);
                self.bump();
                if self.at(SyntaxKind::LBracket) {
                    self.bump();
                    self.skip_trivia();
                    self.parse_type();
                    self.skip_trivia();
                    if self.at(SyntaxKind::RBracket) {
                        self.bump();
                    }
                }
                self.parse_type();
                self.finish_node();
            },
            SyntaxKind::KwChan => {
                self.start_node(SyntaxKind::ChanType);
                self.bump();
                self.skip_space();
                if self.at(SyntaxKind::Arrow) {
                    self.bump();
                    self.skip_space();
                }
                self.parse_type();
                self.finish_node();
            },
            SyntaxKind::Arrow => {
                self.start_node(SyntaxKind::ChanType);
                self.bump();
                self.skip_space();
                if self.at(SyntaxKind::KwChan) {
                    self.bump();
                    self.skip_space();
                }
                self.parse_type();
                self.finish_node();
            },
            SyntaxKind::KwFunc => {
                self.start_node(SyntaxKind::FuncType);
                self.bump();
                self.skip_space();
                if self.at(SyntaxKind::LParen) {
                    self.parse_field_list(SyntaxKind::ParamList);
                }
                self.parse_result_opt();
                self.finish_node();
            },
            SyntaxKind::KwStruct => self.parse_struct_type(),
            SyntaxKind::KwInterface => self.parse_interface_type(),
            SyntaxKind::LParen => {
                self.start_node(SyntaxKind::ParenExpr);
                self.bump();
                self.skip_trivia();
                self.parse_type();
                self.skip_trivia();
                if self.at(SyntaxKind::RParen) {
                    self.bump();
                }
                self.finish_node();
            },
            SyntaxKind::Ident => {
                self.start_node(SyntaxKind::TypeRef);
                let checkpoint = self.checkpoint();
                self.bump();
                if self.at(SyntaxKind::Dot) {
                    self.start_node_at(checkpoint, SyntaxKind::SelectorExpr);
                    self.bump();
                    if self.at(SyntaxKind::Ident) {
                        self.bump();
                    }
                    self.finish_node();
                }
                if self.at(SyntaxKind::LBracket) {
                    // generic instantiation
                    self.start_node_at(checkpoint, SyntaxKind::IndexExpr);
                    self.bump();
                    loop {
                        self.skip_trivia();
                        if self.is_eof() || self.at(SyntaxKind::RBracket) {
                            break;
                        }
                        if self.at(SyntaxKind::Comma) {
                            self.bump();
                            continue;
                        }
                        let before = self.pos;
                        self.parse_type();
                        if self.pos == before {
                            self.bump();
                        }
                    }
                    if self.at(SyntaxKind::RBracket) {
                        self.bump();
                    }
                    self.finish_node();
                }
                self.finish_node();
            },
            _ => {
                if !self.is_eof() {
                    self.bump();
                }
            },
        }
    }

    fn parse_struct_type(&mut self) {
        self.start_node(SyntaxKind::StructType);
        self.bump(); // struct keyword
        self.skip_space();
        if self.at(SyntaxKind::LBrace) {
            self.bump();
            loop {
                self.skip_trivia();
                if self.is_eof() || self.at(SyntaxKind::RBrace) {
                    break;
                }
                self.parse_struct_field();
                self.skip_space();
                if self.at(SyntaxKind::Semicolon) {
                    self.bump();
                }
            }
            if self.at(SyntaxKind::RBrace) {
                self.bump();
            }
        }
        self.finish_node();
    }

    fn parse_struct_field(&mut self) {
        self.start_node(SyntaxKind::Field);
        if self.at(SyntaxKind::Star) {
            self.parse_type(); // embedded pointer type
        } else if self.at(SyntaxKind::Ident) {
            match self.peek_same_line() {
                Some(SyntaxKind::Comma) => {
                    self.bump();
                    self.skip_space();
                    while self.at(SyntaxKind::Comma) {
                        self.bump();
                        self.skip_trivia();
                        if self.at(SyntaxKind::Ident) {
                            self.bump();
                        }
                        self.skip_space();
                    }
                    if self.at_type_start() {
                        self.parse_type();
                    }
                },
                Some(SyntaxKind::Dot) => {
                    self.parse_type(); // embedded qualified type
                },
                None | Some(SyntaxKind::Semicolon | SyntaxKind::RBrace) => {
                    self.parse_type(); // embedded type
                },
                Some(SyntaxKind::String | SyntaxKind::RawString) => {
                    self.parse_type(); // embedded type with tag
                },
                _ => {
                    self.bump(); // field name
                    self.skip_space();
                    if self.at_type_start() {
                        self.parse_type();
                    }
                },
            }
        } else if !self.is_eof() && !self.at(SyntaxKind::RBrace) {
            self.bump();
        }
        self.skip_space();
        if self.at(SyntaxKind::String) || self.at(SyntaxKind::RawString) {
            self.bump(); // struct tag
        }
        self.finish_node();
    }

    fn parse_interface_type(&mut self) {
        self.start_node(SyntaxKind::InterfaceType);
        self.bump(); // interface keyword
        self.skip_space();
        if self.at(SyntaxKind::LBrace) {
            self.bump();
            loop {
                self.skip_trivia();
                if self.is_eof() || self.at(SyntaxKind::RBrace) {
                    break;
                }
                self.parse_interface_member();
                self.skip_space();
                if self.at(SyntaxKind::Semicolon) {
                    self.bump();
                }
            }
            if self.at(SyntaxKind::RBrace) {
                self.bump();
            }
        }
        self.finish_node();
    }

    fn parse_interface_member(&mut self) {
        self.start_node(SyntaxKind::Field);
        if self.at(SyntaxKind::Ident) {
            match self.peek_same_line() {
                Some(SyntaxKind::LParen) => {
                    self.bump(); // method name
                    self.skip_space();
                    self.parse_field_list(SyntaxKind::ParamList);
                    self.parse_result_opt();
                },
                Some(SyntaxKind::Dot) => {
                    self.parse_type(); // embedded qualified interface
                },
                _ => {
                    self.parse_type(); // embedded interface or constraint element
                },
            }
        } else {
            // Union terms and other constraint syntax: sweep to end of line.
            while !self.is_eof()
                && !matches!(self.peek(), SyntaxKind::Newline | SyntaxKind::RBrace)
            {
                self.bump();
            }
        }
        self.finish_node();
    }

    // ── statements ──────────────────────────────────────────────────────

    fn parse_block(&mut self) {
        self.start_node(SyntaxKind::Block);
        self.bump(); // {
        loop {
            self.skip_trivia();
            if self.is_eof() || self.at(SyntaxKind::RBrace) {
                break;
            }
            let before = self.pos;
            self.parse_stmt();
            if self.pos == before {
                self.bump();
            }
        }
        if self.at(SyntaxKind::RBrace) {
            self.bump();
        }
        self.finish_node();
    }

    fn parse_stmt(&mut self) {
        match self.peek() {
            SyntaxKind::KwConst | SyntaxKind::KwVar | SyntaxKind::KwType => self.parse_gen_decl(),
            SyntaxKind::KwReturn => {
                self.start_node(SyntaxKind::ReturnStmt);
                self.bump();
                self.skip_space();
                if !self.is_eof()
                    && !matches!(
                        self.peek(),
                        SyntaxKind::Newline
                            | SyntaxKind::Semicolon
                            | SyntaxKind::RBrace
                            | SyntaxKind::Comment
                    )
                {
                    self.parse_expr_list(true);
                }
                self.finish_node();
            },
            SyntaxKind::KwIf => self.parse_if_stmt(),
            SyntaxKind::KwFor => self.parse_for_stmt(),
            SyntaxKind::KwSwitch | SyntaxKind::KwSelect => self.parse_switch_stmt(),
            SyntaxKind::KwGo | SyntaxKind::KwDefer => {
                self.start_node(SyntaxKind::ExprStmt);
                self.bump();
                self.skip_space();
                self.parse_expr(true);
                self.finish_node();
            },
            SyntaxKind::KwBreak
            | SyntaxKind::KwContinue
            | SyntaxKind::KwGoto
            | SyntaxKind::KwFallthrough => {
                self.start_node(SyntaxKind::ExprStmt);
                self.bump();
                self.skip_space();
                if self.at(SyntaxKind::Ident) {
                    self.bump();
                }
                self.finish_node();
            },
            SyntaxKind::LBrace => self.parse_block(),
            _ => self.parse_simple_stmt(true),
        }
    }

    fn parse_simple_stmt(
        &mut self,
        allow_composite: bool,
    ) {
        let checkpoint = self.checkpoint();
        self.parse_expr_list(allow_composite);
        self.skip_space();
        if self.at_assign_op() {
            self.start_node_at(checkpoint, SyntaxKind::AssignStmt);
            self.bump();
            self.skip_space();
            if self.at(SyntaxKind::KwRange) {
                self.bump();
                self.skip_space();
                self.parse_expr(allow_composite);
            } else {
                self.parse_expr_list(allow_composite);
            }
            self.finish_node();
        } else if self.at(SyntaxKind::PlusPlus) || self.at(SyntaxKind::MinusMinus) {
            self.start_node_at(checkpoint, SyntaxKind::ExprStmt);
            self.bump();
            self.finish_node();
        } else {
            self.start_node_at(checkpoint, SyntaxKind::ExprStmt);
            self.finish_node();
        }
    }

    fn at_assign_op(&self) -> bool {
        matches!(
            self.peek(),
            SyntaxKind::Assign
                | SyntaxKind::Define
                | SyntaxKind::PlusAssign
                | SyntaxKind::MinusAssign
                | SyntaxKind::StarAssign
                | SyntaxKind::SlashAssign
                | SyntaxKind::PercentAssign
                | SyntaxKind::AmpAssign
                | SyntaxKind::PipeAssign
                | SyntaxKind::CaretAssign
                | SyntaxKind::ShlAssign
                | SyntaxKind::ShrAssign
                | SyntaxKind::AndNotAssign
        )
    }

    fn parse_if_stmt(&mut self) {
        self.start_node(SyntaxKind::IfStmt);
        self.bump(); // if keyword
        self.parse_control_header();
        if self.at(SyntaxKind::LBrace) {
            self.parse_block();
        }
        self.skip_space();
        if self.at(SyntaxKind::KwElse) {
            self.bump();
            self.skip_trivia();
            if self.at(SyntaxKind::KwIf) {
                self.parse_if_stmt();
            } else if self.at(SyntaxKind::LBrace) {
                self.parse_block();
            }
        }
        self.finish_node();
    }

    fn parse_for_stmt(&mut self) {
        self.start_node(SyntaxKind::ForStmt);
        self.bump(); // for keyword
        self.parse_control_header();
        if self.at(SyntaxKind::LBrace) {
            self.parse_block();
        }
        self.finish_node();
    }

    fn parse_switch_stmt(&mut self) {
        self.start_node(SyntaxKind::SwitchStmt);
        self.bump(); // switch / select keyword
        self.parse_control_header();
        if self.at(SyntaxKind::LBrace) {
            self.bump();
            loop {
                self.skip_trivia();
                if self.is_eof() || self.at(SyntaxKind::RBrace) {
                    break;
                }
                match self.peek() {
                    SyntaxKind::KwCase => {
                        self.bump();
                        self.skip_space();
                        self.parse_expr_list(true);
                        self.skip_space();
                        if self.at(SyntaxKind::Colon) {
                            self.bump();
                        }
                    },
                    SyntaxKind::KwDefault => {
                        self.bump();
                        self.skip_space();
                        if self.at(SyntaxKind::Colon) {
                            self.bump();
                        }
                    },
                    _ => {
                        let before = self.pos;
                        self.parse_stmt();
                        if self.pos == before {
                            self.bump();
                        }
                    },
                }
            }
            if self.at(SyntaxKind::RBrace) {
                self.bump();
            }
        }
        self.finish_node();
    }

    /// Init/condition/post clauses of if/for/switch, up to the opening
    /// brace. Composite literals are not allowed at the top level here,
    /// matching Go's parsing of control-clause expressions.
    fn parse_control_header(&mut self) {
        loop {
            self.skip_space();
            if self.is_eof()
                || matches!(
                    self.peek(),
                    SyntaxKind::LBrace | SyntaxKind::Newline | SyntaxKind::RBrace
                )
            {
                break;
            }
            if self.at(SyntaxKind::Semicolon) {
                self.bump();
                continue;
            }
            if self.at(SyntaxKind::KwRange) {
                self.bump();
                self.skip_space();
                self.parse_expr(false);
                continue;
            }
            let before = self.pos;
            self.parse_simple_stmt(false);
            if self.pos == before {
                self.bump();
            }
        }
        self.skip_trivia();
    }

    // ── expressions ─────────────────────────────────────────────────────

    fn parse_expr_list(
        &mut self,
        allow_composite: bool,
    ) {
        self.parse_expr(allow_composite);
        loop {
            self.skip_space();
            if !self.at(SyntaxKind::Comma) {
                break;
            }
            self.bump();
            self.skip_trivia();
            self.parse_expr(allow_composite);
        }
    }

    fn parse_expr(
        &mut self,
        allow_composite: bool,
    ) {
        self.parse_binary_expr(1, allow_composite);
    }

    fn binary_power(kind: SyntaxKind) -> u8 {
        match kind {
            SyntaxKind::OrOr => 1,
            SyntaxKind::AndAnd => 2,
            SyntaxKind::EqualEqual
            | SyntaxKind::NotEqual
            | SyntaxKind::Less
            | SyntaxKind::LessEqual
            | SyntaxKind::Greater
            | SyntaxKind::GreaterEqual => 3,
            SyntaxKind::Plus | SyntaxKind::Minus | SyntaxKind::Pipe | SyntaxKind::Caret => 4,
            SyntaxKind::Star
            | SyntaxKind::Slash
            | SyntaxKind::Percent
            | SyntaxKind::Shl
            | SyntaxKind::Shr
            | SyntaxKind::Amp
            | SyntaxKind::AndNot => 5,
            _ => 0,
        }
    }

    fn parse_binary_expr(
        &mut self,
        min_power: u8,
        allow_composite: bool,
    ) {
        let checkpoint = self.checkpoint();
        self.parse_unary_expr(allow_composite);
        loop {
            self.skip_space();
            let power = Self::binary_power(self.peek());
            if power == 0 || power < min_power {
                break;
            }
            self.start_node_at(checkpoint, SyntaxKind::BinaryExpr);
            self.bump();
            self.skip_trivia();
            self.parse_binary_expr(power + 1, allow_composite);
            self.finish_node();
        }
    }

    fn parse_unary_expr(
        &mut self,
        allow_composite: bool,
    ) {
        match self.peek() {
            SyntaxKind::Plus
            | SyntaxKind::Minus
            | SyntaxKind::Exclaim
            | SyntaxKind::Caret
            | SyntaxKind::Star
            | SyntaxKind::Amp
            | SyntaxKind::Arrow => {
                self.start_node(SyntaxKind::UnaryExpr);
                self.bump();
                self.skip_space();
                self.parse_unary_expr(allow_composite);
                self.finish_node();
            },
            _ => self.parse_postfix_expr(allow_composite),
        }
    }

    fn parse_postfix_expr(
        &mut self,
        allow_composite: bool,
    ) {
        let checkpoint = self.checkpoint();
        self.parse_primary_expr();
        loop {
            self.skip_space();
            match self.peek() {
                SyntaxKind::Dot => {
                    self.start_node_at(checkpoint, SyntaxKind::SelectorExpr);
                    self.bump();
                    self.skip_trivia();
                    if self.at(SyntaxKind::LParen) {
                        // type assertion, including .(type)
                        self.consume_balanced(SyntaxKind::LParen, SyntaxKind::RParen);
                    } else if self.at(SyntaxKind::Ident) {
                        self.bump();
                    }
                    self.finish_node();
                },
                SyntaxKind::LParen => {
                    self.start_node_at(checkpoint, SyntaxKind::CallExpr);
                    self.bump();
                    loop {
                        self.skip_trivia();
                        if self.is_eof() || self.at(SyntaxKind::RParen) {
                            break;
                        }
                        if self.at(SyntaxKind::Comma) || self.at(SyntaxKind::Ellipsis) {
                            self.bump();
                            continue;
                        }
                        let before = self.pos;
                        self.parse_expr(true);
                        if self.pos == before {
                            self.bump();
                        }
                    }
                    if self.at(SyntaxKind::RParen) {
                        self.bump();
                    }
                    self.finish_node();
                },
                SyntaxKind::LBracket => {
                    self.start_node_at(checkpoint, SyntaxKind::IndexExpr);
                    self.bump();
                    loop {
                        self.skip_trivia();
                        if self.is_eof() || self.at(SyntaxKind::RBracket) {
                            break;
                        }
                        if self.at(SyntaxKind::Colon) || self.at(SyntaxKind::Comma) {
                            self.bump();
                            continue;
                        }
                        let before = self.pos;
                        self.parse_expr(true);
                        if self.pos == before {
                            self.bump();
                        }
                    }
                    if self.at(SyntaxKind::RBracket) {
                        self.bump();
                    }
                    self.finish_node();
                },
                SyntaxKind::LBrace if allow_composite => {
                    self.start_node_at(checkpoint, SyntaxKind::CompositeLit);
                    self.parse_composite_body();
                    self.finish_node();
                },
                _ => break,
            }
        }
    }

    fn parse_primary_expr(&mut self) {
        match self.peek() {
            SyntaxKind::Int
            | SyntaxKind::Float
            | SyntaxKind::Imag
            | SyntaxKind::Rune
            | SyntaxKind::String
            | SyntaxKind::RawString
            | SyntaxKind::Ident => self.bump(),
            SyntaxKind::LParen => {
                self.start_node(SyntaxKind::ParenExpr);
                self.bump();
                self.skip_trivia();
                self.parse_expr(true);
                self.skip_trivia();
                if self.at(SyntaxKind::RParen) {
                    self.bump();
                }
                self.finish_node();
            },
            SyntaxKind::KwFunc => {
                // function literal: type followed by a body
                self.parse_type();
                self.skip_space();
                if self.at(SyntaxKind::LBrace) {
                    self.parse_block();
                }
            },
            SyntaxKind::Star
            | SyntaxKind::LBracket
            | SyntaxKind::KwMap
            | SyntaxKind::KwChan
            | SyntaxKind::KwStruct
            | SyntaxKind::KwInterface => {
                self.parse_type();
            },
            _ => {
                if !self.is_eof()
                    && !matches!(
                        self.peek(),
                        SyntaxKind::Newline
                            | SyntaxKind::Semicolon
                            | SyntaxKind::RBrace
                            | SyntaxKind::RParen
                            | SyntaxKind::RBracket
                            | SyntaxKind::Comma
                            | SyntaxKind::Colon
                            | SyntaxKind::LBrace
                            | SyntaxKind::Comment
                    )
                {
                    // Consume unexpected token to make progress
                    self.bump();
                }
            },
        }
    }

    fn parse_composite_body(&mut self) {
        self.bump(); // {
        loop {
            self.skip_trivia();
            if self.is_eof() || self.at(SyntaxKind::RBrace) {
                break;
            }
            let before = self.pos;
            let checkpoint = self.checkpoint();
            if self.at(SyntaxKind::LBrace) {
                // nested literal with elided type
                self.start_node(SyntaxKind::CompositeLit);
                self.parse_composite_body();
                self.finish_node();
            } else {
                self.parse_expr(true);
            }
            self.skip_space();
            if self.at(SyntaxKind::Colon) {
                self.start_node_at(checkpoint, SyntaxKind::KeyValueExpr);
                self.bump();
                self.skip_trivia();
                if self.at(SyntaxKind::LBrace) {
                    self.start_node(SyntaxKind::CompositeLit);
                    self.parse_composite_body();
                    self.finish_node();
                } else {
                    self.parse_expr(true);
                }
                self.finish_node();
            }
            self.skip_trivia();
            if self.at(SyntaxKind::Comma) {
                self.bump();
            }
            if self.pos == before {
                self.bump();
            }
        }
        if self.at(SyntaxKind::RBrace) {
            self.bump();
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src/syntax/parser_tests.rs"]
mod tests;
