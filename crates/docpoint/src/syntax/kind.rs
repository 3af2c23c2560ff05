use logos::Logos;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    // Tokens
    Error = 0,
    Whitespace,
    Newline,
    Comment,

    // Identifiers & Literals
    Ident,
    Int,
    Float,
    Imag,
    Rune,
    String,
    RawString,

    // Punctuation
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Semicolon,
    Colon,
    Comma,
    Dot,
    Ellipsis,

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Caret,
    Amp,
    Pipe,
    Tilde,
    Exclaim,
    Assign,
    Define,
    Less,
    Greater,
    Arrow,
    PlusPlus,
    MinusMinus,
    PlusAssign,
    MinusAssign,
    StarAssign,
    SlashAssign,
    PercentAssign,
    CaretAssign,
    AmpAssign,
    PipeAssign,
    EqualEqual,
    NotEqual,
    LessEqual,
    GreaterEqual,
    AndAnd,
    OrOr,
    Shl,
    Shr,
    AndNot,
    ShlAssign,
    ShrAssign,
    AndNotAssign,

    // Keywords
    KwBreak,
    KwCase,
    KwChan,
    KwConst,
    KwContinue,
    KwDefault,
    KwDefer,
    KwElse,
    KwFallthrough,
    KwFor,
    KwFunc,
    KwGo,
    KwGoto,
    KwIf,
    KwImport,
    KwInterface,
    KwMap,
    KwPackage,
    KwRange,
    KwReturn,
    KwSelect,
    KwStruct,
    KwSwitch,
    KwType,
    KwVar,

    // Nodes
    SourceFile,
    PackageClause,
    GenDecl,
    ImportSpec,
    ValueSpec,
    TypeSpec,
    FuncDecl,
    Receiver,
    ParamList,
    ResultList,
    Field,
    StructType,
    InterfaceType,
    PointerType,
    ArrayType,
    MapType,
    ChanType,
    FuncType,
    Block,
    AssignStmt,
    ExprStmt,
    ReturnStmt,
    IfStmt,
    ForStmt,
    SwitchStmt,
    SelectorExpr,
    CallExpr,
    IndexExpr,
    ParenExpr,
    UnaryExpr,
    BinaryExpr,
    CompositeLit,
    KeyValueExpr,
    TypeRef,
}

impl SyntaxKind {
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            SyntaxKind::Whitespace | SyntaxKind::Newline | SyntaxKind::Comment
        )
    }

    /// Declaration keyword kinds that introduce a general declaration.
    pub fn is_decl_keyword(self) -> bool {
        matches!(
            self,
            SyntaxKind::KwConst | SyntaxKind::KwVar | SyntaxKind::KwType | SyntaxKind::KwImport
        )
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        rowan::SyntaxKind(kind as u16)
    }
}

#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(error = ())]
pub enum TokenKind {
    #[regex(r"[ \t\r\f]+")]
    Whitespace,

    #[token("\n")]
    Newline,

    #[regex(r"//[^\n]*", allow_greedy = true)]
    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    Comment,

    // Operators and punctuation (multi-char first)
    #[token("<<=")]
    ShlAssign,
    #[token(">>=")]
    ShrAssign,
    #[token("&^=")]
    AndNotAssign,
    #[token("...")]
    Ellipsis,
    #[token("&&")]
    AndAnd,
    #[token("||")]
    OrOr,
    #[token("<-")]
    Arrow,
    #[token("++")]
    PlusPlus,
    #[token("--")]
    MinusMinus,
    #[token("==")]
    EqualEqual,
    #[token("!=")]
    NotEqual,
    #[token("<=")]
    LessEqual,
    #[token(">=")]
    GreaterEqual,
    #[token(":=")]
    Define,
    #[token("+=")]
    PlusAssign,
    #[token("-=")]
    MinusAssign,
    #[token("*=")]
    StarAssign,
    #[token("/=")]
    SlashAssign,
    #[token("%=")]
    PercentAssign,
    #[token("&=")]
    AmpAssign,
    #[token("|=")]
    PipeAssign,
    #[token("^=")]
    CaretAssign,
    #[token("<<")]
    Shl,
    #[token(">>")]
    Shr,
    #[token("&^")]
    AndNot,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("^")]
    Caret,
    #[token("&")]
    Amp,
    #[token("|")]
    Pipe,
    #[token("~")]
    Tilde,
    #[token("!")]
    Exclaim,
    #[token("=")]
    Assign,
    #[token("<")]
    Less,
    #[token(">")]
    Greater,

    // Keywords
    #[token("break")]
    KwBreak,
    #[token("case")]
    KwCase,
    #[token("chan")]
    KwChan,
    #[token("const")]
    KwConst,
    #[token("continue")]
    KwContinue,
    #[token("default")]
    KwDefault,
    #[token("defer")]
    KwDefer,
    #[token("else")]
    KwElse,
    #[token("fallthrough")]
    KwFallthrough,
    #[token("for")]
    KwFor,
    #[token("func")]
    KwFunc,
    #[token("go")]
    KwGo,
    #[token("goto")]
    KwGoto,
    #[token("if")]
    KwIf,
    #[token("import")]
    KwImport,
    #[token("interface")]
    KwInterface,
    #[token("map")]
    KwMap,
    #[token("package")]
    KwPackage,
    #[token("range")]
    KwRange,
    #[token("return")]
    KwReturn,
    #[token("select")]
    KwSelect,
    #[token("struct")]
    KwStruct,
    #[token("switch")]
    KwSwitch,
    #[token("type")]
    KwType,
    #[token("var")]
    KwVar,

    // Identifiers & Literals
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
    #[regex(r"'([^'\\]|\\[\s\S])*'")]
    Rune,
    #[regex(r#""([^"\\]|\\[\s\S])*""#)]
    String,
    #[regex(r"`[^`]*`")]
    RawString,
    #[regex(r"[0-9](_?[0-9])*(\.([0-9](_?[0-9])*)?)?([eE][+-]?[0-9](_?[0-9])*)?i")]
    #[regex(r"\.[0-9](_?[0-9])*([eE][+-]?[0-9](_?[0-9])*)?i")]
    Imag,
    #[regex(r"0[xX][0-9A-Fa-f](_?[0-9A-Fa-f])*")]
    #[regex(r"0[bB][01](_?[01])*")]
    #[regex(r"0[oO][0-7](_?[0-7])*")]
    #[regex(r"[0-9](_?[0-9])*")]
    Int,
    #[regex(r"[0-9](_?[0-9])*\.([0-9](_?[0-9])*)?([eE][+-]?[0-9](_?[0-9])*)?")]
    #[regex(r"\.[0-9](_?[0-9])*([eE][+-]?[0-9](_?[0-9])*)?")]
    #[regex(r"[0-9](_?[0-9])*[eE][+-]?[0-9](_?[0-9])*")]
    Float,
}

impl From<TokenKind> for SyntaxKind {
    fn from(token: TokenKind) -> Self {
        match token {
            TokenKind::Whitespace => SyntaxKind::Whitespace,
            TokenKind::Newline => SyntaxKind::Newline,
            TokenKind::Comment => SyntaxKind::Comment,
            TokenKind::ShlAssign => SyntaxKind::ShlAssign,
            TokenKind::ShrAssign => SyntaxKind::ShrAssign,
            TokenKind::AndNotAssign => SyntaxKind::AndNotAssign,
            TokenKind::Ellipsis => SyntaxKind::Ellipsis,
            TokenKind::AndAnd => SyntaxKind::AndAnd,
            TokenKind::OrOr => SyntaxKind::OrOr,
            TokenKind::Arrow => SyntaxKind::Arrow,
            TokenKind::PlusPlus => SyntaxKind::PlusPlus,
            TokenKind::MinusMinus => SyntaxKind::MinusMinus,
            TokenKind::EqualEqual => SyntaxKind::EqualEqual,
            TokenKind::NotEqual => SyntaxKind::NotEqual,
            TokenKind::LessEqual => SyntaxKind::LessEqual,
            TokenKind::GreaterEqual => SyntaxKind::GreaterEqual,
            TokenKind::Define => SyntaxKind::Define,
            TokenKind::PlusAssign => SyntaxKind::PlusAssign,
            TokenKind::MinusAssign => SyntaxKind::MinusAssign,
            TokenKind::StarAssign => SyntaxKind::StarAssign,
            TokenKind::SlashAssign => SyntaxKind::SlashAssign,
            TokenKind::PercentAssign => SyntaxKind::PercentAssign,
            TokenKind::AmpAssign => SyntaxKind::AmpAssign,
            TokenKind::PipeAssign => SyntaxKind::PipeAssign,
            TokenKind::CaretAssign => SyntaxKind::CaretAssign,
            TokenKind::Shl => SyntaxKind::Shl,
            TokenKind::Shr => SyntaxKind::Shr,
            TokenKind::AndNot => SyntaxKind::AndNot,
            TokenKind::LParen => SyntaxKind::LParen,
            TokenKind::RParen => SyntaxKind::RParen,
            TokenKind::LBrace => SyntaxKind::LBrace,
            TokenKind::RBrace => SyntaxKind::RBrace,
            TokenKind::LBracket => SyntaxKind::LBracket,
            TokenKind::RBracket => SyntaxKind::RBracket,
            TokenKind::Semicolon => SyntaxKind::Semicolon,
            TokenKind::Colon => SyntaxKind::Colon,
            TokenKind::Comma => SyntaxKind::Comma,
            TokenKind::Dot => SyntaxKind::Dot,
            TokenKind::Plus => SyntaxKind::Plus,
            TokenKind::Minus => SyntaxKind::Minus,
            TokenKind::Star => SyntaxKind::Star,
            TokenKind::Slash => SyntaxKind::Slash,
            TokenKind::Percent => SyntaxKind::Percent,
            TokenKind::Caret => SyntaxKind::Caret,
            TokenKind::Amp => SyntaxKind::Amp,
            TokenKind::Pipe => SyntaxKind::Pipe,
            TokenKind::Tilde => SyntaxKind::Tilde,
            TokenKind::Exclaim => SyntaxKind::Exclaim,
            TokenKind::Assign => SyntaxKind::Assign,
            TokenKind::Less => SyntaxKind::Less,
            TokenKind::Greater => SyntaxKind::Greater,
            TokenKind::KwBreak => SyntaxKind::KwBreak,
            TokenKind::KwCase => SyntaxKind::KwCase,
            TokenKind::KwChan => SyntaxKind::KwChan,
            TokenKind::KwConst => SyntaxKind::KwConst,
            TokenKind::KwContinue => SyntaxKind::KwContinue,
            TokenKind::KwDefault => SyntaxKind::KwDefault,
            TokenKind::KwDefer => SyntaxKind::KwDefer,
            TokenKind::KwElse => SyntaxKind::KwElse,
            TokenKind::KwFallthrough => SyntaxKind::KwFallthrough,
            TokenKind::KwFor => SyntaxKind::KwFor,
            TokenKind::KwFunc => SyntaxKind::KwFunc,
            TokenKind::KwGo => SyntaxKind::KwGo,
            TokenKind::KwGoto => SyntaxKind::KwGoto,
            TokenKind::KwIf => SyntaxKind::KwIf,
            TokenKind::KwImport => SyntaxKind::KwImport,
            TokenKind::KwInterface => SyntaxKind::KwInterface,
            TokenKind::KwMap => SyntaxKind::KwMap,
            TokenKind::KwPackage => SyntaxKind::KwPackage,
            TokenKind::KwRange => SyntaxKind::KwRange,
            TokenKind::KwReturn => SyntaxKind::KwReturn,
            TokenKind::KwSelect => SyntaxKind::KwSelect,
            TokenKind::KwStruct => SyntaxKind::KwStruct,
            TokenKind::KwSwitch => SyntaxKind::KwSwitch,
            TokenKind::KwType => SyntaxKind::KwType,
            TokenKind::KwVar => SyntaxKind::KwVar,
            TokenKind::Ident => SyntaxKind::Ident,
            TokenKind::Rune => SyntaxKind::Rune,
            TokenKind::String => SyntaxKind::String,
            TokenKind::RawString => SyntaxKind::RawString,
            TokenKind::Imag => SyntaxKind::Imag,
            TokenKind::Int => SyntaxKind::Int,
            TokenKind::Float => SyntaxKind::Float,
        }
    }
}
