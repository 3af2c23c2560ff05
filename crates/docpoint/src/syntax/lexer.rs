use crate::syntax::kind::{SyntaxKind, TokenKind};
use logos::Logos;

/// A lexer that wraps `logos::Lexer` to produce `SyntaxKind` tokens.
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, TokenKind>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: TokenKind::lexer(input),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = (SyntaxKind, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let token_result = self.inner.next()?;
        let text = self.inner.slice();

        let kind = match token_result {
            Ok(token) => token.into(),
            Err(_) => SyntaxKind::Error,
        };

        Some((kind, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(input: &str) -> Vec<(SyntaxKind, &str)> {
        Lexer::new(input).collect()
    }

    #[test]
    fn test_keywords() {
        let input = "package func var";
        let tokens = lex(input);
        assert_eq!(
            tokens,
            vec![
                (SyntaxKind::KwPackage, "package"),
                (SyntaxKind::Whitespace, " "),
                (SyntaxKind::KwFunc, "func"),
                (SyntaxKind::Whitespace, " "),
                (SyntaxKind::KwVar, "var"),
            ]
        );
    }

    #[test]
    fn test_keyword_prefix_is_ident() {
        let tokens = lex("breakfast");
        assert_eq!(tokens, vec![(SyntaxKind::Ident, "breakfast")]);
    }

    #[test]
    fn test_punctuation() {
        let input = "{ } ( ) ;";
        let tokens = lex(input);
        assert_eq!(
            tokens,
            vec![
                (SyntaxKind::LBrace, "{"),
                (SyntaxKind::Whitespace, " "),
                (SyntaxKind::RBrace, "}"),
                (SyntaxKind::Whitespace, " "),
                (SyntaxKind::LParen, "("),
                (SyntaxKind::Whitespace, " "),
                (SyntaxKind::RParen, ")"),
                (SyntaxKind::Whitespace, " "),
                (SyntaxKind::Semicolon, ";"),
            ]
        );
    }

    #[test]
    fn test_identifiers_and_literals() {
        let input = "main 123 3.14 \"hello\" `raw`";
        let tokens = lex(input);
        assert_eq!(
            tokens,
            vec![
                (SyntaxKind::Ident, "main"),
                (SyntaxKind::Whitespace, " "),
                (SyntaxKind::Int, "123"),
                (SyntaxKind::Whitespace, " "),
                (SyntaxKind::Float, "3.14"),
                (SyntaxKind::Whitespace, " "),
                (SyntaxKind::String, "\"hello\""),
                (SyntaxKind::Whitespace, " "),
                (SyntaxKind::RawString, "`raw`"),
            ]
        );
    }

    #[test]
    fn test_operators() {
        let input = "a := b &^ 1 << 2";
        let tokens = lex(input);
        assert_eq!(
            tokens,
            vec![
                (SyntaxKind::Ident, "a"),
                (SyntaxKind::Whitespace, " "),
                (SyntaxKind::Define, ":="),
                (SyntaxKind::Whitespace, " "),
                (SyntaxKind::Ident, "b"),
                (SyntaxKind::Whitespace, " "),
                (SyntaxKind::AndNot, "&^"),
                (SyntaxKind::Whitespace, " "),
                (SyntaxKind::Int, "1"),
                (SyntaxKind::Whitespace, " "),
                (SyntaxKind::Shl, "<<"),
                (SyntaxKind::Whitespace, " "),
                (SyntaxKind::Int, "2"),
            ]
        );
    }

    #[test]
    fn test_comments_and_newlines() {
        let input = "x // trailing\ny";
        let tokens = lex(input);
        assert_eq!(
            tokens,
            vec![
                (SyntaxKind::Ident, "x"),
                (SyntaxKind::Whitespace, " "),
                (SyntaxKind::Comment, "// trailing"),
                (SyntaxKind::Newline, "\n"),
                (SyntaxKind::Ident, "y"),
            ]
        );
    }

    #[test]
    fn test_channel_arrow() {
        let tokens = lex("ch <- 1");
        assert_eq!(
            tokens,
            vec![
                (SyntaxKind::Ident, "ch"),
                (SyntaxKind::Whitespace, " "),
                (SyntaxKind::Arrow, "<-"),
                (SyntaxKind::Whitespace, " "),
                (SyntaxKind::Int, "1"),
            ]
        );
    }
}
