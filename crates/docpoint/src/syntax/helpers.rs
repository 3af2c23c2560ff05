/// Offset lookup, enclosing-chain and comment-attachment utilities.
use rowan::{TextSize, TokenAtOffset};

use crate::syntax::cst::{SyntaxNode, SyntaxToken};
use crate::syntax::kind::SyntaxKind;

/// Find the token covering the given byte offset, preferring identifiers
/// when the offset sits on a token boundary.
pub fn token_at_offset(
    root: &SyntaxNode,
    offset: TextSize,
) -> Option<SyntaxToken> {
    if !root.text_range().contains_inclusive(offset) {
        return None;
    }
    pick_token(root.token_at_offset(offset))
}

fn pick_token(tokens: TokenAtOffset<SyntaxToken>) -> Option<SyntaxToken> {
    tokens.max_by_key(|token| match token.kind() {
        SyntaxKind::Ident => 2,
        SyntaxKind::Int | SyntaxKind::Float | SyntaxKind::String | SyntaxKind::RawString => 1,
        _ => 0,
    })
}

/// The chain of nodes enclosing a token, innermost first, up to the file root.
pub fn enclosing_chain(token: &SyntaxToken) -> Vec<SyntaxNode> {
    match token.parent() {
        Some(parent) => parent.ancestors().collect(),
        None => Vec::new(),
    }
}

/// Walk ancestors until a node with the given kind is found.
pub fn find_ancestor(
    node: SyntaxNode,
    kind: SyntaxKind,
) -> Option<SyntaxNode> {
    node.ancestors().find(|ancestor| ancestor.kind() == kind)
}

/// Collect the leading documentation comment group of a node.
///
/// A comment belongs to the group when it sits on its own line directly
/// above the node (or above another comment of the group) with no blank
/// line in between. A comment that shares its line with preceding code is
/// a trailing comment of that code, never part of this group.
pub fn leading_comments(node: &SyntaxNode) -> Vec<String> {
    let Some(first) = node.first_token() else {
        return Vec::new();
    };

    let mut comments: Vec<String> = Vec::new();
    let mut newlines = 0usize;
    let mut current = first.prev_token();
    while let Some(token) = current {
        match token.kind() {
            SyntaxKind::Whitespace => {},
            SyntaxKind::Newline => {
                newlines += 1;
                if newlines >= 2 {
                    break;
                }
            },
            SyntaxKind::Comment => {
                if has_code_before_on_line(&token) {
                    break;
                }
                comments.push(token.text().to_string());
                newlines = 0;
            },
            _ => break,
        }
        current = token.prev_token();
    }

    comments.reverse();
    comments
}

/// The comment following a node on the same line, if any.
pub fn trailing_comment(node: &SyntaxNode) -> Option<String> {
    let mut current = node.last_token()?.next_token();
    while let Some(token) = current {
        match token.kind() {
            SyntaxKind::Whitespace | SyntaxKind::Semicolon | SyntaxKind::Comma => {},
            SyntaxKind::Comment => return Some(token.text().to_string()),
            _ => return None,
        }
        current = token.next_token();
    }
    None
}

fn has_code_before_on_line(token: &SyntaxToken) -> bool {
    let mut current = token.prev_token();
    while let Some(token) = current {
        match token.kind() {
            SyntaxKind::Whitespace | SyntaxKind::Comment => {},
            SyntaxKind::Newline => return false,
            _ => return true,
        }
        current = token.prev_token();
    }
    false
}

/// Render a comment group the way godoc presents it: comment markers
/// stripped, one line per source line, terminated by a newline.
pub fn comment_group_text(comments: &[String]) -> String {
    let mut lines: Vec<String> = Vec::new();
    for comment in comments {
        if let Some(rest) = comment.strip_prefix("//") {
            lines.push(rest.strip_prefix(' ').unwrap_or(rest).trim_end().to_string());
        } else {
            let inner = comment
                .strip_prefix("/*")
                .and_then(|text| text.strip_suffix("*/"))
                .unwrap_or(comment);
            for line in inner.lines() {
                lines.push(line.trim().to_string());
            }
        }
    }

    while lines.first().is_some_and(|line| line.is_empty()) {
        lines.remove(0);
    }
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    if lines.is_empty() {
        return String::new();
    }
    let mut text = lines.join("\n");
    text.push('\n');
    text
}

/// Leading documentation of a node as normalized text.
pub fn doc_text(node: &SyntaxNode) -> String {
    comment_group_text(&leading_comments(node))
}

/// Trailing same-line comment of a node as normalized text.
pub fn trailing_comment_text(node: &SyntaxNode) -> String {
    match trailing_comment(node) {
        Some(comment) => comment_group_text(&[comment]),
        None => String::new(),
    }
}

/// 1-based line and byte column of an offset, for human-readable positions.
pub fn line_col(
    source: &str,
    offset: usize,
) -> (usize, usize) {
    let clamped = offset.min(source.len());
    let before = &source[..clamped];
    let line = before.matches('\n').count() + 1;
    let col = clamped - before.rfind('\n').map(|idx| idx + 1).unwrap_or(0) + 1;
    (line, col)
}

#[cfg(test)]
#[path = "../../tests/src/syntax/helpers_tests.rs"]
mod tests;
