pub mod ast;
pub mod cst;
pub mod helpers;
pub mod kind;
pub mod lexer;
pub mod parser;

use dashmap::DashMap;
use std::sync::Arc;

use crate::syntax::cst::SyntaxNode;
use crate::syntax::parser::Parser;
use crate::vfs::FileId;

/// Immutable syntax snapshot for a parsed source file.
#[derive(Clone, Debug)]
pub struct SyntaxTree {
    green: rowan::GreenNode,
    source: Arc<str>,
}

impl SyntaxTree {
    pub fn parse(source: &str) -> Self {
        let parser = Parser::new(source);
        let green = parser.parse();
        Self {
            green,
            source: Arc::from(source),
        }
    }

    pub fn root(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.green.clone())
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

/// Thread-safe store of parsed syntax trees for all loaded files.
///
/// Filled during workspace loading; read-only for the lifetime of a query.
#[derive(Debug)]
pub struct DocumentTrees {
    snapshots: DashMap<FileId, SyntaxTree>,
}

impl DocumentTrees {
    pub fn new() -> Self {
        Self {
            snapshots: DashMap::new(),
        }
    }

    /// Full parse of a file, replacing any existing snapshot.
    pub fn parse_and_store(&self, file: &FileId, source: &str) -> SyntaxTree {
        let tree = SyntaxTree::parse(source);
        self.snapshots.insert(file.clone(), tree.clone());
        tree
    }

    /// Get an Arc-cloned snapshot. No lock held after return.
    pub fn get(&self, file: &FileId) -> Option<SyntaxTree> {
        self.snapshots.get(file).map(|entry| entry.clone())
    }

    pub fn contains(&self, file: &FileId) -> bool {
        self.snapshots.contains_key(file)
    }
}

impl Default for DocumentTrees {
    fn default() -> Self {
        Self::new()
    }
}
