//! Identifiers for declarations in the project index.

use crate::base::FileId;
use crate::parser::{SyntaxKind, SyntaxNode};
use rowan::{NodeOrToken, TextRange};

/// Dense index of a class inside a [`ProjectIndex`](super::ProjectIndex).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClassId(u32);

impl ClassId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A declaration a bean reference can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DeclId {
    Class(ClassId),
    /// The n-th method of a class, in source order
    Method(ClassId, u32),
    /// The n-th field of a class, in source order
    Field(ClassId, u32),
}

impl DeclId {
    /// The class that declares (or is) this declaration
    pub fn class(self) -> ClassId {
        match self {
            DeclId::Class(id) | DeclId::Method(id, _) | DeclId::Field(id, _) => id,
        }
    }
}

/// A stable pointer to a syntax node inside a file snapshot.
///
/// Syntax nodes are rebuilt per query from green trees, so declarations
/// remember where their node lives instead of holding it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodePtr {
    pub file: FileId,
    pub kind: SyntaxKind,
    pub range: TextRange,
}

impl NodePtr {
    pub fn new(file: FileId, node: &SyntaxNode) -> Self {
        Self {
            file,
            kind: node.kind(),
            range: node.text_range(),
        }
    }

    /// Re-locate the node inside `root`. `None` if the tree no longer has it.
    pub fn to_node(&self, root: &SyntaxNode) -> Option<SyntaxNode> {
        if !root.text_range().contains_range(self.range) {
            return None;
        }
        let start = match root.covering_element(self.range) {
            NodeOrToken::Node(node) => node,
            NodeOrToken::Token(token) => token.parent()?,
        };
        start
            .ancestors()
            .find(|n| n.kind() == self.kind && n.text_range() == self.range)
    }
}
