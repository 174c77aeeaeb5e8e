//! Go-to-definition for bean references.

use std::sync::Arc;

use super::references::detect_references;
use super::semantics::Semantics;
use crate::base::{FileId, TextRange};
use crate::hir::{DeclId, SymbolIndex};
use crate::parser::SyntaxNode;

/// What a navigation target is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TargetKind {
    Class,
    Method,
}

/// A declaration to navigate to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationTarget {
    /// The file containing the target.
    pub file: FileId,
    /// The whole declaration.
    pub full_range: TextRange,
    /// The declaration's name.
    pub focus_range: TextRange,
    pub name: Arc<str>,
    pub kind: TargetKind,
    /// Enclosing class for methods.
    pub container: Option<Arc<str>>,
}

impl NavigationTarget {
    /// Build a target for a class or method declaration. Fields never are bean targets.
    pub fn from_decl(index: &dyn SymbolIndex, decl: DeclId) -> Option<Self> {
        let class = index.class(decl.class())?;
        match decl {
            DeclId::Class(_) => Some(Self {
                file: class.file,
                full_range: class.range,
                focus_range: class.name_range,
                name: Arc::from(class.name.as_str()),
                kind: TargetKind::Class,
                container: None,
            }),
            DeclId::Method(..) => {
                let method = index.method(decl)?;
                Some(Self {
                    file: class.file,
                    full_range: method.range,
                    focus_range: method.name_range,
                    name: Arc::from(method.name.as_str()),
                    kind: TargetKind::Method,
                    container: Some(Arc::from(class.qualified_name.as_str())),
                })
            }
            DeclId::Field(..) => None,
        }
    }
}

/// Result of a go-to-definition request.
#[derive(Clone, Debug, Default)]
pub struct GotoResult {
    /// The targets to jump to.
    pub targets: Vec<NavigationTarget>,
}

impl GotoResult {
    /// Create an empty result (no targets found).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check if any targets were found.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// Targets of the bean reference under `node`.
///
/// When `node` sits on the call itself rather than inside an argument, the
/// first argument's targets come first.
pub fn goto_definition(sema: &Semantics<'_>, file: FileId, node: &SyntaxNode) -> GotoResult {
    let targets = detect_references(sema, file, node)
        .into_iter()
        .flat_map(|reference| reference.targets)
        .filter_map(|decl| NavigationTarget::from_decl(sema.index(), decl))
        .collect();
    GotoResult { targets }
}
