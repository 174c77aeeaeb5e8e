//! Deciding which bean-reference ranges are navigable.

use tracing::{debug, trace};

use super::call_site::{detect, is_string_argument_of_recognized_call};
use super::references::{literal_inner_range, method_name};
use super::semantics::Semantics;
use crate::core::text_utils::compute_identifier_range_within_literal;
use crate::base::{FileId, TextRange};
use crate::parser::{AstNode, Literal, MethodCallExpr, SyntaxNode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighlightKind {
    BeanName,
    BeanMethod,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Highlight {
    pub range: TextRange,
    pub kind: HighlightKind,
}

/// The range to mark as navigable for a literal argument of a recognized call.
///
/// - first argument: the inner text, when the bean name resolves
/// - second argument: the leading identifier, when the owner type has a
///   public method of that name
///
/// Reports nothing while the index is not ready.
pub fn decide_highlight(sema: &Semantics<'_>, file: FileId, node: &SyntaxNode) -> Option<Highlight> {
    if !sema.index().is_ready() {
        debug!(file = file.index(), "index not ready, skipping highlight");
        return None;
    }
    if !is_string_argument_of_recognized_call(node, sema.conventions()) {
        return None;
    }
    let lit = Literal::cast(node.clone())?;
    let site = detect(node, sema.conventions())?;

    if site.arg0_expr() == node {
        let name = lit.string_value()?;
        if sema.resolver().resolve_by_name(&name).is_empty() {
            return None;
        }
        let range = literal_inner_range(&lit)?;
        trace!(name, ?range, "bean name highlight");
        return Some(Highlight {
            range,
            kind: HighlightKind::BeanName,
        });
    }

    let raw = lit.raw_text();
    let name = method_name(&lit);
    if name.is_empty() || literal_inner_range(&lit).is_none() {
        return None;
    }
    let owner = sema.owner_type_for(file, &site)?;
    if !sema.resolver().has_public_method(owner, &name) {
        return None;
    }
    let range = compute_identifier_range_within_literal(&raw) + node.text_range().start();
    trace!(name, ?range, "bean method highlight");
    Some(Highlight {
        range,
        kind: HighlightKind::BeanMethod,
    })
}

/// Every navigable range in the tree rooted at `root`, in source order.
pub fn highlights(sema: &Semantics<'_>, file: FileId, root: &SyntaxNode) -> Vec<Highlight> {
    if !sema.index().is_ready() {
        debug!(file = file.index(), "index not ready, skipping highlights");
        return Vec::new();
    }
    root.descendants()
        .filter_map(MethodCallExpr::cast)
        .filter(|call| call.name_text().as_deref() == Some(sema.conventions().call_name.as_str()))
        .flat_map(|call| call.args())
        .filter_map(|arg| decide_highlight(sema, file, arg.syntax()))
        .collect()
}
