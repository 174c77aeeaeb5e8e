//! Bean references inside `.bean(...)` arguments.
//!
//! The first argument yields a [`ReferenceKind::BeanName`] reference to the
//! beans it names; a string second argument yields a
//! [`ReferenceKind::BeanMethod`] reference to the methods named by its
//! leading identifier.

use smol_str::SmolStr;
use tracing::debug;

use super::call_site::{Arg0, CallSite};
use super::resolver::BeanTarget;
use super::semantics::Semantics;
use crate::core::text_utils::{
    compute_identifier_range_within_literal, extract_leading_identifier, fallback_inner_range,
    inner_range, quote_string, replace_leading_identifier,
};
use crate::base::{FileId, TextRange, TextSize};
use crate::hir::{ClassId, DeclId};
use crate::parser::{AstNode, Literal, SyntaxNode, unescape};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceKind {
    /// First argument: a bean name
    BeanName,
    /// Second argument: a method spec such as `save(${body})`
    BeanMethod,
}

/// A reference found in one argument of a recognized call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedReference {
    pub kind: ReferenceKind,
    pub file: FileId,
    /// The argument expression carrying the reference
    pub element_range: TextRange,
    /// Source text of that argument
    pub element_text: String,
    /// Navigable range. The delimiter-free inner text for bean names, the
    /// leading identifier for method specs.
    pub anchor_range: TextRange,
    /// Name or method name the reference resolves
    pub name: String,
    /// Beans named by the first argument of the call
    pub beans: Vec<BeanTarget>,
    /// Type the method spec is looked up on
    pub owner: Option<ClassId>,
    /// Declarations the reference resolves to, best first
    pub targets: Vec<DeclId>,
    /// Whether the argument is a plain string literal
    literal: bool,
}

impl ResolvedReference {
    /// The declaration a navigation jumps to.
    pub fn resolve(&self) -> Option<DeclId> {
        self.targets.first().copied()
    }

    /// Method names a method spec may complete to. Bean names offer none.
    pub fn completion_variants(&self, sema: &Semantics<'_>) -> Vec<SmolStr> {
        match (self.kind, self.owner) {
            (ReferenceKind::BeanMethod, Some(owner)) => sema.resolver().public_method_names(owner),
            _ => Vec::new(),
        }
    }

    /// New source text of the argument after renaming the referenced name.
    ///
    /// Bean names are replaced as a whole. Method specs keep everything
    /// around the leading identifier. Arguments that are not plain literals,
    /// and literals without closing delimiters, come back unchanged.
    pub fn rename(&self, new_name: &str) -> String {
        if !self.literal {
            return self.element_text.clone();
        }
        match self.kind {
            ReferenceKind::BeanName if inner_range(&self.element_text).is_none() => {
                self.element_text.clone()
            }
            ReferenceKind::BeanName => quote_string(new_name),
            ReferenceKind::BeanMethod => {
                rename_method_spec(&self.element_text, &self.name, new_name)
            }
        }
    }

    /// Whether `range` falls inside the navigable part of this reference.
    pub fn covers(&self, range: TextRange) -> bool {
        self.anchor_range.contains_range(range)
    }
}

/// Rewrite the method spec `literal` so its leading identifier `name` reads
/// `new_name`. When escapes hide the identifier in the source text, the
/// decoded value is renamed and quoted again.
fn rename_method_spec(literal: &str, name: &str, new_name: &str) -> String {
    let Some(inner) = inner_range(literal) else {
        return literal.to_string();
    };
    let start = usize::from(inner.start());
    let end = usize::from(inner.end());
    if !name.is_empty() && extract_leading_identifier(&literal[start..end]).text != name {
        let value = unescape(&literal[start..end]);
        return quote_string(&replace_leading_identifier(&value, new_name));
    }
    let mut out = String::with_capacity(literal.len() + new_name.len());
    out.push_str(&literal[..start]);
    out.push_str(&replace_leading_identifier(&literal[start..end], new_name));
    out.push_str(&literal[end..]);
    out
}

/// References carried by the arguments of the recognized call around `node`.
///
/// Inside an argument only that argument's reference is reported; on the
/// call itself every argument's reference is. Empty while the index is not
/// ready.
pub fn detect_references(
    sema: &Semantics<'_>,
    file: FileId,
    node: &SyntaxNode,
) -> Vec<ResolvedReference> {
    if !sema.index().is_ready() {
        debug!(file = file.index(), "index not ready, skipping reference detection");
        return Vec::new();
    }
    let Some(site) = sema.detect(node) else {
        return Vec::new();
    };
    let indices = match site.argument_index(node) {
        Some(idx) => vec![idx],
        None => vec![0, 1],
    };
    indices
        .into_iter()
        .filter_map(|idx| match idx {
            0 => bean_name_reference(sema, file, &site),
            _ => bean_method_reference(sema, file, &site),
        })
        .collect()
}

fn bean_name_reference(
    sema: &Semantics<'_>,
    file: FileId,
    site: &CallSite,
) -> Option<ResolvedReference> {
    let (element, anchor_range, literal) = match &site.arg0 {
        Arg0::StringLiteral(lit) => {
            let raw = lit.raw_text();
            let inner = inner_range(&raw).unwrap_or_else(|| fallback_inner_range(&raw));
            let start = lit.syntax().text_range().start();
            (lit.syntax(), inner + start, true)
        }
        Arg0::ClassLiteral(_) => return None,
        Arg0::Other(expr) => (expr.syntax(), expr.syntax().text_range(), false),
    };
    let name = sema.bean_name(file, site)?;
    let beans = sema.resolver().resolve_by_name(&name);
    let targets = beans.iter().map(|bean| bean.decl).collect();
    let owner = beans.first().and_then(|bean| bean.owner);
    Some(ResolvedReference {
        kind: ReferenceKind::BeanName,
        file,
        element_range: element.text_range(),
        element_text: element.text().to_string(),
        anchor_range,
        name,
        beans,
        owner,
        targets,
        literal,
    })
}

fn bean_method_reference(
    sema: &Semantics<'_>,
    file: FileId,
    site: &CallSite,
) -> Option<ResolvedReference> {
    let lit = site.arg1_literal()?;
    let raw = lit.raw_text();
    let name = method_name(&lit);
    let start = lit.syntax().text_range().start();
    let anchor_range = compute_identifier_range_within_literal(&raw) + start;
    let owner = sema.owner_type_for(file, site);
    let targets = match owner {
        Some(owner) => sema.resolver().resolve_method(owner, &name),
        None => Vec::new(),
    };
    let beans = match sema.bean_name(file, site) {
        Some(bean) => sema.resolver().resolve_by_name(&bean),
        None => Vec::new(),
    };
    Some(ResolvedReference {
        kind: ReferenceKind::BeanMethod,
        file,
        element_range: lit.syntax().text_range(),
        element_text: raw,
        anchor_range,
        name,
        beans,
        owner,
        targets,
        literal: true,
    })
}

/// Leading identifier of a method-spec literal's decoded value.
pub(crate) fn method_name(lit: &Literal) -> String {
    match lit.string_value() {
        Some(value) => extract_leading_identifier(&value).text.to_string(),
        None => {
            let raw = lit.raw_text();
            let inner = inner_range(&raw).unwrap_or_else(|| fallback_inner_range(&raw));
            extract_leading_identifier(&raw[inner]).text.to_string()
        }
    }
}

/// Absolute range of a literal's inner text.
pub(crate) fn literal_inner_range(lit: &Literal) -> Option<TextRange> {
    let raw = lit.raw_text();
    let start: TextSize = lit.syntax().text_range().start();
    inner_range(&raw).map(|inner| inner + start)
}
