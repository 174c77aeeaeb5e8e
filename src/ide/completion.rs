//! Completion of method names inside the second `.bean(...)` argument.

use std::sync::Arc;

use tracing::debug;

use super::call_site::Arg1;
use super::semantics::Semantics;
use crate::core::text_utils::extract_leading_identifier;
use crate::base::FileId;
use crate::parser::{AstNode, SyntaxNode};

/// Kind of completion item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompletionKind {
    Method,
}

impl CompletionKind {
    /// Convert to LSP completion item kind number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            CompletionKind::Method => 2,
        }
    }
}

/// A completion suggestion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionItem {
    /// The text to insert.
    pub label: Arc<str>,
    /// The kind of completion.
    pub kind: CompletionKind,
    /// Detail text (shown after label), the owner class.
    pub detail: Option<Arc<str>>,
    /// Identifier typed so far; hosts filter labels against it.
    pub prefix: Arc<str>,
}

impl CompletionItem {
    /// Create a new completion item.
    pub fn new(label: impl Into<Arc<str>>, kind: CompletionKind) -> Self {
        Self {
            label: label.into(),
            kind,
            detail: None,
            prefix: Arc::from(""),
        }
    }

    /// Set the detail text.
    pub fn with_detail(mut self, detail: impl Into<Arc<str>>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Set the prefix typed so far.
    pub fn with_prefix(mut self, prefix: impl Into<Arc<str>>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Whether the label extends the typed prefix.
    pub fn matches_prefix(&self) -> bool {
        self.label.starts_with(&*self.prefix)
    }
}

/// Method names offered inside the method-spec literal around `node`.
///
/// Every distinct public method of the owner type is offered; the prefix
/// is attached rather than applied.
pub fn list_completions(sema: &Semantics<'_>, file: FileId, node: &SyntaxNode) -> Vec<CompletionItem> {
    if !sema.index().is_ready() {
        debug!(file = file.index(), "index not ready, skipping completion");
        return Vec::new();
    }
    let Some(site) = sema.detect(node) else {
        return Vec::new();
    };
    let Some(Arg1::StringLiteral(lit)) = &site.arg1 else {
        return Vec::new();
    };
    if !lit.syntax().text_range().contains_range(node.text_range()) {
        return Vec::new();
    }
    let Some(owner) = sema.owner_type_for(file, &site) else {
        return Vec::new();
    };
    let Some(owner_data) = sema.index().class(owner) else {
        return Vec::new();
    };

    let text = lit.string_value().unwrap_or_default();
    let prefix = extract_leading_identifier(&text).text;
    let detail: Arc<str> = Arc::from(owner_data.qualified_name.as_str());
    let items: Vec<_> = sema
        .resolver()
        .public_method_names(owner)
        .into_iter()
        .map(|name| {
            CompletionItem::new(name.as_str(), CompletionKind::Method)
                .with_detail(detail.clone())
                .with_prefix(prefix)
        })
        .collect();
    debug!(owner = %owner_data.qualified_name, count = items.len(), "method completions");
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_builder() {
        let item = CompletionItem::new("save", CompletionKind::Method)
            .with_detail("com.acme.OrderService")
            .with_prefix("sa");
        assert_eq!(&*item.label, "save");
        assert_eq!(item.detail.as_deref(), Some("com.acme.OrderService"));
        assert!(item.matches_prefix());
        assert_eq!(item.kind.to_lsp(), 2);
        assert!(!CompletionItem::new("audit", CompletionKind::Method).with_prefix("sa").matches_prefix());
    }
}
