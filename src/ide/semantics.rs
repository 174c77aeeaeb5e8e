//! Query context shared by the IDE entry points.

use crate::base::FileId;
use crate::hir::{ClassId, SymbolIndex, last_segment};
use crate::parser::{AstNode, SyntaxNode};

use super::call_site::{Arg0, CallSite, detect};
use super::constant::ConstantEvaluator;
use super::conventions::BeanConventions;
use super::resolver::BeanResolver;

/// Gives access to the syntax tree of any file in the snapshot.
///
/// Constant folding follows field initializers into other files, so the
/// evaluator needs more than the file the query started in.
pub trait SyntaxSource {
    fn syntax_root(&self, file: FileId) -> Option<SyntaxNode>;
}

/// Everything a bean-reference query reads: the symbol index, the naming
/// conventions, and the syntax trees.
#[derive(Clone, Copy)]
pub struct Semantics<'a> {
    index: &'a dyn SymbolIndex,
    conventions: &'a BeanConventions,
    sources: &'a dyn SyntaxSource,
}

impl<'a> Semantics<'a> {
    pub fn new(
        index: &'a dyn SymbolIndex,
        conventions: &'a BeanConventions,
        sources: &'a dyn SyntaxSource,
    ) -> Self {
        Self {
            index,
            conventions,
            sources,
        }
    }

    pub fn index(&self) -> &'a dyn SymbolIndex {
        self.index
    }

    pub fn conventions(&self) -> &'a BeanConventions {
        self.conventions
    }

    pub fn resolver(&self) -> BeanResolver<'a> {
        BeanResolver::new(self.index, self.conventions)
    }

    pub fn evaluator(&self) -> ConstantEvaluator<'a> {
        ConstantEvaluator::new(self.index, self.sources)
    }

    pub fn detect(&self, node: &SyntaxNode) -> Option<CallSite> {
        detect(node, self.conventions)
    }

    /// The bean name passed as the first argument: a string literal, or an
    /// expression that folds to a string constant.
    pub fn bean_name(&self, file: FileId, site: &CallSite) -> Option<String> {
        match &site.arg0 {
            Arg0::StringLiteral(lit) => lit.string_value(),
            Arg0::ClassLiteral(_) => None,
            Arg0::Other(expr) => self.evaluator().evaluate(file, expr),
        }
    }

    /// Type whose methods the second argument names.
    ///
    /// A class literal names it directly; otherwise it is the owner of the
    /// first bean the first argument resolves to.
    pub fn owner_type_for(&self, file: FileId, site: &CallSite) -> Option<ClassId> {
        if !self.index.is_ready() {
            return None;
        }
        match &site.arg0 {
            Arg0::ClassLiteral(class) => {
                let ty = class.type_text()?;
                match self.index.class_at(file, site.call.syntax().text_range()) {
                    Some(context) => self.index.resolve_type(&ty, context),
                    None => self.index.class_by_qualified_name(&ty).or_else(|| {
                        self.index
                            .classes_by_short_name(last_segment(&ty))
                            .into_iter()
                            .next()
                    }),
                }
            }
            _ => {
                let name = self.bean_name(file, site)?;
                self.resolver().owner_of(&name)
            }
        }
    }
}
