//! Bean name resolution.
//!
//! A bean name is looked up through an ordered chain of strategies:
//!
//! 1. Factory methods: `@Bean` methods of `@Configuration` classes, named by
//!    their `name`/`value` attribute or the method name.
//! 2. Stereotype classes: classes carrying one of the stereotype annotations,
//!    named by `@Qualifier`, the stereotype's own `value`/`name`, or the
//!    decapitalized class name.
//! 3. Short-name fallback: any class whose decapitalized simple name equals
//!    the bean name. Only consulted when 1 and 2 found nothing.

use rustc_hash::FxHashSet;
use smol_str::SmolStr;
use tracing::{debug, trace};

use super::conventions::BeanConventions;
use crate::core::text_utils::decapitalize;
use crate::hir::{ClassId, DeclId, SymbolIndex};

/// Which strategy produced a [`BeanTarget`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BeanStrategy {
    FactoryMethod,
    Stereotype,
    ShortName,
}

/// A declaration that provides the bean with a given name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeanTarget {
    /// The factory method or the component class
    pub decl: DeclId,
    /// The bean name the target matched under
    pub name: SmolStr,
    /// Type on which methods named by the second argument are looked up.
    /// The class itself for components, the return type for factory methods.
    pub owner: Option<ClassId>,
    pub strategy: BeanStrategy,
}

/// Stateless resolver over an injected [`SymbolIndex`].
#[derive(Clone, Copy)]
pub struct BeanResolver<'a> {
    index: &'a dyn SymbolIndex,
    conventions: &'a BeanConventions,
}

impl<'a> BeanResolver<'a> {
    pub fn new(index: &'a dyn SymbolIndex, conventions: &'a BeanConventions) -> Self {
        Self { index, conventions }
    }

    /// Every declaration providing bean `name`, in strategy order.
    ///
    /// Empty while the index is not ready.
    pub fn resolve_by_name(&self, name: &str) -> Vec<BeanTarget> {
        if !self.index.is_ready() {
            debug!(name, "index not ready, skipping bean resolution");
            return Vec::new();
        }
        if name.is_empty() {
            return Vec::new();
        }

        let mut targets = self.factory_methods(name);
        targets.extend(self.stereotype_classes(name));
        if !targets.is_empty() {
            debug!(name, count = targets.len(), "resolved bean by annotations");
            return dedup_targets(targets);
        }

        debug!(name, "no annotated bean, scanning class names");
        let fallback = self.short_name_fallback(name);
        if !fallback.is_empty() {
            debug!(name, count = fallback.len(), "resolved bean by class name");
        }
        dedup_targets(fallback)
    }

    /// Owner type of the first target providing bean `name`.
    pub fn owner_of(&self, name: &str) -> Option<ClassId> {
        self.resolve_by_name(name).into_iter().next()?.owner
    }

    fn factory_methods(&self, name: &str) -> Vec<BeanTarget> {
        let mut out = Vec::new();
        for class_id in self.index.classes_annotated_with(&self.conventions.configuration) {
            let Some(class) = self.index.class(class_id) else {
                continue;
            };
            for (idx, method) in class.methods.iter().enumerate() {
                let Some(factory) = method.annotation(&self.conventions.factory) else {
                    continue;
                };
                let mut names = factory.attribute_strings("name");
                if names.is_empty() {
                    names = factory.attribute_strings("value");
                }
                if names.is_empty() {
                    names.push(&method.name);
                }
                trace!(class = %class.name, method = %method.name, ?names, "factory candidate");
                if !names.contains(&name) {
                    continue;
                }
                let owner = method
                    .return_type
                    .as_deref()
                    .and_then(|ty| self.index.resolve_type(ty, class_id));
                out.push(BeanTarget {
                    decl: DeclId::Method(class_id, idx as u32),
                    name: SmolStr::new(name),
                    owner,
                    strategy: BeanStrategy::FactoryMethod,
                });
            }
        }
        out
    }

    fn stereotype_classes(&self, name: &str) -> Vec<BeanTarget> {
        let mut out = Vec::new();
        for stereotype in &self.conventions.stereotypes {
            for class_id in self.index.classes_annotated_with(stereotype) {
                let Some(class) = self.index.class(class_id) else {
                    continue;
                };
                let qualifier = class
                    .annotation(&self.conventions.qualifier)
                    .and_then(|a| a.attribute_string("value"));
                let declared = class.annotation(stereotype).and_then(|a| {
                    a.attribute_string("value").or_else(|| a.attribute_string("name"))
                });
                let default_name = decapitalize(&class.name);
                let matched = qualifier == Some(name)
                    || declared == Some(name)
                    || default_name == name;
                trace!(
                    class = %class.name,
                    ?qualifier,
                    ?declared,
                    default_name,
                    matched,
                    "stereotype candidate"
                );
                if matched {
                    out.push(BeanTarget {
                        decl: DeclId::Class(class_id),
                        name: SmolStr::new(name),
                        owner: Some(class_id),
                        strategy: BeanStrategy::Stereotype,
                    });
                }
            }
        }
        out
    }

    fn short_name_fallback(&self, name: &str) -> Vec<BeanTarget> {
        self.index
            .all_short_names()
            .into_iter()
            .filter(|short| decapitalize(short) == name)
            .flat_map(|short| self.index.classes_by_short_name(&short))
            .map(|class_id| BeanTarget {
                decl: DeclId::Class(class_id),
                name: SmolStr::new(name),
                owner: Some(class_id),
                strategy: BeanStrategy::ShortName,
            })
            .collect()
    }

    /// Methods named `name` on `owner` or its ancestors, own ones first.
    pub fn resolve_method(&self, owner: ClassId, name: &str) -> Vec<DeclId> {
        if name.is_empty() || !self.index.is_ready() {
            return Vec::new();
        }
        self.index.find_methods_by_name(owner, name, true)
    }

    /// Whether `owner` (or an ancestor) has a public method named `name`.
    pub fn has_public_method(&self, owner: ClassId, name: &str) -> bool {
        self.resolve_method(owner, name)
            .into_iter()
            .filter_map(|decl| self.index.method(decl))
            .any(|method| method.visibility.is_public())
    }

    /// Distinct names of the public methods callable on `owner`.
    pub fn public_method_names(&self, owner: ClassId) -> Vec<SmolStr> {
        if !self.index.is_ready() {
            return Vec::new();
        }
        let mut seen = FxHashSet::default();
        self.index
            .all_methods(owner)
            .into_iter()
            .filter_map(|decl| self.index.method(decl))
            .filter(|method| method.visibility.is_public() && !method.is_constructor)
            .filter(|method| seen.insert(method.name.clone()))
            .map(|method| method.name.clone())
            .collect()
    }
}

/// A class can carry several stereotypes; keep its first match only.
fn dedup_targets(targets: Vec<BeanTarget>) -> Vec<BeanTarget> {
    let mut seen = FxHashSet::default();
    targets
        .into_iter()
        .filter(|target| seen.insert(target.decl))
        .collect()
}
