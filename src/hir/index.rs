//! Project-wide symbol index.
//!
//! [`SymbolIndex`] is the query surface the bean resolver is written
//! against; [`ProjectIndex`] is the in-memory implementation built from
//! parsed files. Tests and hosts can substitute their own implementation.

use indexmap::IndexMap;
use rustc_hash::{FxHashMap, FxHashSet};
use smol_str::SmolStr;
use tracing::trace;

use super::data::{ClassData, FieldData, MethodData, last_segment};
use super::extract::extract_classes;
use super::ids::{ClassId, DeclId};
use crate::base::{FileId, TextRange};
use crate::parser::SourceFile;

/// Whether the index may be queried.
///
/// While a host is still (re)indexing, scans would see a partial project,
/// so queries report nothing instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndexState {
    Indexing,
    #[default]
    Ready,
}

/// Read-only queries over every class known to the project.
pub trait SymbolIndex {
    /// `false` while indexing; callers must not scan in that state
    fn is_ready(&self) -> bool;

    /// Classes carrying an annotation that denotes `fqn`, in index order
    fn classes_annotated_with(&self, fqn: &str) -> Vec<ClassId>;

    /// Classes whose simple name is `name`, in index order
    fn classes_by_short_name(&self, name: &str) -> Vec<ClassId>;

    /// Every known simple class name, in a stable order
    fn all_short_names(&self) -> Vec<SmolStr>;

    fn class_by_qualified_name(&self, fqn: &str) -> Option<ClassId>;

    fn class(&self, id: ClassId) -> Option<&ClassData>;

    /// Innermost class of `file` whose range contains `range`
    fn class_at(&self, file: FileId, range: TextRange) -> Option<ClassId>;

    fn method(&self, decl: DeclId) -> Option<&MethodData> {
        match decl {
            DeclId::Method(class, idx) => self.class(class)?.methods.get(idx as usize),
            _ => None,
        }
    }

    fn field(&self, decl: DeclId) -> Option<&FieldData> {
        match decl {
            DeclId::Field(class, idx) => self.class(class)?.fields.get(idx as usize),
            _ => None,
        }
    }

    /// Resolve a type name as written inside class `context`.
    ///
    /// Tries, in order: nested classes of `context` and its enclosing
    /// classes, qualified names, single-type imports, the same package,
    /// on-demand imports, and finally the first class with that simple name.
    fn resolve_type(&self, name: &str, context: ClassId) -> Option<ClassId> {
        let name = strip_type_decorations(name);
        if name.is_empty() {
            return None;
        }
        let class = self.class(context)?;

        if let Some((first, rest)) = name.split_once('.') {
            if let Some(id) = self.class_by_qualified_name(name) {
                return Some(id);
            }
            // `Outer.Inner` relative to what `Outer` resolves to
            let head = self.resolve_type(first, context)?;
            let head_name = &self.class(head)?.qualified_name;
            return self.class_by_qualified_name(&format!("{head_name}.{rest}"));
        }

        let mut enclosing = Some(context);
        while let Some(id) = enclosing {
            let data = self.class(id)?;
            if data.name == name {
                return Some(id);
            }
            if let Some(nested) =
                self.class_by_qualified_name(&format!("{}.{}", data.qualified_name, name))
            {
                return Some(nested);
            }
            enclosing = data.outer;
        }

        let scope = &class.scope;
        if let Some(imported) = scope.single_type_import(name) {
            if let Some(id) = self.class_by_qualified_name(imported) {
                return Some(id);
            }
        }
        if let Some(id) = self.class_by_qualified_name(&scope.qualify(name)) {
            return Some(id);
        }
        for package in scope.wildcard_imports() {
            if let Some(id) = self.class_by_qualified_name(&format!("{package}.{name}")) {
                return Some(id);
            }
        }
        self.classes_by_short_name(name).into_iter().next()
    }

    /// Superclasses and interfaces of `id`, transitively, nearest first.
    fn ancestors(&self, id: ClassId) -> Vec<ClassId> {
        let mut seen = FxHashSet::default();
        seen.insert(id);
        let mut out = Vec::new();
        let mut queue = std::collections::VecDeque::from([id]);
        while let Some(current) = queue.pop_front() {
            let Some(data) = self.class(current) else {
                continue;
            };
            for supertype in &data.supertypes {
                if let Some(parent) = self.resolve_type(supertype, current) {
                    if seen.insert(parent) {
                        out.push(parent);
                        queue.push_back(parent);
                    }
                }
            }
        }
        out
    }

    /// Methods named `name` on `id` (and its ancestors when asked).
    fn find_methods_by_name(&self, id: ClassId, name: &str, include_ancestors: bool) -> Vec<DeclId> {
        let mut classes = vec![id];
        if include_ancestors {
            classes.extend(self.ancestors(id));
        }
        classes
            .into_iter()
            .filter_map(|class| Some((class, self.class(class)?)))
            .flat_map(|(class, data)| {
                data.methods
                    .iter()
                    .enumerate()
                    .filter(|(_, m)| m.name == name)
                    .map(move |(idx, _)| DeclId::Method(class, idx as u32))
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    /// Every method visible on `id`: its own first, then inherited ones.
    fn all_methods(&self, id: ClassId) -> Vec<DeclId> {
        std::iter::once(id)
            .chain(self.ancestors(id))
            .filter_map(|class| Some((class, self.class(class)?)))
            .flat_map(|(class, data)| {
                (0..data.methods.len()).map(move |idx| DeclId::Method(class, idx as u32))
            })
            .collect()
    }

    /// Field `name` as seen from inside `id`: own, inherited, then enclosing classes.
    fn find_field(&self, id: ClassId, name: &str) -> Option<DeclId> {
        let mut enclosing = Some(id);
        while let Some(current) = enclosing {
            for class in std::iter::once(current).chain(self.ancestors(current)) {
                let Some(data) = self.class(class) else {
                    continue;
                };
                if let Some(idx) = data.fields.iter().position(|f| f.name == name) {
                    return Some(DeclId::Field(class, idx as u32));
                }
            }
            enclosing = self.class(current)?.outer;
        }
        None
    }
}

/// `java.util.List<String>[]` becomes `java.util.List`.
fn strip_type_decorations(name: &str) -> &str {
    let name = name.split('<').next().unwrap_or(name);
    name.trim_end_matches("[]").trim()
}

/// In-memory [`SymbolIndex`] over extracted classes.
#[derive(Clone, Debug, Default)]
pub struct ProjectIndex {
    /// The single source of truth; `ClassId` indexes this vector.
    classes: Vec<ClassData>,
    /// Simple name -> classes (IndexMap preserves insertion order).
    by_short_name: IndexMap<SmolStr, Vec<ClassId>>,
    by_qualified_name: FxHashMap<SmolStr, ClassId>,
    /// Annotation simple name -> annotated classes.
    by_annotation: FxHashMap<SmolStr, Vec<ClassId>>,
    by_file: FxHashMap<FileId, Vec<ClassId>>,
    state: IndexState,
}

impl ProjectIndex {
    /// Create a new empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Extract and add every class declared in `source`.
    pub fn add_file(&mut self, file: FileId, source: &SourceFile) {
        let classes = extract_classes(file, source, self.classes.len() as u32);
        for class in classes {
            self.insert(class);
        }
    }

    fn insert(&mut self, class: ClassData) {
        let id = ClassId::new(self.classes.len() as u32);
        self.by_short_name
            .entry(class.name.clone())
            .or_default()
            .push(id);
        // first declaration wins on duplicate qualified names
        self.by_qualified_name
            .entry(class.qualified_name.clone())
            .or_insert(id);
        for annotation in &class.annotations {
            let ids = self
                .by_annotation
                .entry(SmolStr::new(annotation.simple_name()))
                .or_default();
            if ids.last() != Some(&id) {
                ids.push(id);
            }
        }
        self.by_file.entry(class.file).or_default().push(id);
        trace!(name = %class.qualified_name, id = id.index(), "indexed class");
        self.classes.push(class);
    }

    pub fn state(&self) -> IndexState {
        self.state
    }

    pub fn set_state(&mut self, state: IndexState) {
        self.state = state;
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn classes(&self) -> impl Iterator<Item = (ClassId, &ClassData)> {
        self.classes
            .iter()
            .enumerate()
            .map(|(idx, class)| (ClassId::new(idx as u32), class))
    }

    pub fn classes_in_file(&self, file: FileId) -> &[ClassId] {
        self.by_file.get(&file).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl SymbolIndex for ProjectIndex {
    fn is_ready(&self) -> bool {
        self.state == IndexState::Ready
    }

    fn classes_annotated_with(&self, fqn: &str) -> Vec<ClassId> {
        self.by_annotation
            .get(last_segment(fqn))
            .into_iter()
            .flatten()
            .copied()
            .filter(|&id| self.classes[id.index()].has_annotation(fqn))
            .collect()
    }

    fn classes_by_short_name(&self, name: &str) -> Vec<ClassId> {
        self.by_short_name.get(name).cloned().unwrap_or_default()
    }

    fn all_short_names(&self) -> Vec<SmolStr> {
        self.by_short_name.keys().cloned().collect()
    }

    fn class_by_qualified_name(&self, fqn: &str) -> Option<ClassId> {
        self.by_qualified_name.get(fqn).copied()
    }

    fn class(&self, id: ClassId) -> Option<&ClassData> {
        self.classes.get(id.index())
    }

    fn class_at(&self, file: FileId, range: TextRange) -> Option<ClassId> {
        self.classes_in_file(file)
            .iter()
            .copied()
            .filter(|&id| self.classes[id.index()].range.contains_range(range))
            .min_by_key(|&id| self.classes[id.index()].range.len())
    }
}
