//! Declaration data extracted from parsed files.
//!
//! Everything here is plain owned data (no syntax nodes), so an index built
//! from it can be shared across threads. Nodes are reached again through
//! [`NodePtr`] when a query needs the syntax.

use std::sync::Arc;

use smol_str::SmolStr;

use super::ids::{ClassId, NodePtr};
use crate::base::{FileId, TextRange};
use crate::parser::ClassKind;

/// Declared visibility of a class or member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Public,
    Protected,
    Package,
    Private,
}

impl Visibility {
    pub fn is_public(self) -> bool {
        self == Visibility::Public
    }
}

/// A single `import` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportData {
    pub path: SmolStr,
    pub is_static: bool,
    pub is_wildcard: bool,
}

/// Package and imports of one file, shared by every class declared in it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FileScope {
    pub package: Option<SmolStr>,
    pub imports: Vec<ImportData>,
}

impl FileScope {
    /// Fully qualified name brought in by a single-type import of `simple_name`.
    pub fn single_type_import(&self, simple_name: &str) -> Option<&str> {
        self.imports
            .iter()
            .filter(|import| !import.is_static && !import.is_wildcard)
            .map(|import| import.path.as_str())
            .find(|path| last_segment(path) == simple_name)
    }

    /// Packages (or types) imported on demand, `a.b` for `import a.b.*;`
    pub fn wildcard_imports(&self) -> impl Iterator<Item = &str> {
        self.imports
            .iter()
            .filter(|import| !import.is_static && import.is_wildcard)
            .map(|import| import.path.as_str())
    }

    /// Qualify a simple name with this file's package.
    pub fn qualify(&self, simple_name: &str) -> String {
        match &self.package {
            Some(package) => format!("{package}.{simple_name}"),
            None => simple_name.to_string(),
        }
    }
}

/// Last dotted segment of a name (`Service` for `org.x.Service`).
pub fn last_segment(name: &str) -> &str {
    name.rsplit('.').next().unwrap_or(name)
}

/// A value of an annotation attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    String(String),
    Array(Vec<AttributeValue>),
    /// Any other expression (constants, numbers, nested annotations)
    Other,
}

/// An annotation as written on a declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationData {
    /// Name as written (`Service` or `org.springframework.stereotype.Service`)
    pub name: SmolStr,
    /// Fully qualified name, when imports or the written form pin it down
    pub qualified_name: Option<SmolStr>,
    /// Attributes in source order; the shorthand `@A("v")` is stored as `value`
    pub args: Vec<(SmolStr, AttributeValue)>,
}

impl AnnotationData {
    /// Whether this annotation denotes the annotation type `fqn`.
    ///
    /// The resolved name is compared when known, else the simple name
    /// against the last segment of `fqn`.
    pub fn matches(&self, fqn: &str) -> bool {
        match &self.qualified_name {
            Some(qualified) => qualified == fqn,
            None => last_segment(&self.name) == last_segment(fqn),
        }
    }

    pub fn simple_name(&self) -> &str {
        last_segment(&self.name)
    }

    /// First string value of attribute `name`. Arrays yield their first string element.
    pub fn attribute_string(&self, name: &str) -> Option<&str> {
        self.attribute_strings(name).into_iter().next()
    }

    /// Every string value of attribute `name` (arrays flattened).
    pub fn attribute_strings(&self, name: &str) -> Vec<&str> {
        fn collect<'a>(value: &'a AttributeValue, out: &mut Vec<&'a str>) {
            match value {
                AttributeValue::String(s) => out.push(s),
                AttributeValue::Array(items) => items.iter().for_each(|item| collect(item, out)),
                AttributeValue::Other => {}
            }
        }

        let mut out = Vec::new();
        self.args
            .iter()
            .filter(|(key, _)| key == name)
            .for_each(|(_, value)| collect(value, &mut out));
        out
    }
}

/// A method or constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodData {
    pub name: SmolStr,
    pub name_range: TextRange,
    pub range: TextRange,
    pub visibility: Visibility,
    pub is_static: bool,
    pub is_constructor: bool,
    pub annotations: Vec<AnnotationData>,
    /// Return type path without type arguments; `None` for constructors
    pub return_type: Option<SmolStr>,
}

/// A field (one entry per declarator).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldData {
    pub name: SmolStr,
    pub name_range: TextRange,
    pub visibility: Visibility,
    pub is_static: bool,
    pub is_final: bool,
    /// Declared type path without type arguments, `[]` appended for arrays
    pub ty: Option<SmolStr>,
    pub initializer: Option<NodePtr>,
}

impl FieldData {
    /// `final` and declared as `String` (or `java.lang.String`)
    pub fn is_string_constant(&self) -> bool {
        self.is_final
            && matches!(self.ty.as_deref(), Some("String" | "java.lang.String"))
    }
}

/// A class, interface, enum, record or annotation type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassData {
    pub name: SmolStr,
    pub qualified_name: SmolStr,
    pub kind: ClassKind,
    pub file: FileId,
    pub range: TextRange,
    pub name_range: TextRange,
    pub visibility: Visibility,
    pub annotations: Vec<AnnotationData>,
    /// Superclass and interfaces, as written
    pub supertypes: Vec<SmolStr>,
    pub methods: Vec<MethodData>,
    pub fields: Vec<FieldData>,
    /// Enclosing class for nested types
    pub outer: Option<ClassId>,
    pub scope: Arc<FileScope>,
}

impl ClassData {
    pub fn annotation(&self, fqn: &str) -> Option<&AnnotationData> {
        self.annotations.iter().find(|a| a.matches(fqn))
    }

    pub fn has_annotation(&self, fqn: &str) -> bool {
        self.annotation(fqn).is_some()
    }
}

impl MethodData {
    pub fn annotation(&self, fqn: &str) -> Option<&AnnotationData> {
        self.annotations.iter().find(|a| a.matches(fqn))
    }
}
