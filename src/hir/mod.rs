//! High-level IR (HIR): declaration model and project index.
//!
//! Parsed files are lowered into plain declaration data ([`ClassData`],
//! [`MethodData`], [`FieldData`]) and collected into a [`ProjectIndex`].
//! The bean resolver only talks to the [`SymbolIndex`] trait, so any
//! other index (a test fake, a host's own model) can stand in.
//!
//! ## Key Types
//!
//! - [`ClassId`] / [`DeclId`]: Dense identifiers for classes and their members
//! - [`NodePtr`]: Stable pointer back into a file's syntax tree
//! - [`SymbolIndex`]: Queries the resolver needs (annotations, short names, types)
//! - [`ProjectIndex`]: In-memory implementation with readiness state
//!
//! ## Layers
//!
//! ```text
//! parse_java(text)          ← per-file green tree
//!     │
//!     ▼
//! extract_classes(file)     ← ClassData for every (nested) type
//!     │
//!     ▼
//! ProjectIndex              ← project-wide tables
//! ```

mod data;
mod extract;
mod ids;
mod index;

pub use data::{
    AnnotationData, AttributeValue, ClassData, FieldData, FileScope, ImportData, MethodData,
    Visibility, last_segment,
};
pub use extract::extract_classes;
pub use ids::{ClassId, DeclId, NodePtr};
pub use index::{IndexState, ProjectIndex, SymbolIndex};
