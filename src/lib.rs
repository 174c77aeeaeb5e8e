//! # beanref
//!
//! Resolution of bean references written as strings in route code:
//! `from(..).bean("orderService", "save(${body})")`.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide       → Call-site detection, constant folding, bean resolution,
//!   ↓         references, completion, highlighting, AnalysisHost
//! hir       → Declaration model (classes, methods, fields) and ProjectIndex
//!   ↓
//! parser    → Logos lexer, recursive-descent Java parser, typed AST
//!   ↓
//! core      → Pure text helpers (leading identifiers, literal ranges)
//!   ↓
//! base      → Primitives (FileId, Name, TextRange)
//! ```

// ============================================================================
// MODULES (dependency order: base → core → parser → hir → ide)
// ============================================================================

/// Foundation types: FileId, Name, TextRange
pub mod base;

/// Core utilities: identifier extraction and literal text ranges
pub mod core;

/// Parser: Logos lexer, recursive-descent parser, typed AST
pub mod parser;

/// High-level IR: declaration model and project index
pub mod hir;

/// IDE features: references, completion, highlighting, goto-definition
pub mod ide;

// Re-export foundation types
pub use base::{FileId, Name, TextRange, TextSize};

// Re-export the main entry points
pub use hir::{IndexState, ProjectIndex, SymbolIndex};
pub use ide::{Analysis, AnalysisError, AnalysisHost, BeanConventions};
