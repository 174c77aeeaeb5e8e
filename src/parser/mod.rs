//! Rowan-based lossless parser for the Java host language.
//!
//! This module provides a lossless, error-tolerant parser using:
//! - **logos** for fast lexing
//! - **rowan** for the CST (Concrete Syntax Tree)
//!
//! This is the rust-analyzer approach: we build a lossless CST that preserves
//! all whitespace and comments, then extract an AST layer on top.
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → Tokens with SyntaxKind
//!     ↓
//! Parser → GreenNode tree (immutable, cheap to clone, Send + Sync)
//!     ↓
//! SyntaxNode (rowan) → CST with parent pointers, built per query
//!     ↓
//! AST layer → Typed wrappers over SyntaxNode
//!     ↓
//! HIR → Declaration model and project index
//! ```

#[allow(clippy::module_inception)]
mod parser;

pub mod ast;
mod lexer;
mod syntax_kind;

pub use ast::*;
pub use lexer::{Lexer, Token, tokenize};
pub use parser::{Parse, SyntaxError, parse_java};
pub use syntax_kind::{JavaLanguage, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};

/// Re-export rowan types for convenience
pub use rowan::{GreenNode, TextRange, TextSize};
