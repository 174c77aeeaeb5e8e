//! Foundation types for beanref.
//!
//! This module provides fundamental types used throughout the engine:
//! - [`FileId`] - Dense file identifiers handed out by the analysis host
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//! - [`Name`] - Cheap-to-clone identifier strings
//!
//! This module has NO dependencies on other beanref modules.

mod file_id;

pub use file_id::FileId;

/// An identifier or dotted name. Short names stay inline, clones are cheap.
pub type Name = smol_str::SmolStr;

// Re-export text-size types for convenience
pub use text_size;
pub use text_size::{TextRange, TextSize};
