//! HIR tests
//!
//! Tests for:
//! - Declaration extraction across files
//! - Project index queries

pub mod tests_project_index;
