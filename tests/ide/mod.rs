//! IDE feature tests
//!
//! Tests for:
//! - Bean reference detection
//! - Bean resolution strategies
//! - Method-name completion
//! - Highlighting
//! - Go to definition
//! - Rename
//! - AnalysisHost snapshots

pub mod tests_analysis_host;
pub mod tests_completion;
pub mod tests_goto;
pub mod tests_highlight;
pub mod tests_references;
pub mod tests_rename;
pub mod tests_resolver;
