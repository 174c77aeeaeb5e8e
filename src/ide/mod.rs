//! IDE features: bean references inside `.bean(...)` calls.
//!
//! This module turns the declaration model (HIR) into navigation,
//! completion, highlighting and rename for route code such as
//!
//! ```java
//! from("direct:orders").bean("orderService", "save(${body})");
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: every query takes a [`Semantics`] (index, conventions,
//!    syntax trees) and a node, and returns plain data
//! 2. **Total**: unresolvable input yields an empty result, never an error
//! 3. **Snapshots**: [`Analysis`] is immutable and shareable across threads
//!
//! ## Usage
//!
//! The recommended way to use this module is through `AnalysisHost`:
//!
//! ```ignore
//! let mut host = AnalysisHost::new();
//! let file = host.set_file_content("Route.java", text);
//!
//! let analysis = host.analysis();
//! let refs = analysis.detect_references(file, offset)?;
//! let items = analysis.list_completions(file, offset)?;
//! ```

mod analysis;
mod call_site;
mod completion;
mod constant;
mod conventions;
mod goto;
mod highlight;
mod references;
mod resolver;
mod semantics;

pub use analysis::{Analysis, AnalysisError, AnalysisHost, TextEdit};
pub use call_site::{
    Arg0, Arg1, CallSite, detect, is_arg0, is_arg1, is_string_argument_of_recognized_call,
};
pub use completion::{CompletionItem, CompletionKind, list_completions};
pub use constant::ConstantEvaluator;
pub use conventions::BeanConventions;
pub use goto::{GotoResult, NavigationTarget, TargetKind, goto_definition};
pub use highlight::{Highlight, HighlightKind, decide_highlight, highlights};
pub use references::{ReferenceKind, ResolvedReference, detect_references};
pub use resolver::{BeanResolver, BeanStrategy, BeanTarget};
pub use semantics::{Semantics, SyntaxSource};
