//! AnalysisHost and Analysis: state management for bean-reference queries.
//!
//! The `AnalysisHost` owns all mutable inputs and hands out `Analysis`
//! snapshots for querying. A snapshot is immutable, `Send + Sync`, and
//! cheap to clone, so queries from several threads see the same project.
//!
//! ## Usage
//!
//! ```
//! use beanref::ide::AnalysisHost;
//!
//! let mut host = AnalysisHost::new();
//! host.set_file_content(
//!     "OrderService.java",
//!     "@org.springframework.stereotype.Service public class OrderService { public void save() {} }",
//! );
//! let route = "class Route { void configure() { from(\"direct:a\").bean(\"orderService\", \"save\"); } }";
//! let file = host.set_file_content("Route.java", route);
//!
//! let analysis = host.analysis();
//! let offset = route.find("save").unwrap() as u32;
//! let result = analysis.goto_definition(file, offset.into()).unwrap();
//! assert_eq!(&*result.targets[0].name, "save");
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, info};

use super::completion::{CompletionItem, list_completions};
use super::conventions::BeanConventions;
use super::goto::{GotoResult, goto_definition};
use super::highlight::{Highlight, decide_highlight, highlights};
use super::references::{ReferenceKind, ResolvedReference, detect_references};
use super::semantics::{Semantics, SyntaxSource};
use crate::core::text_utils::is_identifier;
use crate::base::{FileId, TextRange, TextSize};
use crate::hir::{IndexState, ProjectIndex};
use crate::parser::{
    AstNode, GreenNode, Parse, SourceFile, SyntaxError, SyntaxKind, SyntaxNode, parse_java,
};

/// Misuse of the analysis API by a host.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("unknown file {0:?}")]
    UnknownFile(FileId),

    #[error("offset {offset:?} is past the end of file {file:?} (length {len:?})")]
    OffsetOutOfBounds {
        file: FileId,
        offset: TextSize,
        len: TextSize,
    },

    #[error("invalid name for rename: {0:?}")]
    InvalidName(String),
}

impl AnalysisError {
    /// Create an invalid-name error.
    pub fn invalid_name(name: impl Into<String>) -> Self {
        Self::InvalidName(name.into())
    }
}

/// Replace `range` of `file` with `new_text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub file: FileId,
    pub range: TextRange,
    pub new_text: String,
}

/// One input file as the host knows it.
struct FileInput {
    path: String,
    text: Arc<str>,
    /// `None` until the next `analysis()` reparses it
    parse: Option<Parse>,
}

/// One file as a snapshot sees it.
#[derive(Debug, Clone)]
struct FileSnapshot {
    text: Arc<str>,
    green: GreenNode,
    errors: Arc<[SyntaxError]>,
}

/// Owns all mutable state for bean-reference analysis.
///
/// Apply changes via `set_file_content()` and `remove_file()`,
/// then get a consistent snapshot via `analysis()`.
pub struct AnalysisHost {
    files: HashMap<FileId, FileInput>,
    /// Map from file path to FileId; ids are never reused
    file_id_map: HashMap<String, FileId>,
    next_file_id: u32,
    conventions: Arc<BeanConventions>,
    index_state: IndexState,
    /// Whether the index needs rebuilding
    index_dirty: bool,
    snapshot: Analysis,
}

impl Default for AnalysisHost {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisHost {
    /// Create a new empty AnalysisHost with the Spring conventions.
    pub fn new() -> Self {
        Self::with_conventions(BeanConventions::default())
    }

    pub fn with_conventions(conventions: BeanConventions) -> Self {
        let conventions = Arc::new(conventions);
        Self {
            files: HashMap::new(),
            file_id_map: HashMap::new(),
            next_file_id: 0,
            conventions: conventions.clone(),
            index_state: IndexState::Ready,
            index_dirty: false,
            snapshot: Analysis {
                files: Arc::new(HashMap::new()),
                index: Arc::new(ProjectIndex::new()),
                conventions,
            },
        }
    }

    /// Set the content of a file. Parsing happens on the next `analysis()`.
    pub fn set_file_content(&mut self, path: &str, content: &str) -> FileId {
        let file = match self.file_id_map.get(path) {
            Some(&file) => file,
            None => {
                let file = FileId::new(self.next_file_id);
                self.next_file_id += 1;
                self.file_id_map.insert(path.to_string(), file);
                file
            }
        };
        self.files.insert(
            file,
            FileInput {
                path: path.to_string(),
                text: Arc::from(content),
                parse: None,
            },
        );
        self.index_dirty = true;
        file
    }

    /// Remove a file. Its id stays reserved for the path.
    pub fn remove_file(&mut self, path: &str) {
        if let Some(file) = self.file_id_map.get(path) {
            if self.files.remove(file).is_some() {
                self.index_dirty = true;
            }
        }
    }

    /// Check if a file exists in storage.
    pub fn has_file(&self, path: &str) -> bool {
        self.file_id(path).is_some()
    }

    /// Get the FileId for a path, if the file is loaded.
    pub fn file_id(&self, path: &str) -> Option<FileId> {
        self.file_id_map
            .get(path)
            .copied()
            .filter(|file| self.files.contains_key(file))
    }

    /// Get the path for a FileId, if it exists.
    pub fn file_path(&self, file: FileId) -> Option<&str> {
        self.files.get(&file).map(|input| input.path.as_str())
    }

    /// Get the number of files loaded.
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Mark the project as (re)indexing or ready.
    ///
    /// While indexing, every query reports no result.
    pub fn set_index_state(&mut self, state: IndexState) {
        self.index_state = state;
        let index = Arc::make_mut(&mut self.snapshot.index);
        index.set_state(state);
        debug!(?state, "index state changed");
    }

    pub fn set_conventions(&mut self, conventions: BeanConventions) {
        self.conventions = Arc::new(conventions);
        self.snapshot.conventions = self.conventions.clone();
    }

    /// Reparse changed files and rebuild the project index.
    ///
    /// This is called automatically by `analysis()` if the index is dirty.
    pub fn rebuild_index(&mut self) {
        let dirty: Vec<(FileId, Arc<str>)> = self
            .files
            .iter()
            .filter(|(_, input)| input.parse.is_none())
            .map(|(&file, input)| (file, input.text.clone()))
            .collect();
        let reparsed: Vec<(FileId, Parse)> = dirty
            .par_iter()
            .map(|(file, text)| (*file, parse_java(text)))
            .collect();
        let reparsed_count = reparsed.len();
        for (file, parse) in reparsed {
            if let Some(input) = self.files.get_mut(&file) {
                input.parse = Some(parse);
            }
        }

        let mut ids: Vec<FileId> = self.files.keys().copied().collect();
        ids.sort();

        let mut index = ProjectIndex::new();
        let mut snapshots = HashMap::with_capacity(ids.len());
        for file in ids {
            let Some(input) = self.files.get(&file) else {
                continue;
            };
            let Some(parse) = &input.parse else {
                continue;
            };
            if let Some(source) = SourceFile::cast(parse.syntax()) {
                index.add_file(file, &source);
            }
            snapshots.insert(
                file,
                FileSnapshot {
                    text: input.text.clone(),
                    green: parse.green.clone(),
                    errors: Arc::from(parse.errors.as_slice()),
                },
            );
        }
        index.set_state(self.index_state);

        info!(
            files = snapshots.len(),
            reparsed = reparsed_count,
            classes = index.len(),
            "rebuilt bean index"
        );
        self.snapshot = Analysis {
            files: Arc::new(snapshots),
            index: Arc::new(index),
            conventions: self.conventions.clone(),
        };
        self.index_dirty = false;
    }

    /// Get a consistent snapshot for querying.
    ///
    /// If the index is dirty, it will be rebuilt first.
    pub fn analysis(&mut self) -> Analysis {
        if self.index_dirty {
            self.rebuild_index();
        }
        self.snapshot.clone()
    }
}

/// An immutable snapshot of the analysis state.
///
/// All queries go through this struct to ensure consistent results.
#[derive(Debug, Clone)]
pub struct Analysis {
    files: Arc<HashMap<FileId, FileSnapshot>>,
    index: Arc<ProjectIndex>,
    conventions: Arc<BeanConventions>,
}

impl SyntaxSource for Analysis {
    fn syntax_root(&self, file: FileId) -> Option<SyntaxNode> {
        self.files
            .get(&file)
            .map(|snapshot| SyntaxNode::new_root(snapshot.green.clone()))
    }
}

impl Analysis {
    pub fn semantics(&self) -> Semantics<'_> {
        Semantics::new(&*self.index, &self.conventions, self)
    }

    pub fn index(&self) -> &ProjectIndex {
        &self.index
    }

    pub fn conventions(&self) -> &BeanConventions {
        &self.conventions
    }

    fn file(&self, file: FileId) -> Result<&FileSnapshot, AnalysisError> {
        self.files.get(&file).ok_or(AnalysisError::UnknownFile(file))
    }

    pub fn file_text(&self, file: FileId) -> Result<&str, AnalysisError> {
        self.file(file).map(|snapshot| &*snapshot.text)
    }

    pub fn parse_errors(&self, file: FileId) -> Result<&[SyntaxError], AnalysisError> {
        self.file(file).map(|snapshot| &*snapshot.errors)
    }

    pub fn syntax(&self, file: FileId) -> Result<SyntaxNode, AnalysisError> {
        let snapshot = self.file(file)?;
        Ok(SyntaxNode::new_root(snapshot.green.clone()))
    }

    /// The innermost node at `offset`, preferring string literals and names
    /// when the offset sits between two tokens.
    fn node_at(&self, file: FileId, offset: TextSize) -> Result<SyntaxNode, AnalysisError> {
        let root = self.syntax(file)?;
        let len = root.text_range().end();
        if offset > len {
            return Err(AnalysisError::OffsetOutOfBounds { file, offset, len });
        }
        let token = root.token_at_offset(offset).max_by_key(|token| match token.kind() {
            SyntaxKind::STRING => 3,
            SyntaxKind::IDENT => 2,
            kind if kind.is_trivia() => 0,
            _ => 1,
        });
        Ok(token.and_then(|t| t.parent()).unwrap_or(root))
    }

    // ==================== Bean references ====================

    /// References of the recognized call at `offset`.
    pub fn detect_references(
        &self,
        file: FileId,
        offset: TextSize,
    ) -> Result<Vec<ResolvedReference>, AnalysisError> {
        let node = self.node_at(file, offset)?;
        Ok(detect_references(&self.semantics(), file, &node))
    }

    /// Method-name completions for the method-spec literal at `offset`.
    pub fn list_completions(
        &self,
        file: FileId,
        offset: TextSize,
    ) -> Result<Vec<CompletionItem>, AnalysisError> {
        let node = self.node_at(file, offset)?;
        Ok(list_completions(&self.semantics(), file, &node))
    }

    /// Navigable range of the literal at `offset`, if any.
    pub fn decide_highlight(
        &self,
        file: FileId,
        offset: TextSize,
    ) -> Result<Option<Highlight>, AnalysisError> {
        let node = self.node_at(file, offset)?;
        let literal = node
            .ancestors()
            .find(|n| n.kind() == SyntaxKind::LITERAL);
        Ok(literal.and_then(|lit| decide_highlight(&self.semantics(), file, &lit)))
    }

    /// Every navigable range in `file`.
    pub fn highlights(&self, file: FileId) -> Result<Vec<Highlight>, AnalysisError> {
        let root = self.syntax(file)?;
        Ok(highlights(&self.semantics(), file, &root))
    }

    /// Go to the bean or method named at `offset`.
    pub fn goto_definition(
        &self,
        file: FileId,
        offset: TextSize,
    ) -> Result<GotoResult, AnalysisError> {
        let node = self.node_at(file, offset)?;
        Ok(goto_definition(&self.semantics(), file, &node))
    }

    /// Edit renaming the name referenced at `offset`.
    ///
    /// `None` when there is no reference there or the argument cannot be
    /// rewritten (a folded constant, a literal without closing quote).
    pub fn rename(
        &self,
        file: FileId,
        offset: TextSize,
        new_name: &str,
    ) -> Result<Option<TextEdit>, AnalysisError> {
        let node = self.node_at(file, offset)?;
        let reference = detect_references(&self.semantics(), file, &node)
            .into_iter()
            .find(|reference| reference.element_range.contains_inclusive(offset));
        let Some(reference) = reference else {
            return Ok(None);
        };
        let valid = match reference.kind {
            ReferenceKind::BeanName => !new_name.is_empty(),
            ReferenceKind::BeanMethod => is_identifier(new_name),
        };
        if !valid {
            return Err(AnalysisError::invalid_name(new_name));
        }
        let new_text = reference.rename(new_name);
        if new_text == reference.element_text {
            return Ok(None);
        }
        Ok(Some(TextEdit {
            file,
            range: reference.element_range,
            new_text,
        }))
    }
}
