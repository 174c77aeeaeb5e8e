//! Helpers for setting up analysis hosts over the fixtures.

use beanref::base::{FileId, TextSize};
use beanref::ide::{Analysis, AnalysisHost};

use super::source_fixtures::{project_files, route};

pub const ROUTE_PATH: &str = "com/acme/routes/OrderRoute.java";

/// A host with the fixture project plus a route whose body is `body`.
pub fn host_with_route(body: &str) -> (AnalysisHost, FileId, String) {
    let mut host = AnalysisHost::new();
    for (path, text) in project_files() {
        host.set_file_content(path, text);
    }
    let text = route(body);
    let file = host.set_file_content(ROUTE_PATH, &text);
    (host, file, text)
}

/// Snapshot of [`host_with_route`].
pub fn analysis_with_route(body: &str) -> (Analysis, FileId, String) {
    let (mut host, file, text) = host_with_route(body);
    let analysis = host.analysis();
    assert!(
        analysis.parse_errors(file).unwrap().is_empty(),
        "Parse errors in route: {:?}",
        analysis.parse_errors(file).unwrap()
    );
    (analysis, file, text)
}

/// Offset of the `nth` occurrence of `needle` in `text`, plus `delta`.
pub fn offset_of(text: &str, needle: &str, nth: usize, delta: usize) -> TextSize {
    let start = text
        .match_indices(needle)
        .nth(nth)
        .map(|(idx, _)| idx)
        .unwrap_or_else(|| panic!("'{needle}' occurrence {nth} not found"));
    TextSize::new((start + delta) as u32)
}

/// Offset just inside the opening quote of the `nth` literal `"needle..."`.
pub fn inside_literal(text: &str, needle: &str, nth: usize) -> TextSize {
    offset_of(text, &format!("\"{needle}"), nth, 1)
}

/// Text covered by `range`.
pub fn slice(text: &str, range: beanref::TextRange) -> &str {
    &text[range]
}
