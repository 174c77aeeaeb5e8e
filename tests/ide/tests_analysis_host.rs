//! AnalysisHost lifecycle and snapshot tests.

use std::thread;

use crate::helpers::host_helpers::*;
use beanref::base::{FileId, TextSize};
use beanref::ide::{Analysis, AnalysisError, AnalysisHost};

#[test]
fn test_analysis_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Analysis>();
}

#[test]
fn test_file_ids_are_stable() {
    let mut host = AnalysisHost::new();
    let a = host.set_file_content("A.java", "class A {}");
    let b = host.set_file_content("B.java", "class B {}");
    assert_ne!(a, b);
    assert_eq!(host.set_file_content("A.java", "class A2 {}"), a);

    host.remove_file("A.java");
    assert!(!host.has_file("A.java"));
    assert_eq!(host.file_count(), 1);
    assert_eq!(host.set_file_content("A.java", "class A {}"), a);
    assert_eq!(host.file_path(b), Some("B.java"));
}

#[test]
fn test_edits_are_visible_in_new_snapshots_only() {
    let (mut host, file, text) = host_with_route(r#"from("a").bean("auditService", "run");"#);
    let before = host.analysis();
    let offset = inside_literal(&text, "auditService", 0);
    assert_eq!(
        before.detect_references(file, offset).unwrap()[0].resolve(),
        None
    );

    host.set_file_content(
        "com/acme/AuditService.java",
        "@org.springframework.stereotype.Service public class AuditService { public void run() {} }",
    );
    let after = host.analysis();
    assert!(after.detect_references(file, offset).unwrap()[0].resolve().is_some());
    // the old snapshot is unaffected
    assert_eq!(
        before.detect_references(file, offset).unwrap()[0].resolve(),
        None
    );

    host.remove_file("com/acme/AuditService.java");
    let removed = host.analysis();
    assert_eq!(
        removed.detect_references(file, offset).unwrap()[0].resolve(),
        None
    );
}

#[test]
fn test_concurrent_queries_agree() {
    let (analysis, file, text) =
        analysis_with_route(r#"from("a").bean("orderService", "saveTransaction(${body})");"#);
    let offsets = [
        inside_literal(&text, "orderService", 0),
        inside_literal(&text, "saveTransaction", 0),
    ];
    let expected: Vec<_> = offsets
        .iter()
        .map(|&offset| analysis.detect_references(file, offset).unwrap())
        .collect();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let analysis = analysis.clone();
                scope.spawn(move || {
                    offsets
                        .iter()
                        .map(|&offset| analysis.detect_references(file, offset).unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn test_host_misuse_is_reported() {
    let (analysis, file, text) = analysis_with_route("");
    let unknown = FileId::new(999);
    assert_eq!(
        analysis.detect_references(unknown, TextSize::new(0)).unwrap_err(),
        AnalysisError::UnknownFile(unknown)
    );

    let past_end = TextSize::of(text.as_str()) + TextSize::new(1);
    assert!(matches!(
        analysis.list_completions(file, past_end),
        Err(AnalysisError::OffsetOutOfBounds { .. })
    ));
    assert!(analysis.file_text(file).unwrap().contains("class OrderRoute"));
}

#[test]
fn test_parse_errors_are_collected() {
    let mut host = AnalysisHost::new();
    let file = host.set_file_content("Broken.java", "class Broken { void f( { }");
    let analysis = host.analysis();
    assert!(!analysis.parse_errors(file).unwrap().is_empty());
    assert_eq!(analysis.index().len(), 1);
}
