//! Highlight decision tests.

use crate::helpers::host_helpers::*;
use beanref::IndexState;
use beanref::ide::HighlightKind;
use beanref::core::text_utils::extract_leading_identifier;
use rstest::rstest;

fn highlight_text(body: &str, needle: &str) -> Option<String> {
    let (analysis, file, text) = analysis_with_route(body);
    analysis
        .decide_highlight(file, inside_literal(&text, needle, 0))
        .unwrap()
        .map(|h| slice(&text, h.range).to_string())
}

#[rstest]
#[case(r#"from("a").bean("orderService");"#, "orderService", Some("orderService"))]
#[case(r#"from("a").bean("payments");"#, "payments", Some("payments"))]
#[case(r#"from("a").bean("textFormatter");"#, "textFormatter", Some("textFormatter"))]
#[case(r#"from("a").bean("unknownBean");"#, "unknownBean", None)]
#[case(r#"from("a").to("orderService");"#, "orderService", None)]
fn test_bean_name_highlight(#[case] body: &str, #[case] needle: &str, #[case] expected: Option<&str>) {
    assert_eq!(highlight_text(body, needle).as_deref(), expected);
}

#[rstest]
#[case("saveTransaction(${body})", Some("saveTransaction"))]
#[case("  status", Some("status"))]
#[case("audit", Some("audit"))]
#[case("internalAudit", None)]
#[case("secret()", None)]
#[case("packageOnly", None)]
#[case("missing(${body})", None)]
#[case("(${body})", None)]
#[case("", None)]
fn test_method_spec_highlight(#[case] spec: &str, #[case] expected: Option<&str>) {
    let body = format!(r#"from("a").bean("orderService", "{spec}");"#);
    let (analysis, file, text) = analysis_with_route(&body);
    let offset = offset_of(&text, &format!("\"{spec}\""), 0, 1);
    let highlight = analysis.decide_highlight(file, offset).unwrap();
    assert_eq!(highlight.map(|h| slice(&text, h.range)), expected);
}

#[rstest]
#[case("saveTransaction(${body})")]
#[case("   status(${header.x})")]
#[case("audit")]
fn test_method_highlight_stays_within_identifier(#[case] spec: &str) {
    let body = format!(r#"from("a").bean("orderService", "{spec}");"#);
    let (analysis, file, text) = analysis_with_route(&body);
    let literal_start = offset_of(&text, &format!("\"{spec}\""), 0, 0);
    let literal_end = literal_start + beanref::TextSize::of(spec) + beanref::TextSize::new(2);

    let highlight = analysis
        .decide_highlight(file, literal_start + beanref::TextSize::new(1))
        .unwrap()
        .expect("public method should highlight");
    assert_eq!(highlight.kind, HighlightKind::BeanMethod);
    let ident = extract_leading_identifier(spec);
    assert!(u32::from(highlight.range.len()) as usize <= ident.len());
    assert!(highlight.range.start() > literal_start);
    assert!(highlight.range.end() < literal_end);
}

#[test]
fn test_method_highlight_with_class_literal_and_factory() {
    assert_eq!(
        highlight_text(r#"from("a").bean(OrderService.class, "status");"#, "status").as_deref(),
        Some("status")
    );
    assert_eq!(
        highlight_text(r#"from("a").bean("mailer", "send(${body})");"#, "send").as_deref(),
        Some("send")
    );
}

#[test]
fn test_no_highlight_while_indexing() {
    let (mut host, file, text) = host_with_route(r#"from("a").bean("orderService", "status");"#);
    host.set_index_state(IndexState::Indexing);
    let analysis = host.analysis();
    assert_eq!(
        analysis.decide_highlight(file, inside_literal(&text, "orderService", 0)).unwrap(),
        None
    );
    assert!(analysis.highlights(file).unwrap().is_empty());

    host.set_index_state(IndexState::Ready);
    let analysis = host.analysis();
    assert!(analysis.decide_highlight(file, inside_literal(&text, "orderService", 0)).unwrap().is_some());
}

#[test]
fn test_highlights_whole_file() {
    let (analysis, file, text) = analysis_with_route(
        r#"from("a").bean("orderService", "saveTransaction(${body})");
        from("b").bean("unknownBean", "status");
        from("c").bean(OrderService.class, "audit").to("orderService");"#,
    );
    let found: Vec<_> = analysis
        .highlights(file)
        .unwrap()
        .into_iter()
        .map(|h| (slice(&text, h.range).to_string(), h.kind))
        .collect();
    assert_eq!(
        found,
        vec![
            ("orderService".to_string(), HighlightKind::BeanName),
            ("saveTransaction".to_string(), HighlightKind::BeanMethod),
            ("audit".to_string(), HighlightKind::BeanMethod),
        ]
    );
}
