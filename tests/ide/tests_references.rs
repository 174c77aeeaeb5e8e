//! Reference detection tests for `.bean(...)` arguments.

use crate::helpers::host_helpers::*;
use beanref::hir::{DeclId, SymbolIndex};
use beanref::ide::{ReferenceKind, ResolvedReference};
use rstest::rstest;

fn references_at(body: &str, needle: &str) -> (Vec<ResolvedReference>, beanref::ide::Analysis, String) {
    let (analysis, file, text) = analysis_with_route(body);
    let offset = inside_literal(&text, needle, 0);
    let refs = analysis.detect_references(file, offset).unwrap();
    (refs, analysis, text)
}

fn target_name(analysis: &beanref::ide::Analysis, decl: DeclId) -> String {
    let index = analysis.index();
    match decl {
        DeclId::Method(..) => index.method(decl).unwrap().name.to_string(),
        _ => index.class(decl.class()).unwrap().name.to_string(),
    }
}

// =============================================================================
// BEAN NAME ARGUMENT
// =============================================================================

#[test]
fn test_bean_name_reference_resolves_stereotype_class() {
    let (refs, analysis, text) = references_at(
        r#"from("direct:orders").bean("orderService", "saveTransaction(${body})");"#,
        "orderService",
    );

    assert_eq!(refs.len(), 1);
    let reference = &refs[0];
    assert_eq!(reference.kind, ReferenceKind::BeanName);
    assert_eq!(slice(&text, reference.anchor_range), "orderService");
    assert_eq!(reference.name, "orderService");
    let target = reference.resolve().expect("bean should resolve");
    assert_eq!(target_name(&analysis, target), "OrderService");
}

#[test]
fn test_bean_name_reference_offers_no_variants() {
    let (refs, analysis, _) = references_at(r#"from("a").bean("orderService");"#, "orderService");
    assert!(refs[0].completion_variants(&analysis.semantics()).is_empty());
}

#[test]
fn test_unresolved_bean_name_still_yields_reference() {
    let (refs, _, text) = references_at(r#"from("a").bean("noSuchBean");"#, "noSuchBean");
    assert_eq!(refs.len(), 1);
    assert_eq!(slice(&text, refs[0].anchor_range), "noSuchBean");
    assert_eq!(refs[0].resolve(), None);
}

#[rstest]
#[case(r#"from("a").bean(BeanNames.ORDERS, "status");"#, "BeanNames.ORDERS", Some("OrderService"))]
#[case(r#"from("a").bean(BeanNames.PREFIX + "Gateway", "charge");"#, r#"BeanNames.PREFIX + "Gateway""#, Some("PaymentGateway"))]
#[case(r#"from("a").bean(com.acme.routes.BeanNames.ORDERS);"#, "com.acme.routes.BeanNames.ORDERS", Some("OrderService"))]
fn test_constant_bean_name(#[case] body: &str, #[case] arg: &str, #[case] expected: Option<&str>) {
    let (analysis, file, text) = analysis_with_route(body);
    let offset = offset_of(&text, arg, 0, 0);
    let refs = analysis.detect_references(file, offset).unwrap();

    assert_eq!(refs.len(), 1);
    assert_eq!(refs[0].kind, ReferenceKind::BeanName);
    assert_eq!(slice(&text, refs[0].anchor_range), arg);
    let resolved = refs[0].resolve().map(|decl| target_name(&analysis, decl));
    assert_eq!(resolved.as_deref(), expected);
}

#[rstest]
#[case(r#"from("a").bean(BeanNames.MUTABLE);"#, "BeanNames.MUTABLE")]
#[case(r#"from("a").bean(BeanNames.BROKEN + "x");"#, "BeanNames.BROKEN")]
#[case(r#"from("a").bean(lookup());"#, "lookup")]
fn test_unfoldable_bean_name_has_no_reference(#[case] body: &str, #[case] arg: &str) {
    let (analysis, file, text) = analysis_with_route(body);
    let refs = analysis
        .detect_references(file, offset_of(&text, arg, 0, 0))
        .unwrap();
    assert!(refs.is_empty(), "unexpected references: {refs:?}");
}

// =============================================================================
// METHOD SPEC ARGUMENT
// =============================================================================

#[test]
fn test_method_reference_anchors_on_leading_identifier() {
    let (refs, analysis, text) = references_at(
        r#"from("a").bean("orderService", "saveTransaction(${body}, ${header.id})");"#,
        "saveTransaction",
    );

    assert_eq!(refs.len(), 1);
    let reference = &refs[0];
    assert_eq!(reference.kind, ReferenceKind::BeanMethod);
    assert_eq!(slice(&text, reference.anchor_range), "saveTransaction");
    assert_eq!(reference.targets.len(), 2, "both overloads are candidates");
    assert_eq!(target_name(&analysis, reference.resolve().unwrap()), "saveTransaction");
}

#[test]
fn test_method_reference_variants_are_public_and_distinct() {
    let (refs, analysis, _) = references_at(r#"from("a").bean("orderService", "sa");"#, "sa");
    let variants = refs[0].completion_variants(&analysis.semantics());
    assert_eq!(variants, vec!["saveTransaction", "status", "audit"]);
}

#[test]
fn test_method_reference_on_class_literal_owner() {
    let (refs, analysis, text) = references_at(r#"from("a").bean(OrderService.class, "audit");"#, "audit");
    assert_eq!(refs.len(), 1);
    assert_eq!(slice(&text, refs[0].anchor_range), "audit");
    let owner = refs[0].owner.unwrap();
    assert_eq!(analysis.index().class(owner).unwrap().name, "OrderService");
    assert_eq!(target_name(&analysis, refs[0].resolve().unwrap()), "audit");
}

#[test]
fn test_method_reference_through_factory_return_type() {
    let (refs, analysis, _) = references_at(r#"from("a").bean("mailer", "send(${body})");"#, "send");
    let owner = refs[0].owner.expect("factory return type is the owner");
    assert_eq!(analysis.index().class(owner).unwrap().qualified_name, "com.acme.util.Mailer");
    assert!(refs[0].resolve().is_some());
}

#[test]
fn test_method_reference_without_identifier() {
    let (refs, _, text) = references_at(r#"from("a").bean("orderService", "(${body})");"#, "(");
    assert_eq!(refs.len(), 1);
    // degenerate one-character anchor, never the delimiters
    assert_eq!(slice(&text, refs[0].anchor_range), "(");
    assert_eq!(refs[0].resolve(), None);
}

// =============================================================================
// CALL SHAPE
// =============================================================================

#[test]
fn test_cursor_on_call_name_reports_every_argument() {
    let (analysis, file, text) =
        analysis_with_route(r#"from("a").bean("orderService", "status");"#);
    let refs = analysis
        .detect_references(file, offset_of(&text, ".bean(", 0, 1))
        .unwrap();
    let kinds: Vec<_> = refs.iter().map(|r| r.kind).collect();
    assert_eq!(kinds, vec![ReferenceKind::BeanName, ReferenceKind::BeanMethod]);
}

#[rstest]
#[case(r#"from("a").to("orderService");"#)]
#[case(r#"from("a").bean("orderService", "status", "extra");"#)]
#[case(r#"from("a").bean(wrap("orderService"));"#)]
fn test_not_a_recognized_call(#[case] body: &str) {
    let (refs, _, _) = references_at(body, "orderService");
    assert!(refs.is_empty());
}

#[test]
fn test_no_references_while_indexing() {
    let (mut host, file, text) =
        host_with_route(r#"from("a").bean("orderService", "status");"#);
    host.set_index_state(beanref::IndexState::Indexing);
    let analysis = host.analysis();
    let refs = analysis
        .detect_references(file, inside_literal(&text, "orderService", 0))
        .unwrap();
    assert!(refs.is_empty());
}

#[test]
fn test_method_name_is_read_from_decoded_literal() {
    let body = r#"from("a").bean("orderService", "\tsaveTransaction(${body})");"#;
    let (refs, analysis, text) = references_at(body, r"\tsaveTransaction");
    assert_eq!(refs.len(), 1);
    let file = refs[0].file;
    assert_eq!(refs[0].kind, ReferenceKind::BeanMethod);
    assert_eq!(refs[0].name, "saveTransaction");
    assert_eq!(target_name(&analysis, refs[0].resolve().unwrap()), "saveTransaction");

    let offset = inside_literal(&text, r"\tsaveTransaction", 0);
    let highlight = analysis.decide_highlight(file, offset).unwrap();
    assert!(highlight.is_some(), "references and highlight agree on the method name");
    let completion = analysis.list_completions(file, offset).unwrap();
    assert!(!completion.is_empty());
    assert!(completion.iter().all(|item| item.prefix.as_ref() == "saveTransaction"));
}
