//! Rename tests for bean references.

use crate::helpers::host_helpers::*;
use beanref::ide::AnalysisError;
use beanref::core::text_utils::replace_leading_identifier;

#[test]
fn test_rename_method_spec_keeps_placeholders() {
    let (analysis, file, text) =
        analysis_with_route(r#"from("a").bean("orderService", "saveTransaction(${body})");"#);
    let edit = analysis
        .rename(file, inside_literal(&text, "saveTransaction", 0), "update")
        .unwrap()
        .expect("method spec should be renamable");

    assert_eq!(edit.file, file);
    assert_eq!(slice(&text, edit.range), r#""saveTransaction(${body})""#);
    assert_eq!(edit.new_text, r#""update(${body})""#);
}

#[test]
fn test_rename_round_trip_preserves_suffix() {
    let renamed = replace_leading_identifier("save(${x})", "update");
    assert_eq!(renamed, "update(${x})");
    assert_eq!(&renamed["update".len()..], "(${x})");
}

#[test]
fn test_rename_bean_name_replaces_whole_literal() {
    let (analysis, file, text) = analysis_with_route(r#"from("a").bean("orderService", "status");"#);
    let edit = analysis
        .rename(file, inside_literal(&text, "orderService", 0), "orders")
        .unwrap()
        .unwrap();
    assert_eq!(slice(&text, edit.range), r#""orderService""#);
    assert_eq!(edit.new_text, r#""orders""#);
}

#[test]
fn test_rename_constant_bean_name_is_not_supported() {
    let (analysis, file, text) = analysis_with_route(r#"from("a").bean(BeanNames.ORDERS);"#);
    let edit = analysis
        .rename(file, offset_of(&text, "BeanNames.ORDERS", 0, 0), "orders")
        .unwrap();
    assert_eq!(edit, None);
}

#[test]
fn test_rename_rejects_invalid_method_name() {
    let (analysis, file, text) = analysis_with_route(r#"from("a").bean("orderService", "status");"#);
    let err = analysis
        .rename(file, inside_literal(&text, "status", 0), "not valid")
        .unwrap_err();
    assert_eq!(err, AnalysisError::invalid_name("not valid"));
}

#[test]
fn test_rename_outside_reference() {
    let (analysis, file, text) = analysis_with_route(r#"from("a").to("orderService");"#);
    let edit = analysis
        .rename(file, inside_literal(&text, "orderService", 0), "x")
        .unwrap();
    assert_eq!(edit, None);
}

#[test]
fn test_rename_unterminated_bean_name_is_not_supported() {
    let (mut host, file, text) = host_with_route("from(\"a\").bean(\"orderService\n);");
    let analysis = host.analysis();
    let offset = inside_literal(&text, "orderService", 0);

    assert_eq!(analysis.detect_references(file, offset).unwrap().len(), 1);
    let edit = analysis.rename(file, offset, "billing").unwrap();
    assert_eq!(edit, None);
}

#[test]
fn test_rename_method_spec_behind_escaped_whitespace() {
    let (analysis, file, text) =
        analysis_with_route(r#"from("a").bean("orderService", "\tsaveTransaction(${body})");"#);
    let edit = analysis
        .rename(file, inside_literal(&text, r"\tsaveTransaction", 0), "update")
        .unwrap()
        .unwrap();
    assert_eq!(slice(&text, edit.range), r#""\tsaveTransaction(${body})""#);
    assert_eq!(edit.new_text, r#""\tupdate(${body})""#);
}
