//! Method-name completion tests.

use crate::helpers::host_helpers::*;
use beanref::ide::CompletionKind;

fn labels(body: &str, needle: &str) -> Vec<String> {
    let (analysis, file, text) = analysis_with_route(body);
    analysis
        .list_completions(file, inside_literal(&text, needle, 0))
        .unwrap()
        .iter()
        .map(|item| item.label.to_string())
        .collect()
}

#[test]
fn test_completes_public_methods_of_stereotype_bean() {
    let (analysis, file, text) = analysis_with_route(r#"from("a").bean("orderService", "sa");"#);
    let items = analysis
        .list_completions(file, inside_literal(&text, "sa", 0))
        .unwrap();

    let labels: Vec<_> = items.iter().map(|i| i.label.as_ref()).collect();
    assert_eq!(labels, vec!["saveTransaction", "status", "audit"]);
    for item in &items {
        assert_eq!(item.kind, CompletionKind::Method);
        assert_eq!(item.detail.as_deref(), Some("com.acme.orders.OrderService"));
        assert_eq!(item.prefix.as_ref(), "sa");
    }
    assert_eq!(items.iter().filter(|i| i.matches_prefix()).count(), 1);
}

#[test]
fn test_completes_with_class_literal_owner() {
    assert_eq!(
        labels(r#"from("a").bean(OrderService.class, "x");"#, "x"),
        vec!["saveTransaction", "status", "audit"]
    );
}

#[test]
fn test_completes_with_factory_owner() {
    assert_eq!(labels(r#"from("a").bean("mailer", "");"#, "\""), vec!["send"]);
}

#[test]
fn test_completes_with_constant_bean_name() {
    assert_eq!(
        labels(r#"from("a").bean(BeanNames.ORDERS, "st");"#, "st"),
        vec!["saveTransaction", "status", "audit"]
    );
}

#[test]
fn test_no_completion_in_bean_name_argument() {
    assert!(labels(r#"from("a").bean("orderService", "sa");"#, "orderService").is_empty());
}

#[test]
fn test_no_completion_for_unresolved_bean() {
    assert!(labels(r#"from("a").bean("unknownBean", "sa");"#, "sa").is_empty());
}

#[test]
fn test_no_completion_outside_recognized_call() {
    assert!(labels(r#"from("a").to("orderService", "sa");"#, "sa").is_empty());
}
