//! Go to definition tests for bean references.

use crate::helpers::host_helpers::*;
use crate::helpers::source_fixtures::{APP_CONFIG, ORDER_SERVICES};
use beanref::ide::TargetKind;

#[test]
fn test_goto_bean_class() {
    let (mut host, file, text) = host_with_route(r#"from("a").bean("orderService", "status");"#);
    let analysis = host.analysis();
    let result = analysis
        .goto_definition(file, inside_literal(&text, "orderService", 0))
        .unwrap();

    assert!(!result.is_empty(), "Goto definition should find target");
    let target = &result.targets[0];
    assert_eq!(target.name.as_ref(), "OrderService");
    assert_eq!(target.kind, TargetKind::Class);
    assert_eq!(Some(target.file), host.file_id("com/acme/orders/OrderService.java"));
    assert_eq!(&ORDER_SERVICES[target.focus_range], "OrderService");
    assert!(ORDER_SERVICES[target.full_range].starts_with("@Service"));
}

#[test]
fn test_goto_factory_method() {
    let (mut host, file, text) = host_with_route(r#"from("a").bean("mailer");"#);
    let analysis = host.analysis();
    let result = analysis
        .goto_definition(file, inside_literal(&text, "mailer", 0))
        .unwrap();

    assert_eq!(result.targets.len(), 1);
    let target = &result.targets[0];
    assert_eq!(target.kind, TargetKind::Method);
    assert_eq!(target.container.as_deref(), Some("com.acme.config.AppConfig"));
    assert_eq!(Some(target.file), host.file_id("com/acme/config/AppConfig.java"));
    assert_eq!(&APP_CONFIG[target.focus_range], "mailer");
}

#[test]
fn test_goto_method_from_spec() {
    let (analysis, file, text) =
        analysis_with_route(r#"from("a").bean("orderService", "saveTransaction(${body})");"#);
    let result = analysis
        .goto_definition(file, inside_literal(&text, "saveTransaction", 0))
        .unwrap();

    let names: Vec<_> = result.targets.iter().map(|t| t.name.as_ref()).collect();
    assert_eq!(names, vec!["saveTransaction", "saveTransaction"]);
    assert!(result.targets.iter().all(|t| t.kind == TargetKind::Method));
}

#[test]
fn test_goto_inherited_method() {
    let (analysis, file, text) = analysis_with_route(r#"from("a").bean("orderService", "audit");"#);
    let result = analysis
        .goto_definition(file, inside_literal(&text, "audit", 0))
        .unwrap();
    assert_eq!(
        result.targets[0].container.as_deref(),
        Some("com.acme.orders.AbstractService")
    );
}

#[test]
fn test_goto_on_unresolved_bean_is_empty() {
    let (analysis, file, text) = analysis_with_route(r#"from("a").bean("unknownBean", "status");"#);
    for needle in ["unknownBean", "status"] {
        let result = analysis
            .goto_definition(file, inside_literal(&text, needle, 0))
            .unwrap();
        assert!(result.is_empty());
    }
}
