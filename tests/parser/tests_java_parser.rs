//! Parser tests over the fixture sources.

use crate::helpers::source_fixtures::{project_files, route};
use beanref::parser::{AstNode, Expr, MethodCallExpr, SourceFile, parse_java};
use rstest::rstest;

#[test]
fn test_fixtures_parse_cleanly_and_losslessly() {
    for (path, text) in project_files() {
        let parse = parse_java(text);
        assert!(parse.ok(), "Parse errors in '{path}': {:?}", parse.errors);
        assert_eq!(parse.syntax().text().to_string(), text);
    }
}

#[rstest]
#[case(r#"from("direct:a").bean("svc", "save(${body})").to("log:out");"#)]
#[case(r#"from("timer:t?period=1000").routeId("r").bean(Names.A + "Svc").end();"#)]
#[case(r#"onException(Exception.class).handled(true).bean(ErrorHandler.class, "handle");"#)]
#[case(r#"rest("/api").get("/{id}").to("direct:x"); from("direct:x").process(e -> e.getIn().setBody(null)).bean("svc");"#)]
#[case(r#"final String name = "svc"; from("a").bean(name, "run"); int[] xs = new int[] {1, 2}; if (xs.length > 1) { return; }"#)]
fn test_route_bodies_parse(#[case] body: &str) {
    let text = route(body);
    let parse = parse_java(&text);
    assert!(parse.ok(), "Parse errors: {:?}", parse.errors);
    assert_eq!(parse.syntax().text().to_string(), text);

    let bean_calls = parse
        .syntax()
        .descendants()
        .filter_map(MethodCallExpr::cast)
        .filter(|call| call.name_text().as_deref() == Some("bean"))
        .count();
    assert_eq!(bean_calls, 1);
}

#[test]
fn test_bean_call_arguments_are_typed() {
    let text = route(r#"from("a").bean(OrderService.class, "save(${body})");"#);
    let root = parse_java(&text).syntax();
    let call = root
        .descendants()
        .filter_map(MethodCallExpr::cast)
        .find(|call| call.name_text().as_deref() == Some("bean"))
        .unwrap();
    let args = call.args();
    assert!(matches!(&args[0], Expr::ClassLiteral(c) if c.type_text().as_deref() == Some("OrderService")));
    assert!(matches!(&args[1], Expr::Literal(l) if l.string_value().as_deref() == Some("save(${body})")));
    assert!(call.receiver().is_some());
}

#[test]
fn test_recovery_keeps_following_declarations() {
    let text = "class A { void broken( { } class B { void ok() {} }";
    let parse = parse_java(text);
    assert!(!parse.ok());
    assert_eq!(parse.syntax().text().to_string(), text);
    let source = SourceFile::cast(parse.syntax()).unwrap();
    assert!(source.classes().count() >= 1);
}
