//! Bean resolution strategy tests over the fixture project.

use crate::helpers::host_helpers::*;
use beanref::hir::{DeclId, SymbolIndex};
use beanref::ide::{Analysis, BeanStrategy, BeanTarget};
use rstest::rstest;

fn resolve(analysis: &Analysis, name: &str) -> Vec<BeanTarget> {
    analysis.semantics().resolver().resolve_by_name(name)
}

fn describe(analysis: &Analysis, target: &BeanTarget) -> String {
    let index = analysis.index();
    match target.decl {
        DeclId::Method(..) => {
            let class = index.class(target.decl.class()).unwrap();
            let method = index.method(target.decl).unwrap();
            format!("{}.{}()", class.name, method.name)
        }
        decl => index.class(decl.class()).unwrap().name.to_string(),
    }
}

#[rstest]
#[case("orderService", vec!["OrderService"], BeanStrategy::Stereotype)]
#[case("orderRepo", vec!["JdbcOrderRepository"], BeanStrategy::Stereotype)]
#[case("payments", vec!["PaymentGateway"], BeanStrategy::Stereotype)]
#[case("mailer", vec!["AppConfig.mailer()"], BeanStrategy::FactoryMethod)]
#[case("backupMailer", vec!["AppConfig.backupMailer()"], BeanStrategy::FactoryMethod)]
#[case("textFormatter", vec!["TextFormatter"], BeanStrategy::ShortName)]
fn test_resolve_by_name(
    #[case] name: &str,
    #[case] expected: Vec<&str>,
    #[case] strategy: BeanStrategy,
) {
    let (analysis, _, _) = analysis_with_route("");
    let targets = resolve(&analysis, name);
    let described: Vec<_> = targets.iter().map(|t| describe(&analysis, t)).collect();
    assert_eq!(described, expected);
    assert!(targets.iter().all(|t| t.strategy == strategy));
}

#[test]
fn test_qualifier_matches_despite_different_class_name() {
    let (analysis, _, _) = analysis_with_route("");
    let targets = resolve(&analysis, "payments");
    assert_eq!(targets.len(), 1);
    let class = analysis.index().class(targets[0].decl.class()).unwrap();
    assert_ne!(class.name, "Payments");
    assert_eq!(class.name, "PaymentGateway");
}

#[rstest]
#[case("nothingByThatName")]
#[case("")]
#[case("OrderService")]
fn test_unknown_name_resolves_to_nothing(#[case] name: &str) {
    let (analysis, _, _) = analysis_with_route("");
    assert!(resolve(&analysis, name).is_empty());
}

#[test]
fn test_fallback_runs_only_when_annotations_find_nothing() {
    // `mailer` matches a factory method and the `Mailer` class name; the
    // class is only reachable through the fallback, so it must not appear
    let (analysis, _, _) = analysis_with_route("");
    let targets = resolve(&analysis, "mailer");
    assert!(!targets.is_empty());
    assert!(targets.iter().all(|t| t.strategy != BeanStrategy::ShortName));

    let fallback = resolve(&analysis, "textFormatter");
    assert!(fallback.iter().all(|t| t.strategy == BeanStrategy::ShortName));
}

#[test]
fn test_factory_results_precede_stereotypes() {
    let mut host = beanref::AnalysisHost::new();
    host.set_file_content(
        "Config.java",
        r#"
        import org.springframework.context.annotation.*;
        @Configuration class Config { @Bean Orders orders() { return null; } }
        "#,
    );
    host.set_file_content(
        "Orders.java",
        "@org.springframework.stereotype.Component class Orders {}",
    );
    let analysis = host.analysis();
    let strategies: Vec<_> = resolve(&analysis, "orders")
        .iter()
        .map(|t| t.strategy)
        .collect();
    assert_eq!(
        strategies,
        vec![BeanStrategy::FactoryMethod, BeanStrategy::Stereotype]
    );
}

#[test]
fn test_resolution_is_deterministic() {
    let (analysis, _, _) = analysis_with_route("");
    let first = resolve(&analysis, "orderService");
    for _ in 0..3 {
        assert_eq!(resolve(&analysis, "orderService"), first);
    }
}
