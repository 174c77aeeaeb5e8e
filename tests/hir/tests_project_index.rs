//! Project index tests over the fixture project.

use crate::helpers::source_fixtures::project_files;
use beanref::hir::{ClassId, IndexState, SymbolIndex, Visibility};
use beanref::ide::AnalysisHost;

fn analysis() -> beanref::ide::Analysis {
    let mut host = AnalysisHost::new();
    for (path, text) in project_files() {
        host.set_file_content(path, text);
    }
    host.analysis()
}

fn class_id(analysis: &beanref::ide::Analysis, fqn: &str) -> ClassId {
    analysis
        .index()
        .class_by_qualified_name(fqn)
        .unwrap_or_else(|| panic!("{fqn} not indexed"))
}

#[test]
fn test_every_fixture_class_is_indexed() {
    let analysis = analysis();
    let index = analysis.index();
    for fqn in [
        "com.acme.orders.OrderService",
        "com.acme.orders.JdbcOrderRepository",
        "com.acme.orders.PaymentGateway",
        "com.acme.orders.AbstractService",
        "com.acme.config.AppConfig",
        "com.acme.util.Mailer",
        "com.acme.util.TextFormatter",
        "com.acme.routes.BeanNames",
    ] {
        assert!(index.class_by_qualified_name(fqn).is_some(), "{fqn} missing");
    }
    assert!(index.is_ready());
    assert_eq!(index.state(), IndexState::Ready);
}

#[test]
fn test_annotation_queries_use_imports() {
    let analysis = analysis();
    let index = analysis.index();
    let services: Vec<_> = index
        .classes_annotated_with("org.springframework.stereotype.Service")
        .into_iter()
        .map(|id| index.class(id).unwrap().name.to_string())
        .collect();
    assert_eq!(services, vec!["OrderService", "PaymentGateway"]);
    assert_eq!(index.classes_annotated_with("org.springframework.context.annotation.Configuration").len(), 1);
}

#[test]
fn test_inherited_methods_and_visibility() {
    let analysis = analysis();
    let index = analysis.index();
    let service = class_id(&analysis, "com.acme.orders.OrderService");
    let audit = index.find_methods_by_name(service, "audit", true);
    assert_eq!(audit.len(), 1);
    assert_eq!(audit[0].class(), class_id(&analysis, "com.acme.orders.AbstractService"));
    assert!(index.find_methods_by_name(service, "audit", false).is_empty());

    let secret = index.find_methods_by_name(service, "secret", false);
    assert_eq!(index.method(secret[0]).unwrap().visibility, Visibility::Private);
}

#[test]
fn test_factory_return_type_resolves_through_import() {
    let analysis = analysis();
    let index = analysis.index();
    let config = class_id(&analysis, "com.acme.config.AppConfig");
    let mailer = index.class(config).unwrap().methods[0].return_type.clone().unwrap();
    assert_eq!(mailer, "Mailer");
    assert_eq!(
        index.resolve_type(&mailer, config),
        Some(class_id(&analysis, "com.acme.util.Mailer"))
    );
}

#[test]
fn test_string_constants() {
    let analysis = analysis();
    let index = analysis.index();
    let names = index.class(class_id(&analysis, "com.acme.routes.BeanNames")).unwrap();
    let constants: Vec<_> = names
        .fields
        .iter()
        .filter(|f| f.is_string_constant())
        .map(|f| f.name.to_string())
        .collect();
    assert_eq!(constants, vec!["ORDERS", "PREFIX", "BROKEN"]);
}
