//! Naming conventions consulted when resolving bean names.

use smol_str::SmolStr;

/// Annotation names and the recognized call name used by the resolver.
///
/// `Default` yields the Spring conventions. Callers with a different
/// container (CDI's `@Named`, a custom stereotype) substitute their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeanConventions {
    /// Simple method name of the recognized call (`bean`)
    pub call_name: SmolStr,
    /// Component-marking annotations, checked in this order
    pub stereotypes: Vec<SmolStr>,
    pub qualifier: SmolStr,
    pub configuration: SmolStr,
    /// Factory-method annotation on configuration members
    pub factory: SmolStr,
}

pub const SPRING_COMPONENT: &str = "org.springframework.stereotype.Component";
pub const SPRING_SERVICE: &str = "org.springframework.stereotype.Service";
pub const SPRING_REPOSITORY: &str = "org.springframework.stereotype.Repository";
pub const SPRING_CONTROLLER: &str = "org.springframework.stereotype.Controller";
pub const SPRING_REST_CONTROLLER: &str = "org.springframework.web.bind.annotation.RestController";
pub const SPRING_QUALIFIER: &str = "org.springframework.beans.factory.annotation.Qualifier";
pub const SPRING_CONFIGURATION: &str = "org.springframework.context.annotation.Configuration";
pub const SPRING_BEAN: &str = "org.springframework.context.annotation.Bean";

impl BeanConventions {
    pub fn spring() -> Self {
        Self {
            call_name: SmolStr::new_static("bean"),
            stereotypes: [
                SPRING_COMPONENT,
                SPRING_SERVICE,
                SPRING_REPOSITORY,
                SPRING_CONTROLLER,
                SPRING_REST_CONTROLLER,
            ]
            .into_iter()
            .map(SmolStr::new_static)
            .collect(),
            qualifier: SmolStr::new_static(SPRING_QUALIFIER),
            configuration: SmolStr::new_static(SPRING_CONFIGURATION),
            factory: SmolStr::new_static(SPRING_BEAN),
        }
    }

    pub fn with_call_name(mut self, name: impl Into<SmolStr>) -> Self {
        self.call_name = name.into();
        self
    }

    pub fn with_stereotype(mut self, fqn: impl Into<SmolStr>) -> Self {
        self.stereotypes.push(fqn.into());
        self
    }

    pub fn with_qualifier(mut self, fqn: impl Into<SmolStr>) -> Self {
        self.qualifier = fqn.into();
        self
    }

    pub fn with_configuration(mut self, fqn: impl Into<SmolStr>) -> Self {
        self.configuration = fqn.into();
        self
    }

    pub fn with_factory(mut self, fqn: impl Into<SmolStr>) -> Self {
        self.factory = fqn.into();
        self
    }
}

impl Default for BeanConventions {
    fn default() -> Self {
        Self::spring()
    }
}
