//! Common source code fixtures for tests.

/// Spring components in `com.acme.orders`.
pub const ORDER_SERVICES: &str = r#"
package com.acme.orders;

import org.springframework.stereotype.Service;
import org.springframework.stereotype.Repository;
import org.springframework.beans.factory.annotation.Qualifier;

@Service
public class OrderService extends AbstractService {
    public OrderService() {}
    public void saveTransaction(String body) {}
    public void saveTransaction(String body, String header) {}
    public String status() { return "ok"; }
    protected void internalAudit() {}
    private void secret() {}
}

@Repository("orderRepo")
public class JdbcOrderRepository {
    public void persist(Object order) {}
}

@Service
@Qualifier("payments")
public class PaymentGateway {
    public void charge(long cents) {}
}
"#;

/// A superclass contributing inherited methods.
pub const ABSTRACT_SERVICE: &str = r#"
package com.acme.orders;

public abstract class AbstractService {
    public void audit() {}
    void packageOnly() {}
}
"#;

/// `@Configuration` class with `@Bean` factory methods.
pub const APP_CONFIG: &str = r#"
package com.acme.config;

import org.springframework.context.annotation.Bean;
import org.springframework.context.annotation.Configuration;
import com.acme.orders.OrderService;
import com.acme.util.Mailer;

@Configuration
public class AppConfig {
    @Bean(name = "mailer")
    public Mailer mailer() { return new Mailer(); }

    @Bean
    public Mailer backupMailer() { return new Mailer(); }
}
"#;

/// Unannotated classes only reachable through the short-name fallback.
pub const UTIL: &str = r#"
package com.acme.util;

public class Mailer {
    public void send(String to) {}
}

public class TextFormatter {
    public String format(String s) { return s; }
}
"#;

/// Bean-name constants.
pub const NAMES: &str = r#"
package com.acme.routes;

public final class BeanNames {
    public static final String ORDERS = "order" + "Service";
    public static final String PREFIX = "payment";
    public static String MUTABLE = "orderService";
    public static final String BROKEN = System.getProperty("bean");
}
"#;

/// Every fixture except routes, as `(path, text)` pairs.
pub fn project_files() -> Vec<(&'static str, &'static str)> {
    vec![
        ("com/acme/orders/OrderService.java", ORDER_SERVICES),
        ("com/acme/orders/AbstractService.java", ABSTRACT_SERVICE),
        ("com/acme/config/AppConfig.java", APP_CONFIG),
        ("com/acme/util/Mailer.java", UTIL),
        ("com/acme/routes/BeanNames.java", NAMES),
    ]
}

/// A route class whose `configure()` body is `body`.
pub fn route(body: &str) -> String {
    format!(
        r#"package com.acme.routes;

import com.acme.orders.OrderService;

public class OrderRoute extends RouteBuilder {{
    @Override
    public void configure() {{
        {body}
    }}
}}
"#
    )
}
