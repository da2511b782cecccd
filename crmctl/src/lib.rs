//! # crmctl: CRM administration server
//!
//! `crmctl` is a small server-rendered web application for keeping the customer records of a
//! sales organisation: customers and the companies they work for, employees and their
//! departments, and which employees look after which customers.
//!
//! ## Architecture
//!
//! The application is built on [Axum](https://github.com/tokio-rs/axum) for the HTTP layer and
//! uses MySQL for all persistence. Pages are rendered on the server from minijinja templates
//! embedded in the binary; there is no client-side code.
//!
//! ### Request Flow
//!
//! A request is routed to a handler in [`api::handlers`]. The handler takes a connection (or a
//! transaction, when several tables change together) from the shared pool in [`AppState`],
//! builds the repositories it needs from [`db::handlers`], and either renders a view through
//! [`views`] or redirects back to an index page. Any failure becomes an
//! [`errors::PageError`], which carries the page's fixed message and is rendered as the error
//! view with a status code matching the failure.
//!
//! ### Core Components
//!
//! The **API layer** ([`api`]) holds route handlers and the typed forms they parse from
//! urlencoded bodies.
//!
//! The **database layer** ([`db`]) uses the repository pattern. Each table has a repository
//! wrapping a `&mut MySqlConnection`, so the same repository works on a pooled connection or
//! inside a transaction.
//!
//! The **configuration** ([`config`]) is loaded from YAML with environment overrides, including
//! the conventional `DB_HOST`/`DB_USER`/`DB_NAME`/`DB_PASSWORD` variables.
//!
//! ## Getting Started
//!
//! ```no_run
//! use crmctl::{Application, Config};
//! use clap::Parser;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let args = crmctl::config::Args::parse();
//!     let config = Config::load(&args)?;
//!     crmctl::telemetry::init_telemetry()?;
//!
//!     let app = Application::new(config).await?;
//!     app.serve(async {
//!         tokio::signal::ctrl_c().await.ok();
//!     })
//!     .await
//! }
//! ```
//!
//! ## Database Setup
//!
//! Migrations in `migrations/` are embedded and applied on startup:
//!
//! ```no_run
//! # use sqlx::MySqlPool;
//! # async fn example(pool: MySqlPool) -> Result<(), sqlx::migrate::MigrateError> {
//! crmctl::migrator().run(&pool).await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod db;
pub mod errors;
mod static_assets;
pub mod telemetry;
#[cfg(test)]
mod test_utils;
pub mod types;
pub mod views;

use crate::api::handlers::{companies, customers, departments, diagnostics, employees, home, static_assets as assets};
use axum::{Router, routing::get};
use bon::Builder;
pub use config::Config;
use sqlx::MySqlPool;
use tokio::net::TcpListener;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::{Level, debug, info};

pub use types::{CompanyId, CustomerId, DepartmentId, EmployeeId};

/// Application state shared across all request handlers.
///
/// # Example
///
/// ```ignore
/// let state = AppState::builder().db(pool).build();
/// ```
#[derive(Clone, Builder)]
pub struct AppState {
    pub db: MySqlPool,
}

/// Get the crmctl database migrator
pub fn migrator() -> sqlx::migrate::Migrator {
    sqlx::migrate!("./migrations")
}

/// Connect the pool described by the configuration and bring the schema up to date.
async fn setup_database(config: &Config) -> anyhow::Result<MySqlPool> {
    let options = config.database.connect_options()?;
    let pool = config.database.pool.pool_options().connect_with(options).await?;
    info!("Connected to MySQL");

    migrator().run(&pool).await?;
    Ok(pool)
}

/// Build the application router with every route and the tracing layer.
pub fn build_router(state: AppState) -> Router {
    let router = Router::new()
        .route("/", get(home::home))
        .route("/healthz", get(diagnostics::healthz))
        .route("/test-mysql", get(diagnostics::test_mysql))
        // Customers
        .route("/customers", get(customers::list_customers))
        .route(
            "/customers/create",
            get(customers::create_customer_form).post(customers::create_customer),
        )
        .route(
            "/customers/{id}/edit",
            get(customers::edit_customer_form).post(customers::update_customer),
        )
        .route(
            "/customers/{id}/delete",
            get(customers::delete_customer_form).post(customers::delete_customer),
        )
        // Employees
        .route("/employees", get(employees::list_employees))
        .route(
            "/employees/create",
            get(employees::create_employee_form).post(employees::create_employee),
        )
        .route(
            "/employees/{id}/edit",
            get(employees::edit_employee_form).post(employees::update_employee),
        )
        .route(
            "/employees/{id}/delete",
            get(employees::delete_employee_form).post(employees::delete_employee),
        )
        // Departments
        .route("/departments", get(departments::list_departments))
        .route(
            "/departments/create",
            get(departments::create_department_form).post(departments::create_department),
        )
        .route(
            "/departments/{id}/delete",
            get(departments::delete_department_form).post(departments::delete_department),
        )
        // Companies
        .route("/companies", get(companies::list_companies))
        .route(
            "/companies/create",
            get(companies::create_company_form).post(companies::create_company),
        )
        .route(
            "/companies/{id}/delete",
            get(companies::delete_company_form).post(companies::delete_company),
        )
        .route("/static/{*path}", get(assets::serve_embedded_asset))
        .with_state(state);

    router.layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    )
}

/// Main application struct that owns the router, configuration and database pool.
///
/// # Lifecycle
///
/// 1. **Create**: [`Application::new`] connects to MySQL and runs migrations
/// 2. **Serve**: [`Application::serve`] binds to a TCP port and starts handling requests
/// 3. **Shutdown**: When the shutdown future resolves, in-flight requests finish and the pool
///    is closed
pub struct Application {
    router: Router,
    config: Config,
    pool: MySqlPool,
}

impl Application {
    /// Create a new application instance with all resources initialized
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        debug!("Starting crmctl, will bind to {}", config.bind_address());

        let pool = setup_database(&config).await?;

        let app_state = AppState::builder().db(pool.clone()).build();
        let router = build_router(app_state);

        Ok(Self { router, config, pool })
    }

    /// Convert application into a test server (for tests)
    #[cfg(test)]
    pub fn into_test_server(self) -> axum_test::TestServer {
        axum_test::TestServer::new(self.router).expect("Failed to create test server")
    }

    /// Start serving the application
    pub async fn serve<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let bind_addr = self.config.bind_address();
        let listener = TcpListener::bind(&bind_addr).await?;
        info!(
            "crmctl listening on http://{}, available at http://localhost:{}",
            bind_addr, self.config.port
        );

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("Closing database connections...");
        self.pool.close().await;

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::AppState;
    use crate::test_utils::*;
    use axum::http::StatusCode;
    use sqlx::{ConnectOptions, MySqlPool};

    #[sqlx::test]
    #[test_log::test]
    async fn test_application_integration(pool: MySqlPool) {
        let mut config = create_test_config();
        config.database.url = Some(pool.connect_options().to_url_lossy().to_string());

        let app = crate::Application::new(config).await;
        assert!(app.is_ok(), "Application::new should succeed");

        let server = app.unwrap().into_test_server();

        let health = server.get("/healthz").await;
        health.assert_status_ok();
        health.assert_text("OK");

        server.get("/").await.assert_status_ok();
        server.get("/customers").await.assert_status_ok();
        server.get("/static/css/style.css").await.assert_status_ok();
    }

    #[sqlx::test]
    async fn test_migrations_are_idempotent(pool: MySqlPool) {
        crate::migrator().run(&pool).await.expect("Re-running migrations should be a no-op");
    }

    #[sqlx::test]
    async fn test_unknown_route_is_404(pool: MySqlPool) {
        let state = AppState::builder().db(pool).build();
        let server = axum_test::TestServer::new(super::build_router(state)).expect("Failed to create test server");

        server.get("/customers/1/edit/extra").await.assert_status(StatusCode::NOT_FOUND);
    }

    #[sqlx::test]
    async fn test_department_edit_route_does_not_exist(pool: MySqlPool) {
        let server = create_test_server(pool);

        server.get("/departments/1/edit").await.assert_status(StatusCode::NOT_FOUND);
    }

    #[sqlx::test]
    async fn test_non_numeric_path_id_is_rejected(pool: MySqlPool) {
        let server = create_test_server(pool);

        server.get("/customers/abc/edit").await.assert_status(StatusCode::BAD_REQUEST);
    }
}
