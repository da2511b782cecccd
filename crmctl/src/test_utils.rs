//! Shared fixtures for repository and HTTP tests.

use axum_test::TestServer;
use sqlx::MySqlPool;

use crate::{
    AppState,
    config::{Config, PoolSettings},
    db::{
        handlers::{Companies, Customers, Departments, Employees, Repository},
        models::{
            companies::{Company, CompanyCreateDBRequest},
            customers::{Customer, CustomerCreateDBRequest},
            departments::{Department, DepartmentCreateDBRequest},
            employees::{Employee, EmployeeCreateDBRequest},
        },
    },
};

pub fn create_test_config() -> Config {
    let mut config = Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        ..Default::default()
    };
    config.database.pool = PoolSettings {
        max_connections: 2,
        min_connections: 0,
        ..Default::default()
    };
    config
}

/// A test server over the full router, backed by the given pool.
pub fn create_test_server(pool: MySqlPool) -> TestServer {
    let state = AppState::builder().db(pool).build();
    TestServer::new(crate::build_router(state)).expect("Failed to create test server")
}

pub async fn create_test_company(pool: &MySqlPool, name: &str) -> Company {
    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    Companies::new(&mut conn)
        .create(&CompanyCreateDBRequest { name: name.to_string() })
        .await
        .expect("Failed to create test company")
}

pub async fn create_test_department(pool: &MySqlPool, name: &str) -> Department {
    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    Departments::new(&mut conn)
        .create(&DepartmentCreateDBRequest { name: name.to_string() })
        .await
        .expect("Failed to create test department")
}

/// Creates an employee in a new department called `department_name`.
pub async fn create_test_employee(pool: &MySqlPool, department_name: &str) -> Employee {
    let department = create_test_department(pool, department_name).await;

    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    Employees::new(&mut conn)
        .create(&EmployeeCreateDBRequest {
            first_name: "Test".to_string(),
            last_name: format!("{department_name} Employee"),
            department_id: department.department_id,
        })
        .await
        .expect("Failed to create test employee")
}

/// Creates a customer with rating 3 in a new company.
pub async fn create_test_customer(pool: &MySqlPool) -> Customer {
    let company = create_test_company(pool, "Test Company").await;

    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    Customers::new(&mut conn)
        .create(&CustomerCreateDBRequest {
            first_name: "Test".to_string(),
            last_name: "Customer".to_string(),
            rating: 3,
            company_id: company.company_id,
        })
        .await
        .expect("Failed to create test customer")
}
