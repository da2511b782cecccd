//! Database record models matching table schemas.
//!
//! Each model struct matches a MySQL table row (or a join of a row with its parent's name)
//! and derives `sqlx::FromRow` for query results. Models also derive `Serialize` so handlers
//! can hand them straight to the view layer.
//!
//! - [`companies`]: companies that customers belong to
//! - [`customers`]: customers and their rating
//! - [`departments`]: departments that employees belong to
//! - [`employees`]: employees
//! - [`employee_customers`]: many-to-many links between employees and customers

pub mod companies;
pub mod customers;
pub mod departments;
pub mod employee_customers;
pub mod employees;
