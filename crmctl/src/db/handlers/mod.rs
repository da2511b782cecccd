//! Repository implementations for database access.
//!
//! Each repository wraps a `&mut MySqlConnection` (a pooled connection or a transaction),
//! binds parameters into plain SQL, and returns models from [`crate::db::models`].
//!
//! - [`Customers`]: customers, listed with their company name
//! - [`Employees`]: employees, listed with their department name
//! - [`Departments`]: departments (no update path)
//! - [`Companies`]: companies (no update path)
//! - [`EmployeeCustomers`]: employee/customer association rows
//!
//! Writes that touch more than one table should be run on a transaction:
//!
//! ```ignore
//! use crmctl::db::handlers::{Customers, EmployeeCustomers, Repository};
//!
//! let mut tx = pool.begin().await?;
//! let customer = Customers::new(&mut tx).create(&request).await?;
//! EmployeeCustomers::new(&mut tx).link_all(customer.customer_id, &employee_ids).await?;
//! tx.commit().await?;
//! ```

pub mod companies;
pub mod customers;
pub mod departments;
pub mod employee_customers;
pub mod employees;
pub mod repository;

pub use companies::Companies;
pub use customers::Customers;
pub use departments::Departments;
pub use employee_customers::EmployeeCustomers;
pub use employees::Employees;
pub use repository::Repository;
