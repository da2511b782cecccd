//! HTTP layer: server-rendered pages for the CRM admin.
//!
//! - **[`handlers`]**: Axum route handlers, one module per entity
//! - **[`models`]**: Typed forms parsed from urlencoded request bodies
//!
//! # Routes
//!
//! - **Customers** (`/customers/*`): list, create, edit (including employee links), delete
//! - **Employees** (`/employees/*`): list, create, edit, delete
//! - **Departments** (`/departments/*`): list, create, delete
//! - **Companies** (`/companies/*`): list, create, delete
//! - **Diagnostics**: `/healthz`, `/test-mysql`
//! - **Assets** (`/static/*`): embedded stylesheets

pub mod handlers;
pub mod models;
