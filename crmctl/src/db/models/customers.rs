//! Database models for customers.

use serde::Serialize;
use sqlx::FromRow;

use crate::types::{CompanyId, CustomerId};

/// Database entity model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Customer {
    pub customer_id: CustomerId,
    pub first_name: String,
    pub last_name: String,
    pub rating: i32,
    pub company_id: CompanyId,
}

/// A customer row joined with the name of its company, as shown on the index page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct CustomerWithCompany {
    pub customer_id: CustomerId,
    pub first_name: String,
    pub last_name: String,
    pub rating: i32,
    pub company_id: CompanyId,
    pub company_name: String,
}

/// Request for creating a customer. Employee links are written separately by
/// [`crate::db::handlers::EmployeeCustomers`].
#[derive(Debug, Clone)]
pub struct CustomerCreateDBRequest {
    pub first_name: String,
    pub last_name: String,
    pub rating: i32,
    pub company_id: CompanyId,
}

/// Full overwrite of a customer's mutable fields
pub type CustomerUpdateDBRequest = CustomerCreateDBRequest;
