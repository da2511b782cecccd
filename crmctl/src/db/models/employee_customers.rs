//! Database models for the employee/customer association table.

use serde::Serialize;
use sqlx::FromRow;

use crate::types::CustomerId;

/// A customer linked to an employee, shown read-only on the employee edit page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct LinkedCustomer {
    pub customer_id: CustomerId,
    pub first_name: String,
    pub last_name: String,
}
