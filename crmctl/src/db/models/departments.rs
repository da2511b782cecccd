//! Database models for departments.

use serde::Serialize;
use sqlx::FromRow;

use crate::types::DepartmentId;

/// Database entity model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Department {
    pub department_id: DepartmentId,
    pub name: String,
}

/// Request for creating a department
#[derive(Debug, Clone)]
pub struct DepartmentCreateDBRequest {
    pub name: String,
}
