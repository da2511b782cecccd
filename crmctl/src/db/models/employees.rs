//! Database models for employees.

use serde::Serialize;
use sqlx::FromRow;

use crate::types::{DepartmentId, EmployeeId};

/// Database entity model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Employee {
    pub employee_id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub department_id: DepartmentId,
}

/// An employee row joined with the name of its department
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct EmployeeWithDepartment {
    pub employee_id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub department_id: DepartmentId,
    pub department_name: String,
}

/// Request for creating an employee
#[derive(Debug, Clone)]
pub struct EmployeeCreateDBRequest {
    pub first_name: String,
    pub last_name: String,
    pub department_id: DepartmentId,
}

/// Full overwrite of an employee's mutable fields
pub type EmployeeUpdateDBRequest = EmployeeCreateDBRequest;
