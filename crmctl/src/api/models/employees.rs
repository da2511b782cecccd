//! Employee form.

use serde::Deserialize;

use crate::{
    api::models::{PERSON_NAME_MAX, required_text},
    db::models::employees::EmployeeCreateDBRequest,
    errors::Result,
    types::DepartmentId,
};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EmployeeForm {
    pub first_name: String,
    pub last_name: String,
    pub department_id: DepartmentId,
}

impl EmployeeForm {
    pub fn validate(self) -> Result<Self> {
        Ok(Self {
            first_name: required_text("first_name", &self.first_name, PERSON_NAME_MAX)?,
            last_name: required_text("last_name", &self.last_name, PERSON_NAME_MAX)?,
            ..self
        })
    }

    pub fn db_request(&self) -> EmployeeCreateDBRequest {
        EmployeeCreateDBRequest {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            department_id: self.department_id,
        }
    }
}
