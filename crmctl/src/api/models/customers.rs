//! Customer form.

use serde::Deserialize;

use crate::{
    api::models::{PERSON_NAME_MAX, required_text},
    db::models::customers::CustomerCreateDBRequest,
    errors::Result,
    types::{CompanyId, EmployeeId},
};

/// Submitted by both the create and the edit page
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CustomerForm {
    pub first_name: String,
    pub last_name: String,
    pub rating: i32,
    pub company_id: CompanyId,
    /// Employees to link; empty when no box was ticked
    #[serde(default)]
    pub employee_ids: Vec<EmployeeId>,
}

impl CustomerForm {
    /// Trim the names and check them against the column widths.
    pub fn validate(self) -> Result<Self> {
        Ok(Self {
            first_name: required_text("first_name", &self.first_name, PERSON_NAME_MAX)?,
            last_name: required_text("last_name", &self.last_name, PERSON_NAME_MAX)?,
            ..self
        })
    }

    pub fn db_request(&self) -> CustomerCreateDBRequest {
        CustomerCreateDBRequest {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            rating: self.rating,
            company_id: self.company_id,
        }
    }
}
