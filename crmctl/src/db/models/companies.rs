//! Database models for companies.

use serde::Serialize;
use sqlx::FromRow;

use crate::types::CompanyId;

/// Database entity model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Company {
    pub company_id: CompanyId,
    pub name: String,
}

/// Request for creating a company
#[derive(Debug, Clone)]
pub struct CompanyCreateDBRequest {
    pub name: String,
}
