//! Database repository for departments.
//!
//! Departments are created and deleted, never renamed, so this repository has inherent methods
//! rather than a [`super::Repository`] implementation.

use sqlx::MySqlConnection;
use tracing::instrument;

use crate::{
    db::{
        errors::Result,
        models::departments::{Department, DepartmentCreateDBRequest},
    },
    types::{DepartmentId, id_from_insert},
};

pub struct Departments<'c> {
    db: &'c mut MySqlConnection,
}

impl<'c> Departments<'c> {
    /// Create a new Departments repository instance
    pub fn new(db: &'c mut MySqlConnection) -> Self {
        Self { db }
    }

    #[instrument(skip(self, request), fields(name = %request.name), err)]
    pub async fn create(&mut self, request: &DepartmentCreateDBRequest) -> Result<Department> {
        let result = sqlx::query("INSERT INTO departments (name) VALUES (?)")
            .bind(&request.name)
            .execute(&mut *self.db)
            .await?;

        Ok(Department {
            department_id: id_from_insert(result.last_insert_id())?,
            name: request.name.clone(),
        })
    }

    #[instrument(skip(self), err)]
    pub async fn get_by_id(&mut self, id: DepartmentId) -> Result<Option<Department>> {
        let department = sqlx::query_as::<_, Department>("SELECT department_id, name FROM departments WHERE department_id = ?")
            .bind(id)
            .fetch_optional(&mut *self.db)
            .await?;

        Ok(department)
    }

    #[instrument(skip(self), err)]
    pub async fn list(&mut self) -> Result<Vec<Department>> {
        let departments = sqlx::query_as::<_, Department>("SELECT department_id, name FROM departments ORDER BY department_id")
            .fetch_all(&mut *self.db)
            .await?;

        Ok(departments)
    }

    /// Delete a department. Fails with [`crate::db::errors::DbError::ForeignKeyViolation`] while
    /// employees still reference it.
    #[instrument(skip(self), err)]
    pub async fn delete(&mut self, id: DepartmentId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM departments WHERE department_id = ?")
            .bind(id)
            .execute(&mut *self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
