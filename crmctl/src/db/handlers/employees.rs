//! Database repository for employees.

use sqlx::MySqlConnection;
use tracing::instrument;

use crate::{
    db::{
        errors::{DbError, Result},
        handlers::repository::Repository,
        models::employees::{Employee, EmployeeCreateDBRequest, EmployeeUpdateDBRequest, EmployeeWithDepartment},
    },
    types::{EmployeeId, id_from_insert},
};

pub struct Employees<'c> {
    db: &'c mut MySqlConnection,
}

#[async_trait::async_trait]
impl<'c> Repository for Employees<'c> {
    type CreateRequest = EmployeeCreateDBRequest;
    type UpdateRequest = EmployeeUpdateDBRequest;
    type Response = Employee;
    type ListItem = EmployeeWithDepartment;
    type Id = EmployeeId;

    #[instrument(skip(self, request), fields(department_id = request.department_id), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let result = sqlx::query("INSERT INTO employees (first_name, last_name, department_id) VALUES (?, ?, ?)")
            .bind(&request.first_name)
            .bind(&request.last_name)
            .bind(request.department_id)
            .execute(&mut *self.db)
            .await?;

        Ok(Employee {
            employee_id: id_from_insert(result.last_insert_id())?,
            first_name: request.first_name.clone(),
            last_name: request.last_name.clone(),
            department_id: request.department_id,
        })
    }

    #[instrument(skip(self), err)]
    async fn get_by_id(&mut self, id: Self::Id) -> Result<Option<Self::Response>> {
        let employee = sqlx::query_as::<_, Employee>(
            "SELECT employee_id, first_name, last_name, department_id FROM employees WHERE employee_id = ?",
        )
        .bind(id)
        .fetch_optional(&mut *self.db)
        .await?;

        Ok(employee)
    }

    #[instrument(skip(self), err)]
    async fn list(&mut self) -> Result<Vec<Self::ListItem>> {
        let employees = sqlx::query_as::<_, EmployeeWithDepartment>(
            r#"
            SELECT e.employee_id, e.first_name, e.last_name, e.department_id, d.name AS department_name
            FROM employees e
            JOIN departments d ON e.department_id = d.department_id
            ORDER BY e.employee_id
            "#,
        )
        .fetch_all(&mut *self.db)
        .await?;

        Ok(employees)
    }

    #[instrument(skip(self), err)]
    async fn delete(&mut self, id: Self::Id) -> Result<bool> {
        let result = sqlx::query("DELETE FROM employees WHERE employee_id = ?")
            .bind(id)
            .execute(&mut *self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self, request), err)]
    async fn update(&mut self, id: Self::Id, request: &Self::UpdateRequest) -> Result<Self::Response> {
        sqlx::query("UPDATE employees SET first_name = ?, last_name = ?, department_id = ? WHERE employee_id = ?")
            .bind(&request.first_name)
            .bind(&request.last_name)
            .bind(request.department_id)
            .bind(id)
            .execute(&mut *self.db)
            .await?;

        self.get_by_id(id).await?.ok_or(DbError::NotFound)
    }
}

impl<'c> Employees<'c> {
    pub fn new(db: &'c mut MySqlConnection) -> Self {
        Self { db }
    }

    /// All employees without the department join, for customer forms
    #[instrument(skip(self), err)]
    pub async fn list_all(&mut self) -> Result<Vec<Employee>> {
        let employees = sqlx::query_as::<_, Employee>(
            "SELECT employee_id, first_name, last_name, department_id FROM employees ORDER BY last_name, first_name",
        )
        .fetch_all(&mut *self.db)
        .await?;

        Ok(employees)
    }
}
