//! Database repository for employee/customer links.

use std::collections::BTreeSet;

use sqlx::{MySql, MySqlConnection, QueryBuilder};
use tracing::instrument;

use crate::{
    db::{
        errors::Result,
        models::employee_customers::LinkedCustomer,
    },
    types::{CustomerId, EmployeeId},
};

pub struct EmployeeCustomers<'c> {
    db: &'c mut MySqlConnection,
}

impl<'c> EmployeeCustomers<'c> {
    pub fn new(db: &'c mut MySqlConnection) -> Self {
        Self { db }
    }

    /// IDs of the employees linked to a customer, ascending
    #[instrument(skip(self), err)]
    pub async fn employees_for_customer(&mut self, customer_id: CustomerId) -> Result<Vec<EmployeeId>> {
        let ids = sqlx::query_scalar::<_, EmployeeId>(
            "SELECT employee_id FROM employee_customer WHERE customer_id = ? ORDER BY employee_id",
        )
        .bind(customer_id)
        .fetch_all(&mut *self.db)
        .await?;

        Ok(ids)
    }

    #[instrument(skip(self), err)]
    pub async fn customers_for_employee(&mut self, employee_id: EmployeeId) -> Result<Vec<LinkedCustomer>> {
        let customers = sqlx::query_as::<_, LinkedCustomer>(
            r#"
            SELECT c.customer_id, c.first_name, c.last_name
            FROM employee_customer ec
            JOIN customers c ON ec.customer_id = c.customer_id
            WHERE ec.employee_id = ?
            ORDER BY c.last_name, c.first_name
            "#,
        )
        .bind(employee_id)
        .fetch_all(&mut *self.db)
        .await?;

        Ok(customers)
    }

    /// Link a customer to each of the given employees. Repeated IDs are collapsed into one row.
    #[instrument(skip(self, employee_ids), fields(count = employee_ids.len()), err)]
    pub async fn link_all(&mut self, customer_id: CustomerId, employee_ids: &[EmployeeId]) -> Result<u64> {
        let distinct: BTreeSet<EmployeeId> = employee_ids.iter().copied().collect();
        if distinct.is_empty() {
            return Ok(0);
        }

        let mut query: QueryBuilder<MySql> = QueryBuilder::new("INSERT INTO employee_customer (employee_id, customer_id) ");
        query.push_values(distinct, |mut row, employee_id| {
            row.push_bind(employee_id).push_bind(customer_id);
        });

        let result = query.build().execute(&mut *self.db).await?;
        Ok(result.rows_affected())
    }

    /// Replace every link of a customer with the given set.
    ///
    /// This is a delete followed by an insert; run it on a transaction so a failed insert does
    /// not leave the customer unlinked.
    #[instrument(skip(self, employee_ids), fields(count = employee_ids.len()), err)]
    pub async fn replace_for_customer(&mut self, customer_id: CustomerId, employee_ids: &[EmployeeId]) -> Result<u64> {
        sqlx::query("DELETE FROM employee_customer WHERE customer_id = ?")
            .bind(customer_id)
            .execute(&mut *self.db)
            .await?;

        self.link_all(customer_id, employee_ids).await
    }
}
