//! Database repository for customers.

use sqlx::MySqlConnection;
use tracing::instrument;

use crate::{
    db::{
        errors::{DbError, Result},
        handlers::repository::Repository,
        models::customers::{Customer, CustomerCreateDBRequest, CustomerUpdateDBRequest, CustomerWithCompany},
    },
    types::{CustomerId, id_from_insert},
};

pub struct Customers<'c> {
    db: &'c mut MySqlConnection,
}

#[async_trait::async_trait]
impl<'c> Repository for Customers<'c> {
    type CreateRequest = CustomerCreateDBRequest;
    type UpdateRequest = CustomerUpdateDBRequest;
    type Response = Customer;
    type ListItem = CustomerWithCompany;
    type Id = CustomerId;

    #[instrument(skip(self, request), fields(company_id = request.company_id), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let result = sqlx::query(
            r#"
            INSERT INTO customers (first_name, last_name, rating, company_id)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&request.first_name)
        .bind(&request.last_name)
        .bind(request.rating)
        .bind(request.company_id)
        .execute(&mut *self.db)
        .await?;

        let customer_id = id_from_insert(result.last_insert_id())?;

        Ok(Customer {
            customer_id,
            first_name: request.first_name.clone(),
            last_name: request.last_name.clone(),
            rating: request.rating,
            company_id: request.company_id,
        })
    }

    #[instrument(skip(self), err)]
    async fn get_by_id(&mut self, id: Self::Id) -> Result<Option<Self::Response>> {
        let customer = sqlx::query_as::<_, Customer>(
            "SELECT customer_id, first_name, last_name, rating, company_id FROM customers WHERE customer_id = ?",
        )
        .bind(id)
        .fetch_optional(&mut *self.db)
        .await?;

        Ok(customer)
    }

    #[instrument(skip(self), err)]
    async fn list(&mut self) -> Result<Vec<Self::ListItem>> {
        let customers = sqlx::query_as::<_, CustomerWithCompany>(
            r#"
            SELECT c.customer_id, c.first_name, c.last_name, c.rating, c.company_id, co.name AS company_name
            FROM customers c
            JOIN companies co ON c.company_id = co.company_id
            ORDER BY c.customer_id
            "#,
        )
        .fetch_all(&mut *self.db)
        .await?;

        Ok(customers)
    }

    #[instrument(skip(self), err)]
    async fn delete(&mut self, id: Self::Id) -> Result<bool> {
        // employee_customer rows go with it (ON DELETE CASCADE)
        let result = sqlx::query("DELETE FROM customers WHERE customer_id = ?")
            .bind(id)
            .execute(&mut *self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self, request), err)]
    async fn update(&mut self, id: Self::Id, request: &Self::UpdateRequest) -> Result<Self::Response> {
        sqlx::query(
            r#"
            UPDATE customers
            SET first_name = ?, last_name = ?, rating = ?, company_id = ?
            WHERE customer_id = ?
            "#,
        )
        .bind(&request.first_name)
        .bind(&request.last_name)
        .bind(request.rating)
        .bind(request.company_id)
        .bind(id)
        .execute(&mut *self.db)
        .await?;

        // MySQL reports matched-but-unchanged rows as unaffected, so re-read to tell "missing"
        // apart from "no-op".
        self.get_by_id(id).await?.ok_or(DbError::NotFound)
    }
}

impl<'c> Customers<'c> {
    pub fn new(db: &'c mut MySqlConnection) -> Self {
        Self { db }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_company;
    use sqlx::MySqlPool;

    fn request(company_id: u32, rating: i32) -> CustomerCreateDBRequest {
        CustomerCreateDBRequest {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            rating,
            company_id,
        }
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_create_then_list_includes_company_name(pool: MySqlPool) {
        let company = create_test_company(&pool, "Analytical Engines Ltd").await;

        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Customers::new(&mut conn);

        let created = repo.create(&request(company.company_id, 4)).await.unwrap();
        assert!(created.customer_id > 0);

        let listed = repo.list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].customer_id, created.customer_id);
        assert_eq!(listed[0].first_name, "Ada");
        assert_eq!(listed[0].company_name, "Analytical Engines Ltd");
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_update_rating_leaves_other_fields(pool: MySqlPool) {
        let company = create_test_company(&pool, "Acme").await;

        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Customers::new(&mut conn);
        let created = repo.create(&request(company.company_id, 2)).await.unwrap();

        let updated = repo.update(created.customer_id, &request(company.company_id, 5)).await.unwrap();
        assert_eq!(updated.rating, 5);

        let fetched = repo.get_by_id(created.customer_id).await.unwrap().unwrap();
        assert_eq!(fetched.rating, 5);
        assert_eq!(fetched.first_name, created.first_name);
        assert_eq!(fetched.last_name, created.last_name);
        assert_eq!(fetched.company_id, created.company_id);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_update_with_identical_values_is_not_an_error(pool: MySqlPool) {
        let company = create_test_company(&pool, "Acme").await;

        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Customers::new(&mut conn);
        let created = repo.create(&request(company.company_id, 3)).await.unwrap();

        let updated = repo.update(created.customer_id, &request(company.company_id, 3)).await.unwrap();
        assert_eq!(updated, created);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_update_missing_customer_is_not_found(pool: MySqlPool) {
        let company = create_test_company(&pool, "Acme").await;

        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Customers::new(&mut conn);

        let result = repo.update(9999, &request(company.company_id, 1)).await;
        assert!(matches!(result, Err(DbError::NotFound)));
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_create_with_unknown_company_is_foreign_key_violation(pool: MySqlPool) {
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Customers::new(&mut conn);

        let result = repo.create(&request(424242, 1)).await;
        assert!(matches!(result, Err(DbError::ForeignKeyViolation { .. })));
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_delete(pool: MySqlPool) {
        let company = create_test_company(&pool, "Acme").await;

        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Customers::new(&mut conn);
        let created = repo.create(&request(company.company_id, 3)).await.unwrap();

        assert!(repo.delete(created.customer_id).await.unwrap());
        assert!(repo.get_by_id(created.customer_id).await.unwrap().is_none());
        assert!(!repo.delete(created.customer_id).await.unwrap());
    }
}
