//! Database repository for companies.

use sqlx::MySqlConnection;
use tracing::instrument;

use crate::{
    db::{
        errors::Result,
        models::companies::{Company, CompanyCreateDBRequest},
    },
    types::{CompanyId, id_from_insert},
};

pub struct Companies<'c> {
    db: &'c mut MySqlConnection,
}

impl<'c> Companies<'c> {
    pub fn new(db: &'c mut MySqlConnection) -> Self {
        Self { db }
    }

    #[instrument(skip(self, request), fields(name = %request.name), err)]
    pub async fn create(&mut self, request: &CompanyCreateDBRequest) -> Result<Company> {
        let result = sqlx::query("INSERT INTO companies (name) VALUES (?)")
            .bind(&request.name)
            .execute(&mut *self.db)
            .await?;

        Ok(Company {
            company_id: id_from_insert(result.last_insert_id())?,
            name: request.name.clone(),
        })
    }

    #[instrument(skip(self), err)]
    pub async fn get_by_id(&mut self, id: CompanyId) -> Result<Option<Company>> {
        let company = sqlx::query_as::<_, Company>("SELECT company_id, name FROM companies WHERE company_id = ?")
            .bind(id)
            .fetch_optional(&mut *self.db)
            .await?;

        Ok(company)
    }

    #[instrument(skip(self), err)]
    pub async fn list(&mut self) -> Result<Vec<Company>> {
        let companies = sqlx::query_as::<_, Company>("SELECT company_id, name FROM companies ORDER BY name")
            .fetch_all(&mut *self.db)
            .await?;

        Ok(companies)
    }

    #[instrument(skip(self), err)]
    pub async fn delete(&mut self, id: CompanyId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM companies WHERE company_id = ?")
            .bind(id)
            .execute(&mut *self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::errors::DbError;
    use crate::test_utils::create_test_customer;
    use sqlx::MySqlPool;

    #[sqlx::test]
    #[test_log::test]
    async fn test_list_is_ordered_by_name(pool: MySqlPool) {
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Companies::new(&mut conn);

        for name in ["Zenith", "Acme", "Midway"] {
            repo.create(&CompanyCreateDBRequest { name: name.to_string() }).await.unwrap();
        }

        let names: Vec<String> = repo.list().await.unwrap().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Acme", "Midway", "Zenith"]);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_delete_with_customers_is_foreign_key_violation(pool: MySqlPool) {
        let customer = create_test_customer(&pool).await;

        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Companies::new(&mut conn);
        let result = repo.delete(customer.company_id).await;

        assert!(matches!(result, Err(DbError::ForeignKeyViolation { .. })));
    }
}
