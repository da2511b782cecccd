//! Database layer for data persistence and access.
//!
//! This module implements the data access layer using SQLx with MySQL, following the
//! Repository pattern.
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  (api::handlers - HTML request handlers)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │ Repositories│  (db::handlers - queries)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │   Models    │  (db::models - database records)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │    MySQL    │
//! └─────────────┘
//! ```
//!
//! The schema lives in `migrations/` and is applied at startup by [`crate::migrator`].

pub mod errors;
pub mod handlers;
pub mod models;

use sqlx::MySqlPool;
use tracing::instrument;

/// Current time according to the database server.
#[instrument(skip_all, err)]
pub async fn database_now(pool: &MySqlPool) -> errors::Result<chrono::NaiveDateTime> {
    let now = sqlx::query_scalar::<_, chrono::NaiveDateTime>("SELECT NOW()")
        .fetch_one(pool)
        .await?;
    Ok(now)
}
