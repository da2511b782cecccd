//! Base repository trait for database operations.

use crate::db::errors::Result;

/// A repository is the data access layer for one MySQL table. It provides methods for creating,
/// reading, updating, and deleting rows, and for listing them.
///
/// Tables without an update path (departments, companies) expose inherent methods instead of
/// implementing this trait.
#[async_trait::async_trait]
pub trait Repository {
    /// The request type for creating entities
    type CreateRequest;

    /// The request type for updating entities
    type UpdateRequest;

    /// The row type returned by single-entity operations
    type Response;

    /// The row type returned by `list`, usually joined with a parent's name
    type ListItem;

    /// The identifier type for lookups
    type Id: Send + Sync;

    /// Create a new entity
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response>;

    /// Get an entity by ID
    async fn get_by_id(&mut self, id: Self::Id) -> Result<Option<Self::Response>>;

    /// List all entities
    async fn list(&mut self) -> Result<Vec<Self::ListItem>>;

    /// Delete an entity by ID, returning whether a row was removed
    async fn delete(&mut self, id: Self::Id) -> Result<bool>;

    /// Overwrite an entity's mutable fields
    async fn update(&mut self, id: Self::Id, request: &Self::UpdateRequest) -> Result<Self::Response>;
}
