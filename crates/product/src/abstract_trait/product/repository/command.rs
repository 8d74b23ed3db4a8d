use crate::domain::requests::product::{CreateProductRequest, UpdateProductRequest};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynProductCommandRepository = Arc<dyn ProductCommandRepositoryTrait + Send + Sync>;

/// Mutations return the affected-row count; zero means no row matched.
#[async_trait]
pub trait ProductCommandRepositoryTrait {
    /// Returns the generated primary key.
    async fn create_product(&self, req: &CreateProductRequest) -> Result<i64, RepositoryError>;
    /// Overwrites the five fields of a visible row.
    async fn update_product(
        &self,
        id: i64,
        req: &UpdateProductRequest,
    ) -> Result<u64, RepositoryError>;
    async fn trash_product(&self, id: i64) -> Result<u64, RepositoryError>;
    async fn restore_product(&self, id: i64) -> Result<u64, RepositoryError>;
}
