use crate::model::product::Product as ProductModel;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynProductQueryRepository = Arc<dyn ProductQueryRepositoryTrait + Send + Sync>;

/// Every query only sees visible rows (`deleted` is `0` or `NULL`).
#[async_trait]
pub trait ProductQueryRepositoryTrait {
    async fn find_active(&self) -> Result<Vec<ProductModel>, RepositoryError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<ProductModel>, RepositoryError>;
    async fn search_by_name(&self, keyword: &str) -> Result<Vec<ProductModel>, RepositoryError>;
}
