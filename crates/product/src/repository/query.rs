use crate::{
    abstract_trait::product::repository::ProductQueryRepositoryTrait,
    model::product::Product as ProductModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductQueryRepository {
    db: ConnectionPool,
}

impl ProductQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

/// `%keyword%`; wildcard characters inside the keyword are left as-is.
pub(crate) fn search_pattern(keyword: &str) -> String {
    format!("%{keyword}%")
}

#[async_trait]
impl ProductQueryRepositoryTrait for ProductQueryRepository {
    async fn find_active(&self) -> Result<Vec<ProductModel>, RepositoryError> {
        info!("🟢 Fetching active products");

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let products = sqlx::query_as::<_, ProductModel>(
            r#"
            SELECT CAST(id AS SIGNED) AS id,
                   name,
                   CAST(price AS DECIMAL(65, 10)) AS price,
                   CAST(discount AS DECIMAL(65, 10)) AS discount,
                   CAST(review_count AS SIGNED) AS review_count,
                   image_url,
                   CAST(deleted AS SIGNED) AS deleted
            FROM products
            WHERE deleted = 0 OR deleted IS NULL
            "#,
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch active products: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(products)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ProductModel>, RepositoryError> {
        info!("🆔 Fetching product by ID: {}", id);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let product = sqlx::query_as::<_, ProductModel>(
            r#"
            SELECT CAST(id AS SIGNED) AS id,
                   name,
                   CAST(price AS DECIMAL(65, 10)) AS price,
                   CAST(discount AS DECIMAL(65, 10)) AS discount,
                   CAST(review_count AS SIGNED) AS review_count,
                   image_url,
                   CAST(deleted AS SIGNED) AS deleted
            FROM products
            WHERE id = ? AND (deleted = 0 OR deleted IS NULL)
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch product {}: {:?}", id, e);
            RepositoryError::from(e)
        })?;

        Ok(product)
    }

    async fn search_by_name(&self, keyword: &str) -> Result<Vec<ProductModel>, RepositoryError> {
        info!("🔍 Searching products with keyword: {:?}", keyword);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let products = sqlx::query_as::<_, ProductModel>(
            r#"
            SELECT CAST(id AS SIGNED) AS id,
                   name,
                   CAST(price AS DECIMAL(65, 10)) AS price,
                   CAST(discount AS DECIMAL(65, 10)) AS discount,
                   CAST(review_count AS SIGNED) AS review_count,
                   image_url,
                   CAST(deleted AS SIGNED) AS deleted
            FROM products
            WHERE name LIKE ? AND (deleted = 0 OR deleted IS NULL)
            "#,
        )
        .bind(search_pattern(keyword))
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to search products with {:?}: {:?}", keyword, e);
            RepositoryError::from(e)
        })?;

        Ok(products)
    }
}
