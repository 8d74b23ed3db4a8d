use crate::{
    abstract_trait::product::repository::ProductCommandRepositoryTrait,
    domain::requests::product::{CreateProductRequest, UpdateProductRequest},
};
use async_trait::async_trait;
use serde_json::Value;
use shared::{config::ConnectionPool, errors::RepositoryError};
use sqlx::{MySql, mysql::MySqlArguments, query::Query};
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

/// Binds a body field the way a JSON client hands it to MySQL. Scalars keep
/// their JSON type; arrays and objects are sent as JSON text. Conversion to
/// the column type is left to MySQL.
fn bind_field<'q>(
    query: Query<'q, MySql, MySqlArguments>,
    field: &Option<Value>,
) -> Query<'q, MySql, MySqlArguments> {
    match field {
        None | Some(Value::Null) => query.bind(None::<String>),
        Some(Value::Bool(flag)) => query.bind(*flag),
        Some(Value::Number(number)) => {
            if let Some(int) = number.as_i64() {
                query.bind(int)
            } else if let Some(uint) = number.as_u64() {
                query.bind(uint)
            } else {
                query.bind(number.as_f64())
            }
        }
        Some(Value::String(text)) => query.bind(text.clone()),
        Some(other) => query.bind(other.to_string()),
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create_product(&self, req: &CreateProductRequest) -> Result<i64, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let query = sqlx::query(
            r#"
            INSERT INTO products (name, price, discount, review_count, image_url)
            VALUES (?, ?, ?, ?, ?)
            "#,
        );

        let result = req
            .columns()
            .into_iter()
            .fold(query, bind_field)
            .execute(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to create product {:?}: {:?}", req.name_label(), err);
                RepositoryError::from(err)
            })?;

        let id = i64::try_from(result.last_insert_id()).map_err(|_| {
            RepositoryError::Custom(format!(
                "generated id {} does not fit in i64",
                result.last_insert_id()
            ))
        })?;

        info!("✅ Created product ID {} ({:?})", id, req.name_label());
        Ok(id)
    }

    async fn update_product(
        &self,
        id: i64,
        req: &UpdateProductRequest,
    ) -> Result<u64, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let query = sqlx::query(
            r#"
            UPDATE products
            SET name = ?,
                price = ?,
                discount = ?,
                review_count = ?,
                image_url = ?
            WHERE id = ? AND (deleted = 0 OR deleted IS NULL)
            "#,
        );

        let result = req
            .columns()
            .into_iter()
            .fold(query, bind_field)
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to update product ID {}: {:?}", id, err);
                RepositoryError::from(err)
            })?;

        info!(
            "🔄 Updated product ID {} ({} row(s))",
            id,
            result.rows_affected()
        );
        Ok(result.rows_affected())
    }

    async fn trash_product(&self, id: i64) -> Result<u64, RepositoryError> {
        info!("🗑️ Trashing product: {}", id);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query(
            r#"
            UPDATE products
            SET deleted = 1
            WHERE id = ?
            "#,
        )
        .bind(id)
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to trash product {}: {:?}", id, e);
            RepositoryError::from(e)
        })?;

        Ok(result.rows_affected())
    }

    async fn restore_product(&self, id: i64) -> Result<u64, RepositoryError> {
        info!("🔄 Restoring product: {}", id);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        // sqlx reports matched rows, so rows already at 0 are excluded here
        let result = sqlx::query(
            r#"
            UPDATE products
            SET deleted = 0
            WHERE id = ? AND (deleted <> 0 OR deleted IS NULL)
            "#,
        )
        .bind(id)
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to restore product {}: {:?}", id, e);
            RepositoryError::from(e)
        })?;

        Ok(result.rows_affected())
    }
}
