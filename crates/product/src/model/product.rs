use rust_decimal::Decimal;
use sqlx::FromRow;

/// Row shape of the `products` table as the SELECTs return it. Numeric
/// columns are cast to `SIGNED` / `DECIMAL` in SQL, so any integer or
/// numeric column type on the table decodes into these fields.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Product {
    pub id: i64,
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub discount: Option<Decimal>,
    pub review_count: Option<i64>,
    pub image_url: Option<String>,
    pub deleted: Option<i64>,
}
