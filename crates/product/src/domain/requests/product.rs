use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Body of `POST /products`.
///
/// Fields keep whatever JSON the client sent and are bound to the statement
/// as-is, so MySQL's own coercion and column rules decide whether the write
/// succeeds. A missing field binds as `NULL`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    #[schema(value_type = Option<String>, example = "Shirt")]
    pub name: Option<Value>,

    #[schema(value_type = Option<f64>, example = 10)]
    pub price: Option<Value>,

    #[schema(value_type = Option<f64>, example = 0)]
    pub discount: Option<Value>,

    #[schema(value_type = Option<i64>, example = 0)]
    pub review_count: Option<Value>,

    #[schema(value_type = Option<String>, example = "https://cdn.example.com/shirt.png")]
    pub image_url: Option<Value>,
}

/// Body of `PUT /products/{id}`. All five columns are overwritten.
pub type UpdateProductRequest = CreateProductRequest;

impl CreateProductRequest {
    /// Column values in statement order: name, price, discount,
    /// review_count, image_url.
    pub fn columns(&self) -> [&Option<Value>; 5] {
        [
            &self.name,
            &self.price,
            &self.discount,
            &self.review_count,
            &self.image_url,
        ]
    }

    /// Name as it would read back from a text column, for logs and spans.
    pub fn name_label(&self) -> String {
        match &self.name {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(name)) => name.clone(),
            Some(other) => other.to_string(),
        }
    }
}
