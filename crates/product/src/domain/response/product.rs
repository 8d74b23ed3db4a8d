use crate::{domain::product::DeletedState, model::product::Product as ProductModel};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ProductResponse {
    pub id: i64,
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub discount: Option<Decimal>,
    pub review_count: Option<i64>,
    pub image_url: Option<String>,
    #[schema(value_type = bool)]
    pub deleted: DeletedState,
}

impl From<ProductModel> for ProductResponse {
    fn from(value: ProductModel) -> Self {
        ProductResponse {
            id: value.id,
            name: value.name,
            price: value.price,
            discount: value.discount,
            review_count: value.review_count,
            image_url: value.image_url,
            deleted: DeletedState::from(value.deleted),
        }
    }
}
