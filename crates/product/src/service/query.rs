use crate::{
    abstract_trait::product::{
        repository::DynProductQueryRepository, service::ProductQueryServiceTrait,
    },
    domain::{
        messages::{
            ERROR_FETCHING_PRODUCTS, PRODUCT_NOT_FOUND, error_fetching_product,
            error_searching_products,
        },
        response::product::ProductResponse,
    },
    service::tracing_ctx::ServiceTracer,
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use shared::{errors::ServiceError, utils::Method};
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductQueryService {
    pub query: DynProductQueryRepository,
    tracer: ServiceTracer,
}

impl ProductQueryService {
    pub fn new(query: DynProductQueryRepository, registry: &mut Registry) -> Self {
        Self {
            query,
            tracer: ServiceTracer::new("product-query-service", registry),
        }
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_active(&self) -> Result<Vec<ProductResponse>, ServiceError> {
        info!("🟢 Finding active products");

        let tracing_ctx = self.tracer.start_tracing(
            "product_find_active",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("operation", "find_active"),
            ],
        );

        let products = match self.query.find_active().await {
            Ok(products) => products,
            Err(e) => {
                let msg = format!("Failed to fetch active products: {e:?}");
                self.tracer
                    .complete_tracing_error(&tracing_ctx, Method::Get, &msg);
                return Err(ServiceError::repo(ERROR_FETCHING_PRODUCTS, e));
            }
        };

        let data: Vec<ProductResponse> = products.into_iter().map(ProductResponse::from).collect();

        self.tracer.complete_tracing_success(
            &tracing_ctx,
            Method::Get,
            &format!("Retrieved {} active products", data.len()),
        );

        Ok(data)
    }

    async fn find_by_id(&self, id: i64) -> Result<ProductResponse, ServiceError> {
        info!("🆔 Finding product by ID: {id}");

        let tracing_ctx = self.tracer.start_tracing(
            "product_find_by_id",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("operation", "find_by_id"),
                KeyValue::new("product.id", id),
            ],
        );

        match self.query.find_by_id(id).await {
            Ok(Some(product)) => {
                self.tracer.complete_tracing_success(
                    &tracing_ctx,
                    Method::Get,
                    "Product retrieved successfully",
                );
                Ok(ProductResponse::from(product))
            }
            Ok(None) => {
                error!("Product ID {id} not found or deleted");
                self.tracer
                    .complete_tracing_error(&tracing_ctx, Method::Get, PRODUCT_NOT_FOUND);
                Err(ServiceError::not_found(PRODUCT_NOT_FOUND))
            }
            Err(e) => {
                let msg = format!("Failed to fetch product {id}: {e:?}");
                self.tracer
                    .complete_tracing_error(&tracing_ctx, Method::Get, &msg);
                Err(ServiceError::repo(error_fetching_product(id), e))
            }
        }
    }

    async fn search(&self, keyword: &str) -> Result<Vec<ProductResponse>, ServiceError> {
        info!("🔍 Searching products | keyword: {keyword:?}");

        let tracing_ctx = self.tracer.start_tracing(
            "product_search",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("operation", "search"),
                KeyValue::new("search", keyword.to_string()),
            ],
        );

        let products = match self.query.search_by_name(keyword).await {
            Ok(products) => products,
            Err(e) => {
                let msg = format!("Failed to search products: {e:?}");
                self.tracer
                    .complete_tracing_error(&tracing_ctx, Method::Get, &msg);
                return Err(ServiceError::repo(error_searching_products(keyword), e));
            }
        };

        self.tracer.complete_tracing_success(
            &tracing_ctx,
            Method::Get,
            &format!("Found {} products matching {keyword:?}", products.len()),
        );

        Ok(products.into_iter().map(ProductResponse::from).collect())
    }
}
