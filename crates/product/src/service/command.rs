use crate::{
    abstract_trait::product::{
        repository::DynProductCommandRepository, service::ProductCommandServiceTrait,
    },
    domain::{
        messages::{
            ERROR_CREATING_PRODUCT, ERROR_DELETING_PRODUCT, ERROR_RESTORING_PRODUCT,
            ERROR_UPDATING_PRODUCT, PRODUCT_CREATED, PRODUCT_NOT_FOUND,
            PRODUCT_NOT_FOUND_OR_DELETED, PRODUCT_NOT_FOUND_OR_NOT_DELETED, PRODUCT_RESTORED,
            PRODUCT_SOFT_DELETED, PRODUCT_UPDATED,
        },
        requests::product::{CreateProductRequest, UpdateProductRequest},
        response::api::{CreatedResponse, MessageResponse},
    },
    service::tracing_ctx::ServiceTracer,
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use shared::{
    errors::{RepositoryError, ServiceError},
    utils::{Method, TracingContext},
};
use tracing::info;

#[derive(Clone)]
pub struct ProductCommandService {
    pub command: DynProductCommandRepository,
    tracer: ServiceTracer,
}

/// Messages for one affected-rows mutation.
struct MutationOutcome {
    method: Method,
    success: &'static str,
    not_found: &'static str,
    failure: &'static str,
}

impl ProductCommandService {
    pub fn new(command: DynProductCommandRepository, registry: &mut Registry) -> Self {
        Self {
            command,
            tracer: ServiceTracer::new("product-command-service", registry),
        }
    }

    /// Zero affected rows is the only "not found" signal for mutations.
    fn finish_mutation(
        &self,
        tracing_ctx: &TracingContext,
        outcome: MutationOutcome,
        result: Result<u64, RepositoryError>,
    ) -> Result<MessageResponse, ServiceError> {
        match result {
            Ok(0) => {
                self.tracer
                    .complete_tracing_error(tracing_ctx, outcome.method, outcome.not_found);
                Err(ServiceError::not_found(outcome.not_found))
            }
            Ok(_) => {
                self.tracer
                    .complete_tracing_success(tracing_ctx, outcome.method, outcome.success);
                Ok(MessageResponse::new(outcome.success))
            }
            Err(e) => {
                let msg = format!("{}: {e:?}", outcome.failure);
                self.tracer
                    .complete_tracing_error(tracing_ctx, outcome.method, &msg);
                Err(ServiceError::repo(outcome.failure, e))
            }
        }
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<CreatedResponse, ServiceError> {
        info!("🏗️ Creating product {:?}", req.name_label());

        let tracing_ctx = self.tracer.start_tracing(
            "create_product",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("operation", "create"),
                KeyValue::new("product.name", req.name_label()),
            ],
        );

        match self.command.create_product(req).await {
            Ok(id) => {
                self.tracer.complete_tracing_success(
                    &tracing_ctx,
                    Method::Post,
                    "Product created successfully",
                );
                Ok(CreatedResponse {
                    id,
                    message: PRODUCT_CREATED.to_string(),
                })
            }
            Err(e) => {
                let msg = format!("Failed to create product: {e:?}");
                self.tracer
                    .complete_tracing_error(&tracing_ctx, Method::Post, &msg);
                Err(ServiceError::repo(ERROR_CREATING_PRODUCT, e))
            }
        }
    }

    async fn update_product(
        &self,
        id: i64,
        req: &UpdateProductRequest,
    ) -> Result<MessageResponse, ServiceError> {
        info!("✏️ Updating product ID {id}");

        let tracing_ctx = self.tracer.start_tracing(
            "update_product",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("operation", "update"),
                KeyValue::new("product.id", id),
            ],
        );

        let result = self.command.update_product(id, req).await;

        self.finish_mutation(
            &tracing_ctx,
            MutationOutcome {
                method: Method::Put,
                success: PRODUCT_UPDATED,
                not_found: PRODUCT_NOT_FOUND_OR_DELETED,
                failure: ERROR_UPDATING_PRODUCT,
            },
            result,
        )
    }

    async fn trash_product(&self, id: i64) -> Result<MessageResponse, ServiceError> {
        info!("🗑️ Soft deleting product ID {id}");

        let tracing_ctx = self.tracer.start_tracing(
            "trash_product",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("operation", "trash"),
                KeyValue::new("product.id", id),
            ],
        );

        let result = self.command.trash_product(id).await;

        self.finish_mutation(
            &tracing_ctx,
            MutationOutcome {
                method: Method::Delete,
                success: PRODUCT_SOFT_DELETED,
                not_found: PRODUCT_NOT_FOUND,
                failure: ERROR_DELETING_PRODUCT,
            },
            result,
        )
    }

    async fn restore_product(&self, id: i64) -> Result<MessageResponse, ServiceError> {
        info!("♻️ Restoring product ID {id}");

        let tracing_ctx = self.tracer.start_tracing(
            "restore_product",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("operation", "restore"),
                KeyValue::new("product.id", id),
            ],
        );

        let result = self.command.restore_product(id).await;

        self.finish_mutation(
            &tracing_ctx,
            MutationOutcome {
                method: Method::Patch,
                success: PRODUCT_RESTORED,
                not_found: PRODUCT_NOT_FOUND_OR_NOT_DELETED,
                failure: ERROR_RESTORING_PRODUCT,
            },
            result,
        )
    }
}
