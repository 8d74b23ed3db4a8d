#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use rust_decimal::Decimal;
use product::{
    abstract_trait::product::repository::{
        DynProductCommandRepository, DynProductQueryRepository, ProductCommandRepositoryTrait,
        ProductQueryRepositoryTrait,
    },
    di::DependenciesInjectDeps,
    domain::requests::product::{CreateProductRequest, UpdateProductRequest},
    handler::AppRouter,
    model::product::Product as ProductModel,
    state::AppState,
};
use serde_json::Value;
use shared::errors::RepositoryError;
use std::{collections::BTreeMap, str::FromStr, sync::Arc};
use tokio::sync::RwLock;
use tower::ServiceExt;

fn is_visible(product: &ProductModel) -> bool {
    matches!(product.deleted, None | Some(0))
}

fn rejected(kind: &str, value: &Value, column: &str) -> RepositoryError {
    let shown = match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    };
    RepositoryError::Custom(format!(
        "Incorrect {kind} value: '{shown}' for column '{column}' at row 1"
    ))
}

fn text(field: &Option<Value>) -> Option<String> {
    match field {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text.clone()),
        Some(Value::Bool(flag)) => Some(u8::from(*flag).to_string()),
        Some(other) => Some(other.to_string()),
    }
}

/// `DECIMAL(12,2)` coercion under strict mode.
fn decimal(field: &Option<Value>, column: &str) -> Result<Option<Decimal>, RepositoryError> {
    let parsed = match field {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Bool(flag)) => Some(Decimal::from(u8::from(*flag))),
        Some(Value::Number(number)) => {
            let literal = number.to_string();
            Decimal::from_str(&literal)
                .or_else(|_| Decimal::from_scientific(&literal))
                .ok()
        }
        Some(Value::String(text)) => Decimal::from_str(text.trim()).ok(),
        Some(_) => None,
    };

    match (parsed, field) {
        (Some(value), _) => Ok(Some(value.round_dp(2))),
        (None, Some(value)) => Err(rejected("decimal", value, column)),
        (None, None) => Ok(None),
    }
}

/// Integer column coercion under strict mode; fractions round half away
/// from zero.
fn integer(field: &Option<Value>, column: &str) -> Result<Option<i64>, RepositoryError> {
    let parsed = match field {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Bool(flag)) => Some(i64::from(*flag)),
        Some(Value::Number(number)) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|f| f.round() as i64)),
        Some(Value::String(text)) => {
            let text = text.trim();
            text.parse::<i64>()
                .ok()
                .or_else(|| text.parse::<f64>().ok().map(|f| f.round() as i64))
        }
        Some(_) => None,
    };

    match (parsed, field) {
        (Some(value), _) => Ok(Some(value)),
        (None, Some(value)) => Err(rejected("integer", value, column)),
        (None, None) => Ok(None),
    }
}

struct Columns {
    name: Option<String>,
    price: Option<Decimal>,
    discount: Option<Decimal>,
    review_count: Option<i64>,
    image_url: Option<String>,
}

impl Columns {
    fn coerce(req: &CreateProductRequest) -> Result<Self, RepositoryError> {
        Ok(Self {
            name: text(&req.name),
            price: decimal(&req.price, "price")?,
            discount: decimal(&req.discount, "discount")?,
            review_count: integer(&req.review_count, "review_count")?,
            image_url: text(&req.image_url),
        })
    }
}

#[derive(Default)]
struct Table {
    rows: BTreeMap<i64, ProductModel>,
    next_id: i64,
}

/// Keeps rows in memory and follows the same predicates as the SQL
/// statements, including the affected-row counts MySQL reports and the
/// strict-mode coercion of loosely typed body values. Search is a plain
/// substring match; LIKE wildcards are covered by the live MySQL tests.
#[derive(Clone, Default)]
pub struct InMemoryProductRepository {
    table: Arc<RwLock<Table>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn seed(&self, name: &str, deleted: Option<i64>) -> i64 {
        let mut table = self.table.write().await;
        table.next_id += 1;
        let id = table.next_id;
        table.rows.insert(
            id,
            ProductModel {
                id,
                name: Some(name.to_string()),
                price: Some(Decimal::new(10, 0)),
                discount: Some(Decimal::ZERO),
                review_count: Some(0),
                image_url: Some(format!("https://cdn.example.com/{id}.png")),
                deleted,
            },
        );
        id
    }

    pub async fn row(&self, id: i64) -> Option<ProductModel> {
        self.table.read().await.rows.get(&id).cloned()
    }

    pub fn deps(&self) -> DependenciesInjectDeps {
        DependenciesInjectDeps {
            query: Arc::new(self.clone()) as DynProductQueryRepository,
            command: Arc::new(self.clone()) as DynProductCommandRepository,
        }
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for InMemoryProductRepository {
    async fn find_active(&self) -> Result<Vec<ProductModel>, RepositoryError> {
        let table = self.table.read().await;
        Ok(table.rows.values().filter(|p| is_visible(p)).cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ProductModel>, RepositoryError> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).filter(|p| is_visible(p)).cloned())
    }

    async fn search_by_name(&self, keyword: &str) -> Result<Vec<ProductModel>, RepositoryError> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .filter(|p| is_visible(p))
            .filter(|p| p.name.as_deref().is_some_and(|name| name.contains(keyword)))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for InMemoryProductRepository {
    async fn create_product(&self, req: &CreateProductRequest) -> Result<i64, RepositoryError> {
        let columns = Columns::coerce(req)?;

        let mut table = self.table.write().await;
        table.next_id += 1;
        let id = table.next_id;
        table.rows.insert(
            id,
            ProductModel {
                id,
                name: columns.name,
                price: columns.price,
                discount: columns.discount,
                review_count: columns.review_count,
                image_url: columns.image_url,
                deleted: Some(0),
            },
        );
        Ok(id)
    }

    async fn update_product(
        &self,
        id: i64,
        req: &UpdateProductRequest,
    ) -> Result<u64, RepositoryError> {
        let mut table = self.table.write().await;
        match table.rows.get_mut(&id).filter(|p| is_visible(p)) {
            Some(row) => {
                let columns = Columns::coerce(req)?;
                row.name = columns.name;
                row.price = columns.price;
                row.discount = columns.discount;
                row.review_count = columns.review_count;
                row.image_url = columns.image_url;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn trash_product(&self, id: i64) -> Result<u64, RepositoryError> {
        let mut table = self.table.write().await;
        match table.rows.get_mut(&id) {
            Some(row) => {
                row.deleted = Some(1);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn restore_product(&self, id: i64) -> Result<u64, RepositoryError> {
        let mut table = self.table.write().await;
        match table.rows.get_mut(&id).filter(|p| p.deleted != Some(0)) {
            Some(row) => {
                row.deleted = Some(0);
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

/// Every call fails the way a lost connection would.
#[derive(Clone, Default)]
pub struct FailingRepository;

fn unavailable() -> RepositoryError {
    RepositoryError::Custom("connect ECONNREFUSED 127.0.0.1:3306".into())
}

#[async_trait]
impl ProductQueryRepositoryTrait for FailingRepository {
    async fn find_active(&self) -> Result<Vec<ProductModel>, RepositoryError> {
        Err(unavailable())
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<ProductModel>, RepositoryError> {
        Err(unavailable())
    }

    async fn search_by_name(&self, _keyword: &str) -> Result<Vec<ProductModel>, RepositoryError> {
        Err(unavailable())
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for FailingRepository {
    async fn create_product(&self, _req: &CreateProductRequest) -> Result<i64, RepositoryError> {
        Err(unavailable())
    }

    async fn update_product(
        &self,
        _id: i64,
        _req: &UpdateProductRequest,
    ) -> Result<u64, RepositoryError> {
        Err(unavailable())
    }

    async fn trash_product(&self, _id: i64) -> Result<u64, RepositoryError> {
        Err(unavailable())
    }

    async fn restore_product(&self, _id: i64) -> Result<u64, RepositoryError> {
        Err(unavailable())
    }
}

pub fn app_with(deps: DependenciesInjectDeps) -> Router {
    AppRouter::build(AppState::new(deps))
}

pub fn failing_app() -> Router {
    app_with(DependenciesInjectDeps {
        query: Arc::new(FailingRepository) as DynProductQueryRepository,
        command: Arc::new(FailingRepository) as DynProductCommandRepository,
    })
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    match body {
        Some(json) => {
            let raw = serde_json::to_string(&json).unwrap();
            send_raw(app, method, uri, Some("application/json"), &raw).await
        }
        None => send_raw(app, method, uri, None, "").await,
    }
}

pub async fn send_raw(
    app: &Router,
    method: &str,
    uri: &str,
    content_type: Option<&str>,
    body: &str,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }
    let request = builder.body(Body::from(body.to_owned())).unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };

    (status, json)
}
