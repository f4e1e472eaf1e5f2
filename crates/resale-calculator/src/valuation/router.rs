use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use tracing::debug;

use super::domain::{Category, Condition};
use super::engine::{ValuationEngine, ValuationResult};
use super::request::ValuationRequest;
use crate::error::AppError;

/// Router builder exposing the catalog listings and the valuation endpoint.
pub fn valuation_router(engine: Arc<ValuationEngine>) -> Router {
    Router::new()
        .route("/api/categories", get(categories_handler))
        .route("/api/conditions", get(conditions_handler))
        .route("/api/calculate", post(calculate_handler))
        .with_state(engine)
}

pub(crate) async fn categories_handler(
    State(engine): State<Arc<ValuationEngine>>,
) -> Json<Vec<Category>> {
    Json(engine.catalog().list_categories())
}

pub(crate) async fn conditions_handler(
    State(engine): State<Arc<ValuationEngine>>,
) -> Json<Vec<Condition>> {
    Json(engine.catalog().list_conditions())
}

pub(crate) async fn calculate_handler(
    State(engine): State<Arc<ValuationEngine>>,
    Json(request): Json<ValuationRequest>,
) -> Result<Json<ValuationResult>, AppError> {
    let result = engine.valuate(&request).map_err(|error| {
        debug!(code = error.code(), field = error.field(), "valuation rejected");
        error
    })?;
    Ok(Json(result))
}
