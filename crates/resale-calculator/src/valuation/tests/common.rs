use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use serde_json::Value;

use crate::valuation::{
    valuation_router, Catalog, Category, Condition, DepreciationCurve, ValuationEngine,
};

pub(super) fn standard_engine() -> ValuationEngine {
    ValuationEngine::new(Arc::new(Catalog::standard()))
}

/// Two categories and three conditions, deliberately listed out of declaration order.
pub(super) fn narrow_catalog() -> Catalog {
    Catalog::new(
        vec![
            (Category::Vehicles, DepreciationCurve::new(0.2, 0.5)),
            (Category::Electronics, DepreciationCurve::new(0.15, 0.8)),
        ],
        vec![
            (Condition::Poor, 0.5),
            (Condition::New, 1.0),
            (Condition::Good, 0.9),
        ],
    )
    .expect("narrow catalog is valid")
}

pub(super) fn narrow_engine() -> ValuationEngine {
    ValuationEngine::new(Arc::new(narrow_catalog()))
}

pub(super) fn router() -> axum::Router {
    valuation_router(Arc::new(standard_engine()))
}

pub(super) fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).expect("serializes")))
        .expect("request builds")
}

pub(super) fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).expect("request builds")
}

pub(super) async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("json body")
}

pub(super) async fn assert_rejected(response: Response, code: &str) {
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["code"], code);
    assert!(body["error"].as_str().is_some_and(|message| !message.is_empty()));
}
