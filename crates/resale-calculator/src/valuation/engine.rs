use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::catalog::Catalog;
use super::domain::{Category, Condition, ValuationError};
use super::request::ValuationRequest;

/// Stateless evaluator that applies catalog parameters to a single item.
///
/// The catalog is injected at construction and only ever read, so one engine can be
/// shared across any number of concurrent callers.
#[derive(Debug, Clone)]
pub struct ValuationEngine {
    catalog: Arc<Catalog>,
}

impl ValuationEngine {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Validates raw inputs (price, age, category, condition; first failure wins) and
    /// computes the resale estimate.
    pub fn valuate(&self, request: &ValuationRequest) -> Result<ValuationResult, ValuationError> {
        let original_price = validate_price(request.original_price)?;

        let age = request
            .age
            .and_then(|age| u64::try_from(age).ok())
            .ok_or(ValuationError::InvalidAge)?;

        let category_label = request.category.as_deref().unwrap_or_default();
        let category = category_label
            .parse::<Category>()
            .map_err(|_| ValuationError::UnknownCategory(category_label.to_string()))?;
        self.catalog.parameters_for(category)?;

        let condition_label = request.condition.as_deref().unwrap_or_default();
        let condition = condition_label
            .parse::<Condition>()
            .map_err(|_| ValuationError::UnknownCondition(condition_label.to_string()))?;
        self.catalog.multiplier_for(condition)?;

        self.quote(original_price, age, category, condition)
    }

    /// Computes an estimate from already-typed inputs.
    pub fn quote(
        &self,
        original_price: f64,
        age: u64,
        category: Category,
        condition: Condition,
    ) -> Result<ValuationResult, ValuationError> {
        let original_price = validate_price(Some(original_price))?;
        let curve = self.catalog.parameters_for(category)?;
        let multiplier = self.catalog.multiplier_for(condition)?;

        let remaining = 1.0 - curve.depreciation_at(age);
        let mut resale_price = round_to_cents(original_price * remaining * multiplier);
        if resale_price > original_price {
            resale_price = ((original_price * 100.0).floor() / 100.0).min(original_price);
        }

        Ok(ValuationResult {
            resale_price,
            original_price,
            category,
            condition,
            age,
        })
    }
}

fn validate_price(price: Option<f64>) -> Result<f64, ValuationError> {
    price
        .filter(|price| price.is_finite() && *price > 0.0)
        .ok_or(ValuationError::InvalidPrice)
}

/// Largest magnitude below which every whole f64 is exactly representable (2^53).
const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

/// Rounds half-up to two decimals.
///
/// The value is first settled at a millionth of a cent so representation noise such as
/// `4950.000000000001` cannot leak into the result or tip a rounding decision. Values too
/// large to carry a cent fraction are returned unchanged.
pub fn round_to_cents(value: f64) -> f64 {
    let cents = value * 100.0;
    if !cents.is_finite() || cents.abs() >= EXACT_INTEGER_LIMIT {
        return value;
    }

    let settled = cents * 1e6;
    let cents = if settled.abs() < EXACT_INTEGER_LIMIT {
        settled.round() / 1e6
    } else {
        cents
    };
    cents.round() / 100.0
}

/// Resale estimate together with the normalized inputs that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationResult {
    pub resale_price: f64,
    pub original_price: f64,
    pub category: Category,
    pub condition: Condition,
    pub age: u64,
}
