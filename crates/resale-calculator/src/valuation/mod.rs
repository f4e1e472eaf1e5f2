//! Resale valuation: the reference catalog, the depreciation engine and its HTTP surface.
//!
//! Resale value is the original price reduced by linear, capped age depreciation and then
//! scaled by a condition multiplier:
//! `original_price * (1 - min(cap, base_rate * age)) * multiplier`, rounded to cents.

pub mod catalog;
pub mod domain;
pub mod engine;
pub mod request;
pub mod router;

#[cfg(test)]
mod tests;

pub use catalog::{
    Catalog, CatalogDefinition, CatalogError, CategoryEntry, ConditionEntry, DepreciationCurve,
};
pub use domain::{Category, Condition, UnknownLabel, ValuationError};
pub use engine::{round_to_cents, ValuationEngine, ValuationResult};
pub use request::ValuationRequest;
pub use router::valuation_router;
