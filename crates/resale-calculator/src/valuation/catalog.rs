use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::domain::{Category, Condition, ValuationError};

/// Age-based depreciation parameters for one category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepreciationCurve {
    /// Fraction of the original price lost per year of age.
    pub base_rate: f64,
    /// Upper bound on the fraction lost to age alone.
    pub cap: f64,
}

impl DepreciationCurve {
    pub const fn new(base_rate: f64, cap: f64) -> Self {
        Self { base_rate, cap }
    }

    /// Cumulative fraction lost after `age` years, saturating at the cap.
    pub fn depreciation_at(&self, age: u64) -> f64 {
        (self.base_rate * age as f64).min(self.cap)
    }
}

/// Immutable reference data: valid categories and conditions with their parameters.
///
/// Listing order is the order entries were supplied in. Construction validates every
/// parameter so a built catalog can never yield a resale price outside
/// `[0, original_price]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    categories: Vec<(Category, DepreciationCurve)>,
    conditions: Vec<(Condition, f64)>,
}

impl Catalog {
    pub fn new(
        categories: Vec<(Category, DepreciationCurve)>,
        conditions: Vec<(Condition, f64)>,
    ) -> Result<Self, CatalogError> {
        if categories.is_empty() {
            return Err(CatalogError::EmptyCategories);
        }
        if conditions.is_empty() {
            return Err(CatalogError::EmptyConditions);
        }

        for (index, (category, curve)) in categories.iter().enumerate() {
            if categories[..index].iter().any(|(seen, _)| seen == category) {
                return Err(CatalogError::DuplicateCategory(*category));
            }
            if !is_unit_fraction(curve.base_rate) {
                return Err(CatalogError::InvalidBaseRate {
                    category: *category,
                    value: curve.base_rate,
                });
            }
            if !is_unit_fraction(curve.cap) {
                return Err(CatalogError::InvalidCap {
                    category: *category,
                    value: curve.cap,
                });
            }
        }

        for (index, (condition, multiplier)) in conditions.iter().enumerate() {
            if conditions[..index].iter().any(|(seen, _)| seen == condition) {
                return Err(CatalogError::DuplicateCondition(*condition));
            }
            if !(multiplier.is_finite() && *multiplier > 0.0 && *multiplier <= 1.0) {
                return Err(CatalogError::InvalidMultiplier {
                    condition: *condition,
                    value: *multiplier,
                });
            }
        }

        let mut by_quality = conditions.clone();
        by_quality.sort_by_key(|(condition, _)| condition.rank());
        for pair in by_quality.windows(2) {
            let (better, better_multiplier) = pair[0];
            let (worse, worse_multiplier) = pair[1];
            if worse_multiplier > better_multiplier {
                return Err(CatalogError::MultiplierOrdering { better, worse });
            }
        }

        Ok(Self {
            categories,
            conditions,
        })
    }

    /// Built-in parameter tables used when no catalog file is configured.
    pub fn standard() -> Self {
        let categories = vec![
            (Category::Electronics, DepreciationCurve::new(0.15, 0.80)),
            (Category::Cycles, DepreciationCurve::new(0.10, 0.75)),
            (Category::Appliances, DepreciationCurve::new(0.08, 0.70)),
            (Category::Furniture, DepreciationCurve::new(0.12, 0.80)),
            (Category::Vehicles, DepreciationCurve::new(0.10, 0.85)),
        ];
        let conditions = vec![
            (Condition::New, 1.0),
            (Condition::Good, 0.9),
            (Condition::Decent, 0.75),
            (Condition::Average, 0.6),
            (Condition::Poor, 0.4),
        ];

        Self {
            categories,
            conditions,
        }
    }

    pub fn from_definition(definition: CatalogDefinition) -> Result<Self, CatalogError> {
        let categories = definition
            .categories
            .into_iter()
            .map(|entry| {
                (
                    entry.category,
                    DepreciationCurve::new(entry.base_rate, entry.cap),
                )
            })
            .collect();
        let conditions = definition
            .conditions
            .into_iter()
            .map(|entry| (entry.condition, entry.multiplier))
            .collect();

        Self::new(categories, conditions)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let definition: CatalogDefinition = serde_json::from_str(raw)?;
        Self::from_definition(definition)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn list_categories(&self) -> Vec<Category> {
        self.categories.iter().map(|(category, _)| *category).collect()
    }

    pub fn list_conditions(&self) -> Vec<Condition> {
        self.conditions
            .iter()
            .map(|(condition, _)| *condition)
            .collect()
    }

    pub fn parameters_for(&self, category: Category) -> Result<DepreciationCurve, ValuationError> {
        self.categories
            .iter()
            .find(|(candidate, _)| *candidate == category)
            .map(|(_, curve)| *curve)
            .ok_or_else(|| ValuationError::UnknownCategory(category.label().to_string()))
    }

    pub fn multiplier_for(&self, condition: Condition) -> Result<f64, ValuationError> {
        self.conditions
            .iter()
            .find(|(candidate, _)| *candidate == condition)
            .map(|(_, multiplier)| *multiplier)
            .ok_or_else(|| ValuationError::UnknownCondition(condition.label().to_string()))
    }

    pub fn definition(&self) -> CatalogDefinition {
        CatalogDefinition {
            categories: self
                .categories
                .iter()
                .map(|(category, curve)| CategoryEntry {
                    category: *category,
                    base_rate: curve.base_rate,
                    cap: curve.cap,
                })
                .collect(),
            conditions: self
                .conditions
                .iter()
                .map(|(condition, multiplier)| ConditionEntry {
                    condition: *condition,
                    multiplier: *multiplier,
                })
                .collect(),
        }
    }
}

fn is_unit_fraction(value: f64) -> bool {
    value.is_finite() && (0.0..1.0).contains(&value)
}

/// Serialized form of a catalog, as read from a configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogDefinition {
    pub categories: Vec<CategoryEntry>,
    pub conditions: Vec<ConditionEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CategoryEntry {
    pub category: Category,
    pub base_rate: f64,
    pub cap: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConditionEntry {
    pub condition: Condition,
    pub multiplier: f64,
}

/// Catalog misconfiguration. Always fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog defines no categories")]
    EmptyCategories,
    #[error("catalog defines no conditions")]
    EmptyConditions,
    #[error("category {0} is listed more than once")]
    DuplicateCategory(Category),
    #[error("condition {0} is listed more than once")]
    DuplicateCondition(Condition),
    #[error("base rate for {category} must lie in [0, 1), found {value}")]
    InvalidBaseRate { category: Category, value: f64 },
    #[error("depreciation cap for {category} must lie in [0, 1), found {value}")]
    InvalidCap { category: Category, value: f64 },
    #[error("multiplier for {condition} must lie in (0, 1], found {value}")]
    InvalidMultiplier { condition: Condition, value: f64 },
    #[error("condition {worse} has a higher multiplier than {better}")]
    MultiplierOrdering { better: Condition, worse: Condition },
    #[error("failed to read catalog from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed catalog definition: {0}")]
    Parse(#[from] serde_json::Error),
}
