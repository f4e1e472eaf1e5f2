use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Class of goods sharing one depreciation curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Cycles,
    Appliances,
    Furniture,
    Vehicles,
}

impl Category {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Electronics,
            Self::Cycles,
            Self::Appliances,
            Self::Furniture,
            Self::Vehicles,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Electronics => "Electronics",
            Self::Cycles => "Cycles",
            Self::Appliances => "Appliances",
            Self::Furniture => "Furniture",
            Self::Vehicles => "Vehicles",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = UnknownLabel;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ordered()
            .into_iter()
            .find(|category| category.label() == raw)
            .ok_or_else(|| UnknownLabel(raw.to_string()))
    }
}

/// Physical state of an item, declared from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    New,
    Good,
    Decent,
    Average,
    Poor,
}

impl Condition {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::New,
            Self::Good,
            Self::Decent,
            Self::Average,
            Self::Poor,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Good => "good",
            Self::Decent => "decent",
            Self::Average => "average",
            Self::Poor => "poor",
        }
    }

    /// Position in the quality ordering; 0 is the best condition.
    pub const fn rank(self) -> usize {
        match self {
            Self::New => 0,
            Self::Good => 1,
            Self::Decent => 2,
            Self::Average => 3,
            Self::Poor => 4,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Condition {
    type Err = UnknownLabel;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ordered()
            .into_iter()
            .find(|condition| condition.label() == raw)
            .ok_or_else(|| UnknownLabel(raw.to_string()))
    }
}

/// Label that names no known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized label '{0}'")]
pub struct UnknownLabel(pub String);

/// Per-request validation failures. None of these are retryable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValuationError {
    #[error("original_price must be a finite number greater than zero")]
    InvalidPrice,
    #[error("age must be a whole number of years, zero or greater")]
    InvalidAge,
    #[error("category '{0}' is not in the catalog")]
    UnknownCategory(String),
    #[error("condition '{0}' is not in the catalog")]
    UnknownCondition(String),
}

impl ValuationError {
    pub const fn code(&self) -> &'static str {
        match self {
            ValuationError::InvalidPrice => "InvalidPrice",
            ValuationError::InvalidAge => "InvalidAge",
            ValuationError::UnknownCategory(_) => "UnknownCategory",
            ValuationError::UnknownCondition(_) => "UnknownCondition",
        }
    }

    /// Request field the failure refers to.
    pub const fn field(&self) -> &'static str {
        match self {
            ValuationError::InvalidPrice => "original_price",
            ValuationError::InvalidAge => "age",
            ValuationError::UnknownCategory(_) => "category",
            ValuationError::UnknownCondition(_) => "condition",
        }
    }
}
