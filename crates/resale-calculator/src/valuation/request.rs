use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Caller-supplied valuation inputs, exactly as received and not yet validated.
///
/// Decoding never fails on field content. A field that is missing, null or of the wrong
/// shape decodes to `None` and is reported by the engine with the matching validation
/// error, so the first-failure ordering of validation is preserved for HTTP callers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValuationRequest {
    #[serde(default, deserialize_with = "lenient_number")]
    pub original_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_integer")]
    pub age: Option<i64>,
    #[serde(default, deserialize_with = "lenient_label")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient_label")]
    pub condition: Option<String>,
}

impl ValuationRequest {
    pub fn new(
        original_price: f64,
        age: i64,
        category: impl Into<String>,
        condition: impl Into<String>,
    ) -> Self {
        Self {
            original_price: Some(original_price),
            age: Some(age),
            category: Some(category.into()),
            condition: Some(condition.into()),
        }
    }
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(number_from(&value))
}

fn lenient_integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(integer_from(&value))
}

fn lenient_label<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(label) => Some(label),
        _ => None,
    })
}

fn number_from(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(raw) => raw.trim().parse::<f64>().ok(),
        _ => None,
    }
}

fn integer_from(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => {
            if let Some(integer) = number.as_i64() {
                Some(integer)
            } else if number.as_u64().is_some() {
                // Beyond i64 but still a non-negative whole number; the cap saturates anyway.
                Some(i64::MAX)
            } else {
                number.as_f64().and_then(whole_number)
            }
        }
        Value::String(raw) => {
            let raw = raw.trim();
            raw.parse::<i64>()
                .ok()
                .or_else(|| raw.parse::<f64>().ok().and_then(whole_number))
        }
        _ => None,
    }
}

fn whole_number(value: f64) -> Option<i64> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Some(value as i64)
    } else {
        None
    }
}
