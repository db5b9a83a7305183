use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::entity::readings;
use crate::error::{AppError, AppResult};

/// Body accepted by `POST /temperature`. Both keys must be present.
#[derive(Debug, ToSchema)]
pub struct ReadingRequest {
    /// Degrees Celsius
    pub temperature: f64,
    /// Relative humidity in percent
    pub humidity: f64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReadingResponse {
    pub temperature: f64,
    pub humidity: f64,
    /// RFC 3339 with offset
    pub timestamp: DateTime<FixedOffset>,
}

impl From<readings::Model> for ReadingResponse {
    fn from(r: readings::Model) -> Self {
        Self {
            temperature: r.temperature,
            humidity: r.humidity,
            timestamp: r.timestamp,
        }
    }
}

/// Turn a present field into the float the `readings` table stores.
///
/// Numbers pass through and numeric strings are parsed, matching what the
/// database would accept for a double column. Anything else, including
/// `NaN` and infinities, is rejected.
///
/// # Errors
///
/// Returns `AppError::UnprocessableValue` naming the field.
pub fn coerce_number(field: &'static str, value: &Value) -> AppResult<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    number
        .filter(|n| n.is_finite())
        .ok_or(AppError::UnprocessableValue(field))
}
