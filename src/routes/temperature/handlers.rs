use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value;

use crate::common::AppState;
use crate::error::{AppError, AppResult};
use crate::services::NewReading;

use super::types::{coerce_number, MessageResponse, ReadingRequest, ReadingResponse};

/// Store one reading
///
/// Only the presence of `temperature` and `humidity` is checked; a body that
/// is not a JSON object has neither. The timestamp is assigned by the database.
#[utoipa::path(
    post,
    path = "/temperature",
    request_body = ReadingRequest,
    responses(
        (status = 201, description = "Reading stored", body = MessageResponse),
        (status = 400, description = "temperature or humidity missing"),
        (status = 422, description = "A field holds a value that is not a number"),
    ),
    tag = "temperature"
)]
pub async fn add_temperature(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let (Some(temperature), Some(humidity)) = (body.get("temperature"), body.get("humidity"))
    else {
        tracing::debug!(
            keys = ?body.as_object().map(|o| o.keys().collect::<Vec<_>>()),
            "Rejected reading with missing field"
        );
        return Err(AppError::InvalidInput);
    };

    let reading = NewReading::new(
        coerce_number("temperature", temperature)?,
        coerce_number("humidity", humidity)?,
    );
    let (temperature, humidity) = (reading.temperature, reading.humidity);

    let id = state.store.insert(reading).await?;
    tracing::info!(id, temperature, humidity, "Reading stored");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Temperature added".to_string(),
        }),
    ))
}

/// List all readings
///
/// Order is whatever the database returns and may change between calls.
#[utoipa::path(
    get,
    path = "/temperature",
    responses(
        (status = 200, description = "Readings retrieved successfully", body = Vec<ReadingResponse>),
    ),
    tag = "temperature"
)]
pub async fn list_temperatures(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ReadingResponse>>> {
    let readings_list = state.store.list_all().await?;

    let response: Vec<ReadingResponse> = readings_list
        .into_iter()
        .map(ReadingResponse::from)
        .collect();

    Ok(Json(response))
}
