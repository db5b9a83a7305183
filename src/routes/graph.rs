use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
};
use askama::Template;

use crate::chart::LineChart;
use crate::common::AppState;
use crate::error::{AppError, AppResult};
use crate::pages::GraphPage;

pub const NO_DATA_MESSAGE: &str = "No temperature data available to display.";

/// Chart of all readings
///
/// Renders an HTML page with the latest reading in the heading and a
/// temperature/humidity line chart. Returns a plain-text notice when no
/// readings exist.
#[utoipa::path(
    get,
    path = "/temperature/graph",
    responses(
        (status = 200, description = "HTML chart page, or a plain-text notice when there is no data", body = String, content_type = "text/html"),
    ),
    tag = "temperature"
)]
pub async fn get_temperature_graph(State(state): State<AppState>) -> AppResult<Response> {
    let readings_list = state.store.list_all_ordered_by_timestamp().await?;

    let Some(latest) = readings_list.last() else {
        tracing::debug!("No readings to chart");
        return Ok(NO_DATA_MESSAGE.into_response());
    };

    let figure_json = LineChart::from_readings(&readings_list)
        .to_script_json()
        .map_err(|e| AppError::Internal(format!("Chart serialization failed: {e}")))?;

    let page = GraphPage::new(latest.temperature, latest.humidity, &figure_json).render()?;

    tracing::debug!(points = readings_list.len(), %latest, "Rendered graph");

    Ok(Html(page).into_response())
}
