pub mod graph;
pub mod temperature;
pub mod test_page;

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    services::ServeDir,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::common::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        temperature::add_temperature,
        temperature::list_temperatures,
        graph::get_temperature_graph,
        test_page::test_page,
    ),
    components(
        schemas(
            temperature::ReadingRequest,
            temperature::ReadingResponse,
            temperature::MessageResponse,
        )
    ),
    tags(
        (name = "temperature", description = "Reading ingestion, listing and chart"),
        (name = "pages", description = "Static pages"),
    ),
    info(
        title = "Garage Climate API",
        description = "Temperature and humidity ingestion API with a server-rendered chart",
        version = "0.1.0"
    )
)]
struct ApiDoc;

pub fn build_router(state: AppState) -> Router {
    let config = &state.config;

    tracing::info!(static_dir = %config.static_dir, "Serving static assets");

    let temperature_routes = Router::new()
        .route(
            "/temperature",
            get(temperature::list_temperatures).post(temperature::add_temperature),
        )
        .route("/temperature/graph", get(graph::get_temperature_graph))
        .layer(RequestBodyLimitLayer::new(1024 * 1024)); // 1MB body limit

    let page_routes = Router::new()
        .route("/test", get(test_page::test_page))
        .nest_service("/static", ServeDir::new(&config.static_dir));

    // OpenAPI documentation
    let docs_routes = Router::new().merge(Scalar::with_url("/docs", ApiDoc::openapi()));

    // Combine all routes
    Router::new()
        .merge(temperature_routes)
        .merge(page_routes)
        .merge(docs_routes)
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
