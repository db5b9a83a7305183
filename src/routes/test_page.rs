use axum::response::Html;
use askama::Template;

use crate::error::AppResult;
use crate::pages::TestPage;

/// Static smoke-test page
#[utoipa::path(
    get,
    path = "/test",
    responses(
        (status = 200, description = "Fixed HTML page", body = String, content_type = "text/html"),
    ),
    tag = "pages"
)]
pub async fn test_page() -> AppResult<Html<String>> {
    Ok(Html(TestPage.render()?))
}
