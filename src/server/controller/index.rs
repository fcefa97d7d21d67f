use axum::response::Html;

/// Static landing page.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Landing page", body = String, content_type = "text/html")
    ),
)]
pub async fn index() -> Html<&'static str> {
    Html("<h1>Code challenge</h1>")
}
