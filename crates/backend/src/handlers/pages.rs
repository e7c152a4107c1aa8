use axum::response::Html;

/// GET /
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../templates/index.html"))
}

/// GET /report
pub async fn report() -> Html<&'static str> {
    Html(include_str!("../../templates/report.html"))
}
