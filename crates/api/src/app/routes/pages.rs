use axum::response::Html;

/// Landing page. The frontend is a single self-contained file embedded at
/// compile time, so the binary ships with no asset directory.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../../static/index.html"))
}
