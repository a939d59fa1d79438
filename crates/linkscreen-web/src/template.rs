use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../../templates/index.html");

/// The operator page, embedded at compile time.
pub fn render_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
