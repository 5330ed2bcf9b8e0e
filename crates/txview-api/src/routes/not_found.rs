//! Shared not-found page, used for unknown transactions and unknown routes

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use txview_core::NotFoundView;

/// Render the not-found view tree
pub fn render_not_found(view: &NotFoundView) -> String {
    format!(
        r#"<div class='text-center py-16'>
            <h2 class='text-2xl font-bold text-gray-700 mb-2'>{}</h2>
            <p class='text-gray-500 mb-6'>{}</p>
            <a href='/transactions' class='px-4 py-2 bg-indigo-600 text-white rounded-lg hover:bg-indigo-700'>Transactions</a>
        </div>"#,
        view.title, view.message
    )
}

/// Router fallback
pub async fn fallback(uri: axum::http::Uri, headers: axum::http::HeaderMap) -> Response {
    log::debug!("No route for {}", uri.path());
    let view = NotFoundView::default();
    let content = render_not_found(&view);
    (
        StatusCode::NOT_FOUND,
        Html(crate::page_response(&headers, view.title, uri.path(), &content)),
    )
        .into_response()
}
