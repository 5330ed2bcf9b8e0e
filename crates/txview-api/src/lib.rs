//! HTTP server with HTMX support
//!
//! Routes are organized into modules:
//! - routes::transactions: transaction list and receipt pages, JSON API
//! - routes::not_found: shared fallback page

pub mod error;
pub mod routes;

use axum::{
    response::{Json, Redirect},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use txview_config::Config;
use txview_core::{SourceRef, User};
use txview_utils::escape_html;

pub use error::ApiError;

/// Application state
#[derive(Clone)]
pub struct AppState {
    /// Current user snapshot; handlers only read it
    pub user: Arc<RwLock<User>>,
    pub source: SourceRef,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config, source: SourceRef, user: User) -> Self {
        Self {
            user: Arc::new(RwLock::new(user)),
            source,
            config,
        }
    }
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    use routes::not_found::fallback;
    use routes::transactions::{
        api_transaction_detail, api_transactions, page_transaction_detail, page_transactions,
    };

    let api: Router<AppState> = Router::new()
        .route("/api/health", get(health_check))
        .route("/api/transactions", get(api_transactions))
        .route("/api/transactions/:id", get(api_transaction_detail))
        .route("/api/reload", post(api_reload))
        .layer(CorsLayer::permissive());

    Router::new()
        .merge(api)
        // HTMX page routes
        .route("/", get(index_page))
        .route("/transactions", get(page_transactions))
        .route("/transactions/:id", get(page_transaction_detail))
        .fallback(fallback)
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

async fn index_page() -> Redirect {
    Redirect::to("/transactions")
}

/// Reload the user snapshot from its source.
///
/// The snapshot is loaded before the write lock is taken; a failed load
/// leaves the current snapshot in place.
async fn api_reload(state: axum::extract::State<AppState>) -> Result<Json<serde_json::Value>, ApiError> {
    let user = state.source.load().await.map_err(|e| {
        e.log("reload");
        ApiError::from(e)
    })?;
    let count = user.transaction_count();

    *state.user.write().await = user;
    log::info!("Reloaded {} transactions from {}", count, state.source.describe());

    Ok(Json(serde_json::json!({ "success": true, "transactions": count })))
}

// ==================== Template Functions ====================

/// Base HTML template
pub fn base_html(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{} - txview</title>
    <script src="https://unpkg.com/htmx.org@1.9.10"></script>
    <script src="https://cdn.tailwindcss.com"></script>
</head>
<body class="bg-gray-50 text-gray-900">
    {}
</body>
</html>"#,
        escape_html(title),
        content
    )
}

/// Navigation sidebar
pub fn nav_sidebar(current_path: &str) -> String {
    let links = [("/transactions", "Transactions")];

    let mut nav = String::from("<div class='bg-white border-r h-screen flex flex-col'><div class='p-4 border-b'><h1 class='text-xl font-bold text-indigo-600'>txview</h1></div><ul class='flex-1 py-2 space-y-1 px-2'>");

    for (path, label) in &links {
        let active_class = if current_path.starts_with(path) {
            "bg-indigo-50 text-indigo-600"
        } else {
            "text-gray-600 hover:bg-gray-50"
        };
        nav.push_str(&format!(
            r#"<li><a href='{}' class='flex items-center gap-2 px-3 py-2 rounded-lg {}'><span>{}</span></a></li>"#,
            path, active_class, label
        ));
    }
    nav.push_str("</ul></div>");
    nav
}

/// Greeting line above the list, empty for anonymous snapshots
pub fn greeting(username: Option<&str>) -> String {
    match username {
        Some(name) if !name.trim().is_empty() => format!(
            "<p class='text-sm text-gray-500 mb-2'>Signed in as {}</p>",
            escape_html(name)
        ),
        _ => String::new(),
    }
}

/// Check if request is from HTMX (partial page update)
fn is_htmx_request(headers: &axum::http::HeaderMap) -> bool {
    headers.get("hx-request").is_some()
}

/// Wrap content for full page or HTMX partial
pub fn page_response(headers: &axum::http::HeaderMap, title: &str, current_path: &str, inner_content: &str) -> String {
    if is_htmx_request(headers) {
        format!(r#"<main class='flex-1 overflow-auto bg-gray-50 p-6'>{}</main>"#, inner_content)
    } else {
        base_html(title, &format!(r#"<div class='flex flex-col h-screen'>
    <div class='flex flex-1 overflow-hidden'>
        <aside class='w-64 flex-shrink-0'>{}</aside>
        <main class='flex-1 overflow-auto bg-gray-50 p-6'>{}</main>
    </div>
</div>"#,
            nav_sidebar(current_path), inner_content))
    }
}

/// Start the HTTP server
///
/// Binds to the configured address and serves until Ctrl-C.
pub async fn start_server(state: AppState) -> std::io::Result<()> {
    let addr = state.config.bind_addr();
    let router = create_router(state);

    let listener = TcpListener::bind(&addr).await?;
    log::info!("Starting txview server on http://{}", addr);
    log::info!("Available routes: /transactions, /transactions/:id, /api/*");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    log::info!("Server stopped gracefully");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;
    use txview_core::{InMemorySource, JsonFileSource};

    fn example_user() -> User {
        serde_json::from_str(
            r#"{"username": "dana", "transactions": [
                {"id": "1", "date": "2021-01-01", "amount": 10, "account_type": "checking", "memo": "coffee",
                 "category": "Dues", "account": "Chequing", "info_source": "PayPal IPN", "reference_number": "TX-1"},
                {"id": 2, "date": "2021-01-02", "amount": 20, "account_type": "savings", "memo": "<script>x</script>"}
            ]}"#,
        )
        .unwrap()
    }

    fn state_with(user: User) -> AppState {
        let source: SourceRef = Arc::new(InMemorySource::new(user.clone()));
        AppState::new(Config::default(), source, user)
    }

    async fn fetch(state: AppState, uri: &str, htmx: bool) -> (StatusCode, String) {
        let mut request = Request::builder().uri(uri);
        if htmx {
            request = request.header("HX-Request", "true");
        }
        let response = create_router(state)
            .oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_list_page_newest_first() {
        let (status, body) = fetch(state_with(example_user()), "/transactions", false).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.starts_with("<!DOCTYPE html>"));
        let second = body.find("href='/transactions/2'").unwrap();
        let first = body.find("href='/transactions/1'").unwrap();
        assert!(second < first);
        assert!(body.contains("Signed in as dana"));
        assert!(body.contains("&lt;script&gt;x&lt;/script&gt;"));
    }

    #[tokio::test]
    async fn test_empty_list_page() {
        let (status, body) = fetch(state_with(User::default()), "/transactions", false).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<p>None</p>"));
    }

    #[tokio::test]
    async fn test_detail_page_found() {
        let (status, body) = fetch(state_with(example_user()), "/transactions/1", false).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Transaction Receipt"));
        for value in ["2021-01-01", "$10", "Dues", "Chequing", "PayPal IPN", "TX-1", "coffee"] {
            assert!(body.contains(value), "missing {}", value);
        }
    }

    #[tokio::test]
    async fn test_detail_page_numeric_id() {
        let (status, body) = fetch(state_with(example_user()), "/transactions/2", false).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("$20"));
    }

    #[tokio::test]
    async fn test_detail_page_not_found() {
        let (status, body) = fetch(state_with(example_user()), "/transactions/99", false).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Not Found"));
        assert!(!body.contains("Transaction Receipt"));
    }

    #[tokio::test]
    async fn test_detail_page_invalid_utf8_id() {
        let (status, body) = fetch(state_with(example_user()), "/transactions/%FF", false).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("The page you requested could not be found."));
        assert!(!body.contains("Transaction Receipt"));

        let (status, body) = fetch(state_with(example_user()), "/api/transactions/%FF", false).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_unknown_route_uses_same_fallback() {
        let (status, body) = fetch(state_with(example_user()), "/nowhere", false).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("The page you requested could not be found."));
    }

    #[tokio::test]
    async fn test_htmx_partial_has_no_layout() {
        let (status, body) = fetch(state_with(example_user()), "/transactions", true).await;
        assert_eq!(status, StatusCode::OK);
        assert!(!body.contains("<!DOCTYPE html>"));
        assert!(body.contains("transactions-table"));
    }

    #[tokio::test]
    async fn test_index_redirects() {
        let response = create_router(state_with(User::default()))
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()["location"], "/transactions");
    }

    #[tokio::test]
    async fn test_api_transactions_json() {
        let (status, body) = fetch(state_with(example_user()), "/api/transactions", false).await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["total_count"], 2);
        assert_eq!(json["transactions"][0]["id"], 2);
        assert_eq!(json["transactions"][1]["id"], "1");
    }

    #[tokio::test]
    async fn test_api_transaction_detail_missing() {
        let (status, body) = fetch(state_with(example_user()), "/api/transactions/99", false).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_reload_swaps_snapshot() {
        let source: SourceRef = Arc::new(InMemorySource::new(example_user()));
        let state = AppState::new(Config::default(), source, User::default());

        let response = create_router(state.clone())
            .oneshot(Request::builder().method("POST").uri("/api/reload").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(state.user.read().await.transaction_count(), 2);

        let (_, body) = fetch(state, "/transactions", false).await;
        assert!(!body.contains("<p>None</p>"));
    }

    #[tokio::test]
    async fn test_failed_reload_keeps_snapshot() {
        let source: SourceRef = Arc::new(JsonFileSource::new(
            std::path::PathBuf::from("/nonexistent/txview/user.json"),
        ));
        let state = AppState::new(Config::default(), source, example_user());

        let response = create_router(state.clone())
            .oneshot(Request::builder().method("POST").uri("/api/reload").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["code"], "SOURCE_NOT_FOUND");

        assert_eq!(*state.user.read().await, example_user());
        let (_, body) = fetch(state, "/transactions", false).await;
        assert!(body.contains("href='/transactions/2'"));
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = fetch(state_with(User::default()), "/api/health", false).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");
    }
}
