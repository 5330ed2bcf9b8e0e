//! Transactions page rendering
//!
//! Endpoints:
//! - page_transactions: newest-first transaction table
//! - page_transaction_detail: receipt for one transaction
//!
//! Helper functions:
//! - render_transaction_list: list view tree to HTML
//! - render_receipt: receipt view tree to HTML

use axum::extract::{rejection::PathRejection, Path};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use txview_core::{
    ListBody, NotFoundView, ReceiptView, TransactionDetailView, TransactionListView,
    EMPTY_PLACEHOLDER,
};
use txview_utils::escape_html;

use crate::routes::not_found::render_not_found;
use crate::AppState;

/// Transactions page - every transaction of the current user, newest first
pub async fn page_transactions(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
) -> Html<String> {
    let user = state.user.read().await;
    let view = TransactionListView::build(&user, &state.config.currency);

    let inner_content = format!(
        "{}{}",
        crate::greeting(user.username.as_deref()),
        render_transaction_list(&view)
    );

    Html(crate::page_response(&headers, view.title, "/transactions", &inner_content))
}

/// Transaction receipt page, or the shared not-found page with status 404
///
/// A segment that is not valid UTF-8 can name no transaction and gets the
/// same not-found page.
pub async fn page_transaction_detail(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
    path: Result<Path<String>, PathRejection>,
) -> Response {
    let user = state.user.read().await;
    let (transaction_id, view) = match path {
        Ok(Path(id)) => {
            let view = TransactionDetailView::build(&user, &id, &state.config.currency);
            (id, view)
        }
        Err(rejection) => {
            log::debug!("Unusable transaction id: {}", rejection.body_text());
            (String::new(), TransactionDetailView::NotFound(NotFoundView::default()))
        }
    };

    match view {
        TransactionDetailView::Receipt(receipt) => {
            log::debug!("Rendering receipt for transaction {}", transaction_id);
            let content = render_receipt(&receipt);
            Html(crate::page_response(&headers, receipt.title, "/transactions", &content)).into_response()
        }
        TransactionDetailView::NotFound(view) => {
            log::debug!("Transaction {} not found", transaction_id);
            let content = render_not_found(&view);
            (
                StatusCode::NOT_FOUND,
                Html(crate::page_response(&headers, view.title, "/transactions", &content)),
            )
                .into_response()
        }
    }
}

/// Render the list view tree
pub fn render_transaction_list(view: &TransactionListView) -> String {
    let header_cells: String = view
        .columns
        .iter()
        .map(|c| format!("<th class='px-4 py-2 text-left text-sm font-medium text-gray-500'>{}</th>", c))
        .collect();

    let body = match &view.body {
        ListBody::Rows(rows) => rows
            .iter()
            .map(|row| {
                format!(
                    r#"<tr class='border-t hover:bg-gray-50'>
                <td class='px-4 py-2'>{}</td>
                <td class='px-4 py-2'><a href='{}' class='text-indigo-600 hover:underline'>{}</a></td>
                <td class='px-4 py-2 font-medium'>{}</td>
                <td class='px-4 py-2'>{}</td>
                <td class='px-4 py-2 text-gray-600'>{}</td>
            </tr>"#,
                    escape_html(&row.date),
                    escape_html(&row.href),
                    escape_html(&row.id),
                    escape_html(&row.amount),
                    escape_html(&row.account_type),
                    escape_html(&row.memo),
                )
            })
            .collect::<String>(),
        ListBody::Empty => format!(
            "<tr><td colspan='{}' class='px-4 py-8 text-center text-gray-500'><p>{}</p></td></tr>",
            view.columns.len(),
            EMPTY_PLACEHOLDER
        ),
    };

    format!(
        r#"<div class='mb-6'><h2 class='text-2xl font-bold'>{}</h2></div>
        <div class='bg-white rounded-xl shadow-sm p-6'>
            <table class='w-full' id='transactions-table'>
                <thead><tr>{}</tr></thead>
                <tbody>{}</tbody>
            </table>
        </div>"#,
        view.title, header_cells, body
    )
}

/// Render a transaction receipt
pub fn render_receipt(receipt: &ReceiptView) -> String {
    let rows: String = receipt
        .fields
        .iter()
        .map(|f| {
            format!(
                "<tr class='border-t'><td class='px-4 py-2 text-sm text-gray-500 w-40'>{}</td><td class='px-4 py-2'>{}</td></tr>",
                f.label,
                escape_html(&f.value)
            )
        })
        .collect();

    format!(
        r#"<div class='mb-6 flex items-center justify-between'>
            <h2 class='text-2xl font-bold'>{}</h2>
            <a href='/transactions' class='text-sm text-indigo-600 hover:underline'>Back to transactions</a>
        </div>
        <div class='bg-white rounded-xl shadow-sm p-6'>
            <table class='w-full' id='receipt-table'><tbody>{}</tbody></table>
        </div>"#,
        receipt.title, rows
    )
}
