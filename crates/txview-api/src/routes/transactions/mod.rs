//! Transaction routes - list and receipt pages
//!
//! Structure:
//! - api.rs: JSON API endpoints
//! - page.rs: Full page / HTMX partial rendering

pub mod api;
pub mod page;

pub use api::{api_transaction_detail, api_transactions};
pub use page::{page_transaction_detail, page_transactions};
