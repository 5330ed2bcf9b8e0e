//! Route modules for the API server
//!
//! - transactions: list page, receipt page, JSON endpoints
//! - not_found: shared fallback page
//!
//! Each feature module follows the same structure:
//! - mod.rs: Module declaration and exports
//! - api.rs: JSON API endpoints
//! - page.rs: HTMX page rendering

pub mod not_found;
pub mod transactions;
