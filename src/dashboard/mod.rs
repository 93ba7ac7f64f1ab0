//! Dashboard module
//!
//! Shows the user's balance, income, expenses and expense-to-income ratio
//! above the list of their transactions.

mod format;
mod handlers;
mod summary;
mod view;

pub use handlers::{DashboardState, get_dashboard_page};
#[cfg(test)]
pub(crate) use handlers::LOAD_ERROR_MESSAGE;
pub(crate) use handlers::load_error_alert;
pub(crate) use view::{DASHBOARD_CONTENT_ID, dashboard_content};
