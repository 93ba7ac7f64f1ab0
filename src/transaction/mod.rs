//! Transaction management for the budget tracker.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and the validated `NewTransaction`
//! - The entry form and its validation
//! - The endpoints for adding and deleting transactions

mod core;
mod create_endpoint;
mod delete_endpoint;
mod form;

pub use core::{NewTransaction, Transaction, TransactionId};
pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;
pub use form::{TRANSACTION_DIALOG_ID, TransactionForm, transaction_dialog};
