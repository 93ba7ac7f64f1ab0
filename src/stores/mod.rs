//! Backends that persist transactions.
//!
//! - [RestTransactionStore] talks to a hosted PostgREST backend (e.g. Supabase).
//! - [SqliteTransactionStore] keeps transactions in a local SQLite database.

mod rest;
mod sqlite;
mod transaction;

pub use rest::{DEFAULT_TRANSACTION_TABLE, RestStoreConfig, RestTransactionStore};
pub use sqlite::{SqliteTransactionStore, create_transaction_table};
pub use transaction::{RowsAffected, TransactionStore};
