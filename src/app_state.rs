//! Implements a struct that holds the state of the server.

use std::sync::Arc;

use crate::{UserId, stores::TransactionStore};

/// The state of the server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The store holding the transactions.
    pub store: Arc<dyn TransactionStore>,

    /// The user whose transactions are shown and changed.
    pub user_id: UserId,

    /// The local timezone as a canonical timezone name, e.g. "Europe/Paris".
    pub local_timezone: String,
}

impl AppState {
    /// Create a new [AppState] that serves `user_id`'s transactions from `store`.
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Europe/Paris".
    pub fn new(
        store: Arc<dyn TransactionStore>,
        user_id: UserId,
        local_timezone: &str,
    ) -> Self {
        Self {
            store,
            user_id,
            local_timezone: local_timezone.to_owned(),
        }
    }
}
