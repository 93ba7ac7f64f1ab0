//! Defines the transaction store trait.

use std::fmt::Debug;

use async_trait::async_trait;

use crate::{
    Error, UserId,
    transaction::{NewTransaction, Transaction, TransactionId},
};

/// The number of rows a mutation changed.
pub type RowsAffected = usize;

/// Handles the listing, creation and deletion of transactions.
///
/// Every operation is scoped to a user: a store never returns or removes
/// another user's transactions.
#[async_trait]
pub trait TransactionStore: Debug + Send + Sync {
    /// Retrieve all of `user_id`'s transactions.
    async fn list(&self, user_id: &UserId) -> Result<Vec<Transaction>, Error>;

    /// Store a new transaction for `user_id`.
    ///
    /// The store assigns the ID and creation time of the returned transaction.
    async fn insert(
        &self,
        transaction: NewTransaction,
        user_id: &UserId,
    ) -> Result<Transaction, Error>;

    /// Remove the transaction `id` if it belongs to `user_id`.
    ///
    /// Returns the number of transactions removed, zero if there was no such
    /// transaction in the user's scope.
    async fn delete(&self, id: &TransactionId, user_id: &UserId) -> Result<RowsAffected, Error>;
}
