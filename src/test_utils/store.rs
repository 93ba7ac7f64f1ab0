//! Store doubles for handler tests.

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use rusqlite::Connection;

use crate::{
    Error, UserId,
    db::initialize,
    stores::{RowsAffected, SqliteTransactionStore, TransactionStore},
    transaction::{NewTransaction, Transaction, TransactionId},
};

pub(crate) fn get_test_sqlite_store() -> SqliteTransactionStore {
    let conn = Connection::open_in_memory().unwrap();
    initialize(&conn).unwrap();
    SqliteTransactionStore::new(Arc::new(Mutex::new(conn)))
}

/// A store where the flagged operations fail and the others are delegated to
/// an inner SQLite store.
#[derive(Debug, Default)]
pub(crate) struct FailingStore {
    fail_list: bool,
    fail_insert: bool,
    fail_delete: bool,
    inner: Option<SqliteTransactionStore>,
    calls: AtomicUsize,
}

impl FailingStore {
    /// A store where every operation fails.
    pub(crate) fn all() -> Self {
        Self {
            fail_list: true,
            fail_insert: true,
            fail_delete: true,
            ..Default::default()
        }
    }

    /// A working SQLite store where only the flagged operations fail.
    pub(crate) fn wrapping(inner: SqliteTransactionStore) -> Self {
        Self {
            inner: Some(inner),
            ..Default::default()
        }
    }

    pub(crate) fn failing_list(mut self) -> Self {
        self.fail_list = true;
        self
    }

    /// How many times any operation was called.
    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn inner(&self) -> &SqliteTransactionStore {
        self.inner
            .as_ref()
            .expect("FailingStore needs an inner store for operations that succeed")
    }

    fn unavailable() -> Error {
        Error::StoreResponse {
            status: 503,
            body: "unavailable".to_owned(),
        }
    }
}

#[async_trait]
impl TransactionStore for FailingStore {
    async fn list(&self, user_id: &UserId) -> Result<Vec<Transaction>, Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_list {
            return Err(Self::unavailable());
        }
        self.inner().list(user_id).await
    }

    async fn insert(
        &self,
        transaction: NewTransaction,
        user_id: &UserId,
    ) -> Result<Transaction, Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_insert {
            return Err(Self::unavailable());
        }
        self.inner().insert(transaction, user_id).await
    }

    async fn delete(&self, id: &TransactionId, user_id: &UserId) -> Result<RowsAffected, Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_delete {
            return Err(Self::unavailable());
        }
        self.inner().delete(id, user_id).await
    }
}

/// A store that panics when used, for checking a handler never reaches the store.
#[derive(Debug)]
pub(crate) struct UnreachableStore;

#[async_trait]
impl TransactionStore for UnreachableStore {
    async fn list(&self, _: &UserId) -> Result<Vec<Transaction>, Error> {
        panic!("the store should not be called")
    }

    async fn insert(&self, _: NewTransaction, _: &UserId) -> Result<Transaction, Error> {
        panic!("the store should not be called")
    }

    async fn delete(&self, _: &TransactionId, _: &UserId) -> Result<RowsAffected, Error> {
        panic!("the store should not be called")
    }
}
