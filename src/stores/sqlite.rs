//! Implements a SQLite backed transaction store.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use rusqlite::{Connection, Row};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::{
    Error, UserId,
    stores::{RowsAffected, TransactionStore},
    transaction::{NewTransaction, Transaction, TransactionId},
};

/// Stores transactions in a SQLite database.
///
/// The `transaction` table must exist, see [crate::initialize_db].
#[derive(Debug, Clone)]
pub struct SqliteTransactionStore {
    connection: Arc<Mutex<Connection>>,
}

impl SqliteTransactionStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.connection.lock().map_err(|error| {
            tracing::error!("could not acquire database lock: {error}");
            Error::DatabaseLockError
        })
    }
}

#[async_trait]
impl TransactionStore for SqliteTransactionStore {
    /// Retrieve the user's transactions in the order they were created.
    ///
    /// # Errors
    /// Returns an [Error::DatabaseLockError] if the connection lock is poisoned,
    /// or an [Error::SqlError] if there is some SQL error.
    async fn list(&self, user_id: &UserId) -> Result<Vec<Transaction>, Error> {
        let connection = self.lock()?;

        let transactions = connection
            .prepare(
                "SELECT id, text, amount, created_at FROM \"transaction\"
                 WHERE user_id = :user_id
                 ORDER BY created_at ASC, rowid ASC",
            )?
            .query_map(&[(":user_id", user_id.as_str())], map_transaction_row)?
            .map(|maybe_transaction| maybe_transaction.map_err(Error::from))
            .collect();

        transactions
    }

    /// Create a new transaction in the database with a random UUID and the
    /// current time.
    ///
    /// # Errors
    /// Returns an [Error::DatabaseLockError] if the connection lock is poisoned,
    /// or an [Error::SqlError] if there is some SQL error.
    async fn insert(
        &self,
        transaction: NewTransaction,
        user_id: &UserId,
    ) -> Result<Transaction, Error> {
        let connection = self.lock()?;

        let transaction = connection
            .prepare(
                "INSERT INTO \"transaction\" (id, text, amount, created_at, user_id)
                 VALUES (?1, ?2, ?3, ?4, ?5)
                 RETURNING id, text, amount, created_at",
            )?
            .query_row(
                (
                    Uuid::new_v4().to_string(),
                    transaction.text,
                    transaction.amount,
                    OffsetDateTime::now_utc(),
                    user_id.as_str(),
                ),
                map_transaction_row,
            )?;

        Ok(transaction)
    }

    /// Delete the transaction `id` if it belongs to `user_id`.
    ///
    /// # Errors
    /// Returns an [Error::DatabaseLockError] if the connection lock is poisoned,
    /// or an [Error::SqlError] if there is some SQL error.
    async fn delete(&self, id: &TransactionId, user_id: &UserId) -> Result<RowsAffected, Error> {
        let connection = self.lock()?;

        connection
            .execute(
                "DELETE FROM \"transaction\" WHERE id = :id AND user_id = :user_id",
                &[(":id", id.as_str()), (":user_id", user_id.as_str())],
            )
            .map_err(Error::from)
    }
}

/// Create the transaction table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS \"transaction\" (
                id TEXT PRIMARY KEY,
                text TEXT NOT NULL,
                amount REAL NOT NULL,
                created_at TEXT NOT NULL,
                user_id TEXT NOT NULL
                )",
        (),
    )?;

    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_transaction_user ON \"transaction\"(user_id, created_at);",
        (),
    )?;

    Ok(())
}

/// Map a database row to a Transaction.
fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let id: String = row.get(0)?;
    let text = row.get(1)?;
    let amount = row.get(2)?;
    let created_at = row.get(3)?;

    Ok(Transaction {
        id: TransactionId::new(id),
        text,
        amount,
        created_at,
    })
}
