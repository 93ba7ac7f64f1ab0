//! A personal budget tracker.
//!
//! The app lists the signed-in user's transactions, shows their balance,
//! income, expenses and expense-to-income ratio, and lets the user add or
//! delete transactions. Persistence is delegated to a [TransactionStore],
//! either a hosted REST backend or a local SQLite database.
//!
//! This library provides the HTTP routes that directly serve the HTML pages.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod alert;
mod app_state;
mod dashboard;
mod db;
mod endpoints;
mod html;
mod internal_server_error;
mod logging;
mod not_found;
mod routing;
mod stores;
mod timezone;
mod transaction;
mod user;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use db::initialize as initialize_db;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use stores::{
    DEFAULT_TRANSACTION_TABLE, RestStoreConfig, RestTransactionStore, SqliteTransactionStore,
    TransactionStore,
};
pub use transaction::{NewTransaction, Transaction, TransactionId};
pub use user::UserId;

use crate::{alert::Alert, internal_server_error::InternalServerError, not_found::NotFoundError};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The description of a new transaction was empty.
    #[error("the transaction description cannot be empty")]
    EmptyDescription,

    /// The amount of a new transaction could not be parsed as a finite number.
    #[error("\"{0}\" is not a valid amount")]
    InvalidAmount(String),

    /// The requested resource was not found.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// The request to the hosted store could not be sent or its response
    /// could not be read.
    #[error("could not reach the transaction store: {0}")]
    StoreRequest(String),

    /// The hosted store answered with a non-success status code.
    #[error("the transaction store responded with status {status}: {body}")]
    StoreResponse {
        /// The HTTP status code returned by the store.
        status: u16,
        /// The response body, usually a JSON error object.
        body: String,
    },

    /// The hosted store answered with a body that is not a valid list of
    /// transactions.
    #[error("the transaction store sent an invalid response: {0}")]
    InvalidStoreResponse(String),

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        if value.is_decode() {
            Error::InvalidStoreResponse(value.to_string())
        } else {
            Error::StoreRequest(value.to_string())
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => NotFoundError.into_response(),
            Error::InvalidTimezoneError(timezone) => InternalServerError {
                description: "Fuseau horaire invalide",
                fix: &format!(
                    "Impossible de trouver le fuseau horaire \"{timezone}\". Vérifiez la \
                    configuration du serveur et utilisez un nom canonique, p. ex. \"Europe/Paris\"."
                ),
            }
            .into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

impl Error {
    /// Render the error as an alert fragment for htmx requests.
    fn into_alert_response(self) -> Response {
        let (status_code, alert) = match self {
            Error::EmptyDescription | Error::InvalidAmount(_) => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Veuillez remplir tous les champs".to_owned(),
                    details: "La description ne peut pas être vide et le montant doit être \
                        un nombre."
                        .to_owned(),
                },
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::ErrorSimple {
                    message: "Une erreur inattendue est survenue".to_owned(),
                },
            ),
        };

        (status_code, alert).into_response()
    }
}
