//! Defines the endpoint for deleting a transaction.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::{HxReswap, SwapOption};
use maud::html;

use crate::{
    alert::{Alert, alerts_oob_html},
    dashboard::{DashboardState, dashboard_content, load_error_alert},
    internal_server_error::get_internal_server_error_redirect,
    timezone::get_timezone,
    transaction::TransactionId,
};

/// A route handler for deleting a transaction.
///
/// Responds with the refreshed dashboard content and an alert saying whether
/// the transaction was deleted. A transaction that is already gone, e.g.
/// deleted from another tab, still refreshes the content so the stale row
/// disappears. If the store fails to delete, only an error alert is sent.
pub async fn delete_transaction_endpoint(
    State(state): State<DashboardState>,
    Path(transaction_id): Path<String>,
) -> Response {
    let transaction_id = TransactionId::new(transaction_id);

    let Some(timezone) = get_timezone(&state.local_timezone) else {
        tracing::error!("Invalid timezone {}", state.local_timezone);
        return get_internal_server_error_redirect();
    };

    let alert = match state.store.delete(&transaction_id, &state.user_id).await {
        Ok(0) => {
            tracing::warn!(
                "tried to delete transaction {transaction_id} which is not in {}'s transactions",
                state.user_id
            );
            Alert::Error {
                message: "Erreur de suppression de la transaction".to_owned(),
                details: "La transaction est introuvable, elle a peut-être déjà été supprimée."
                    .to_owned(),
            }
        }
        Ok(_) => Alert::SuccessSimple {
            message: "Transaction supprimée avec succès".to_owned(),
        },
        Err(error) => {
            tracing::error!("could not delete transaction {transaction_id}: {error}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::Error {
                    message: "Erreur de suppression de la transaction".to_owned(),
                    details: "Une erreur inattendue est survenue. Réessayez plus tard.".to_owned(),
                },
            )
                .into_response();
        }
    };

    let transactions = match state.store.list(&state.user_id).await {
        Ok(transactions) => transactions,
        Err(error) => {
            tracing::error!("could not reload transactions for {}: {error}", state.user_id);
            return (
                HxReswap(SwapOption::None),
                alerts_oob_html(&[alert, load_error_alert()]),
            )
                .into_response();
        }
    };

    html! {
        (dashboard_content(&transactions, timezone))
        (alert.into_oob_html())
    }
    .into_response()
}
