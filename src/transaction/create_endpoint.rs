//! Defines the endpoint for creating a new transaction.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::{HxReswap, SwapOption};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use maud::html;

use crate::{
    alert::{Alert, alerts_oob_html},
    dashboard::{DashboardState, dashboard_content, load_error_alert},
    internal_server_error::get_internal_server_error_redirect,
    timezone::get_timezone,
    transaction::{TransactionForm, form::transaction_dialog_oob},
};

/// A route handler for creating a new transaction.
///
/// Responds with the refreshed dashboard content and a success alert, or with
/// an error alert if the form is invalid or the store fails.
///
/// If the transaction is saved but the transactions cannot be fetched again,
/// the current content stays on screen while the form is still closed and
/// cleared, and both the success and the load error are shown.
pub async fn create_transaction_endpoint(
    State(state): State<DashboardState>,
    Form(form): Form<TransactionForm>,
) -> Response {
    let new_transaction = match form.validate() {
        Ok(new_transaction) => new_transaction,
        Err(error) => {
            tracing::debug!("rejected transaction form: {error}");
            return error.into_alert_response();
        }
    };

    let Some(timezone) = get_timezone(&state.local_timezone) else {
        tracing::error!("Invalid timezone {}", state.local_timezone);
        return get_internal_server_error_redirect();
    };

    if let Err(error) = state.store.insert(new_transaction, &state.user_id).await {
        tracing::error!("could not create transaction for {}: {error}", state.user_id);

        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Alert::Error {
                message: "Erreur d'ajout de la transaction".to_owned(),
                details: "La transaction n'a pas été enregistrée. Réessayez plus tard.".to_owned(),
            },
        )
            .into_response();
    }

    let alert = Alert::SuccessSimple {
        message: "Transaction ajoutée avec succès".to_owned(),
    };

    let transactions = match state.store.list(&state.user_id).await {
        Ok(transactions) => transactions,
        Err(error) => {
            tracing::error!("could not reload transactions for {}: {error}", state.user_id);
            return (
                HxReswap(SwapOption::None),
                html! {
                    (transaction_dialog_oob())
                    (alerts_oob_html(&[alert, load_error_alert()]))
                },
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
