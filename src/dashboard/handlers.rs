//! Dashboard HTTP handlers.

use std::sync::Arc;

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};

use crate::{
    AppState, Error, UserId,
    alert::Alert,
    dashboard::view::dashboard_page,
    stores::TransactionStore,
    timezone::get_timezone,
};

/// The message shown when the transactions could not be fetched.
pub(crate) const LOAD_ERROR_MESSAGE: &str = "Erreur de chargement des transactions";

/// The state needed for displaying the dashboard and refreshing it after a
/// mutation.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The store holding the user's transactions.
    pub store: Arc<dyn TransactionStore>,
    /// The user whose transactions are shown.
    pub user_id: UserId,
    /// The local timezone as a canonical timezone name, e.g. "Europe/Paris".
    pub local_timezone: String,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
            user_id: state.user_id.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// The alert shown when the transactions could not be fetched.
pub(crate) fn load_error_alert() -> Alert {
    Alert::Error {
        message: LOAD_ERROR_MESSAGE.to_owned(),
        details: "Vérifiez votre connexion puis rafraîchissez la page.".to_owned(),
    }
}

/// Display the user's summary and transactions.
///
/// If the transactions cannot be fetched, the page is shown without any and
/// with an error alert.
pub async fn get_dashboard_page(State(state): State<DashboardState>) -> Result<Response, Error> {
    let timezone = get_timezone(&state.local_timezone).ok_or_else(|| {
        tracing::error!("Invalid timezone {}", state.local_timezone);
        Error::InvalidTimezoneError(state.local_timezone.clone())
    })?;

    let page = match state.store.list(&state.user_id).await {
        Ok(transactions) => dashboard_page(&transactions, timezone, None),
        Err(error) => {
            tracing::error!("could not load transactions for {}: {error}", state.user_id);
            dashboard_page(&[], timezone, Some(load_error_alert()))
        }
    };

    Ok(page.into_response())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{extract::State, http::StatusCode, response::IntoResponse};
    use scraper::Selector;

    use crate::{
        UserId,
        stores::TransactionStore,
        test_utils::{
            FailingStore, assert_status_ok, assert_valid_html, get_test_sqlite_store,
            must_get_alert, must_get_dashboard_content, parse_html_document,
        },
        transaction::NewTransaction,
    };

    use super::{DashboardState, LOAD_ERROR_MESSAGE, get_dashboard_page};

    fn get_state(store: Arc<dyn TransactionStore>) -> DashboardState {
        DashboardState {
            store,
            user_id: UserId::new("alice"),
            local_timezone: "Etc/UTC".to_owned(),
        }
    }

    #[tokio::test]
    async fn dashboard_page_lists_users_transactions() {
        let store = get_test_sqlite_store();
        let alice = UserId::new("alice");
        for (text, amount) in [("Salaire", 100.0), ("Courses", -50.0)] {
            store
                .insert(
                    NewTransaction {
                        text: text.to_owned(),
                        amount,
                    },
                    &alice,
                )
                .await
                .unwrap();
        }
        store
            .insert(
                NewTransaction {
                    text: "Pas à moi".to_owned(),
                    amount: 1.0,
                },
                &UserId::new("bob"),
            )
            .await
            .unwrap();

        let response = get_dashboard_page(State(get_state(Arc::new(store))))
            .await
            .unwrap();

        assert_status_ok(&response);
        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        must_get_dashboard_content(&html);
        let rows = html
            .select(&Selector::parse("#transactions tbody tr").unwrap())
            .count();
        assert_eq!(rows, 2);
        let alerts = html
            .select(&Selector::parse("[role=alert]").unwrap())
            .count();
        assert_eq!(alerts, 0);
    }

    #[tokio::test]
    async fn load_failure_shows_empty_dashboard_with_error_alert() {
        let response = get_dashboard_page(State(get_state(Arc::new(FailingStore::all()))))
            .await
            .unwrap();

        assert_status_ok(&response);
        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        let (_, alert_text) = must_get_alert(&html);
        assert!(
            alert_text.contains(LOAD_ERROR_MESSAGE),
            "got alert {alert_text:?}"
        );
        let cells = html
            .select(&Selector::parse("#summary .text-2xl").unwrap())
            .map(|cell| cell.text().collect::<String>())
            .collect::<Vec<_>>();
        assert_eq!(cells, ["0.00 €", "0.00 €", "0.00 €"]);
    }

    #[tokio::test]
    async fn invalid_timezone_is_server_error() {
        let mut state = get_state(Arc::new(get_test_sqlite_store()));
        state.local_timezone = "Nowhere/Atlantis".to_owned();

        let response = get_dashboard_page(State(state)).await.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
