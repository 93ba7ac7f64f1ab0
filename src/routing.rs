//! Application router configuration.

use axum::{
    Router,
    response::Redirect,
    routing::{delete, get, post},
};

use crate::{
    AppState,
    dashboard::get_dashboard_page,
    endpoints,
    internal_server_error::get_internal_server_error_page,
    not_found::get_404_not_found,
    transaction::{create_transaction_endpoint, delete_transaction_endpoint},
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page))
        .route(
            endpoints::TRANSACTIONS_API,
            post(create_transaction_endpoint),
        )
        .route(
            endpoints::DELETE_TRANSACTION,
            delete(delete_transaction_endpoint),
        )
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        )
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the dashboard page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::DASHBOARD_VIEW)
}

#[cfg(test)]
mod root_route_tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::{endpoints, routing::get_index_page};

    #[tokio::test]
    async fn root_redirects_to_dashboard() {
        let response = get_index_page().await.into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let location = response.headers().get("location").unwrap();
        assert_eq!(location, endpoints::DASHBOARD_VIEW);
    }
}

#[cfg(test)]
mod router_tests {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use axum_test::TestServer;
    use scraper::{Html, Selector};

    use crate::{
        AppState, UserId, build_router,
        endpoints::{self, format_endpoint},
        stores::TransactionStore,
        test_utils::get_test_sqlite_store,
    };

    fn get_test_server() -> (TestServer, Arc<dyn TransactionStore>) {
        let store: Arc<dyn TransactionStore> = Arc::new(get_test_sqlite_store());
        let state = AppState::new(store.clone(), UserId::new("alice"), "Etc/UTC");
        let server = TestServer::try_new(build_router(state)).expect("Could not create test server.");

        (server, store)
    }

    fn row_texts(html: &str) -> Vec<String> {
        Html::parse_document(html)
            .select(&Selector::parse("#transactions tbody tr td:nth-child(2)").unwrap())
            .map(|cell| cell.text().collect::<String>().trim().to_owned())
            .collect()
    }

    #[tokio::test]
    async fn add_then_delete_transaction() {
        let (server, store) = get_test_server();

        let response = server
            .post(endpoints::TRANSACTIONS_API)
            .form(&[("text", "Salaire"), ("amount", "100")])
            .await;
        response.assert_status_ok();
        let response = server
            .post(endpoints::TRANSACTIONS_API)
            .form(&[("text", "Courses"), ("amount", "-50")])
            .await;
        response.assert_status_ok();

        let page = server.get(endpoints::DASHBOARD_VIEW).await;
        page.assert_status_ok();
        assert_eq!(row_texts(&page.text()), ["Salaire", "Courses"]);

        let transactions = store.list(&UserId::new("alice")).await.unwrap();
        let response = server
            .delete(&format_endpoint(
                endpoints::DELETE_TRANSACTION,
                transactions[1].id.as_str(),
            ))
            .await;
        response.assert_status_ok();

        let page = server.get(endpoints::DASHBOARD_VIEW).await;
        assert_eq!(row_texts(&page.text()), ["Salaire"]);
    }

    #[tokio::test]
    async fn invalid_form_is_bad_request() {
        let (server, store) = get_test_server();

        let response = server
            .post(endpoints::TRANSACTIONS_API)
            .form(&[("text", ""), ("amount", "12")])
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert!(store.list(&UserId::new("alice")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_fields_are_bad_request() {
        let (server, _) = get_test_server();

        let response = server
            .post(endpoints::TRANSACTIONS_API)
            .form(&[("text", "Courses")])
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let (server, _) = get_test_server();

        let response = server.get("/nope").await;

        response.assert_status_not_found();
    }
}
