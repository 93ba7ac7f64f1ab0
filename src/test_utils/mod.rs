#![allow(missing_docs)]

pub(crate) mod form;
pub(crate) mod html;
pub(crate) mod http;
pub(crate) mod store;

pub(crate) use form::{assert_form_input, assert_hx_endpoint, must_get_form_by_id};
pub(crate) use html::{
    assert_valid_html, get_alert_texts, must_get_alert, must_get_dashboard_content, parse_html_document,
    parse_html_fragment,
};
pub(crate) use http::{assert_status_ok, get_header};
pub(crate) use store::{FailingStore, UnreachableStore, get_test_sqlite_store};
