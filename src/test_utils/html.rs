use axum::{body::Body, response::Response};
use scraper::{ElementRef, Html, Selector};

async fn response_text(response: Response<Body>) -> String {
    let body = response.into_body();
    let body = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Could not get response body");

    String::from_utf8_lossy(&body).to_string()
}

pub(crate) async fn parse_html_document(response: Response<Body>) -> Html {
    Html::parse_document(&response_text(response).await)
}

pub(crate) async fn parse_html_fragment(response: Response<Body>) -> Html {
    Html::parse_fragment(&response_text(response).await)
}

#[track_caller]
pub(crate) fn assert_valid_html(html: &Html) {
    assert!(
        html.errors.is_empty(),
        "Got HTML parsing errors: {:?}",
        html.errors
    );
}

#[track_caller]
pub(crate) fn must_get_dashboard_content(html: &Html) -> ElementRef<'_> {
    html.select(&Selector::parse("#dashboard-content").unwrap())
        .next()
        .unwrap_or_else(|| panic!("No dashboard content found in {}", html.html()))
}

/// Get the first alert and its text, e.g. for checking which notification was shown.
#[track_caller]
pub(crate) fn must_get_alert(html: &Html) -> (ElementRef<'_>, String) {
    let alert = html
        .select(&Selector::parse("[role=alert]").unwrap())
        .next()
        .unwrap_or_else(|| panic!("No alert found in {}", html.html()));
    let text = alert.text().collect::<Vec<_>>().join(" ");

    (alert, text)
}

/// Get the text of every alert, in the order they are shown.
pub(crate) fn get_alert_texts(html: &Html) -> Vec<String> {
    html.select(&Selector::parse("[role=alert]").unwrap())
        .map(|alert| alert.text().collect::<Vec<_>>().join(" "))
        .collect()
}
