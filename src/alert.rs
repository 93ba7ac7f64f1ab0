//! Transient notifications for displaying success and error messages to users.
//!
//! Alerts are rendered into the fixed `#alert-container` at the top right of every
//! page. Error responses replace the container directly (see the
//! `hx-target-error` attributes on the forms), while successful responses that
//! swap other content carry the alert out-of-band.

use axum::response::{Html, IntoResponse, Response};
use maud::{Markup, html};

/// The id of the element that holds the current alert.
pub const ALERT_CONTAINER_ID: &str = "alert-container";

/// How long an alert stays on screen before fading out.
const ALERT_TIMEOUT_MS: u32 = 4000;

/// A message shown to the user after an operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    /// The operation succeeded.
    SuccessSimple {
        /// The headline.
        message: String,
    },
    /// The operation failed.
    Error {
        /// The headline.
        message: String,
        /// Extra text shown under the headline, e.g. how to fix the problem.
        details: String,
    },
    /// The operation failed, headline only.
    ErrorSimple {
        /// The headline.
        message: String,
    },
}

impl Alert {
    fn is_error(&self) -> bool {
        matches!(self, Alert::Error { .. } | Alert::ErrorSimple { .. })
    }

    fn message(&self) -> &str {
        match self {
            Alert::SuccessSimple { message }
            | Alert::Error { message, .. }
            | Alert::ErrorSimple { message } => message.as_str(),
        }
    }

    fn details(&self) -> Option<&str> {
        match self {
            Alert::Error { details, .. } if !details.is_empty() => Some(details.as_str()),
            _ => None,
        }
    }

    /// Render the alert inside the alert container.
    pub fn into_html(self) -> Markup {
        alert_container(std::slice::from_ref(&self), false)
    }

    /// Render the alert inside the alert container marked for an out-of-band
    /// swap, so it can be appended to a response that targets another element.
    pub fn into_oob_html(self) -> Markup {
        alert_container(std::slice::from_ref(&self), true)
    }
}

/// Render several alerts stacked in the alert container, marked for an
/// out-of-band swap.
pub fn alerts_oob_html(alerts: &[Alert]) -> Markup {
    alert_container(alerts, true)
}

impl IntoResponse for Alert {
    fn into_response(self) -> Response {
        Html(self.into_html().into_string()).into_response()
    }
}

/// The empty container that alerts are swapped into.
pub fn empty_alert_container() -> Markup {
    html! {
        div
            id=(ALERT_CONTAINER_ID)
            class="fixed top-4 right-4 z-50 w-full max-w-sm px-4 flex flex-col gap-2"
        {}
    }
}

fn alert_container(alerts: &[Alert], out_of_band: bool) -> Markup {
    html! {
        div
            id=(ALERT_CONTAINER_ID)
            class="fixed top-4 right-4 z-50 w-full max-w-sm px-4 flex flex-col gap-2"
            hx-swap-oob=[out_of_band.then_some("true")]
        {
            @for alert in alerts {
                (alert_body(alert))
            }
        }
    }
}

fn alert_body(alert: &Alert) -> Markup {
    let (container_style, icon) = if alert.is_error() {
        (
            "flex items-start gap-3 p-4 rounded-lg shadow-lg border \
            text-red-800 bg-red-50 border-red-300 \
            dark:bg-gray-800 dark:text-red-400 dark:border-red-800",
            "✕",
        )
    } else {
        (
            "flex items-start gap-3 p-4 rounded-lg shadow-lg border \
            text-green-800 bg-green-50 border-green-300 \
            dark:bg-gray-800 dark:text-green-400 dark:border-green-800",
            "✓",
        )
    };

    html! {
        div
            role="alert"
            class=(container_style)
            data-timeout=(ALERT_TIMEOUT_MS)
        {
            span class="font-bold" aria-hidden="true" { (icon) }

            div class="flex-1"
            {
                p class="font-medium" { (alert.message()) }

                @if let Some(details) = alert.details() {
                    p class="text-sm mt-1" { (details) }
                }
            }

            button
                type="button"
                aria-label="Fermer"
                class="text-sm opacity-70 hover:opacity-100"
                onclick="this.closest('[role=alert]').remove()"
            {
                "✕"
            }
        }
    }
}
