use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::alert::{Alert, empty_alert_container};

// Button styles
pub const BUTTON_PRIMARY_STYLE: &str = "inline-flex items-center justify-center gap-2 \
    w-full px-4 py-2 font-medium text-gray-900 bg-amber-400 dark:bg-amber-500 \
    disabled:bg-amber-200 hover:enabled:bg-amber-500 \
    hover:enabled:dark:bg-amber-600 rounded";

pub const BUTTON_DELETE_STYLE: &str = "inline-flex items-center justify-center p-2 \
    rounded text-red-600 bg-red-50 hover:bg-red-100 dark:text-red-400 \
    dark:bg-red-900/20 dark:hover:bg-red-900/40 cursor-pointer";

// Form styles
pub const FORM_LABEL_STYLE: &str = "block mb-2 text-sm font-medium text-gray-900 dark:text-white";
pub const FORM_TEXT_INPUT_STYLE: &str = "block w-full p-2.5 rounded text-sm \
    text-gray-900 dark:text-white disabled:text-gray-500 bg-gray-50 \
    dark:bg-gray-700 border border-gray-300 dark:border-gray-600 \
    dark:placeholder-gray-400 focus:ring-amber-500 focus:border-amber-500";

// Table styles
pub const TABLE_HEADER_STYLE: &str = "text-xs text-gray-700 uppercase \
    bg-gray-50 dark:bg-gray-700 dark:text-gray-400";

pub const TABLE_ROW_STYLE: &str = "bg-white border-b dark:bg-gray-800 dark:border-gray-700";

pub const TABLE_CELL_STYLE: &str = "px-6 py-4";

// Panels
pub const CARD_STYLE: &str = "rounded-2xl border-2 border-dashed border-amber-400/10 \
    bg-amber-400/5 p-5";

pub const BADGE_STYLE: &str = "inline-flex items-center gap-1 px-2.5 py-0.5 \
    text-xs font-semibold rounded-full";

// Page container
pub const PAGE_CONTAINER_STYLE: &str =
    "flex justify-center items-start min-h-screen my-5 px-4 text-gray-900 dark:text-white";

/// Fades out alerts after the delay in their `data-timeout` attribute.
const ALERT_TIMEOUT_SCRIPT: &str = r#"
document.addEventListener("htmx:afterSettle", dismissAlerts);
document.addEventListener("DOMContentLoaded", dismissAlerts);

function dismissAlerts() {
    document.querySelectorAll("[role=alert][data-timeout]").forEach((alert) => {
        const timeout = Number(alert.dataset.timeout);
        alert.removeAttribute("data-timeout");
        setTimeout(() => alert.remove(), timeout);
    });
}
"#;

/// The page skeleton. `alert` is shown on load, e.g. when the page's data
/// could not be fetched.
pub fn base(title: &str, content: &Markup, alert: Option<Alert>) -> Markup {
    html! {
        (DOCTYPE)
        html lang="fr"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Budget" }

                script src="https://unpkg.com/@tailwindcss/browser@4" {}
                script src="https://unpkg.com/htmx.org@2.0.8" {}
                script src="https://unpkg.com/htmx-ext-response-targets@2.0.4" {}

                script { (PreEscaped(ALERT_TIMEOUT_SCRIPT)) }
            }

            body
                hx-ext="response-targets"
                class="container max-w-full min-h-screen bg-gray-50 dark:bg-gray-900"
            {
                (content)

                @match alert {
                    Some(alert) => (alert.into_html()),
                    None => (empty_alert_container()),
                }
            }
        }
    }
}

pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    // Template adapted from https://flowbite.com/blocks/marketing/404/
    let content = html!(
        section class="bg-white dark:bg-gray-900"
        {
            div class="py-8 px-4 mx-auto max-w-screen-xl lg:py-16 lg:px-6"
            {
                div class="mx-auto max-w-screen-sm text-center"
                {
                    h1
                        class="mb-4 text-7xl tracking-tight font-extrabold
                            lg:text-9xl text-amber-500"
                    {
                        (header)
                    }

                    p
                        class="mb-4 text-3xl md:text-4xl tracking-tight
                            font-bold text-gray-900 dark:text-white"
                    {
                        (description)
                    }

                    p
                        class="mb-4 text-1xl md:text-2xl tracking-tight
                            text-gray-900 dark:text-white"
                    {
                        (fix)
                    }

                    a
                        href="/"
                        class="inline-flex text-gray-900 bg-amber-400
                            hover:bg-amber-500 focus:ring-4 focus:outline-hidden
                            focus:ring-amber-300 font-medium rounded text-sm px-5
                            py-2.5 text-center my-4"
                    {
                        "Retour à l'accueil"
                    }
                }
            }
        }
    );

    base(title, &content, None)
}

pub fn loading_spinner() -> Markup {
    // Spinner SVG adapted from https://flowbite.com/docs/components/spinner/
    html! {
        svg
            aria-hidden="true"
            role="status"
            class="htmx-indicator inline w-4 h-4 animate-spin"
            viewBox="0 0 100 101"
            fill="none"
            xmlns="http://www.w3.org/2000/svg"
        {
            path
                d="M100 50.5908C100 78.2051 77.6142 100.591 50 100.591C22.3858 100.591 0 78.2051 0 50.5908C0 22.9766 22.3858 0.59082 50 0.59082C77.6142 0.59082 100 22.9766 100 50.5908ZM9.08144 50.5908C9.08144 73.1895 27.4013 91.5094 50 91.5094C72.5987 91.5094 90.9186 73.1895 90.9186 50.5908C90.9186 27.9921 72.5987 9.67226 50 9.67226C27.4013 9.67226 9.08144 27.9921 9.08144 50.5908Z"
                fill="#E5E7EB" {}
            path
                d="M93.9676 39.0409C96.393 38.4038 97.8624 35.9116 97.0079 33.5539C95.2932 28.8227 92.871 24.3692 89.8167 20.348C85.8452 15.1192 80.8826 10.7238 75.2124 7.41289C69.5422 4.10194 63.2754 1.94025 56.7698 1.05124C51.7666 0.367541 46.6976 0.446843 41.7345 1.27873C39.2613 1.69328 37.813 4.19778 38.4501 6.62326C39.0873 9.04874 41.5694 10.4717 44.0505 10.1071C47.8511 9.54855 51.7191 9.52689 55.5402 10.0491C60.8642 10.7766 65.9928 12.5457 70.6331 15.2552C75.2735 17.9648 79.3347 21.5619 82.5849 25.841C84.9175 28.9121 86.7997 32.2913 88.1811 35.8758C89.083 38.2158 91.5421 39.6781 93.9676 39.0409Z"
                fill="currentColor" {}
        }
    }
}

/// The icons used on the dashboard, adapted from https://lucide.dev (ISC license).
pub enum Icon {
    Wallet,
    ArrowUpCircle,
    ArrowDownCircle,
    Activity,
    PlusCircle,
    TrendingUp,
    TrendingDown,
    Trash,
}

pub fn icon(icon: Icon, class: &str) -> Markup {
    let paths = match icon {
        Icon::Wallet => html! {
            path d="M19 7V4a1 1 0 0 0-1-1H5a2 2 0 0 0 0 4h15a1 1 0 0 1 1 1v4h-3a2 2 0 0 0 0 4h3a1 1 0 0 0 1-1v-2a1 1 0 0 0-1-1" {}
            path d="M3 5v14a2 2 0 0 0 2 2h15a1 1 0 0 0 1-1v-4" {}
        },
        Icon::ArrowUpCircle => html! {
            circle cx="12" cy="12" r="10" {}
            path d="m16 12-4-4-4 4" {}
            path d="M12 16V8" {}
        },
        Icon::ArrowDownCircle => html! {
            circle cx="12" cy="12" r="10" {}
            path d="M12 8v8" {}
            path d="m8 12 4 4 4-4" {}
        },
        Icon::Activity => html! {
            path d="M22 12h-4l-3 9L9 3l-3 9H2" {}
        },
        Icon::PlusCircle => html! {
            circle cx="12" cy="12" r="10" {}
            path d="M8 12h8" {}
            path d="M12 8v8" {}
        },
        Icon::TrendingUp => html! {
            polyline points="22 7 13.5 15.5 8.5 10.5 2 17" {}
            polyline points="16 7 22 7 22 13" {}
        },
        Icon::TrendingDown => html! {
            polyline points="22 17 13.5 8.5 8.5 13.5 2 7" {}
            polyline points="16 17 22 17 22 11" {}
        },
        Icon::Trash => html! {
            path d="M3 6h18" {}
            path d="M19 6v14c0 1-1 2-2 2H7c-1 0-2-1-2-2V6" {}
            path d="M8 6V4c0-1 1-2 2-2h4c1 0 2 1 2 2v2" {}
        },
    };

    html! {
        svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            class=(class)
        {
            (paths)
        }
    }
}
