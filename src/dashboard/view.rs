//! Renders the dashboard: summary cards, the entry dialog and the transactions table.

use maud::{Markup, html};
use time_tz::Tz;
use unicode_segmentation::UnicodeSegmentation;

use crate::{
    alert::{ALERT_CONTAINER_ID, Alert},
    dashboard::{
        format::{
            AmountDirection, format_created_at, format_euros, format_ratio, format_signed_amount,
        },
        summary::Summary,
    },
    endpoints::{self, format_endpoint},
    html::{
        BADGE_STYLE, BUTTON_DELETE_STYLE, BUTTON_PRIMARY_STYLE, CARD_STYLE,
        PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, Icon, base,
        icon,
    },
    transaction::{TRANSACTION_DIALOG_ID, Transaction, transaction_dialog},
};

/// The id of the element that mutations re-render.
pub(crate) const DASHBOARD_CONTENT_ID: &str = "dashboard-content";

/// Descriptions longer than this many graphemes are cut short in the table.
const MAX_DESCRIPTION_GRAPHEMES: usize = 32;

/// The full dashboard page.
///
/// `alert` is shown when the page loads, e.g. if the transactions could not
/// be fetched.
pub(super) fn dashboard_page(
    transactions: &[Transaction],
    timezone: &Tz,
    alert: Option<Alert>,
) -> Markup {
    let content = html! {
        div class=(PAGE_CONTAINER_STYLE)
        {
            (dashboard_content(transactions, timezone))
        }
    };

    base("Tableau de bord", &content, alert)
}

/// The part of the dashboard that is refreshed after every mutation.
///
/// The entry dialog is rendered closed and empty, so swapping in fresh
/// content also resets the form.
pub(crate) fn dashboard_content(transactions: &[Transaction], timezone: &Tz) -> Markup {
    let summary = Summary::from_transactions(transactions);

    html! {
        div
            id=(DASHBOARD_CONTENT_ID)
            class="w-full md:w-2/3 flex flex-col gap-4"
        {
            (summary_cards(&summary))

            (ratio_card(summary.ratio))

            button
                type="button"
                class=(BUTTON_PRIMARY_STYLE)
                onclick=(format!("document.getElementById('{TRANSACTION_DIALOG_ID}').showModal()"))
            {
                (icon(Icon::PlusCircle, "w-4 h-4"))
                "Ajouter une transaction"
            }

            (transactions_table(transactions, timezone))

            (transaction_dialog())
        }
    }
}

fn stat(badge_icon: Icon, badge_colour: &str, label: &str, value: &str) -> Markup {
    html! {
        div class="flex flex-col gap-1"
        {
            div class={ (BADGE_STYLE) " " (badge_colour) }
            {
                (icon(badge_icon, "w-4 h-4"))
                (label)
            }

            div class="text-2xl font-bold" { (value) }
        }
    }
}

fn summary_cards(summary: &Summary) -> Markup {
    html! {
        section
            id="summary"
            class={ (CARD_STYLE) " flex flex-col sm:flex-row justify-between gap-4" }
        {
            (stat(
                Icon::Wallet,
                "text-gray-800 bg-gray-100 dark:bg-gray-700 dark:text-gray-300",
                "Votre solde",
                &format_euros(summary.balance),
            ))
            (stat(
                Icon::ArrowUpCircle,
                "text-green-800 bg-green-100 dark:bg-green-900 dark:text-green-300",
                "Revenus",
                &format_euros(summary.income),
            ))
            (stat(
                Icon::ArrowDownCircle,
                "text-red-800 bg-red-100 dark:bg-red-900 dark:text-red-300",
                "Dépenses",
                &format_euros(summary.expense),
            ))
        }
    }
}

fn ratio_card(ratio: f64) -> Markup {
    html! {
        section id="ratio" class=(CARD_STYLE)
        {
            div class="flex justify-between items-center mb-1"
            {
                div
                    class={
                        (BADGE_STYLE)
                        " text-amber-800 bg-amber-100 dark:bg-amber-900 dark:text-amber-300"
                    }
                {
                    (icon(Icon::Activity, "w-4 h-4"))
                    "Dépenses VS Revenus"
                }

                div { (format_ratio(ratio)) }
            }

            progress
                class="w-full h-2 accent-amber-400"
                value=(ratio)
                max="100"
            {}
        }
    }
}

/// Shorten `text` to [MAX_DESCRIPTION_GRAPHEMES] graphemes, adding an ellipsis
/// if anything was cut.
fn truncate_description(text: &str) -> (String, bool) {
    let mut graphemes = text.graphemes(true);
    let shortened: String = graphemes.by_ref().take(MAX_DESCRIPTION_GRAPHEMES).collect();

    if graphemes.next().is_some() {
        (format!("{shortened}…"), true)
    } else {
        (shortened, false)
    }
}

fn transactions_table(transactions: &[Transaction], timezone: &Tz) -> Markup {
    html! {
        div class={ (CARD_STYLE) " p-0 overflow-x-auto" }
        {
            table id="transactions" class="w-full text-sm text-left"
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" class=(TABLE_CELL_STYLE) { "#" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Description" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Montant" }
                        th scope="col" class={ (TABLE_CELL_STYLE) " hidden sm:table-cell" } { "Date" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Action" }
                    }
                }

                tbody
                {
                    @for (index, transaction) in transactions.iter().enumerate() {
                        (transaction_row(index + 1, transaction, timezone))
                    }

                    @if transactions.is_empty() {
                        tr class=(TABLE_ROW_STYLE)
                        {
                            td colspan="5" class={ (TABLE_CELL_STYLE) " text-center" }
                            {
                                "Aucune transaction pour le moment."
                            }
                        }
                    }
                }
            }
        }
    }
}

fn transaction_row(number: usize, transaction: &Transaction, timezone: &Tz) -> Markup {
    let (description, is_truncated) = truncate_description(&transaction.text);
    let (trend_icon, trend_colour) = match AmountDirection::of(transaction.amount) {
        AmountDirection::Up => (Icon::TrendingUp, "text-green-600 w-6 h-6"),
        AmountDirection::Down => (Icon::TrendingDown, "text-red-600 w-6 h-6"),
    };
    let delete_url = format_endpoint(endpoints::DELETE_TRANSACTION, transaction.id.as_str());

    html! {
        tr class=(TABLE_ROW_STYLE) data-transaction-id=(transaction.id.as_str())
        {
            th scope="row" class=(TABLE_CELL_STYLE) { (number) }

            td
                class=(TABLE_CELL_STYLE)
                title=[is_truncated.then_some(&transaction.text)]
            {
                (description)
            }

            td class={ (TABLE_CELL_STYLE) " font-semibold" }
            {
                div class="flex items-center gap-2"
                {
                    (icon(trend_icon, trend_colour))
                    (format_signed_amount(transaction.amount))
                }
            }

            td class={ (TABLE_CELL_STYLE) " hidden sm:table-cell" }
            {
                (format_created_at(transaction.created_at, timezone))
            }

            td class=(TABLE_CELL_STYLE)
            {
                button
                    type="button"
                    title="Supprimer"
                    class=(BUTTON_DELETE_STYLE)
                    hx-delete=(delete_url)
                    hx-target={ "#" (DASHBOARD_CONTENT_ID) }
                    hx-swap="outerHTML"
                    hx-target-error={ "#" (ALERT_CONTAINER_ID) }
                    hx-disabled-elt="this"
                {
                    (icon(Icon::Trash, "w-4 h-4"))
                }
            }
        }
    }
}
