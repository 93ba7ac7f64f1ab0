//! The form for entering a new transaction and its validation.

use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    Error,
    alert::ALERT_CONTAINER_ID,
    dashboard::DASHBOARD_CONTENT_ID,
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, Icon, icon,
        loading_spinner,
    },
    transaction::NewTransaction,
};

/// The id of the `<dialog>` that holds the entry form.
pub const TRANSACTION_DIALOG_ID: &str = "add-transaction-dialog";

/// The raw form data for creating a transaction.
///
/// Both fields are kept as text so that validation can report empty or
/// malformed input instead of the request being rejected by the extractor.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransactionForm {
    /// Text detailing the transaction.
    #[serde(default)]
    pub text: String,
    /// The signed amount: negative for an expense, positive for income.
    #[serde(default)]
    pub amount: String,
}

impl TransactionForm {
    /// Check the form before anything is sent to the store.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::EmptyDescription] if the text is empty or only whitespace,
    /// - or [Error::InvalidAmount] if the amount is not a finite number.
    pub fn validate(&self) -> Result<NewTransaction, Error> {
        let text = self.text.trim();

        if text.is_empty() {
            return Err(Error::EmptyDescription);
        }

        let amount = self
            .amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|amount| amount.is_finite())
            .ok_or_else(|| Error::InvalidAmount(self.amount.clone()))?;

        Ok(NewTransaction {
            text: text.to_owned(),
            amount,
        })
    }
}

/// The modal dialog with an empty entry form.
///
/// Successful submissions replace the dashboard content, which includes this
/// dialog, so a fresh render is how the form gets closed and cleared. Failed
/// submissions only swap the alert container and leave the form as it was.
pub fn transaction_dialog() -> Markup {
    dialog(false)
}

/// A closed, empty dialog marked for an out-of-band swap, for resetting the
/// form when the rest of the dashboard cannot be re-rendered.
pub fn transaction_dialog_oob() -> Markup {
    dialog(true)
}

fn dialog(out_of_band: bool) -> Markup {
    html! {
        dialog
            id=(TRANSACTION_DIALOG_ID)
            hx-swap-oob=[out_of_band.then_some("true")]
            class="m-auto w-full max-w-md rounded-2xl p-0 backdrop:backdrop-blur
                bg-white dark:bg-gray-800 text-gray-900 dark:text-white"
        {
            div class="relative p-6 border-2 border-dashed border-amber-400/20 rounded-2xl"
            {
                form method="dialog"
                {
                    button
                        type="submit"
                        aria-label="Fermer"
                        class="absolute right-3 top-3 text-sm opacity-70 hover:opacity-100"
                    {
                        "✕"
                    }
                }

                h3 class="font-bold text-lg" { "Ajouter une transaction" }

                form
                    id="transaction-form"
                    class="flex flex-col gap-4 mt-4"
                    hx-post=(endpoints::TRANSACTIONS_API)
                    hx-target={ "#" (DASHBOARD_CONTENT_ID) }
                    hx-swap="outerHTML"
                    hx-target-error={ "#" (ALERT_CONTAINER_ID) }
                    hx-disabled-elt="find button[type=submit]"
                    hx-indicator="this"
                {
                    div
                    {
                        label for="text" class=(FORM_LABEL_STYLE) { "Texte" }

                        input
                            type="text"
                            name="text"
                            id="text"
                            placeholder="Entrez le texte de la transaction"
                            required
                            class=(FORM_TEXT_INPUT_STYLE);
                    }

                    div
                    {
                        label for="amount" class=(FORM_LABEL_STYLE)
                        {
                            "Montant (négatif - dépense, positif - revenu)"
                        }

                        input
                            type="number"
                            name="amount"
                            id="amount"
                            step="any"
                            placeholder="Entrez le montant"
                            required
                            class=(FORM_TEXT_INPUT_STYLE);
                    }

                    button type="submit" class=(BUTTON_PRIMARY_STYLE)
                    {
                        (loading_spinner())
                        (icon(Icon::PlusCircle, "w-4 h-4"))
                        "Ajouter"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use crate::{
        Error, endpoints,
        test_utils::{assert_form_input, assert_hx_endpoint, must_get_form_by_id},
    };

    use super::{TransactionForm, transaction_dialog, transaction_dialog_oob};

    fn form(text: &str, amount: &str) -> TransactionForm {
        TransactionForm {
            text: text.to_owned(),
            amount: amount.to_owned(),
        }
    }

    #[test]
    fn valid_form_produces_new_transaction() {
        let transaction = form("Courses", "-42.5").validate().unwrap();

        assert_eq!(transaction.text(), "Courses");
        assert_eq!(transaction.amount(), -42.5);
    }

    #[test]
    fn text_is_trimmed() {
        let transaction = form("  Salaire \n", " 2000 ").validate().unwrap();

        assert_eq!(transaction.text(), "Salaire");
        assert_eq!(transaction.amount(), 2000.0);
    }

    #[test]
    fn zero_amount_is_allowed() {
        let transaction = form("Rien", "0").validate().unwrap();

        assert_eq!(transaction.amount(), 0.0);
    }

    #[test]
    fn empty_text_is_rejected() {
        assert_eq!(form("", "12").validate(), Err(Error::EmptyDescription));
        assert_eq!(form("   ", "12").validate(), Err(Error::EmptyDescription));
    }

    #[test]
    fn malformed_amount_is_rejected() {
        for amount in ["", "abc", "12,5", "1e999", "NaN", "inf"] {
            assert_eq!(
                form("Courses", amount).validate(),
                Err(Error::InvalidAmount(amount.to_owned())),
                "amount {amount:?} should be rejected"
            );
        }
    }

    #[test]
    fn empty_text_is_reported_before_amount() {
        assert_eq!(form("", "abc").validate(), Err(Error::EmptyDescription));
    }

    #[test]
    fn dialog_form_posts_to_transactions_api() {
        let html = Html::parse_fragment(&transaction_dialog().into_string());
        let form = must_get_form_by_id(&html, "transaction-form");

        assert_hx_endpoint(&form, endpoints::TRANSACTIONS_API, "hx-post");
        assert_form_input(&form, "text", "text");
        assert_form_input(&form, "amount", "number");
    }

    #[test]
    fn only_out_of_band_dialog_is_marked_for_swap() {
        let in_band = Html::parse_fragment(&transaction_dialog().into_string());
        let out_of_band = Html::parse_fragment(&transaction_dialog_oob().into_string());

        let dialog_attr = |html: &Html| {
            html.select(&Selector::parse("dialog").unwrap())
                .next()
                .and_then(|dialog| dialog.value().attr("hx-swap-oob").map(str::to_owned))
        };
        assert_eq!(dialog_attr(&in_band), None);
        assert_eq!(dialog_attr(&out_of_band).as_deref(), Some("true"));
    }
}
