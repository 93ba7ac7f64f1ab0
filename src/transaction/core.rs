//! Defines the core data models for transactions.

use std::fmt::Display;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use time::OffsetDateTime;

// ============================================================================
// MODELS
// ============================================================================

/// The opaque ID the store assigned to a transaction.
///
/// Hosted stores may key rows with UUIDs or integers, so the ID is accepted
/// as either a JSON string or a JSON number and kept as a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    /// Create a transaction ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for TransactionId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::String(id) => Ok(Self(id)),
            Value::Number(id) => Ok(Self(id.to_string())),
            other => Err(serde::de::Error::custom(format!(
                "expected a string or number for the transaction ID, got {other}"
            ))),
        }
    }
}

/// An expense or income, i.e. an event where money was either spent or earned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction, assigned by the store.
    pub id: TransactionId,
    /// A text description of what the transaction was for.
    pub text: String,
    /// The amount of money earned (positive) or spent (negative).
    ///
    /// Missing or non-numeric amounts are read as zero.
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub amount: f64,
    /// When the store recorded the transaction.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// A validated transaction that has not been stored yet.
///
/// The store assigns the ID and creation time on insertion.
/// Create one by validating a [crate::transaction::TransactionForm].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTransaction {
    pub(crate) text: String,
    pub(crate) amount: f64,
}

impl NewTransaction {
    /// The description of the transaction.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The signed amount of the transaction.
    pub fn amount(&self) -> f64 {
        self.amount
    }
}

/// Read an amount the way the dashboard reads it: numbers as-is, numeric
/// strings parsed (PostgREST sends `numeric` columns as strings), and
/// everything else, including infinities, as zero.
fn deserialize_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let amount = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(text)) => text.trim().parse::<f64>().ok(),
        _ => None,
    };

    Ok(amount.filter(|amount| amount.is_finite()).unwrap_or(0.0))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use serde_json::json;
    use time::macros::datetime;

    use super::{Transaction, TransactionId};

    fn parse(value: serde_json::Value) -> Transaction {
        serde_json::from_value(value).expect("Could not parse transaction")
    }

    #[test]
    fn parses_hosted_store_row() {
        let transaction = parse(json!({
            "id": "0b6d8a38-5a0e-4b8f-9f56-2c1d7c1e9a41",
            "text": "Salaire",
            "amount": 1500.5,
            "created_at": "2025-03-14T09:26:53.589793+00:00",
            "user_id": "user-1"
        }));

        assert_eq!(
            transaction.id,
            TransactionId::new("0b6d8a38-5a0e-4b8f-9f56-2c1d7c1e9a41")
        );
        assert_eq!(transaction.text, "Salaire");
        assert_eq!(transaction.amount, 1500.5);
        assert_eq!(
            transaction.created_at,
            datetime!(2025-03-14 09:26:53.589793 UTC)
        );
    }

    #[test]
    fn integer_id_is_read_as_string() {
        let transaction = parse(json!({
            "id": 42,
            "text": "Café",
            "amount": -3,
            "created_at": "2025-03-14T09:26:53Z"
        }));

        assert_eq!(transaction.id.as_str(), "42");
        assert_eq!(transaction.amount, -3.0);
    }

    #[test]
    fn numeric_string_amount_is_parsed() {
        let transaction = parse(json!({
            "id": "a",
            "text": "Loyer",
            "amount": "-750.25",
            "created_at": "2025-03-14T09:26:53Z"
        }));

        assert_eq!(transaction.amount, -750.25);
    }

    #[test]
    fn non_numeric_amounts_are_zero() {
        let cases = [
            json!("douze"),
            json!(null),
            json!(true),
            json!([1, 2]),
            json!("NaN"),
            json!("inf"),
            json!("-infinity"),
            json!("1e999"),
        ];

        for amount in cases {
            let transaction = parse(json!({
                "id": "a",
                "text": "?",
                "amount": amount.clone(),
                "created_at": "2025-03-14T09:26:53Z"
            }));

            assert_eq!(transaction.amount, 0.0, "amount {amount} should be read as 0");
        }
    }

    #[test]
    fn missing_amount_is_zero() {
        let transaction = parse(json!({
            "id": "a",
            "text": "?",
            "created_at": "2025-03-14T09:26:53Z"
        }));

        assert_eq!(transaction.amount, 0.0);
    }

    #[test]
    fn rejects_object_id() {
        let result = serde_json::from_value::<Transaction>(json!({
            "id": {"nested": 1},
            "text": "?",
            "amount": 1,
            "created_at": "2025-03-14T09:26:53Z"
        }));

        assert!(result.is_err());
    }
}
