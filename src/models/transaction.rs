//! Transaction models and the derived cash flow summary

use chrono::{DateTime, TimeZone, Utc};
use tracing::warn;

use crate::api::wallet::models::TransactionRecord;

/// Credit increases the balance, debit decreases it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Credit,
    Debit,
}

impl TransactionKind {
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Credit => "Credit",
            TransactionKind::Debit => "Debit",
        }
    }

    pub fn is_credit(&self) -> bool {
        matches!(self, TransactionKind::Credit)
    }
}

/// A transaction amount; malformed server values are flagged rather than
/// dropped so the row still shows up in listings and statements
#[derive(Debug, Clone, PartialEq)]
pub enum Amount {
    Valid(f64),
    Invalid(String),
}

impl Amount {
    pub fn value(&self) -> Option<f64> {
        match self {
            Amount::Valid(v) => Some(*v),
            Amount::Invalid(_) => None,
        }
    }
}

/// An immutable ledger entry as held by the dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub kind: TransactionKind,
    pub description: String,
    pub occurred_at: DateTime<Utc>,
    pub amount: Amount,
}

impl Transaction {
    /// Normalize a wire record. Any `type` other than `"credit"` counts as a
    /// debit; an unparseable timestamp sorts to the very end of the history.
    pub fn from_record(record: TransactionRecord) -> Self {
        let kind = if record.kind == "credit" {
            TransactionKind::Credit
        } else {
            TransactionKind::Debit
        };

        let occurred_at = match DateTime::parse_from_rfc3339(&record.created_at) {
            Ok(dt) => dt.with_timezone(&Utc),
            Err(e) => {
                warn!("Unparseable transaction date {:?}: {}", record.created_at, e);
                Utc.timestamp_opt(0, 0).single().unwrap_or_default()
            }
        };

        let amount = match record.amount.parse() {
            Some(value) => Amount::Valid(value),
            None => Amount::Invalid(record.amount.raw()),
        };

        Transaction {
            kind,
            description: record.description,
            occurred_at,
            amount,
        }
    }
}

/// Sort the working list by `occurred_at` descending, newest first
pub fn sort_newest_first(transactions: &mut [Transaction]) {
    transactions.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at));
}

/// Derived inflow/outflow totals, recomputed whenever the working list changes.
/// Each transaction contributes to exactly one side; malformed amounts
/// contribute to neither.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CashFlowSummary {
    pub total_inflow: f64,
    pub total_outflow: f64,
}

impl CashFlowSummary {
    pub fn of(transactions: &[Transaction]) -> Self {
        let mut summary = CashFlowSummary::default();
        for tx in transactions {
            if let Some(amount) = tx.amount.value() {
                match tx.kind {
                    TransactionKind::Credit => summary.total_inflow += amount,
                    TransactionKind::Debit => summary.total_outflow += amount,
                }
            }
        }
        summary
    }
}

/// Recipient and amount captured from the send-money form, held only until
/// PIN confirmation completes or is abandoned
#[derive(Debug, Clone, PartialEq)]
pub struct PendingTransfer {
    pub recipient: String,
    pub amount: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::wallet::models::AmountField;

    fn record(kind: &str, created_at: &str, amount: AmountField) -> TransactionRecord {
        TransactionRecord {
            kind: kind.to_string(),
            description: "test".to_string(),
            created_at: created_at.to_string(),
            amount,
        }
    }

    #[test]
    fn test_unknown_kind_counts_as_debit() {
        let tx = Transaction::from_record(record(
            "transfer",
            "2024-01-01T00:00:00Z",
            AmountField::Number(5.0),
        ));
        assert_eq!(tx.kind, TransactionKind::Debit);
    }

    #[test]
    fn test_malformed_amount_is_flagged() {
        let tx = Transaction::from_record(record(
            "credit",
            "2024-01-01T00:00:00Z",
            AmountField::Text("n/a".to_string()),
        ));
        assert_eq!(tx.amount, Amount::Invalid("n/a".to_string()));
        assert_eq!(tx.amount.value(), None);
    }

    #[test]
    fn test_unparseable_date_falls_back_to_epoch() {
        let tx = Transaction::from_record(record("credit", "yesterday", AmountField::Number(1.0)));
        assert_eq!(tx.occurred_at, Utc.timestamp_opt(0, 0).unwrap());
    }

    #[test]
    fn test_sort_newest_first() {
        let mut txs = vec![
            Transaction::from_record(record("credit", "2024-01-01T00:00:00Z", AmountField::Number(100.0))),
            Transaction::from_record(record("debit", "2024-01-03T00:00:00Z", AmountField::Number(40.0))),
            Transaction::from_record(record("credit", "2024-01-02T00:00:00Z", AmountField::Number(20.0))),
        ];
        sort_newest_first(&mut txs);

        let days: Vec<u32> = txs
            .iter()
            .map(|t| chrono::Datelike::day(&t.occurred_at))
            .collect();
        assert_eq!(days, vec![3, 2, 1]);
    }

    #[test]
    fn test_cash_flow_counts_each_transaction_once() {
        let txs = vec![
            Transaction::from_record(record("credit", "2024-01-01T00:00:00Z", AmountField::Number(100.0))),
            Transaction::from_record(record("debit", "2024-01-03T00:00:00Z", AmountField::Number(40.0))),
            Transaction::from_record(record("credit", "2024-01-02T00:00:00Z", AmountField::Number(20.0))),
        ];
        let summary = CashFlowSummary::of(&txs);
        assert_eq!(summary.total_inflow, 120.0);
        assert_eq!(summary.total_outflow, 40.0);
    }

    #[test]
    fn test_cash_flow_skips_malformed_amounts() {
        let txs = vec![
            Transaction::from_record(record("credit", "2024-01-01T00:00:00Z", AmountField::Number(10.0))),
            Transaction::from_record(record(
                "credit",
                "2024-01-02T00:00:00Z",
                AmountField::Text("oops".to_string()),
            )),
        ];
        let summary = CashFlowSummary::of(&txs);
        assert_eq!(summary.total_inflow, 10.0);
        assert_eq!(summary.total_outflow, 0.0);
    }
}
