//! Statement exporter
//!
//! Pure transformation of the current profile and transaction list into a
//! paginated plain-text account statement. No network, no state.

use chrono::{DateTime, Utc};

use crate::models::{Transaction, UserProfile};
use crate::utils::{format_amount, format_signed, Align, Paginator, Table};

const ROWS_PER_PAGE: usize = 25;
const PLACEHOLDER: &str = "--";

/// Build the statement document. The caller decides where it goes (file,
/// stdout, download).
pub fn build_statement(
    profile: &UserProfile,
    transactions: &[Transaction],
    generated_at: DateTime<Utc>,
) -> String {
    let opening_balance = opening_balance(transactions);

    let mut table = Table::with_aligns(
        vec!["Type", "Description", "Date", "Amount"],
        vec![Align::Left, Align::Left, Align::Left, Align::Right],
    );
    for tx in transactions {
        // A malformed amount renders a placeholder instead of aborting the export
        let amount = match tx.amount.value() {
            Some(value) => format_signed(value, tx.kind.is_credit()),
            None => PLACEHOLDER.to_string(),
        };
        table.add_row(vec![
            tx.kind.label().to_string(),
            tx.description.clone(),
            tx.occurred_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            amount,
        ]);
    }

    let indices: Vec<usize> = (0..table.row_count()).collect();
    let paginator = Paginator::new(indices, ROWS_PER_PAGE);
    let total_pages = paginator.total_pages().max(1);

    let mut doc = String::new();
    doc.push_str("WalletX Account Statement\n");
    doc.push_str("=========================\n\n");
    doc.push_str(&format!("Account Holder:  {}\n", profile.full_name));
    doc.push_str(&format!("Handle:          @{}\n", profile.username));
    doc.push_str(&format!("Opening Balance: {}\n", format_amount(opening_balance)));
    doc.push_str(&format!("Current Balance: {}\n", format_amount(profile.balance)));
    doc.push_str(&format!(
        "Generated on:    {}\n\n",
        generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    if paginator.is_empty() {
        doc.push_str("No transactions available.\n\n");
        doc.push_str(&footer(1, total_pages));
        return doc;
    }

    for (page_no, rows) in paginator.iter() {
        doc.push_str(&table.render_header());
        doc.push('\n');
        for &row in rows {
            if let Some(line) = table.render_body_row(row) {
                doc.push_str(&line);
                doc.push('\n');
            }
        }
        doc.push('\n');
        doc.push_str(&footer(page_no, total_pages));
        if page_no < total_pages {
            doc.push('\n');
        }
    }

    doc
}

/// Opening balance heuristic: the earliest credit's amount, scanning the list
/// sorted ascending. This approximates the true opening balance and is not a
/// ledger replay.
fn opening_balance(transactions: &[Transaction]) -> f64 {
    let mut ascending: Vec<&Transaction> = transactions.iter().collect();
    ascending.sort_by(|a, b| a.occurred_at.cmp(&b.occurred_at));

    ascending
        .iter()
        .find(|tx| tx.kind.is_credit())
        .and_then(|tx| tx.amount.value())
        .unwrap_or(0.0)
}

fn footer(page: usize, total: usize) -> String {
    format!(
        "Page {} of {} | This is an auto-generated statement from WalletX\n",
        page, total
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    use crate::api::wallet::models::{AmountField, TransactionRecord};
    use crate::models::sort_newest_first;

    fn profile() -> UserProfile {
        UserProfile {
            full_name: "Jane Doe".to_string(),
            username: "jane".to_string(),
            balance: 80.0,
            profile_picture: None,
            pin_is_set: true,
        }
    }

    fn tx(kind: &str, created_at: &str, amount: AmountField) -> Transaction {
        Transaction::from_record(TransactionRecord {
            kind: kind.to_string(),
            description: format!("{} entry", kind),
            created_at: created_at.to_string(),
            amount,
        })
    }

    fn generated_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_opening_balance_is_earliest_credit() {
        // Working list arrives newest-first; the heuristic must still find
        // the oldest credit
        let mut txs = vec![
            tx("debit", "2024-01-02T00:00:00Z", AmountField::Number(10.0)),
            tx("credit", "2024-01-05T00:00:00Z", AmountField::Number(500.0)),
            tx("credit", "2024-01-03T00:00:00Z", AmountField::Number(100.0)),
        ];
        sort_newest_first(&mut txs);

        let doc = build_statement(&profile(), &txs, generated_at());
        assert!(doc.contains("Opening Balance: NGN 100.00"));
        assert!(doc.contains("Current Balance: NGN 80.00"));
    }

    #[test]
    fn test_no_credit_means_zero_opening_balance() {
        let txs = vec![tx("debit", "2024-01-02T00:00:00Z", AmountField::Number(10.0))];
        let doc = build_statement(&profile(), &txs, generated_at());
        assert!(doc.contains("Opening Balance: NGN 0.00"));
    }

    #[test]
    fn test_amounts_are_kind_coded() {
        let txs = vec![
            tx("credit", "2024-01-01T00:00:00Z", AmountField::Number(100.0)),
            tx("debit", "2024-01-02T00:00:00Z", AmountField::Number(40.0)),
        ];
        let doc = build_statement(&profile(), &txs, generated_at());
        assert!(doc.contains("+NGN 100.00"));
        assert!(doc.contains("-NGN 40.00"));
    }

    #[test]
    fn test_malformed_amount_renders_placeholder() {
        let txs = vec![tx(
            "credit",
            "2024-01-01T00:00:00Z",
            AmountField::Text("twelve".to_string()),
        )];
        let doc = build_statement(&profile(), &txs, generated_at());
        assert!(doc.contains("--"));
        assert!(doc.contains("credit entry"));
    }

    #[test]
    fn test_footer_carries_page_index_and_total() {
        let txs: Vec<Transaction> = (1..=30)
            .map(|i| {
                tx(
                    "credit",
                    &format!("2024-01-{:02}T00:00:00Z", (i % 28) + 1),
                    AmountField::Number(1.0),
                )
            })
            .collect();

        let doc = build_statement(&profile(), &txs, generated_at());
        assert!(doc.contains("Page 1 of 2"));
        assert!(doc.contains("Page 2 of 2"));
    }

    #[test]
    fn test_empty_history_still_produces_a_statement() {
        let doc = build_statement(&profile(), &[], generated_at());
        assert!(doc.contains("No transactions available."));
        assert!(doc.contains("Page 1 of 1"));
    }
}
