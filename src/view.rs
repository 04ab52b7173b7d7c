use tracing::debug;

use crate::format::{format_amount, format_date, CurrencyFormat};
use crate::models::{Response, Transaction};

/// Prefix shown before the price of an outcome row.
pub(crate) const OUTCOME_MARKER: &str = "- ";

pub(crate) const TABLE_HEADERS: [&str; 4] = ["Title", "Price", "Category", "Date"];

/// A transaction with its display strings already computed.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DisplayTransaction {
    pub(crate) transaction: Transaction,
    pub(crate) formatted_value: String,
    pub(crate) formatted_date: String,
}

impl DisplayTransaction {
    pub(crate) fn new(transaction: Transaction, fmt: &CurrencyFormat) -> Self {
        let formatted_value = format_amount(transaction.value, fmt);
        let formatted_date = format_date(&transaction.created_at);
        Self {
            transaction,
            formatted_value,
            formatted_date,
        }
    }

    /// Price cell text: the formatted value, marked when it is an outcome.
    pub(crate) fn price_cell(&self) -> String {
        if self.transaction.is_outcome() {
            format!("{OUTCOME_MARKER}{}", self.formatted_value)
        } else {
            self.formatted_value.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FormattedBalance {
    pub(crate) income: String,
    pub(crate) outcome: String,
    pub(crate) total: String,
}

/// Everything the dashboard shows for one successful fetch.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Dashboard {
    pub(crate) balance: FormattedBalance,
    pub(crate) transactions: Vec<DisplayTransaction>,
}

/// Run the formatter pass over a fetched response.
///
/// Order and count of transactions are preserved; type is not inspected here.
pub(crate) fn format_response(response: Response, fmt: &CurrencyFormat) -> Dashboard {
    let balance = FormattedBalance {
        income: format_amount(response.balance.income, fmt),
        outcome: format_amount(response.balance.outcome, fmt),
        total: format_amount(response.balance.total, fmt),
    };

    let transactions: Vec<DisplayTransaction> = response
        .transactions
        .into_iter()
        .map(|txn| DisplayTransaction::new(txn, fmt))
        .collect();

    debug!(rows = transactions.len(), currency = fmt.code, "formatted response");

    Dashboard {
        balance,
        transactions,
    }
}

/// Cell text for each table row, in display order.
pub(crate) fn table_rows(transactions: &[DisplayTransaction]) -> Vec<[String; 4]> {
    transactions
        .iter()
        .map(|t| {
            [
                t.transaction.title.clone(),
                t.price_cell(),
                t.transaction.category.title.clone(),
                t.formatted_date.clone(),
            ]
        })
        .collect()
}
