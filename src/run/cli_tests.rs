use rust_decimal_macros::dec;

use super::render_summary;
use crate::format::CurrencyFormat;
use crate::models::{Balance, Category, Response, Transaction, TransactionType};
use crate::view::format_response;

fn txn(id: &str, title: &str, kind: TransactionType, category: &str) -> Transaction {
    Transaction {
        id: id.into(),
        title: title.into(),
        value: dec!(150),
        kind,
        category: Category {
            title: category.into(),
        },
        created_at: "2021-05-11 18:30:00.000".into(),
    }
}

#[test]
fn test_summary_cards_and_rows() {
    let dash = format_response(
        Response {
            balance: Balance {
                income: dec!(500),
                outcome: dec!(150),
                total: dec!(350),
            },
            transactions: vec![
                txn("1", "Salary", TransactionType::Income, "Job"),
                txn("2", "Groceries", TransactionType::Outcome, "Food"),
            ],
        },
        &CurrencyFormat::USD,
    );
    let out = render_summary(&dash);
    let lines: Vec<&str> = out.lines().collect();

    assert!(out.contains("Income:   $500.00"));
    assert!(out.contains("Outcome:  $150.00"));
    assert!(out.contains("Total:    $350.00"));

    let header = lines.iter().position(|l| l.starts_with("Title")).unwrap_or(usize::MAX);
    assert!(header < lines.len());
    assert!(lines[header + 2].starts_with("Salary"));
    assert!(lines[header + 3].starts_with("Groceries"));
    assert!(lines[header + 3].contains("- $150.00"));
    assert!(!lines[header + 2].contains("- $"));
    assert!(lines[header + 3].ends_with("11/05/2021"));
}

#[test]
fn test_summary_columns_align() {
    let dash = format_response(
        Response {
            balance: Balance::default(),
            transactions: vec![
                txn("1", "A", TransactionType::Income, "Job"),
                txn("2", "A much longer title", TransactionType::Outcome, "Food"),
            ],
        },
        &CurrencyFormat::BRL,
    );
    let out = render_summary(&dash);
    let date_cols: Vec<usize> = out
        .lines()
        .filter(|l| l.ends_with("11/05/2021"))
        .map(|l| l.chars().count())
        .collect();
    assert_eq!(date_cols.len(), 2);
    assert_eq!(date_cols[0], date_cols[1]);
}

#[test]
fn test_summary_without_transactions() {
    let dash = format_response(
        Response {
            balance: Balance::default(),
            transactions: Vec::new(),
        },
        &CurrencyFormat::BRL,
    );
    let out = render_summary(&dash);
    assert!(out.contains("Total:    R$ 0,00"));
    assert!(out.ends_with("No transactions\n"));
    assert!(!out.contains("Title"));
}
