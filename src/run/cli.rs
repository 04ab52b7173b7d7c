use std::fmt::Write as _;

use anyhow::{Context, Result};
use tokio::runtime::Builder;
use tracing::info;

use crate::api::ApiClient;
use crate::config::{Config, ENV_API_URL, ENV_CURRENCY, ENV_TOKEN};
use crate::view::{format_response, table_rows, Dashboard, TABLE_HEADERS};

pub(crate) fn as_cli(args: &[String], config: &Config) -> Result<()> {
    match args[0].as_str() {
        "summary" | "s" => cli_summary(config),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("cashboard {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("Cashboard - income/outcome dashboard for a transactions service");
    println!();
    println!("Usage: cashboard [options] [command]");
    println!();
    println!("Commands:");
    println!("  (none)                  Launch interactive dashboard");
    println!("  summary, s              Fetch once and print the dashboard");
    println!("  --help, -h              Show this help");
    println!("  --version, -V           Show version");
    println!();
    println!("Options:");
    println!("  --api-url <url>         Backend base URL (env {ENV_API_URL})");
    println!("  --currency <code>       brl, usd or eur (env {ENV_CURRENCY})");
    println!("  --token <token>         Bearer token (env {ENV_TOKEN})");
}

fn cli_summary(config: &Config) -> Result<()> {
    let client = ApiClient::new(config.api_url.clone(), config.token.clone());
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let response = runtime
        .block_on(client.fetch_transactions())
        .with_context(|| format!("Failed to load transactions from {}", config.api_url))?;

    let dashboard = format_response(response, &config.currency);
    info!(rows = dashboard.transactions.len(), "printing summary");
    print!("{}", render_summary(&dashboard));
    Ok(())
}

/// Plain-text dashboard: the three cards, then the transactions table.
pub(crate) fn render_summary(dashboard: &Dashboard) -> String {
    let mut out = String::new();
    let b = &dashboard.balance;

    let _ = writeln!(out, "Cashboard");
    let _ = writeln!(out, "{}", "─".repeat(40));
    let _ = writeln!(out, "  Income:   {}", b.income);
    let _ = writeln!(out, "  Outcome:  {}", b.outcome);
    let _ = writeln!(out, "  Total:    {}", b.total);
    let _ = writeln!(out);

    let rows = table_rows(&dashboard.transactions);
    if rows.is_empty() {
        let _ = writeln!(out, "No transactions");
        return out;
    }

    let mut widths = TABLE_HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let line = |cells: [&str; 4]| {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths)
            .map(|(cell, w)| format!("{cell:<w$}"))
            .collect();
        padded.join("  ").trim_end().to_string()
    };

    let _ = writeln!(out, "{}", line(TABLE_HEADERS));
    let _ = writeln!(out, "{}", "─".repeat(widths.iter().sum::<usize>() + 6));
    for row in &rows {
        let [title, price, category, date] = row;
        let _ = writeln!(out, "{}", line([title, price, category, date].map(String::as_str)));
    }
    out
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
