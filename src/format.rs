use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::{Decimal, RoundingStrategy};

/// Timestamp layout the backend uses for `created_at`.
pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";
pub(crate) const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";
pub(crate) const INVALID_DATE: &str = "Invalid date";

/// How a currency amount is written for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CurrencyFormat {
    pub(crate) code: &'static str,
    pub(crate) symbol: &'static str,
    /// Space between symbol and digits (`R$ 10,00` vs `$10.00`).
    pub(crate) spaced: bool,
    pub(crate) group_sep: char,
    pub(crate) decimal_sep: char,
}

impl CurrencyFormat {
    pub(crate) const BRL: Self = Self {
        code: "brl",
        symbol: "R$",
        spaced: true,
        group_sep: '.',
        decimal_sep: ',',
    };

    pub(crate) const USD: Self = Self {
        code: "usd",
        symbol: "$",
        spaced: false,
        group_sep: ',',
        decimal_sep: '.',
    };

    pub(crate) const EUR: Self = Self {
        code: "eur",
        symbol: "€",
        spaced: false,
        group_sep: '.',
        decimal_sep: ',',
    };

    pub(crate) fn all() -> &'static [CurrencyFormat] {
        &[Self::BRL, Self::USD, Self::EUR]
    }

    /// Look up a preset by its code, case-insensitively.
    pub(crate) fn from_code(code: &str) -> Option<Self> {
        let lower = code.trim().to_ascii_lowercase();
        Self::all().iter().copied().find(|f| f.code == lower)
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::BRL
    }
}

/// Format a decimal amount with thousand separators and 2 decimal places.
/// e.g. `1234567.89` → `"R$ 1.234.567,89"` with [`CurrencyFormat::BRL`].
pub(crate) fn format_amount(val: Decimal, fmt: &CurrencyFormat) -> String {
    let rounded = val.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let formatted = format!("{:.2}", rounded.abs());
    let mut parts = formatted.split('.');
    let int_part = parts.next().unwrap_or("0");
    let dec_part = parts.next().unwrap_or("00");

    let grouped: String = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(&fmt.group_sep.to_string());

    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    let space = if fmt.spaced { " " } else { "" };
    format!(
        "{sign}{}{space}{grouped}{}{dec_part}",
        fmt.symbol, fmt.decimal_sep
    )
}

/// Parse a backend timestamp into its calendar date.
///
/// Accepts the backend's own layout, RFC 3339, and anything starting with a
/// `YYYY-MM-DD` date.
pub(crate) fn parse_timestamp(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT) {
        return Some(dt.date());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    raw.get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
}

/// Format a backend timestamp as `DD/MM/YYYY`, or [`INVALID_DATE`].
pub(crate) fn format_date(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(date) => date.format(DISPLAY_DATE_FORMAT).to_string(),
        None => INVALID_DATE.to_string(),
    }
}
