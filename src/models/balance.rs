use rust_decimal::Decimal;
use serde::Deserialize;

/// Aggregate amounts for the fetched period, as computed by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct Balance {
    pub income: Decimal,
    pub outcome: Decimal,
    pub total: Decimal,
}
