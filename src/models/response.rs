use std::collections::HashSet;

use serde::Deserialize;

use super::{Balance, Transaction};

/// Wire payload of `GET transactions`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Response {
    pub balance: Balance,
    pub transactions: Vec<Transaction>,
}

impl Response {
    /// Parse and validate a raw JSON body.
    ///
    /// Serde rejects missing fields and unknown transaction types; `validate`
    /// then checks the invariants serde can't express.
    pub fn from_json(body: &str) -> Result<Self, String> {
        let response: Response = serde_json::from_str(body).map_err(|e| e.to_string())?;
        response.validate()?;
        Ok(response)
    }

    /// Every transaction id must be non-empty and unique within the response.
    pub fn validate(&self) -> Result<(), String> {
        let mut seen = HashSet::with_capacity(self.transactions.len());
        for (i, txn) in self.transactions.iter().enumerate() {
            if txn.id.trim().is_empty() {
                return Err(format!("transaction #{i} has an empty id"));
            }
            if !seen.insert(txn.id.as_str()) {
                return Err(format!("duplicate transaction id '{}'", txn.id));
            }
        }
        Ok(())
    }
}
