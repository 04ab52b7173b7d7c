mod balance;
mod response;
mod transaction;

pub use balance::Balance;
pub use response::Response;
pub use transaction::{Category, Transaction, TransactionType};
