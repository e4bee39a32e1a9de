pub mod balance;
pub mod error;
pub mod exchange;
pub mod ids;
pub mod ledger;
pub mod routes;
pub mod schemas;
pub mod settings;
pub mod summary;
pub mod validation;

pub use balance::{compute_balances, Balances};
pub use error::{Result, SplitError};
pub use exchange::{calculate_balances, reduce_to_transfers, Transfer};
