pub mod orchestrator;
pub mod accounts;
pub mod error;

pub use orchestrator::run;
pub use accounts::{Account, FieldValue, Key, Operand, BANK_ADDRESS};
pub use error::AccountError;
