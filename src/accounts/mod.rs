pub mod bank_account;
pub mod fields;
pub mod operand;

pub use bank_account::{Account, BANK_ADDRESS, RICH_THRESHOLD};
pub use fields::{FieldValue, Fields, Key};
pub use operand::Operand;
