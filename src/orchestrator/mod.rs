pub mod orchestrator;

pub use orchestrator::{demonstrate, load_accounts, run, sample_accounts, write_summary};
