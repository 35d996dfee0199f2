use::std::env;
use::std::process;

use env_logger;
use log::info;
use toy_bank_account::run;

fn main() {
    // Collect command-line arguments - an optional CSV file with owner,balance rows
    let args: Vec<String> = env::args().collect();
    if args.len() > 2 {
        eprintln!("Usage: {} [accounts.csv]", args[0]);
        process::exit(1);
    }
    let filename = args.get(1).map(String::as_str);
    // Initialize logger (respect RUST_LOG env var if set)
    env_logger::init();

    info!("starting bank account demo with file: {:?}", filename);

    if let Err(e) = run(filename) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
