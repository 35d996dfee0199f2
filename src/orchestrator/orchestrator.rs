use std::error::Error;
use std::fs::File;
use std::io::{self, Read, Write};

use csv::{ReaderBuilder, Writer};
use log::{debug, info};

use crate::accounts::Account;

/// Accounts used when no CSV file is given.
pub fn sample_accounts() -> Vec<Account> {
    vec![
        Account::new("Alice", 800.0),
        Account::new("Bob", 1200.0),
        Account::new("Alice", 800.0),
        Account::new("Charlie", 300.0),
    ]
}

/// Read accounts from CSV with an `owner,balance` header.
pub fn load_accounts<R: Read>(reader: R) -> Result<Vec<Account>, Box<dyn Error>> {
    let mut rdr = ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let mut accounts = Vec::new();
    for result in rdr.deserialize() {
        let account: Account = result?;
        debug!("loaded {}", account);
        accounts.push(account);
    }

    Ok(accounts)
}

/// Print every account operation over the first four accounts.
pub fn demonstrate<W: Write>(accounts: &[Account], out: &mut W) -> Result<(), Box<dyn Error>> {
    let [acc1, acc2, acc3, acc4, ..] = accounts else {
        return Err(format!("need at least 4 accounts, got {}", accounts.len()).into());
    };

    debug!("representation");
    writeln!(out, "Accounts:")?;
    for account in [acc1, acc2, acc3] {
        writeln!(out, "{}", account)?;
    }

    debug!("equality");
    writeln!(out, "\nEquality:")?;
    writeln!(out, "acc1 == acc3: {}", acc1.equals(acc3)?)?;
    writeln!(out, "acc1 == acc2: {}", acc1.equals(acc2)?)?;
    writeln!(out, "acc1 == {:?}: {}", acc1.balance(), acc1.equals(acc1.balance())?)?;
    writeln!(
        out,
        "acc1 == ({:?}, {:?}): {}",
        acc1.owner(),
        acc1.balance(),
        acc1.equals((acc1.owner(), acc1.balance()))?
    )?;

    writeln!(out, "\nInequality:")?;
    writeln!(out, "acc1 != acc2: {}", acc1.not_equals(acc2)?)?;

    debug!("ordering");
    writeln!(out, "\nGreater Than:")?;
    writeln!(out, "acc2 > acc1: {}", acc2.greater_than(acc1)?)?;
    writeln!(out, "acc4 > acc1: {}", acc4.greater_than(acc1)?)?;

    writeln!(out, "\nOther comparisons:")?;
    writeln!(out, "acc1 < acc2: {}", acc1.less_than(acc2)?)?;
    writeln!(out, "acc2 >= acc1: {}", acc2.greater_or_equal(acc1)?)?;
    writeln!(out, "acc4 <= acc1: {}", acc4.less_or_equal(acc1)?)?;

    debug!("arithmetic");
    writeln!(out, "\nAdd:")?;
    writeln!(out, "acc1 + acc3: {:?}", acc1.checked_add(acc3)?)?;
    writeln!(out, "acc1 + acc2: {:?}", acc1.checked_add(acc2)?)?;
    writeln!(out, "acc1 + 200: {:?}", acc1.checked_add(200)?)?;

    writeln!(out, "\nSubtract:")?;
    writeln!(out, "acc2 - acc1: {:?}", acc2.checked_sub(acc1)?)?;
    writeln!(out, "acc2 - 500: {:?}", acc2.checked_sub(500)?)?;

    debug!("keyed access");
    writeln!(out, "\nGet item:")?;
    writeln!(out, "acc1['owner']: {}", acc1.get("owner")?)?;
    writeln!(out, "acc1[1]: {}", acc1.get(1)?)?;

    writeln!(out, "\nIterating acc1:")?;
    for (label, value) in acc1 {
        writeln!(out, "({:?}, {})", label, value)?;
    }

    writeln!(out, "\nLength of acc1: {}", acc1.length()?)?;
    writeln!(out, "\nBank address: {}", Account::bank_address())?;
    writeln!(
        out,
        "\nHighest balance: {:?}",
        Account::highest_balance(acc1, acc2, acc4)?
    )?;

    Ok(())
}

/// Write a CSV summary of the accounts.
pub fn write_summary<W: Write>(accounts: &[Account], out: W) -> Result<(), Box<dyn Error>> {
    let mut wtr = Writer::from_writer(out);
    wtr.write_record(["owner", "balance", "rich", "length"])?;

    for account in accounts {
        wtr.serialize((
            account.owner(),
            account.balance(),
            account.is_rich(),
            account.length()?,
        ))?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn run(filename: Option<&str>) -> Result<(), Box<dyn Error>> {
    let accounts = match filename {
        Some(filename) => {
            info!("loading accounts from {}", filename);
            load_accounts(File::open(filename)?)?
        }
        None => sample_accounts(),
    };
    info!("demonstrating with {} accounts", accounts.len());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    demonstrate(&accounts, &mut out)?;
    writeln!(out, "\nSummary:")?;
    write_summary(&accounts, &mut out)?;

    Ok(())
}

/// ------------------------
/// Inline Unit Tests
/// ------------------------
#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AccountError;

    fn render(accounts: &[Account]) -> String {
        let mut out = Vec::new();
        demonstrate(accounts, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_load_accounts() {
        let data = "owner, balance\nAlice, 800.0\n Bob ,1200\nEve,-5.25\n";
        let accounts = load_accounts(data.as_bytes()).unwrap();

        assert_eq!(accounts.len(), 3);
        assert_eq!(accounts[0], Account::new("Alice", 800.0));
        assert_eq!(accounts[1], Account::new("Bob", 1200.0));
        assert_eq!(accounts[2].balance(), -5.25);
    }

    #[test]
    fn test_load_accounts_rejects_bad_balance() {
        let data = "owner,balance\nAlice,lots\n";
        assert!(load_accounts(data.as_bytes()).is_err());
    }

    #[test]
    fn test_demonstrate_sample_accounts() {
        let output = render(&sample_accounts());

        assert!(output.starts_with("Accounts:\nAccount (Alice 800.0)\nAccount (Bob 1200.0)\n"));
        assert!(output.contains("acc1 == acc3: true"));
        assert!(output.contains("acc1 == acc2: false"));
        assert!(output.contains("acc1 == 800.0: true"));
        assert!(output.contains("acc1 == (\"Alice\", 800.0): true"));
        assert!(output.contains("acc1 != acc2: true"));
        assert!(output.contains("acc2 > acc1: true"));
        assert!(output.contains("acc4 > acc1: false"));
        assert!(output.contains("acc1 < acc2: true"));
        assert!(output.contains("acc2 >= acc1: true"));
        assert!(output.contains("acc4 <= acc1: true"));
        assert!(output.contains("acc1 + acc3: 1600.0"));
        assert!(output.contains("acc1 + acc2: 2000.0"));
        assert!(output.contains("acc1 + 200: 1000.0"));
        assert!(output.contains("acc2 - acc1: 400.0"));
        assert!(output.contains("acc2 - 500: 700.0"));
        assert!(output.contains("acc1['owner']: Alice"));
        assert!(output.contains("acc1[1]: 800.0"));
        assert!(output.contains("(\"owner\", Alice)\n(\"balance\", 800.0)"));
        assert!(output.contains("Length of acc1: 800"));
        assert!(output.contains("Bank address: 1 Allenby St, Tel Aviv"));
        assert!(output.ends_with("Highest balance: 1200.0\n"));
    }

    #[test]
    fn test_demonstrate_needs_four_accounts() {
        let accounts = &sample_accounts()[..3];
        let mut out = Vec::new();
        let err = demonstrate(accounts, &mut out).unwrap_err();
        assert_eq!(err.to_string(), "need at least 4 accounts, got 3");
    }

    #[test]
    fn test_demonstrate_propagates_invalid_comparison() {
        let mut accounts = sample_accounts();
        accounts[1].set_balance(f64::NAN);
        let mut out = Vec::new();
        let err = demonstrate(&accounts, &mut out).unwrap_err();
        assert_eq!(
            err.downcast_ref::<AccountError>(),
            Some(&AccountError::InvalidComparison)
        );
    }

    #[test]
    fn test_write_summary_rejects_nan_balance() {
        let accounts = load_accounts("owner,balance\nEve,NaN\n".as_bytes()).unwrap();
        assert!(accounts[0].balance().is_nan());

        let mut out = Vec::new();
        let err = write_summary(&accounts, &mut out).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AccountError>(),
            Some(AccountError::InvalidLength(balance)) if balance.is_nan()
        ));
    }

    #[test]
    fn test_demonstrate_rejects_infinite_length() {
        let mut accounts = sample_accounts();
        accounts[0].set_balance(f64::INFINITY);
        let mut out = Vec::new();
        let err = demonstrate(&accounts, &mut out).unwrap_err();
        assert_eq!(
            err.downcast_ref::<AccountError>(),
            Some(&AccountError::InvalidLength(f64::INFINITY))
        );
    }

    #[test]
    fn test_write_summary() {
        let accounts = vec![
            Account::new("Alice", 800.0),
            Account::new("Rich", 2_000_000.5),
        ];
        let mut out = Vec::new();
        write_summary(&accounts, &mut out).unwrap();

        let csv = String::from_utf8(out).unwrap();
        assert_eq!(
            csv,
            "owner,balance,rich,length\nAlice,800.0,false,800\nRich,2000000.5,true,2000000\n"
        );
    }
}
