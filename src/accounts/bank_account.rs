use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use crate::accounts::fields::{BALANCE_LABEL, FieldValue, Fields, Key, OWNER_LABEL};
use crate::accounts::operand::Operand;
use crate::error::AccountError;

/// Address of the bank, shared by every account.
pub const BANK_ADDRESS: &str = "1 Allenby St, Tel Aviv";

/// Balance above which an account counts as rich.
pub const RICH_THRESHOLD: f64 = 1_000_000.0;

#[derive(Clone, Serialize, Deserialize)]
pub struct Account {
    owner: String,
    balance: f64,
}

impl Account {
    pub fn new(owner: impl Into<String>, balance: f64) -> Self {
        Self {
            owner: owner.into(),
            balance,
        }
    }

    pub fn bank_address() -> &'static str {
        BANK_ADDRESS
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn set_owner(&mut self, owner: impl Into<String>) {
        self.owner = owner.into();
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn set_balance(&mut self, balance: f64) {
        self.balance = balance;
    }

    pub fn is_rich(&self) -> bool {
        self.balance > RICH_THRESHOLD
    }

    /// Balance plus another account's balance or a number.
    pub fn checked_add<'a>(&self, other: impl Into<Operand<'a>>) -> Result<f64, AccountError> {
        match other.into() {
            Operand::Account(other) => Ok(self.balance + other.balance),
            Operand::Number(value) => Ok(self.balance + value),
            operand => Err(AccountError::unsupported("+", operand.kind())),
        }
    }

    /// Balance minus another account's balance or a number.
    pub fn checked_sub<'a>(&self, other: impl Into<Operand<'a>>) -> Result<f64, AccountError> {
        match other.into() {
            Operand::Account(other) => Ok(self.balance - other.balance),
            Operand::Number(value) => Ok(self.balance - value),
            operand => Err(AccountError::unsupported("-", operand.kind())),
        }
    }

    /// Accounts are equal when owner and balance match, a number when it equals
    /// the balance, and an (owner, balance) pair when both components match.
    pub fn equals<'a>(&self, other: impl Into<Operand<'a>>) -> Result<bool, AccountError> {
        match other.into() {
            Operand::Account(other) => Ok(self == other),
            Operand::Number(value) => Ok(self.balance == value),
            Operand::Pair(owner, balance) => Ok(self.owner == owner && self.balance == balance),
            operand => Err(AccountError::unsupported("==", operand.kind())),
        }
    }

    pub fn not_equals<'a>(&self, other: impl Into<Operand<'a>>) -> Result<bool, AccountError> {
        match other.into() {
            operand @ (Operand::Account(_) | Operand::Number(_) | Operand::Pair(_, _)) => {
                Ok(!self.equals(operand)?)
            }
            operand => Err(AccountError::unsupported("!=", operand.kind())),
        }
    }

    pub fn greater_than<'a>(&self, other: impl Into<Operand<'a>>) -> Result<bool, AccountError> {
        let other = Self::ordered_against(other.into(), ">")?;
        Ok(self.balance > other.balance)
    }

    pub fn greater_or_equal<'a>(&self, other: impl Into<Operand<'a>>) -> Result<bool, AccountError> {
        let other = Self::ordered_against(other.into(), ">=")?;
        Ok(self.greater_than(other)? || self.equals(other)?)
    }

    /// Negation of [`Account::greater_or_equal`]. Two different accounts holding
    /// the same balance are therefore "less than" each other.
    ///
    /// Not interchangeable with the `<` operator: `PartialOrd` leaves such a
    /// pair unordered, so `a < d` is `false` where `a.less_than(&d)` is `Ok(true)`.
    pub fn less_than<'a>(&self, other: impl Into<Operand<'a>>) -> Result<bool, AccountError> {
        let other = Self::ordered_against(other.into(), "<")?;
        Ok(!self.greater_or_equal(other)?)
    }

    pub fn less_or_equal<'a>(&self, other: impl Into<Operand<'a>>) -> Result<bool, AccountError> {
        let other = Self::ordered_against(other.into(), "<=")?;
        Ok(self.less_than(other)? || self.equals(other)?)
    }

    fn ordered_against<'a>(
        operand: Operand<'a>,
        operation: &'static str,
    ) -> Result<&'a Account, AccountError> {
        match operand {
            Operand::Account(account) => Ok(account),
            operand => Err(AccountError::unsupported(operation, operand.kind())),
        }
    }

    /// Balance rounded to the nearest integer, ties to even.
    ///
    /// Fails with `InvalidLength` for NaN, infinite balances and balances
    /// outside the `i64` range.
    pub fn length(&self) -> Result<i64, AccountError> {
        let rounded = self.balance.round_ties_even();
        // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive.
        if rounded.is_nan() || rounded < i64::MIN as f64 || rounded >= i64::MAX as f64 {
            return Err(AccountError::InvalidLength(self.balance));
        }
        Ok(rounded as i64)
    }

    /// Field by label (`"owner"`, `"balance"`) or position (`0`, `1`).
    pub fn get<'k>(&self, key: impl Into<Key<'k>>) -> Result<FieldValue<'_>, AccountError> {
        match key.into() {
            Key::Label(OWNER_LABEL) | Key::Position(0) => Ok(FieldValue::Owner(&self.owner)),
            Key::Label(BALANCE_LABEL) | Key::Position(1) => Ok(FieldValue::Balance(self.balance)),
            key => Err(AccountError::InvalidKey(key.to_string())),
        }
    }

    pub fn iter(&self) -> Fields<'_> {
        Fields::new(self)
    }

    /// Highest of the three balances.
    ///
    /// Fails with `InvalidComparison` when no balance is at least as large as the
    /// other two, which only happens when one of them is NaN.
    pub fn highest_balance(
        first: &Account,
        second: &Account,
        third: &Account,
    ) -> Result<f64, AccountError> {
        let balances = [first.balance, second.balance, third.balance];
        if balances.iter().any(|balance| balance.is_nan()) {
            return Err(AccountError::InvalidComparison);
        }
        Ok(balances.into_iter().fold(f64::NEG_INFINITY, f64::max))
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Account ({} {:?})", self.owner, self.balance)
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl PartialEq for Account {
    fn eq(&self, other: &Self) -> bool {
        self.owner == other.owner && self.balance == other.balance
    }
}

impl PartialEq<f64> for Account {
    fn eq(&self, other: &f64) -> bool {
        self.balance == *other
    }
}

impl<'a> PartialEq<(&'a str, f64)> for Account {
    fn eq(&self, (owner, balance): &(&'a str, f64)) -> bool {
        self.owner == *owner && self.balance == *balance
    }
}

// Equal accounts compare Equal, the rest order by balance. Different owners on
// the same balance have no ordering, unlike `less_than`, which calls them less.
impl PartialOrd for Account {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }
        match self.balance.partial_cmp(&other.balance)? {
            Ordering::Equal => None,
            ordering => Some(ordering),
        }
    }
}

impl Add<&Account> for &Account {
    type Output = f64;

    fn add(self, other: &Account) -> f64 {
        self.balance + other.balance
    }
}

impl Add<f64> for &Account {
    type Output = f64;

    fn add(self, other: f64) -> f64 {
        self.balance + other
    }
}

impl Sub<&Account> for &Account {
    type Output = f64;

    fn sub(self, other: &Account) -> f64 {
        self.balance - other.balance
    }
}

impl Sub<f64> for &Account {
    type Output = f64;

    fn sub(self, other: f64) -> f64 {
        self.balance - other
    }
}

impl<'a> IntoIterator for &'a Account {
    type Item = (&'static str, FieldValue<'a>);
    type IntoIter = Fields<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
