use crate::accounts::bank_account::Account;

/// Right-hand value of an arithmetic, equality or ordering call on an [`Account`].
///
/// `Text` and `Nothing` are never accepted; they exist so callers holding such
/// values get an `UnsupportedOperand` error instead of a silent answer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand<'a> {
    Account(&'a Account),
    Number(f64),
    /// Ordered (owner, balance) pair.
    Pair(&'a str, f64),
    Text(&'a str),
    Nothing,
}

impl Operand<'_> {
    pub fn kind(&self) -> &'static str {
        match self {
            Operand::Account(_) => "account",
            Operand::Number(_) => "number",
            Operand::Pair(_, _) => "pair",
            Operand::Text(_) => "text",
            Operand::Nothing => "nothing",
        }
    }
}

impl<'a> From<&'a Account> for Operand<'a> {
    fn from(account: &'a Account) -> Self {
        Operand::Account(account)
    }
}

impl From<f64> for Operand<'_> {
    fn from(value: f64) -> Self {
        Operand::Number(value)
    }
}

impl From<i32> for Operand<'_> {
    fn from(value: i32) -> Self {
        Operand::Number(f64::from(value))
    }
}

impl From<i64> for Operand<'_> {
    fn from(value: i64) -> Self {
        Operand::Number(value as f64)
    }
}

impl<'a> From<(&'a str, f64)> for Operand<'a> {
    fn from((owner, balance): (&'a str, f64)) -> Self {
        Operand::Pair(owner, balance)
    }
}

impl<'a> From<(&'a str, i32)> for Operand<'a> {
    fn from((owner, balance): (&'a str, i32)) -> Self {
        Operand::Pair(owner, f64::from(balance))
    }
}

impl<'a> From<&'a str> for Operand<'a> {
    fn from(text: &'a str) -> Self {
        Operand::Text(text)
    }
}

impl From<()> for Operand<'_> {
    fn from(_: ()) -> Self {
        Operand::Nothing
    }
}
