use std::fmt;

use crate::accounts::bank_account::Account;

pub const OWNER_LABEL: &str = "owner";
pub const BALANCE_LABEL: &str = "balance";

/// Key for [`Account::get`]: a field label or its position in the (owner, balance) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key<'a> {
    Label(&'a str),
    Position(i64),
}

impl<'a> From<&'a str> for Key<'a> {
    fn from(label: &'a str) -> Self {
        Key::Label(label)
    }
}

impl From<i32> for Key<'_> {
    fn from(position: i32) -> Self {
        Key::Position(i64::from(position))
    }
}

impl From<i64> for Key<'_> {
    fn from(position: i64) -> Self {
        Key::Position(position)
    }
}

impl From<usize> for Key<'_> {
    fn from(position: usize) -> Self {
        Key::Position(i64::try_from(position).unwrap_or(i64::MAX))
    }
}

impl fmt::Display for Key<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Key::Label(label) => write!(f, "'{}'", label),
            Key::Position(position) => write!(f, "{}", position),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Owner(&'a str),
    Balance(f64),
}

impl FieldValue<'_> {
    pub fn label(&self) -> &'static str {
        match self {
            FieldValue::Owner(_) => OWNER_LABEL,
            FieldValue::Balance(_) => BALANCE_LABEL,
        }
    }
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FieldValue::Owner(owner) => write!(f, "{}", owner),
            FieldValue::Balance(balance) => write!(f, "{:?}", balance),
        }
    }
}

/// Iterator over the `(label, value)` pairs of an account, owner first.
#[derive(Debug, Clone)]
pub struct Fields<'a> {
    account: &'a Account,
    position: usize,
}

impl<'a> Fields<'a> {
    pub(crate) fn new(account: &'a Account) -> Self {
        Self {
            account,
            position: 0,
        }
    }
}

impl<'a> Iterator for Fields<'a> {
    type Item = (&'static str, FieldValue<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        let value = match self.position {
            0 => FieldValue::Owner(self.account.owner()),
            1 => FieldValue::Balance(self.account.balance()),
            _ => return None,
        };
        self.position += 1;
        Some((value.label(), value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = 2usize.saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Fields<'_> {}

impl std::iter::FusedIterator for Fields<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_yield_owner_then_balance() {
        let acc = Account::new("Alice", 800.0);
        let mut fields = Fields::new(&acc);
        assert_eq!(fields.len(), 2);
        assert_eq!(fields.next(), Some(("owner", FieldValue::Owner("Alice"))));
        assert_eq!(fields.len(), 1);
        assert_eq!(fields.next(), Some(("balance", FieldValue::Balance(800.0))));
        assert_eq!(fields.next(), None);
        assert_eq!(fields.next(), None);
    }

    #[test]
    fn test_field_value_display() {
        assert_eq!(FieldValue::Owner("Bob").to_string(), "Bob");
        assert_eq!(FieldValue::Balance(1200.0).to_string(), "1200.0");
        assert_eq!(FieldValue::Balance(12.5).to_string(), "12.5");
    }

    #[test]
    fn test_key_display() {
        assert_eq!(Key::from("charlie").to_string(), "'charlie'");
        assert_eq!(Key::from(7).to_string(), "7");
        assert_eq!(Key::from(2usize), Key::Position(2));
        assert_eq!(Key::from(-1), Key::Position(-1));
    }
}
