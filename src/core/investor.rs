use std::fmt;

use serde::{Serialize, Deserialize};

/// Balances travel as JSON numbers, so the width must match
/// what other writers of the same ledger keys produce.
pub type Balance = f64;

/// A single investor record, stored in the world state under its `id`.
///
/// The serialized form is the interoperability contract: a JSON object with
/// exactly these field names, in this order, balance as a number. None of
/// the fields are validated.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Investor {
    pub id: String,
    pub name: String,
    pub email: String,
    pub balance: Balance,
}

impl Investor {
    pub fn new(id: &str, name: &str, email: &str, balance: Balance) -> Investor {
        Investor {
            id: id.to_owned(),
            name: name.to_owned(),
            email: email.to_owned(),
            balance,
        }
    }
}

impl fmt::Display for Investor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} <{}>): {}", self.id, self.name, self.email, self.balance)
    }
}
