use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;

use crate::error::FinanceError;

/// The single profile row created at the end of setup.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date_of_birth: Option<String>,
    pub occupation: Option<String>,
    pub balance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Travel,
    Transportation,
    FoodDrink,
    Entertainment,
    Services,
    Shopping,
    Health,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Travel,
        Category::Transportation,
        Category::FoodDrink,
        Category::Entertainment,
        Category::Services,
        Category::Shopping,
        Category::Health,
    ];

    /// Value written to the `type` column.
    pub fn db_value(self) -> &'static str {
        match self {
            Category::Travel => "TRAVEL",
            Category::Transportation => "TRANSPORTATION",
            Category::FoodDrink => "FOODDRINK",
            Category::Entertainment => "ENTERTAINMENT",
            Category::Services => "SERVICES",
            Category::Shopping => "SHOPPING",
            Category::Health => "HEALTH",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Travel => "Travel",
            Category::Transportation => "Transportation",
            Category::FoodDrink => "Food & Drink",
            Category::Entertainment => "Entertainment",
            Category::Services => "Services",
            Category::Shopping => "Shopping",
            Category::Health => "Health",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = FinanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.db_value().eq_ignore_ascii_case(wanted) || c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| FinanceError::UnknownCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Incoming,
    Outgoing,
}

impl Direction {
    /// Direction is derived from the amount: zero counts as incoming.
    pub fn of(amount: f64) -> Self {
        if amount >= 0.0 {
            Direction::Incoming
        } else {
            Direction::Outgoing
        }
    }

    pub fn is_incoming(self) -> bool {
        self == Direction::Incoming
    }
}

/// A persisted ledger record.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: i64,
    pub name: String,
    pub amount: f64,
    pub category: Category,
    pub date: NaiveDateTime,
}

impl Transaction {
    pub fn direction(&self) -> Direction {
        Direction::of(self.amount)
    }
}

/// A record about to be inserted. The store assigns the id, and the
/// timestamp when `date` is `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub name: String,
    pub amount: f64,
    pub category: Category,
    pub date: Option<NaiveDateTime>,
}

impl NewTransaction {
    pub fn new(name: impl Into<String>, amount: f64, category: Category) -> Self {
        Self {
            name: name.into(),
            amount,
            category,
            date: None,
        }
    }

    pub fn at(mut self, date: NaiveDateTime) -> Self {
        self.date = Some(date);
        self
    }

    pub fn direction(&self) -> Direction {
        Direction::of(self.amount)
    }
}

/// Parse a user-entered amount such as "-1,250.00" or "$40".
pub fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned = raw.trim().replace(['$', ','], "");
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parses_db_value_and_label() {
        assert_eq!("FOODDRINK".parse::<Category>().unwrap(), Category::FoodDrink);
        assert_eq!("food & drink".parse::<Category>().unwrap(), Category::FoodDrink);
        assert_eq!(" health ".parse::<Category>().unwrap(), Category::Health);
        assert!("Groceries".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_db_values_roundtrip() {
        for c in Category::ALL {
            assert_eq!(c.db_value().parse::<Category>().unwrap(), c);
        }
    }

    #[test]
    fn test_direction_derived_from_sign() {
        assert_eq!(Direction::of(12.5), Direction::Incoming);
        assert_eq!(Direction::of(0.0), Direction::Incoming);
        assert_eq!(Direction::of(-0.01), Direction::Outgoing);
        let txn = NewTransaction::new("Rent", -900.0, Category::Services);
        assert!(!txn.direction().is_incoming());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("42"), Some(42.0));
        assert_eq!(parse_amount(" -1,250.50 "), Some(-1250.5));
        assert_eq!(parse_amount("$40"), Some(40.0));
        assert_eq!(parse_amount("ten"), None);
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("NaN"), None);
        assert_eq!(parse_amount("inf"), None);
    }
}
