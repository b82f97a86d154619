use std::fmt;
use std::str::FromStr;

use enum_dispatch::enum_dispatch;
use serde::Serialize;
use thiserror::Error;

pub mod commands;
pub mod ledger;
pub mod line_item;

#[cfg(test)]
mod ledger_tests;

use commands::{AddItem, Command, DeleteItem};

/// Which side of the budget an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Revenue,
    Expense,
}

impl Kind {
    pub const ALL: [Kind; 2] = [Kind::Revenue, Kind::Expense];
}

impl FromStr for Kind {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "revenue" => Ok(Kind::Revenue),
            "expense" => Ok(Kind::Expense),
            _ => Err(LedgerError::InvalidKind(s.to_string())),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Revenue => write!(f, "revenue"),
            Kind::Expense => write!(f, "expense"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    #[error("item type is required")]
    MissingKind,
    #[error("unknown item type {0:?}")]
    InvalidKind(String),
    #[error("item name is required")]
    MissingName,
    #[error("one-time amount is required")]
    MissingOneTime,
    #[error("monthly amount is required")]
    MissingMonthly,
    #[error("invalid amount")]
    InvalidAmount,
    #[error("amount is too large")]
    AmountTooLarge,
    #[error("no {kind} item at index {index} (have {len})")]
    IndexOutOfRange { kind: Kind, index: usize, len: usize },
}

impl LedgerError {
    /// Failures caused by an incomplete or invalid form submission.
    pub fn is_validation(&self) -> bool {
        !matches!(self, LedgerError::IndexOutOfRange { .. })
    }
}

#[enum_dispatch]
pub trait ExecutableCommand {
    fn execute(&self, ledger: &mut ledger::Ledger) -> Result<(), LedgerError>;

    /// Whether the command comes from the add form, and so owns the error banner.
    fn is_submission(&self) -> bool;
}
