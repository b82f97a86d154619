use std::str::FromStr;

use getset::{CopyGetters, Getters};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::{Kind, LedgerError};

pub const PRECISION: u32 = 4;

#[derive(Debug, Clone, PartialEq, Getters, CopyGetters)]
pub struct LineItem {
    #[getset(get = "pub")]
    pub(crate) name: String,
    #[getset(get_copy = "pub")]
    pub(crate) one_time: Decimal,
    #[getset(get_copy = "pub")]
    pub(crate) monthly: Decimal,
}

impl LineItem {
    pub fn new(name: impl Into<String>, one_time: Decimal, monthly: Decimal) -> Result<LineItem, LedgerError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(LedgerError::MissingName);
        }

        if one_time < dec!(0) || monthly < dec!(0) {
            return Err(LedgerError::InvalidAmount);
        }

        Ok(LineItem {
            name,
            one_time: one_time.round_dp(PRECISION),
            monthly: monthly.round_dp(PRECISION),
        })
    }
}

/// Raw contents of the add form. `None` is a blank field; zero is a value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemForm {
    pub kind: Option<Kind>,
    pub name: Option<String>,
    pub one_time: Option<Decimal>,
    pub monthly: Option<Decimal>,
}

impl ItemForm {
    pub fn new(kind: Kind, name: impl Into<String>, one_time: Decimal, monthly: Decimal) -> ItemForm {
        ItemForm {
            kind: Some(kind),
            name: Some(name.into()),
            one_time: Some(one_time),
            monthly: Some(monthly),
        }
    }

    /// Reads a form from its text fields. Empty fields stay unset; a field with
    /// text that is not a valid type or number is an error.
    pub fn from_fields(
        kind: Option<&str>,
        name: Option<String>,
        one_time: Option<&str>,
        monthly: Option<&str>,
    ) -> Result<ItemForm, LedgerError> {
        Ok(ItemForm {
            kind: non_empty(kind).map(Kind::from_str).transpose()?,
            name,
            one_time: non_empty(one_time).map(parse_amount).transpose()?,
            monthly: non_empty(monthly).map(parse_amount).transpose()?,
        })
    }

    pub fn validate(&self) -> Result<(Kind, LineItem), LedgerError> {
        let kind = self.kind.ok_or(LedgerError::MissingKind)?;
        let name = match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => return Err(LedgerError::MissingName),
        };
        let one_time = self.one_time.ok_or(LedgerError::MissingOneTime)?;
        let monthly = self.monthly.ok_or(LedgerError::MissingMonthly)?;

        Ok((kind, LineItem::new(name, one_time, monthly)?))
    }
}

fn non_empty(field: Option<&str>) -> Option<&str> {
    field.map(str::trim).filter(|field| !field.is_empty())
}

fn parse_amount(raw: &str) -> Result<Decimal, LedgerError> {
    Decimal::from_str(raw).map_err(|_| {
        let digits = raw.trim_start_matches(['+', '-']);
        let numeric = !digits.is_empty()
            && digits.chars().all(|c| c.is_ascii_digit() || c == '.')
            && digits.matches('.').count() <= 1
            && digits.chars().any(|c| c.is_ascii_digit());
        if numeric {
            LedgerError::AmountTooLarge
        } else {
            LedgerError::InvalidAmount
        }
    })
}
