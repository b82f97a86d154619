use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::line_item::LineItem;
use super::{Kind, LedgerError};

/// Upper bound on each running total. Keeps every derived figure within
/// `Decimal` range for any valid term.
pub const MAX_TOTAL: Decimal = dec!(1000000000000000000000);

/// Items of one kind plus their running totals.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Book {
    items: Vec<LineItem>,
    one_time: Decimal,
    monthly: Decimal,
}

impl Book {
    fn push(&mut self, item: LineItem) -> Result<(), LedgerError> {
        let one_time = checked_total(self.one_time, item.one_time())?;
        let monthly = checked_total(self.monthly, item.monthly())?;

        self.one_time = one_time;
        self.monthly = monthly;
        self.items.push(item);

        Ok(())
    }

    fn remove(&mut self, kind: Kind, index: usize) -> Result<LineItem, LedgerError> {
        if index >= self.items.len() {
            return Err(LedgerError::IndexOutOfRange {
                kind,
                index,
                len: self.items.len(),
            });
        }

        let item = self.items.remove(index);
        self.one_time -= item.one_time();
        self.monthly -= item.monthly();

        Ok(item)
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn one_time(&self) -> Decimal {
        self.one_time
    }

    pub fn monthly(&self) -> Decimal {
        self.monthly
    }
}

fn checked_total(total: Decimal, amount: Decimal) -> Result<Decimal, LedgerError> {
    total
        .checked_add(amount)
        .filter(|sum| *sum <= MAX_TOTAL)
        .ok_or(LedgerError::AmountTooLarge)
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Ledger {
    revenue: Book,
    expenses: Book,
}

impl Ledger {
    pub fn new() -> Ledger {
        Ledger {
            revenue: Book::default(),
            expenses: Book::default(),
        }
    }

    /// Sample items the calculator opens with.
    pub fn with_seed_data() -> Ledger {
        let seed = [
            (Kind::Revenue, "Item 1", dec!(100), dec!(50)),
            (Kind::Revenue, "Item 2", dec!(50), dec!(25)),
            (Kind::Revenue, "Item 3", dec!(25), dec!(85)),
            (Kind::Expense, "Expense 1", dec!(500), dec!(20.0)),
            (Kind::Expense, "Expense 2", dec!(200), dec!(40)),
        ];

        let mut ledger = Ledger::new();
        for (kind, name, one_time, monthly) in seed {
            let book = ledger.book_mut(kind);
            book.one_time += one_time;
            book.monthly += monthly;
            book.items.push(LineItem {
                name: name.to_string(),
                one_time,
                monthly,
            });
        }
        ledger
    }

    /// Appends the item unless it would push a total past `MAX_TOTAL`, in which
    /// case nothing changes.
    pub fn add_item(&mut self, kind: Kind, item: LineItem) -> Result<(), LedgerError> {
        debug!(
            "adding {} item, name={}, one_time={}, monthly={}",
            kind,
            item.name(),
            item.one_time(),
            item.monthly()
        );
        self.book_mut(kind).push(item)
    }

    /// Removes the item and takes its amounts off the totals in one step.
    /// An out-of-range index leaves the ledger untouched.
    pub fn delete_item(&mut self, kind: Kind, index: usize) -> Result<LineItem, LedgerError> {
        let item = self.book_mut(kind).remove(kind, index)?;
        debug!("deleted {} item {}, name={}", kind, index, item.name());
        Ok(item)
    }

    pub fn book(&self, kind: Kind) -> &Book {
        match kind {
            Kind::Revenue => &self.revenue,
            Kind::Expense => &self.expenses,
        }
    }

    fn book_mut(&mut self, kind: Kind) -> &mut Book {
        match kind {
            Kind::Revenue => &mut self.revenue,
            Kind::Expense => &mut self.expenses,
        }
    }

    pub fn items(&self, kind: Kind) -> &[LineItem] {
        self.book(kind).items()
    }

    pub fn one_time_total(&self, kind: Kind) -> Decimal {
        self.book(kind).one_time()
    }

    pub fn monthly_total(&self, kind: Kind) -> Decimal {
        self.book(kind).monthly()
    }
}
