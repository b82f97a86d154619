use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::accounting::ledger::Ledger;
use crate::accounting::Kind;

pub const DEFAULT_TERM_MONTHS: u32 = 12;
pub const MAX_TERM_MONTHS: u32 = 1200;

/// Number of months monthly amounts are projected over, between 1 and
/// `MAX_TERM_MONTHS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Term(u32);

impl Term {
    pub fn new(months: u32) -> Option<Term> {
        if months == 0 || months > MAX_TERM_MONTHS {
            None
        } else {
            Some(Term(months))
        }
    }

    pub fn months(&self) -> u32 {
        self.0
    }
}

impl Default for Term {
    fn default() -> Self {
        Term(DEFAULT_TERM_MONTHS)
    }
}

/// A quotient that cannot be formed when its denominator is zero or the result
/// does not fit in a `Decimal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ratio {
    Value(Decimal),
    NotComputable,
}

impl Ratio {
    fn of(numerator: Decimal, denominator: Decimal) -> Ratio {
        match numerator.checked_div(denominator) {
            Some(value) => Ratio::Value(value),
            None => Ratio::NotComputable,
        }
    }

    pub fn value(&self) -> Option<Decimal> {
        match self {
            Ratio::Value(value) => Some(*value),
            Ratio::NotComputable => None,
        }
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ratio::Value(value) => match f.precision() {
                Some(precision) => write!(f, "{:.*}", precision, round_half_up(*value, precision as u32)),
                None => write!(f, "{}", value),
            },
            Ratio::NotComputable => write!(f, "N/A"),
        }
    }
}

// Totals below stay within range for ledger amounts (each total capped at
// `ledger::MAX_TOTAL`) over any valid `Term`.

pub fn total_revenue(one_time: Decimal, monthly: Decimal, term: Term) -> Decimal {
    one_time + monthly * Decimal::from(term.months())
}

pub fn total_expense(one_time: Decimal, monthly: Decimal, term: Term) -> Decimal {
    one_time + monthly * Decimal::from(term.months())
}

pub fn monthly_contribution_profit(monthly_revenue: Decimal, monthly_expense: Decimal) -> Decimal {
    monthly_revenue - monthly_expense
}

pub fn total_contribution_profit(total_revenue: Decimal, total_expense: Decimal) -> Decimal {
    total_revenue - total_expense
}

/// Contribution profit as a percentage of total revenue.
pub fn contribution_margin(total_revenue: Decimal, total_contribution_profit: Decimal) -> Ratio {
    match Ratio::of(total_contribution_profit, total_revenue) {
        Ratio::Value(ratio) => ratio.checked_mul(dec!(100)).map_or(Ratio::NotComputable, Ratio::Value),
        Ratio::NotComputable => Ratio::NotComputable,
    }
}

/// Monthly contribution profit per unit of net one-time capital outlay.
///
/// Only the one-time amounts and the monthly profit enter the quotient; the
/// term totals are accepted so callers can pass the whole set of figures.
pub fn capital_roi(
    _total_expense: Decimal,
    _total_revenue: Decimal,
    one_time_expense: Decimal,
    one_time_revenue: Decimal,
    monthly_contribution_profit: Decimal,
) -> Ratio {
    match one_time_expense.checked_sub(one_time_revenue) {
        Some(outlay) => Ratio::of(monthly_contribution_profit, outlay),
        None => Ratio::NotComputable,
    }
}

/// Rounds midpoints away from zero, the way currency figures are displayed.
pub fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// One-time, monthly and term totals for a side of the budget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    pub one_time: Decimal,
    pub monthly: Decimal,
    pub total: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub term: Term,
    pub revenue: Totals,
    pub expenses: Totals,
    pub monthly_contribution_profit: Decimal,
    pub total_contribution_profit: Decimal,
    pub contribution_margin: Ratio,
    pub capital_roi: Ratio,
}

impl Summary {
    pub fn compute(ledger: &Ledger, term: Term) -> Summary {
        let one_time_revenue = ledger.one_time_total(Kind::Revenue);
        let monthly_revenue = ledger.monthly_total(Kind::Revenue);
        let one_time_expense = ledger.one_time_total(Kind::Expense);
        let monthly_expense = ledger.monthly_total(Kind::Expense);

        let revenue = Totals {
            one_time: one_time_revenue,
            monthly: monthly_revenue,
            total: total_revenue(one_time_revenue, monthly_revenue, term),
        };
        let expenses = Totals {
            one_time: one_time_expense,
            monthly: monthly_expense,
            total: total_expense(one_time_expense, monthly_expense, term),
        };

        let monthly_profit = monthly_contribution_profit(monthly_revenue, monthly_expense);
        let total_profit = total_contribution_profit(revenue.total, expenses.total);

        Summary {
            term,
            revenue,
            expenses,
            monthly_contribution_profit: monthly_profit,
            total_contribution_profit: total_profit,
            contribution_margin: contribution_margin(revenue.total, total_profit),
            capital_roi: capital_roi(
                expenses.total,
                revenue.total,
                one_time_expense,
                one_time_revenue,
                monthly_profit,
            ),
        }
    }
}
