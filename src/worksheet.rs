use log::debug;

use crate::accounting::commands::{AddItem, Command, DeleteItem};
use crate::accounting::ledger::Ledger;
use crate::accounting::line_item::ItemForm;
use crate::accounting::{ExecutableCommand, Kind, LedgerError};
use crate::metrics::{Summary, Term};

pub const ERROR_MESSAGE: &str = "Please fill out all fields";

/// Calculator state handed to every input handler: the ledger, the term it is
/// projected over, and whether the last submission was rejected.
#[derive(Debug, Clone)]
pub struct Worksheet {
    ledger: Ledger,
    term: Term,
    error: bool,
}

impl Worksheet {
    pub fn new(ledger: Ledger, term: Term) -> Worksheet {
        Worksheet {
            ledger,
            term,
            error: false,
        }
    }

    /// A rejected submission raises the error flag and leaves the ledger as is;
    /// an accepted one clears it.
    pub fn apply(&mut self, command: Command) -> Result<(), LedgerError> {
        let result = command.execute(&mut self.ledger);

        if command.is_submission() {
            match &result {
                Ok(()) => self.error = false,
                Err(err) if err.is_validation() => {
                    debug!("rejected submission, err={}", err);
                    self.error = true;
                },
                Err(_) => {},
            }
        }

        result
    }

    pub fn submit(&mut self, form: ItemForm) -> Result<(), LedgerError> {
        self.apply(Command::AddItem(AddItem::new(form)))
    }

    pub fn delete(&mut self, kind: Kind, index: usize) -> Result<(), LedgerError> {
        self.apply(Command::DeleteItem(DeleteItem::new(kind, index)))
    }

    pub fn summary(&self) -> Summary {
        let summary = Summary::compute(&self.ledger, self.term);
        debug!(
            "recomputed summary, term={}, total_revenue={}, total_expense={}",
            self.term.months(),
            summary.revenue.total,
            summary.expenses.total
        );
        summary
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn term(&self) -> Term {
        self.term
    }

    pub fn has_error(&self) -> bool {
        self.error
    }

    pub fn error_message(&self) -> Option<&'static str> {
        self.error.then_some(ERROR_MESSAGE)
    }
}
