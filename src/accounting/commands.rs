use enum_dispatch::enum_dispatch;

use super::line_item::ItemForm;
use super::{ledger, ledger::Ledger};
use super::{ExecutableCommand, Kind, LedgerError};

#[enum_dispatch(ExecutableCommand)]
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddItem,
    DeleteItem,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddItem {
    form: Result<ItemForm, LedgerError>,
}

impl AddItem {
    pub fn new(form: ItemForm) -> AddItem {
        AddItem { form: Ok(form) }
    }

    /// A submission with a field that could not be read, rejected on execution.
    pub fn malformed(err: LedgerError) -> AddItem {
        AddItem { form: Err(err) }
    }
}

impl ExecutableCommand for AddItem {
    fn execute(&self, ledger: &mut Ledger) -> Result<(), LedgerError> {
        let form = self.form.as_ref().map_err(Clone::clone)?;
        let (kind, item) = form.validate()?;

        ledger.add_item(kind, item)
    }

    fn is_submission(&self) -> bool {
        true
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteItem {
    kind: Kind,
    index: usize,
}

impl DeleteItem {
    pub fn new(kind: Kind, index: usize) -> DeleteItem {
        DeleteItem { kind, index }
    }
}

impl ExecutableCommand for DeleteItem {
    fn execute(&self, ledger: &mut Ledger) -> Result<(), LedgerError> {
        ledger.delete_item(self.kind, self.index).map(|_| ())
    }

    fn is_submission(&self) -> bool {
        false
    }
}
