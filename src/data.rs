use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use anyhow::Result;
use log::{debug, warn};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::accounting::commands::{AddItem, Command, DeleteItem};
use crate::accounting::line_item::ItemForm;
use crate::accounting::{Kind, LedgerError};
use crate::metrics::{round_half_up, Ratio, Summary};
use crate::worksheet::Worksheet;

#[derive(Debug, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Add,
    Delete,
}

#[derive(Debug, Error)]
pub enum CommandDataError {
    #[error("delete requires an item type")]
    MissingKind,
    #[error("delete requires an index")]
    MissingIndex,
    #[error("{0}")]
    InvalidKind(#[from] LedgerError),
}

/// One row of input: a submission of the add form or a click on a row's delete
/// button. Blank cells are unset fields. Form fields are kept as text so a
/// malformed value reaches the worksheet as a rejected submission.
#[derive(Debug, Deserialize)]
pub struct ItemRecord {
    pub action: Action,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub one_time: Option<String>,
    #[serde(default)]
    pub monthly: Option<String>,
    #[serde(default)]
    pub index: Option<usize>,
}

impl TryFrom<ItemRecord> for Command {
    type Error = CommandDataError;

    fn try_from(record: ItemRecord) -> Result<Self, Self::Error> {
        match record.action {
            Action::Add => {
                let form = ItemForm::from_fields(
                    record.kind.as_deref(),
                    record.name,
                    record.one_time.as_deref(),
                    record.monthly.as_deref(),
                );
                Ok(Command::AddItem(match form {
                    Ok(form) => AddItem::new(form),
                    Err(err) => AddItem::malformed(err),
                }))
            },
            Action::Delete => {
                let kind: Kind = record.kind.ok_or(CommandDataError::MissingKind)?.parse()?;
                let index = record.index.ok_or(CommandDataError::MissingIndex)?;
                Ok(Command::DeleteItem(DeleteItem::new(kind, index)))
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ItemRow<'a> {
    pub kind: Kind,
    pub index: usize,
    pub name: &'a str,
    pub one_time: String,
    pub monthly: String,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct SummaryRow {
    pub row: &'static str,
    pub one_time: String,
    pub monthly: String,
    pub total: String,
}

impl SummaryRow {
    fn new(row: &'static str, one_time: Option<Decimal>, monthly: Option<Decimal>, total: String) -> SummaryRow {
        SummaryRow {
            row,
            one_time: one_time.map(money).unwrap_or_default(),
            monthly: monthly.map(money).unwrap_or_default(),
            total,
        }
    }

    /// The totals table, one row per figure.
    pub fn rows(summary: &Summary) -> Vec<SummaryRow> {
        let margin = match summary.contribution_margin {
            Ratio::Value(_) => format!("{:.2}%", summary.contribution_margin),
            Ratio::NotComputable => summary.contribution_margin.to_string(),
        };

        vec![
            SummaryRow::new(
                "Revenue",
                Some(summary.revenue.one_time),
                Some(summary.revenue.monthly),
                money(summary.revenue.total),
            ),
            SummaryRow::new(
                "Expenses",
                Some(summary.expenses.one_time),
                Some(summary.expenses.monthly),
                money(summary.expenses.total),
            ),
            SummaryRow::new(
                "Contribution Profit",
                None,
                Some(summary.monthly_contribution_profit),
                money(summary.total_contribution_profit),
            ),
            SummaryRow::new("Contribution Margin", None, None, margin),
            SummaryRow::new("Capital ROI (monthly)", None, None, format!("{:.2}", summary.capital_roi)),
        ]
    }
}

/// Currency amounts are shown with two decimals.
pub fn money(value: Decimal) -> String {
    format!("{:.2}", round_half_up(value, 2))
}

pub fn process_csv(file_path: &Path, sheet: &mut Worksheet) -> Result<()> {
    let file = File::open(file_path)?;
    process_reader(file, sheet)
}

pub fn process_reader<R: Read>(reader: R, sheet: &mut Worksheet) -> Result<()> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    for record in csv_reader.deserialize::<ItemRecord>() {
        match record {
            Ok(record) => match Command::try_from(record) {
                Ok(command) => {
                    if let Err(err) = sheet.apply(command) {
                        debug!("failed to apply command, err={}", err);
                    }
                },
                Err(err) => debug!("invalid command, err={}", err),
            },
            Err(err) => debug!("failed to deserialize record, err={}", err),
        }
    }

    if let Some(message) = sheet.error_message() {
        warn!("{}", message);
    }

    Ok(())
}

pub fn export_items_csv<W: Write>(sheet: &Worksheet, writer: W) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new().from_writer(writer);
    for kind in Kind::ALL {
        for (index, item) in sheet.ledger().items(kind).iter().enumerate() {
            csv_writer.serialize(ItemRow {
                kind,
                index,
                name: item.name(),
                one_time: money(item.one_time()),
                monthly: money(item.monthly()),
            })?;
        }
    }

    csv_writer.flush()?;

    Ok(())
}

pub fn export_summary_csv<W: Write>(sheet: &Worksheet, writer: W) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new().from_writer(writer);
    for row in SummaryRow::rows(&sheet.summary()) {
        csv_writer.serialize(row)?;
    }

    csv_writer.flush()?;

    Ok(())
}
