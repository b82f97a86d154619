use anyhow::{bail, Result};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::commands::{AddItem, Command, DeleteItem};
use super::ledger::{Ledger, MAX_TOTAL};
use super::line_item::{ItemForm, LineItem};
use super::*;

fn assert_totals(ledger: &Ledger, kind: Kind, one_time: Decimal, monthly: Decimal) {
    assert_eq!(ledger.one_time_total(kind), one_time);
    assert_eq!(ledger.monthly_total(kind), monthly);

    let items = ledger.items(kind);
    assert_eq!(items.iter().map(|item| item.one_time()).sum::<Decimal>(), one_time);
    assert_eq!(items.iter().map(|item| item.monthly()).sum::<Decimal>(), monthly);
}

fn add(ledger: &mut Ledger, kind: Kind, name: &str, one_time: Decimal, monthly: Decimal) -> Result<()> {
    execute(ledger, Command::AddItem(AddItem::new(ItemForm::new(kind, name, one_time, monthly))))?;
    Ok(())
}

fn execute(ledger: &mut Ledger, command: Command) -> Result<(), LedgerError> {
    command.execute(ledger)
}

#[test]
fn test_seed_data() {
    let ledger = Ledger::with_seed_data();

    assert_eq!(ledger.items(Kind::Revenue).len(), 3);
    assert_eq!(ledger.items(Kind::Expense).len(), 2);
    assert_totals(&ledger, Kind::Revenue, dec!(175), dec!(160));
    assert_totals(&ledger, Kind::Expense, dec!(700), dec!(60));
}

#[test]
fn test_add_keeps_totals_in_sync() -> Result<()> {
    let mut ledger = Ledger::new();
    let mut one_time = dec!(0);
    let mut monthly = dec!(0);

    for (i, (a, b)) in [(dec!(10), dec!(1.5)), (dec!(0), dec!(99.99)), (dec!(2500.25), dec!(0))]
        .into_iter()
        .enumerate()
    {
        add(&mut ledger, Kind::Revenue, &format!("Item {}", i), a, b)?;
        one_time += a;
        monthly += b;
        assert_totals(&ledger, Kind::Revenue, one_time, monthly);
    }

    assert_totals(&ledger, Kind::Expense, dec!(0), dec!(0));

    Ok(())
}

#[test]
fn test_add_zero_amount_expense() -> Result<()> {
    let mut ledger = Ledger::with_seed_data();
    add(&mut ledger, Kind::Expense, "Rent", dec!(0), dec!(1000))?;

    assert_eq!(ledger.items(Kind::Expense).len(), 3);
    assert_eq!(ledger.items(Kind::Expense)[2].name(), "Rent");
    assert_totals(&ledger, Kind::Expense, dec!(700), dec!(1060));
    assert_totals(&ledger, Kind::Revenue, dec!(175), dec!(160));

    Ok(())
}

#[test]
fn test_add_keeps_4_decimal() -> Result<()> {
    let mut ledger = Ledger::new();
    add(&mut ledger, Kind::Revenue, "Pi", dec!(3.1415926535), dec!(0.00004))?;

    assert_totals(&ledger, Kind::Revenue, dec!(3.1416), dec!(0.0000));

    Ok(())
}

#[test]
fn test_add_rejects_incomplete_form() -> Result<()> {
    let complete = ItemForm::new(Kind::Revenue, "Consulting", dec!(10), dec!(5));
    let cases = [
        (
            ItemForm {
                kind: None,
                ..complete.clone()
            },
            LedgerError::MissingKind,
        ),
        (
            ItemForm {
                name: None,
                ..complete.clone()
            },
            LedgerError::MissingName,
        ),
        (
            ItemForm {
                name: Some("   ".to_string()),
                ..complete.clone()
            },
            LedgerError::MissingName,
        ),
        (
            ItemForm {
                one_time: None,
                ..complete.clone()
            },
            LedgerError::MissingOneTime,
        ),
        (
            ItemForm {
                monthly: None,
                ..complete.clone()
            },
            LedgerError::MissingMonthly,
        ),
        (
            ItemForm {
                monthly: Some(dec!(-1)),
                ..complete.clone()
            },
            LedgerError::InvalidAmount,
        ),
    ];

    for (form, expected) in cases {
        let mut ledger = Ledger::with_seed_data();
        if let Err(err) = execute(&mut ledger, Command::AddItem(AddItem::new(form))) {
            assert_eq!(err, expected);
            assert!(err.is_validation());
        } else {
            bail!("incomplete form should be rejected");
        }

        assert_eq!(ledger, Ledger::with_seed_data());
    }

    Ok(())
}

#[test]
fn test_add_rejects_total_over_limit() -> Result<()> {
    let mut ledger = Ledger::new();
    add(&mut ledger, Kind::Expense, "Plant", MAX_TOTAL, dec!(0))?;
    let before = ledger.clone();

    let form = ItemForm::new(Kind::Expense, "Tools", dec!(0.0001), dec!(0));
    if let Err(err) = execute(&mut ledger, Command::AddItem(AddItem::new(form))) {
        assert_eq!(err, LedgerError::AmountTooLarge);
        assert!(err.is_validation());
    } else {
        bail!("totals should not grow past the limit");
    }

    assert_eq!(ledger, before);
    assert_totals(&ledger, Kind::Expense, MAX_TOTAL, dec!(0));

    Ok(())
}

#[test]
fn test_form_from_fields() -> Result<()> {
    let form = ItemForm::from_fields(Some("Expense"), Some("Rent".to_string()), Some(" 0 "), Some("1000.50"))?;
    assert_eq!(form, ItemForm::new(Kind::Expense, "Rent", dec!(0), dec!(1000.50)));

    let blank = ItemForm::from_fields(Some(""), None, Some("  "), None)?;
    assert_eq!(blank, ItemForm::default());

    assert_eq!(
        ItemForm::from_fields(Some("income"), None, None, None),
        Err(LedgerError::InvalidKind("income".to_string()))
    );
    assert_eq!(
        ItemForm::from_fields(None, None, Some("abc"), None),
        Err(LedgerError::InvalidAmount)
    );
    assert_eq!(
        ItemForm::from_fields(None, None, None, Some("100000000000000000000000000000000")),
        Err(LedgerError::AmountTooLarge)
    );

    Ok(())
}

#[test]
fn test_line_item_validation() {
    assert_eq!(LineItem::new("", dec!(1), dec!(1)), Err(LedgerError::MissingName));
    assert_eq!(LineItem::new("Fee", dec!(-0.01), dec!(1)), Err(LedgerError::InvalidAmount));
    assert!(LineItem::new("Fee", dec!(0), dec!(0)).is_ok());
}

#[test]
fn test_delete() -> Result<()> {
    let mut ledger = Ledger::with_seed_data();
    execute(&mut ledger, Command::DeleteItem(DeleteItem::new(Kind::Revenue, 1)))?;

    let names: Vec<&str> = ledger.items(Kind::Revenue).iter().map(|item| item.name().as_str()).collect();
    assert_eq!(names, vec!["Item 1", "Item 3"]);
    assert_totals(&ledger, Kind::Revenue, dec!(125), dec!(135));
    assert_totals(&ledger, Kind::Expense, dec!(700), dec!(60));

    Ok(())
}

#[test]
fn test_delete_returns_removed_item() -> Result<()> {
    let mut ledger = Ledger::with_seed_data();
    add(&mut ledger, Kind::Expense, "Rent", dec!(0), dec!(1000))?;

    let removed = ledger.delete_item(Kind::Expense, 2)?;
    assert_eq!(removed, LineItem::new("Rent", dec!(0), dec!(1000))?);
    assert_eq!(ledger, Ledger::with_seed_data());

    Ok(())
}

#[test]
fn test_delete_until_empty() -> Result<()> {
    let mut ledger = Ledger::with_seed_data();
    while !ledger.items(Kind::Expense).is_empty() {
        let len = ledger.items(Kind::Expense).len();
        ledger.delete_item(Kind::Expense, len - 1)?;
        assert_eq!(ledger.items(Kind::Expense).len(), len - 1);
    }

    assert_totals(&ledger, Kind::Expense, dec!(0), dec!(0));

    Ok(())
}

#[test]
fn test_delete_out_of_range() -> Result<()> {
    let mut ledger = Ledger::with_seed_data();
    if let Err(err) = execute(&mut ledger, Command::DeleteItem(DeleteItem::new(Kind::Expense, 2))) {
        assert_eq!(
            err,
            LedgerError::IndexOutOfRange {
                kind: Kind::Expense,
                index: 2,
                len: 2,
            }
        );
        assert!(!err.is_validation());
    } else {
        bail!("delete should reference an existing item");
    }

    assert_eq!(ledger, Ledger::with_seed_data());

    Ok(())
}

#[test]
fn test_error_messages() {
    let err = LedgerError::IndexOutOfRange {
        kind: Kind::Revenue,
        index: 7,
        len: 3,
    };
    assert_eq!(err.to_string(), "no revenue item at index 7 (have 3)");
    assert_eq!(LedgerError::MissingMonthly.to_string(), "monthly amount is required");
}
