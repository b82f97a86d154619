use std::env;
use std::io::{self, Write};

use anyhow::Result;
use log::info;

use roicalc::accounting::ledger::Ledger;
use roicalc::config::{Config, USAGE};
use roicalc::data;
use roicalc::worksheet::Worksheet;

fn main() -> Result<()> {
    env_logger::init();

    let config = match Config::from_args(env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}\n{}", err, USAGE);
            std::process::exit(1);
        },
    };

    let ledger = if config.empty {
        Ledger::new()
    } else {
        Ledger::with_seed_data()
    };
    info!("starting worksheet, term={} months, empty={}", config.term.months(), config.empty);

    let mut sheet = Worksheet::new(ledger, config.term);
    data::process_csv(&config.input, &mut sheet)?;

    let mut stdout = io::stdout().lock();
    data::export_items_csv(&sheet, &mut stdout)?;
    writeln!(stdout)?;
    data::export_summary_csv(&sheet, &mut stdout)?;

    Ok(())
}
