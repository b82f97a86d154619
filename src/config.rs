use std::path::PathBuf;

use thiserror::Error;

use crate::metrics::{Term, MAX_TERM_MONTHS};

pub const USAGE: &str = "Usage: cargo run -- <input_file> [term_months] [--empty]";

#[derive(Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("missing input file")]
    MissingInput,
    #[error("term must be between 1 and {max} months, got {0:?}", max = MAX_TERM_MONTHS)]
    InvalidTerm(String),
    #[error("unexpected argument {0:?}")]
    UnexpectedArgument(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub input: PathBuf,
    pub term: Term,
    /// Start from an empty ledger instead of the sample items.
    pub empty: bool,
}

impl Config {
    /// Parses the arguments that follow the program name.
    pub fn from_args<I>(args: I) -> Result<Config, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut input = None;
        let mut term = None;
        let mut empty = false;

        for arg in args {
            if arg == "--empty" {
                empty = true;
            } else if input.is_none() {
                input = Some(PathBuf::from(arg));
            } else if term.is_none() {
                let months = arg.parse::<u32>().ok().and_then(Term::new);
                term = Some(months.ok_or(ConfigError::InvalidTerm(arg))?);
            } else {
                return Err(ConfigError::UnexpectedArgument(arg));
            }
        }

        Ok(Config {
            input: input.ok_or(ConfigError::MissingInput)?,
            term: term.unwrap_or_default(),
            empty,
        })
    }
}
