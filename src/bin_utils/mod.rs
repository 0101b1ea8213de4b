//! Bootstraps [`crate::account`] for the replay binary: reads operations from
//! CSV, applies them to a single account and prints the result.

use std::io::{Read, Write};

use crate::{
    account::Account,
    processor::{OperationProcessError, OperationProcessor, account_processor::AccountProcessor},
};
use anyhow::Result;
use csv_parser::CsvOperationParser;
use csv_printer::{AccountRow, print_account};
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::info;

pub mod csv_parser;
pub mod csv_printer;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Failed to parse operation: {0}")]
    Parse(#[from] csv::Error),
    #[error(transparent)]
    Process(#[from] OperationProcessError),
}

pub struct Service<'w, R, W: 'w> {
    pub input: R,
    pub output: &'w mut W,
    pub customer_name: String,
    pub initial_balance: Decimal,
    pub error_printer: Box<dyn FnMut(u64, ServiceError)>,
}

impl<'w, R, W> Service<'w, R, W>
where
    R: Read,
    W: Write + 'w,
{
    pub fn run(mut self) -> Result<()> {
        let parser = CsvOperationParser::new(self.input)?;

        let mut processor =
            AccountProcessor::new(Account::new(self.customer_name, self.initial_balance));

        let mut rejected = 0usize;
        for (line, row) in parser {
            let result = row
                .map_err(ServiceError::from)
                .and_then(|op| {
                    processor
                        .process_operation(op.kind, op.amount)
                        .map_err(ServiceError::from)
                });
            if let Err(err) = result {
                rejected += 1;
                (self.error_printer)(line, err);
            }
        }

        info!(
            customer = processor.account.customer_name(),
            balance = %processor.account.balance(),
            rejected,
            "replay finished"
        );

        print_account(
            self.output,
            AccountRow {
                customer: processor.account.customer_name(),
                balance: processor.account.balance(),
            },
        )
    }
}
