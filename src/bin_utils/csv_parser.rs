use std::io::Read;

use crate::command::OperationKind;
use csv::{DeserializeRecordsIntoIter, Trim};
use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Operation {
    #[serde(rename = "type")]
    pub kind: OperationKind,
    // parsed from the raw text, csv would otherwise go through f64/u64
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub amount: Option<Decimal>,
}

/// Parses an operation list in CSV format (`type,amount`).
///
/// Each item carries the line it was read from; malformed rows are yielded as
/// errors so the caller can report them and carry on.
pub struct CsvOperationParser<R> {
    iter: DeserializeRecordsIntoIter<R, Operation>,
}

impl<R> CsvOperationParser<R>
where
    R: Read,
{
    pub fn new(source: R) -> csv::Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(source);
        // read headers upfront so positions point at data rows
        reader.headers()?;

        Ok(Self {
            iter: reader.into_deserialize(),
        })
    }
}

impl<R> Iterator for CsvOperationParser<R>
where
    R: Read,
{
    type Item = (u64, Result<Operation, csv::Error>);

    fn next(&mut self) -> Option<Self::Item> {
        let curr_line = self.iter.reader().position().line();
        self.iter.next().map(|row| (curr_line, row))
    }
}
