use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    account::ArgumentOutOfRange,
    command::{AccountCommandError, OperationKind},
};

pub mod account_processor;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OperationProcessError {
    #[error(transparent)]
    CommandErr(#[from] AccountCommandError),
    #[error(transparent)]
    AccountErr(#[from] ArgumentOutOfRange),
}

pub trait OperationProcessor {
    fn process_operation(
        &mut self,
        kind: OperationKind,
        amount: Option<Decimal>,
    ) -> Result<(), OperationProcessError>;
}
