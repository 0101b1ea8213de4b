use rust_decimal::{Decimal, prelude::Zero};
use thiserror::Error;

pub const DEBIT_AMOUNT_EXCEEDS_BALANCE_MESSAGE: &str = "Debit amount exceeds balance";
pub const DEBIT_AMOUNT_LESS_THAN_ZERO_MESSAGE: &str = "Debit amount is less than zero";

const DEFAULT_OUT_OF_RANGE_MESSAGE: &str =
    "Specified argument was out of the range of valid values.";

/// Argument passed to an [`Account`] operation is outside its valid range.
///
/// Carries the parameter name, the rejected value and, for debits, one of the
/// fixed messages above so callers can match on it. The value is only rendered
/// alongside a message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", describe(.message, .param_name, .value))]
pub struct ArgumentOutOfRange {
    param_name: &'static str,
    value: Decimal,
    message: Option<&'static str>,
}

impl ArgumentOutOfRange {
    fn new(param_name: &'static str, value: Decimal, message: Option<&'static str>) -> Self {
        Self {
            param_name,
            value,
            message,
        }
    }

    pub fn param_name(&self) -> &'static str {
        self.param_name
    }

    pub fn value(&self) -> Decimal {
        self.value
    }

    pub fn message(&self) -> Option<&'static str> {
        self.message
    }
}

fn describe(
    message: &Option<&'static str>,
    param_name: &&'static str,
    value: &Decimal,
) -> String {
    match message {
        Some(message) => {
            format!("{message} (Parameter '{param_name}', actual value was {value})")
        }
        None => format!("{DEFAULT_OUT_OF_RANGE_MESSAGE} (Parameter '{param_name}')"),
    }
}

/// A customer's account balance.
///
/// Construction is unchecked; only `debit` and `credit` validate their input.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    customer_name: String,
    balance: Decimal,
}

impl Account {
    pub fn new(customer_name: impl Into<String>, balance: Decimal) -> Self {
        Self {
            customer_name: customer_name.into(),
            balance,
        }
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Withdraws `amount` from the account.
    ///
    /// The balance check runs before the sign check: with a negative balance,
    /// a negative amount above it is reported as exceeding the balance.
    pub fn debit(&mut self, amount: Decimal) -> Result<(), ArgumentOutOfRange> {
        if amount > self.balance {
            return Err(ArgumentOutOfRange::new(
                "amount",
                amount,
                Some(DEBIT_AMOUNT_EXCEEDS_BALANCE_MESSAGE),
            ));
        }
        if amount < Decimal::zero() {
            return Err(ArgumentOutOfRange::new(
                "amount",
                amount,
                Some(DEBIT_AMOUNT_LESS_THAN_ZERO_MESSAGE),
            ));
        }
        self.balance -= amount;
        Ok(())
    }

    /// Deposits `amount` into the account. A credit the balance cannot hold is
    /// rejected like a negative one.
    pub fn credit(&mut self, amount: Decimal) -> Result<(), ArgumentOutOfRange> {
        if amount < Decimal::zero() {
            return Err(ArgumentOutOfRange::new("amount", amount, None));
        }
        let Some(balance) = self.balance.checked_add(amount) else {
            return Err(ArgumentOutOfRange::new("amount", amount, None));
        };
        self.balance = balance;
        Ok(())
    }
}
