use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Debit,
    Credit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountCommandError {
    #[error("Amount is required for {kind:?}")]
    AmountRequired { kind: OperationKind },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountCommand {
    Debit(Decimal),
    Credit(Decimal),
}

impl AccountCommand {
    /// Only checks that an amount is present; sign and balance checks are left
    /// to [`crate::account::Account`].
    pub fn parse_command(
        kind: OperationKind,
        amount: Option<Decimal>,
    ) -> Result<Self, AccountCommandError> {
        let Some(amount) = amount else {
            return Err(AccountCommandError::AmountRequired { kind });
        };
        match kind {
            OperationKind::Debit => Ok(Self::Debit(amount)),
            OperationKind::Credit => Ok(Self::Credit(amount)),
        }
    }

    pub fn kind(&self) -> OperationKind {
        match self {
            Self::Debit(_) => OperationKind::Debit,
            Self::Credit(_) => OperationKind::Credit,
        }
    }

    pub fn amount(&self) -> Decimal {
        match self {
            Self::Debit(amount) | Self::Credit(amount) => *amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_commands() {
        let cmd = AccountCommand::parse_command(OperationKind::Debit, Some(Decimal::new(455, 2)))
            .unwrap();
        assert_eq!(cmd, AccountCommand::Debit(Decimal::new(455, 2)));
        assert_eq!(cmd.kind(), OperationKind::Debit);

        // negative amounts pass through, the account rejects them
        let cmd = AccountCommand::parse_command(OperationKind::Credit, Some(Decimal::new(-5, 0)))
            .unwrap();
        assert_eq!(cmd.kind(), OperationKind::Credit);
        assert_eq!(cmd.amount(), Decimal::new(-5, 0));
    }

    #[test]
    fn amount_is_required() {
        let err = AccountCommand::parse_command(OperationKind::Credit, None).unwrap_err();
        assert_eq!(
            err,
            AccountCommandError::AmountRequired {
                kind: OperationKind::Credit
            }
        );
        assert_eq!(err.to_string(), "Amount is required for Credit");
    }
}
