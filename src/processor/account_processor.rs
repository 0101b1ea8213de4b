use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::{
    account::Account,
    command::{AccountCommand, OperationKind},
};

use super::{OperationProcessError, OperationProcessor};

pub struct AccountProcessor {
    pub account: Account,
}

impl AccountProcessor {
    pub fn new(account: Account) -> Self {
        Self { account }
    }

    fn apply(&mut self, cmd: AccountCommand) -> Result<(), OperationProcessError> {
        match cmd {
            AccountCommand::Debit(amount) => self.account.debit(amount)?,
            AccountCommand::Credit(amount) => self.account.credit(amount)?,
        }
        Ok(())
    }
}

impl OperationProcessor for AccountProcessor {
    fn process_operation(
        &mut self,
        kind: OperationKind,
        amount: Option<Decimal>,
    ) -> Result<(), OperationProcessError> {
        let cmd = AccountCommand::parse_command(kind, amount)?;
        match self.apply(cmd) {
            Ok(()) => {
                debug!(
                    customer = self.account.customer_name(),
                    ?kind,
                    amount = %cmd.amount(),
                    balance = %self.account.balance(),
                    "operation applied"
                );
                Ok(())
            }
            Err(err) => {
                warn!(
                    customer = self.account.customer_name(),
                    ?kind,
                    amount = %cmd.amount(),
                    %err,
                    "operation rejected"
                );
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::prelude::FromPrimitive;

    use crate::{
        account::{DEBIT_AMOUNT_EXCEEDS_BALANCE_MESSAGE, DEBIT_AMOUNT_LESS_THAN_ZERO_MESSAGE},
        command::AccountCommandError,
    };

    use super::*;

    #[test]
    fn process_some_operations() {
        let account = Account::new("Mr. Bryan Walton", Decimal::from_u32(100).unwrap());
        let mut processor = AccountProcessor::new(account);
        processor
            .process_operation(OperationKind::Debit, Some(Decimal::from_u32(40).unwrap()))
            .unwrap();
        processor
            .process_operation(OperationKind::Credit, Some(Decimal::new(1050, 2)))
            .unwrap();
        assert_eq!(processor.account.balance(), Decimal::new(7050, 2));

        let err = processor
            .process_operation(OperationKind::Debit, Some(Decimal::from_u32(500).unwrap()))
            .unwrap_err();
        let OperationProcessError::AccountErr(err) = err else {
            panic!("expected account error, got {err:?}");
        };
        assert_eq!(err.message(), Some(DEBIT_AMOUNT_EXCEEDS_BALANCE_MESSAGE));

        let err = processor
            .process_operation(OperationKind::Debit, Some(Decimal::from_i32(-1).unwrap()))
            .unwrap_err();
        assert!(
            matches!(&err, OperationProcessError::AccountErr(e) if e.message() == Some(DEBIT_AMOUNT_LESS_THAN_ZERO_MESSAGE))
        );

        let err = processor
            .process_operation(OperationKind::Credit, None)
            .unwrap_err();
        assert_eq!(
            err,
            OperationProcessError::CommandErr(AccountCommandError::AmountRequired {
                kind: OperationKind::Credit
            })
        );

        // rejected operations leave the balance untouched
        assert_eq!(processor.account.balance(), Decimal::new(7050, 2));
    }
}
