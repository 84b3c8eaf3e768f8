use crate::ledger::{LedgerError, Money};

use super::account::AccountGuard;

impl AccountGuard<'_> {
    /// Remove money from the balance.
    ///
    /// The caller must have checked, under this same guard, that the balance
    /// covers `amount`. If it didn't, the debit is refused with
    /// `InsufficientFunds` and the balance is left untouched.
    pub(crate) fn debit_unchecked(&mut self, amount: Money) -> Result<(), LedgerError> {
        let debited =
            self.balance
                .amount
                .checked_sub(amount)
                .ok_or(LedgerError::InsufficientFunds {
                    id: self.id,
                    balance: self.balance.amount,
                    requested: amount,
                })?;

        self.balance.amount = debited;

        Ok(())
    }
}
