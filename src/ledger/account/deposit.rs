use crate::ledger::{LedgerError, Money};

use super::account::AccountGuard;

impl AccountGuard<'_> {
    /// Add money to the balance.
    ///
    /// Validating the amount is up to the caller. The only thing that can go
    /// wrong here is an overflow, in which case the balance is left untouched.
    pub(crate) fn credit_unchecked(&mut self, amount: Money) -> Result<(), LedgerError> {
        let credited = self
            .balance
            .amount
            .checked_add(amount)
            .ok_or(LedgerError::Overflow(self.id))?;

        self.balance.amount = credited;

        Ok(())
    }
}
