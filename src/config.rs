use crate::ledger::{Amount, LedgerError, Money};

/// Settings of one ledger process.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Initial balance of accounts created without an explicit amount.
    pub default_initial_amount: Amount,

    /// How many threads apply operations concurrently.
    pub workers: usize,
}

impl Config {
    /// The default initial amount, validated: it must not be negative.
    pub fn default_initial_balance(&self) -> Result<Money, LedgerError> {
        Money::new(self.default_initial_amount)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_initial_amount: Amount::ZERO,
            workers: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Config;
    use crate::ledger::{LedgerError, Money};

    use rust_decimal_macros::dec;

    #[test]
    fn test_default() {
        let config = Config::default();

        assert_eq!(1, config.workers);
        assert_eq!(Ok(Money::ZERO), config.default_initial_balance());
    }

    #[test]
    fn test_negative_default_amount() {
        let config = Config {
            default_initial_amount: dec!(-10),
            ..Config::default()
        };

        assert!(matches!(
            config.default_initial_balance(),
            Err(LedgerError::InvalidAmount { .. })
        ));
    }
}
