use super::{AccountId, AccountSnapshot, Amount, LedgerError, LedgerService};

/// A request for the ledger, e.g. decoded from an input stream.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    Create { initial_amount: Option<Amount> },
    Get { id: AccountId },
    List,
    Withdraw { id: AccountId, amount: Amount },
    Deposit { id: AccountId, amount: Amount },
    Transfer { from: AccountId, to: AccountId, amount: Amount },
    Delete { id: AccountId },
}

/// What a successful operation gives back.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Account(AccountSnapshot),
    Accounts(Vec<AccountSnapshot>),
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Create { .. } => "create",
            Operation::Get { .. } => "get",
            Operation::List => "list",
            Operation::Withdraw { .. } => "withdraw",
            Operation::Deposit { .. } => "deposit",
            Operation::Transfer { .. } => "transfer",
            Operation::Delete { .. } => "delete",
        }
    }
}

impl LedgerService {
    pub fn apply(&self, operation: &Operation) -> Result<Outcome, LedgerError> {
        let snapshot = match *operation {
            Operation::Create { initial_amount } => self.create(initial_amount)?,
            Operation::Get { id } => self.get(id)?,
            Operation::List => return Ok(Outcome::Accounts(self.list_all())),
            Operation::Withdraw { id, amount } => self.withdraw(id, amount)?,
            Operation::Deposit { id, amount } => self.deposit(id, amount)?,
            Operation::Transfer { from, to, amount } => self.transfer(from, to, amount)?,
            Operation::Delete { id } => self.delete(id)?,
        };

        Ok(Outcome::Account(snapshot))
    }
}
