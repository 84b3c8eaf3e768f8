use crate::ledger::{AccountId, Amount, LedgerError, Operation};

use serde::Deserialize;
use std::sync::mpsc::{self, Receiver, Sender};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// CSV is malformed.
    #[error("malformed CSV: {0}")]
    Csv(String),

    /// The record is well-formed CSV, but doesn't describe a valid operation.
    #[error("invalid operation: {0}")]
    Format(#[from] LedgerError),
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

// Bad records don't abort the parsing: they are reported on the error
// channel, and we keep going with the next record. A request that couldn't
// be decoded is just another rejected request.
pub fn parse(
    input_stream: (impl std::io::Read + Send + 'static),
) -> (Receiver<Operation>, Receiver<Error>) {
    let (operation_tx, operation_rx): (Sender<Operation>, Receiver<Operation>) = mpsc::channel();
    let (error_tx, error_rx): (Sender<Error>, Receiver<Error>) = mpsc::channel();

    let buffered = std::io::BufReader::new(input_stream);
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(buffered);

    // Moving to a new thread so we can start processing the operations immediately.
    std::thread::spawn(move || {
        for record in reader.deserialize::<OperationRecord>() {
            let sent = match convert(record) {
                Ok(operation) => operation_tx.send(operation).is_ok(),
                Err(err) => error_tx.send(err).is_ok(),
            };

            // The other end hung up: nobody needs the rest of the stream.
            if !sent {
                return;
            }
        }
    });

    (operation_rx, error_rx)
}

// Convert from a csv deserialise result into an operation result.
fn convert(record: Result<OperationRecord, csv::Error>) -> Result<Operation, Error> {
    Ok(record?.try_into()?)
}

// I have an OperationRecord type because I can't directly deserialise into my "domain" type, i.e. Operation.
// See https://github.com/BurntSushi/rust-csv/issues/211.
//
// Every field but the type is optional here: which ones are required depends
// on the type, and a missing one is reported as an invalid argument rather
// than as malformed CSV.
#[derive(Debug, Deserialize)]
pub struct OperationRecord {
    #[serde(rename = "op")]
    op_type: OperationRecordType,

    #[serde(rename = "account")]
    account_id: Option<AccountId>,

    #[serde(rename = "to")]
    to_account_id: Option<AccountId>,

    amount: Option<Amount>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationRecordType {
    Create,
    Get,
    List,
    Withdraw,
    Deposit,
    Transfer,
    Delete,
}

impl TryFrom<OperationRecord> for Operation {
    type Error = LedgerError;
    fn try_from(record: OperationRecord) -> Result<Self, Self::Error> {
        let account = || record.account_id.ok_or(LedgerError::InvalidArgument("account"));
        let amount = || record.amount.ok_or(LedgerError::InvalidArgument("amount"));

        Ok(match record.op_type {
            OperationRecordType::Create => Operation::Create {
                initial_amount: record.amount,
            },
            OperationRecordType::Get => Operation::Get { id: account()? },
            OperationRecordType::List => Operation::List,
            OperationRecordType::Withdraw => Operation::Withdraw {
                id: account()?,
                amount: amount()?,
            },
            OperationRecordType::Deposit => Operation::Deposit {
                id: account()?,
                amount: amount()?,
            },
            OperationRecordType::Transfer => Operation::Transfer {
                from: account()?,
                to: record
                    .to_account_id
                    .ok_or(LedgerError::InvalidArgument("to"))?,
                amount: amount()?,
            },
            OperationRecordType::Delete => Operation::Delete { id: account()? },
        })
    }
}
