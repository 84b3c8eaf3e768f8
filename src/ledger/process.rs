use super::{LedgerError, LedgerService, Operation, Outcome};

use std::sync::mpsc::{self, Receiver};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::JoinHandle;
use tracing::debug;

/// An operation the ledger refused, and why.
#[derive(Debug, PartialEq)]
pub struct Rejection {
    pub operation: Operation,
    pub error: LedgerError,
}

/// Apply a stream of operations to the ledger, using `workers` threads.
///
/// All the workers share the same ledger, so they exercise exactly the
/// concurrency the ledger is built for: operations on different accounts run
/// in parallel, operations on the same account are serialised by its lock.
/// With a single worker, operations are applied in the order they are
/// received.
///
/// Rejected operations are streamed as we go. Once every worker has
/// finished, i.e. the handles are joined, the ledger holds the final state.
pub fn process(
    service: Arc<LedgerService>,
    operations: Receiver<Operation>,
    workers: usize,
) -> (Receiver<Rejection>, Vec<JoinHandle<()>>) {
    let (rejections_tx, rejections_rx) = mpsc::channel();
    let operations = Arc::new(Mutex::new(operations));

    let handles = (0..workers.max(1))
        .map(|worker| {
            let service = Arc::clone(&service);
            let operations = Arc::clone(&operations);
            let rejections_tx = rejections_tx.clone();

            std::thread::spawn(move || loop {
                // The receiver lock is released before the operation is applied.
                let next = operations
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .recv();
                let Ok(operation) = next else {
                    // The sender is gone: there is nothing left to process.
                    debug!(worker, "no more operations");
                    return;
                };

                match service.apply(&operation) {
                    Ok(Outcome::Account(account)) => debug!(
                        worker,
                        operation = operation.name(),
                        account = account.id,
                        balance = %account.balance,
                        "operation applied"
                    ),
                    Ok(Outcome::Accounts(accounts)) => debug!(
                        worker,
                        operation = operation.name(),
                        accounts = accounts.len(),
                        "operation applied"
                    ),
                    Err(error) => {
                        // Nobody listening for rejections is no reason to stop
                        // processing.
                        let _ = rejections_tx.send(Rejection { operation, error });
                    }
                }
            })
        })
        .collect();

    (rejections_rx, handles)
}

#[cfg(test)]
mod tests {
    use super::{process, Rejection};
    use crate::ledger::{AccountStore, LedgerError, LedgerService, Money, Operation};

    use rust_decimal_macros::dec;
    use std::sync::{mpsc, Arc};

    fn run(operations: Vec<Operation>, workers: usize) -> (Arc<LedgerService>, Vec<Rejection>) {
        let service = Arc::new(LedgerService::new(AccountStore::new(), Money::ZERO));
        let (operations_tx, operations_rx) = mpsc::channel();
        for operation in operations {
            operations_tx.send(operation).unwrap();
        }
        drop(operations_tx);

        let (rejections, handles) = process(Arc::clone(&service), operations_rx, workers);
        for handle in handles {
            handle.join().unwrap();
        }

        (service, rejections.iter().collect())
    }

    #[test]
    fn test_process_sequentially() {
        let (service, rejections) = run(
            vec![
                Operation::Create {
                    initial_amount: Some(dec!(100.00)),
                },
                Operation::Withdraw {
                    id: 1,
                    amount: dec!(30.00),
                },
                Operation::Withdraw {
                    id: 1,
                    amount: dec!(1000.00),
                },
                Operation::Transfer {
                    from: 1,
                    to: 1,
                    amount: dec!(5),
                },
            ],
            1,
        );

        assert_eq!(
            vec![
                Rejection {
                    operation: Operation::Withdraw {
                        id: 1,
                        amount: dec!(1000.00),
                    },
                    error: LedgerError::InsufficientFunds {
                        id: 1,
                        balance: Money::new(dec!(70.00)).unwrap(),
                        requested: Money::new(dec!(1000.00)).unwrap(),
                    },
                },
                Rejection {
                    operation: Operation::Transfer {
                        from: 1,
                        to: 1,
                        amount: dec!(5),
                    },
                    error: LedgerError::TransferToSameAccount(1),
                },
            ],
            rejections
        );
        assert_eq!(dec!(70.00), service.get(1).unwrap().balance.amount());
    }

    #[test]
    fn test_process_with_many_workers() {
        let service = Arc::new(LedgerService::new(AccountStore::new(), Money::ZERO));
        let a = service.create(Some(dec!(500))).unwrap();
        let b = service.create(Some(dec!(500))).unwrap();

        let (operations_tx, operations_rx) = mpsc::channel();
        for i in 0..2_000 {
            let (from, to) = if i % 3 == 0 { (a.id, b.id) } else { (b.id, a.id) };
            operations_tx
                .send(Operation::Transfer {
                    from,
                    to,
                    amount: dec!(1.25),
                })
                .unwrap();
        }
        drop(operations_tx);

        let (rejections, handles) = process(Arc::clone(&service), operations_rx, 4);
        for handle in handles {
            handle.join().unwrap();
        }

        for rejection in rejections.iter() {
            assert!(matches!(
                rejection.error,
                LedgerError::InsufficientFunds { .. }
            ));
        }
        let total = service.get(a.id).unwrap().balance.amount()
            + service.get(b.id).unwrap().balance.amount();
        assert_eq!(dec!(1000), total);
    }

    #[test]
    fn test_process_zero_workers_still_processes() {
        let (service, rejections) = run(vec![Operation::Create { initial_amount: None }], 0);

        assert!(rejections.is_empty());
        assert_eq!(1, service.list_all().len());
    }
}
