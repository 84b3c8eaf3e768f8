use crate::ledger::AccountSnapshot;

// Writes the accounts to the given stream, ordered by id so the output is
// stable whatever order the ledger listed them in.
pub fn write(
    output_stream: impl std::io::Write,
    mut accounts: Vec<AccountSnapshot>,
) -> Result<(), csv::Error> {
    accounts.sort_by_key(|account| account.id);

    let mut writer = csv::Writer::from_writer(output_stream);
    for account in accounts {
        writer.serialize(account)?;
    }
    writer.flush()?;

    Ok(())
}
