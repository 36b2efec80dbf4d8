use crate::core::ledger;
use crate::errors::{AppError, AppResult};
use crate::models::donation::Donation;
use crate::models::ngo::Ngo;
use crate::store::RecordStore;

/// High-level business logic for the `donate` command.
pub struct DonateLogic;

impl DonateLogic {
    /// Run one donation transaction.
    ///
    /// `selection` is 1-indexed against insertion order (the plain listing).
    /// All validation happens before any mutation: a rejected donation
    /// leaves both collections, in memory and on disk, untouched. On
    /// success the NGO total is incremented and persisted, then the ledger
    /// record is appended and persisted. The two writes are independent
    /// (no cross-file transaction).
    pub fn apply(
        store: &RecordStore,
        ngos: &mut Vec<Ngo>,
        history: &mut Vec<Donation>,
        selection: usize,
        donor: &str,
        amount: f64,
    ) -> AppResult<Donation> {
        //
        // 1. Validate the selection
        //
        if ngos.is_empty() {
            return Err(AppError::NoNgos);
        }
        if selection == 0 || selection > ngos.len() {
            return Err(AppError::InvalidSelection(format!(
                "{} is out of range (1-{})",
                selection,
                ngos.len()
            )));
        }

        //
        // 2. Validate the amount
        //
        if !amount.is_finite() || amount <= 0.0 {
            return Err(AppError::InvalidAmount(amount));
        }

        //
        // 3. Commit: update the NGO total and persist
        //
        // Donor may be empty: no validation is performed on it.
        let donor = donor.trim().to_string();

        ngos[selection - 1].donations += amount;
        store.save_ngos(ngos)?;

        //
        // 4. Append the ledger record and persist
        //
        let record = Donation::new(ngos[selection - 1].name.clone(), donor, amount);
        ledger::append(history, store, record.clone())?;

        Ok(record)
    }
}
