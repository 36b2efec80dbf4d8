use crate::core::ledger;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{write_csv, write_json};
use crate::export::notify_export_success;
use crate::models::donation::Donation;
use crate::store::RecordStore;
use std::io;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the donation history.
    ///
    /// - `format`: csv | json
    /// - `file`: absolute path of the output file
    /// - `donor` / `ngo`: optional filters, same matching as `history`
    pub fn export(
        store: &RecordStore,
        format: ExportFormat,
        file: &str,
        donor: &Option<String>,
        ngo: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        let history = store.load_donations()?;
        let records: Vec<&Donation> = match (donor, ngo) {
            (Some(d), _) => ledger::find_by_donor(&history, d),
            (None, Some(n)) => ledger::find_by_ngo(&history, n),
            (None, None) => history.iter().collect(),
        };

        match &format {
            ExportFormat::Csv => write_csv(file, &records)?,
            ExportFormat::Json => write_json(file, &records)?,
        }

        notify_export_success(format.as_str(), path);
        Ok(())
    }
}
