use crate::errors::{AppError, AppResult};
use crate::models::donation::Donation;
use csv::Writer;

/// Write the donation records as CSV.
pub fn write_csv(path: &str, records: &[&Donation]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(["date", "donor", "ngo", "amount"])?;

    for d in records {
        wtr.write_record(&[
            d.date.clone(),
            d.donor.clone(),
            d.ngo.clone(),
            d.amount.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the donation records as pretty-printed JSON.
pub fn write_json(path: &str, records: &[&Donation]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(records)
        .map_err(|e| AppError::Export(e.to_string()))?;
    std::fs::write(path, json)?;
    Ok(())
}
