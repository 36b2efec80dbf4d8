use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ledger;
use crate::errors::AppResult;
use crate::models::donation::Donation;
use crate::store::RecordStore;
use crate::ui::messages::info;
use crate::utils::format::format_amount;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::History { donor, ngo } = cmd {
        let store = RecordStore::new(cfg);
        let history = store.load_donations()?;

        if history.is_empty() {
            info("No donation history.");
            return Ok(());
        }

        let results: Vec<&Donation> = match (donor, ngo) {
            (Some(d), _) => ledger::find_by_donor(&history, d),
            (None, Some(n)) => ledger::find_by_ngo(&history, n),
            (None, None) => history.iter().collect(),
        };

        if results.is_empty() {
            info("No records found.");
            return Ok(());
        }

        println!("--- Donation History ---");
        for (i, d) in results.iter().enumerate() {
            println!(
                "{}. {} donated {}{} to {} on {}",
                i + 1,
                d.donor,
                cfg.currency,
                format_amount(d.amount),
                d.ngo,
                d.date
            );
        }
    }
    Ok(())
}
