use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::registry;
use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::ui::messages::info;
use crate::utils::format::format_amount;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Search { cause } = cmd {
        let store = RecordStore::new(cfg);
        let ngos = store.load_ngos()?;

        let results = registry::find_by_cause(&ngos, cause);

        if results.is_empty() {
            info("No NGOs found for this cause.");
            return Ok(());
        }

        println!("--- NGOs Found ---");
        for ngo in results {
            println!(
                "{} | Donations: {}{}",
                ngo.name,
                cfg.currency,
                format_amount(ngo.donations)
            );
        }
    }
    Ok(())
}
