use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::donate::DonateLogic;
use crate::core::report::{self, TextChart};
use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::ui::messages::success;

/// Record a donation, then render the top-NGO chart.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Donate { ngo, donor, amount } = cmd {
        let store = RecordStore::new(cfg);
        let mut ngos = store.load_ngos()?;
        let mut history = store.load_donations()?;

        let record = DonateLogic::apply(&store, &mut ngos, &mut history, *ngo, donor, *amount)?;

        if record.donor.is_empty() {
            success("Donation successful.");
        } else {
            success(format!("Thank you {}! Donation successful.", record.donor));
        }

        //
        // Report: chart of the top NGOs by total donations
        //
        let top = report::top_n(&ngos, cfg.top_chart_entries);
        let entries = report::chart_entries(&top);
        let renderer = TextChart {
            currency: cfg.currency.clone(),
            ..TextChart::default()
        };
        let chart = report::write_chart(&renderer, &entries, &cfg.chart_path())?;
        println!("\n{}", chart);
    }
    Ok(())
}
