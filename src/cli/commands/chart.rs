use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::{self, TextChart};
use crate::errors::AppResult;
use crate::store::RecordStore;
use std::path::PathBuf;

/// Render the top-NGO chart without recording a donation.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Chart { top, file } = cmd {
        let store = RecordStore::new(cfg);
        let ngos = store.load_ngos()?;

        let n = top.unwrap_or(cfg.top_chart_entries);
        let top_ngos = report::top_n(&ngos, n);
        let entries = report::chart_entries(&top_ngos);

        let path = file
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| cfg.chart_path());

        let renderer = TextChart {
            currency: cfg.currency.clone(),
            ..TextChart::default()
        };
        let chart = report::write_chart(&renderer, &entries, &path)?;
        println!("{}", chart);
    }
    Ok(())
}
