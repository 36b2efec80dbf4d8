use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::registry;
use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::ui::messages::success;

/// Add a new NGO to the registry.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { name, cause } = cmd {
        let store = RecordStore::new(cfg);
        let mut ngos = store.load_ngos()?;

        registry::add(&mut ngos, &store, name, cause)?;

        success(format!("NGO '{}' added successfully!", name.trim()));
    }
    Ok(())
}
