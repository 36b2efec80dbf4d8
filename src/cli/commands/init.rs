use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::ui::messages::success;

/// Create the configuration file, the data directory and the seed storage
/// files.
pub fn handle(cli: &Cli, _cfg: &Config) -> AppResult<()> {
    let cfg = Config::init_all(cli.data_dir.clone(), cli.test)?;

    let store = RecordStore::new(&cfg);
    store.ensure_initialized()?;

    success("ngotrack initialized.");
    Ok(())
}
