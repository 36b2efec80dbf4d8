use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store::RecordStore;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        donor,
        ngo,
        force,
    } = cmd
    {
        let store = RecordStore::new(cfg);
        ExportLogic::export(&store, format.clone(), file, donor, ngo, *force)?;
    }
    Ok(())
}
