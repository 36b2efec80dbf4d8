use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::registry;
use crate::errors::AppResult;
use crate::models::ngo::Ngo;
use crate::store::RecordStore;
use crate::ui::messages::info;
use crate::utils::format::format_amount;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { sorted } = cmd {
        let store = RecordStore::new(cfg);
        let ngos = store.load_ngos()?;

        if ngos.is_empty() {
            info("No NGOs available.");
            return Ok(());
        }

        if *sorted {
            let view = registry::sorted_view(&ngos);
            print_table("Rank", &view, cfg);
            info("Ranked view is display-only: use plain `list` numbers for donate/del.");
        } else {
            let view: Vec<&Ngo> = ngos.iter().collect();
            print_table("#", &view, cfg);
        }
    }
    Ok(())
}

fn print_table(index_header: &str, ngos: &[&Ngo], cfg: &Config) {
    let mut table = Table::new(&[index_header, "Name", "Cause", "Donations"]);
    for (i, ngo) in ngos.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            ngo.name.clone(),
            ngo.cause.clone(),
            format!("{}{}", cfg.currency, format_amount(ngo.donations)),
        ]);
    }
    println!("{}", table.render());
}
