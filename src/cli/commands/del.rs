use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::registry;
use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { index, yes } = cmd {
        let store = RecordStore::new(cfg);
        let mut ngos = store.load_ngos()?;

        //
        // Confirmation prompt
        //
        let name_hint = ngos
            .get(index.wrapping_sub(1))
            .map(|n| format!(" ('{}')", n.name))
            .unwrap_or_default();
        let prompt = format!(
            "Delete NGO #{}{}? Its donation records stay in the history.",
            index, name_hint
        );

        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        //
        // Execute deletion
        //
        let removed = registry::remove_at(&mut ngos, &store, *index)?;
        success(format!("NGO '{}' deleted successfully!", removed.name));
    }
    Ok(())
}
