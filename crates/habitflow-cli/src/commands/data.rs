//! Backup, restore and reset commands.

use std::path::PathBuf;

use clap::Subcommand;
use habitflow_core::{export_file_name, App};

#[derive(Subcommand)]
pub enum DataAction {
    /// Write a dated backup file
    Export {
        /// Directory to write into (defaults to the current directory)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Replace all state from a backup file
    Import {
        /// Backup file path
        file: PathBuf,
    },
    /// Reset everything to defaults
    Clear {
        /// Required confirmation
        #[arg(long)]
        yes: bool,
    },
}

pub fn run(action: DataAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::open()?;

    match action {
        DataAction::Export { out } => {
            let dir = out.unwrap_or_else(|| PathBuf::from("."));
            let path = dir.join(export_file_name(habitflow_core::date::today()));
            std::fs::write(&path, app.export_json()?)?;
            println!("Exported to {}", path.display());
        }
        DataAction::Import { file } => {
            let raw = std::fs::read_to_string(&file)?;
            app.import_json(&raw)?;
            println!(
                "Imported {} habits, {} goals (score {})",
                app.state().habits.len(),
                app.state().goals.len(),
                app.state().score
            );
        }
        DataAction::Clear { yes } => {
            if !yes {
                return Err("refusing to clear without --yes".into());
            }
            app.clear_all();
            println!("All data cleared");
        }
    }
    Ok(())
}
